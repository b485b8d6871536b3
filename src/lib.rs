#![forbid(unsafe_code)]
//! Ordering and search-result flattening for the file list of an open/save
//! dialog.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod listing;
pub mod logging;
pub mod rename;
pub mod search;
