//! Ordering and flattening of dialog file listings.

pub mod flatten;
pub mod natural;
pub mod node;
pub mod sort;

pub use flatten::{get_files, Listing};
pub use natural::natural_compare;
pub use node::{FileNode, IndexedEntry, ObjectId, FOLDER_TYPE};
pub use sort::{compare_files, sort_entries, SortDirection, SortField, SortState};
