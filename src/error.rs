use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, ListingError>;

/// Listing error types.
#[derive(Debug, Error)]
pub enum ListingError {
    /// I/O errors while reading listings or config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A listing document that is not valid JSON for a file tree.
    #[error("Invalid listing: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// No node with the given path exists in the current folder.
    #[error("No such entry: {0}")]
    NotFound(String),

    /// The rename backend rejected a rename.
    #[error("Failed to rename {name}: {message}")]
    Rename { name: String, message: String },
}
