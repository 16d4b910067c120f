//! Error types for the latex2wordpress library.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    /// A label is referenced in the document but has no entry in the label
    /// table built from the `.aux` file. An equation block with no label at
    /// all is fine; only referencing a label that cannot be resolved fails.
    #[error("unresolved label: {0}")]
    UnresolvedLabel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
