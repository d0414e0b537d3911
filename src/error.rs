//! Error types for rs-decryptor.
//!
//! Only a missing header element stops the core pipeline. The remaining
//! variants belong to the output writer.

use std::path::PathBuf;

/// Error type for decryption and output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required header selector matched no element.
    #[error("required element `{field}` not found (selector `{selector}`)")]
    MissingElement {
        /// Which header field was being extracted.
        field: &'static str,
        /// The CSS selector that matched nothing.
        selector: String,
    },

    /// The first block cannot be turned into a file name.
    #[error("article title {0:?} does not yield a usable file name")]
    InvalidTitle(String),

    /// Writing the output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for decryption operations.
pub type Result<T> = std::result::Result<T, Error>;
