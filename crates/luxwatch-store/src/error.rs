use std::path::PathBuf;

use thiserror::Error;

/// Errors from persisting cart and wishlist state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a storage file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage keys become file names, so they are restricted.
    #[error("invalid storage key \"{key}\": only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidKey { key: String },

    /// State could not be encoded for storage.
    #[error("JSON serialization error for {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
