//! Unified error type for all store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Things that can go wrong when touching the file.
///
/// Every variant carries the path it happened on, so a caller juggling several
/// stores can tell the reports apart. A queried key that simply isn't in the
/// document is never an error — the read operations signal that with an empty
/// result.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The file (or, for `create`, its parent directory) does not exist.
    #[error("{} does not exist", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file content is not a valid JSON object.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying syntax error.
        #[source]
        source: serde_json::Error,
    },

    /// An underlying read, write, or delete call failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File the operation was addressing.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
