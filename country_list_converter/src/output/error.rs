//!
//! The converter output error.
//!

use std::path::PathBuf;

///
/// Output document encoding or writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error encoding the list as JSON.
    #[error("Encoding output document: {error}")]
    Encoding {
        /// The underlying JSON serialization error.
        error: serde_json::Error,
    },
    /// Error writing the output file.
    #[error("Writing output file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Encoding { error }
    }
}
