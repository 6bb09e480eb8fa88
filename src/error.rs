use std::io;
use std::path::PathBuf;

/// Errors raised while constructing a [`Logger`](crate::Logger).
///
/// Logging calls themselves never produce this type; a failed write is
/// either swallowed or, for the `try_*` methods, returned as `io::Error`.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An output path was given but it was the empty string.
    #[error("invalid output path: path is empty")]
    EmptyPath,

    /// The output file could not be opened for appending.
    #[error("failed to open log file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoggerError {
    /// True for a misconfiguration rather than an I/O failure.
    pub fn is_config(&self) -> bool {
        matches!(self, LoggerError::EmptyPath)
    }
}
