//! Error types for completed orders.

use crate::framework::CodecError;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur on the completed-order history.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    /// There is no completed order to pop.
    #[error("No completed orders")]
    Empty,

    /// The export file could not be opened or written.
    #[error("Could not open file {path}: {message}")]
    Io { path: String, message: String },

    /// An order could not be encoded for export.
    #[error("Record {record}: {source}")]
    Codec {
        record: usize,
        #[source]
        source: CodecError,
    },
}

impl HistoryError {
    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        HistoryError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
