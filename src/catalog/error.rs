//! Error types for the Catalog.

use crate::framework::{CodecError, FrameworkError};
use crate::model::ItemId;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No menu item carries the requested id.
    #[error("Menu item not found: {0}")]
    NotFound(ItemId),

    /// The catalog file could not be opened, read or written.
    #[error("Could not open file {path}: {message}")]
    Io { path: String, message: String },

    /// A record could not be encoded for writing.
    #[error("Record {record}: {source}")]
    Codec {
        record: usize,
        #[source]
        source: CodecError,
    },

    /// The backing storage could not grow.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl CatalogError {
    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
