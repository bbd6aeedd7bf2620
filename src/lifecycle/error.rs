//! Error type for the orchestrator.

use crate::catalog::CatalogError;
use crate::order_history::HistoryError;
use crate::order_queue::OrderError;
use thiserror::Error;

/// Any failure surfaced by [`OrderSystem`](super::OrderSystem).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    History(#[from] HistoryError),
}
