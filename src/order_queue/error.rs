//! Error types for pending orders.

use crate::framework::FrameworkError;
use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur while placing or processing orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No pending order carries the requested id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// There is nothing left to dequeue.
    #[error("Queue is empty")]
    EmptyQueue,

    /// None of the requested item ids exist on the menu.
    #[error("No valid items were added, order not created")]
    NoValidItems,

    /// The order's item list could not grow.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
