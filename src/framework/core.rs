//! # Core Container Framework
//!
//! This module defines the contract shared by every value the containers manage.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all stored values must implement.
//! - [`FrameworkError`]: Errors raised by the container engine itself (allocation).

use std::fmt::{Debug, Display};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any value stored in a keyed container must implement.
///
/// # Architecture Note
/// The catalog looks items up by [`ItemId`](crate::model::ItemId) and the pending queue
/// removes orders by [`OrderId`](crate::model::OrderId). Both are "find the first element
/// whose id matches" scans, so the scan is written once against this trait and reused.
///
/// The associated `Id` type keeps the two apart: you can't ask the queue to remove an
/// `ItemId`, the compiler rejects it.
pub trait Entity: Clone + Debug {
    /// The identifier for this value (e.g., `ItemId`, `OrderId`).
    /// Uniqueness is not enforced by the containers.
    type Id: Copy + Eq + Debug + Display;

    /// Returns the identifier used for lookups and removals.
    fn id(&self) -> Self::Id;
}

// =============================================================================
// 2. THE ENGINE ERRORS
// =============================================================================

/// Errors that can occur within the container engine itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    /// Growing the backing storage failed; the container is unchanged.
    #[error("Memory allocation failed (requested capacity {requested})")]
    AllocationFailed { requested: usize },
}

/// Extracts the short type name (e.g., "MenuItem" instead of "order_desk::model::menu_item::MenuItem").
pub(crate) fn short_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
