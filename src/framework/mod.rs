//! Generic container engine.
//!
//! This module provides the building blocks the restaurant containers are made of.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that stored values implement so containers can match them by id
//! - [`GrowableBuffer`] - Owned array with doubling growth (catalog, order items)
//! - [`LinkedQueue`] - Arena-indexed singly-linked FIFO (pending orders)
//! - [`LinkedStack`] - Boxed singly-linked LIFO (completed orders)
//! - [`RecordEncoder`] / [`RecordDecoder`] - Line codecs used for persistence
//! - [`FrameworkError`] / [`CodecError`] - Common error types

pub mod buffer;
pub mod codec;
pub mod core;
pub mod linked;

// Re-export core types for convenience
pub use self::buffer::*;
pub use self::codec::*;
pub use self::core::*;
pub use self::linked::*;
