//! Value types managed by the containers: [`MenuItem`] and [`Order`].
//!
//! Every normalization rule for raw input lives in [`normalize`], so the clamping
//! thresholds can be tested in one place.

pub mod menu_item;
pub mod normalize;
pub mod order;

pub use menu_item::*;
pub use order::*;

/// Starting capacity for the catalog and for each order's item list.
pub const DEFAULT_CAPACITY: usize = 10;
