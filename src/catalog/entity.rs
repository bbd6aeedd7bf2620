//! Entity trait implementation for the MenuItem value type.
//!
//! This lets the generic [`GrowableBuffer`](crate::framework::GrowableBuffer) scan and
//! remove menu items by [`ItemId`].

use crate::framework::Entity;
use crate::model::{ItemId, MenuItem};

impl Entity for MenuItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        MenuItem::id(self)
    }
}
