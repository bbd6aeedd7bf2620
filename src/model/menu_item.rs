//! Purchasable menu items.
//!
//! [`MenuItem`] implements the [`Entity`](crate::framework::Entity) trait (see
//! [`crate::catalog::entity`]), allowing it to be stored in a
//! [`Catalog`](crate::catalog::Catalog) and looked up by [`ItemId`].

use super::normalize;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identifier for menu items.
///
/// `-1` ([`ItemId::NOT_FOUND`]) is a legal stored value but is reserved by convention
/// for "no such item"; the catalog reports misses with `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i32);

impl ItemId {
    pub const NOT_FOUND: ItemId = ItemId(-1);

    /// Applies the item id rule: anything below `-1` becomes `0`.
    pub fn normalized(raw: i32) -> Self {
        Self(normalize::item_id(raw))
    }

    /// The id that follows this one when ids are handed out monotonically.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a purchasable item on the menu.
///
/// Fields are private so every write goes through the normalizing setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MenuItemFields")]
pub struct MenuItem {
    id: ItemId,
    name: String,
    description: String,
    price: f64,
}

/// Raw shape accepted by deserialization, normalized through [`MenuItem::new`].
#[derive(Deserialize)]
struct MenuItemFields {
    id: i32,
    name: String,
    description: String,
    price: f64,
}

impl From<MenuItemFields> for MenuItem {
    fn from(fields: MenuItemFields) -> Self {
        MenuItem::new(fields.id, fields.name, fields.description, fields.price)
    }
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `id` - Identifier; values below `-1` are stored as `0`
    /// * `name` - Display name
    /// * `description` - Free text description
    /// * `price` - Unit price; non-positive values are stored as `0.99`
    pub fn new(
        id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: ItemId::normalized(id),
            name: name.into(),
            description: description.into(),
            price: normalize::price(price),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = ItemId::normalized(id);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = normalize::price(price);
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self::new(0, "undefined", "undefined", 0.0)
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ID: {}, Name: {}, Price: ${}",
            self.id, self.name, self.price
        )
    }
}
