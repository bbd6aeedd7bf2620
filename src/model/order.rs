//! Customer orders and their lifecycle status.

use super::{normalize, MenuItem, DEFAULT_CAPACITY};
use crate::framework::{FrameworkError, GrowableBuffer};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identifier for orders. Never negative; negative input is stored as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    pub fn normalized(raw: i32) -> Self {
        Self(normalize::order_id(raw))
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    /// Parses a one-letter status code (`P`/`C`, any case). Unknown codes mean Pending.
    pub fn from_code(code: char) -> Self {
        normalize::status(code)
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A customer order: an id, a customer name, a status and the items ordered.
///
/// Items keep insertion order and may repeat. The item list is an owned
/// [`GrowableBuffer`] starting at [`DEFAULT_CAPACITY`], so cloning an order
/// copies the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    status: OrderStatus,
    items: GrowableBuffer<MenuItem>,
}

impl Order {
    /// Creates a new, empty, pending Order.
    ///
    /// # Arguments
    /// * `id` - Order number; negative values are stored as `0`
    /// * `customer_name` - Name the order is placed under
    pub fn new(id: i32, customer_name: impl Into<String>) -> Self {
        Self::with_id(OrderId::normalized(id), customer_name)
    }

    /// Creates a new, empty, pending Order under an already-valid id.
    pub fn with_id(id: OrderId, customer_name: impl Into<String>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            status: OrderStatus::Pending,
            items: GrowableBuffer::with_capacity(DEFAULT_CAPACITY),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = OrderId::normalized(id);
    }

    pub fn set_customer_name(&mut self, customer_name: impl Into<String>) {
        self.customer_name = customer_name.into();
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Sets the status from a one-letter code; see [`OrderStatus::from_code`].
    pub fn set_status_code(&mut self, code: char) {
        self.status = OrderStatus::from_code(code);
    }

    /// Appends an item, doubling the item list's capacity when it is full.
    pub fn add_item(&mut self, item: MenuItem) -> Result<(), FrameworkError> {
        self.items.push(item)
    }

    /// Returns the item at `index`.
    ///
    /// # Panics
    /// Panics if `index >= item_count()`. Reading past the end is a caller bug,
    /// not a recoverable condition.
    pub fn item(&self, index: usize) -> &MenuItem {
        match self.items.get(index) {
            Some(item) => item,
            None => panic!(
                "order {} has {} items, index {} is out of range",
                self.id,
                self.items.len(),
                index
            ),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item_capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices. No tax or discount is applied.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(MenuItem::price).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new(0, "")
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order ID: {}, Customer: {}", self.id, self.customer_name)?;
        writeln!(f, "Items: ")?;
        for item in self.items.iter() {
            writeln!(f, "  - {} (${})", item.name(), item.price())?;
        }
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(id: i32, name: &str, price: f64) -> MenuItem {
        MenuItem::new(id, name, "test", price)
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(-4, "Alice");
        assert_eq!(order.id(), OrderId(0));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.is_empty());
        assert_eq!(order.item_capacity(), DEFAULT_CAPACITY);
        assert_eq!(order.total_amount(), 0.0);
    }

    #[test]
    fn test_items_grow_past_initial_capacity() {
        let mut order = Order::new(1, "Bob");
        for i in 0..11 {
            order.add_item(priced(i, "Fries", 1.0)).unwrap();
        }
        assert_eq!(order.item_count(), 11);
        assert_eq!(order.item_capacity(), 2 * DEFAULT_CAPACITY);
        assert_eq!(order.total_amount(), 11.0);
    }

    #[test]
    fn test_duplicates_keep_insertion_order() {
        let mut order = Order::new(2, "Cara");
        order.add_item(priced(1, "Soda", 1.5)).unwrap();
        order.add_item(priced(2, "Fries", 2.0)).unwrap();
        order.add_item(priced(1, "Soda", 1.5)).unwrap();

        let names: Vec<_> = order.items().map(MenuItem::name).collect();
        assert_eq!(names, vec!["Soda", "Fries", "Soda"]);
        assert_eq!(order.item(2).name(), "Soda");
        assert_eq!(order.total_amount(), 5.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_item_out_of_range_panics() {
        let order = Order::new(3, "Dan");
        order.item(0);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Order::new(4, "Eve");
        original.add_item(priced(1, "Soda", 1.5)).unwrap();

        let mut copy = original.clone();
        copy.add_item(priced(2, "Fries", 2.0)).unwrap();
        copy.set_status(OrderStatus::Completed);

        assert_eq!(original.item_count(), 1);
        assert_eq!(original.status(), OrderStatus::Pending);
        assert_eq!(copy.item_count(), 2);
    }

    #[test]
    fn test_status_codes() {
        let mut order = Order::default();
        order.set_status_code('c');
        assert_eq!(order.status(), OrderStatus::Completed);
        order.set_status_code('?');
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_display_block() {
        let mut order = Order::new(5, "Alice");
        order.add_item(priced(1, "Soda", 1.5)).unwrap();
        order.set_status(OrderStatus::Completed);

        let expected = "Order ID: 5, Customer: Alice\n\
                        Items: \n  - Soda ($1.5)\n\
                        Status: Completed\n\n";
        assert_eq!(order.to_string(), expected);
    }
}
