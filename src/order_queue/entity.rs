//! Entity trait implementation for the Order value type.
//!
//! This lets the generic [`LinkedQueue`](crate::framework::LinkedQueue) unlink orders
//! by [`OrderId`].

use crate::framework::Entity;
use crate::model::{Order, OrderId};

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        Order::id(self)
    }
}
