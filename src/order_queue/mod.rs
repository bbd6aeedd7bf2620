//! Pending orders: a first-in-first-out queue of accepted orders awaiting processing.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::LinkedQueue;
use crate::model::{Order, OrderId, OrderStatus};
use std::fmt::{self, Display};
use tracing::{debug, info, instrument, warn};

/// FIFO of pending [`Order`]s backed by a [`LinkedQueue`].
///
/// Orders leave from the front in the order they were enqueued, or from anywhere
/// by id when cancelled.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    orders: LinkedQueue<Order>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self {
            orders: LinkedQueue::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of pending orders (walks the queue).
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Next order to be processed, without removing it.
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Iterates from the oldest pending order to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub fn enqueue(&mut self, order: Order) -> Result<(), OrderError> {
        debug!(?order, "enqueue called");
        self.orders.push_back(order)?;
        info!("Enqueued");
        Ok(())
    }

    /// Removes the oldest order and marks it [`OrderStatus::Completed`].
    ///
    /// # Errors
    /// Returns [`OrderError::EmptyQueue`] (and logs a warning) when nothing is pending.
    #[instrument(skip(self))]
    pub fn dequeue(&mut self) -> Result<Order, OrderError> {
        let Some(mut order) = self.orders.pop_front() else {
            warn!("Queue is empty");
            return Err(OrderError::EmptyQueue);
        };
        order.set_status(OrderStatus::Completed);
        info!(order_id = %order.id(), "Dequeued");
        Ok(order)
    }

    /// Removes the first pending order with `id`, wherever it sits in the queue.
    #[instrument(skip(self))]
    pub fn delete_order(&mut self, id: OrderId) -> Result<Order, OrderError> {
        match self.orders.remove_by_id(id) {
            Some(order) => {
                info!("Deleted");
                Ok(order)
            }
            None => {
                warn!("Not found");
                Err(OrderError::NotFound(id))
            }
        }
    }

    /// Drops every pending order.
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

impl Display for PendingQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Active Orders ---")?;
        if self.is_empty() {
            writeln!(f, "No active orders")?;
            return writeln!(f);
        }
        for order in self.orders.iter() {
            write!(f, "{}", order)?;
        }
        Ok(())
    }
}
