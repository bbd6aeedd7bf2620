//! Completed orders: a last-in-first-out history with revenue totals and export.

pub mod codec;
pub mod error;

pub use codec::*;
pub use error::*;

use crate::framework::{LinkedStack, RecordEncoder};
use crate::model::Order;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// LIFO of processed [`Order`]s backed by a [`LinkedStack`].
///
/// Index 0 is always the most recently completed order. Neither the size nor the
/// revenue is cached; both are computed by walking the stack.
#[derive(Debug, Default)]
pub struct CompletedHistory {
    orders: LinkedStack<Order>,
}

impl CompletedHistory {
    pub fn new() -> Self {
        Self {
            orders: LinkedStack::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of completed orders, counted by traversal.
    pub fn size(&self) -> usize {
        self.orders.len()
    }

    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub fn push(&mut self, order: Order) {
        debug!(?order, "push called");
        self.orders.push(order);
        info!("Pushed");
    }

    /// Removes and returns the most recently completed order.
    #[instrument(skip(self))]
    pub fn pop(&mut self) -> Result<Order, HistoryError> {
        match self.orders.pop() {
            Some(order) => {
                info!(order_id = %order.id(), "Popped");
                Ok(order)
            }
            None => {
                warn!("No completed orders");
                Err(HistoryError::Empty)
            }
        }
    }

    /// The order `index` positions below the top, or `None` past the bottom.
    pub fn get_order(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    pub fn peek(&self) -> Option<&Order> {
        self.orders.peek()
    }

    /// Iterates from the most recent order to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Sum of every stored order's total.
    pub fn total_revenue(&self) -> f64 {
        self.orders.iter().map(Order::total_amount).sum()
    }

    /// Exports every order (newest first) followed by the revenue summary line.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), HistoryError> {
        self.save_with(path, &CompletedOrderLine)
    }

    /// Exports every order encoded with `codec`, then the revenue summary line.
    #[instrument(skip(self, path, codec), fields(path = %path.as_ref().display()))]
    pub fn save_with<C>(&self, path: impl AsRef<Path>, codec: &C) -> Result<(), HistoryError>
    where
        C: RecordEncoder<Record = Order>,
    {
        let path = path.as_ref();
        let mut contents = String::new();
        for (record, order) in self.orders.iter().enumerate() {
            let line = codec
                .encode(order)
                .map_err(|source| HistoryError::Codec { record, source })?;
            contents.push_str(&line);
            contents.push('\n');
        }
        contents.push_str(&revenue_line(self.total_revenue()));
        contents.push('\n');

        if let Err(e) = fs::write(path, contents) {
            error!(error = %e, "Could not write completed orders");
            return Err(HistoryError::io(path, e));
        }
        info!(size = self.size(), "Saved");
        Ok(())
    }

    /// Drops every completed order.
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

impl Display for CompletedHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Completed Orders ---")?;
        if self.is_empty() {
            writeln!(f, "No completed orders")?;
            return writeln!(f);
        }
        for order in self.orders.iter() {
            write!(f, "{}", order)?;
        }
        Ok(())
    }
}
