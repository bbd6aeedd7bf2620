use super::{SystemConfig, SystemError};
use crate::catalog::Catalog;
use crate::model::{ItemId, MenuItem, Order, OrderId};
use crate::order_history::CompletedHistory;
use crate::order_queue::{OrderError, PendingQueue};
use chrono::NaiveDate;
use std::fmt::{self, Display};
use std::path::PathBuf;
use tracing::{error, info, instrument, warn};

/// The orchestrator for the restaurant's menu and orders.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Loading the menu at startup and saving it at shutdown
/// - **Id Assignment**: Handing out item and order ids monotonically
/// - **Order Flow**: Pending queue → processing → completed history
///
/// # Architecture
///
/// The system owns three containers for its whole lifetime:
/// - **Catalog**: The menu items customers can order
/// - **PendingQueue**: Accepted orders waiting to be processed, oldest first
/// - **CompletedHistory**: Processed orders, newest on top, used for revenue
///
/// # Example
///
/// ```ignore
/// let mut system = OrderSystem::start(SystemConfig::from_env());
///
/// let soda = system.add_menu_item("Soda", "Cold drink", 1.50)?;
/// let order_id = system.place_order("Alice", &[soda.id()])?;
/// let done = system.process_next_order()?;
///
/// system.shutdown()?;
/// ```
#[derive(Debug)]
pub struct OrderSystem {
    catalog: Catalog,
    pending: PendingQueue,
    completed: CompletedHistory,
    config: SystemConfig,
    next_item_id: ItemId,
    next_order_id: OrderId,
    /// Cleared when an existing menu file failed to load, so shutdown leaves it alone.
    overwrite_menu: bool,
}

impl OrderSystem {
    /// Creates a system with an empty menu and no orders. Nothing is read from disk.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            catalog: Catalog::with_capacity(config.catalog_capacity),
            pending: PendingQueue::new(),
            completed: CompletedHistory::new(),
            config,
            next_item_id: ItemId(1),
            next_order_id: OrderId(1),
            overwrite_menu: true,
        }
    }

    /// Creates a system and loads the menu from `config.menu_file`.
    ///
    /// A missing or unreadable menu file is logged and the system starts with whatever
    /// was loaded, usually nothing. If the file exists but could not be loaded it is
    /// not overwritten by [`shutdown`](Self::shutdown). New item ids continue after the
    /// last loaded item.
    #[instrument(skip(config), fields(menu_file = %config.menu_file.display()))]
    pub fn start(config: SystemConfig) -> Self {
        let mut system = Self::new(config);

        if let Err(e) = system.catalog.load_from_file(&system.config.menu_file) {
            if system.config.menu_file.exists() {
                system.overwrite_menu = false;
                error!(error = %e, "Menu file could not be loaded and will be left as is");
            } else {
                warn!(error = %e, "No menu file, starting with an empty menu");
            }
        }
        if let Some(last) = system.catalog.last_item_id() {
            system.next_item_id = last.next();
        }

        info!(
            items = system.catalog.len(),
            next_item_id = %system.next_item_id,
            "System started"
        );
        system
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    pub fn completed(&self) -> &CompletedHistory {
        &self.completed
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Id the next added menu item will receive.
    pub fn next_item_id(&self) -> ItemId {
        self.next_item_id
    }

    /// Id the next accepted order will receive.
    pub fn next_order_id(&self) -> OrderId {
        self.next_order_id
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Adds an item under the next item id and returns a copy of it.
    #[instrument(skip(self, name, description))]
    pub fn add_menu_item(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<MenuItem, SystemError> {
        let item = MenuItem::new(self.next_item_id.0, name, description, price);
        self.catalog.add_item(item.clone())?;
        self.next_item_id = self.next_item_id.next();
        Ok(item)
    }

    pub fn delete_menu_item(&mut self, id: ItemId) -> Result<MenuItem, SystemError> {
        Ok(self.catalog.delete_item(id)?)
    }

    /// Empties the menu. Item ids keep counting from where they were.
    pub fn reset_menu(&mut self) {
        self.catalog.reset();
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Builds an order from `item_ids` and appends it to the pending queue.
    ///
    /// Ids that aren't on the menu are logged and skipped. If none are valid the
    /// order is rejected with [`OrderError::NoValidItems`] and no order id is used.
    #[instrument(skip(self, customer_name, item_ids))]
    pub fn place_order(
        &mut self,
        customer_name: impl Into<String>,
        item_ids: &[ItemId],
    ) -> Result<OrderId, SystemError> {
        let order_id = self.next_order_id;
        let mut order = Order::with_id(order_id, customer_name);

        for &item_id in item_ids {
            match self.catalog.get_item_by_id(item_id) {
                Some(item) => order.add_item(item).map_err(OrderError::from)?,
                None => warn!(%item_id, "Item not found, skipped"),
            }
        }

        if order.is_empty() {
            warn!("No valid items, order not created");
            return Err(OrderError::NoValidItems.into());
        }

        let items = order.item_count();
        self.pending.enqueue(order)?;
        self.next_order_id = order_id.next();
        info!(%order_id, items, "Order placed");
        Ok(order_id)
    }

    /// Moves the oldest pending order into the completed history and returns a copy.
    #[instrument(skip(self))]
    pub fn process_next_order(&mut self) -> Result<Order, SystemError> {
        let order = self.pending.dequeue()?;
        info!(order_id = %order.id(), customer = order.customer_name(), "Processing order");
        self.completed.push(order.clone());
        Ok(order)
    }

    /// Removes a pending order before it is processed.
    pub fn cancel_order(&mut self, id: OrderId) -> Result<Order, SystemError> {
        Ok(self.pending.delete_order(id)?)
    }

    /// Per-order totals in completion order plus the overall revenue.
    pub fn revenue_report(&self) -> RevenueReport {
        let size = self.completed.size();
        let order_totals = (0..size)
            .rev()
            .filter_map(|index| self.completed.get_order(index))
            .map(Order::total_amount)
            .collect();

        RevenueReport {
            order_totals,
            total: self.completed.total_revenue(),
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Writes the completed history to the dated export file for `date`.
    #[instrument(skip(self))]
    pub fn save_completed_orders(&self, date: NaiveDate) -> Result<PathBuf, SystemError> {
        let path = self.config.completed_orders_path(date);
        self.completed.save_to_file(&path)?;
        info!(path = %path.display(), "Completed orders exported");
        Ok(path)
    }

    /// Writes the menu back to `config.menu_file`.
    pub fn save_menu(&self) -> Result<(), SystemError> {
        Ok(self.catalog.save_to_file(&self.config.menu_file)?)
    }

    /// Saves the menu and releases every container.
    ///
    /// The menu is not saved when [`start`](Self::start) found a menu file it could not load.
    pub fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        if self.overwrite_menu {
            self.save_menu()?;
        } else {
            warn!(
                menu_file = %self.config.menu_file.display(),
                "Menu not saved, the existing file failed to load"
            );
        }
        info!(
            pending = self.pending.len(),
            completed = self.completed.size(),
            "System shutdown complete."
        );
        Ok(())
    }
}

/// Revenue summary of the completed history.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    /// Total of each completed order, oldest first.
    pub order_totals: Vec<f64>,
    /// Sum over every completed order.
    pub total: f64,
}

impl Display for RevenueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Total Revenue ---")?;
        for (index, total) in self.order_totals.iter().enumerate() {
            writeln!(f, "Order {}: ${}", index + 1, total)?;
        }
        writeln!(f, "Total Sold: ${}", self.total)
    }
}
