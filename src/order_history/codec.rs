//! Export format for completed orders.
//!
//! ```text
//! 5,Alice,"Soda:1.5&Fries:2",3.5
//! 4,Bob,"Burger:5",5
//! Total revenue is: $8.5
//! ```
//!
//! Item names are written as-is; a `:`, `&` or `"` inside a name is not escaped.

use crate::framework::{CodecError, RecordEncoder};
use crate::model::Order;

/// `orderId,customerName,"name:price&name:price",total`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletedOrderLine;

impl RecordEncoder for CompletedOrderLine {
    type Record = Order;

    fn encode(&self, order: &Order) -> Result<String, CodecError> {
        let items = order
            .items()
            .map(|item| format!("{}:{}", item.name(), item.price()))
            .collect::<Vec<_>>()
            .join("&");
        Ok(format!(
            "{},{},\"{}\",{}",
            order.id(),
            order.customer_name(),
            items,
            order.total_amount()
        ))
    }
}

/// Trailing summary line of an export.
pub fn revenue_line(total: f64) -> String {
    format!("Total revenue is: ${}", total)
}
