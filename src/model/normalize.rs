//! Input normalization.
//!
//! Out-of-range input is never rejected; it is silently replaced with a safe value.
//!
//! | Field         | Rule                               |
//! |---------------|------------------------------------|
//! | item id       | `< -1` becomes `0` (`-1` is kept)  |
//! | order id      | `< 0` becomes `0`                  |
//! | price         | `<= 0` (or NaN) becomes `0.99`     |
//! | status code   | anything but `p`/`c` is Pending    |

use super::OrderStatus;

/// Price substituted for non-positive input.
pub const FALLBACK_PRICE: f64 = 0.99;

/// Lowest item id stored as given. `-1` is reserved for "not found".
pub const MIN_ITEM_ID: i32 = -1;

pub fn item_id(raw: i32) -> i32 {
    if raw < MIN_ITEM_ID {
        0
    } else {
        raw
    }
}

pub fn order_id(raw: i32) -> u32 {
    u32::try_from(raw).unwrap_or(0)
}

pub fn price(raw: f64) -> f64 {
    if raw > 0.0 {
        raw
    } else {
        FALLBACK_PRICE
    }
}

pub fn status(code: char) -> OrderStatus {
    match code.to_ascii_uppercase() {
        'C' => OrderStatus::Completed,
        _ => OrderStatus::Pending,
    }
}
