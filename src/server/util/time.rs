//! Date and time formatting for order listings.

use chrono::NaiveDateTime;

/// Formats the date an order was placed as `M/D/YYYY`, e.g. `3/5/2024`
pub fn format_order_date(created: NaiveDateTime) -> String {
    created.format("%-m/%-d/%Y").to_string()
}

/// Formats the time an order was placed as `H:MM:SS AM|PM`, e.g. `2:07:09 PM`
pub fn format_order_time(created: NaiveDateTime) -> String {
    created.format("%-I:%M:%S %p").to_string()
}
