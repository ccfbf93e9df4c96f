//! Database fixtures inserted during test execution.
//!
//! - `owner` - owner and customer accounts
//! - `restaurant` - restaurants and their menu items
//! - `order` - customer orders and their order items

pub mod order;
pub mod owner;
pub mod restaurant;
