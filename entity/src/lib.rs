//! SeaORM entities for the canteen database.

pub mod prelude;

pub mod customer;
pub mod customer_order;
pub mod menu_item;
pub mod order_item;
pub mod owner;
pub mod restaurant;
