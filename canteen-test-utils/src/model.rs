//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main canteen crate.

pub type OwnerModel = entity::owner::Model;

pub type CustomerModel = entity::customer::Model;

pub type RestaurantModel = entity::restaurant::Model;

pub type MenuItemModel = entity::menu_item::Model;

pub type OrderModel = entity::customer_order::Model;

pub type OrderItemModel = entity::order_item::Model;
