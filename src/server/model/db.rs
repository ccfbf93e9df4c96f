//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Restaurant owner account.
pub type OwnerModel = entity::owner::Model;

/// Customer account placing orders.
pub type CustomerModel = entity::customer::Model;

/// Restaurant owned by an owner, `password` holds the bcrypt hash used for restaurant login.
pub type RestaurantModel = entity::restaurant::Model;

/// Menu item belonging to a restaurant.
pub type MenuItemModel = entity::menu_item::Model;

/// Customer order placed at a restaurant.
pub type OrderModel = entity::customer_order::Model;

/// Quantity of a menu item within an order.
pub type OrderItemModel = entity::order_item::Model;
