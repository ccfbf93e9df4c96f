pub use super::customer::Entity as Customer;
pub use super::customer_order::Entity as CustomerOrder;
pub use super::menu_item::Entity as MenuItem;
pub use super::order_item::Entity as OrderItem;
pub use super::owner::Entity as Owner;
pub use super::restaurant::Entity as Restaurant;
