pub use sea_orm_migration::prelude::*;

mod m20251101_000001_owner;
mod m20251101_000002_customer;
mod m20251101_000003_restaurant;
mod m20251101_000004_menu_item;
mod m20251101_000005_customer_order;
mod m20251101_000006_order_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_owner::Migration),
            Box::new(m20251101_000002_customer::Migration),
            Box::new(m20251101_000003_restaurant::Migration),
            Box::new(m20251101_000004_menu_item::Migration),
            Box::new(m20251101_000005_customer_order::Migration),
            Box::new(m20251101_000006_order_item::Migration),
        ]
    }
}
