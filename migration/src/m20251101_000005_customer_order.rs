use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_customer::Customer, m20251101_000003_restaurant::Restaurant,
};

static IDX_CUSTOMER_ORDER_RESTAURANT_ID: &str = "idx_customer_order_restaurant_id";
static FK_CUSTOMER_ORDER_RESTAURANT_ID: &str = "fk_customer_order_restaurant_id";
static FK_CUSTOMER_ORDER_CUSTOMER_ID: &str = "fk_customer_order_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerOrder::Id))
                    .col(integer(CustomerOrder::RestaurantId))
                    .col(integer(CustomerOrder::CustomerId))
                    .col(double(CustomerOrder::OrderTotal))
                    .col(string(CustomerOrder::OrderStatus))
                    .col(string_null(CustomerOrder::ExpectedPickUpTime))
                    .col(text_null(CustomerOrder::TableRequests))
                    .col(timestamp(CustomerOrder::CreatedDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_ORDER_RESTAURANT_ID)
                    .table(CustomerOrder::Table)
                    .col(CustomerOrder::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_ORDER_RESTAURANT_ID)
                    .from_tbl(CustomerOrder::Table)
                    .from_col(CustomerOrder::RestaurantId)
                    .to_tbl(Restaurant::Table)
                    .to_col(Restaurant::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_ORDER_CUSTOMER_ID)
                    .from_tbl(CustomerOrder::Table)
                    .from_col(CustomerOrder::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CUSTOMER_ORDER_CUSTOMER_ID)
                    .table(CustomerOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CUSTOMER_ORDER_RESTAURANT_ID)
                    .table(CustomerOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_ORDER_RESTAURANT_ID)
                    .table(CustomerOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CustomerOrder {
    Table,
    Id,
    RestaurantId,
    CustomerId,
    OrderTotal,
    OrderStatus,
    ExpectedPickUpTime,
    TableRequests,
    CreatedDate,
}
