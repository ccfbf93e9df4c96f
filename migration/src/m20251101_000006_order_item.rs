use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_customer_order::CustomerOrder;

static IDX_ORDER_ITEM_ORDER_ID: &str = "idx_order_item_order_id";
static FK_ORDER_ITEM_ORDER_ID: &str = "fk_order_item_order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on menu_item_id, orders outlive the menu items they reference
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer(OrderItem::MenuItemId))
                    .col(integer(OrderItem::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_ITEM_ORDER_ID)
                    .table(OrderItem::Table)
                    .col(OrderItem::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_ITEM_ORDER_ID)
                    .from_tbl(OrderItem::Table)
                    .from_col(OrderItem::OrderId)
                    .to_tbl(CustomerOrder::Table)
                    .to_col(CustomerOrder::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_ITEM_ORDER_ID)
                    .table(OrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_ITEM_ORDER_ID)
                    .table(OrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OrderItem {
    Table,
    Id,
    OrderId,
    MenuItemId,
    Quantity,
}
