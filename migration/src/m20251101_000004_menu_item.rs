use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_restaurant::Restaurant;

static IDX_MENU_ITEM_RESTAURANT_ID: &str = "idx_menu_item_restaurant_id";
static FK_MENU_ITEM_RESTAURANT_ID: &str = "fk_menu_item_restaurant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::RestaurantId))
                    .col(string(MenuItem::Name))
                    .col(text_null(MenuItem::Description))
                    .col(double(MenuItem::Price))
                    .col(boolean(MenuItem::IsAvailable).default(true))
                    .col(timestamp(MenuItem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENU_ITEM_RESTAURANT_ID)
                    .table(MenuItem::Table)
                    .col(MenuItem::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MENU_ITEM_RESTAURANT_ID)
                    .from_tbl(MenuItem::Table)
                    .from_col(MenuItem::RestaurantId)
                    .to_tbl(Restaurant::Table)
                    .to_col(Restaurant::Id)
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
                    .name(FK_MENU_ITEM_RESTAURANT_ID)
                    .table(MenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENU_ITEM_RESTAURANT_ID)
                    .table(MenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MenuItem {
    Table,
    Id,
    RestaurantId,
    Name,
    Description,
    Price,
    IsAvailable,
    CreatedAt,
}
