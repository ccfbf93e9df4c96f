use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_owner::Owner;

static IDX_RESTAURANT_OWNER_ID: &str = "idx_restaurant_owner_id";
static FK_RESTAURANT_OWNER_ID: &str = "fk_restaurant_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(integer(Restaurant::OwnerId))
                    .col(string(Restaurant::OwnerName))
                    .col(string_uniq(Restaurant::Email))
                    .col(string_null(Restaurant::Password))
                    .col(string(Restaurant::RestaurantName))
                    .col(string(Restaurant::RestaurantPhone))
                    .col(string(Restaurant::RestaurantAddress))
                    .col(string(Restaurant::RestaurantZip))
                    .col(timestamp(Restaurant::CreatedAt))
                    .col(timestamp(Restaurant::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESTAURANT_OWNER_ID)
                    .table(Restaurant::Table)
                    .col(Restaurant::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESTAURANT_OWNER_ID)
                    .from_tbl(Restaurant::Table)
                    .from_col(Restaurant::OwnerId)
                    .to_tbl(Owner::Table)
                    .to_col(Owner::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESTAURANT_OWNER_ID)
                    .table(Restaurant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESTAURANT_OWNER_ID)
                    .table(Restaurant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    OwnerId,
    OwnerName,
    Email,
    Password,
    RestaurantName,
    RestaurantPhone,
    RestaurantAddress,
    RestaurantZip,
    CreatedAt,
    UpdatedAt,
}
