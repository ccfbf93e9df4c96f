use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::MenuItemModel;

pub struct MenuItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every menu item of a restaurant, available or not, in insertion order
    pub async fn get_many_by_restaurant_id(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<MenuItemModel>, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Menu items matching the provided IDs, IDs with no menu item are left out
    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<MenuItemModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
