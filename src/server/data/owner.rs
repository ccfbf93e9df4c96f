use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::OwnerModel;

pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, owner_id: i32) -> Result<Option<OwnerModel>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id).one(self.db).await
    }

    /// Finds the owner a session token was issued to
    pub async fn get_by_user_name(&self, user_name: &str) -> Result<Option<OwnerModel>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::UserName.eq(user_name))
            .one(self.db)
            .await
    }
}
