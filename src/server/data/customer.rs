use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::CustomerModel;

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::UserName.eq(user_name))
            .one(self.db)
            .await
    }
}
