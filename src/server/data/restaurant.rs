use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::restaurant::UpdateRestaurantDto, server::model::db::RestaurantModel};

/// Validated fields of a restaurant about to be stored
pub struct NewRestaurant {
    pub owner_id: i32,
    pub owner_name: String,
    pub email: String,
    /// bcrypt hash of the restaurant login password
    pub password: Option<String>,
    pub restaurant_name: String,
    pub restaurant_phone: String,
    pub restaurant_address: String,
    pub restaurant_zip: String,
}

pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    /// Creates a new instance of [`RestaurantRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, restaurant: NewRestaurant) -> Result<RestaurantModel, DbErr> {
        let now = Utc::now().naive_utc();

        let restaurant = entity::restaurant::ActiveModel {
            owner_id: ActiveValue::Set(restaurant.owner_id),
            owner_name: ActiveValue::Set(restaurant.owner_name),
            email: ActiveValue::Set(restaurant.email),
            password: ActiveValue::Set(restaurant.password),
            restaurant_name: ActiveValue::Set(restaurant.restaurant_name),
            restaurant_phone: ActiveValue::Set(restaurant.restaurant_phone),
            restaurant_address: ActiveValue::Set(restaurant.restaurant_address),
            restaurant_zip: ActiveValue::Set(restaurant.restaurant_zip),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        restaurant.insert(self.db).await
    }

    pub async fn get(&self, restaurant_id: i32) -> Result<Option<RestaurantModel>, DbErr> {
        entity::prelude::Restaurant::find_by_id(restaurant_id)
            .one(self.db)
            .await
    }

    /// The first restaurant registered by an owner
    pub async fn get_by_owner_id(&self, owner_id: i32) -> Result<Option<RestaurantModel>, DbErr> {
        entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::restaurant::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<RestaurantModel>, DbErr> {
        entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<RestaurantModel>, DbErr> {
        entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to the restaurant, absent fields are left unchanged
    pub async fn update(
        &self,
        restaurant: RestaurantModel,
        changes: UpdateRestaurantDto,
    ) -> Result<RestaurantModel, DbErr> {
        let mut restaurant = restaurant.into_active_model();

        if let Some(email) = changes.email {
            restaurant.email = ActiveValue::Set(email);
        }
        if let Some(name) = changes.restaurant_name {
            restaurant.restaurant_name = ActiveValue::Set(name);
        }
        if let Some(phone) = changes.restaurant_phone {
            restaurant.restaurant_phone = ActiveValue::Set(phone);
        }
        if let Some(address) = changes.restaurant_address {
            restaurant.restaurant_address = ActiveValue::Set(address);
        }
        if let Some(zip) = changes.restaurant_zip {
            restaurant.restaurant_zip = ActiveValue::Set(zip);
        }
        restaurant.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        restaurant.update(self.db).await
    }

    /// Deletes a restaurant, its menu items and orders are removed by cascade
    ///
    /// Returns OK regardless of the restaurant existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, restaurant_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Restaurant::delete_by_id(restaurant_id)
            .exec(self.db)
            .await
    }
}
