use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    error::TestError,
    model::{MenuItemModel, OwnerModel, RestaurantModel},
    TestContext,
};

impl TestContext {
    pub fn restaurant<'a>(&'a self) -> RestaurantFixtures<'a> {
        RestaurantFixtures { setup: self }
    }
}

pub struct RestaurantFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RestaurantFixtures<'a> {
    /// Insert a restaurant owned by `owner` whose login password is [`TEST_PASSWORD`].
    pub async fn insert_restaurant(
        &self,
        owner: &OwnerModel,
        email: &str,
    ) -> Result<RestaurantModel, TestError> {
        let hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

        self.insert(owner, email, Some(hash)).await
    }

    /// Insert a restaurant that has no login password set.
    pub async fn insert_restaurant_without_password(
        &self,
        owner: &OwnerModel,
        email: &str,
    ) -> Result<RestaurantModel, TestError> {
        self.insert(owner, email, None).await
    }

    /// Insert a restaurant storing `password_hash` verbatim, e.g. a corrupted hash.
    pub async fn insert_restaurant_with_password_hash(
        &self,
        owner: &OwnerModel,
        email: &str,
        password_hash: &str,
    ) -> Result<RestaurantModel, TestError> {
        self.insert(owner, email, Some(password_hash.to_string()))
            .await
    }

    async fn insert(
        &self,
        owner: &OwnerModel,
        email: &str,
        password: Option<String>,
    ) -> Result<RestaurantModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Restaurant::insert(entity::restaurant::ActiveModel {
                owner_id: ActiveValue::Set(owner.id),
                owner_name: ActiveValue::Set(owner.name.clone()),
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(password),
                restaurant_name: ActiveValue::Set("Test Canteen".to_string()),
                restaurant_phone: ActiveValue::Set("5551234567".to_string()),
                restaurant_address: ActiveValue::Set("1 Campus Drive".to_string()),
                restaurant_zip: ActiveValue::Set("560001".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an available menu item for the restaurant.
    pub async fn insert_menu_item(
        &self,
        restaurant_id: i32,
        name: &str,
        price: f64,
    ) -> Result<MenuItemModel, TestError> {
        self.insert_menu_item_with_availability(restaurant_id, name, price, true)
            .await
    }

    pub async fn insert_menu_item_with_availability(
        &self,
        restaurant_id: i32,
        name: &str,
        price: f64,
        is_available: bool,
    ) -> Result<MenuItemModel, TestError> {
        Ok(
            entity::prelude::MenuItem::insert(entity::menu_item::ActiveModel {
                restaurant_id: ActiveValue::Set(restaurant_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(Some(format!("{name} of the day"))),
                price: ActiveValue::Set(price),
                is_available: ActiveValue::Set(is_available),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
