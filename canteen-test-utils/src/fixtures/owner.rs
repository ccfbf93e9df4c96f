use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CustomerModel, OwnerModel, RestaurantModel},
    TestContext,
};

impl TestContext {
    pub fn owner<'a>(&'a self) -> OwnerFixtures<'a> {
        OwnerFixtures { setup: self }
    }
}

pub struct OwnerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> OwnerFixtures<'a> {
    /// Insert an owner with the provided user name.
    ///
    /// The name and email are derived from the user name. The password column holds a
    /// placeholder since owner login is handled elsewhere.
    pub async fn insert_owner(&self, user_name: &str) -> Result<OwnerModel, TestError> {
        Ok(entity::prelude::Owner::insert(entity::owner::ActiveModel {
            user_name: ActiveValue::Set(user_name.to_string()),
            name: ActiveValue::Set(format!("Owner {user_name}")),
            email: ActiveValue::Set(format!("{user_name}@example.com")),
            password: ActiveValue::Set("owner_password_hash".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an owner together with a password-protected restaurant.
    pub async fn insert_owner_with_restaurant(
        &self,
        user_name: &str,
    ) -> Result<(OwnerModel, RestaurantModel), TestError> {
        let owner = self.insert_owner(user_name).await?;
        let restaurant = self
            .setup
            .restaurant()
            .insert_restaurant(&owner, &format!("{user_name}@canteen.example.com"))
            .await?;

        Ok((owner, restaurant))
    }

    /// Insert a customer with the provided user name.
    pub async fn insert_customer(&self, user_name: &str) -> Result<CustomerModel, TestError> {
        Ok(
            entity::prelude::Customer::insert(entity::customer::ActiveModel {
                user_name: ActiveValue::Set(user_name.to_string()),
                name: ActiveValue::Set(format!("Customer {user_name}")),
                email: ActiveValue::Set(format!("{user_name}@students.example.com")),
                password: ActiveValue::Set("customer_password_hash".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
