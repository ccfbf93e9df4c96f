use sea_orm::DatabaseConnection;

use crate::server::{
    data::{owner::OwnerRepository, restaurant::RestaurantRepository},
    error::{auth::AuthError, restaurant::RestaurantError, Error},
    model::db::{OwnerModel, RestaurantModel},
};

/// Resolves the signed in owner and their restaurant for owner pages.
pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the owner a token was issued to along with their restaurant.
    ///
    /// The owner ID stored in the session at owner login must belong to the same owner as
    /// the token, otherwise the session is treated as expired.
    ///
    /// # Returns
    /// - `Ok((OwnerModel, RestaurantModel))` - Owner and their restaurant
    /// - `Err(AuthError::OwnerNotInDatabase)` - No owner with the token's user name
    /// - `Err(AuthError::OwnerSessionMismatch)` - Session belongs to another owner
    /// - `Err(RestaurantError::OwnerWithoutRestaurant)` - Owner hasn't added a restaurant yet
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_owner_with_restaurant(
        &self,
        user_name: &str,
        session_owner_id: i32,
    ) -> Result<(OwnerModel, RestaurantModel), Error> {
        let owner_repo = OwnerRepository::new(self.db);
        let restaurant_repo = RestaurantRepository::new(self.db);

        let owner = owner_repo
            .get_by_user_name(user_name)
            .await?
            .ok_or_else(|| AuthError::OwnerNotInDatabase(user_name.to_string()))?;

        if owner.id != session_owner_id {
            return Err(AuthError::OwnerSessionMismatch {
                session_owner_id,
                token_owner_id: owner.id,
            }
            .into());
        }

        let restaurant = restaurant_repo
            .get_by_owner_id(owner.id)
            .await?
            .ok_or(RestaurantError::OwnerWithoutRestaurant(owner.id))?;

        Ok((owner, restaurant))
    }
}
