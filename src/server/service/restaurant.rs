use sea_orm::DatabaseConnection;

use crate::{
    model::restaurant::{NewRestaurantForm, UpdateRestaurantDto},
    server::{
        data::{
            owner::OwnerRepository,
            restaurant::{NewRestaurant, RestaurantRepository},
        },
        error::{restaurant::RestaurantError, Error},
        model::db::{OwnerModel, RestaurantModel},
        util::validate::{is_valid_phone, is_valid_zip, required},
    },
};

/// Service for restaurant registration and management.
pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<RestaurantModel>, Error> {
        let restaurant_repo = RestaurantRepository::new(self.db);

        Ok(restaurant_repo.get_all().await?)
    }

    /// Registers a restaurant for the owner named in the form.
    ///
    /// Checks run in order and stop at the first failure: the owner must exist, every
    /// required field must be filled in, then the phone number and zip code lengths are
    /// checked. The optional login password is stored as a bcrypt hash.
    ///
    /// # Returns
    /// - `Ok((OwnerModel, RestaurantModel))` - The owner and their new restaurant
    /// - `Err(RestaurantError::OwnerNotFound)` - Owner ID missing or unknown
    /// - `Err(RestaurantError::MissingFields)` - A required field is missing or empty
    /// - `Err(RestaurantError::InvalidPhone)` - Phone number isn't 10 characters
    /// - `Err(RestaurantError::InvalidZip)` - Zip code isn't 6 characters
    /// - `Err(Error::BcryptError)` - Hashing the password failed
    /// - `Err(Error::DbErr)` - Database operation failed, e.g. email already registered
    pub async fn create(
        &self,
        form: NewRestaurantForm,
    ) -> Result<(OwnerModel, RestaurantModel), Error> {
        let owner_repo = OwnerRepository::new(self.db);
        let restaurant_repo = RestaurantRepository::new(self.db);

        let raw_owner_id = form.owner_id.unwrap_or_default();
        let owner = match raw_owner_id.trim().parse::<i32>() {
            Ok(owner_id) => owner_repo.get(owner_id).await?,
            Err(_) => None,
        }
        .ok_or(RestaurantError::OwnerNotFound(raw_owner_id))?;

        let (
            Some(email),
            Some(restaurant_name),
            Some(restaurant_phone),
            Some(restaurant_address),
            Some(restaurant_zip),
        ) = (
            required(form.email),
            required(form.restaurant_name),
            required(form.restaurant_phone),
            required(form.restaurant_address),
            required(form.restaurant_zip),
        )
        else {
            return Err(RestaurantError::MissingFields.into());
        };

        if !is_valid_phone(&restaurant_phone) {
            return Err(RestaurantError::InvalidPhone.into());
        }
        if !is_valid_zip(&restaurant_zip) {
            return Err(RestaurantError::InvalidZip.into());
        }

        let password = match required(form.password) {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let restaurant = restaurant_repo
            .create(NewRestaurant {
                owner_id: owner.id,
                owner_name: owner.name.clone(),
                email,
                password,
                restaurant_name,
                restaurant_phone,
                restaurant_address,
                restaurant_zip,
            })
            .await?;

        tracing::info!(
            owner_id = %owner.id,
            restaurant_id = %restaurant.id,
            "Registered restaurant"
        );

        Ok((owner, restaurant))
    }

    /// Applies a partial update to a restaurant owned by the token's owner.
    ///
    /// # Returns
    /// - `Ok(RestaurantModel)` - The updated restaurant
    /// - `Err(RestaurantError::OwnerNotFound)` - No owner with the user name
    /// - `Err(RestaurantError::RestaurantNotFound)` - ID isn't numeric or no restaurant has it
    /// - `Err(RestaurantError::NotOwner)` - Restaurant belongs to another owner
    /// - `Err(RestaurantError::InvalidPhone)` - Provided phone number isn't 10 characters
    /// - `Err(RestaurantError::InvalidZip)` - Provided zip code isn't 6 characters
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        user_name: &str,
        restaurant_id: &str,
        changes: UpdateRestaurantDto,
    ) -> Result<RestaurantModel, Error> {
        let restaurant = self.get_owned_restaurant(user_name, restaurant_id).await?;

        if let Some(phone) = &changes.restaurant_phone {
            if !is_valid_phone(phone) {
                return Err(RestaurantError::InvalidPhone.into());
            }
        }
        if let Some(zip) = &changes.restaurant_zip {
            if !is_valid_zip(zip) {
                return Err(RestaurantError::InvalidZip.into());
            }
        }

        let restaurant_repo = RestaurantRepository::new(self.db);

        Ok(restaurant_repo.update(restaurant, changes).await?)
    }

    /// Deletes a restaurant owned by the token's owner.
    ///
    /// Fails with the same owner, existence and ownership errors as [`Self::update`].
    pub async fn delete(&self, user_name: &str, restaurant_id: &str) -> Result<(), Error> {
        let restaurant = self.get_owned_restaurant(user_name, restaurant_id).await?;

        let restaurant_repo = RestaurantRepository::new(self.db);
        restaurant_repo.delete(restaurant.id).await?;

        tracing::info!(
            owner_id = %restaurant.owner_id,
            restaurant_id = %restaurant.id,
            "Deleted restaurant"
        );

        Ok(())
    }

    /// The owner is resolved before the restaurant ID is parsed
    async fn get_owned_restaurant(
        &self,
        user_name: &str,
        restaurant_id: &str,
    ) -> Result<RestaurantModel, Error> {
        let owner_repo = OwnerRepository::new(self.db);
        let restaurant_repo = RestaurantRepository::new(self.db);

        let owner = owner_repo
            .get_by_user_name(user_name)
            .await?
            .ok_or_else(|| RestaurantError::OwnerNotFound(user_name.to_string()))?;

        let restaurant = match restaurant_id.parse::<i32>() {
            Ok(id) => restaurant_repo.get(id).await?,
            Err(_) => None,
        }
        .ok_or_else(|| RestaurantError::RestaurantNotFound(restaurant_id.to_string()))?;

        if restaurant.owner_id != owner.id {
            return Err(RestaurantError::NotOwner {
                owner_id: owner.id,
                restaurant_id: restaurant.id,
            }
            .into());
        }

        Ok(restaurant)
    }
}

/// Hashes a password on the blocking thread pool
async fn hash_password(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(Error::from)
}
