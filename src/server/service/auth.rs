use sea_orm::DatabaseConnection;

use crate::{
    model::restaurant::RestaurantLoginDto,
    server::{
        data::restaurant::RestaurantRepository,
        error::{auth::AuthError, Error},
        model::db::RestaurantModel,
        util::validate::required,
    },
};

/// Service for restaurant login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies restaurant login credentials.
    ///
    /// # Returns
    /// - `Ok(RestaurantModel)` - Credentials match the stored password hash
    /// - `Err(AuthError::LoginFieldsMissing)` - Email or password missing or empty
    /// - `Err(AuthError::RestaurantEmailNotFound)` - No restaurant registered with the email
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password or no password set
    /// - `Err(Error::BcryptError)` - Stored hash couldn't be compared
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login_restaurant(
        &self,
        credentials: RestaurantLoginDto,
    ) -> Result<RestaurantModel, Error> {
        let (Some(email), Some(password)) =
            (required(credentials.email), required(credentials.password))
        else {
            return Err(AuthError::LoginFieldsMissing.into());
        };

        let restaurant_repo = RestaurantRepository::new(self.db);

        let restaurant = restaurant_repo
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::RestaurantEmailNotFound(email))?;

        let Some(hash) = restaurant.password.clone() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(restaurant_id = %restaurant.id, "Restaurant logged in");

        Ok(restaurant)
    }
}

/// Compares a password with a bcrypt hash on the blocking thread pool
async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))?
        .map_err(Error::from)
}
