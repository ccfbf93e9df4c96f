use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        auth::DecodedToken,
        db::{OwnerModel, RestaurantModel},
        session::owner::SessionOwnerId,
    },
    service::owner::OwnerService,
    view::owner::OwnerPage,
};

/// Retrieves the signed in owner and their restaurant for an owner page
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The owner's session
/// - `token`: Decoded session token of the request
///
/// # Returns
/// - `Ok((OwnerModel, RestaurantModel))`: Owner and restaurant found
/// - `Err(AuthError::OwnerNotInSession)`: Owner ID not present in session
/// - `Err(AuthError::OwnerNotInDatabase)`: Token user doesn't exist (session is cleared)
/// - `Err(AuthError::OwnerSessionMismatch)`: Session belongs to a different owner
/// - `Err(RestaurantError::OwnerWithoutRestaurant)`: Owner hasn't added a restaurant
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_owner_restaurant(
    state: &AppState,
    session: &Session,
    token: &DecodedToken,
) -> Result<(OwnerModel, RestaurantModel), Error> {
    let Some(session_owner_id) = SessionOwnerId::get(session).await? else {
        return Err(Error::AuthError(AuthError::OwnerNotInSession));
    };

    let owner_service = OwnerService::new(&state.db);

    match owner_service
        .get_owner_with_restaurant(&token.user_name, session_owner_id)
        .await
    {
        Err(Error::AuthError(AuthError::OwnerNotInDatabase(user_name))) => {
            session.clear().await;

            tracing::debug!(
                "Session cleared for owner ID {} whose token user {:?} was not found in database",
                session_owner_id,
                user_name
            );

            Err(Error::AuthError(AuthError::OwnerNotInDatabase(user_name)))
        }
        result => result,
    }
}

/// Owner page context with no message
pub fn owner_page(owner: OwnerModel, restaurant: RestaurantModel) -> OwnerPage {
    OwnerPage {
        msg: String::new(),
        owner: owner.into(),
        restaurant: restaurant.into(),
    }
}
