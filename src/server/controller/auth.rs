use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{RestaurantDto, RestaurantLoginDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            session::{owner::SessionOwnerId, restaurant::SessionRestaurantId},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in as a restaurant with its email and password
///
/// On success the restaurant ID is stored in the session.
///
/// # Responses
/// - 200 (OK): Credentials valid, returns the restaurant
/// - 400 (Bad Request): Email or password missing
/// - 401 (Unauthorized): Wrong password, or the restaurant has no login password
/// - 404 (Not Found): No restaurant registered with the email
/// - 500 (Internal Server Error): Password comparison or session storage failed
#[utoipa::path(
    post,
    path = "/restaurant/login",
    tag = AUTH_TAG,
    request_body = RestaurantLoginDto,
    responses(
        (status = 200, description = "Logged in restaurant", body = RestaurantDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<RestaurantLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let restaurant = AuthService::new(&state.db)
        .login_restaurant(credentials)
        .await?;

    SessionRestaurantId::insert(&session, restaurant.id).await?;

    Ok(Json(RestaurantDto::from(restaurant)))
}

/// Log out the signed in restaurant or owner
///
/// # Responses
/// - 307 (Temporary Redirect): Session cleared, redirects to the home page
/// - 500 (Internal Server Error): Session could not be read
#[utoipa::path(
    get,
    path = "/restaurant/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let restaurant_id = SessionRestaurantId::get(&session).await?;
    let owner_id = SessionOwnerId::get(&session).await?;

    // Clearing a session that was never stored errors in the store
    if restaurant_id.is_some() || owner_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}
