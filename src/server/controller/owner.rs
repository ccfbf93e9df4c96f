use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, order::OrderFilter},
    server::{
        controller::util::owner::{get_owner_restaurant, owner_page},
        data::menu_item::MenuItemRepository,
        error::Error,
        model::{app::AppState, auth::DecodedToken},
        service::order::OrderService,
        view,
    },
};

pub static OWNER_TAG: &str = "owner";

/// Menu management page of the signed in owner's restaurant
///
/// # Responses
/// - 200 (OK): Update menu page listing every menu item
/// - 200 (OK): Add restaurant page when the owner has no restaurant yet
/// - 401 (Unauthorized): Login page when the token or owner session is missing or expired
/// - 500 (Internal Server Error): An error occurred retrieving the restaurant or its menu
#[utoipa::path(
    get,
    path = "/restaurant/update-menu",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Update menu page", content_type = "text/html", body = String),
        (status = 401, description = "Login page, session expired", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu(
    State(state): State<AppState>,
    session: Session,
    token: DecodedToken,
) -> Result<impl IntoResponse, Error> {
    let (owner, restaurant) = get_owner_restaurant(&state, &session, &token).await?;

    let menu_item_repo = MenuItemRepository::new(&state.db);
    let menu_items = menu_item_repo
        .get_many_by_restaurant_id(restaurant.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(view::owner::update_menu_page(
        owner_page(owner, restaurant),
        menu_items,
    ))
}

/// Orders of the signed in owner's restaurant that are still in progress
///
/// # Responses
/// - 200 (OK): Current orders page
/// - 401 (Unauthorized): Login page when the token or owner session is missing or expired
/// - 500 (Internal Server Error): An error occurred retrieving the orders
#[utoipa::path(
    get,
    path = "/restaurant/current-orders",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Current orders page", content_type = "text/html", body = String),
        (status = 401, description = "Login page, session expired", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_orders(
    State(state): State<AppState>,
    session: Session,
    token: DecodedToken,
) -> Result<impl IntoResponse, Error> {
    let (owner, restaurant) = get_owner_restaurant(&state, &session, &token).await?;

    let orders = OrderService::new(&state.db)
        .list_orders(&restaurant, OrderFilter::Current)
        .await?;

    Ok(view::owner::current_orders_page(
        owner_page(owner, restaurant),
        orders,
    ))
}

/// Completed and cancelled orders of the signed in owner's restaurant
///
/// # Responses
/// - 200 (OK): Completed orders page
/// - 401 (Unauthorized): Login page when the token or owner session is missing or expired
/// - 500 (Internal Server Error): An error occurred retrieving the orders
#[utoipa::path(
    get,
    path = "/restaurant/completed-orders",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Completed orders page", content_type = "text/html", body = String),
        (status = 401, description = "Login page, session expired", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn completed_orders(
    State(state): State<AppState>,
    session: Session,
    token: DecodedToken,
) -> Result<impl IntoResponse, Error> {
    let (owner, restaurant) = get_owner_restaurant(&state, &session, &token).await?;

    let orders = OrderService::new(&state.db)
        .list_orders(&restaurant, OrderFilter::Completed)
        .await?;

    Ok(view::owner::completed_orders_page(
        owner_page(owner, restaurant),
        orders,
    ))
}

/// Owner home page listing every order of the restaurant
///
/// # Responses
/// - 200 (OK): Owner home page
/// - 401 (Unauthorized): Login page when the token or owner session is missing or expired
/// - 500 (Internal Server Error): An error occurred retrieving the orders
#[utoipa::path(
    get,
    path = "/restaurant/dashboard",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Owner home page", content_type = "text/html", body = String),
        (status = 401, description = "Login page, session expired", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    token: DecodedToken,
) -> Result<impl IntoResponse, Error> {
    let (owner, restaurant) = get_owner_restaurant(&state, &session, &token).await?;

    let orders = OrderService::new(&state.db)
        .list_orders(&restaurant, OrderFilter::All)
        .await?;

    Ok(view::owner::owner_home_page(
        owner_page(owner, restaurant),
        orders,
    ))
}
