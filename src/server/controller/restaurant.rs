use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu::MenuItemDto,
        restaurant::{NewRestaurantForm, RestaurantDto, UpdateRestaurantDto},
        user::CustomerDto,
    },
    server::{
        controller::util::owner::owner_page,
        data::{
            customer::CustomerRepository, menu_item::MenuItemRepository,
            restaurant::RestaurantRepository,
        },
        error::{restaurant::RestaurantError, Error},
        model::{
            app::AppState,
            auth::{CustomerToken, DecodedToken},
        },
        service::restaurant::RestaurantService,
        view,
    },
};

pub static RESTAURANT_TAG: &str = "restaurant";

/// List every restaurant
///
/// # Responses
/// - 200 (OK): Every restaurant, password hashes are never included
/// - 500 (Internal Server Error): An error occurred retrieving the restaurants
#[utoipa::path(
    get,
    path = "/restaurant",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Every restaurant", body = Vec<RestaurantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let restaurants: Vec<RestaurantDto> = RestaurantService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(restaurants))
}

/// Restaurant page with its menu as seen by a customer
///
/// Unknown or malformed restaurant IDs render the customer home page listing every
/// restaurant instead.
///
/// # Responses
/// - 200 (OK): Restaurant page, or customer home page when the restaurant doesn't exist
/// - 401 (Unauthorized): Customer login page when the session token is missing or expired
/// - 500 (Internal Server Error): An error occurred retrieving the restaurant
#[utoipa::path(
    get,
    path = "/restaurant/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(("restaurant_id" = String, Path, description = "ID of the restaurant")),
    responses(
        (status = 200, description = "Restaurant page", content_type = "text/html", body = String),
        (status = 401, description = "Customer login page, session expired", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    CustomerToken(token): CustomerToken,
    Path(restaurant_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let customer_repo = CustomerRepository::new(&state.db);
    let restaurant_repo = RestaurantRepository::new(&state.db);
    let menu_item_repo = MenuItemRepository::new(&state.db);

    let customer: Option<CustomerDto> = customer_repo
        .get_by_user_name(&token.user_name)
        .await?
        .map(Into::into);

    let restaurant = match restaurant_id.parse::<i32>() {
        Ok(restaurant_id) => restaurant_repo.get(restaurant_id).await?,
        Err(_) => None,
    };

    let Some(restaurant) = restaurant else {
        tracing::debug!("Restaurant {:?} requested by customer not found", restaurant_id);

        let restaurants = restaurant_repo
            .get_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        return Ok(view::customer::customer_home_page(
            "Restaurant not found!",
            customer,
            restaurants,
        ));
    };

    let menu_items: Vec<MenuItemDto> = menu_item_repo
        .get_many_by_restaurant_id(restaurant.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(view::customer::restaurant_page(
        restaurant.into(),
        customer,
        menu_items,
    ))
}

/// Register a restaurant from the add restaurant form
///
/// Validation failures render the add restaurant page again with a message describing
/// the first failed check.
///
/// # Responses
/// - 200 (OK): Owner home page for the new restaurant
/// - 200 (OK): Add restaurant page with a validation or storage error message
/// - 401 (Unauthorized): Login page when the session token is missing or expired
#[utoipa::path(
    post,
    path = "/restaurant",
    tag = RESTAURANT_TAG,
    request_body(content = NewRestaurantForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Owner home page, or add restaurant page with an error message", content_type = "text/html", body = String),
        (status = 401, description = "Login page, session expired", content_type = "text/html", body = String)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    _token: DecodedToken,
    Form(form): Form<NewRestaurantForm>,
) -> Response {
    let owner_id = form.owner_id.clone().unwrap_or_default();

    match RestaurantService::new(&state.db).create(form).await {
        Ok((owner, restaurant)) => {
            view::owner::owner_home_page(owner_page(owner, restaurant), Vec::new()).into_response()
        }
        Err(Error::RestaurantError(err)) => {
            tracing::debug!("{}", err);

            let msg = match err {
                RestaurantError::OwnerNotFound(_) => "Owner not found",
                err => err.message(),
            };

            view::owner::add_restaurant_page(&owner_id, msg).into_response()
        }
        Err(err) => {
            tracing::error!("Error in creating restaurant: {}", err);

            view::owner::add_restaurant_page(&owner_id, "Error in creating restaurant")
                .into_response()
        }
    }
}

/// Update a restaurant owned by the signed in owner
///
/// Only the provided fields are changed.
///
/// # Responses
/// - 200 (OK): The updated restaurant
/// - 400 (Bad Request): Owner doesn't exist, or the phone number or zip code has the wrong length
/// - 401 (Unauthorized): Restaurant belongs to another owner, or the session token is missing
/// - 404 (Not Found): Restaurant doesn't exist or the ID isn't numeric
/// - 500 (Internal Server Error): An error occurred updating the restaurant
#[utoipa::path(
    put,
    path = "/restaurant/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(("restaurant_id" = String, Path, description = "ID of the restaurant")),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "Updated restaurant", body = RestaurantDto),
        (status = 400, description = "Owner not found or invalid field", body = ErrorDto),
        (status = 401, description = "Restaurant owned by someone else", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    token: DecodedToken,
    Path(restaurant_id): Path<String>,
    Json(changes): Json<UpdateRestaurantDto>,
) -> Result<impl IntoResponse, Error> {
    let restaurant = RestaurantService::new(&state.db)
        .update(&token.user_name, &restaurant_id, changes)
        .await?;

    Ok(Json(RestaurantDto::from(restaurant)))
}

/// Delete a restaurant owned by the signed in owner
///
/// # Responses
/// - 200 (OK): Restaurant deleted along with its menu and orders
/// - 400 (Bad Request): Owner doesn't exist
/// - 401 (Unauthorized): Restaurant belongs to another owner, or the session token is missing
/// - 404 (Not Found): Restaurant doesn't exist or the ID isn't numeric
/// - 500 (Internal Server Error): An error occurred deleting the restaurant
#[utoipa::path(
    delete,
    path = "/restaurant/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(("restaurant_id" = String, Path, description = "ID of the restaurant")),
    responses(
        (status = 200, description = "Restaurant deleted"),
        (status = 400, description = "Owner not found", body = ErrorDto),
        (status = 401, description = "Restaurant owned by someone else", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    token: DecodedToken,
    Path(restaurant_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    RestaurantService::new(&state.db)
        .delete(&token.user_name, &restaurant_id)
        .await?;

    Ok(StatusCode::OK)
}
