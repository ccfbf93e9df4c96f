//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every restaurant route is registered here with its OpenAPI specification, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all restaurant endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /restaurant` - List every restaurant
/// - `POST /restaurant` - Register a restaurant from the add restaurant form
/// - `GET /restaurant/{restaurant_id}` - Restaurant page for customers
/// - `PUT /restaurant/{restaurant_id}` - Update an owned restaurant
/// - `DELETE /restaurant/{restaurant_id}` - Delete an owned restaurant
/// - `GET /restaurant/update-menu` - Owner menu page
/// - `GET /restaurant/current-orders` - Owner current orders page
/// - `GET /restaurant/completed-orders` - Owner completed orders page
/// - `GET /restaurant/dashboard` - Owner home page
/// - `POST /restaurant/login` - Restaurant login
/// - `GET /restaurant/logout` - Clear the session
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, jwt_secret };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Canteen", description = "Canteen restaurant API"), tags(
        (name = controller::owner::OWNER_TAG, description = "Restaurant owner pages"),
        (name = controller::restaurant::RESTAURANT_TAG, description = "Restaurant management API routes"),
        (name = controller::auth::AUTH_TAG, description = "Restaurant login API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::restaurant::list_restaurants,
            controller::restaurant::create_restaurant
        ))
        .routes(routes!(
            controller::restaurant::get_restaurant,
            controller::restaurant::update_restaurant,
            controller::restaurant::delete_restaurant
        ))
        .routes(routes!(controller::owner::update_menu))
        .routes(routes!(controller::owner::current_orders))
        .routes(routes!(controller::owner::completed_orders))
        .routes(routes!(controller::owner::dashboard))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
