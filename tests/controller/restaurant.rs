use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use canteen::{
    model::restaurant::{NewRestaurantForm, UpdateRestaurantDto},
    server::{
        controller::restaurant::{
            create_restaurant, delete_restaurant, get_restaurant, list_restaurants,
            update_restaurant,
        },
        model::{
            app::AppState,
            auth::{CustomerToken, DecodedToken},
        },
    },
};
use canteen_test_utils::prelude::*;

use crate::util::{body_json, body_string, page_marker};

fn token(user_name: &str) -> DecodedToken {
    DecodedToken {
        user_name: user_name.to_string(),
    }
}

mod list_restaurants {
    use super::*;

    #[tokio::test]
    /// Expect every restaurant as camelCase JSON without password hashes
    async fn returns_restaurants_without_passwords() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, first) = test.owner().insert_owner_with_restaurant("first").await?;
        let (_, second) = test.owner().insert_owner_with_restaurant("second").await?;

        let resp = list_restaurants(State(test.to_app_state::<AppState>()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let restaurants = body.as_array().unwrap();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0]["id"], first.id);
        assert_eq!(restaurants[1]["id"], second.id);
        assert_eq!(restaurants[0]["restaurantName"], "Test Canteen");
        assert!(restaurants[0].get("password").is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 with a generic message when the database fails
    async fn returns_internal_error_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = list_restaurants(State(test.to_app_state::<AppState>()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["msg"], "Internal server error");

        Ok(())
    }
}

mod get_restaurant {
    use super::*;

    #[tokio::test]
    /// Expect the restaurant page with only available menu items
    async fn renders_restaurant_page() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;
        test.owner().insert_customer("student").await?;
        test.restaurant()
            .insert_menu_item(restaurant.id, "Veg Thali", 4.5)
            .await?;
        test.restaurant()
            .insert_menu_item_with_availability(restaurant.id, "Sold Out Pie", 2.0, false)
            .await?;

        let resp = get_restaurant(
            State(test.to_app_state::<AppState>()),
            CustomerToken(token("student")),
            Path(restaurant.id.to_string()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("restaurant")));
        assert!(body.contains("Veg Thali"));
        assert!(!body.contains("Sold Out Pie"));
        assert!(body.contains("Customer student"));

        Ok(())
    }

    #[tokio::test]
    /// Expect the customer home page listing every restaurant for an unknown ID
    async fn renders_customer_home_for_unknown_restaurant() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = get_restaurant(
            State(test.to_app_state::<AppState>()),
            CustomerToken(token("student")),
            Path((restaurant.id + 1).to_string()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("customer-home")));
        assert!(body.contains("Restaurant not found!"));
        assert!(body.contains(&restaurant.restaurant_name));

        Ok(())
    }

    #[tokio::test]
    /// Expect a malformed ID to be treated as an unknown restaurant
    async fn renders_customer_home_for_malformed_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;

        let resp = get_restaurant(
            State(test.to_app_state::<AppState>()),
            CustomerToken(token("student")),
            Path("not-a-restaurant".to_string()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains("Restaurant not found!"));

        Ok(())
    }
}

mod create_restaurant {
    use super::*;

    fn form(owner_id: i32) -> NewRestaurantForm {
        NewRestaurantForm {
            owner_id: Some(owner_id.to_string()),
            email: Some("dosa@example.com".to_string()),
            restaurant_name: Some("Dosa Corner".to_string()),
            restaurant_phone: Some("5550001111".to_string()),
            restaurant_address: Some("3 Hostel Road".to_string()),
            restaurant_zip: Some("560003".to_string()),
            password: None,
        }
    }

    #[tokio::test]
    /// Expect the owner home page for the new restaurant with no orders
    async fn renders_owner_home_on_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let owner = test.owner().insert_owner("owner").await?;

        let resp = create_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Form(form(owner.id)),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("owner-home")));
        assert!(body.contains("Dosa Corner"));
        assert!(body.contains("No orders to show."));

        Ok(())
    }

    #[tokio::test]
    /// Expect the add restaurant page with "Owner not found" for an unknown owner
    async fn renders_owner_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;

        let resp = create_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Form(form(99)),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("add-new-restaurant")));
        assert!(body.contains("Owner not found"));

        Ok(())
    }

    #[tokio::test]
    /// Expect the add restaurant page with the first failed validation
    async fn renders_validation_messages() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let owner = test.owner().insert_owner("owner").await?;

        let cases = [
            (
                NewRestaurantForm {
                    email: None,
                    ..form(owner.id)
                },
                "Please enter all fields",
            ),
            (
                NewRestaurantForm {
                    restaurant_phone: Some("12345".to_string()),
                    ..form(owner.id)
                },
                "Phone number must be 10 characters",
            ),
            (
                NewRestaurantForm {
                    restaurant_zip: Some("12345".to_string()),
                    ..form(owner.id)
                },
                "Zip code must be 6 characters",
            ),
        ];

        for (form, msg) in cases {
            let resp = create_restaurant(
                State(test.to_app_state::<AppState>()),
                token("owner"),
                Form(form),
            )
            .await;

            let body = body_string(resp).await;
            assert!(body.contains(&page_marker("add-new-restaurant")));
            assert!(body.contains(msg), "expected message {msg:?}");
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect the storage error message when the email is already registered
    async fn renders_storage_error_for_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let owner = test.owner().insert_owner("owner").await?;
        create_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Form(form(owner.id)),
        )
        .await;

        let resp = create_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Form(form(owner.id)),
        )
        .await;

        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("add-new-restaurant")));
        assert!(body.contains("Error in creating restaurant"));

        Ok(())
    }
}

mod update_restaurant {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the updated restaurant
    async fn returns_updated_restaurant() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = update_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path(restaurant.id.to_string()),
            Json(UpdateRestaurantDto {
                restaurant_address: Some("4 Market Street".to_string()),
                ..Default::default()
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["restaurantAddress"], "4 Market Street");
        assert_eq!(body["restaurantName"], restaurant.restaurant_name);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 Unauthorized when the restaurant belongs to another owner
    async fn rejects_other_owner() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;
        test.owner().insert_owner("other").await?;

        let resp = update_restaurant(
            State(test.to_app_state::<AppState>()),
            token("other"),
            Path(restaurant.id.to_string()),
            Json(UpdateRestaurantDto::default()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await["msg"], "Unauthorized");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a restaurant that doesn't exist
    async fn returns_not_found_for_unknown_restaurant() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        test.owner().insert_owner("owner").await?;

        let resp = update_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path("1".to_string()),
            Json(UpdateRestaurantDto::default()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["msg"], "Restaurant does not exist");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a non-numeric restaurant ID
    async fn returns_not_found_for_non_numeric_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        test.owner().insert_owner("owner").await?;

        let resp = update_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path("abc".to_string()),
            Json(UpdateRestaurantDto::default()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["msg"], "Restaurant does not exist");

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 with a generic message when the database fails
    async fn returns_internal_error_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = update_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path("1".to_string()),
            Json(UpdateRestaurantDto::default()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["msg"], "Internal server error");

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a phone number that isn't 10 characters
    async fn rejects_invalid_phone() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = update_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path(restaurant.id.to_string()),
            Json(UpdateRestaurantDto {
                restaurant_phone: Some("555".to_string()),
                ..Default::default()
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await["msg"],
            "Phone number must be 10 characters"
        );

        Ok(())
    }
}

mod delete_restaurant {
    use super::*;

    #[tokio::test]
    /// Expect 200 when deleting an owned restaurant
    async fn deletes_owned_restaurant() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = delete_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path(restaurant.id.to_string()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 "User does not exist" for an unknown owner
    async fn rejects_unknown_owner() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = delete_restaurant(
            State(test.to_app_state::<AppState>()),
            token("ghost"),
            Path(restaurant.id.to_string()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["msg"], "User does not exist");

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 with a generic message when the database fails
    async fn returns_internal_error_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = delete_restaurant(
            State(test.to_app_state::<AppState>()),
            token("owner"),
            Path("1".to_string()),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["msg"], "Internal server error");

        Ok(())
    }
}
