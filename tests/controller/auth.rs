use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use canteen::{
    model::restaurant::RestaurantLoginDto,
    server::{
        controller::auth::{login, logout},
        model::{
            app::AppState,
            session::{owner::SessionOwnerId, restaurant::SessionRestaurantId},
        },
    },
};
use canteen_test_utils::prelude::*;

use crate::util::body_json;

fn credentials(email: &str, password: &str) -> RestaurantLoginDto {
    RestaurantLoginDto {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

mod login {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the restaurant and its ID stored in the session
    async fn stores_restaurant_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(credentials(&restaurant.email, TEST_PASSWORD)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["id"], restaurant.id);
        assert!(body.get("password").is_none());
        assert_eq!(
            SessionRestaurantId::get(&test.session).await.unwrap(),
            Some(restaurant.id)
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when the email or password is empty
    async fn rejects_missing_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;

        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(RestaurantLoginDto {
                email: Some("owner@canteen.example.com".to_string()),
                password: Some(String::new()),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["msg"], "Please enter all fields");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an email no restaurant is registered with
    async fn rejects_unknown_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;

        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(credentials("nobody@example.com", TEST_PASSWORD)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(SessionRestaurantId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 for a wrong password
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (_, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(credentials(&restaurant.email, "wrong password")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(SessionRestaurantId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 for a restaurant registered without a login password
    async fn rejects_restaurant_without_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let owner = test.owner().insert_owner("owner").await?;
        let restaurant = test
            .restaurant()
            .insert_restaurant_without_password(&owner, "nopass@example.com")
            .await?;

        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(credentials(&restaurant.email, TEST_PASSWORD)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 when the stored password hash can't be compared
    async fn fails_for_corrupted_password_hash() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let owner = test.owner().insert_owner("owner").await?;
        let restaurant = test
            .restaurant()
            .insert_restaurant_with_password_hash(&owner, "corrupt@example.com", "not-a-hash")
            .await?;

        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(credentials(&restaurant.email, TEST_PASSWORD)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["msg"], "Internal server error");
        assert_eq!(SessionRestaurantId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    /// Expect a redirect home with the restaurant and owner removed from the session
    async fn clears_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (owner, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;
        SessionRestaurantId::insert(&test.session, restaurant.id)
            .await
            .unwrap();
        SessionOwnerId::insert(&test.session, owner.id)
            .await
            .unwrap();

        let resp = logout(test.session.clone()).await.into_response();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()["location"], "/");
        assert_eq!(SessionRestaurantId::get(&test.session).await.unwrap(), None);
        assert_eq!(SessionOwnerId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect home when nobody is signed in
    async fn redirects_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = logout(test.session.clone()).await.into_response();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        Ok(())
    }
}
