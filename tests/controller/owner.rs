use axum::{extract::State, http::StatusCode, response::IntoResponse};
use canteen::server::{
    controller::owner::{completed_orders, current_orders, dashboard, update_menu},
    model::{app::AppState, auth::DecodedToken, session::owner::SessionOwnerId},
};
use canteen_test_utils::prelude::*;

use crate::util::{body_string, page_marker};

fn token(user_name: &str) -> DecodedToken {
    DecodedToken {
        user_name: user_name.to_string(),
    }
}

/// Owner "owner" signed in with a restaurant holding one order of every status
async fn signed_in_owner_with_orders() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_canteen_tables().build().await?;
    let (owner, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;
    let customer = test.owner().insert_customer("student").await?;
    let soup = test
        .restaurant()
        .insert_menu_item(restaurant.id, "Tomato Soup", 3.5)
        .await?;

    for status in ["Pending", "Ready", "Completed", "Cancelled"] {
        test.order()
            .insert_order(restaurant.id, customer.id, status, &[(soup.id, 2)])
            .await?;
    }

    SessionOwnerId::insert(&test.session, owner.id)
        .await
        .unwrap();

    Ok(test)
}

mod dashboard {
    use super::*;

    #[tokio::test]
    /// Expect the owner home page listing every order
    async fn renders_all_orders() -> Result<(), TestError> {
        let test = signed_in_owner_with_orders().await?;

        let resp = dashboard(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("owner-home")));
        for status in ["Pending", "Ready", "Completed", "Cancelled"] {
            assert!(body.contains(&format!(">{status}<")), "missing {status} order");
        }
        assert!(body.contains("2 x Tomato Soup"));
        assert!(body.contains("2:07:09 PM"));

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 with the login page when no owner is in session
    async fn renders_login_without_owner_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        test.owner().insert_owner_with_restaurant("owner").await?;

        let resp = dashboard(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("login")));
        assert!(body.contains("Owner Login"));
        assert!(body.contains("Login expired!"));

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 and a cleared session when the token's owner no longer exists
    async fn clears_session_for_missing_owner() -> Result<(), TestError> {
        let test = signed_in_owner_with_orders().await?;

        let resp = dashboard(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("deleted_owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(resp).await.contains("Login expired!"));
        let owner_id = SessionOwnerId::get(&test.session).await.unwrap();
        assert!(owner_id.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when the session belongs to another owner than the token
    async fn renders_login_for_session_of_other_owner() -> Result<(), TestError> {
        let test = signed_in_owner_with_orders().await?;
        test.owner().insert_owner_with_restaurant("other").await?;

        let resp = dashboard(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("other"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(resp).await.contains(&page_marker("login")));

        Ok(())
    }

    #[tokio::test]
    /// Expect the add restaurant page when the owner has no restaurant yet
    async fn renders_add_restaurant_for_owner_without_restaurant() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let owner = test.owner().insert_owner("owner").await?;
        SessionOwnerId::insert(&test.session, owner.id)
            .await
            .unwrap();

        let resp = dashboard(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("add-new-restaurant")));
        assert!(body.contains("Please add your restaurant first"));
        assert!(body.contains(&format!("value=\"{}\"", owner.id)));

        Ok(())
    }
}

mod current_orders {
    use super::*;

    #[tokio::test]
    /// Expect only orders that are still in progress
    async fn renders_only_current_orders() -> Result<(), TestError> {
        let test = signed_in_owner_with_orders().await?;

        let resp = current_orders(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("owner-current-orders")));
        assert!(body.contains(">Pending<"));
        assert!(body.contains(">Ready<"));
        assert!(!body.contains(">Completed<"));
        assert!(!body.contains(">Cancelled<"));

        Ok(())
    }
}

mod completed_orders {
    use super::*;

    #[tokio::test]
    /// Expect only completed and cancelled orders
    async fn renders_only_completed_orders() -> Result<(), TestError> {
        let test = signed_in_owner_with_orders().await?;

        let resp = completed_orders(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("owner-completed-orders")));
        assert!(body.contains(">Completed<"));
        assert!(body.contains(">Cancelled<"));
        assert!(!body.contains(">Pending<"));
        assert!(!body.contains(">Ready<"));

        Ok(())
    }
}

mod update_menu {
    use super::*;

    #[tokio::test]
    /// Expect every menu item, available or not
    async fn renders_menu_items() -> Result<(), TestError> {
        let test = TestBuilder::new().with_canteen_tables().build().await?;
        let (owner, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;
        test.restaurant()
            .insert_menu_item(restaurant.id, "Masala Dosa", 2.75)
            .await?;
        test.restaurant()
            .insert_menu_item_with_availability(restaurant.id, "Filter Coffee", 1.0, false)
            .await?;
        SessionOwnerId::insert(&test.session, owner.id)
            .await
            .unwrap();

        let resp = update_menu(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            token("owner"),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&page_marker("owner-update-menu")));
        assert!(body.contains("Masala Dosa"));
        assert!(body.contains("2.75"));
        assert!(body.contains("Filter Coffee"));

        Ok(())
    }
}
