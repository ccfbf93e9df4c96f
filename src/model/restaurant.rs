use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Public view of a restaurant, the password hash is never exposed
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i32,
    pub owner_id: i32,
    pub owner_name: String,
    pub email: String,
    pub restaurant_name: String,
    pub restaurant_phone: String,
    pub restaurant_address: String,
    pub restaurant_zip: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::restaurant::Model> for RestaurantDto {
    fn from(restaurant: entity::restaurant::Model) -> Self {
        Self {
            id: restaurant.id,
            owner_id: restaurant.owner_id,
            owner_name: restaurant.owner_name,
            email: restaurant.email,
            restaurant_name: restaurant.restaurant_name,
            restaurant_phone: restaurant.restaurant_phone,
            restaurant_address: restaurant.restaurant_address,
            restaurant_zip: restaurant.restaurant_zip,
            created_at: restaurant.created_at,
            updated_at: restaurant.updated_at,
        }
    }
}

/// Form submitted from the add restaurant page
///
/// Every field is optional so that missing fields can be reported back on the
/// page instead of rejecting the request outright.
#[derive(Clone, Default, Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurantForm {
    pub owner_id: Option<String>,
    pub email: Option<String>,
    pub restaurant_name: Option<String>,
    pub restaurant_phone: Option<String>,
    pub restaurant_address: Option<String>,
    pub restaurant_zip: Option<String>,
    pub password: Option<String>,
}

/// Partial update of a restaurant, absent fields are left unchanged
#[derive(Clone, Default, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantDto {
    pub email: Option<String>,
    pub restaurant_name: Option<String>,
    pub restaurant_phone: Option<String>,
    pub restaurant_address: Option<String>,
    pub restaurant_zip: Option<String>,
}

/// Credentials for restaurant login
#[derive(Clone, Default, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RestaurantLoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
