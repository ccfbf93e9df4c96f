use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::view};

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Owner {0:?} does not exist")]
    OwnerNotFound(String),
    #[error("Restaurant ID {0:?} does not exist")]
    RestaurantNotFound(String),
    #[error("Owner ID {owner_id} attempted to modify restaurant ID {restaurant_id} owned by someone else")]
    NotOwner { owner_id: i32, restaurant_id: i32 },
    #[error("Owner ID {0} has not registered a restaurant yet")]
    OwnerWithoutRestaurant(i32),
    #[error("Restaurant is missing required fields")]
    MissingFields,
    #[error("Restaurant phone number is not 10 characters long")]
    InvalidPhone,
    #[error("Restaurant zip code is not 6 characters long")]
    InvalidZip,
}

impl RestaurantError {
    /// Message shown to the user for this error
    pub fn message(&self) -> &'static str {
        match self {
            Self::OwnerNotFound(_) => "User does not exist",
            Self::RestaurantNotFound(_) => "Restaurant does not exist",
            Self::NotOwner { .. } => "Unauthorized",
            Self::OwnerWithoutRestaurant(_) => "Please add your restaurant first",
            Self::MissingFields => "Please enter all fields",
            Self::InvalidPhone => "Phone number must be 10 characters",
            Self::InvalidZip => "Zip code must be 6 characters",
        }
    }
}

impl IntoResponse for RestaurantError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::OwnerWithoutRestaurant(owner_id) => {
                tracing::debug!(owner_id = %owner_id, "{}", self);

                return view::owner::add_restaurant_page(&owner_id.to_string(), self.message())
                    .into_response();
            }
            Self::NotOwner { .. } => {
                tracing::warn!("{}", self);

                StatusCode::UNAUTHORIZED
            }
            Self::RestaurantNotFound(_) => StatusCode::NOT_FOUND,
            Self::OwnerNotFound(_)
            | Self::MissingFields
            | Self::InvalidPhone
            | Self::InvalidZip => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto::new(self.message()))).into_response()
    }
}
