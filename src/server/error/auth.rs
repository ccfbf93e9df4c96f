use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::view::{self, login::LoginAudience},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No session token present in request headers or session")]
    MissingToken,
    #[error("Session token failed validation: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Owner ID is not present in session")]
    OwnerNotInSession,
    #[error("Owner {0:?} not found in database despite having a valid session token")]
    OwnerNotInDatabase(String),
    #[error("Session owner ID {session_owner_id} does not match token owner ID {token_owner_id}")]
    OwnerSessionMismatch {
        session_owner_id: i32,
        token_owner_id: i32,
    },
    #[error("Session token is not present in customer session")]
    CustomerNotInSession,
    #[error("Restaurant login attempted without email or password")]
    LoginFieldsMissing,
    #[error("No restaurant registered with email {0:?}")]
    RestaurantEmailNotFound(String),
    #[error("Restaurant login failed due to invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    fn login_expired(audience: LoginAudience) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            view::login::login_page(audience, "Login expired!"),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::OwnerNotInSession
            | Self::OwnerNotInDatabase(_)
            | Self::OwnerSessionMismatch { .. } => Self::login_expired(LoginAudience::Owner),
            Self::CustomerNotInSession => Self::login_expired(LoginAudience::Customer),
            Self::LoginFieldsMissing => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("Please enter all fields")),
            )
                .into_response(),
            Self::RestaurantEmailNotFound(_) => StatusCode::NOT_FOUND.into_response(),
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}
