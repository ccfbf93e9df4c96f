//! Session token decoding and the extractors guarding authenticated routes.
//!
//! Tokens are HS256 JWTs carrying the user name of the signed in account. They are read from
//! the `Authorization: Bearer` header, falling back to the token stored in the session at
//! login. A request without a valid token never reaches the handler.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::token::SessionToken},
};

/// Claims carried by a session token
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub exp: usize,
}

/// Verifies the token signature and expiry, returning its claims
pub fn decode_claims(token: &str, jwt_secret: &str) -> Result<Claims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);

    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// User name of a request carrying a valid session token
///
/// Rejected requests render the owner login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedToken {
    pub user_name: String,
}

impl DecodedToken {
    /// Decodes the token of a request, preferring the bearer header over the session
    pub async fn from_parts(parts: &Parts, jwt_secret: &str) -> Result<Self, Error> {
        let token = match bearer_token(&parts.headers) {
            Some(token) => token.to_string(),
            None => {
                let session = parts
                    .extensions
                    .get::<Session>()
                    .ok_or(AuthError::MissingToken)?;

                SessionToken::get(session)
                    .await?
                    .ok_or(AuthError::MissingToken)?
            }
        };

        let claims = decode_claims(&token, jwt_secret)?;

        Ok(Self {
            user_name: claims.user_name,
        })
    }
}

impl FromRequestParts<AppState> for DecodedToken {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts, &state.jwt_secret).await
    }
}

/// Session token of a customer browsing restaurant pages
///
/// Same token rules as [`DecodedToken`], rejected requests render the customer login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerToken(pub DecodedToken);

impl FromRequestParts<AppState> for CustomerToken {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match DecodedToken::from_parts(parts, &state.jwt_secret).await {
            Ok(token) => Ok(Self(token)),
            Err(Error::AuthError(AuthError::MissingToken | AuthError::InvalidToken(_))) => {
                Err(AuthError::CustomerNotInSession.into())
            }
            Err(err) => Err(err),
        }
    }
}
