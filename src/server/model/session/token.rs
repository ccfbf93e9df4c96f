use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_TOKEN_KEY: &str = "canteen:auth:token";

/// Signed session token issued at login, checked by every authenticated route
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_TOKEN_KEY, SessionToken(token.to_string()))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionToken>(SESSION_TOKEN_KEY)
            .await?
            .map(|SessionToken(token)| token))
    }
}
