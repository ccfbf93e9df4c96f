use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_OWNER_ID_KEY: &str = "canteen:owner:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionOwnerId(pub String);

impl SessionOwnerId {
    /// Insert owner ID into session
    pub async fn insert(session: &Session, owner_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_OWNER_ID_KEY, SessionOwnerId(owner_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get owner ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionOwnerId>(SESSION_OWNER_ID_KEY)
            .await?
            .map(|SessionOwnerId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session owner id: {}", e))
                })
            })
            .transpose()
    }
}
