use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_RESTAURANT_ID_KEY: &str = "canteen:restaurant:id";

/// ID of the restaurant signed in through restaurant login
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionRestaurantId(pub i32);

impl SessionRestaurantId {
    pub async fn insert(session: &Session, restaurant_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_RESTAURANT_ID_KEY, SessionRestaurantId(restaurant_id))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionRestaurantId>(SESSION_RESTAURANT_ID_KEY)
            .await?
            .map(|SessionRestaurantId(id)| id))
    }
}
