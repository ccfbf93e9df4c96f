//! Test context structure and utilities.
//!
//! The context returned by [`TestBuilder`](crate::TestBuilder) holds an in-memory SQLite
//! database, a session backed by a memory store, and the secret used to mint tokens.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use serde::Serialize;
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_canteen_tables().build().await?;
///
/// let (owner, restaurant) = test.owner().insert_owner_with_restaurant("owner").await?;
/// let token = test.token_for(&owner.user_name)?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session store for test authentication flows
    pub session: Session,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
}

#[derive(Serialize)]
struct TestClaims<'a> {
    #[serde(rename = "userName")]
    user_name: &'a str,
    exp: usize,
}

impl TestContext {
    /// Convert database and JWT secret into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main canteen crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.jwt_secret.clone()))
    }

    /// Mint a valid session token for the provided user name, expiring in one hour.
    pub fn token_for(&self, user_name: &str) -> Result<String, TestError> {
        self.token_expiring_at(user_name, Utc::now() + Duration::hours(1))
    }

    /// Mint a session token that expired an hour ago.
    pub fn expired_token_for(&self, user_name: &str) -> Result<String, TestError> {
        self.token_expiring_at(user_name, Utc::now() - Duration::hours(1))
    }

    fn token_expiring_at(
        &self,
        user_name: &str,
        expires_at: chrono::DateTime<Utc>,
    ) -> Result<String, TestError> {
        let claims = TestClaims {
            user_name,
            exp: expires_at.timestamp() as usize,
        };

        Ok(jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?)
    }
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            jwt_secret: TEST_JWT_SECRET.to_string(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
