use serde::{Deserialize, Serialize};

/// The response body when a JSON request is rejected
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub msg: String,
}

impl ErrorDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
