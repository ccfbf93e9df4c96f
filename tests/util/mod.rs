//! Helpers for inspecting controller responses.

use axum::{body::to_bytes, response::Response};

/// Reads a response body to a string
pub async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

/// Reads a JSON response body
pub async fn body_json(resp: Response) -> serde_json::Value {
    let body = body_string(resp).await;

    serde_json::from_str(&body).expect("response body should be JSON")
}

/// Attribute identifying which page a rendered HTML response is
pub fn page_marker(page: &str) -> String {
    format!("data-page=\"{page}\"")
}
