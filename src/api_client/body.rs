//! JSON request bodies.
//!
//! [`ApiClient::request`](crate::api_client::ApiClient::request) never sends
//! a body; this is offered for callers that assemble their own requests.

use serde::Serialize;
use tracing::warn;

/// Serializes `value` as JSON, or logs the failure and returns `None`.
pub fn to_json_body<S: Serialize + ?Sized>(value: &S) -> Option<Vec<u8>> {
    match serde_json::to_vec(value) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!("Error converting dictionary to data: {}", e);
            None
        }
    }
}
