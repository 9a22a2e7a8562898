use axum::{body::to_bytes, response::Response};
use serde_json::Value;

/// Reads a response body as JSON, `Value::Null` when the body is not JSON.
pub async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
