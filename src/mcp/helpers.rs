//! MCP Protocol Helpers
//!
//! Helper functions for JSON-RPC envelope construction and synthetic
//! request-id generation.

use chrono::Utc;
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Builds a JSON-RPC 2.0 error response carrying a `data` payload.
///
/// Used for handler failures, where the original error message is preserved
/// in `error.data.message` alongside the generic code/message pair.
pub fn rpc_error_with_data(
    id: Value,
    code: i32,
    message: impl Into<String>,
    data: Value,
) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
            "data": data,
        }
    })
}

/// Generates a synthetic request id of the form `<prefix>_<millis>`.
///
/// Used when an inbound request carries no id, so clients can still
/// correlate the response. Uniqueness is time-based and therefore
/// best-effort: two calls within the same millisecond collide.
pub fn synthetic_id(prefix: &str) -> Value {
    Value::String(format!("{}_{}", prefix, Utc::now().timestamp_millis()))
}
