//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the JSON-RPC dispatch core: the HTTP endpoint,
//! the batch coordinator, the per-request processor, and the built-in
//! method handlers (`initialize`, `tools/list`, `tools/call`).

use super::{helpers::*, models::*};
use crate::errors::ToolError;
use crate::tools::state::{AppState, SharedState};
use axum::{
    body::Bytes, extract::State, http::StatusCode, response::IntoResponse, routing::post, Json,
    Router,
};
use futures_util::future::join_all;
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Accepts a single JSON-RPC request or a batch array and returns the
/// matching response shape. Always HTTP 200 with a JSON-RPC envelope,
/// except for undecodable non-empty bodies which are rejected with 400.
async fn handle_mcp(State(state): State<SharedState>, body: Bytes) -> impl IntoResponse {
    if body.is_empty() {
        return Json(rpc_error(Value::Null, INVALID_REQUEST, "Empty request body"))
            .into_response();
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("JSON parse error: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    Json(process_body(&state, payload).await).into_response()
}

// =============================================================================
// Batch Coordinator
// =============================================================================

/// Processes a decoded request body: a batch array, a single request, or a
/// `null` body (treated the same as an empty body).
///
/// Batch elements run concurrently; the output array preserves input order
/// and is always the same length as the input.
pub async fn process_body(state: &AppState, payload: Value) -> Value {
    match payload {
        Value::Null => rpc_error(Value::Null, INVALID_REQUEST, "Empty request body"),
        Value::Array(requests) => {
            let pending = requests.into_iter().map(|req| process_request(state, req));
            Value::Array(join_all(pending).await)
        }
        single => process_request(state, single).await,
    }
}

// =============================================================================
// Request Processor
// =============================================================================

/// Processes one decoded JSON-RPC request object into a response envelope.
///
/// Every failure path terminates in a structured error response; nothing
/// propagates past this boundary as a Rust error.
pub async fn process_request(state: &AppState, raw: Value) -> Value {
    let raw_id = raw.get("id").cloned();

    let req: JsonRpcRequest = match serde_json::from_value(raw) {
        Ok(r) => r,
        Err(_) => {
            return rpc_error(id_or_unknown(raw_id), INVALID_REQUEST, "Invalid Request");
        }
    };

    if req.jsonrpc.as_deref() != Some("2.0") {
        return rpc_error(id_or_unknown(req.id), INVALID_REQUEST, "Invalid Request");
    }

    let method = match req.method {
        Some(m) => m,
        None => return rpc_error(id_or_unknown(req.id), INVALID_REQUEST, "Missing method"),
    };

    // An explicit `null` id counts as absent, so every response can carry a
    // non-null, correlatable id.
    let had_id = matches!(req.id, Some(ref v) if !v.is_null());
    let id = if had_id {
        req.id.unwrap_or(Value::Null)
    } else {
        synthetic_id("req")
    };

    let params = req.params.unwrap_or_else(|| json!({}));

    tracing::debug!("MCP call: {method} (id: {id:?})");

    let outcome = match method.as_str() {
        "initialize" => handle_initialize(state, &params),
        "tools/list" => handle_tools_list(state),
        "tools/call" => handle_tools_call(state, &params),
        _ => {
            tracing::warn!("Unknown method: {method}");
            return rpc_error(id, METHOD_NOT_FOUND, "Method not found");
        }
    };

    match outcome {
        Ok(result) => rpc_success(id, result),
        Err(err) => {
            let err_id = if had_id { id } else { synthetic_id("err") };
            rpc_error_with_data(
                err_id,
                INTERNAL_ERROR,
                "Internal error",
                json!({ "message": err.to_string() }),
            )
        }
    }
}

/// Returns the request id when one is present and non-null, else the
/// literal `"unknown"` used for envelope-validation failures.
fn id_or_unknown(id: Option<Value>) -> Value {
    match id {
        Some(v) if !v.is_null() => v,
        _ => Value::String("unknown".to_string()),
    }
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize(state: &AppState, params: &Value) -> Result<Value, ToolError> {
    tracing::debug!("initialize params: {params}");

    let names = state.registry.tool_names();
    let instructions = if names.is_empty() {
        "No tools are currently registered.".to_string()
    } else {
        format!("Available tools: {}.", names.join(", "))
    };

    Ok(json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": {},
            "prompts": {},
            "logging": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        },
        "instructions": instructions,
    }))
}

/// Handles `tools/list` request: full descriptors in insertion order.
fn handle_tools_list(state: &AppState) -> Result<Value, ToolError> {
    Ok(json!({ "tools": state.registry.list_tools() }))
}

/// Handles `tools/call` request.
///
/// A registered descriptor without an executor yields an "is not
/// implemented" invocation error; the registry deliberately permits that
/// state, so the error is part of the observable contract.
fn handle_tools_call(state: &AppState, params: &Value) -> Result<Value, ToolError> {
    let name = params
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ToolError::Invocation("Tool name is required".to_string()))?;

    if !state.registry.contains(name) {
        return Err(ToolError::Invocation(format!("Tool '{name}' not found")));
    }

    let executor = state
        .registry
        .executor(name)
        .ok_or_else(|| ToolError::Invocation(format!("Tool '{name}' is not implemented")))?;

    let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
    executor.execute(args)
}
