//! MCP Protocol Models and Constants
//!
//! Data structures and constants for the JSON-RPC 2.0 envelope and the
//! Model Context Protocol (MCP) handshake.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier
pub const SERVER_NAME: &str = "greeting-mcp-rust";
/// Server version reported in `initialize` and `/info`
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// JSON-RPC Error Codes
// =============================================================================

/// The body could not be decoded as JSON.
pub const PARSE_ERROR: i32 = -32700;
/// The envelope is not a valid JSON-RPC 2.0 request.
pub const INVALID_REQUEST: i32 = -32600;
/// The requested method is not in the dispatch table.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// A handler failed; invocation errors share this code (see DESIGN.md).
pub const INTERNAL_ERROR: i32 = -32603;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope.
///
/// Every field is optional at decode time so that malformed envelopes can be
/// diagnosed by the request processor instead of being rejected by serde.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (must be "2.0")
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: Option<String>,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
