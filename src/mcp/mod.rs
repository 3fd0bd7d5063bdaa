//! Model Context Protocol (MCP) Module
//!
//! This module contains the JSON-RPC dispatch core, including:
//! - Protocol models (JsonRpcRequest, constants, error codes)
//! - RPC helpers (success/error envelopes, synthetic id generation)
//! - MCP handlers (batch coordinator, request processor, method dispatch)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used entry points
pub use handlers::{process_body, process_request, routes};
