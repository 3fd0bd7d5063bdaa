//! Greeting MCP Server Library
//!
//! This library provides a minimal Model Context Protocol (MCP) "tools"
//! server: a JSON-RPC 2.0 dispatch core plus a tool registry, exposed over
//! HTTP by an axum router.

// Shared error taxonomy
pub mod errors;

// Domain modules
pub mod mcp;
pub mod tools;

// Infrastructure
pub mod router;
