//! Error types shared across the application.
//!
//! Protocol-level failures (bad envelope, unknown method) never become Rust
//! errors at all; they are shaped directly into JSON-RPC error responses by
//! the request processor. This enum covers the remaining failure modes that
//! are raised inside handlers and caught at the processor boundary.

use thiserror::Error;

/// Errors raised by the tool registry and the `tools/call` handler.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool descriptor failed validation during registration.
    #[error("{0}")]
    Validation(String),

    /// A `tools/call` could not be routed to a working executor, or the
    /// executor itself failed. Surfaced on the wire as code -32603 with the
    /// message preserved in `error.data.message`.
    #[error("{0}")]
    Invocation(String),
}
