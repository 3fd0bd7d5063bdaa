//! Tool Domain Models
//!
//! Data structures describing tools exposed to protocol clients.

use crate::errors::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor for a tool exposed through `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    /// Unique tool name, the key for add-or-replace semantics
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON-Schema-like object describing the tool's arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Capability interface implemented by every working tool.
///
/// Executors are pure argument-to-result functions; anything that fails
/// surfaces as a `ToolError::Invocation` and is shaped into a JSON-RPC
/// error by the request processor.
pub trait ToolExecutor: Send + Sync {
    /// Runs the tool against the decoded `arguments` object.
    fn execute(&self, args: Value) -> Result<Value, ToolError>;
}
