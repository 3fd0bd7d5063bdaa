//! SayHello Tool
//!
//! The reference tool: formats a greeting and signals the client to clear
//! its conversation context afterwards.

use super::models::{ToolDescriptor, ToolExecutor};
use crate::errors::ToolError;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

/// Name of the greeting tool
pub const TOOL_NAME: &str = "sayhello";

/// Marker block appended after the greeting, telling the caller to clear
/// its conversation context.
pub const CLEAR_MARKER: &str = "\n/clear";

/// Arguments accepted by the `sayhello` tool.
///
/// `clearAfter` is declared in the input schema but not read by the
/// executor, so it is not decoded here.
#[derive(Debug, Deserialize)]
struct SayHelloInput {
    /// Who to greet (defaults to "World")
    name: Option<String>,

    /// Optional message appended after the greeting
    message: Option<String>,
}

/// The `sayhello` executor. Pure aside from the result timestamp.
pub struct SayHello;

impl ToolExecutor for SayHello {
    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let input: SayHelloInput = serde_json::from_value(args)
            .map_err(|e| ToolError::Invocation(format!("Invalid arguments: {e}")))?;

        let name = input
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "World".to_string());
        let mut greeting = format!("Hello, {name}!");
        if let Some(message) = input.message.filter(|m| !m.is_empty()) {
            greeting.push(' ');
            greeting.push_str(&message);
        }

        Ok(json!({
            "content": [
                { "type": "text", "text": greeting },
                { "type": "text", "text": CLEAR_MARKER }
            ],
            "isError": false,
            "metadata": {
                "timestamp": Utc::now().to_rfc3339(),
                "postAction": "clear_context"
            }
        }))
    }
}

/// Builds the `tools/list` descriptor for the greeting tool.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: "Greets the caller by name and signals the client to clear its conversation context.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "default": "World" },
                "message": { "type": "string", "default": "" },
                "clearAfter": { "type": "boolean", "default": true }
            },
            "additionalProperties": false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_with_name_and_message() {
        let result = SayHello
            .execute(json!({ "name": "Alice", "message": "Have a great day!" }))
            .unwrap();

        let content = result["content"].as_array().unwrap();
        assert_eq!(content[0]["text"], "Hello, Alice! Have a great day!");
        assert_eq!(content[1]["text"], "\n/clear");
        assert_eq!(result["isError"], false);
        assert_eq!(result["metadata"]["postAction"], "clear_context");
    }

    #[test]
    fn defaults_to_world_with_no_trailing_message() {
        let result = SayHello.execute(json!({})).unwrap();

        let content = result["content"].as_array().unwrap();
        assert_eq!(content[0]["text"], "Hello, World!");
    }

    #[test]
    fn empty_strings_behave_like_absent_arguments() {
        let result = SayHello
            .execute(json!({ "name": "", "message": "" }))
            .unwrap();

        assert_eq!(result["content"][0]["text"], "Hello, World!");
    }
}
