//! Tool Registry
//!
//! An ordered collection of `(descriptor, executor)` pairs with
//! add-or-replace-by-name semantics. The executor is optional: a tool may
//! be listed before its executor ships, and `tools/call` reports that state
//! as an explicit "is not implemented" error.

use super::models::{ToolDescriptor, ToolExecutor};
use crate::errors::ToolError;
use std::sync::{Arc, RwLock};

struct ToolEntry {
    descriptor: ToolDescriptor,
    executor: Option<Arc<dyn ToolExecutor>>,
}

/// Ordered tool registry.
///
/// Registration happens at startup in the reference use, but the lock makes
/// runtime add-or-replace safe as well; each mutation is a single critical
/// section.
#[derive(Default)]
pub struct ToolRegistry {
    entries: RwLock<Vec<ToolEntry>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the descriptor, removes any existing tool with the same
    /// name, and appends the new entry. Replacement therefore moves a tool
    /// to the end of the listing order.
    pub fn add_or_replace(
        &self,
        descriptor: ToolDescriptor,
        executor: Option<Arc<dyn ToolExecutor>>,
    ) -> Result<(), ToolError> {
        if descriptor.name.is_empty() {
            return Err(ToolError::Validation("Tool name is required".to_string()));
        }
        if descriptor.description.is_empty() {
            return Err(ToolError::Validation(
                "Tool description is required".to_string(),
            ));
        }
        if !descriptor.input_schema.is_object() {
            return Err(ToolError::Validation(
                "Tool inputSchema is required".to_string(),
            ));
        }

        let mut entries = self.entries.write().expect("tool registry lock poisoned");
        entries.retain(|entry| entry.descriptor.name != descriptor.name);
        entries.push(ToolEntry {
            descriptor,
            executor,
        });
        Ok(())
    }

    /// Returns the current descriptors in insertion order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.entries
            .read()
            .expect("tool registry lock poisoned")
            .iter()
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    /// Returns the registered tool names in insertion order.
    pub fn tool_names(&self) -> Vec<String> {
        self.entries
            .read()
            .expect("tool registry lock poisoned")
            .iter()
            .map(|entry| entry.descriptor.name.clone())
            .collect()
    }

    /// Whether a tool with this name is registered (with or without an
    /// executor).
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .expect("tool registry lock poisoned")
            .iter()
            .any(|entry| entry.descriptor.name == name)
    }

    /// Returns the executor for a registered tool, or `None` when the tool
    /// is unknown or descriptor-only.
    pub fn executor(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.entries
            .read()
            .expect("tool registry lock poisoned")
            .iter()
            .find(|entry| entry.descriptor.name == name)
            .and_then(|entry| entry.executor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(name: &str) -> ToolDescriptor {
        ToolDescriptor {
            name: name.to_string(),
            description: format!("The {name} tool"),
            input_schema: json!({ "type": "object" }),
        }
    }

    #[test]
    fn add_or_replace_preserves_insertion_order() {
        let registry = ToolRegistry::new();
        registry.add_or_replace(descriptor("alpha"), None).unwrap();
        registry.add_or_replace(descriptor("beta"), None).unwrap();

        assert_eq!(registry.tool_names(), vec!["alpha", "beta"]);

        // Replacement moves the tool to the end.
        registry.add_or_replace(descriptor("alpha"), None).unwrap();
        assert_eq!(registry.tool_names(), vec!["beta", "alpha"]);
        assert_eq!(registry.list_tools().len(), 2);
    }

    #[test]
    fn add_or_replace_rejects_incomplete_descriptors() {
        let registry = ToolRegistry::new();

        let mut missing_name = descriptor("x");
        missing_name.name.clear();
        assert!(registry.add_or_replace(missing_name, None).is_err());

        let mut missing_description = descriptor("x");
        missing_description.description.clear();
        assert!(registry.add_or_replace(missing_description, None).is_err());

        let mut bad_schema = descriptor("x");
        bad_schema.input_schema = json!("not an object");
        assert!(registry.add_or_replace(bad_schema, None).is_err());

        assert!(registry.list_tools().is_empty());
    }

    #[test]
    fn executor_lookup_distinguishes_unknown_from_descriptor_only() {
        let registry = ToolRegistry::new();
        registry.add_or_replace(descriptor("listed"), None).unwrap();

        assert!(registry.contains("listed"));
        assert!(registry.executor("listed").is_none());
        assert!(!registry.contains("missing"));
    }
}
