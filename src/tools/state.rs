//! Application State
//!
//! The state shared with the HTTP layer: the tool registry, with the
//! built-in tools registered. Embedders can keep registering tools through
//! `AppState::registry` after construction.

use super::registry::ToolRegistry;
use super::sayhello::{self, SayHello};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state holding the tool registry.
pub struct AppState {
    /// Registered tools, read-mostly during request handling.
    pub registry: ToolRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the state with the built-in `sayhello` tool registered.
    pub fn new() -> Self {
        let registry = ToolRegistry::new();
        registry
            .add_or_replace(sayhello::descriptor(), Some(Arc::new(SayHello)))
            .expect("built-in tool descriptor is valid");

        Self { registry }
    }
}
