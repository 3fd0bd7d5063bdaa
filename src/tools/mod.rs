//! Tools Domain Module
//!
//! This module contains the tool surface of the server, including:
//! - Tool models (ToolDescriptor, the ToolExecutor capability trait)
//! - The ordered tool registry (add-or-replace-by-name)
//! - The built-in `sayhello` executor
//! - Application state shared with the HTTP layer

pub mod models;
pub mod registry;
pub mod sayhello;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{ToolDescriptor, ToolExecutor};
pub use registry::ToolRegistry;
pub use state::{AppState, SharedState};
