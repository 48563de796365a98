//! Tool and resource registries.
//!
//! A registry advertises what it serves and dispatches calls by name or URI.
//! Dispatch returns `None` when the name or URI is not one of its own, so
//! several registries can be consulted in turn.

use std::future::Future;
use std::pin::Pin;

use rmcp::model::{CallToolResult, ErrorData, ReadResourceResult, Resource, ResourceTemplate, Tool};
use serde_json::Value;

/// Boxed future returned by [`ToolRegistry::call`].
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Boxed future returned by [`ResourceRegistry::read`].
pub type ResourceResult =
    Pin<Box<dyn Future<Output = Result<ReadResourceResult, ErrorData>> + Send>>;

/// A set of MCP tools.
pub trait ToolRegistry: Send + Sync {
    /// Tool definitions advertised by `tools/list`.
    fn tools(&self) -> Vec<Tool>;

    /// Invoke `name` with JSON `args`, or `None` if the tool is not ours.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Number of tools in the registry.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Whether the registry serves `name`.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

/// A set of MCP resources.
pub trait ResourceRegistry: Send + Sync {
    /// Concrete resources advertised by `resources/list`.
    fn resources(&self) -> Vec<Resource>;

    /// URI templates advertised by `resources/templates/list`.
    fn resource_templates(&self) -> Vec<ResourceTemplate>;

    /// Read `uri`, or `None` if the URI is not ours.
    fn read(&self, uri: &str) -> Option<ResourceResult>;
}
