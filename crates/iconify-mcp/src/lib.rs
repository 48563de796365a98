//! MCP surface of the Iconify adapter.
//!
//! # Key Abstractions
//!
//! - [`ToolRegistry`] / [`ResourceRegistry`]: what a registry serves and how it dispatches
//! - [`IconTools`] / [`IconResources`]: the adapter's tools and resources over an `IconDirectory`
//! - [`IconifyMcpServer`]: rmcp `ServerHandler` over a set of registries
//! - [`handlers`]: response text shared with the CLI

#![doc = include_str!("../README.md")]

pub mod error;
pub mod handlers;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::McpErrorExt;
pub use registry::{ResourceRegistry, ResourceResult, ToolRegistry, ToolResult};
pub use resources::{IconResources, IconifyResource};
pub use server::IconifyMcpServer;
pub use tools::IconTools;
