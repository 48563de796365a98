//! The rmcp server handler.
//!
//! [`IconifyMcpServer`] owns the registries it was built with and routes
//! `tools/*` and `resources/*` requests to the first registry that claims
//! the tool name or resource URI.

use std::sync::Arc;

use iconify_client::IconDirectory;
use iconify_core::traits::ConfigProvider;
use iconify_core::{Error, Result};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, ListResourceTemplatesResult,
    ListResourcesResult, ListToolsResult, PaginatedRequestParams, ReadResourceRequestParams,
    ReadResourceResult, Resource, ResourceTemplate, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;

use crate::registry::{ResourceRegistry, ToolRegistry};
use crate::resources::IconResources;
use crate::tools::IconTools;

/// MCP server over a fixed set of tool and resource registries.
pub struct IconifyMcpServer {
    name: String,
    version: String,
    instructions: Option<String>,
    tools: Vec<Box<dyn ToolRegistry>>,
    resources: Vec<Box<dyn ResourceRegistry>>,
}

impl IconifyMcpServer {
    /// Create a server with no registries.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: None,
            tools: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Create the standard server: the adapter's tools and resources over
    /// one shared `directory`, identified from `config`.
    pub fn for_directory<C, D>(config: &C, directory: D) -> Self
    where
        C: ConfigProvider,
        D: IconDirectory + 'static,
    {
        let directory = Arc::new(directory);
        let mut server = Self::new(config.server_name(), env!("CARGO_PKG_VERSION"))
            .with_tools(IconTools::with_shared(Arc::clone(&directory)))
            .with_resources(IconResources::with_shared(directory));
        if let Some(instructions) = config.server_instructions() {
            server = server.with_instructions(instructions);
        }
        server
    }

    /// Set the instructions sent to clients during initialization.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Register a tool registry.
    pub fn with_tools(mut self, registry: impl ToolRegistry + 'static) -> Self {
        self.tools.push(Box::new(registry));
        self
    }

    /// Register a resource registry.
    pub fn with_resources(mut self, registry: impl ResourceRegistry + 'static) -> Self {
        self.resources.push(Box::new(registry));
        self
    }

    /// Server name reported to clients.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Initialization payload: identity, capabilities and instructions.
    pub fn info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .build();
        info.server_info.name = self.name.clone();
        info.server_info.version = self.version.clone();
        info.instructions = self.instructions.clone();
        info
    }

    /// Every tool across all registries.
    pub fn all_tools(&self) -> Vec<Tool> {
        self.tools.iter().flat_map(|r| r.tools()).collect()
    }

    /// Every concrete resource across all registries.
    pub fn all_resources(&self) -> Vec<Resource> {
        self.resources.iter().flat_map(|r| r.resources()).collect()
    }

    /// Every resource template across all registries.
    pub fn all_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resources
            .iter()
            .flat_map(|r| r.resource_templates())
            .collect()
    }

    /// Call a tool by name.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        args: Value,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        for registry in &self.tools {
            if let Some(future) = registry.call(name, args.clone()) {
                return future.await;
            }
        }
        log::warn!("unknown tool requested: {name}");
        Err(ErrorData::invalid_params(format!("unknown tool: {name}"), None))
    }

    /// Read a resource by URI.
    pub async fn read(&self, uri: &str) -> std::result::Result<ReadResourceResult, ErrorData> {
        for registry in &self.resources {
            if let Some(future) = registry.read(uri) {
                return future.await;
            }
        }
        log::warn!("unknown resource requested: {uri}");
        Err(ErrorData::resource_not_found(
            format!("unknown resource: {uri}"),
            Some(serde_json::json!({ "uri": uri })),
        ))
    }

    /// Serve MCP over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        log::info!(
            "serving {} v{} over stdio ({} tools)",
            self.name,
            self.version,
            self.all_tools().len()
        );
        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| Error::transport("MCP stdio initialization", e))?;
        let reason = service
            .waiting()
            .await
            .map_err(|e| Error::transport("MCP stdio session", e))?;
        log::info!("MCP session ended: {reason:?}");
        Ok(())
    }
}

impl ServerHandler for IconifyMcpServer {
    fn get_info(&self) -> ServerInfo {
        self.info()
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.all_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        self.dispatch_tool(&request.name, args).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(self.all_resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            self.all_resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, ErrorData> {
        self.read(&request.uri).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::ToolResult;
    use crate::resources::{COLLECTIONS_URI, USAGE_GUIDE_URI};
    use crate::tools::{GET_ICON_SNIPPET, SEARCH_ICONS};
    use iconify_client::MockIconDirectory;
    use iconify_core::traits::{DEFAULT_API_BASE, DEFAULT_USER_AGENT};
    use rmcp::model::{Content, ErrorCode};
    use serde_json::json;

    #[derive(Clone)]
    struct TestConfig {
        instructions: Option<String>,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "iconify-test"
        }

        fn api_base(&self) -> &str {
            DEFAULT_API_BASE
        }

        fn user_agent(&self) -> &str {
            DEFAULT_USER_AGENT
        }

        fn server_instructions(&self) -> Option<&str> {
            self.instructions.as_deref()
        }
    }

    struct EchoTools;

    impl ToolRegistry for EchoTools {
        fn tools(&self) -> Vec<Tool> {
            vec![Tool::new("echo", "Echo the arguments", Arc::new(serde_json::Map::new()))]
        }

        fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
            (name == "echo").then(|| -> ToolResult {
                Box::pin(async move { Ok(CallToolResult::success(vec![Content::text(args.to_string())])) })
            })
        }
    }

    fn server(directory: MockIconDirectory) -> IconifyMcpServer {
        IconifyMcpServer::for_directory(&TestConfig { instructions: None }, directory)
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0].as_text().unwrap().text.clone()
    }

    // ========================================================================
    // Identity
    // ========================================================================

    #[test]
    fn test_info() {
        let config = TestConfig {
            instructions: Some("Search icons first".to_string()),
        };
        let server = IconifyMcpServer::for_directory(&config, MockIconDirectory::new());
        let info = server.info();
        assert_eq!(info.server_info.name, "iconify-test");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.instructions.as_deref(), Some("Search icons first"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_listings() {
        let server = server(MockIconDirectory::new());
        assert_eq!(server.all_tools().len(), 4);
        assert_eq!(server.all_resources().len(), 2);
        assert_eq!(server.all_resource_templates().len(), 2);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    #[tokio::test]
    async fn test_dispatch_reaches_registered_tools() {
        let server = server(MockIconDirectory::new()).with_tools(EchoTools);
        assert_eq!(server.all_tools().len(), 5);

        let result = server.dispatch_tool("echo", json!({"a": 1})).await.unwrap();
        assert_eq!(text_of(&result), r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = server(MockIconDirectory::new())
            .dispatch_tool("nope", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let err = server(MockIconDirectory::new())
            .read("iconify://nope")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_end_to_end_scenarios() {
        let directory = MockIconDirectory::new()
            .with_collection("mdi", "Material Design Icons")
            .with_search_icons(["mdi:home", "lucide:home-outline"])
            .with_svg("mdi:home", "<svg>OK</svg>");
        let server = server(directory.clone());

        let react = server
            .dispatch_tool(
                GET_ICON_SNIPPET,
                json!({"iconSet": "mdi", "iconName": "home", "framework": "react"}),
            )
            .await
            .unwrap();
        assert!(text_of(&react).contains("mdi:home"));
        assert_eq!(directory.svg_fetches(), 0);

        let raw = server
            .dispatch_tool(
                GET_ICON_SNIPPET,
                json!({"iconSet": "mdi", "iconName": "home", "framework": "raw-svg"}),
            )
            .await
            .unwrap();
        assert_eq!(text_of(&raw), "<svg>OK</svg>");

        let search = server
            .dispatch_tool(SEARCH_ICONS, json!({"query": "home", "limit": 2}))
            .await
            .unwrap();
        assert!(text_of(&search).contains("- mdi:home\n- lucide:home-outline\n"));

        let listing = server.read(COLLECTIONS_URI).await.unwrap();
        assert_eq!(listing.contents.len(), 1);

        let guide = server.read(USAGE_GUIDE_URI).await.unwrap();
        assert_eq!(guide.contents.len(), 1);
    }

    #[tokio::test]
    async fn test_search_limit_validation_through_server() {
        let server = server(MockIconDirectory::new());
        for limit in [0, 101] {
            let err = server
                .dispatch_tool(SEARCH_ICONS, json!({"query": "home", "limit": limit}))
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        }
    }
}
