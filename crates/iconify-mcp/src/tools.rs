//! The adapter's MCP tools.
//!
//! [`IconTools`] implements [`ToolRegistry`] over any [`IconDirectory`]:
//! - `search-icons`: search with optional per-icon snippets
//! - `get-icon-snippet`: one icon's snippet plus setup guidance
//! - `icon-customization-guide`: customization options per framework
//! - `unplugin-icons-config`: unplugin-icons build configuration

use std::sync::Arc;

use iconify_client::IconDirectory;
use iconify_core::guidance::customization_guide;
use iconify_core::unplugin::{
    BuildTool, UnpluginConfigOptions, UnpluginFramework, generate_unplugin_config,
};
use iconify_core::{Framework, IconReference, SearchQuery};
use rmcp::model::{CallToolResult, Content, ErrorData, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{McpErrorExt, in_band_error, invalid_arguments};
use crate::handlers;
use crate::registry::{ToolRegistry, ToolResult};

/// Tool name for icon search.
pub const SEARCH_ICONS: &str = "search-icons";
/// Tool name for single-icon snippets.
pub const GET_ICON_SNIPPET: &str = "get-icon-snippet";
/// Tool name for the customization guide.
pub const ICON_CUSTOMIZATION_GUIDE: &str = "icon-customization-guide";
/// Tool name for the unplugin-icons configuration generator.
pub const UNPLUGIN_ICONS_CONFIG: &str = "unplugin-icons-config";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a `serde_json::Value::Object` to an `Arc<serde_json::Map>`.
fn json_schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// Input schema derived from an argument type.
fn schema_of<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    json_schema(serde_json::to_value(&schema).unwrap_or_default())
}

/// Build a `Tool` whose input schema comes from `T`.
fn make_tool<T: JsonSchema>(name: &'static str, description: &'static str) -> Tool {
    Tool::new(name, description, schema_of::<T>())
}

/// Deserialize tool arguments, reporting failures as `invalid_params`.
fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, ErrorData> {
    serde_json::from_value(args).map_err(|e| invalid_arguments(tool, e))
}

fn text_response(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

fn default_limit() -> u32 {
    SearchQuery::DEFAULT_LIMIT
}

fn default_true() -> bool {
    true
}

/// Arguments for `search-icons`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchIconsArgs {
    /// The search term for icons (e.g., 'home', 'user').
    pub query: String,
    /// Maximum number of results to return (1-100).
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 100))]
    pub limit: u32,
    /// If provided, returns code snippets for this framework.
    #[serde(default)]
    pub framework: Option<Framework>,
    /// Optional: Icon set ID (prefix) to search within (e.g., 'mdi', 'lucide').
    #[serde(default)]
    pub set_id: Option<String>,
}

impl SearchIconsArgs {
    /// Validate and convert into an upstream query.
    pub fn into_query(self) -> iconify_core::Result<SearchQuery> {
        SearchQuery::validated(self.query, self.limit, self.set_id)
    }
}

/// Arguments for `get-icon-snippet`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIconSnippetArgs {
    /// The icon set ID (prefix) (e.g., 'mdi', 'lucide').
    pub icon_set: String,
    /// The name of the icon within the set (e.g., 'home', 'account').
    pub icon_name: String,
    /// The target framework for the snippet.
    pub framework: Framework,
}

/// Arguments for `icon-customization-guide`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomizationGuideArgs {
    /// The framework you want customization guidance for.
    pub framework: Framework,
}

/// Arguments for `unplugin-icons-config`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnpluginConfigArgs {
    /// The build tool you're using.
    pub build_tool: BuildTool,
    /// The framework you're using.
    pub framework: UnpluginFramework,
    /// Include custom collections configuration.
    #[serde(default)]
    pub custom_collections: bool,
    /// Include auto-import configuration.
    #[serde(default = "default_true")]
    pub auto_import: bool,
}

impl From<UnpluginConfigArgs> for UnpluginConfigOptions {
    fn from(args: UnpluginConfigArgs) -> Self {
        Self {
            build_tool: args.build_tool,
            framework: args.framework,
            custom_collections: args.custom_collections,
            auto_import: args.auto_import,
        }
    }
}

// ---------------------------------------------------------------------------
// IconTools<D>
// ---------------------------------------------------------------------------

/// MCP tools backed by an [`IconDirectory`].
pub struct IconTools<D: IconDirectory> {
    directory: Arc<D>,
}

impl<D: IconDirectory + 'static> IconTools<D> {
    /// Create tools that own `directory`.
    pub fn new(directory: D) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Create tools with a shared directory reference.
    pub fn with_shared(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D: IconDirectory + 'static> ToolRegistry for IconTools<D> {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool::<SearchIconsArgs>(
                SEARCH_ICONS,
                "Searches for icons on Iconify and returns a list of matching icons. Can optionally provide integration snippets.",
            ),
            make_tool::<GetIconSnippetArgs>(
                GET_ICON_SNIPPET,
                "Retrieves an integration snippet for a specific icon and framework.",
            ),
            make_tool::<CustomizationGuideArgs>(
                ICON_CUSTOMIZATION_GUIDE,
                "Provides guidance on how to customize icons in different frameworks",
            ),
            make_tool::<UnpluginConfigArgs>(
                UNPLUGIN_ICONS_CONFIG,
                "Generates unplugin-icons configuration for different build tools and frameworks",
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let directory = Arc::clone(&self.directory);
        log::debug!("tool call: {name}");

        match name {
            SEARCH_ICONS => Some(Box::pin(async move {
                let args: SearchIconsArgs = parse_args(SEARCH_ICONS, args)?;
                let framework = args.framework;
                let query = args.into_query().map_err(|e| e.to_mcp_error())?;
                match handlers::search_icons(directory.as_ref(), &query, framework).await {
                    Ok(text) => Ok(text_response(text)),
                    Err(e) => Ok(in_band_error("Error searching icons", &e)),
                }
            })),

            GET_ICON_SNIPPET => Some(Box::pin(async move {
                let args: GetIconSnippetArgs = parse_args(GET_ICON_SNIPPET, args)?;
                let icon = IconReference::new(args.icon_set, args.icon_name)
                    .map_err(|e| e.to_mcp_error())?;
                match handlers::icon_snippet(directory.as_ref(), &icon, args.framework).await {
                    Ok(text) => Ok(text_response(text)),
                    Err(e) => Ok(in_band_error("Error getting snippet", &e)),
                }
            })),

            ICON_CUSTOMIZATION_GUIDE => Some(Box::pin(async move {
                let args: CustomizationGuideArgs = parse_args(ICON_CUSTOMIZATION_GUIDE, args)?;
                Ok(text_response(customization_guide(args.framework)))
            })),

            UNPLUGIN_ICONS_CONFIG => Some(Box::pin(async move {
                let args: UnpluginConfigArgs = parse_args(UNPLUGIN_ICONS_CONFIG, args)?;
                let options = UnpluginConfigOptions::from(args);
                Ok(text_response(generate_unplugin_config(&options)))
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
