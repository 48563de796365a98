//! Configuration for the Iconify MCP adapter.
//!
//! Provides the [`IconifyConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `ICONIFY_MCP_CONFIG` environment variable
//! 3. XDG default: `~/.config/iconify-mcp/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use confyg::{Confygery, env};
use iconify_core::traits::{ConfigProvider, DEFAULT_API_BASE, DEFAULT_USER_AGENT};
use iconify_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ICONIFY_MCP_CONFIG";

/// Prefix for environment overrides and exported variables.
pub const ENV_PREFIX: &str = "ICONIFY_MCP";

const DEFAULT_PROJECT_NAME: &str = "iconify-mcp";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconifyConfig {
    /// Project name, used for the config directory and default server name.
    pub project_name: String,

    /// Iconify API settings.
    pub upstream: UpstreamConfig,

    /// MCP server identity.
    pub server: ServerConfig,
}

/// Iconify API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API root URL.
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

/// MCP server identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported during initialization (defaults to `project_name`).
    pub name: Option<String>,

    /// Instructions handed to MCP clients.
    pub instructions: Option<String>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for IconifyConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            upstream: UpstreamConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl IconifyConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path)
            && path.exists()
        {
            log::debug!("loading config from {}", path.display());
            builder
                .add_file(&path.to_string_lossy())
                .map_err(|e| Error::config(format!("config file: {e}")))?;
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("upstream");
        env_opts.add_section("server");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DEFAULT_PROJECT_NAME).join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `ICONIFY_MCP_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for IconifyConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn api_base(&self) -> &str {
        &self.upstream.base_url
    }

    fn user_agent(&self) -> &str {
        &self.upstream.user_agent
    }

    fn server_name(&self) -> &str {
        self.server.name.as_deref().unwrap_or(&self.project_name)
    }

    fn server_instructions(&self) -> Option<&str> {
        self.server.instructions.as_deref()
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
