//! Core traits for the adapter.
//!
//! The primary trait is [`ConfigProvider`], which abstracts where the
//! upstream endpoint and server identity come from so the client and the
//! MCP server can be built from any configuration source.

/// Public Iconify API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.iconify.design";

/// `User-Agent` sent with every upstream request unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!("iconify-mcp/", env!("CARGO_PKG_VERSION"));

/// Trait for adapter configuration.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use iconify_core::traits::ConfigProvider;
///
/// #[derive(Clone)]
/// struct LocalMirror;
///
/// impl ConfigProvider for LocalMirror {
///     fn project_name(&self) -> &str {
///         "icons-mirror"
///     }
///
///     fn api_base(&self) -> &str {
///         "http://localhost:3000"
///     }
///
///     fn user_agent(&self) -> &str {
///         "icons-mirror/0.1"
///     }
/// }
///
/// assert_eq!(LocalMirror.server_name(), "icons-mirror");
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base URL of the Iconify API, without a trailing slash.
    fn api_base(&self) -> &str;

    /// Fixed `User-Agent` identifying this adapter upstream.
    fn user_agent(&self) -> &str;

    /// Name the MCP server reports during initialization.
    fn server_name(&self) -> &str {
        self.project_name()
    }

    /// Instructions the MCP server hands to clients, if any.
    fn server_instructions(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "test"
        }

        fn api_base(&self) -> &str {
            DEFAULT_API_BASE
        }

        fn user_agent(&self) -> &str {
            DEFAULT_USER_AGENT
        }
    }

    #[test]
    fn test_defaults() {
        let config = TestConfig;
        assert_eq!(config.server_name(), "test");
        assert!(config.server_instructions().is_none());
        assert!(config.user_agent().starts_with("iconify-mcp/"));
    }

    #[test]
    fn test_config_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
