//! IconifyCli application.
//!
//! Wires configuration, logging, the HTTP directory and the MCP server
//! together and dispatches the parsed command.

use std::sync::Arc;

use iconify_client::{IconDirectory, IconifyClient};
use iconify_core::guidance::{customization_guide, usage_guide};
use iconify_core::traits::ConfigProvider;
use iconify_core::{Error, IconReference, Result, SearchQuery};
use iconify_mcp::{IconifyMcpServer, handlers};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::IconifyConfig;
use crate::config_handlers;

// ============================================================================
// IconifyCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct IconifyCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
}

impl IconifyCli<IconifyConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = IconifyConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> IconifyCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
    /// Stdout is reserved for MCP traffic and command output.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI against the configured Iconify API.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        let directory = IconifyClient::from_config(self.config())?;
        tracing::debug!(base_url = directory.base_url(), "using Iconify API");
        self.run_with(args, directory).await
    }

    /// Run the CLI against an explicit icon directory.
    pub async fn run_with<D>(&self, args: CliArgs, directory: D) -> Result<()>
    where
        D: IconDirectory + 'static,
    {
        match args.command {
            None | Some(Command::Serve) => {
                IconifyMcpServer::for_directory(self.config(), directory)
                    .serve_stdio()
                    .await
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            Some(command) => {
                let output = self.render(command, &directory).await?;
                println!("{output}");
                Ok(())
            }
        }
    }

    /// Produce the stdout text for a one-shot command.
    async fn render<D>(&self, command: Command, directory: &D) -> Result<String>
    where
        D: IconDirectory + ?Sized,
    {
        match command {
            Command::Version => Ok(format!("{} {}", self.name, self.version)),
            Command::Health => {
                let collections = directory.list_collections().await?;
                Ok(format!(
                    "{}: healthy ({} icon sets)",
                    self.name,
                    collections.len()
                ))
            }
            Command::Search {
                query,
                limit,
                framework,
                set,
            } => {
                let query = SearchQuery::validated(query, limit, set)?;
                handlers::search_icons(directory, &query, framework).await
            }
            Command::Snippet {
                set,
                name,
                framework,
            } => {
                let icon = IconReference::new(set, name)?;
                handlers::icon_snippet(directory, &icon, framework).await
            }
            Command::Guide { framework } => Ok(match framework {
                Some(framework) => customization_guide(framework),
                None => usage_guide(),
            }),
            Command::Serve | Command::Config(_) => Err(Error::invalid_argument(
                "serve and config are not one-shot commands",
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use iconify_client::MockIconDirectory;
    use iconify_core::Framework;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli() -> IconifyCli<IconifyConfig> {
        IconifyCli::new("iconify-mcp", IconifyConfig::default())
    }

    fn command(argv: &[&str]) -> Command {
        let mut full = vec!["iconify-mcp"];
        full.extend_from_slice(argv);
        CliArgs::parse_from(full).command.unwrap()
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_and_version_override() {
        let app = cli().with_version("9.9.9");
        assert_eq!(app.config().project_name(), "iconify-mcp");
        assert_eq!(app.version, "9.9.9");
    }

    #[test]
    fn test_from_args_with_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "[upstream]\nbase_url = \"http://mirror.local\"\n").unwrap();

        let args = CliArgs::parse_from(["iconify-mcp", "--config", file.to_str().unwrap(), "version"]);
        let app = IconifyCli::from_args("iconify-mcp", &args).unwrap();
        assert_eq!(app.config().api_base(), "http://mirror.local");
    }

    #[test]
    fn test_init_logging_twice() {
        let app = cli();
        app.init_logging(false, true);
        app.init_logging(true, false);
    }

    // ------------------------------------------------------------------------
    // One-shot commands
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_render_version() {
        let output = cli()
            .with_version("1.2.3")
            .render(command(&["version"]), &MockIconDirectory::new())
            .await
            .unwrap();
        assert_eq!(output, "iconify-mcp 1.2.3");
    }

    #[tokio::test]
    async fn test_render_search() {
        let directory = MockIconDirectory::new().with_search_icons(["mdi:home", "mdi:home-outline"]);
        let output = cli()
            .render(command(&["search", "home", "-l", "2", "-s", "mdi"]), &directory)
            .await
            .unwrap();
        assert!(output.starts_with("Found 2 of 2 matching icons:\n- mdi:home\n"));

        let queries = directory.search_queries().await;
        assert_eq!(queries[0], SearchQuery::new("home").with_limit(2).with_prefix("mdi"));
    }

    #[tokio::test]
    async fn test_render_search_rejects_limit() {
        let directory = MockIconDirectory::new();
        for limit in ["0", "101"] {
            let err = cli()
                .render(command(&["search", "home", "--limit", limit]), &directory)
                .await
                .unwrap_err();
            assert!(err.is_invalid_input());
        }
        assert_eq!(directory.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_render_snippet() {
        let directory = MockIconDirectory::new().with_svg("mdi:home", "<svg>home</svg>");
        let output = cli()
            .render(command(&["snippet", "mdi", "home", "-f", "raw-svg"]), &directory)
            .await
            .unwrap();
        assert_eq!(output, "<svg>home</svg>");

        let output = cli()
            .render(command(&["snippet", "mdi", "home", "-f", "react"]), &directory)
            .await
            .unwrap();
        assert!(output.starts_with("Snippet for mdi:home (react):"));
        assert_eq!(directory.svg_fetches(), 1);
    }

    #[tokio::test]
    async fn test_render_snippet_invalid_identifier() {
        let err = cli()
            .render(command(&["snippet", "md:i", "home", "-f", "vue"]), &MockIconDirectory::new())
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_render_guide() {
        let directory = MockIconDirectory::new();
        let general = cli().render(command(&["guide"]), &directory).await.unwrap();
        assert_eq!(general, usage_guide());

        let vue = cli()
            .render(command(&["guide", "-f", "vue"]), &directory)
            .await
            .unwrap();
        assert_eq!(vue, customization_guide(Framework::Vue));
    }

    #[tokio::test]
    async fn test_render_health_upstream_failure() {
        let directory = MockIconDirectory::new().with_failure(503, None);
        let err = cli().render(Command::Health, &directory).await.unwrap_err();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_render_rejects_long_running_commands() {
        let err = cli()
            .render(Command::Serve, &MockIconDirectory::new())
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    // ------------------------------------------------------------------------
    // Against a mock HTTP API
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_run_health_against_http_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "mdi": {"name": "Material Design Icons", "total": 7000},
                "lucide": {"name": "Lucide"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = IconifyConfig::default();
        config.upstream.base_url = server.uri();
        let app = IconifyCli::new("iconify-mcp", config);

        let directory = IconifyClient::from_config(app.config()).unwrap();
        let output = app.render(Command::Health, &directory).await.unwrap();
        assert_eq!(output, "iconify-mcp: healthy (2 icon sets)");
    }

    #[tokio::test]
    async fn test_run_with_one_shot_command() {
        let args = CliArgs::parse_from(["iconify-mcp", "guide"]);
        cli().run_with(args, MockIconDirectory::new()).await.unwrap();
    }

    // ------------------------------------------------------------------------
    // Search input
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_render_search_empty_set_is_unfiltered() {
        let directory = MockIconDirectory::new().with_search_icons(["mdi:home"]);
        cli()
            .render(command(&["search", "home", "--set", ""]), &directory)
            .await
            .unwrap();
        assert_eq!(directory.search_queries().await[0].prefix, None);
    }
}
