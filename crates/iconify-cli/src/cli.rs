//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use iconify_core::{Framework, SearchQuery};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "iconify-mcp", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "ICONIFY_MCP_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute (defaults to `serve`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve MCP over stdin/stdout.
    Serve,

    /// Print version information.
    Version,

    /// Check that the Iconify API is reachable.
    Health,

    /// Search for icons.
    Search {
        /// Search term.
        query: String,

        /// Maximum number of results (1-100).
        #[arg(short, long, default_value_t = SearchQuery::DEFAULT_LIMIT)]
        limit: u32,

        /// Render a snippet per result for this framework.
        #[arg(short, long)]
        framework: Option<Framework>,

        /// Only search within this icon set.
        #[arg(short, long)]
        set: Option<String>,
    },

    /// Render a snippet for one icon.
    Snippet {
        /// Icon set id (e.g., "mdi").
        set: String,

        /// Icon name within the set (e.g., "home").
        name: String,

        /// Target framework.
        #[arg(short, long)]
        framework: Framework,
    },

    /// Print the usage guide, or one framework's customization guide.
    Guide {
        /// Show the customization guide for this framework.
        #[arg(short, long)]
        framework: Option<Framework>,
    },

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "upstream.base_url").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "upstream.base_url").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
