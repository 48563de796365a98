//! Command-line interface and stdio MCP server for the Iconify adapter.
//!
//! # Key Abstractions
//!
//! - [`IconifyCli`]: application wiring config, logging, the Iconify client and the MCP server
//! - [`CliArgs`]: clap command tree
//! - [`IconifyConfig`]: confyg-backed configuration implementing `ConfigProvider`

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::IconifyCli;
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand};
pub use config::IconifyConfig;
