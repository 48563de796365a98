//! Iconify API access for the MCP adapter.
//!
//! # Modules
//!
//! - [`directory`]: The [`IconDirectory`] trait
//! - [`http`]: [`IconifyClient`], the reqwest implementation
//! - [`mock`]: [`MockIconDirectory`], an in-memory implementation for tests

#![doc = include_str!("../README.md")]

pub mod directory;
pub mod http;
pub mod mock;

pub use directory::IconDirectory;
pub use http::IconifyClient;
pub use mock::MockIconDirectory;
