//! Iconify Core: shared types, snippet rendering and setup guidance.
//!
//! This crate provides the foundational types used across all Iconify MCP
//! crates. It performs no I/O: everything here is a pure function of its
//! inputs, which keeps snippet output deterministic and testable.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`icon`]: Icon identity, SVG documents, search and collection values
//! - [`framework`]: Target frameworks and the per-framework table
//! - [`snippet`]: Snippet renderer and symbol-case derivation
//! - [`guidance`]: Setup guidance, layout-shift CSS, usage guide
//! - [`unplugin`]: unplugin-icons configuration generator
//! - [`traits`]: Configuration abstraction

#![doc = include_str!("../README.md")]

pub mod error;
pub mod framework;
pub mod guidance;
pub mod icon;
pub mod snippet;
pub mod traits;
pub mod unplugin;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use framework::Framework;
pub use icon::{CollectionInfo, Collections, IconReference, SearchQuery, SearchResult, SvgDocument};
pub use snippet::{Snippet, render_snippet, render_snippet_for_tag, to_symbol_case};
pub use traits::ConfigProvider;
