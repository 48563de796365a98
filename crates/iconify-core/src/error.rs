//! Error types for the Iconify adapter.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Iconify crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while talking to Iconify or rendering output.
#[derive(Error, Debug)]
pub enum Error {
    /// The Iconify API answered with a non-success HTTP status.
    #[error("Iconify API error ({status}) for {context}: {status_text}{}", body_suffix(.body))]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// What was being fetched (e.g. `"set mdi"`, `"SVG mdi:home"`).
        context: String,
        /// Response body, when it could be read.
        body: Option<String>,
    },

    /// The request never produced a usable response (connect, TLS, decode).
    #[error("Request to Iconify failed for {context}: {message}")]
    Transport {
        /// What was being fetched.
        context: String,
        /// Underlying failure.
        message: String,
    },

    /// A `set:name` string that does not split into exactly two parts.
    #[error("Could not parse icon set/name from {0}")]
    InvalidIdentifier(String),

    /// A parameter that violates a documented constraint.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error on {}: {source}", .path.display())]
    IoPath {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(text) if !text.is_empty() => format!(". Body: {text}"),
        _ => String::new(),
    }
}

impl Error {
    /// Create an upstream (HTTP status) error.
    pub fn upstream(
        status: u16,
        status_text: impl Into<String>,
        context: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        Self::Upstream {
            status,
            status_text: status_text.into(),
            context: context.into(),
            body,
        }
    }

    /// Create a transport error.
    pub fn transport(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(raw: impl Into<String>) -> Self {
        Self::InvalidIdentifier(raw.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for failures that came from the Iconify API or the network.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Transport { .. })
    }

    /// True for failures caused by caller-supplied parameters.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_) | Self::InvalidArgument(_))
    }
}

/// Result type alias using the adapter's Error type.
pub type Result<T> = std::result::Result<T, Error>;
