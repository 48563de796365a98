//! Conversion of adapter errors into MCP protocol errors.

use iconify_core::Error;
use rmcp::model::{CallToolResult, Content, ErrorData};

/// Extension trait mapping [`iconify_core::Error`] onto [`ErrorData`].
///
/// Caller mistakes become `invalid_params`; everything else is an
/// `internal_error`. Upstream failures inside a handler are normally
/// reported in-band with [`in_band_error`] instead.
pub trait McpErrorExt {
    /// Convert into an MCP protocol error.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn to_mcp_error(&self) -> ErrorData {
        if self.is_invalid_input() {
            ErrorData::invalid_params(self.to_string(), None)
        } else {
            ErrorData::internal_error(self.to_string(), None)
        }
    }
}

/// A tool result carrying `"{prefix}: {err}"` with the error flag set.
pub fn in_band_error(prefix: &str, err: &Error) -> CallToolResult {
    log::error!("{prefix}: {err}");
    CallToolResult::error(vec![Content::text(format!("{prefix}: {err}"))])
}

/// An `invalid_params` error for arguments that failed to deserialize.
pub fn invalid_arguments(tool: &str, err: impl std::fmt::Display) -> ErrorData {
    ErrorData::invalid_params(format!("invalid arguments for {tool}: {err}"), None)
}
