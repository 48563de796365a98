//! Icon identity and the value objects exchanged with the Iconify API.
//!
//! Everything here is request-scoped: values are built from a call's
//! parameters or an upstream response and dropped once the response is
//! rendered.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Separator between set prefix and icon name in `set:name` identifiers.
pub const ICON_SEPARATOR: char = ':';

// ============================================================================
// IconReference
// ============================================================================

/// One icon within one collection, e.g. `mdi:home`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconReference {
    icon_set: String,
    icon_name: String,
}

impl IconReference {
    /// Build a reference from its two parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either part is empty or the
    /// set prefix contains `:`.
    pub fn new(icon_set: impl Into<String>, icon_name: impl Into<String>) -> Result<Self> {
        let icon_set = icon_set.into();
        let icon_name = icon_name.into();

        if icon_set.is_empty() {
            return Err(Error::invalid_argument("icon set must not be empty"));
        }
        if icon_set.contains(ICON_SEPARATOR) {
            return Err(Error::invalid_argument(format!(
                "icon set '{icon_set}' must not contain '{ICON_SEPARATOR}'"
            )));
        }
        if icon_name.is_empty() {
            return Err(Error::invalid_argument("icon name must not be empty"));
        }

        Ok(Self {
            icon_set,
            icon_name,
        })
    }

    /// Parse a `set:name` identifier as returned by the search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] unless the string splits into
    /// exactly two non-empty colon-separated parts.
    pub fn parse(full_name: &str) -> Result<Self> {
        let mut parts = full_name.split(ICON_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(set), Some(name), None) if !set.is_empty() && !name.is_empty() => {
                Self::new(set, name)
            }
            _ => Err(Error::invalid_identifier(full_name)),
        }
    }

    /// The example icon used by framework-level guidance.
    pub fn example() -> Self {
        Self {
            icon_set: "mdi".to_string(),
            icon_name: "home".to_string(),
        }
    }

    /// Collection prefix, e.g. `mdi`.
    pub fn icon_set(&self) -> &str {
        &self.icon_set
    }

    /// Icon name within the collection, e.g. `home`.
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }
}

impl fmt::Display for IconReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ICON_SEPARATOR}{}", self.icon_set, self.icon_name)
    }
}

impl FromStr for IconReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// SvgDocument
// ============================================================================

/// Raw SVG markup fetched for one icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument(String);

impl SvgDocument {
    /// Wrap SVG markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup, verbatim.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the markup string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Collections and search
// ============================================================================

/// Summary of one icon collection from the `/collections` listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Human-readable collection name.
    pub name: String,

    /// Number of icons in the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// Collection category, e.g. "Material".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Collection listing keyed by collection id, iterated in id order.
pub type Collections = BTreeMap<String, CollectionInfo>;

/// Parameters for the `/search` endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term.
    pub query: String,
    /// Maximum number of results, already constrained to `1..=100`.
    pub limit: u32,
    /// Restrict results to one collection.
    pub prefix: Option<String>,
}

impl SearchQuery {
    /// Smallest accepted limit.
    pub const MIN_LIMIT: u32 = 1;
    /// Largest accepted limit.
    pub const MAX_LIMIT: u32 = 100;
    /// Limit applied when the caller does not give one.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Create a query with the default limit and no prefix.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: Self::DEFAULT_LIMIT,
            prefix: None,
        }
    }

    /// Build a query from caller input, checking the limit bounds.
    ///
    /// An empty `prefix` is treated as no prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `limit` is outside
    /// `MIN_LIMIT..=MAX_LIMIT`.
    pub fn validated(
        query: impl Into<String>,
        limit: u32,
        prefix: Option<String>,
    ) -> Result<Self> {
        if !(Self::MIN_LIMIT..=Self::MAX_LIMIT).contains(&limit) {
            return Err(Error::invalid_argument(format!(
                "limit must be between {} and {}, got {limit}",
                Self::MIN_LIMIT,
                Self::MAX_LIMIT
            )));
        }
        let query = Self::new(query).with_limit(limit);
        Ok(match prefix.filter(|p| !p.is_empty()) {
            Some(prefix) => query.with_prefix(prefix),
            None => query,
        })
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict the search to one collection.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Response body of the `/search` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching icons as `set:name` strings, in relevance order.
    #[serde(default)]
    pub icons: Vec<String>,

    /// Total number of matches upstream.
    #[serde(default)]
    pub total: u64,

    /// Limit the API applied.
    #[serde(default)]
    pub limit: u64,

    /// Offset of the first result.
    #[serde(default)]
    pub start: u64,

    /// Collections the results came from.
    #[serde(default)]
    pub collections: Collections,
}
