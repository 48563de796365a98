//! Mock icon directory for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use iconify_core::{
    CollectionInfo, Collections, Error, IconReference, Result, SearchQuery, SearchResult,
    SvgDocument,
};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::directory::IconDirectory;

/// Upstream failure the mock replays instead of answering.
#[derive(Clone, Debug)]
struct Failure {
    status: u16,
    body: Option<String>,
}

impl Failure {
    fn to_error(&self, context: impl Into<String>) -> Error {
        let status_text = reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown status");
        Error::upstream(self.status, status_text, context, self.body.clone())
    }
}

#[derive(Default)]
struct CallCounts {
    collections: AtomicUsize,
    details: AtomicUsize,
    searches: AtomicUsize,
    svgs: AtomicUsize,
}

/// In-memory icon directory with canned data.
///
/// Built with `with_*` methods, then shared. Clones share call counters and
/// the recorded search queries, so a test can keep one handle for
/// assertions while the server under test owns another.
///
/// # Examples
///
/// ```
/// use iconify_client::MockIconDirectory;
///
/// let directory = MockIconDirectory::new()
///     .with_collection("mdi", "Material Design Icons")
///     .with_svg("mdi:home", "<svg>OK</svg>");
/// assert_eq!(directory.svg_fetches(), 0);
/// ```
#[derive(Clone, Default)]
pub struct MockIconDirectory {
    collections: Collections,
    details: HashMap<String, Value>,
    search: SearchResult,
    svgs: HashMap<String, String>,
    default_svg: Option<String>,
    failure: Option<Failure>,
    svg_failure: Option<Failure>,
    counts: Arc<CallCounts>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockIconDirectory {
    /// Creates an empty directory: no collections, no search hits, no SVGs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection to the `/collections` listing.
    pub fn with_collection(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.collections.insert(
            id.into(),
            CollectionInfo {
                name: name.into(),
                total: None,
                category: None,
            },
        );
        self
    }

    /// Sets the detail document returned for one collection.
    pub fn with_collection_detail(mut self, set_id: impl Into<String>, detail: Value) -> Self {
        self.details.insert(set_id.into(), detail);
        self
    }

    /// Sets the result returned for every search.
    pub fn with_search_result(mut self, result: SearchResult) -> Self {
        self.search = result;
        self
    }

    /// Sets the search result to exactly these icons.
    pub fn with_search_icons<I, S>(self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let icons: Vec<String> = icons.into_iter().map(Into::into).collect();
        let total = icons.len() as u64;
        self.with_search_result(SearchResult {
            limit: total,
            total,
            icons,
            ..SearchResult::default()
        })
    }

    /// Sets the SVG for one `set:name` icon.
    pub fn with_svg(mut self, icon: impl Into<String>, markup: impl Into<String>) -> Self {
        self.svgs.insert(icon.into(), markup.into());
        self
    }

    /// Sets the SVG returned for icons without a specific entry.
    pub fn with_default_svg(mut self, markup: impl Into<String>) -> Self {
        self.default_svg = Some(markup.into());
        self
    }

    /// Makes every call fail with the given HTTP status.
    pub fn with_failure(mut self, status: u16, body: Option<&str>) -> Self {
        self.failure = Some(Failure {
            status,
            body: body.map(str::to_string),
        });
        self
    }

    /// Makes only SVG fetches fail with the given HTTP status.
    pub fn with_svg_failure(mut self, status: u16, body: Option<&str>) -> Self {
        self.svg_failure = Some(Failure {
            status,
            body: body.map(str::to_string),
        });
        self
    }

    /// Number of `/collections` calls made.
    pub fn collection_listings(&self) -> usize {
        self.counts.collections.load(Ordering::SeqCst)
    }

    /// Number of `/collection` calls made.
    pub fn detail_fetches(&self) -> usize {
        self.counts.details.load(Ordering::SeqCst)
    }

    /// Number of `/search` calls made.
    pub fn searches(&self) -> usize {
        self.counts.searches.load(Ordering::SeqCst)
    }

    /// Number of SVG fetches made.
    pub fn svg_fetches(&self) -> usize {
        self.counts.svgs.load(Ordering::SeqCst)
    }

    /// Total upstream calls across all endpoints.
    pub fn total_calls(&self) -> usize {
        self.collection_listings() + self.detail_fetches() + self.searches() + self.svg_fetches()
    }

    /// Every search query received, in order.
    pub async fn search_queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl IconDirectory for MockIconDirectory {
    async fn list_collections(&self) -> Result<Collections> {
        self.counts.collections.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.failure {
            return Err(failure.to_error("collections"));
        }
        Ok(self.collections.clone())
    }

    async fn collection_detail(&self, set_id: &str) -> Result<Value> {
        self.counts.details.fetch_add(1, Ordering::SeqCst);
        let context = format!("set {set_id}");
        if let Some(failure) = &self.failure {
            return Err(failure.to_error(context));
        }
        self.details
            .get(set_id)
            .cloned()
            .ok_or_else(|| Error::upstream(404, "Not Found", context, None))
    }

    async fn search_icons(&self, query: &SearchQuery) -> Result<SearchResult> {
        self.counts.searches.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().await.push(query.clone());
        if let Some(failure) = &self.failure {
            return Err(failure.to_error(format!("search '{}'", query.query)));
        }
        Ok(self.search.clone())
    }

    async fn fetch_svg(&self, icon: &IconReference) -> Result<SvgDocument> {
        self.counts.svgs.fetch_add(1, Ordering::SeqCst);
        let context = format!("SVG {icon}");
        if let Some(failure) = self.failure.as_ref().or(self.svg_failure.as_ref()) {
            return Err(failure.to_error(context));
        }
        self.svgs
            .get(&icon.to_string())
            .or(self.default_svg.as_ref())
            .map(SvgDocument::new)
            .ok_or_else(|| Error::upstream(404, "Not Found", context, None))
    }
}
