//! Icon directory abstraction.

use async_trait::async_trait;
use iconify_core::{
    Collections, Framework, IconReference, Result, SearchQuery, SearchResult, Snippet, SvgDocument,
};
use serde_json::Value;

/// Abstraction over the Iconify API.
///
/// This trait allows request handlers to run against the live API or an
/// in-memory double without changing handler code.
#[async_trait]
pub trait IconDirectory: Send + Sync {
    /// `GET /collections`: every collection keyed by id.
    async fn list_collections(&self) -> Result<Collections>;

    /// `GET /collection?prefix=<set_id>`: one collection's icon listing.
    async fn collection_detail(&self, set_id: &str) -> Result<Value>;

    /// `GET /search`: icons matching a query.
    async fn search_icons(&self, query: &SearchQuery) -> Result<SearchResult>;

    /// `GET /<set>/<name>.svg`: the icon's SVG markup.
    async fn fetch_svg(&self, icon: &IconReference) -> Result<SvgDocument>;

    /// Render a snippet, fetching the SVG first only when the framework needs it.
    async fn render_snippet(&self, icon: &IconReference, framework: Framework) -> Result<Snippet> {
        let svg = if framework.requires_svg() {
            Some(self.fetch_svg(icon).await?)
        } else {
            None
        };
        iconify_core::render_snippet(icon, framework, svg.as_ref())
    }
}
