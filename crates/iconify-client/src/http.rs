//! Iconify API client implementation.

use async_trait::async_trait;
use iconify_core::traits::ConfigProvider;
use iconify_core::{
    Collections, Error, IconReference, Result, SearchQuery, SearchResult, SvgDocument,
};
use reqwest::{RequestBuilder, Response, Url};
use serde_json::Value;

use crate::directory::IconDirectory;

/// Icon directory backed by the Iconify HTTP API.
pub struct IconifyClient {
    base_url: String,
    client: reqwest::Client,
}

impl IconifyClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root (e.g., "https://api.iconify.design")
    /// * `user_agent` - Sent as `User-Agent` on every request
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::transport("HTTP client setup", e))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    /// Creates a client from a configuration provider.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base(), config.user_agent())
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `{base}/{set}/{name}.svg`, with each segment percent-encoded.
    fn svg_url(&self, icon: &IconReference) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid API base '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("API base '{}' cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .push(icon.icon_set())
            .push(&format!("{}.svg", icon.icon_name()));
        Ok(url)
    }

    /// Send a request and turn non-success statuses into [`Error::Upstream`].
    async fn send(&self, request: RequestBuilder, context: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(context, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            tracing::warn!(status = status.as_u16(), context, "Iconify API returned an error");
            return Err(Error::upstream(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status"),
                context,
                body,
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl IconDirectory for IconifyClient {
    async fn list_collections(&self) -> Result<Collections> {
        let context = "collections";
        tracing::debug!(base = %self.base_url, "listing collections");
        let response = self
            .send(self.client.get(self.url("collections")), context)
            .await?;
        response
            .json()
            .await
            .map_err(|e| Error::transport(context, e))
    }

    async fn collection_detail(&self, set_id: &str) -> Result<Value> {
        let context = format!("set {set_id}");
        tracing::debug!(set_id, "fetching collection detail");
        let request = self
            .client
            .get(self.url("collection"))
            .query(&[("prefix", set_id)]);
        let response = self.send(request, &context).await?;
        response
            .json()
            .await
            .map_err(|e| Error::transport(context, e))
    }

    async fn search_icons(&self, query: &SearchQuery) -> Result<SearchResult> {
        let context = format!("search '{}'", query.query);
        tracing::debug!(query = %query.query, limit = query.limit, prefix = ?query.prefix, "searching icons");

        let mut params = vec![
            ("query", query.query.clone()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(prefix) = &query.prefix {
            params.push(("prefix", prefix.clone()));
        }

        let request = self.client.get(self.url("search")).query(&params);
        let response = self.send(request, &context).await?;
        response
            .json()
            .await
            .map_err(|e| Error::transport(context, e))
    }

    async fn fetch_svg(&self, icon: &IconReference) -> Result<SvgDocument> {
        let context = format!("SVG {icon}");
        tracing::debug!(%icon, "fetching SVG");
        let url = self.svg_url(icon)?;
        let response = self.send(self.client.get(url), &context).await?;
        let markup = response
            .text()
            .await
            .map_err(|e| Error::transport(context, e))?;
        Ok(SvgDocument::new(markup))
    }
}
