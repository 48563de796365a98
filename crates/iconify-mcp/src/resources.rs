//! The adapter's MCP resources.
//!
//! | URI                                     | MIME type          |
//! |-----------------------------------------|--------------------|
//! | `iconify://collections`                 | `text/plain`       |
//! | `iconify://collection/{setId}`          | `application/json` |
//! | `iconify://icon/{setId}/{iconName}.svg` | `image/svg+xml`    |
//! | `iconify://usage-guide`                 | `text/markdown`    |
//!
//! Every read catches its own upstream failure and answers with a
//! plain-text error message instead of a protocol error.

use std::sync::Arc;

use iconify_client::IconDirectory;
use iconify_core::IconReference;
use iconify_core::guidance::usage_guide;
use rmcp::model::{
    AnnotateAble, ErrorData, RawResource, ReadResourceResult, Resource, ResourceTemplate,
};
use serde_json::json;

use crate::handlers;
use crate::registry::{ResourceRegistry, ResourceResult};

/// URI of the collections listing.
pub const COLLECTIONS_URI: &str = "iconify://collections";
/// URI of the usage guide.
pub const USAGE_GUIDE_URI: &str = "iconify://usage-guide";
/// URI template for one collection's details.
pub const COLLECTION_TEMPLATE: &str = "iconify://collection/{setId}";
/// URI template for one icon's SVG.
pub const ICON_SVG_TEMPLATE: &str = "iconify://icon/{setId}/{iconName}.svg";

const COLLECTION_PREFIX: &str = "iconify://collection/";
const ICON_PREFIX: &str = "iconify://icon/";

const TEXT: &str = "text/plain";
const MARKDOWN: &str = "text/markdown";
const JSON: &str = "application/json";
const SVG: &str = "image/svg+xml";

/// A parsed `iconify://` resource URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconifyResource {
    /// `iconify://collections`
    Collections,
    /// `iconify://collection/{setId}`
    CollectionDetail(String),
    /// `iconify://icon/{setId}/{iconName}.svg`
    IconSvg(IconReference),
    /// `iconify://usage-guide`
    UsageGuide,
}

impl IconifyResource {
    /// Parse a resource URI, or `None` if it is not one of ours.
    pub fn parse(uri: &str) -> Option<Self> {
        match uri {
            COLLECTIONS_URI => return Some(Self::Collections),
            USAGE_GUIDE_URI => return Some(Self::UsageGuide),
            _ => {}
        }

        if let Some(set_id) = uri.strip_prefix(COLLECTION_PREFIX) {
            if set_id.is_empty() || set_id.contains('/') {
                return None;
            }
            return Some(Self::CollectionDetail(set_id.to_string()));
        }

        let rest = uri.strip_prefix(ICON_PREFIX)?;
        let (set_id, file) = rest.split_once('/')?;
        let icon_name = file.strip_suffix(".svg")?;
        if icon_name.contains('/') {
            return None;
        }
        IconReference::new(set_id, icon_name).ok().map(Self::IconSvg)
    }
}

fn contents(uri: &str, mime_type: &str, text: String) -> Result<ReadResourceResult, ErrorData> {
    serde_json::from_value(json!({
        "contents": [{ "uri": uri, "mimeType": mime_type, "text": text }]
    }))
    .map_err(|e| ErrorData::internal_error(e.to_string(), None))
}

fn template(uri_template: &str, name: &str, description: &str, mime_type: &str) -> Option<ResourceTemplate> {
    serde_json::from_value(json!({
        "uriTemplate": uri_template,
        "name": name,
        "description": description,
        "mimeType": mime_type,
    }))
    .map_err(|e| log::error!("invalid resource template {uri_template}: {e}"))
    .ok()
}

fn resource(uri: &str, name: &str, description: &str, mime_type: &str) -> Resource {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description.to_string());
    raw.mime_type = Some(mime_type.to_string());
    raw.no_annotation()
}

/// MCP resources backed by an [`IconDirectory`].
pub struct IconResources<D: IconDirectory> {
    directory: Arc<D>,
}

impl<D: IconDirectory + 'static> IconResources<D> {
    /// Create resources that own `directory`.
    pub fn new(directory: D) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Create resources with a shared directory reference.
    pub fn with_shared(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D: IconDirectory + 'static> ResourceRegistry for IconResources<D> {
    fn resources(&self) -> Vec<Resource> {
        vec![
            resource(
                COLLECTIONS_URI,
                "icon-sets",
                "All Iconify icon sets, one `- id (name)` line each",
                TEXT,
            ),
            resource(
                USAGE_GUIDE_URI,
                "usage-guidance",
                "Setup and layout-shift guidance for every supported framework",
                MARKDOWN,
            ),
        ]
    }

    fn resource_templates(&self) -> Vec<ResourceTemplate> {
        [
            template(
                COLLECTION_TEMPLATE,
                "icon-set-details",
                "Details for one icon set, as returned by the Iconify API",
                JSON,
            ),
            template(
                ICON_SVG_TEMPLATE,
                "icon-svg",
                "SVG markup for one icon",
                SVG,
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn read(&self, uri: &str) -> Option<ResourceResult> {
        let resource = IconifyResource::parse(uri)?;
        let directory = Arc::clone(&self.directory);
        let uri = uri.to_string();
        log::debug!("resource read: {uri}");

        Some(Box::pin(async move {
            let directory = directory.as_ref();
            match resource {
                IconifyResource::Collections => {
                    match handlers::collections_listing(directory).await {
                        Ok(text) => contents(&uri, TEXT, text),
                        Err(e) => {
                            log::error!("collections resource failed: {e}");
                            contents(&uri, TEXT, format!("Error fetching icon sets: {e}"))
                        }
                    }
                }
                IconifyResource::CollectionDetail(set_id) => {
                    match handlers::collection_detail(directory, &set_id).await {
                        Ok(text) => contents(&uri, JSON, text),
                        Err(e) => {
                            log::error!("collection resource for {set_id} failed: {e}");
                            contents(&uri, TEXT, format!("Error fetching set {set_id}: {e}"))
                        }
                    }
                }
                IconifyResource::IconSvg(icon) => match handlers::icon_svg(directory, &icon).await {
                    Ok(svg) => contents(&uri, SVG, svg),
                    Err(e) => {
                        log::error!("SVG resource for {icon} failed: {e}");
                        contents(&uri, TEXT, format!("Error fetching SVG for {icon}: {e}"))
                    }
                },
                IconifyResource::UsageGuide => contents(&uri, MARKDOWN, usage_guide()),
            }
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use iconify_client::MockIconDirectory;
    use rmcp::model::ResourceContents;

    fn text_and_mime(result: &ReadResourceResult) -> (String, Option<String>) {
        if let ResourceContents::TextResourceContents {
            text, mime_type, ..
        } = &result.contents[0]
        {
            (text.clone(), mime_type.clone())
        } else {
            (String::new(), None)
        }
    }

    async fn read(resources: &IconResources<MockIconDirectory>, uri: &str) -> (String, Option<String>) {
        let result = resources.read(uri).unwrap().await.unwrap();
        text_and_mime(&result)
    }

    // ========================================================================
    // URI parsing
    // ========================================================================

    #[test]
    fn test_parse_uris() {
        assert_eq!(
            IconifyResource::parse("iconify://collections"),
            Some(IconifyResource::Collections)
        );
        assert_eq!(
            IconifyResource::parse("iconify://usage-guide"),
            Some(IconifyResource::UsageGuide)
        );
        assert_eq!(
            IconifyResource::parse("iconify://collection/mdi"),
            Some(IconifyResource::CollectionDetail("mdi".to_string()))
        );
        assert_eq!(
            IconifyResource::parse("iconify://icon/mdi/home.svg"),
            Some(IconifyResource::IconSvg(IconReference::new("mdi", "home").unwrap()))
        );
    }

    #[test]
    fn test_parse_rejects_foreign_and_malformed() {
        for uri in [
            "iconify://nope",
            "https://api.iconify.design/collections",
            "iconify://collection/",
            "iconify://collection/a/b",
            "iconify://icon/mdi/home.png",
            "iconify://icon/mdi/.svg",
            "iconify://icon/mdi",
            "iconify://icon/mdi/a/b.svg",
        ] {
            assert_eq!(IconifyResource::parse(uri), None, "{uri}");
        }
    }

    // ========================================================================
    // Listing
    // ========================================================================

    #[test]
    fn test_listing() {
        let resources = IconResources::new(MockIconDirectory::new());
        let uris: Vec<String> = resources.resources().iter().map(|r| r.uri.clone()).collect();
        assert_eq!(uris, vec![COLLECTIONS_URI, USAGE_GUIDE_URI]);

        let templates: Vec<String> = resources
            .resource_templates()
            .iter()
            .map(|t| t.uri_template.clone())
            .collect();
        assert_eq!(templates, vec![COLLECTION_TEMPLATE, ICON_SVG_TEMPLATE]);
    }

    // ========================================================================
    // Reads
    // ========================================================================

    #[tokio::test]
    async fn test_read_collections() {
        let resources = IconResources::new(
            MockIconDirectory::new().with_collection("mdi", "Material Design Icons"),
        );
        let (text, mime) = read(&resources, COLLECTIONS_URI).await;
        assert_eq!(text, "Available Icon Sets:\n- mdi (Material Design Icons)");
        assert_eq!(mime.as_deref(), Some(TEXT));
    }

    #[tokio::test]
    async fn test_read_collections_failure_in_band() {
        let resources = IconResources::new(MockIconDirectory::new().with_failure(503, None));
        let (text, _) = read(&resources, COLLECTIONS_URI).await;
        assert!(text.starts_with("Error fetching icon sets: Iconify API error (503)"));
    }

    #[tokio::test]
    async fn test_read_collection_detail() {
        let resources = IconResources::new(
            MockIconDirectory::new()
                .with_collection_detail("mdi", serde_json::json!({"prefix": "mdi"})),
        );
        let (text, mime) = read(&resources, "iconify://collection/mdi").await;
        assert_eq!(mime.as_deref(), Some(JSON));
        assert!(text.contains("\"prefix\": \"mdi\""));

        let (text, _) = read(&resources, "iconify://collection/nope").await;
        assert!(text.starts_with("Error fetching set nope: "));
    }

    #[tokio::test]
    async fn test_read_icon_svg() {
        let directory = MockIconDirectory::new().with_svg("mdi:home", "<svg>OK</svg>");
        let resources = IconResources::new(directory.clone());
        let (text, mime) = read(&resources, "iconify://icon/mdi/home.svg").await;
        assert_eq!(text, "<svg>OK</svg>");
        assert_eq!(mime.as_deref(), Some(SVG));
        assert_eq!(directory.svg_fetches(), 1);

        let (text, _) = read(&resources, "iconify://icon/mdi/missing.svg").await;
        assert!(text.starts_with("Error fetching SVG for mdi:missing: "));
    }

    #[tokio::test]
    async fn test_read_usage_guide_needs_no_upstream() {
        let directory = MockIconDirectory::new();
        let resources = IconResources::new(directory.clone());
        let (text, mime) = read(&resources, USAGE_GUIDE_URI).await;
        assert_eq!(text, usage_guide());
        assert_eq!(mime.as_deref(), Some(MARKDOWN));
        assert_eq!(directory.total_calls(), 0);
    }

    #[test]
    fn test_unknown_uri_is_not_ours() {
        let resources = IconResources::new(MockIconDirectory::new());
        assert!(resources.read("iconify://nope").is_none());
    }
}
