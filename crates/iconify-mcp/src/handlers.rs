//! Request handlers shared by the MCP tools, the MCP resources and the CLI.
//!
//! Each handler orchestrates one [`IconDirectory`] call plus the pure
//! snippet/guidance layer and returns the response text. Failures are
//! returned as [`Error`] so each caller can decide how to surface them.

use std::fmt::Write as _;

use futures::future::join_all;
use iconify_client::IconDirectory;
use iconify_core::guidance::{layout_shift_css, setup_guidance};
use iconify_core::{Error, Framework, IconReference, Result, SearchQuery};

/// Response when a search has no hits.
pub const NO_ICONS_FOUND: &str = "No icons found for your query.";

/// Closing note appended to every non-empty search response.
pub const CACHE_NOTE: &str = "Note: Iconify API caches icon data in the browser for performance. Subsequent uses of the same icons will be faster.";

/// Search for icons and format the hits, optionally with per-icon snippets.
///
/// Snippets are rendered concurrently and joined in upstream order. A
/// failure for one entry is reported on that entry's line and never fails
/// the whole response.
pub async fn search_icons<D>(
    directory: &D,
    query: &SearchQuery,
    framework: Option<Framework>,
) -> Result<String>
where
    D: IconDirectory + ?Sized,
{
    let result = directory.search_icons(query).await?;
    if result.icons.is_empty() {
        return Ok(NO_ICONS_FOUND.to_string());
    }
    log::debug!(
        "search '{}' returned {} of {} icons",
        query.query,
        result.icons.len(),
        result.total
    );

    let snippet_lines = match framework {
        Some(framework) => {
            join_all(
                result
                    .icons
                    .iter()
                    .map(|full_name| snippet_line(directory, full_name, framework)),
            )
            .await
        }
        None => Vec::new(),
    };

    let mut out = format!(
        "Found {} of {} matching icons:\n",
        result.icons.len(),
        result.total
    );
    for (index, full_name) in result.icons.iter().enumerate() {
        let _ = writeln!(out, "- {full_name}");
        if let Some(line) = snippet_lines.get(index) {
            out.push_str(line);
        }
    }

    if let Some(framework) = framework {
        let _ = write!(
            out,
            "\nSetup Guidance for {framework}:\n{}\n",
            setup_guidance(framework)
        );
        let _ = write!(
            out,
            "\nCSS for Layout Shift Prevention:\n{}\n",
            layout_shift_css(framework)
        );
    }

    let _ = write!(out, "\n{CACHE_NOTE}\n");
    Ok(out)
}

async fn snippet_line<D>(directory: &D, full_name: &str, framework: Framework) -> String
where
    D: IconDirectory + ?Sized,
{
    let icon = match IconReference::parse(full_name) {
        Ok(icon) => icon,
        Err(_) => {
            log::warn!("search hit '{full_name}' is not a set:name identifier");
            return format!(
                "  Could not parse icon set/name from {full_name} for snippet generation.\n"
            );
        }
    };
    match directory.render_snippet(&icon, framework).await {
        Ok(snippet) => format!("  Snippet ({framework}): {snippet}\n"),
        Err(e) => {
            log::warn!("snippet for {full_name} failed: {e}");
            format!("  Error generating snippet for {full_name}: {e}\n")
        }
    }
}

/// Render the `get-icon-snippet` response for one icon.
///
/// For `raw-svg` the response is exactly the icon's SVG. Every other
/// framework gets the snippet followed by setup and layout-shift guidance.
pub async fn icon_snippet<D>(directory: &D, icon: &IconReference, framework: Framework) -> Result<String>
where
    D: IconDirectory + ?Sized,
{
    let snippet = directory.render_snippet(icon, framework).await?;
    if framework.requires_svg() {
        return Ok(snippet.into_string());
    }
    Ok(format!(
        "Snippet for {icon} ({framework}):\n{snippet}\n\nSetup:\n{}\n\nLayout Shift Prevention:\n{}",
        setup_guidance(framework),
        layout_shift_css(framework)
    ))
}

/// Plain-text listing of every collection, one `- id (name)` line each.
pub async fn collections_listing<D>(directory: &D) -> Result<String>
where
    D: IconDirectory + ?Sized,
{
    let collections = directory.list_collections().await?;
    let lines: Vec<String> = collections
        .iter()
        .map(|(id, info)| format!("- {id} ({})", info.name))
        .collect();
    Ok(format!("Available Icon Sets:\n{}", lines.join("\n")))
}

/// One collection's detail document as pretty-printed JSON.
pub async fn collection_detail<D>(directory: &D, set_id: &str) -> Result<String>
where
    D: IconDirectory + ?Sized,
{
    let detail = directory.collection_detail(set_id).await?;
    serde_json::to_string_pretty(&detail).map_err(|e| Error::serialization(e.to_string()))
}

/// The icon's SVG markup.
pub async fn icon_svg<D>(directory: &D, icon: &IconReference) -> Result<String>
where
    D: IconDirectory + ?Sized,
{
    Ok(directory.fetch_svg(icon).await?.into_string())
}
