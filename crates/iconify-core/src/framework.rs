//! Target frameworks and the per-framework data table.
//!
//! Every piece of framework-specific knowledge (snippet template, setup
//! document, layout-shift CSS, customization text, documentation link)
//! lives in a single [`FrameworkEntry`] per [`Framework`]. Lookups go
//! through [`Framework::entry`], so adding a variant without a table row
//! is caught by the `test_table_order_matches_all` test.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::guidance::{self, css};
use crate::icon::IconReference;
use crate::snippet::templates;
use crate::{Error, Result};

/// A snippet target supported by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    /// The icon's SVG markup, embedded as-is.
    RawSvg,
    /// Build-time icon components generated by unplugin-icons.
    UnpluginIcons,
    /// The `<iconify-icon>` web component.
    IconifyIconWebcomponent,
    /// `@iconify/react`.
    React,
    /// `@iconify/vue`.
    Vue,
    /// `@iconify/svelte`.
    Svelte,
    /// `@iconify/lit`.
    Lit,
    /// `@iconify/ember`.
    Ember,
}

impl Framework {
    /// Every framework, in table order.
    pub const ALL: [Framework; 8] = [
        Framework::RawSvg,
        Framework::UnpluginIcons,
        Framework::IconifyIconWebcomponent,
        Framework::React,
        Framework::Vue,
        Framework::Svelte,
        Framework::Lit,
        Framework::Ember,
    ];

    /// Wire tag, e.g. `"raw-svg"`.
    pub fn as_str(self) -> &'static str {
        self.entry().tag
    }

    /// Table row for this framework.
    pub fn entry(self) -> &'static FrameworkEntry {
        &FRAMEWORKS[self as usize]
    }

    /// Whether rendering a snippet needs the icon's live SVG.
    pub fn requires_svg(self) -> bool {
        matches!(self.entry().template, Template::Svg)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|fw| fw.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown framework '{s}'")))
    }
}

// ============================================================================
// Table
// ============================================================================

/// How a framework's snippet is produced.
#[derive(Clone, Copy)]
pub enum Template {
    /// Verbatim SVG fetched from Iconify.
    Svg,
    /// Static template over the icon identifier.
    Static(fn(&IconReference) -> String),
}

/// Everything the adapter knows about one framework.
pub struct FrameworkEntry {
    /// Key of this row.
    pub framework: Framework,
    /// Wire tag.
    pub tag: &'static str,
    /// Heading used in the usage guide.
    pub display_name: &'static str,
    /// Snippet template.
    pub template: Template,
    /// Installation and setup instructions (markdown).
    pub setup: &'static str,
    /// CSS that keeps icons from shifting layout while they load.
    pub layout_css: &'static str,
    /// Customization options, rendered against an icon.
    pub customization: fn(&IconReference) -> String,
    /// Upstream documentation for the integration.
    pub doc_link: Option<&'static str>,
}

static FRAMEWORKS: [FrameworkEntry; 8] = [
    FrameworkEntry {
        framework: Framework::RawSvg,
        tag: "raw-svg",
        display_name: "Raw SVG",
        template: Template::Svg,
        setup: include_str!("../guidance/raw-svg.md"),
        layout_css: css::NONE,
        customization: guidance::raw_svg_customization,
        doc_link: None,
    },
    FrameworkEntry {
        framework: Framework::UnpluginIcons,
        tag: "unplugin-icons",
        display_name: "unplugin-icons",
        template: Template::Static(templates::unplugin_icons),
        setup: include_str!("../guidance/unplugin-icons.md"),
        layout_css: css::ICONIFY_CLASS,
        customization: guidance::unplugin_icons_customization,
        doc_link: Some("https://github.com/unplugin/unplugin-icons"),
    },
    FrameworkEntry {
        framework: Framework::IconifyIconWebcomponent,
        tag: "iconify-icon-webcomponent",
        display_name: "IconifyIcon Web Component",
        template: Template::Static(templates::web_component),
        setup: include_str!("../guidance/iconify-icon-webcomponent.md"),
        layout_css: css::WEB_COMPONENT,
        customization: guidance::web_component_customization,
        doc_link: Some("https://iconify.design/docs/icon-components/iconify-icon/"),
    },
    FrameworkEntry {
        framework: Framework::React,
        tag: "react",
        display_name: "React",
        template: Template::Static(templates::react),
        setup: include_str!("../guidance/react.md"),
        layout_css: css::ICONIFY_CLASS,
        customization: guidance::react_customization,
        doc_link: Some("https://iconify.design/docs/icon-components/react/"),
    },
    FrameworkEntry {
        framework: Framework::Vue,
        tag: "vue",
        display_name: "Vue",
        template: Template::Static(templates::vue),
        setup: include_str!("../guidance/vue.md"),
        layout_css: css::ICONIFY_CLASS,
        customization: guidance::vue_customization,
        doc_link: Some("https://iconify.design/docs/icon-components/vue/"),
    },
    FrameworkEntry {
        framework: Framework::Svelte,
        tag: "svelte",
        display_name: "Svelte",
        template: Template::Static(templates::svelte),
        setup: include_str!("../guidance/svelte.md"),
        layout_css: css::ICONIFY_CLASS,
        customization: guidance::svelte_customization,
        doc_link: Some("https://iconify.design/docs/icon-components/svelte/"),
    },
    FrameworkEntry {
        framework: Framework::Lit,
        tag: "lit",
        display_name: "Lit",
        template: Template::Static(templates::lit),
        setup: include_str!("../guidance/lit.md"),
        layout_css: css::ICONIFY_CLASS,
        customization: guidance::lit_customization,
        doc_link: Some("https://iconify.design/docs/icon-components/lit/"),
    },
    FrameworkEntry {
        framework: Framework::Ember,
        tag: "ember",
        display_name: "Ember",
        template: Template::Static(templates::ember),
        setup: include_str!("../guidance/ember.md"),
        layout_css: css::ICONIFY_CLASS,
        customization: guidance::ember_customization,
        doc_link: Some("https://iconify.design/docs/icon-components/ember/"),
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_all() {
        for (i, fw) in Framework::ALL.iter().enumerate() {
            assert_eq!(FRAMEWORKS[i].framework, *fw);
            assert_eq!(*fw as usize, i);
        }
    }

    #[test]
    fn test_tags_match_serde() {
        for fw in Framework::ALL {
            let json = serde_json::to_string(&fw).unwrap();
            assert_eq!(json, format!("\"{}\"", fw.as_str()));
            let back: Framework = serde_json::from_str(&json).unwrap();
            assert_eq!(back, fw);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("react".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!(
            "iconify-icon-webcomponent".parse::<Framework>().unwrap(),
            Framework::IconifyIconWebcomponent
        );
        assert!("angular".parse::<Framework>().is_err());
    }

    #[test]
    fn test_unknown_tag_rejected_by_serde() {
        assert!(serde_json::from_str::<Framework>("\"solid\"").is_err());
    }

    #[test]
    fn test_only_raw_svg_requires_svg() {
        let needing: Vec<_> = Framework::ALL
            .into_iter()
            .filter(|fw| fw.requires_svg())
            .collect();
        assert_eq!(needing, vec![Framework::RawSvg]);
    }

    #[test]
    fn test_doc_links() {
        assert!(Framework::RawSvg.entry().doc_link.is_none());
        for fw in Framework::ALL.into_iter().skip(1) {
            assert!(fw.entry().doc_link.unwrap().starts_with("https://"));
        }
    }
}
