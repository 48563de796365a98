//! Snippet rendering.
//!
//! Maps an [`IconReference`] and a [`Framework`] to the source text a
//! developer pastes into their project. `raw-svg` returns the fetched SVG
//! verbatim; every other framework is a static template, so its output is
//! a pure function of the icon identifier.
//!
//! # Example
//!
//! ```
//! use iconify_core::{Framework, IconReference, render_snippet};
//!
//! let icon = IconReference::new("mdi", "home").unwrap();
//! let snippet = render_snippet(&icon, Framework::React, None).unwrap();
//! assert!(snippet.as_str().contains("mdi:home"));
//! ```

use std::fmt;

use crate::framework::{Framework, Template};
use crate::icon::{IconReference, SvgDocument};
use crate::{Error, Result};

/// Returned when asked to render for a framework tag the adapter does not know.
pub const UNSUPPORTED_SNIPPET: &str = "Snippet generation for this framework is not yet supported.";

/// Rendered embedding text for one icon and one framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    framework: Framework,
    text: String,
}

impl Snippet {
    /// Framework the snippet targets.
    pub fn framework(&self) -> Framework {
        self.framework
    }

    /// Snippet text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume into the snippet text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render the snippet for `icon` in `framework`.
///
/// `svg` is only read for [`Framework::RawSvg`], whose snippet is the
/// document itself.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `framework` is `raw-svg` and no
/// SVG document was supplied.
pub fn render_snippet(
    icon: &IconReference,
    framework: Framework,
    svg: Option<&SvgDocument>,
) -> Result<Snippet> {
    let text = match framework.entry().template {
        Template::Svg => svg
            .map(|doc| doc.as_str().to_string())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "{framework} snippet for {icon} needs the fetched SVG"
                ))
            })?,
        Template::Static(template) => template(icon),
    };
    log::debug!("rendered {framework} snippet for {icon} ({} bytes)", text.len());
    Ok(Snippet { framework, text })
}

/// Render by wire tag, falling back to [`UNSUPPORTED_SNIPPET`] for unknown tags.
///
/// # Errors
///
/// Only the `raw-svg` missing-document case fails; unknown tags never do.
pub fn render_snippet_for_tag(
    icon: &IconReference,
    tag: &str,
    svg: Option<&SvgDocument>,
) -> Result<String> {
    match tag.parse::<Framework>() {
        Ok(framework) => render_snippet(icon, framework, svg).map(Snippet::into_string),
        Err(_) => {
            log::warn!("no snippet template for framework tag '{tag}'");
            Ok(UNSUPPORTED_SNIPPET.to_string())
        }
    }
}

/// Convert a kebab-case icon name into a code identifier.
///
/// The first character is uppercased, and every hyphen followed by an ASCII
/// alphanumeric character is dropped with that character uppercased:
/// `home-outline` becomes `HomeOutline`, `arrow-up-2` becomes `ArrowUp2`.
pub fn to_symbol_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_alphanumeric() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Substitute icon placeholders in a template.
///
/// Recognised placeholders: `{icon}` (`set:name`), `{set}`, `{name}`,
/// `{symbol}` (symbol-cased name) and `{component}` (`Icon` + symbol-cased
/// set + symbol-cased name, the unplugin-icons auto-import name).
///
/// Substitution is a single pass over the template, so placeholder text
/// inside an icon's own name is emitted verbatim. Braces that do not open a
/// recognised placeholder are copied through unchanged.
pub(crate) fn fill(template: &str, icon: &IconReference) -> String {
    let full = icon.to_string();
    let symbol = to_symbol_case(icon.icon_name());
    let component = format!("Icon{}{}", to_symbol_case(icon.icon_set()), symbol);
    let placeholders: [(&str, &str); 5] = [
        ("{icon}", &full),
        ("{set}", icon.icon_set()),
        ("{name}", icon.icon_name()),
        ("{symbol}", &symbol),
        ("{component}", &component),
    ];

    let mut out = String::with_capacity(template.len() + full.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        match placeholders.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// Templates
// ============================================================================

pub(crate) mod templates {
    use super::fill;
    use crate::framework::Framework;
    use crate::icon::IconReference;

    const UNPLUGIN_ICONS: &str = "\
// Method 1: Using virtual imports
import Icon{symbol} from 'virtual:icons/{set}/{name}'
// Usage: <Icon{symbol} />

// Method 2: Using the unified syntax (recommended)
import Icon{symbol} from '~icons/{set}/{name}'
// Usage: <Icon{symbol} />

// Custom size example
import CustomSizeIcon from '~icons/{set}/{name}?width=2em&height=2em'
// Usage: <CustomSizeIcon />";

    const WEB_COMPONENT: &str = "<iconify-icon icon=\"{icon}\"></iconify-icon>";

    const REACT: &str = "\
// Assuming you use @iconify/react
// import { Icon } from '@iconify/react';
// <Icon icon=\"{icon}\" />";

    const VUE: &str = "\
// Assuming you use @iconify/vue
// import { Icon } from '@iconify/vue';
// <Icon icon=\"{icon}\" />";

    const SVELTE: &str = "\
<!-- Assuming you use @iconify/svelte -->
<script>
  import Icon from '@iconify/svelte';
</script>

<Icon icon=\"{icon}\" />";

    const LIT: &str = "\
// Assuming you use @iconify/lit
// import { Icon } from '@iconify/lit';
// // Usage in render(): html`<Icon icon=\"{icon}\" />`";

    const EMBER: &str = "\
{{! Assuming you use @iconify/ember }}
<Icon @icon=\"{icon}\" />";

    fn with_customization(usage: &str, framework: Framework, icon: &IconReference) -> String {
        format!(
            "{}\n\n## Customization Options\n\n{}",
            fill(usage, icon),
            (framework.entry().customization)(icon)
        )
    }

    pub(crate) fn unplugin_icons(icon: &IconReference) -> String {
        with_customization(UNPLUGIN_ICONS, Framework::UnpluginIcons, icon)
    }

    pub(crate) fn web_component(icon: &IconReference) -> String {
        with_customization(WEB_COMPONENT, Framework::IconifyIconWebcomponent, icon)
    }

    pub(crate) fn react(icon: &IconReference) -> String {
        with_customization(REACT, Framework::React, icon)
    }

    pub(crate) fn vue(icon: &IconReference) -> String {
        with_customization(VUE, Framework::Vue, icon)
    }

    pub(crate) fn svelte(icon: &IconReference) -> String {
        with_customization(SVELTE, Framework::Svelte, icon)
    }

    pub(crate) fn lit(icon: &IconReference) -> String {
        with_customization(LIT, Framework::Lit, icon)
    }

    pub(crate) fn ember(icon: &IconReference) -> String {
        with_customization(EMBER, Framework::Ember, icon)
    }
}
