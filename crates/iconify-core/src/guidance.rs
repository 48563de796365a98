//! Framework setup guidance.
//!
//! Static, icon-independent documentation keyed by [`Framework`]: setup
//! instructions (bundled markdown), layout-shift CSS, customization
//! options and the composed usage guide served as a resource.

use crate::framework::Framework;
use crate::icon::IconReference;
use crate::snippet::fill;

/// Returned when asked for guidance on a framework tag the adapter does not know.
pub const UNAVAILABLE_GUIDANCE: &str = "Setup guidance for this framework is not yet available.";

/// Returned when asked for customization help on an unknown framework tag.
pub const UNAVAILABLE_CUSTOMIZATION: &str =
    "Customization guidance not available for this framework.";

/// Layout-shift CSS blocks shared between frameworks.
pub mod css {
    /// Raw SVG carries its own dimensions.
    pub const NONE: &str = "/* No specific layout shift prevention needed for raw SVG */";

    /// Reserve space for `<iconify-icon>` before the web component upgrades.
    pub const WEB_COMPONENT: &str = "\
/* Add this CSS to prevent layout shifts with iconify-icon web component */
iconify-icon {
  display: inline-block;
  width: 1em;
  height: 1em;
}";

    /// Consistent sizing for component-rendered icons.
    pub const ICONIFY_CLASS: &str = "\
/* Add this CSS to ensure consistent icon sizing */
.iconify {
  display: inline-block;
  width: 1em;
  height: 1em;
}";
}

// ============================================================================
// Lookups
// ============================================================================

/// Setup instructions for `framework`.
pub fn setup_guidance(framework: Framework) -> &'static str {
    framework.entry().setup.trim_end()
}

/// Setup instructions by wire tag, falling back to [`UNAVAILABLE_GUIDANCE`].
pub fn setup_guidance_for_tag(tag: &str) -> &'static str {
    tag.parse::<Framework>()
        .map(setup_guidance)
        .unwrap_or(UNAVAILABLE_GUIDANCE)
}

/// CSS that prevents layout shift while icons load.
pub fn layout_shift_css(framework: Framework) -> &'static str {
    framework.entry().layout_css
}

/// Customization options for `framework`, illustrated with `icon`.
pub fn customization_options(framework: Framework, icon: &IconReference) -> String {
    (framework.entry().customization)(icon)
}

/// The `icon-customization-guide` document for one framework.
pub fn customization_guide(framework: Framework) -> String {
    let mut guide = format!("# Icon Customization Guide for {framework}\n\n");
    guide.push_str(&customization_options(framework, &IconReference::example()));
    if framework == Framework::UnpluginIcons {
        guide.push_str("\n\n");
        guide.push_str(UNPLUGIN_ICONS_REFERENCE);
    }
    guide
}

/// Customization guide by wire tag, falling back to [`UNAVAILABLE_CUSTOMIZATION`].
pub fn customization_guide_for_tag(tag: &str) -> String {
    match tag.parse::<Framework>() {
        Ok(framework) => customization_guide(framework),
        Err(_) => format!("# Icon Customization Guide for {tag}\n\n{UNAVAILABLE_CUSTOMIZATION}"),
    }
}

/// One framework's section of the usage guide.
pub fn framework_section(framework: Framework) -> String {
    let entry = framework.entry();
    let mut section = format!(
        "## {}\n\n### Setup\n{}\n\n### Preventing Layout Shifts\n```css\n{}\n```\n",
        entry.display_name,
        setup_guidance(framework),
        entry.layout_css
    );
    if let Some(link) = entry.doc_link {
        section.push_str(&format!("\nFor more details, see: {link}\n"));
    }
    section
}

/// The long-form document behind the `iconify://usage-guide` resource.
pub fn usage_guide() -> String {
    let sections: Vec<String> = Framework::ALL.into_iter().map(framework_section).collect();
    format!("{USAGE_GUIDE_PREAMBLE}{}{USAGE_GUIDE_EPILOGUE}", sections.join("\n"))
}

const USAGE_GUIDE_PREAMBLE: &str = "\
# Iconify Usage Guide

## About Iconify
Iconify is a unified icon framework that provides access to over 200,000 icons from more than 150 open-source icon sets.

## Advantages of Iconify
- Icons load on demand - only icons you use are loaded
- Consistent API across different icon sets
- All icons are optimized SVG
- Easy switching between different icon sets
- No need to install multiple icon fonts

## Getting Started
1. Search for icons using the `search-icons` tool.
2. Get implementation snippets for your framework using the `get-icon-snippet` tool.
3. Follow the setup instructions below for your chosen implementation method.

---
";

const USAGE_GUIDE_EPILOGUE: &str = "\
---

For more general information, visit https://iconify.design/docs/
";

// ============================================================================
// Customization text
// ============================================================================

const RAW_SVG_CUSTOMIZATION: &str = "\
When using raw SVG, you can customize by directly modifying SVG attributes like width, height, fill, stroke, etc.

```html
<svg width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"currentColor\"
     style=\"color: red; transform: scaleX(-1) rotate(90deg); vertical-align: -0.125em;\">
  <!-- {icon} contents -->
</svg>
```

- width, height: Size attributes on the root element
- color: Set `fill=\"currentColor\"` and control it with CSS `color`
- flip, rotate: CSS `transform` (e.g. `scaleX(-1)`, `rotate(90deg)`)
- inline: `vertical-align: -0.125em` aligns the icon with surrounding text";

const UNPLUGIN_ICONS_CUSTOMIZATION: &str = "\
When using unplugin-icons, customization depends on the components it generates:

```jsx
// Using class names:
<{component} className=\"text-red-500 text-2xl\" />

// In most frameworks:
<{component} style={{ color: 'red', fontSize: '24px' }} />

// For Vue with custom props support:
<{component} color=\"red\" width=\"24\" height=\"24\" />

// Flip, rotate and inline alignment through CSS:
<{component} style={{ transform: 'scaleX(-1) rotate(90deg)', verticalAlign: '-0.125em' }} />
```

- width, height: Query parameters (`?width=2em&height=2em`) or props
- color: CSS `color`, icons use `currentColor`
- flip, rotate: CSS `transform`
- inline: CSS `vertical-align`

Consult unplugin-icons documentation for framework-specific customization options.";

const WEB_COMPONENT_CUSTOMIZATION: &str = "\
The web component accepts various attributes for customization:

```html
<iconify-icon
  icon=\"{icon}\"
  style=\"color: red; font-size: 24px;\"
  width=\"24\"
  height=\"24\"
  flip=\"horizontal\"
  rotate=\"90deg\"
  inline
></iconify-icon>
```

Available attributes:
- width, height: Size in pixels
- flip: horizontal, vertical, or both
- rotate: Rotation in degrees
- inline: Align the icon with surrounding text
- style: CSS properties like color, font-size";

const REACT_CUSTOMIZATION: &str = "\
The Iconify component for React accepts these common properties:

```jsx
<Icon
  icon=\"{icon}\"
  color=\"red\"
  width=\"24\"
  height=\"24\"
  flip=\"horizontal\"
  rotate={1}
  inline={true}
/>
```

Common properties:
- width, height: Size in pixels
- color: Icon color (CSS value)
- flip: \"horizontal\", \"vertical\", or \"both\"
- rotate: Rotation in 90° increments (1-3) or in degrees as string
- inline: boolean, shift icon to make it work with text";

const VUE_CUSTOMIZATION: &str = "\
The Iconify component for Vue accepts these common properties:

```html
<Icon
  icon=\"{icon}\"
  color=\"red\"
  width=\"24\"
  height=\"24\"
  flip=\"horizontal\"
  rotate=\"90deg\"
  :inline=\"true\"
/>
```

Common properties:
- width, height: Size in pixels
- color: Icon color (CSS value)
- flip: \"horizontal\", \"vertical\", or \"both\"
- rotate: Rotation in degrees as string
- inline: boolean, shift icon to make it work with text";

const SVELTE_CUSTOMIZATION: &str = "\
The Iconify component for Svelte accepts these common properties:

```svelte
<Icon
  icon=\"{icon}\"
  color=\"red\"
  width=\"24\"
  height=\"24\"
  flip=\"horizontal\"
  rotate={1}
  inline={true}
/>
```

Common properties:
- width, height: Size in pixels
- color: Icon color (CSS value)
- flip: \"horizontal\", \"vertical\", or \"both\"
- rotate: Rotation in 90° increments (1-3) or in degrees as string
- inline: boolean, shift icon to make it work with text";

const LIT_CUSTOMIZATION: &str = "\
The Iconify component for Lit accepts these common properties:

```js
// In your render() method:
return html`
  <Icon
    .icon=\"{icon}\"
    .color=\"red\"
    .width=\"24\"
    .height=\"24\"
    .flip=\"horizontal\"
    .rotate=\"90deg\"
    .inline=\"true\"
  />
`;
```

Common properties:
- width, height: Size in pixels
- color: Icon color (CSS value)
- flip: \"horizontal\", \"vertical\", or \"both\"
- rotate: Rotation in degrees as string
- inline: boolean, shift icon to make it work with text";

const EMBER_CUSTOMIZATION: &str = "\
The Iconify component for Ember accepts these common properties:

```handlebars
<Icon
  @icon=\"{icon}\"
  @color=\"red\"
  @width=\"24\"
  @height=\"24\"
  @flip=\"horizontal\"
  @rotate=\"90deg\"
  @inline={{true}}
/>
```

Common properties:
- width, height: Size in pixels
- color: Icon color (CSS value)
- flip: \"horizontal\", \"vertical\", or \"both\"
- rotate: Rotation in degrees as string
- inline: boolean, shift icon to make it work with text";

const UNPLUGIN_ICONS_REFERENCE: &str = include_str!("../guidance/unplugin-icons-customization.md");

pub(crate) fn raw_svg_customization(icon: &IconReference) -> String {
    fill(RAW_SVG_CUSTOMIZATION, icon)
}

pub(crate) fn unplugin_icons_customization(icon: &IconReference) -> String {
    fill(UNPLUGIN_ICONS_CUSTOMIZATION, icon)
}

pub(crate) fn web_component_customization(icon: &IconReference) -> String {
    fill(WEB_COMPONENT_CUSTOMIZATION, icon)
}

pub(crate) fn react_customization(icon: &IconReference) -> String {
    fill(REACT_CUSTOMIZATION, icon)
}

pub(crate) fn vue_customization(icon: &IconReference) -> String {
    fill(VUE_CUSTOMIZATION, icon)
}

pub(crate) fn svelte_customization(icon: &IconReference) -> String {
    fill(SVELTE_CUSTOMIZATION, icon)
}

pub(crate) fn lit_customization(icon: &IconReference) -> String {
    fill(LIT_CUSTOMIZATION, icon)
}

pub(crate) fn ember_customization(icon: &IconReference) -> String {
    fill(EMBER_CUSTOMIZATION, icon)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_framework_has_setup_guidance() {
        for fw in Framework::ALL {
            let text = setup_guidance(fw);
            assert!(!text.trim().is_empty(), "{fw} has no setup guidance");
            assert_ne!(text, UNAVAILABLE_GUIDANCE);
        }
    }

    #[test]
    fn test_setup_guidance_content() {
        assert_eq!(
            setup_guidance(Framework::RawSvg),
            "No specific setup needed. Just embed the SVG."
        );
        assert!(setup_guidance(Framework::React).contains("npm install @iconify/react"));
        assert!(setup_guidance(Framework::UnpluginIcons).contains("npm install -D unplugin-icons"));
        assert!(setup_guidance(Framework::IconifyIconWebcomponent).contains("<script"));
    }

    #[test]
    fn test_setup_guidance_unknown_tag() {
        assert_eq!(setup_guidance_for_tag("qwik"), UNAVAILABLE_GUIDANCE);
        assert_eq!(
            setup_guidance_for_tag("vue"),
            setup_guidance(Framework::Vue)
        );
    }

    #[test]
    fn test_layout_shift_css() {
        assert!(layout_shift_css(Framework::IconifyIconWebcomponent).contains("iconify-icon {"));
        assert!(layout_shift_css(Framework::RawSvg).starts_with("/*"));
        assert!(layout_shift_css(Framework::RawSvg).ends_with("*/"));
        for fw in [Framework::React, Framework::Vue, Framework::UnpluginIcons] {
            assert!(layout_shift_css(fw).contains(".iconify {"));
        }
    }

    #[test]
    fn test_customization_guide_heading() {
        let guide = customization_guide(Framework::Svelte);
        assert!(guide.starts_with("# Icon Customization Guide for svelte\n\n"));
        assert!(guide.contains("icon=\"mdi:home\""));
    }

    #[test]
    fn test_customization_guide_unplugin_reference() {
        let guide = customization_guide(Framework::UnpluginIcons);
        assert!(guide.contains("<IconMdiHome"));
        assert!(guide.contains("## Query Parameters"));
        assert!(guide.contains("iconCustomizer"));
    }

    #[test]
    fn test_customization_guide_unknown_tag() {
        let guide = customization_guide_for_tag("qwik");
        assert!(guide.ends_with(UNAVAILABLE_CUSTOMIZATION));
    }

    #[test]
    fn test_usage_guide_covers_all_frameworks() {
        let guide = usage_guide();
        assert!(guide.starts_with("# Iconify Usage Guide"));
        assert!(guide.ends_with("visit https://iconify.design/docs/\n"));
        for fw in Framework::ALL {
            let heading = format!("## {}\n", fw.entry().display_name);
            assert!(guide.contains(&heading), "missing section {heading:?}");
        }
        assert!(guide.contains("For more details, see: https://iconify.design/docs/icon-components/lit/"));
    }

    #[test]
    fn test_raw_svg_section_has_no_doc_link() {
        let section = framework_section(Framework::RawSvg);
        assert!(section.starts_with("## Raw SVG\n"));
        assert!(!section.contains("For more details"));
    }
}
