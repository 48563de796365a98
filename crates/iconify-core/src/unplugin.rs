//! unplugin-icons configuration generator.
//!
//! Produces a ready-to-paste build configuration for unplugin-icons given
//! a build tool and a UI framework, optionally with custom collections and
//! auto-import resolvers.

use std::fmt::{self, Write as _};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bundler the configuration targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    /// `vite.config.js`
    Vite,
    /// `webpack.config.js`
    Webpack,
    /// `rollup.config.js`
    Rollup,
    /// `esbuild.config.js`
    Esbuild,
}

impl BuildTool {
    fn as_str(self) -> &'static str {
        match self {
            Self::Vite => "vite",
            Self::Webpack => "webpack",
            Self::Rollup => "rollup",
            Self::Esbuild => "esbuild",
        }
    }

    fn uses_require(self) -> bool {
        matches!(self, Self::Webpack)
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI framework the generated icon components compile for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnpluginFramework {
    /// Vue 2
    Vue2,
    /// Vue 3
    Vue3,
    /// React (JSX)
    React,
    /// SolidJS
    Solid,
    /// Svelte
    Svelte,
}

impl UnpluginFramework {
    fn as_str(self) -> &'static str {
        match self {
            Self::Vue2 => "vue2",
            Self::Vue3 => "vue3",
            Self::React => "react",
            Self::Solid => "solid",
            Self::Svelte => "svelte",
        }
    }

    fn is_vue(self) -> bool {
        matches!(self, Self::Vue2 | Self::Vue3)
    }

    fn is_jsx(self) -> bool {
        matches!(self, Self::React | Self::Solid)
    }
}

impl fmt::Display for UnpluginFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for [`generate_unplugin_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnpluginConfigOptions {
    /// Target bundler.
    pub build_tool: BuildTool,
    /// Target UI framework.
    pub framework: UnpluginFramework,
    /// Include a `customCollections` block and an `iconCustomizer`.
    pub custom_collections: bool,
    /// Include auto-import resolver configuration.
    pub auto_import: bool,
}

impl UnpluginConfigOptions {
    /// Options with the tool defaults: no custom collections, auto-import on.
    pub fn new(build_tool: BuildTool, framework: UnpluginFramework) -> Self {
        Self {
            build_tool,
            framework,
            custom_collections: false,
            auto_import: true,
        }
    }
}

/// Generate an unplugin-icons configuration file with usage examples.
pub fn generate_unplugin_config(options: &UnpluginConfigOptions) -> String {
    let UnpluginConfigOptions {
        build_tool,
        framework,
        custom_collections,
        auto_import,
    } = *options;

    let mut out = format!("// unplugin-icons configuration for {build_tool} with {framework}\n\n");
    push_imports(&mut out, build_tool, framework, custom_collections, auto_import);

    out.push_str(match build_tool {
        BuildTool::Vite | BuildTool::Rollup => "\nexport default {\n  plugins: [\n",
        BuildTool::Webpack => "\nmodule.exports = {\n  plugins: [\n",
        BuildTool::Esbuild => "\nbuild({\n  plugins: [\n",
    });

    out.push_str("    Icons({\n");
    let _ = writeln!(out, "      compiler: '{framework}',");
    out.push_str("      scale: 1.2, // Scale of icons against 1em\n");
    if custom_collections {
        out.push_str(CUSTOM_COLLECTIONS_BLOCK);
    }
    out.push_str("    }),\n");

    if auto_import {
        if framework.is_vue() {
            out.push_str(VUE_RESOLVER_BLOCK);
        } else if framework.is_jsx() {
            out.push_str(JSX_RESOLVER_BLOCK);
        }
    }

    out.push_str(match build_tool {
        BuildTool::Esbuild => "  ],\n  // other esbuild options\n});\n",
        _ => "  ],\n};\n",
    });

    out.push_str("\n// Usage Examples:\n\n");
    out.push_str(usage_example(framework, auto_import));
    out
}

fn push_imports(
    out: &mut String,
    build_tool: BuildTool,
    framework: UnpluginFramework,
    custom_collections: bool,
    auto_import: bool,
) {
    let tool = build_tool.as_str();
    let import = |out: &mut String, binding: &str, module: &str| {
        if build_tool.uses_require() {
            let _ = writeln!(out, "const {binding} = require('{module}')");
        } else {
            let _ = writeln!(out, "import {binding} from '{module}'");
        }
    };

    match build_tool {
        BuildTool::Esbuild => {
            let _ = writeln!(out, "// {tool}.config.js");
            out.push_str("import { build } from 'esbuild'\n");
        }
        _ => {
            let _ = writeln!(out, "// {tool}.config.js");
        }
    }
    import(out, "Icons", &format!("unplugin-icons/{tool}"));

    if auto_import {
        if build_tool == BuildTool::Esbuild {
            out.push_str("// Note: Auto-import with esbuild may require additional setup\n");
        } else if framework.is_vue() {
            import(out, "Components", &format!("unplugin-vue-components/{tool}"));
            import(out, "IconsResolver", "unplugin-icons/resolver");
        } else if framework.is_jsx() {
            import(out, "AutoImport", &format!("unplugin-auto-import/{tool}"));
            import(out, "IconsResolver", "unplugin-icons/resolver");
        }
    }

    if custom_collections {
        import(out, "{ FileSystemIconLoader }", "unplugin-icons/loaders");
        if build_tool.uses_require() {
            out.push_str("const fs = require('fs').promises\n");
        } else {
            out.push_str("import { promises as fs } from 'node:fs'\n");
        }
    }
}

fn usage_example(framework: UnpluginFramework, auto_import: bool) -> &'static str {
    match (framework, auto_import) {
        (UnpluginFramework::Vue2 | UnpluginFramework::Vue3, true) => VUE_AUTO_USAGE,
        (UnpluginFramework::Vue2 | UnpluginFramework::Vue3, false) => VUE_MANUAL_USAGE,
        (UnpluginFramework::React | UnpluginFramework::Solid, true) => JSX_AUTO_USAGE,
        (UnpluginFramework::React | UnpluginFramework::Solid, false) => JSX_MANUAL_USAGE,
        (UnpluginFramework::Svelte, _) => SVELTE_USAGE,
    }
}

const CUSTOM_COLLECTIONS_BLOCK: &str = "\
      customCollections: {
        // key as the collection name
        'my-icons': {
          account: '<svg><!-- Your SVG content here --></svg>',
          // Load your custom icon lazily
          settings: () => fs.readFile('./path/to/settings.svg', 'utf-8'),
        },
        // Load from filesystem
        'my-fs-icons': FileSystemIconLoader(
          './assets/icons',
          svg => svg.replace(/^<svg /, '<svg fill=\"currentColor\" ')
        ),
      },
      // Optional icon customizer
      iconCustomizer(collection, icon, props) {
        // Example: customize all icons in the 'mdi' collection
        if (collection === 'mdi') {
          props.width = '1.5em'
          props.height = '1.5em'
        }
      },
";

const VUE_RESOLVER_BLOCK: &str = "\
    Components({
      resolvers: [
        IconsResolver({
          prefix: 'i', // Use <i-mdi-home /> or customize with your preferred prefix
        }),
      ],
    }),
";

const JSX_RESOLVER_BLOCK: &str = "\
    AutoImport({
      resolvers: [
        IconsResolver({
          prefix: 'Icon', // Use <IconMdiHome /> in your JSX
          extension: 'jsx',
        }),
      ],
    }),
";

const VUE_AUTO_USAGE: &str = "\
/*
With auto-import, use icons directly in your template:

<template>
  <i-mdi-home />
  <i-mdi-account style=\"color: red; font-size: 24px;\" />
</template>
*/
";

const VUE_MANUAL_USAGE: &str = "\
/*
Without auto-import, import icons manually:

<script setup>
import MdiHome from '~icons/mdi/home'
import MdiAccount from '~icons/mdi/account?width=24px&height=24px'
</script>

<template>
  <MdiHome />
  <MdiAccount style=\"color: red;\" />
</template>
*/
";

const JSX_AUTO_USAGE: &str = "\
/*
With auto-import, use icons directly in your component:

function MyComponent() {
  return (
    <div>
      <IconMdiHome />
      <IconMdiAccount style={{ color: 'red', fontSize: '24px' }} />
    </div>
  )
}
*/
";

const JSX_MANUAL_USAGE: &str = "\
/*
Without auto-import, import icons manually:

import MdiHome from '~icons/mdi/home'
import MdiAccount from '~icons/mdi/account'

function MyComponent() {
  return (
    <div>
      <MdiHome />
      <MdiAccount style={{ color: 'red', fontSize: '24px' }} />
    </div>
  )
}
*/
";

const SVELTE_USAGE: &str = "\
/*
Svelte usage:

<script>
  import MdiHome from '~icons/mdi/home'
  import MdiAccount from '~icons/mdi/account'
</script>

<div>
  <MdiHome />
  <MdiAccount style=\"color: red; font-size: 24px;\" />
</div>
*/
";

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(build_tool: BuildTool, framework: UnpluginFramework) -> String {
        generate_unplugin_config(&UnpluginConfigOptions::new(build_tool, framework))
    }

    #[test]
    fn test_options_defaults() {
        let opts = UnpluginConfigOptions::new(BuildTool::Vite, UnpluginFramework::Vue3);
        assert!(!opts.custom_collections);
        assert!(opts.auto_import);
    }

    #[test]
    fn test_vite_vue3_auto_import() {
        let out = config(BuildTool::Vite, UnpluginFramework::Vue3);
        assert!(out.starts_with("// unplugin-icons configuration for vite with vue3\n\n"));
        assert!(out.contains("import Icons from 'unplugin-icons/vite'\n"));
        assert!(out.contains("import Components from 'unplugin-vue-components/vite'\n"));
        assert!(out.contains("export default {\n  plugins: [\n"));
        assert!(out.contains("compiler: 'vue3',"));
        assert!(out.contains("prefix: 'i',"));
        assert!(out.contains("<i-mdi-home />"));
        assert!(!out.contains("customCollections"));
    }

    #[test]
    fn test_webpack_uses_require() {
        let out = config(BuildTool::Webpack, UnpluginFramework::React);
        assert!(out.contains("const Icons = require('unplugin-icons/webpack')\n"));
        assert!(out.contains("const AutoImport = require('unplugin-auto-import/webpack')\n"));
        assert!(out.contains("module.exports = {\n"));
        assert!(out.contains("prefix: 'Icon',"));
        assert!(out.contains("<IconMdiHome />"));
    }

    #[test]
    fn test_esbuild_shape() {
        let out = config(BuildTool::Esbuild, UnpluginFramework::Solid);
        assert!(out.contains("import { build } from 'esbuild'\n"));
        assert!(out.contains("may require additional setup"));
        assert!(out.contains("build({\n  plugins: [\n"));
        assert!(out.contains("  // other esbuild options\n});\n"));
        assert!(!out.contains("import AutoImport"));
    }

    #[test]
    fn test_custom_collections_webpack() {
        let out = generate_unplugin_config(&UnpluginConfigOptions {
            custom_collections: true,
            ..UnpluginConfigOptions::new(BuildTool::Webpack, UnpluginFramework::Vue2)
        });
        assert!(out.contains("const { FileSystemIconLoader } = require('unplugin-icons/loaders')"));
        assert!(out.contains("const fs = require('fs').promises"));
        assert!(out.contains("customCollections: {"));
        assert!(out.contains("iconCustomizer(collection, icon, props)"));
    }

    #[test]
    fn test_manual_usage_without_auto_import() {
        let out = generate_unplugin_config(&UnpluginConfigOptions {
            auto_import: false,
            ..UnpluginConfigOptions::new(BuildTool::Rollup, UnpluginFramework::Vue3)
        });
        assert!(!out.contains("Components("));
        assert!(out.contains("<script setup>"));
    }

    #[test]
    fn test_svelte_has_no_resolver() {
        let out = config(BuildTool::Vite, UnpluginFramework::Svelte);
        assert!(!out.contains("IconsResolver"));
        assert!(out.contains("Svelte usage:"));
    }

    #[test]
    fn test_enum_wire_names() {
        let tool: BuildTool = serde_json::from_str("\"rollup\"").unwrap();
        assert_eq!(tool, BuildTool::Rollup);
        let fw: UnpluginFramework = serde_json::from_str("\"vue2\"").unwrap();
        assert_eq!(fw, UnpluginFramework::Vue2);
        assert!(serde_json::from_str::<UnpluginFramework>("\"angular\"").is_err());
    }
}
