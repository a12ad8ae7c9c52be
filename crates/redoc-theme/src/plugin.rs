//! Registration metadata the site generator needs from this theme.
//!
//! Pure declarations: the plugin name that keys the global data, which
//! components users may swizzle, the client stylesheet, and the one bundler
//! tweak Redoc needs in browser builds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name the plugin registers under; global data is looked up by it.
pub const PLUGIN_NAME: &str = "docusaurus-theme-redoc";

/// Components users may eject and customize.
pub const SWIZZLE_COMPONENTS: [&str; 2] = ["Redoc", "ApiDoc"];

/// Stylesheet loaded on every page.
pub const CLIENT_STYLESHEET: &str = "custom.css";

/// Static description of the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub name: String,
    pub swizzle_components: Vec<String>,
    pub client_modules: Vec<String>,
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            swizzle_components: SWIZZLE_COMPONENTS.iter().map(|c| c.to_string()).collect(),
            client_modules: vec![CLIENT_STYLESHEET.to_string()],
        }
    }
}

impl PluginManifest {
    /// Returns true if `component` may be swizzled.
    pub fn is_swizzlable(&self, component: &str) -> bool {
        self.swizzle_components.iter().any(|c| c == component)
    }

    /// Bundler changes for one build target.
    ///
    /// Redoc pulls in Node built-ins, so browser builds get Node polyfills and
    /// `fs` resolved to nothing. Server builds need no changes.
    pub fn bundler_patch(&self, is_server: bool) -> Option<BundlerPatch> {
        if is_server {
            return None;
        }
        let mut resolve_fallback = BTreeMap::new();
        resolve_fallback.insert("fs".to_string(), false);
        Some(BundlerPatch {
            node_polyfills: true,
            resolve_fallback,
        })
    }
}

/// Additions to the client bundler config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerPatch {
    /// Inject polyfills for Node built-ins.
    pub node_polyfills: bool,
    /// Module name to fallback; `false` resolves the module to an empty one.
    pub resolve_fallback: BTreeMap<String, bool>,
}
