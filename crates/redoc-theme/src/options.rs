//! Redoc renderer options.
//!
//! Options are independent toggles, so they merge shallowly: each field set
//! in a later layer replaces the earlier one, nothing recurses. The effective
//! options for a page stack three layers:
//!
//! 1. [`RendererOptions::library_defaults`]
//! 2. Site-wide options from the plugin config
//! 3. Per-page overrides
//!
//! `theme` is not part of these options; it is resolved separately and
//! attached when building [`RedocOptions`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::theme::merge::merge_leaf;
use crate::theme::{Merge, ThemeOverrides, Token};

/// Navbar selector Redoc offsets its scroll position by.
pub const NAVBAR_SELECTOR: &str = "nav.navbar";

/// Redoc options, every field optional.
///
/// Names follow Redoc's documented option names in camelCase. Unknown keys
/// are kept in `extra` and passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererOptions {
    /// CSS selector or pixel offset for sticky headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_y_offset: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_download_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_single_schema_field: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_toggle: Option<bool>,
    /// Not in Redoc's typings but honored at runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_hostname: Option<bool>,
    /// `"all"` or a comma-separated list of status codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_responses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_props_first: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_props_alphabetically: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_scrollbars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_in_middle_panel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_loading: Option<bool>,
    /// A depth or `"all"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_sample_expand_level: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_schema_titles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_extensions: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untrusted_spec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_auto_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_required_in_samples: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_single_request_sample_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_object_schema_examples: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_schema_pattern: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_displayed_enum_values: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_fab: Option<bool>,
    /// Options without a dedicated field, kept verbatim.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl RendererOptions {
    /// Options applied when neither the site nor the page sets them.
    pub fn library_defaults() -> Self {
        Self {
            scroll_y_offset: Some(NAVBAR_SELECTOR.into()),
            hide_download_button: Some(true),
            expand_single_schema_field: Some(true),
            menu_toggle: Some(true),
            suppress_warnings: Some(true),
            ..Default::default()
        }
    }

    /// Returns true if no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Looks up an option by its Redoc name, including pass-through keys.
    pub fn get(&self, name: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map.remove(name),
            _ => None,
        }
    }
}

impl Merge for RendererOptions {
    fn merge_from(&mut self, other: &Self) {
        merge_leaf(&mut self.scroll_y_offset, &other.scroll_y_offset);
        merge_leaf(&mut self.hide_download_button, &other.hide_download_button);
        merge_leaf(
            &mut self.expand_single_schema_field,
            &other.expand_single_schema_field,
        );
        merge_leaf(&mut self.menu_toggle, &other.menu_toggle);
        merge_leaf(&mut self.suppress_warnings, &other.suppress_warnings);
        merge_leaf(&mut self.disable_search, &other.disable_search);
        merge_leaf(&mut self.hide_hostname, &other.hide_hostname);
        merge_leaf(&mut self.expand_responses, &other.expand_responses);
        merge_leaf(&mut self.required_props_first, &other.required_props_first);
        merge_leaf(
            &mut self.sort_props_alphabetically,
            &other.sort_props_alphabetically,
        );
        merge_leaf(&mut self.native_scrollbars, &other.native_scrollbars);
        merge_leaf(&mut self.path_in_middle_panel, &other.path_in_middle_panel);
        merge_leaf(&mut self.hide_loading, &other.hide_loading);
        merge_leaf(
            &mut self.json_sample_expand_level,
            &other.json_sample_expand_level,
        );
        merge_leaf(&mut self.hide_schema_titles, &other.hide_schema_titles);
        merge_leaf(&mut self.show_extensions, &other.show_extensions);
        merge_leaf(&mut self.untrusted_spec, &other.untrusted_spec);
        merge_leaf(&mut self.no_auto_auth, &other.no_auto_auth);
        merge_leaf(
            &mut self.only_required_in_samples,
            &other.only_required_in_samples,
        );
        merge_leaf(
            &mut self.hide_single_request_sample_tab,
            &other.hide_single_request_sample_tab,
        );
        merge_leaf(
            &mut self.show_object_schema_examples,
            &other.show_object_schema_examples,
        );
        merge_leaf(&mut self.hide_schema_pattern, &other.hide_schema_pattern);
        merge_leaf(
            &mut self.max_displayed_enum_values,
            &other.max_displayed_enum_values,
        );
        merge_leaf(&mut self.hide_fab, &other.hide_fab);
        // Shallow: a nested pass-through value is replaced, not merged.
        for (key, value) in &other.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// The options object handed to Redoc: renderer options plus the theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedocOptions {
    #[serde(flatten)]
    pub options: RendererOptions,
    pub theme: ThemeOverrides,
}

/// Per-page overrides: any renderer option, plus theme overrides applied on
/// top of the resolved theme for the current mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceOverrides {
    #[serde(flatten)]
    pub options: RendererOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverrides>,
}

impl InstanceOverrides {
    /// Overrides that only touch renderer options.
    pub fn options(options: RendererOptions) -> Self {
        Self {
            options,
            theme: None,
        }
    }

    /// Adds theme overrides.
    pub fn with_theme(mut self, theme: ThemeOverrides) -> Self {
        self.theme = Some(theme);
        self
    }
}
