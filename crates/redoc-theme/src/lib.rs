//! # Redoc Theme - Docusaurus-Matched Themes for Embedded API Docs
//!
//! `redoc-theme` resolves the theme and options for Redoc pages embedded in a
//! Docusaurus site, so the API reference picks up the site's fonts, menu
//! colors and brand color, and follows the light/dark toggle.
//!
//! Work happens in two phases:
//!
//! 1. **Build time**: [`GlobalData::build`] resolves the light and dark
//!    themes and the site-wide renderer options once.
//! 2. **Render time**: [`compose`] picks the variant for the current mode and
//!    applies the page's own overrides. It runs again on every toggle.
//!
//! ## Core Concepts
//!
//! - [`ThemeOverrides`]: Redoc's theme tree, every field optional
//! - [`Merge`]: layered, later-wins merging shared by themes and options
//! - [`LIGHT_TOKENS`] / [`DARK_TOKENS`]: built-in layers matching Infima
//! - [`RendererOptions`]: Redoc's option toggles
//! - [`ColorMode`]: light or dark
//!
//! ## Quick Start
//!
//! ```rust
//! use redoc_theme::{compose, ColorMode, GlobalData, ThemeConfig};
//!
//! let config = ThemeConfig::from_yaml(r##"
//! primaryColor: "#1890ff"
//! redocOptions:
//!   hideDownloadButton: false
//! "##).unwrap();
//!
//! // Once per build
//! let data = GlobalData::from_config(&config);
//!
//! // On every render
//! let composed = compose(&data, ColorMode::Dark, None);
//! assert_eq!(composed.options.hide_download_button, Some(false));
//! assert_eq!(
//!     composed.theme.primary_color().and_then(|t| t.as_str()),
//!     Some("#1890ff"),
//! );
//! ```
//!
//! ## Layer Order
//!
//! ```text
//! light  = { colors.primary.main } ⊕ LIGHT_TOKENS
//! dark   = light ⊕ DARK_TOKENS
//! theme  = (light | dark) ⊕ page theme
//! options = library defaults ⊕ site options ⊕ page options
//! ```

pub mod compose;
pub mod config;
mod error;
pub mod global_data;
pub mod options;
pub mod plugin;
pub mod prelude;
pub mod theme;
pub mod tokens;

pub use compose::{compose, render_props, ApiDocProps, Composed, RedocProps, SpecSource};
pub use config::{ConfigFormat, ThemeConfig};
pub use error::ThemeError;
pub use global_data::{base_theme, GlobalData};
pub use options::{InstanceOverrides, RedocOptions, RendererOptions};
pub use plugin::{BundlerPatch, PluginManifest, PLUGIN_NAME};
pub use theme::{
    detect_color_mode, merge_theme, resolve_variants, resolve_variants_with, set_mode_detector,
    theme_for_mode, Branch, ColorMode, Merge, ThemeOverrides, ThemeVariants, Token,
};
pub use tokens::{BRAND_COLOR, DARK_TOKENS, LIGHT_TOKENS};
