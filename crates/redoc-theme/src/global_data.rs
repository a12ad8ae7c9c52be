//! Build-time data shared by every Redoc page of a site build.
//!
//! [`GlobalData`] is computed once from the plugin config, then handed to
//! every page render by reference. It is never mutated after construction,
//! so concurrent renders can share one instance behind an `Arc`.

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::options::RendererOptions;
use crate::theme::{resolve_variants, ColorMode, Merge, ThemeOverrides, ThemeVariants, Token};
use crate::tokens::BRAND_COLOR;

/// Both resolved theme variants plus the site-wide renderer options.
///
/// Serialized in the shape the site runtime reads back:
/// `{ lightTheme, darkTheme, redocOptions }`.
///
/// # Example
///
/// ```rust
/// use redoc_theme::{ColorMode, GlobalData};
///
/// let data = GlobalData::build(Some("#ff5500"), None);
/// let dark = data.theme(ColorMode::Dark);
/// assert_eq!(dark.primary_color().and_then(|t| t.as_str()), Some("#ff5500"));
/// assert_eq!(data.redoc_options.menu_toggle, Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalData {
    pub light_theme: ThemeOverrides,
    pub dark_theme: ThemeOverrides,
    /// Library defaults with the site's options applied.
    pub redoc_options: RendererOptions,
}

impl GlobalData {
    /// Resolves both theme variants and the site-wide options.
    ///
    /// A missing or blank `primary_color` falls back to [`BRAND_COLOR`].
    pub fn build(primary_color: Option<&str>, user_options: Option<&RendererOptions>) -> Self {
        let base = base_theme(primary_color);
        let ThemeVariants { light, dark } = resolve_variants(&base);

        let mut redoc_options = RendererOptions::library_defaults();
        if let Some(user) = user_options {
            redoc_options.merge_from(user);
        }

        tracing::debug!(
            primary = ?base.primary_color(),
            user_options = user_options.is_some(),
            "built redoc global data"
        );

        Self {
            light_theme: light,
            dark_theme: dark,
            redoc_options,
        }
    }

    /// Builds from a parsed plugin config.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::build(config.primary_color.as_deref(), config.redoc_options.as_ref())
    }

    /// The precomputed theme for `mode`.
    pub fn theme(&self, mode: ColorMode) -> &ThemeOverrides {
        match mode {
            ColorMode::Light => &self.light_theme,
            ColorMode::Dark => &self.dark_theme,
        }
    }
}

impl Default for GlobalData {
    fn default() -> Self {
        Self::build(None, None)
    }
}

/// `{ colors: { primary: { main } } }` from the configured color.
pub fn base_theme(primary_color: Option<&str>) -> ThemeOverrides {
    let color = primary_color
        .map(Token::from)
        .filter(|token| !token.is_blank())
        .unwrap_or_else(|| Token::from(BRAND_COLOR));
    ThemeOverrides::with_primary_color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_without_color_uses_brand() {
        let data = GlobalData::build(None, Some(&RendererOptions::default()));
        assert_eq!(
            data.light_theme.primary_color(),
            Some(&Token::from(BRAND_COLOR))
        );
        assert_eq!(
            data.dark_theme.primary_color(),
            Some(&Token::from(BRAND_COLOR))
        );
    }

    #[test]
    fn test_blank_color_uses_brand() {
        let base = base_theme(Some("   "));
        assert_eq!(base.primary_color(), Some(&Token::from(BRAND_COLOR)));
    }

    #[test]
    fn test_build_keeps_custom_color() {
        let data = GlobalData::build(Some("#000000"), None);
        assert_eq!(
            data.light_theme.primary_color(),
            Some(&Token::from("#000000"))
        );
    }

    #[test]
    fn test_build_merges_user_options_over_defaults() {
        let user: RendererOptions = serde_json::from_value(json!({
            "hideDownloadButton": false,
            "nativeScrollbars": true,
        }))
        .unwrap();

        let data = GlobalData::build(None, Some(&user));
        assert_eq!(data.redoc_options.hide_download_button, Some(false));
        assert_eq!(data.redoc_options.native_scrollbars, Some(true));
        assert_eq!(data.redoc_options.menu_toggle, Some(true));
        assert_eq!(data.redoc_options.scroll_y_offset, Some("nav.navbar".into()));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(GlobalData::default()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"lightTheme"));
        assert!(keys.contains(&"darkTheme"));
        assert!(keys.contains(&"redocOptions"));
    }

    #[test]
    fn test_round_trip_through_json() {
        let data = GlobalData::build(Some("teal"), None);
        let text = serde_json::to_string(&data).unwrap();
        let back: GlobalData = serde_json::from_str(&text).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_from_config() {
        let config = ThemeConfig {
            primary_color: Some("#111".to_string()),
            redoc_options: None,
        };
        let data = GlobalData::from_config(&config);
        assert_eq!(data, GlobalData::build(Some("#111"), None));
    }
}
