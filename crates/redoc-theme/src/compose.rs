//! Per-render composition.
//!
//! The light/dark toggle is only known in the browser, so each render picks
//! its theme from the build-time [`GlobalData`] and applies the page's own
//! overrides. Composition is a pure function of its inputs; rendering the
//! same page twice in the same mode yields equal output, and flipping the
//! mode back and forth returns to the original result.
//!
//! Option precedence, lowest to highest:
//!
//! 1. Library defaults
//! 2. Site-wide `redocOptions`
//! 3. Per-page overrides

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{load_file, parse_json, parse_yaml};
use crate::error::ThemeError;
use crate::global_data::GlobalData;
use crate::options::{InstanceOverrides, RedocOptions, RendererOptions};
use crate::theme::{ColorMode, Merge, ThemeOverrides};

/// Effective theme and options for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composed {
    pub theme: ThemeOverrides,
    pub options: RendererOptions,
}

impl Composed {
    /// Attaches the theme to the options, as Redoc expects them.
    pub fn into_redoc_options(self) -> RedocOptions {
        RedocOptions {
            options: self.options,
            theme: self.theme,
        }
    }
}

/// Computes the effective theme and options for the current mode.
///
/// # Example
///
/// ```rust
/// use redoc_theme::{compose, ColorMode, GlobalData};
///
/// let data = GlobalData::default();
/// let light = compose(&data, ColorMode::Light, None);
/// let dark = compose(&data, ColorMode::Dark, None);
/// assert_ne!(light.theme, dark.theme);
/// assert_eq!(light.options, dark.options);
/// ```
pub fn compose(
    data: &GlobalData,
    mode: ColorMode,
    overrides: Option<&InstanceOverrides>,
) -> Composed {
    let mut theme = data.theme(mode).clone();
    let mut options = RendererOptions::library_defaults().merged(&data.redoc_options);

    if let Some(page) = overrides {
        options.merge_from(&page.options);
        if let Some(page_theme) = &page.theme {
            theme.merge_from(page_theme);
        }
    }

    tracing::debug!(
        %mode,
        page_overrides = overrides.is_some(),
        "composed redoc options"
    );

    Composed { theme, options }
}

/// Where Redoc loads the API description from.
///
/// Serialized as a single key, `spec` or `specUrl`, so it can be flattened
/// next to `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpecSource {
    /// An already-parsed document.
    #[serde(rename = "spec")]
    Inline(Value),
    /// A URL Redoc fetches itself.
    #[serde(rename = "specUrl")]
    Url(String),
}

/// Props a documentation page passes to the Redoc component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiDocProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<InstanceOverrides>,
}

impl ApiDocProps {
    /// Props for an inline document.
    pub fn inline(spec: Value) -> Self {
        Self {
            spec: Some(spec),
            ..Default::default()
        }
    }

    /// Props for a remote document.
    pub fn url(spec_url: impl Into<String>) -> Self {
        Self {
            spec_url: Some(spec_url.into()),
            ..Default::default()
        }
    }

    /// Parses page props from YAML. Integer keys such as `gray: {50: ...}`
    /// are read as strings.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        parse_yaml(yaml)
    }

    /// Parses page props from JSON.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        parse_json(json)
    }

    /// Loads page props from a file; `.json` is JSON, anything else YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        load_file(path.as_ref())
    }

    /// Adds per-page overrides.
    pub fn with_overrides(mut self, overrides: InstanceOverrides) -> Self {
        self.options = Some(overrides);
        self
    }

    /// Checks that exactly one of `spec` and `specUrl` is set.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingSpecSource`] when neither is set,
    /// [`ThemeError::ConflictingSpecSource`] when both are.
    pub fn source(&self) -> Result<SpecSource, ThemeError> {
        match (&self.spec, &self.spec_url) {
            (Some(spec), None) => Ok(SpecSource::Inline(spec.clone())),
            (None, Some(url)) => Ok(SpecSource::Url(url.clone())),
            (Some(_), Some(_)) => Err(ThemeError::ConflictingSpecSource),
            (None, None) => Err(ThemeError::MissingSpecSource),
        }
    }
}

/// Everything the Redoc component receives for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedocProps {
    #[serde(flatten)]
    pub source: SpecSource,
    pub options: RedocOptions,
}

/// Full per-page pipeline: validate the spec source, then compose.
///
/// ```rust
/// use redoc_theme::{render_props, ApiDocProps, ColorMode, GlobalData, SpecSource};
///
/// let data = GlobalData::default();
/// let props = render_props(&data, &ApiDocProps::url("/openapi.yaml"), ColorMode::Dark).unwrap();
/// assert_eq!(props.source, SpecSource::Url("/openapi.yaml".into()));
///
/// assert!(render_props(&data, &ApiDocProps::default(), ColorMode::Dark).is_err());
/// ```
pub fn render_props(
    data: &GlobalData,
    props: &ApiDocProps,
    mode: ColorMode,
) -> Result<RedocProps, ThemeError> {
    let source = props.source()?;
    let composed = compose(data, mode, props.options.as_ref());
    Ok(RedocProps {
        source,
        options: composed.into_redoc_options(),
    })
}
