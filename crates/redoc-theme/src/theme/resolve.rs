//! Resolving light and dark theme variants.
//!
//! The order is fixed:
//!
//! ```text
//! light = base ⊕ LIGHT_TOKENS
//! dark  = light ⊕ DARK_TOKENS
//! ```
//!
//! Dark is derived from light, not from the base. The dark table only sets
//! what has to change for contrast; everything else (fonts, sidebar width,
//! active menu color) falls through from the light layer.

use serde::{Deserialize, Serialize};

use super::merge::Merge;
use super::mode::ColorMode;
use super::overrides::ThemeOverrides;
use crate::tokens::{DARK_TOKENS, LIGHT_TOKENS};

/// Folds layers left to right into a new theme. The last layer that sets a
/// field wins.
///
/// Inputs are only borrowed, so shared token tables stay untouched. An empty
/// slice yields an empty theme.
///
/// # Example
///
/// ```rust
/// use redoc_theme::{merge_theme, ThemeOverrides, LIGHT_TOKENS};
///
/// let base = ThemeOverrides::with_primary_color("#ff0000");
/// let light = merge_theme(&[&base, &*LIGHT_TOKENS]);
/// assert!(light.sidebar().is_some());
/// assert!(light.primary_color().is_some());
/// ```
pub fn merge_theme(layers: &[&ThemeOverrides]) -> ThemeOverrides {
    let mut layers = layers.iter();
    let mut theme = match layers.next() {
        Some(first) => (*first).clone(),
        None => return ThemeOverrides::default(),
    };
    for layer in layers {
        theme.merge_from(layer);
    }
    theme
}

/// The two resolved variants of one base theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeVariants {
    pub light: ThemeOverrides,
    pub dark: ThemeOverrides,
}

impl ThemeVariants {
    /// Selects the variant for `mode`.
    pub fn for_mode(&self, mode: ColorMode) -> &ThemeOverrides {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Resolves both variants against the built-in token tables.
pub fn resolve_variants(base: &ThemeOverrides) -> ThemeVariants {
    resolve_variants_with(base, &LIGHT_TOKENS, &DARK_TOKENS)
}

/// Resolves both variants against explicit token tables.
pub fn resolve_variants_with(
    base: &ThemeOverrides,
    light_tokens: &ThemeOverrides,
    dark_tokens: &ThemeOverrides,
) -> ThemeVariants {
    let light = merge_theme(&[base, light_tokens]);
    let dark = merge_theme(&[&light, dark_tokens]);
    ThemeVariants { light, dark }
}

/// Resolves a single variant from the base, for callers that recompute on
/// every render instead of keeping both variants around.
///
/// Always equal to `resolve_variants(base).for_mode(mode)`.
pub fn theme_for_mode(base: &ThemeOverrides, mode: ColorMode) -> ThemeOverrides {
    let light = merge_theme(&[base, &*LIGHT_TOKENS]);
    match mode {
        ColorMode::Light => light,
        ColorMode::Dark => light.merged(&DARK_TOKENS),
    }
}
