//! Light/dark mode selection.
//!
//! In a site the mode comes from the live theme toggle (`isDarkTheme`). Tools
//! running outside a browser can ask the OS instead via [`detect_color_mode`],
//! which can be overridden for tests with [`set_mode_detector`].

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The page's current color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ColorMode {
    /// Maps the host's `isDarkTheme` flag.
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl From<bool> for ColorMode {
    fn from(is_dark: bool) -> Self {
        ColorMode::from_dark_flag(is_dark)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides how [`detect_color_mode`] decides the mode.
///
/// ```rust
/// use redoc_theme::{detect_color_mode, set_mode_detector, ColorMode};
///
/// set_mode_detector(|| ColorMode::Dark);
/// assert_eq!(detect_color_mode(), ColorMode::Dark);
/// ```
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

/// Detects the preferred color mode, from the OS unless overridden.
///
/// Detection failures and "unspecified" fall back to light.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ColorMode::Light,
        Err(err) => {
            tracing::debug!(error = %err, "OS color mode detection failed, using light");
            ColorMode::Light
        }
    }
}
