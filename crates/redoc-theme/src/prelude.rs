//! Convenient imports for the common render path.
//!
//! ```rust
//! use redoc_theme::prelude::*;
//!
//! let data = GlobalData::default();
//! let composed = compose(&data, ColorMode::Light, None);
//! assert!(composed.theme.sidebar().is_some());
//! ```

pub use crate::compose::{compose, render_props, ApiDocProps, Composed};
pub use crate::config::ThemeConfig;
pub use crate::global_data::GlobalData;
pub use crate::options::{InstanceOverrides, RendererOptions};
pub use crate::theme::{ColorMode, Merge, ThemeOverrides};
