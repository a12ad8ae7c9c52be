//! Redoc theme trees and how they are layered.
//!
//! A Redoc theme is a nested tree of optional style values. The final theme
//! for a page is built by stacking layers, each later layer winning per field:
//!
//! 1. The base: just the site's primary color.
//! 2. Light tokens: Infima CSS variables for fonts, links and the sidebar.
//! 3. Dark tokens (dark mode only): contrast fixes on top of light.
//! 4. Per-page `theme` overrides, if the page supplies any.
//!
//! ## Merge Rules
//!
//! - Unset fields inherit from the layer below.
//! - Leaves ([`Token`]) replace wholesale, arrays included.
//! - Well-formed subtrees merge recursively.
//! - A scalar where a subtree belongs ([`Branch::Leaf`]) replaces wholesale.
//!   Bad input produces an odd-looking theme, never an error.
//!
//! ## See Also
//!
//! - [`crate::tokens`]: the built-in light and dark tables
//! - [`crate::compose`]: per-render selection of a variant

pub(crate) mod merge;
mod mode;
mod overrides;
mod resolve;
mod token;

pub use merge::{Branch, Merge};
pub use mode::{detect_color_mode, set_mode_detector, ColorMode};
pub use overrides::{
    Arrow, BorderColors, Breakpoints, CodeBlock, CodeTypography, Colors, Fab, Gray, Headings,
    HttpColors, Links, Logo, MenuItems, Palette, ResponseColors, Responses, RightPanel, Schema,
    Servers, ServersOverlay, ServersUrl, Sidebar, Spacing, TextColors, ThemeOverrides, Typography,
};
pub use resolve::{
    merge_theme, resolve_variants, resolve_variants_with, theme_for_mode, ThemeVariants,
};
pub use token::Token;
