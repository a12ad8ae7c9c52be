//! Design-token tables matching the Docusaurus (Infima) look.
//!
//! Light tokens mostly point at Infima CSS variables, so Redoc follows the
//! site's own typography and menu colors. Dark tokens are deliberately sparse:
//! anything they do not set falls through from the light table.
//!
//! Both tables are built once per process and only ever read.

use once_cell::sync::Lazy;

use crate::theme::{
    BorderColors, Branch, CodeTypography, Colors, Gray, Headings, Links, RightPanel, Schema,
    Sidebar, TextColors, ThemeOverrides, Token, Typography,
};

/// Primary color used when the site does not configure one.
pub const BRAND_COLOR: &str = "#25c2a0";

/// Literal colors taken from Infima's dark-mode stylesheet.
pub mod infima {
    pub const DARK_GRAY: &str = "#303846";
    pub const DARK_PRIMARY_TEXT: &str = "#f5f6f7";
    pub const DARK_SECONDARY_TEXT: &str = "rgba(255, 255, 255, 1)";
    pub const DARK_BACKGROUND: &str = "rgb(24, 25, 26)";
    pub const DARK_NESTED_BACKGROUND: &str = "#1c1e21";
}

/// Light-mode layer, merged over the base theme.
pub static LIGHT_TOKENS: Lazy<ThemeOverrides> = Lazy::new(light_tokens);

/// Dark-mode layer, merged over the resolved light theme.
pub static DARK_TOKENS: Lazy<ThemeOverrides> = Lazy::new(dark_tokens);

fn tree<T>(section: T) -> Option<Branch<T>> {
    Some(Branch::Tree(section))
}

fn tok(value: &str) -> Option<Token> {
    Some(Token::from(value))
}

fn light_tokens() -> ThemeOverrides {
    ThemeOverrides {
        typography: tree(Typography {
            font_family: tok("var(--ifm-font-family-base)"),
            font_size: tok("var(--ifm-font-size-base)"),
            line_height: tok("var(--ifm-line-height-base)"),
            font_weight_light: tok("var(--ifm-font-weight-light)"),
            font_weight_regular: tok("var(--ifm-font-weight-base)"),
            font_weight_bold: tok("var(--ifm-font-weight-bold)"),
            headings: tree(Headings {
                font_family: tok("var(--ifm-heading-font-family)"),
                font_weight: tok("var(--ifm-heading-font-weight)"),
                line_height: tok("var(--ifm-heading-line-height)"),
                ..Default::default()
            }),
            code: tree(CodeTypography {
                background_color: tok("var(--ifm-code-background)"),
                font_size: tok("var(--ifm-code-font-size)"),
                font_family: tok("var(--ifm-font-family-monospace)"),
                line_height: tok("var(--ifm-pre-line-height)"),
                ..Default::default()
            }),
            links: tree(Links {
                color: tok("var(--ifm-link-color)"),
                visited: tok("var(--ifm-link-color)"),
                hover: tok("var(--ifm-link-hover-color)"),
                ..Default::default()
            }),
            ..Default::default()
        }),
        // Same width as the docs sidebar so the two areas line up.
        sidebar: tree(Sidebar {
            width: tok("var(--doc-sidebar-width)"),
            background_color: tok("#ffffff"),
            active_text_color: tok("var(--ifm-menu-color-active)"),
            text_color: tok("var(--ifm-menu-color)"),
            ..Default::default()
        }),
        right_panel: tree(RightPanel {
            background_color: tok(infima::DARK_GRAY),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn dark_tokens() -> ThemeOverrides {
    ThemeOverrides {
        colors: tree(Colors {
            text: tree(TextColors {
                primary: tok(infima::DARK_PRIMARY_TEXT),
                secondary: tok(infima::DARK_SECONDARY_TEXT),
                ..Default::default()
            }),
            gray: tree(Gray {
                shade_50: tok("#FAFAFA"),
                shade_100: tok("#F5F5F5"),
                ..Default::default()
            }),
            border: tree(BorderColors {
                dark: tok("#ffffff"),
                light: tok("rgba(0,0,0, 0.1)"),
                ..Default::default()
            }),
            ..Default::default()
        }),
        schema: tree(Schema {
            nested_background: tok(infima::DARK_NESTED_BACKGROUND),
            type_name_color: tok(infima::DARK_SECONDARY_TEXT),
            type_title_color: tok(infima::DARK_SECONDARY_TEXT),
            ..Default::default()
        }),
        sidebar: tree(Sidebar {
            background_color: tok(infima::DARK_BACKGROUND),
            text_color: tok("var(--ifm-menu-color)"),
            ..Default::default()
        }),
        ..Default::default()
    }
}
