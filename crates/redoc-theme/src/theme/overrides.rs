//! The Redoc theme shape, every field optional.
//!
//! One struct per named style category. A missing field means "inherit from
//! the layer merged before this one"; nothing is filled in that no layer set.

use super::merge::{theme_section, Branch};
use super::token::Token;

theme_section! {
    /// Recursively partial Redoc theme.
    ///
    /// This is the value handed to Redoc under `options.theme`, and also the
    /// shape of every layer that goes into it (base color, token tables, user
    /// overrides).
    ///
    /// # Example
    ///
    /// ```rust
    /// use redoc_theme::{Merge, ThemeOverrides};
    ///
    /// let base = ThemeOverrides::with_primary_color("#0055aa");
    /// let user: ThemeOverrides = serde_json::from_str(
    ///     r#"{"sidebar": {"width": "300px"}}"#,
    /// ).unwrap();
    ///
    /// let theme = base.merged(&user);
    /// assert_eq!(theme.primary_color().and_then(|t| t.as_str()), Some("#0055aa"));
    /// ```
    pub struct ThemeOverrides {
        node spacing: Branch<Spacing>,
        node breakpoints: Branch<Breakpoints>,
        node colors: Branch<Colors>,
        node schema: Branch<Schema>,
        node typography: Branch<Typography>,
        node sidebar: Branch<Sidebar>,
        node logo: Branch<Logo>,
        node right_panel: Branch<RightPanel>,
        node code_block: Branch<CodeBlock>,
        node fab: Branch<Fab>,
    }
}

theme_section! {
    pub struct Spacing {
        leaf unit: Token,
        leaf section_horizontal: Token,
        leaf section_vertical: Token,
    }
}

theme_section! {
    pub struct Breakpoints {
        leaf small: Token,
        leaf medium: Token,
        leaf large: Token,
    }
}

theme_section! {
    /// Brand, status, text and HTTP method colors.
    pub struct Colors {
        leaf tonal_offset: Token,
        node primary: Branch<Palette>,
        node success: Branch<Palette>,
        node warning: Branch<Palette>,
        node error: Branch<Palette>,
        node gray: Branch<Gray>,
        node text: Branch<TextColors>,
        node border: Branch<BorderColors>,
        node responses: Branch<Responses>,
        node http: Branch<HttpColors>,
    }
}

theme_section! {
    /// A color with its derived shades.
    pub struct Palette {
        leaf main: Token,
        leaf light: Token,
        leaf dark: Token,
        leaf contrast_text: Token,
    }
}

theme_section! {
    pub struct Gray {
        #[serde(rename = "50")]
        leaf shade_50: Token,
        #[serde(rename = "100")]
        leaf shade_100: Token,
    }
}

theme_section! {
    pub struct TextColors {
        leaf primary: Token,
        leaf secondary: Token,
    }
}

theme_section! {
    pub struct BorderColors {
        leaf dark: Token,
        leaf light: Token,
    }
}

theme_section! {
    /// Response panel colors, keyed by status class.
    pub struct Responses {
        node success: Branch<ResponseColors>,
        node error: Branch<ResponseColors>,
        node redirect: Branch<ResponseColors>,
        node info: Branch<ResponseColors>,
    }
}

theme_section! {
    pub struct ResponseColors {
        leaf color: Token,
        leaf background_color: Token,
        leaf tab_text_color: Token,
    }
}

theme_section! {
    /// Badge colors per HTTP method.
    pub struct HttpColors {
        leaf get: Token,
        leaf post: Token,
        leaf put: Token,
        leaf options: Token,
        leaf patch: Token,
        leaf delete: Token,
        leaf basic: Token,
        leaf link: Token,
        leaf head: Token,
    }
}

theme_section! {
    pub struct Schema {
        leaf lines_color: Token,
        leaf default_details_width: Token,
        leaf type_name_color: Token,
        leaf type_title_color: Token,
        leaf require_label_color: Token,
        leaf labels_text_size: Token,
        leaf nesting_spacing: Token,
        leaf nested_background: Token,
        node arrow: Branch<Arrow>,
    }
}

theme_section! {
    pub struct Arrow {
        leaf size: Token,
        leaf color: Token,
    }
}

theme_section! {
    pub struct Typography {
        leaf font_size: Token,
        leaf line_height: Token,
        leaf font_weight_regular: Token,
        leaf font_weight_bold: Token,
        leaf font_weight_light: Token,
        leaf font_family: Token,
        leaf smoothing: Token,
        leaf optimize_speed: Token,
        node headings: Branch<Headings>,
        node code: Branch<CodeTypography>,
        node links: Branch<Links>,
    }
}

theme_section! {
    pub struct Headings {
        leaf font_family: Token,
        leaf font_weight: Token,
        leaf line_height: Token,
    }
}

theme_section! {
    pub struct CodeTypography {
        leaf font_size: Token,
        leaf font_family: Token,
        leaf line_height: Token,
        leaf font_weight: Token,
        leaf color: Token,
        leaf background_color: Token,
        leaf wrap: Token,
    }
}

theme_section! {
    pub struct Links {
        leaf color: Token,
        leaf visited: Token,
        leaf hover: Token,
        leaf text_decoration: Token,
        leaf hover_text_decoration: Token,
    }
}

theme_section! {
    /// The navigation menu on the left.
    pub struct Sidebar {
        leaf width: Token,
        leaf background_color: Token,
        leaf text_color: Token,
        leaf active_text_color: Token,
        node group_items: Branch<MenuItems>,
        node level1_items: Branch<MenuItems>,
        node arrow: Branch<Arrow>,
    }
}

theme_section! {
    pub struct MenuItems {
        leaf active_background_color: Token,
        leaf active_text_color: Token,
        leaf text_transform: Token,
    }
}

theme_section! {
    pub struct Logo {
        leaf max_height: Token,
        leaf max_width: Token,
        leaf gutter: Token,
    }
}

theme_section! {
    /// The code-sample panel on the right.
    pub struct RightPanel {
        leaf background_color: Token,
        leaf width: Token,
        leaf text_color: Token,
        node servers: Branch<Servers>,
    }
}

theme_section! {
    pub struct Servers {
        node overlay: Branch<ServersOverlay>,
        node url: Branch<ServersUrl>,
    }
}

theme_section! {
    pub struct ServersOverlay {
        leaf background_color: Token,
        leaf text_color: Token,
    }
}

theme_section! {
    pub struct ServersUrl {
        leaf background_color: Token,
    }
}

theme_section! {
    pub struct CodeBlock {
        leaf background_color: Token,
    }
}

theme_section! {
    /// The floating menu button shown on narrow screens.
    pub struct Fab {
        leaf background_color: Token,
        leaf color: Token,
    }
}

impl ThemeOverrides {
    /// Builds the base layer: `{ colors: { primary: { main: color } } }`.
    pub fn with_primary_color(color: impl Into<Token>) -> Self {
        Self {
            colors: Some(Branch::Tree(Colors {
                primary: Some(Branch::Tree(Palette {
                    main: Some(color.into()),
                    ..Default::default()
                })),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    /// Returns `colors.primary.main`, if set and well-formed.
    pub fn primary_color(&self) -> Option<&Token> {
        self.colors
            .as_ref()?
            .tree()?
            .primary
            .as_ref()?
            .tree()?
            .main
            .as_ref()
    }

    /// Returns the well-formed sidebar section, if any.
    pub fn sidebar(&self) -> Option<&Sidebar> {
        self.sidebar.as_ref()?.tree()
    }

    /// Returns the well-formed colors section, if any.
    pub fn colors(&self) -> Option<&Colors> {
        self.colors.as_ref()?.tree()
    }

    /// Returns the well-formed typography section, if any.
    pub fn typography(&self) -> Option<&Typography> {
        self.typography.as_ref()?.tree()
    }

    /// Returns true if no layer set anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Merge;
    use serde_json::json;

    #[test]
    fn test_default_serializes_empty() {
        let theme = ThemeOverrides::default();
        assert!(theme.is_empty());
        assert_eq!(serde_json::to_value(&theme).unwrap(), json!({}));
    }

    #[test]
    fn test_with_primary_color_shape() {
        let theme = ThemeOverrides::with_primary_color("#25c2a0");
        assert_eq!(
            serde_json::to_value(&theme).unwrap(),
            json!({"colors": {"primary": {"main": "#25c2a0"}}})
        );
        assert_eq!(theme.primary_color(), Some(&Token::from("#25c2a0")));
    }

    #[test]
    fn test_camel_case_keys() {
        let theme: ThemeOverrides = serde_json::from_value(json!({
            "rightPanel": {"backgroundColor": "#303846"},
            "sidebar": {"level1Items": {"textTransform": "uppercase"}},
            "colors": {"gray": {"50": "#FAFAFA"}}
        }))
        .unwrap();

        let right = theme.right_panel.as_ref().and_then(|b| b.tree()).unwrap();
        assert_eq!(right.background_color, Some("#303846".into()));

        let level1 = theme
            .sidebar()
            .and_then(|s| s.level1_items.as_ref())
            .and_then(|b| b.tree())
            .unwrap();
        assert_eq!(level1.text_transform, Some("uppercase".into()));

        let gray = theme
            .colors()
            .and_then(|c| c.gray.as_ref())
            .and_then(|b| b.tree())
            .unwrap();
        assert_eq!(gray.shade_50, Some("#FAFAFA".into()));
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let input = json!({
            "sidebar": {"textColor": "red", "customThing": {"a": 1}},
            "extensionsHook": "keep-me"
        });
        let theme: ThemeOverrides = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(theme.extra.get("extensionsHook"), Some(&json!("keep-me")));
        assert_eq!(serde_json::to_value(&theme).unwrap(), input);
    }

    #[test]
    fn test_scalar_where_category_expected() {
        let theme: ThemeOverrides =
            serde_json::from_value(json!({"sidebar": "dark-please"})).unwrap();
        assert_eq!(theme.sidebar, Some(Branch::Leaf("dark-please".into())));
        assert!(theme.sidebar().is_none());
    }

    #[test]
    fn test_merge_sibling_fields_survive() {
        let a: ThemeOverrides = serde_json::from_value(json!({
            "sidebar": {"width": "260px", "textColor": "black"}
        }))
        .unwrap();
        let b: ThemeOverrides =
            serde_json::from_value(json!({"sidebar": {"textColor": "white"}})).unwrap();

        let merged = a.merged(&b);
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"sidebar": {"width": "260px", "textColor": "white"}})
        );
    }

    #[test]
    fn test_merge_array_leaf_replaced_wholesale() {
        let a: ThemeOverrides = serde_json::from_value(json!({
            "typography": {"fontFamily": ["a", "b"], "fontSize": "14px"}
        }))
        .unwrap();
        let b: ThemeOverrides =
            serde_json::from_value(json!({"typography": {"fontFamily": ["z"]}})).unwrap();

        let merged = a.merged(&b);
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"typography": {"fontFamily": ["z"], "fontSize": "14px"}})
        );
    }

    #[test]
    fn test_merge_tree_replaces_malformed_leaf() {
        let a: ThemeOverrides = serde_json::from_value(json!({"colors": 7})).unwrap();
        let b = ThemeOverrides::with_primary_color("#000");

        let merged = a.merged(&b);
        assert_eq!(merged.primary_color(), Some(&Token::from("#000")));
    }
}
