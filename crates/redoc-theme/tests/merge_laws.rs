//! Property-based tests for theme merging using proptest.

use std::collections::BTreeMap;

use proptest::prelude::*;
use redoc_theme::theme::{Colors, Fab, Palette, Sidebar, TextColors};
use redoc_theme::{
    compose, merge_theme, resolve_variants_with, Branch, ColorMode, GlobalData, RendererOptions,
    ThemeOverrides, Token,
};
use serde_json::Value;

// ============================================================================
// Test helpers
// ============================================================================

/// Flattens a serialized theme into `dotted.path -> leaf`.
fn leaves(theme: &ThemeOverrides) -> BTreeMap<String, Value> {
    fn walk(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&path, child, out);
                }
            }
            leaf => {
                out.insert(prefix.to_string(), leaf.clone());
            }
        }
    }

    let mut out = BTreeMap::new();
    walk("", &serde_json::to_value(theme).unwrap(), &mut out);
    out
}

/// Paths of every object node in a serialized theme.
fn nodes(theme: &ThemeOverrides) -> Vec<String> {
    fn walk(prefix: &str, value: &Value, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            out.push(prefix.to_string());
            for (key, child) in map {
                walk(&format!("{}.{}", prefix, key), child, out);
            }
        }
    }

    let mut out = Vec::new();
    walk("", &serde_json::to_value(theme).unwrap(), &mut out);
    out.into_iter()
        .map(|p| p.trim_start_matches('.').to_string())
        .collect()
}

/// True if one path is the other, or an ancestor of it.
fn related(a: &str, b: &str) -> bool {
    a == b || a.starts_with(&format!("{}.", b)) || b.starts_with(&format!("{}.", a))
}

/// True if merging `later` on top can change the leaf at `path`: it sets a
/// related leaf, or puts a subtree exactly where the leaf was.
fn touched_by(path: &str, later: &ThemeOverrides) -> bool {
    leaves(later).keys().any(|p| related(p, path)) || nodes(later).iter().any(|p| p == path)
}

// ============================================================================
// Strategies
// ============================================================================

/// Text tokens, plus the occasional array in a leaf slot.
fn token() -> impl Strategy<Value = Option<Token>> {
    let text = "[a-z#0-9]{1,8}".prop_map(Token::from);
    let list = prop::collection::vec("[a-z]{1,4}", 1..3).prop_map(|items| {
        Token::Other(Value::Array(items.into_iter().map(Value::String).collect()))
    });
    prop::option::of(prop_oneof![3 => text, 1 => list])
}

fn malformed<T: std::fmt::Debug>() -> impl Strategy<Value = Branch<T>> {
    "[a-z]{1,6}".prop_map(|s| Branch::Leaf(Token::from(s)))
}

fn sidebar() -> impl Strategy<Value = Option<Branch<Sidebar>>> {
    prop::option::of(prop_oneof![
        4 => (token(), token(), token(), token()).prop_map(|(width, bg, text, active)| {
            Branch::Tree(Sidebar {
                width,
                background_color: bg,
                text_color: text,
                active_text_color: active,
                ..Default::default()
            })
        }),
        1 => malformed(),
    ])
}

fn colors() -> impl Strategy<Value = Option<Branch<Colors>>> {
    let palette = prop::option::of(
        (token(), token()).prop_map(|(main, light)| {
            Branch::Tree(Palette {
                main,
                light,
                ..Default::default()
            })
        }),
    );
    let text = prop::option::of(
        (token(), token()).prop_map(|(primary, secondary)| {
            Branch::Tree(TextColors {
                primary,
                secondary,
                ..Default::default()
            })
        }),
    );
    prop::option::of(prop_oneof![
        4 => (palette, text).prop_map(|(primary, text)| {
            Branch::Tree(Colors {
                primary,
                text,
                ..Default::default()
            })
        }),
        1 => malformed(),
    ])
}

fn fab() -> impl Strategy<Value = Option<Branch<Fab>>> {
    prop::option::of((token(), token()).prop_map(|(background_color, color)| {
        Branch::Tree(Fab {
            background_color,
            color,
            ..Default::default()
        })
    }))
}

fn theme() -> impl Strategy<Value = ThemeOverrides> {
    (sidebar(), colors(), fab()).prop_map(|(sidebar, colors, fab)| ThemeOverrides {
        sidebar,
        colors,
        fab,
        ..Default::default()
    })
}

fn well_formed_theme() -> impl Strategy<Value = ThemeOverrides> {
    theme().prop_filter("no malformed sections", |t| {
        !matches!(t.sidebar, Some(Branch::Leaf(_))) && !matches!(t.colors, Some(Branch::Leaf(_)))
    })
}

fn options() -> impl Strategy<Value = RendererOptions> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of("[a-z0-9,]{1,8}"),
    )
        .prop_map(|(hide_download_button, disable_search, expand_responses)| {
            RendererOptions {
                hide_download_button,
                disable_search,
                expand_responses,
                ..Default::default()
            }
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A single layer merges to itself.
    #[test]
    fn single_layer_is_identity(a in theme()) {
        prop_assert_eq!(merge_theme(&[&a]), a);
    }

    /// Merging never changes its inputs.
    #[test]
    fn merge_leaves_inputs_untouched(a in theme(), b in theme()) {
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = merge_theme(&[&a, &b]);
        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }

    /// Every leaf the later layer sets shows up unchanged.
    #[test]
    fn later_layer_leaves_win(a in theme(), b in theme()) {
        let merged = leaves(&merge_theme(&[&a, &b]));
        for (path, value) in leaves(&b) {
            prop_assert_eq!(merged.get(&path), Some(&value), "path {}", path);
        }
    }

    /// An array leaf is replaced by the later one, never merged element-wise.
    #[test]
    fn array_leaves_replace_wholesale(
        first in prop::collection::vec("[a-z]{1,4}", 1..4),
        second in prop::collection::vec("[a-z]{1,4}", 1..4),
    ) {
        let layer = |items: &[String]| ThemeOverrides {
            sidebar: Some(Branch::Tree(Sidebar {
                width: Some(Token::Other(serde_json::json!(items))),
                ..Default::default()
            })),
            ..Default::default()
        };
        let (a, b) = (layer(&first), layer(&second));

        let merged = leaves(&merge_theme(&[&a, &b]));
        prop_assert_eq!(merged.get("sidebar.width"), Some(&serde_json::json!(second)));
    }

    /// Leaves of the earlier layer survive unless the later layer touches
    /// the same path.
    #[test]
    fn earlier_only_leaves_survive(a in theme(), b in theme()) {
        let merged = leaves(&merge_theme(&[&a, &b]));
        for (path, value) in leaves(&a) {
            if touched_by(&path, &b) {
                continue;
            }
            prop_assert_eq!(merged.get(&path), Some(&value), "path {}", path);
        }
    }

    /// Nothing appears in the result that neither layer set.
    #[test]
    fn no_invented_leaves(a in theme(), b in theme()) {
        let (left, right) = (leaves(&a), leaves(&b));
        for path in leaves(&merge_theme(&[&a, &b])).keys() {
            prop_assert!(left.contains_key(path) || right.contains_key(path), "path {}", path);
        }
    }

    /// For well-formed trees, grouping does not matter.
    #[test]
    fn well_formed_merge_is_associative(
        a in well_formed_theme(),
        b in well_formed_theme(),
        c in well_formed_theme(),
    ) {
        let left = merge_theme(&[&merge_theme(&[&a, &b]), &c]);
        let right = merge_theme(&[&a, &merge_theme(&[&b, &c])]);
        prop_assert_eq!(left, right);
    }

    /// Dark keeps every light leaf the dark table does not touch, and takes
    /// every leaf the dark table sets.
    #[test]
    fn dark_layers_on_light(base in theme(), light in theme(), dark in theme()) {
        let variants = resolve_variants_with(&base, &light, &dark);
        let light_leaves = leaves(&variants.light);
        let dark_table = leaves(&dark);
        let dark_leaves = leaves(&variants.dark);

        for (path, value) in &dark_table {
            prop_assert_eq!(dark_leaves.get(path), Some(value));
        }
        for (path, value) in &light_leaves {
            if !touched_by(path, &dark) {
                prop_assert_eq!(dark_leaves.get(path), Some(value));
            }
        }
    }

    /// Composition is pure and a double toggle returns to the start.
    #[test]
    fn compose_toggle_round_trips(color in "#[0-9a-f]{6}", site in options(), dark in any::<bool>()) {
        let data = GlobalData::build(Some(color.as_str()), Some(&site));
        let mode = ColorMode::from(dark);

        let first = compose(&data, mode, None);
        prop_assert_eq!(&compose(&data, mode, None), &first);

        let back = compose(&data, mode.toggled().toggled(), None);
        prop_assert_eq!(back, first);
    }

    /// Site options beat defaults; nothing the site leaves unset changes.
    #[test]
    fn site_options_override_defaults(site in options()) {
        let data = GlobalData::build(None, Some(&site));
        let composed = compose(&data, ColorMode::Light, None);

        if let Some(v) = site.hide_download_button {
            prop_assert_eq!(composed.options.hide_download_button, Some(v));
        } else {
            prop_assert_eq!(composed.options.hide_download_button, Some(true));
        }
        prop_assert_eq!(composed.options.disable_search, site.disable_search);
        prop_assert_eq!(composed.options.menu_toggle, Some(true));
    }
}
