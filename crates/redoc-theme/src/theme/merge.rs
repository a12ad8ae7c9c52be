//! Layered merging for theme and option trees.
//!
//! Every theme section and the renderer options implement [`Merge`]. The rule
//! is the same at every level:
//!
//! 1. A field unset in the later layer keeps the earlier value.
//! 2. A leaf set in the later layer replaces the earlier value.
//! 3. Two well-formed subtrees merge recursively.
//! 4. A subtree against a malformed scalar (or vice versa) is replaced
//!    wholesale by the later layer. This never fails.
//!
//! Merging only ever reads the later layer, so shared token tables are never
//! touched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::token::Token;

/// Types that can absorb a later layer of overrides.
pub trait Merge {
    /// Applies `other` on top of `self`. Fields set in `other` win.
    fn merge_from(&mut self, other: &Self);

    /// Consuming form of [`merge_from`](Merge::merge_from), for chaining.
    fn merged(mut self, other: &Self) -> Self
    where
        Self: Sized,
    {
        self.merge_from(other);
        self
    }
}

/// A nested theme category as it appears in user input.
///
/// Well-formed input deserializes as `Tree`. A scalar or array where a
/// category belongs deserializes as `Leaf` and simply replaces whatever the
/// earlier layers had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Branch<T> {
    Tree(T),
    Leaf(Token),
}

impl<T> Branch<T> {
    /// Returns the subtree, if well-formed.
    pub fn tree(&self) -> Option<&T> {
        match self {
            Branch::Tree(t) => Some(t),
            Branch::Leaf(_) => None,
        }
    }
}

impl<T> From<T> for Branch<T> {
    fn from(tree: T) -> Self {
        Branch::Tree(tree)
    }
}

impl<T: Merge + Clone> Merge for Branch<T> {
    fn merge_from(&mut self, other: &Self) {
        if let (Branch::Tree(current), Branch::Tree(next)) = (&mut *self, other) {
            current.merge_from(next);
            return;
        }
        *self = other.clone();
    }
}

/// Later `Some` wins.
pub(crate) fn merge_leaf<T: Clone>(target: &mut Option<T>, other: &Option<T>) {
    if let Some(value) = other {
        *target = Some(value.clone());
    }
}

/// Later `Some` merges into an earlier `Some`, or fills an empty slot.
pub(crate) fn merge_node<T: Merge + Clone>(target: &mut Option<T>, other: &Option<T>) {
    match (target.as_mut(), other) {
        (Some(current), Some(next)) => current.merge_from(next),
        (None, Some(next)) => *target = Some(next.clone()),
        (_, None) => {}
    }
}

/// Deep merge for keys that have no dedicated field.
///
/// Objects recurse; everything else, arrays included, is replaced.
pub(crate) fn merge_extra(target: &mut Map<String, Value>, other: &Map<String, Value>) {
    for (key, value) in other {
        match (target.get_mut(key), value) {
            (Some(Value::Object(current)), Value::Object(next)) => merge_extra(current, next),
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Declares a theme category: every field optional, camelCase on the wire,
/// unknown keys collected in `extra`, and a field-wise [`Merge`] impl.
///
/// Fields are tagged `leaf` (replaced) or `node` (merged recursively).
macro_rules! theme_section {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident : $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Keys without a dedicated field, kept verbatim.
            #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
            pub extra: serde_json::Map<String, serde_json::Value>,
        }

        impl $crate::theme::Merge for $name {
            fn merge_from(&mut self, other: &Self) {
                $( $crate::theme::merge::theme_section!(@merge $kind, self.$field, other.$field); )*
                $crate::theme::merge::merge_extra(&mut self.extra, &other.extra);
            }
        }
    };
    (@merge leaf, $target:expr, $other:expr) => {
        $crate::theme::merge::merge_leaf(&mut $target, &$other)
    };
    (@merge node, $target:expr, $other:expr) => {
        $crate::theme::merge::merge_node(&mut $target, &$other)
    };
}

pub(crate) use theme_section;
