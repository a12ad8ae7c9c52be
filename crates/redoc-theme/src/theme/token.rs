//! Atomic leaf values of a theme tree.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A terminal value in a theme: a color, a CSS variable reference, a font
/// stack, a size, or a number.
///
/// Tokens are opaque to merging. A later token always replaces an earlier one
/// wholesale, which also covers arrays and objects a user puts where a leaf is
/// expected.
///
/// # Example
///
/// ```rust
/// use redoc_theme::Token;
///
/// let color: Token = "var(--ifm-color-primary)".into();
/// assert_eq!(color.as_str(), Some("var(--ifm-color-primary)"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// Colors, CSS variables, font families, sizes.
    Text(String),
    /// Numeric settings such as `tonalOffset` or `spacing.unit`.
    Number(Number),
    /// Anything else, kept verbatim.
    Other(Value),
}

impl Token {
    /// Returns the string form, if this is a text token.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for text tokens that contain only whitespace.
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Token::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Text(s)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Number(n.into())
    }
}

impl From<u32> for Token {
    fn from(n: u32) -> Self {
        Token::Number(n.into())
    }
}

/// Non-finite floats have no JSON form and become `Token::Other(Value::Null)`,
/// which reaches Redoc as `null`.
impl From<f64> for Token {
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(num) => Token::Number(num),
            None => Token::Other(Value::Null),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Text(s) => write!(f, "{}", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::Other(v) => write!(f, "{}", v),
        }
    }
}
