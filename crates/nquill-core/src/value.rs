//! # Literal Values
//!
//! Default values and vertex ids, rendered as nGQL literals.
//!
//! String escaping happens in exactly one place ([`quote_str`]); everything
//! that embeds caller text in a statement goes through it.

use crate::data_type::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A property value, as used in DEFAULT clauses.
///
/// `Expr` carries a server-side expression verbatim (e.g. `now()`); the
/// other variants render as literals. In JSON form the scalar variants map
/// directly onto JSON scalars and `Expr` is spelled `{"expr": "now()"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Expr { expr: String },
    Str(String),
}

impl PropertyValue {
    /// Interpret a textual value (as reported by DESCRIBE TAG's `Default`
    /// column) according to the declared type.
    ///
    /// Returns `None` for the service's empty-default markers. Text that
    /// does not parse as the declared type is kept: shaped like a call it
    /// becomes an expression, otherwise a string literal.
    #[must_use]
    pub fn coerce(raw: &str, ty: &DataType) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "_EMPTY_" || raw == "__EMPTY__" {
            return None;
        }

        let parsed = match ty {
            DataType::Int64 | DataType::Int32 | DataType::Int16 | DataType::Int8 => {
                raw.parse::<i64>().ok().map(Self::Int)
            }
            DataType::Float | DataType::Double => raw.parse::<f64>().ok().map(Self::Float),
            DataType::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(Self::Bool(true)),
                "false" => Some(Self::Bool(false)),
                _ => None,
            },
            DataType::Timestamp => raw.parse::<i64>().ok().map(Self::Int),
            _ => None,
        };

        Some(parsed.unwrap_or_else(|| {
            if looks_like_expr(raw) {
                Self::Expr {
                    expr: raw.to_string(),
                }
            } else {
                Self::Str(raw.to_string())
            }
        }))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            // Debug form keeps the decimal point on round floats
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Expr { expr } => f.write_str(expr),
            Self::Str(s) => f.write_str(&quote_str(s)),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// A vertex id, either numeric or textual depending on the space's vid type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vid {
    Int(i64),
    Str(String),
}

impl fmt::Display for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(&quote_str(s)),
        }
    }
}

impl From<i64> for Vid {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Vid {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Vid {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Escape a string for use inside a double-quoted nGQL literal.
#[must_use]
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a double-quoted, escaped nGQL string literal.
#[must_use]
pub fn quote_str(s: &str) -> String {
    format!("\"{}\"", escape_str(s))
}

fn looks_like_expr(raw: &str) -> bool {
    raw.contains('(') && raw.ends_with(')')
}

// =============================================================================
// TESTS
// =============================================================================
