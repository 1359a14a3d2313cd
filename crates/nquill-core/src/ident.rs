//! # Identifiers
//!
//! Validated names for tags, spaces and properties.
//!
//! Every name passes through [`Identifier`], which enforces the nGQL
//! identifier grammar at construction time and backtick-quotes reserved
//! words at render time. Statement builders therefore never need to escape
//! caller text themselves.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum identifier length accepted by the graph service, in bytes.
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// Reserved words that must be backtick-quoted when used as names.
///
/// Subset of the nGQL reserved keyword list, matched case-insensitively.
const RESERVED: &[&str] = &[
    "add", "alter", "and", "as", "asc", "bool", "by", "case", "change",
    "create", "date", "datetime", "delete", "desc", "describe", "distinct",
    "double", "drop", "edge", "edges", "exists", "fetch", "fixed_string",
    "float", "from", "go", "group", "if", "in", "index", "insert", "int",
    "int16", "int32", "int64", "int8", "intersect", "is", "limit", "list",
    "lookup", "map", "match", "minus", "not", "null", "of", "on", "or",
    "order", "over", "path", "prop", "rebuild", "recover", "remove",
    "return", "reversely", "set", "show", "step", "stop", "string",
    "submit", "tag", "tags", "time", "timestamp", "to", "union", "unwind",
    "update", "upsert", "use", "vertex", "vertices", "when", "where",
    "with", "xor", "yield",
];

/// A validated nGQL identifier.
///
/// Construction rejects anything outside `[A-Za-z_][A-Za-z0-9_]*` or longer
/// than [`MAX_IDENTIFIER_LEN`] bytes. Reserved words are accepted and
/// rendered inside backticks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::InvalidIdentifier {
                name,
                reason: "must not be empty".into(),
            });
        }
        if name.len() > MAX_IDENTIFIER_LEN {
            return Err(Error::InvalidIdentifier {
                name,
                reason: format!("longer than {MAX_IDENTIFIER_LEN} bytes"),
            });
        }

        let mut chars = name.chars();
        let leading_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !leading_ok {
            return Err(Error::InvalidIdentifier {
                name,
                reason: "must start with a letter or underscore".into(),
            });
        }
        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(Error::InvalidIdentifier {
                name,
                reason: format!("contains `{bad}`"),
            });
        }

        Ok(Self(name))
    }

    /// The raw name, without any quoting.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this name collides with a reserved word.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        RESERVED.iter().any(|kw| self.0.eq_ignore_ascii_case(kw))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reserved() {
            write!(f, "`{}`", self.0)
        } else {
            f.write_str(&self.0)
        }
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(ident: Identifier) -> Self {
        ident.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
