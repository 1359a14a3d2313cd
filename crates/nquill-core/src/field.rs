//! # Field Definitions
//!
//! The field-metadata record shared by both directions of the schema layer:
//! declarations render into DDL fragments, DESCRIBE TAG rows parse back into
//! the same record, so drift detection compares like with like.

use crate::data_type::DataType;
use crate::error::Error;
use crate::ident::Identifier;
use crate::value::{PropertyValue, quote_str};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One row of SHOW/DESCRIBE output, flattened to text by the client.
pub type Row = BTreeMap<String, String>;

/// A tag property definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: Identifier,
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Properties are nullable unless declared otherwise, as in the service.
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn default_true() -> bool {
    true
}

impl FieldDef {
    /// A nullable field with no default and no comment.
    #[must_use]
    pub fn new(name: Identifier, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
            default: None,
            comment: None,
        }
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<PropertyValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Build a field definition from one DESCRIBE TAG row.
    ///
    /// Expects the `Field`, `Type`, `Null`, `Default` and `Comment` columns;
    /// `Default` and `Comment` may be absent or empty.
    pub fn from_describe_row(row: &Row) -> Result<Self, Error> {
        let name = row
            .get("Field")
            .ok_or_else(|| Error::MissingColumn("Field".to_string()))?;
        let spelling = row
            .get("Type")
            .ok_or_else(|| Error::MissingColumn("Type".to_string()))?;
        let data_type: DataType = spelling.parse()?;

        let nullable = row.get("Null").is_some_and(|v| v.eq_ignore_ascii_case("YES"));
        let default = row
            .get("Default")
            .and_then(|raw| PropertyValue::coerce(raw, &data_type));
        let comment = row
            .get("Comment")
            .map(|c| c.trim())
            .filter(|c| !c.is_empty() && *c != "_EMPTY_" && *c != "__EMPTY__")
            .map(ToString::to_string);

        Ok(Self {
            name: Identifier::new(name.clone())?,
            data_type,
            nullable,
            default,
            comment,
        })
    }
}

impl fmt::Display for FieldDef {
    /// The DDL fragment: `name type NULL|NOT NULL [DEFAULT lit] [COMMENT "…"]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        if self.nullable {
            f.write_str(" NULL")?;
        } else {
            f.write_str(" NOT NULL")?;
        }
        if let Some(default) = &self.default {
            write!(f, " DEFAULT {default}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", quote_str(comment))?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
