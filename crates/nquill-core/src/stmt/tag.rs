//! # Tag Statements
//!
//! Builders for the tag DDL surface: CREATE, DROP, ALTER, DESCRIBE, SHOW
//! and DELETE TAG.
//!
//! Rendering details follow the service grammar exactly: ADD/CHANGE lists
//! are comma-space separated, DROP and DELETE name lists are comma-joined
//! without spaces, TTL columns are double-quoted.

use crate::error::Error;
use crate::field::FieldDef;
use crate::ident::Identifier;
use crate::stmt::Statement;
use crate::value::Vid;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TTL
// =============================================================================

/// A TTL clause: `TTL_DURATION = <seconds>[, TTL_COL = "<col>"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlDef {
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<Identifier>,
}

impl TtlDef {
    #[must_use]
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            col: None,
        }
    }

    #[must_use]
    pub fn with_col(mut self, col: Identifier) -> Self {
        self.col = Some(col);
        self
    }
}

impl fmt::Display for TtlDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TTL_DURATION = {}", self.duration)?;
        if let Some(col) = &self.col {
            write!(f, ", TTL_COL = \"{}\"", col.as_str())?;
        }
        Ok(())
    }
}

// =============================================================================
// CREATE TAG
// =============================================================================

/// `CREATE TAG [IF NOT EXISTS] name(field, …) [TTL…];`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTag {
    name: Identifier,
    fields: Vec<FieldDef>,
    if_not_exists: bool,
    ttl: Option<TtlDef>,
}

impl CreateTag {
    /// `IF NOT EXISTS` is on by default.
    #[must_use]
    pub fn new(name: Identifier, fields: Vec<FieldDef>) -> Self {
        Self {
            name,
            fields,
            if_not_exists: true,
            ttl: None,
        }
    }

    #[must_use]
    pub fn if_not_exists(mut self, yes: bool) -> Self {
        self.if_not_exists = yes;
        self
    }

    #[must_use]
    pub fn ttl(mut self, ttl: TtlDef) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

impl fmt::Display for CreateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE TAG{} {}({})",
            if self.if_not_exists { " IF NOT EXISTS" } else { "" },
            self.name,
            join_fields(&self.fields),
        )?;
        if let Some(ttl) = &self.ttl {
            write!(f, " {ttl}")?;
        }
        f.write_str(";")
    }
}

impl Statement for CreateTag {}

// =============================================================================
// DROP TAG
// =============================================================================

/// `DROP TAG [IF EXISTS] name;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTag {
    name: Identifier,
    if_exists: bool,
}

impl DropTag {
    /// `IF EXISTS` is on by default.
    #[must_use]
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            if_exists: true,
        }
    }

    #[must_use]
    pub fn if_exists(mut self, yes: bool) -> Self {
        self.if_exists = yes;
        self
    }
}

impl fmt::Display for DropTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DROP TAG{} {};",
            if self.if_exists { " IF EXISTS" } else { "" },
            self.name,
        )
    }
}

impl Statement for DropTag {}

// =============================================================================
// ALTER TAG
// =============================================================================

/// One ALTER TAG operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterOp {
    Add(Vec<FieldDef>),
    Change(Vec<FieldDef>),
    Drop(Vec<Identifier>),
}

impl AlterOp {
    fn validate(&self) -> Result<(), Error> {
        let (op, empty) = match self {
            Self::Add(fields) => ("ADD", fields.is_empty()),
            Self::Change(fields) => ("CHANGE", fields.is_empty()),
            Self::Drop(names) => ("DROP", names.is_empty()),
        };
        if empty {
            return Err(Error::EmptyAlterOp { op });
        }
        Ok(())
    }
}

impl fmt::Display for AlterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(fields) => write!(f, "ADD ({})", join_fields(fields)),
            Self::Change(fields) => write!(f, "CHANGE ({})", join_fields(fields)),
            // Name lists are comma-joined without spaces in the grammar
            Self::Drop(names) => {
                let joined = names
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "DROP ({joined})")
            }
        }
    }
}

/// `ALTER TAG name op[, op…] [TTL…];`
///
/// An alter must carry at least one operation or a TTL definition;
/// [`AlterTag::validate`] enforces this before the statement is executed.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTag {
    name: Identifier,
    ops: Vec<AlterOp>,
    ttl: Option<TtlDef>,
}

impl AlterTag {
    #[must_use]
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            ops: Vec::new(),
            ttl: None,
        }
    }

    #[must_use]
    pub fn add(self, fields: Vec<FieldDef>) -> Self {
        self.op(AlterOp::Add(fields))
    }

    #[must_use]
    pub fn change(self, fields: Vec<FieldDef>) -> Self {
        self.op(AlterOp::Change(fields))
    }

    #[must_use]
    pub fn drop_props(self, names: Vec<Identifier>) -> Self {
        self.op(AlterOp::Drop(names))
    }

    #[must_use]
    pub fn op(mut self, op: AlterOp) -> Self {
        self.ops.push(op);
        self
    }

    #[must_use]
    pub fn ttl(mut self, ttl: TtlDef) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[must_use]
    pub fn ops(&self) -> &[AlterOp] {
        &self.ops
    }

    /// Reject alters that would render an empty or malformed statement.
    pub fn validate(&self) -> Result<(), Error> {
        if self.ops.is_empty() && self.ttl.is_none() {
            return Err(Error::EmptyAlter);
        }
        for op in &self.ops {
            op.validate()?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TAG {}", self.name)?;
        if !self.ops.is_empty() {
            let joined = self
                .ops
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " {joined}")?;
        }
        if let Some(ttl) = &self.ttl {
            write!(f, " {ttl}")?;
        }
        f.write_str(";")
    }
}

impl Statement for AlterTag {}

// =============================================================================
// DESCRIBE / SHOW
// =============================================================================

/// `DESCRIBE TAG name;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeTag {
    name: Identifier,
}

impl DescribeTag {
    #[must_use]
    pub fn new(name: Identifier) -> Self {
        Self { name }
    }
}

impl fmt::Display for DescribeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DESCRIBE TAG {};", self.name)
    }
}

impl Statement for DescribeTag {}

/// `SHOW TAGS;`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowTags;

impl fmt::Display for ShowTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW TAGS;")
    }
}

impl Statement for ShowTags {}

// =============================================================================
// DELETE TAG
// =============================================================================

/// `DELETE TAG a,b FROM <vid>;` — detach the named tags from one vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTag {
    tags: Vec<Identifier>,
    vid: Vid,
}

impl DeleteTag {
    pub fn new(tags: Vec<Identifier>, vid: impl Into<Vid>) -> Result<Self, Error> {
        if tags.is_empty() {
            return Err(Error::EmptyTagList);
        }
        Ok(Self {
            tags,
            vid: vid.into(),
        })
    }
}

impl fmt::Display for DeleteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .tags
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "DELETE TAG {} FROM {};", joined, self.vid)
    }
}

impl Statement for DeleteTag {}

fn join_fields(fields: &[FieldDef]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// TESTS
// =============================================================================
