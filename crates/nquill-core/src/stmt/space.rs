//! # Space Statements
//!
//! The space lifecycle surface: CREATE, DROP, SHOW and USE. Enough for
//! schema management and for the scratch-space test fixture; data
//! partitioning concerns beyond `partition_num`/`replica_factor` stay with
//! the service.

use crate::error::Error;
use crate::ident::Identifier;
use crate::stmt::Statement;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Vertex id type of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VidType {
    /// `FIXED_STRING(N)` vids.
    FixedString(u16),
    /// `INT64` vids.
    Int64,
}

impl fmt::Display for VidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedString(len) => write!(f, "FIXED_STRING({len})"),
            Self::Int64 => f.write_str("INT64"),
        }
    }
}

impl FromStr for VidType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spelling = s.trim().to_ascii_uppercase();
        if spelling == "INT64" {
            return Ok(Self::Int64);
        }
        let inner = spelling
            .strip_prefix("FIXED_STRING(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::UnknownDataType(s.trim().to_string()))?;
        let len = inner
            .trim()
            .parse::<u16>()
            .map_err(|_| Error::UnknownDataType(s.trim().to_string()))?;
        Ok(Self::FixedString(len))
    }
}

impl Serialize for VidType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VidType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        spelling.parse().map_err(D::Error::custom)
    }
}

/// `CREATE SPACE [IF NOT EXISTS] name (options) [COMMENT = "…"];`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpace {
    name: Identifier,
    vid_type: VidType,
    partition_num: Option<u32>,
    replica_factor: Option<u32>,
    comment: Option<String>,
    if_not_exists: bool,
}

impl CreateSpace {
    #[must_use]
    pub fn new(name: Identifier, vid_type: VidType) -> Self {
        Self {
            name,
            vid_type,
            partition_num: None,
            replica_factor: None,
            comment: None,
            if_not_exists: true,
        }
    }

    #[must_use]
    pub fn partition_num(mut self, n: u32) -> Self {
        self.partition_num = Some(n);
        self
    }

    #[must_use]
    pub fn replica_factor(mut self, n: u32) -> Self {
        self.replica_factor = Some(n);
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn if_not_exists(mut self, yes: bool) -> Self {
        self.if_not_exists = yes;
        self
    }

    #[must_use]
    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

impl fmt::Display for CreateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options = Vec::new();
        if let Some(n) = self.partition_num {
            options.push(format!("partition_num = {n}"));
        }
        if let Some(n) = self.replica_factor {
            options.push(format!("replica_factor = {n}"));
        }
        options.push(format!("vid_type = {}", self.vid_type));

        write!(
            f,
            "CREATE SPACE{} {} ({})",
            if self.if_not_exists { " IF NOT EXISTS" } else { "" },
            self.name,
            options.join(", "),
        )?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT = {}", crate::value::quote_str(comment))?;
        }
        f.write_str(";")
    }
}

impl Statement for CreateSpace {}

/// `DROP SPACE [IF EXISTS] name;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSpace {
    name: Identifier,
    if_exists: bool,
}

impl DropSpace {
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

impl fmt::Display for DropSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DROP SPACE{} {};",
            if self.if_exists { " IF EXISTS" } else { "" },
            self.name,
        )
    }
}

impl Statement for DropSpace {}

/// `SHOW SPACES;`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowSpaces;

impl fmt::Display for ShowSpaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW SPACES;")
    }
}

impl Statement for ShowSpaces {}

/// `USE name;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseSpace {
    name: Identifier,
}

impl UseSpace {
    #[must_use]
    pub fn new(name: Identifier) -> Self {
        Self { name }
    }
}

impl fmt::Display for UseSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USE {};", self.name)
    }
}

impl Statement for UseSpace {}

// =============================================================================
// TESTS
// =============================================================================
