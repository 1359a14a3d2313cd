//! # Error Types
//!
//! Everything that can go wrong while modeling a schema or building a
//! statement. Execution-side failures (HTTP, JSON, graph error codes) live
//! in `nquill-client`; this enum covers only the deterministic layer.

use thiserror::Error;

/// Errors from schema modeling and statement construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An identifier failed validation.
    #[error("invalid identifier `{name}`: {reason}")]
    InvalidIdentifier { name: String, reason: String },

    /// A data type spelling could not be parsed.
    #[error("unknown data type spelling `{0}`")]
    UnknownDataType(String),

    /// An ALTER TAG with no operations and no TTL definition.
    #[error("ALTER TAG requires at least one operation or a TTL definition")]
    EmptyAlter,

    /// An ADD/CHANGE/DROP operation with nothing in it.
    #[error("ALTER TAG {op} requires at least one property")]
    EmptyAlterOp { op: &'static str },

    /// A DELETE TAG with no tag names.
    #[error("DELETE TAG requires at least one tag name")]
    EmptyTagList,

    /// A result row is missing an expected column.
    #[error("result row is missing column `{0}`")]
    MissingColumn(String),

    /// A DESCRIBE TAG row could not be mapped to a field definition.
    #[error("describe row {row}: {source}")]
    DescribeRow {
        row: usize,
        #[source]
        source: Box<Error>,
    },
}
