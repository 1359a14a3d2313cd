//! # Statement Builders
//!
//! Typed builders for the DDL statements this layer owns. Each builder
//! renders exactly one semicolon-terminated, single-line statement.

use std::fmt;

pub mod space;
pub mod tag;

pub use space::{CreateSpace, DropSpace, ShowSpaces, UseSpace, VidType};
pub use tag::{
    AlterOp, AlterTag, CreateTag, DeleteTag, DescribeTag, DropTag, ShowTags, TtlDef,
};

/// A renderable nGQL statement.
pub trait Statement: fmt::Display {
    /// The statement text, semicolon included.
    fn render(&self) -> String {
        self.to_string()
    }
}
