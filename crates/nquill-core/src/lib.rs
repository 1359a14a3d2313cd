//! # nquill-core
//!
//! Deterministic nGQL schema modeling and statement construction.
//!
//! This crate is the pure half of nquill: it knows the tag/space DDL grammar
//! and the property type system, and nothing about connections. Declarations
//! go in through [`tag_schema!`] or the statement builders, statement text
//! comes out through [`Statement::render`], and DESCRIBE output maps back
//! into [`FieldDef`] records via [`introspect`].
//!
//! Constraints, enforced by lint and by construction:
//! - No I/O, no async, no network types
//! - Deterministic output: `BTreeMap`/`BTreeSet` only, no randomness
//! - No panics: fallible construction returns [`Error`]
//!
//! ## Example
//!
//! ```rust
//! use nquill_core::{tag_schema, DataType, PropSpec, Statement, TagSchema};
//!
//! tag_schema! {
//!     pub struct Player => "player" {
//!         name: PropSpec::new(DataType::FixedString(30)).not_null(),
//!         age: DataType::Int64,
//!     }
//! }
//!
//! let stmt = Player::create_stmt()?;
//! assert_eq!(
//!     stmt.render(),
//!     "CREATE TAG IF NOT EXISTS player(name fixed_string(30) NOT NULL, age int64 NULL);"
//! );
//! # Ok::<(), nquill_core::Error>(())
//! ```

pub mod data_type;
pub mod error;
pub mod field;
pub mod ident;
pub mod introspect;
pub mod schema;
pub mod stmt;
pub mod value;

pub use data_type::{DataType, GeoShape};
pub use error::Error;
pub use field::{FieldDef, Row};
pub use ident::Identifier;
pub use schema::{PropSpec, TagSchema, plan_alter};
pub use stmt::{
    AlterOp, AlterTag, CreateSpace, CreateTag, DeleteTag, DescribeTag, DropSpace, DropTag,
    ShowSpaces, ShowTags, Statement, TtlDef, UseSpace, VidType,
};
pub use value::{PropertyValue, Vid, escape_str, quote_str};
