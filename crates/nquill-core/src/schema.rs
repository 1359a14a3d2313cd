//! # Schema Declarations
//!
//! The declaration side of the layer: [`PropSpec`] pairs a data type with
//! its field metadata, [`TagSchema`] turns a set of declarations into
//! statements, and [`plan_alter`] diffs a declaration against what DESCRIBE
//! TAG reported so callers can converge a live tag onto its declared shape.

use crate::error::Error;
use crate::field::FieldDef;
use crate::ident::Identifier;
use crate::stmt::tag::{AlterTag, CreateTag, DescribeTag, DropTag, TtlDef};
use crate::value::PropertyValue;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// PROP SPEC
// =============================================================================

/// Declaration-side metadata for one property.
///
/// This is [`FieldDef`] minus the name: the name comes from the declaration
/// site (the `tag_schema!` macro uses the Rust field name).
#[derive(Debug, Clone, PartialEq)]
pub struct PropSpec {
    data_type: crate::data_type::DataType,
    nullable: bool,
    default: Option<PropertyValue>,
    comment: Option<String>,
}

impl PropSpec {
    /// A nullable property with no default and no comment.
    #[must_use]
    pub fn new(data_type: crate::data_type::DataType) -> Self {
        Self {
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
    pub fn default_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach a name, producing the full field definition.
    #[must_use]
    pub fn into_field(self, name: Identifier) -> FieldDef {
        FieldDef {
            name,
            data_type: self.data_type,
            nullable: self.nullable,
            default: self.default,
            comment: self.comment,
        }
    }
}

impl From<crate::data_type::DataType> for PropSpec {
    fn from(data_type: crate::data_type::DataType) -> Self {
        Self::new(data_type)
    }
}

// =============================================================================
// TAG SCHEMA
// =============================================================================

/// A typed tag declaration.
///
/// Usually implemented through the [`tag_schema!`](crate::tag_schema) macro;
/// hand implementations only need `tag_name` and `props`.
pub trait TagSchema {
    /// The tag name in the graph.
    fn tag_name() -> &'static str;

    /// Property declarations, in declaration order.
    fn props() -> Vec<(&'static str, PropSpec)>;

    /// Optional TTL clause for the tag.
    fn ttl() -> Option<TtlDef> {
        None
    }

    /// The declared properties as full field definitions.
    fn fields() -> Result<Vec<FieldDef>, Error> {
        Self::props()
            .into_iter()
            .map(|(name, spec)| Ok(spec.into_field(Identifier::new(name)?)))
            .collect()
    }

    fn create_stmt() -> Result<CreateTag, Error> {
        let mut stmt = CreateTag::new(Identifier::new(Self::tag_name())?, Self::fields()?);
        if let Some(ttl) = Self::ttl() {
            stmt = stmt.ttl(ttl);
        }
        Ok(stmt)
    }

    fn drop_stmt() -> Result<DropTag, Error> {
        Ok(DropTag::new(Identifier::new(Self::tag_name())?))
    }

    fn describe_stmt() -> Result<DescribeTag, Error> {
        Ok(DescribeTag::new(Identifier::new(Self::tag_name())?))
    }
}

/// Declare a tag schema as a unit struct implementing [`TagSchema`].
///
/// A property maps to its spec: a bare [`DataType`](crate::DataType) for a
/// plain nullable property, or a [`PropSpec`] chain for anything richer.
///
/// # Example
///
/// ```rust
/// use nquill_core::{tag_schema, DataType, PropSpec};
///
/// tag_schema! {
///     pub struct Player => "player" {
///         name: PropSpec::new(DataType::FixedString(30)).not_null(),
///         age: DataType::Int64,
///     }
/// }
/// ```
#[macro_export]
macro_rules! tag_schema {
    (
        $vis:vis struct $ty:ident => $tag:literal {
            $($prop:ident : $spec:expr),* $(,)?
        }
    ) => {
        $vis struct $ty;

        impl $crate::schema::TagSchema for $ty {
            fn tag_name() -> &'static str {
                $tag
            }

            fn props() -> ::std::vec::Vec<(&'static str, $crate::schema::PropSpec)> {
                ::std::vec![
                    $( (stringify!($prop), $crate::schema::PropSpec::from($spec)) ),*
                ]
            }
        }
    };
}

// =============================================================================
// ALTER PLANNING
// =============================================================================

/// Diff a declared schema against the introspected one.
///
/// Returns the ALTER TAG statement that converges the live tag onto the
/// declaration (ADD missing properties, CHANGE drifted ones, DROP the rest),
/// or `None` when the two already agree. Operations appear in ADD, CHANGE,
/// DROP order; properties keep declaration order within each operation.
#[must_use]
pub fn plan_alter(tag: &Identifier, declared: &[FieldDef], observed: &[FieldDef]) -> Option<AlterTag> {
    let observed_by_name: BTreeMap<&str, &FieldDef> = observed
        .iter()
        .map(|field| (field.name.as_str(), field))
        .collect();
    let declared_names: BTreeSet<&str> =
        declared.iter().map(|field| field.name.as_str()).collect();

    let mut adds = Vec::new();
    let mut changes = Vec::new();
    for field in declared {
        match observed_by_name.get(field.name.as_str()) {
            None => adds.push(field.clone()),
            Some(current) if *current != field => changes.push(field.clone()),
            Some(_) => {}
        }
    }

    let drops: Vec<Identifier> = observed
        .iter()
        .filter(|field| !declared_names.contains(field.name.as_str()))
        .map(|field| field.name.clone())
        .collect();

    if adds.is_empty() && changes.is_empty() && drops.is_empty() {
        return None;
    }

    let mut stmt = AlterTag::new(tag.clone());
    if !adds.is_empty() {
        stmt = stmt.add(adds);
    }
    if !changes.is_empty() {
        stmt = stmt.change(changes);
    }
    if !drops.is_empty() {
        stmt = stmt.drop_props(drops);
    }
    Some(stmt)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;
    use crate::stmt::Statement;

    tag_schema! {
        pub struct Player => "player" {
            name: PropSpec::new(DataType::FixedString(30)).not_null(),
            age: PropSpec::new(DataType::Int64).default_value(18i64),
            team: DataType::Str,
        }
    }

    fn ident(name: &str) -> Identifier {
        Identifier::new(name).expect("valid identifier")
    }

    #[test]
    fn macro_declares_props_in_order() {
        let fields = Player::fields().expect("valid schema");
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "team"]);
        assert!(!fields[0].nullable);
        assert_eq!(fields[1].default, Some(PropertyValue::Int(18)));
    }

    #[test]
    fn macro_create_stmt() {
        let stmt = Player::create_stmt().expect("valid schema");
        assert_eq!(
            stmt.render(),
            "CREATE TAG IF NOT EXISTS player(name fixed_string(30) NOT NULL, \
             age int64 NULL DEFAULT 18, team string NULL);"
        );
    }

    #[test]
    fn macro_drop_and_describe() {
        assert_eq!(
            Player::drop_stmt().expect("valid").render(),
            "DROP TAG IF EXISTS player;"
        );
        assert_eq!(
            Player::describe_stmt().expect("valid").render(),
            "DESCRIBE TAG player;"
        );
    }

    #[test]
    fn plan_alter_no_drift() {
        let declared = Player::fields().expect("valid schema");
        let observed = declared.clone();
        assert_eq!(plan_alter(&ident("player"), &declared, &observed), None);
    }

    #[test]
    fn plan_alter_adds_missing() {
        let declared = Player::fields().expect("valid schema");
        let observed = declared[..2].to_vec();

        let stmt = plan_alter(&ident("player"), &declared, &observed).expect("drift");
        assert_eq!(stmt.render(), "ALTER TAG player ADD (team string NULL);");
    }

    #[test]
    fn plan_alter_changes_drifted() {
        let declared = Player::fields().expect("valid schema");
        let mut observed = declared.clone();
        observed[0].data_type = DataType::FixedString(10);

        let stmt = plan_alter(&ident("player"), &declared, &observed).expect("drift");
        assert_eq!(
            stmt.render(),
            "ALTER TAG player CHANGE (name fixed_string(30) NOT NULL);"
        );
    }

    #[test]
    fn plan_alter_drops_undeclared() {
        let declared = Player::fields().expect("valid schema");
        let mut observed = declared.clone();
        observed.push(FieldDef::new(ident("legacy"), DataType::Bool));

        let stmt = plan_alter(&ident("player"), &declared, &observed).expect("drift");
        assert_eq!(stmt.render(), "ALTER TAG player DROP (legacy);");
    }

    #[test]
    fn plan_alter_combines_operations() {
        let declared = vec![
            FieldDef::new(ident("kept"), DataType::Int64),
            FieldDef::new(ident("added"), DataType::Str),
            FieldDef::new(ident("widened"), DataType::FixedString(64)),
        ];
        let observed = vec![
            FieldDef::new(ident("kept"), DataType::Int64),
            FieldDef::new(ident("widened"), DataType::FixedString(16)),
            FieldDef::new(ident("legacy"), DataType::Bool),
        ];

        let stmt = plan_alter(&ident("thing"), &declared, &observed).expect("drift");
        stmt.validate().expect("planned alter is always valid");
        assert_eq!(
            stmt.render(),
            "ALTER TAG thing ADD (added string NULL), \
             CHANGE (widened fixed_string(64) NULL), DROP (legacy);"
        );
    }
}
