//! # Property Data Types
//!
//! The nGQL property type system, as one enum.
//!
//! [`DataType`] renders the exact spelling the graph service expects in DDL
//! (`Display`) and parses the spellings DESCRIBE TAG reports back
//! (`FromStr`), so a schema can round-trip through introspection.

use crate::error::Error;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Shape parameter for the geography type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoShape {
    Point,
    Linestring,
    Polygon,
}

impl GeoShape {
    fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Linestring => "linestring",
            Self::Polygon => "polygon",
        }
    }
}

/// An nGQL property data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int64,
    Int32,
    Int16,
    Int8,
    Float,
    Double,
    Bool,
    /// Variable-length string (`string`).
    Str,
    /// Fixed-length string with its byte length (`fixed_string(N)`).
    FixedString(u16),
    Date,
    Time,
    Datetime,
    Timestamp,
    Duration,
    /// Geography, optionally constrained to a shape (`geography(point)`).
    Geography(Option<GeoShape>),
}

impl DataType {
    /// Whether values of this type are textual (quoted in literals).
    #[must_use]
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Str | Self::FixedString(_))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64 => f.write_str("int64"),
            Self::Int32 => f.write_str("int32"),
            Self::Int16 => f.write_str("int16"),
            Self::Int8 => f.write_str("int8"),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Bool => f.write_str("bool"),
            Self::Str => f.write_str("string"),
            Self::FixedString(len) => write!(f, "fixed_string({len})"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
            Self::Datetime => f.write_str("datetime"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::Duration => f.write_str("duration"),
            Self::Geography(None) => f.write_str("geography"),
            Self::Geography(Some(shape)) => write!(f, "geography({})", shape.as_str()),
        }
    }
}

impl FromStr for DataType {
    type Err = Error;

    /// Parse a type spelling as reported by DESCRIBE TAG.
    ///
    /// Matching is case-insensitive; `int` is accepted as an alias for
    /// `int64`, which is how the service reports it in some versions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spelling = s.trim().to_ascii_lowercase();

        if let Some(inner) = param_of(&spelling, "fixed_string") {
            let len = inner
                .parse::<u16>()
                .map_err(|_| Error::UnknownDataType(s.trim().to_string()))?;
            return Ok(Self::FixedString(len));
        }
        if let Some(inner) = param_of(&spelling, "geography") {
            let shape = match inner {
                "point" => GeoShape::Point,
                "linestring" => GeoShape::Linestring,
                "polygon" => GeoShape::Polygon,
                _ => return Err(Error::UnknownDataType(s.trim().to_string())),
            };
            return Ok(Self::Geography(Some(shape)));
        }

        match spelling.as_str() {
            "int64" | "int" => Ok(Self::Int64),
            "int32" => Ok(Self::Int32),
            "int16" => Ok(Self::Int16),
            "int8" => Ok(Self::Int8),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "bool" => Ok(Self::Bool),
            "string" => Ok(Self::Str),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "datetime" => Ok(Self::Datetime),
            "timestamp" => Ok(Self::Timestamp),
            "duration" => Ok(Self::Duration),
            "geography" => Ok(Self::Geography(None)),
            _ => Err(Error::UnknownDataType(s.trim().to_string())),
        }
    }
}

/// Extract the parenthesized parameter of `name(param)` spellings.
fn param_of<'a>(spelling: &'a str, name: &str) -> Option<&'a str> {
    let rest = spelling.strip_prefix(name)?;
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.trim())
}

// Serialized as the nGQL spelling so manifests and fixtures read naturally.

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        spelling.parse().map_err(D::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_spellings() {
        assert_eq!(DataType::Int64.to_string(), "int64");
        assert_eq!(DataType::Str.to_string(), "string");
        assert_eq!(DataType::Bool.to_string(), "bool");
        assert_eq!(DataType::Duration.to_string(), "duration");
    }

    #[test]
    fn renders_parameterized_spellings() {
        assert_eq!(DataType::FixedString(20).to_string(), "fixed_string(20)");
        assert_eq!(DataType::Geography(None).to_string(), "geography");
        assert_eq!(
            DataType::Geography(Some(GeoShape::Point)).to_string(),
            "geography(point)"
        );
    }

    #[test]
    fn parses_describe_spellings() {
        assert_eq!("int64".parse::<DataType>(), Ok(DataType::Int64));
        assert_eq!("string".parse::<DataType>(), Ok(DataType::Str));
        assert_eq!(
            "fixed_string(10)".parse::<DataType>(),
            Ok(DataType::FixedString(10))
        );
        assert_eq!(
            "geography(polygon)".parse::<DataType>(),
            Ok(DataType::Geography(Some(GeoShape::Polygon)))
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("INT64".parse::<DataType>(), Ok(DataType::Int64));
        assert_eq!(
            "FIXED_STRING(8)".parse::<DataType>(),
            Ok(DataType::FixedString(8))
        );
    }

    #[test]
    fn int_aliases_to_int64() {
        assert_eq!("int".parse::<DataType>(), Ok(DataType::Int64));
    }

    #[test]
    fn rejects_unknown_spellings() {
        assert_eq!(
            "varchar".parse::<DataType>(),
            Err(Error::UnknownDataType("varchar".to_string()))
        );
        assert!("fixed_string(lots)".parse::<DataType>().is_err());
        assert!("geography(cube)".parse::<DataType>().is_err());
    }

    #[test]
    fn serde_uses_spelling() {
        let json = serde_json::to_string(&DataType::FixedString(20)).expect("serialize");
        assert_eq!(json, "\"fixed_string(20)\"");
        let back: DataType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, DataType::FixedString(20));
    }

    // =========================================================================
    // PROPERTY TESTS
    // =========================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn data_type_strategy() -> impl Strategy<Value = DataType> {
            prop_oneof![
                Just(DataType::Int64),
                Just(DataType::Int32),
                Just(DataType::Int16),
                Just(DataType::Int8),
                Just(DataType::Float),
                Just(DataType::Double),
                Just(DataType::Bool),
                Just(DataType::Str),
                (1u16..4096).prop_map(DataType::FixedString),
                Just(DataType::Date),
                Just(DataType::Time),
                Just(DataType::Datetime),
                Just(DataType::Timestamp),
                Just(DataType::Duration),
                Just(DataType::Geography(None)),
                Just(DataType::Geography(Some(GeoShape::Point))),
                Just(DataType::Geography(Some(GeoShape::Linestring))),
                Just(DataType::Geography(Some(GeoShape::Polygon))),
            ]
        }

        proptest! {
            #[test]
            fn display_and_parse_agree(ty in data_type_strategy()) {
                let spelling = ty.to_string();
                prop_assert_eq!(spelling.parse::<DataType>(), Ok(ty));
            }
        }
    }
}
