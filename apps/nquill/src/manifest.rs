//! # Schema Manifests
//!
//! The JSON file format the CLI consumes: an optional space declaration and
//! any number of tag declarations. Field records reuse the core's serde
//! shapes, so a manifest field reads `{"name": "age", "type": "int64"}`.

use crate::cli::CliError;
use nquill_core::{CreateSpace, CreateTag, FieldDef, Identifier, TtlDef, VidType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete schema manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceManifest>,
    #[serde(default)]
    pub tags: Vec<TagManifest>,
}

/// Declaration of the space the tags live in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceManifest {
    pub name: Identifier,
    pub vid_type: VidType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Declaration of one tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagManifest {
    pub name: Identifier,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<TtlDef>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl SpaceManifest {
    pub fn create_stmt(&self) -> CreateSpace {
        let mut stmt = CreateSpace::new(self.name.clone(), self.vid_type);
        if let Some(n) = self.partition_num {
            stmt = stmt.partition_num(n);
        }
        if let Some(n) = self.replica_factor {
            stmt = stmt.replica_factor(n);
        }
        if let Some(comment) = &self.comment {
            stmt = stmt.comment(comment.clone());
        }
        stmt
    }
}

impl TagManifest {
    pub fn create_stmt(&self) -> CreateTag {
        let mut stmt = CreateTag::new(self.name.clone(), self.fields.clone());
        if let Some(ttl) = &self.ttl {
            stmt = stmt.ttl(ttl.clone());
        }
        stmt
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nquill_core::Statement;

    const SAMPLE: &str = r#"{
        "space": {
            "name": "basketball",
            "vid_type": "FIXED_STRING(20)",
            "partition_num": 10,
            "replica_factor": 1
        },
        "tags": [
            {
                "name": "player",
                "fields": [
                    {"name": "name", "type": "fixed_string(30)", "nullable": false},
                    {"name": "age", "type": "int64", "default": 18}
                ]
            },
            {
                "name": "session",
                "fields": [
                    {"name": "expires", "type": "timestamp"}
                ],
                "ttl": {"duration": 3600, "col": "expires"}
            }
        ]
    }"#;

    #[test]
    fn parses_full_manifest() {
        let manifest = Manifest::from_json(SAMPLE).expect("valid manifest");
        assert_eq!(manifest.tags.len(), 2);

        let space = manifest.space.as_ref().expect("space declared");
        assert_eq!(space.name.as_str(), "basketball");
        assert_eq!(space.vid_type, VidType::FixedString(20));
    }

    #[test]
    fn space_statement_from_manifest() {
        let manifest = Manifest::from_json(SAMPLE).expect("valid manifest");
        let space = manifest.space.expect("space declared");
        assert_eq!(
            space.create_stmt().render(),
            "CREATE SPACE IF NOT EXISTS basketball (partition_num = 10, \
             replica_factor = 1, vid_type = FIXED_STRING(20));"
        );
    }

    #[test]
    fn tag_statements_from_manifest() {
        let manifest = Manifest::from_json(SAMPLE).expect("valid manifest");
        assert_eq!(
            manifest.tags[0].create_stmt().render(),
            "CREATE TAG IF NOT EXISTS player(name fixed_string(30) NOT NULL, \
             age int64 NULL DEFAULT 18);"
        );
        assert_eq!(
            manifest.tags[1].create_stmt().render(),
            "CREATE TAG IF NOT EXISTS session(expires timestamp NULL) \
             TTL_DURATION = 3600, TTL_COL = \"expires\";"
        );
    }

    #[test]
    fn rejects_invalid_identifiers() {
        let bad = r#"{"tags": [{"name": "not ok", "fields": []}]}"#;
        assert!(Manifest::from_json(bad).is_err());
    }

    #[test]
    fn rejects_unknown_types() {
        let bad = r#"{"tags": [{"name": "t", "fields": [{"name": "x", "type": "varchar"}]}]}"#;
        assert!(Manifest::from_json(bad).is_err());
    }

    #[test]
    fn tags_alone_are_enough() {
        let manifest =
            Manifest::from_json(r#"{"tags": [{"name": "t", "fields": []}]}"#).expect("valid");
        assert!(manifest.space.is_none());
        assert_eq!(manifest.tags[0].create_stmt().render(), "CREATE TAG IF NOT EXISTS t();");
    }
}
