//! Integration tests for nquill CLI commands.
//!
//! Uses tempfile for manifest-based operations. The networked subcommands
//! are covered by nquill-client's suites; these tests stay offline.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use nquill::cli::{CliError, cmd_render};
use nquill::manifest::Manifest;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a manifest file with the given content.
fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("schema.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn sample_manifest(dir: &TempDir) -> PathBuf {
    write_manifest(
        dir,
        r#"{
            "space": {"name": "basketball", "vid_type": "FIXED_STRING(20)", "replica_factor": 1},
            "tags": [
                {"name": "player", "fields": [
                    {"name": "name", "type": "fixed_string(30)", "nullable": false},
                    {"name": "age", "type": "int64", "default": 18}
                ]},
                {"name": "team", "fields": [
                    {"name": "name", "type": "string"}
                ]}
            ]
        }"#,
    )
}

// =============================================================================
// RENDER COMMAND TESTS
// =============================================================================

#[test]
fn test_render_emits_one_statement_per_line() {
    let temp = create_temp_dir();
    let manifest = sample_manifest(&temp);

    let out = cmd_render(&manifest).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "CREATE SPACE IF NOT EXISTS basketball (replica_factor = 1, vid_type = FIXED_STRING(20));"
    );
    assert_eq!(lines[1], "USE basketball;");
    assert!(lines[2].starts_with("CREATE TAG IF NOT EXISTS player("));
    assert!(lines[3].starts_with("CREATE TAG IF NOT EXISTS team("));
}

#[test]
fn test_render_without_space_declaration() {
    let temp = create_temp_dir();
    let manifest = write_manifest(&temp, r#"{"tags": [{"name": "t", "fields": []}]}"#);

    let out = cmd_render(&manifest).unwrap();
    assert_eq!(out, "CREATE TAG IF NOT EXISTS t();\n");
}

#[test]
fn test_render_missing_file() {
    let temp = create_temp_dir();
    let missing = temp.path().join("nope.json");

    let result = cmd_render(&missing);
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_render_invalid_json() {
    let temp = create_temp_dir();
    let manifest = write_manifest(&temp, "not valid json");

    let result = cmd_render(&manifest);
    assert!(matches!(result, Err(CliError::Json(_))));
}

#[test]
fn test_render_rejects_bad_identifier() {
    let temp = create_temp_dir();
    let manifest = write_manifest(
        &temp,
        r#"{"tags": [{"name": "bad name", "fields": []}]}"#,
    );

    // Identifier validation happens during deserialization
    assert!(matches!(cmd_render(&manifest), Err(CliError::Json(_))));
}

// =============================================================================
// MANIFEST ROUNDTRIP TESTS
// =============================================================================

#[test]
fn test_manifest_roundtrip_through_serde() {
    let temp = create_temp_dir();
    let manifest = Manifest::load(&sample_manifest(&temp)).unwrap();

    let json = serde_json::to_string(&manifest).unwrap();
    let reparsed = Manifest::from_json(&json).unwrap();

    assert_eq!(reparsed.tags.len(), manifest.tags.len());
    assert_eq!(
        reparsed.tags[0].create_stmt().to_string(),
        manifest.tags[0].create_stmt().to_string()
    );
}
