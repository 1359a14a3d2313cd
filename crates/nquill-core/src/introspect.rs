//! # Introspection
//!
//! Pure mapping from SHOW/DESCRIBE result rows to typed schema records.
//! Fetching the rows is the client's job; this module never does I/O.

use crate::error::Error;
use crate::field::{FieldDef, Row};

/// Extract tag (or space) names from SHOW TAGS / SHOW SPACES rows.
pub fn names(rows: &[Row]) -> Result<Vec<String>, Error> {
    rows.iter()
        .map(|row| {
            row.get("Name")
                .cloned()
                .ok_or_else(|| Error::MissingColumn("Name".to_string()))
        })
        .collect()
}

/// Map DESCRIBE TAG rows to field definitions.
///
/// A row that cannot be mapped fails the whole call, with the row index
/// attached for context.
pub fn fields_from_describe(rows: &[Row]) -> Result<Vec<FieldDef>, Error> {
    rows.iter()
        .enumerate()
        .map(|(row, raw)| {
            FieldDef::from_describe_row(raw).map_err(|source| Error::DescribeRow {
                row,
                source: Box::new(source),
            })
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
