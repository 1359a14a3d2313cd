//! # Result Sets
//!
//! The gateway returns result tables as JSON objects keyed by header name.
//! [`ResultSet`] flattens every cell to text once, up front, so the rest of
//! the stack (and `nquill-core::introspect`) works on plain string rows.

use nquill_core::Row;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Wire shape of the gateway's `data` payload for `/api/db/exec`.
#[derive(Debug, Deserialize)]
pub(crate) struct ExecData {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub tables: Vec<BTreeMap<String, serde_json::Value>>,
    #[serde(rename = "timeCost", default)]
    pub time_cost: u64,
}

/// The parsed outcome of one executed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    /// Column names, in result order.
    pub headers: Vec<String>,
    /// Rows as column-name -> textual value.
    pub tables: Vec<Row>,
    /// Server-side execution time in microseconds.
    pub time_cost_us: u64,
}

impl ResultSet {
    pub(crate) fn from_wire(data: ExecData) -> Self {
        let tables = data
            .tables
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(column, value)| (column, flatten(&value)))
                    .collect()
            })
            .collect();

        Self {
            headers: data.headers,
            tables,
            time_cost_us: data.time_cost,
        }
    }

    /// Values of one column, in row order. Rows lacking the column are
    /// skipped.
    #[must_use]
    pub fn column_values(&self, column: &str) -> Vec<&str> {
        self.tables
            .iter()
            .filter_map(|row| row.get(column).map(String::as_str))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }
}

/// Flatten one JSON cell to the text form the schema layer expects.
///
/// Strings pass through unquoted, null becomes empty (the gateway's way of
/// saying "no value"), everything else keeps its JSON rendering.
fn flatten(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(json: &str) -> ExecData {
        serde_json::from_str(json).expect("valid wire payload")
    }

    #[test]
    fn flattens_string_and_scalar_cells() {
        let data = wire(
            r#"{
                "headers": ["Field", "Type", "Null"],
                "tables": [
                    {"Field": "age", "Type": "int64", "Null": "YES"},
                    {"Field": "score", "Type": "double", "Null": "NO"}
                ],
                "timeCost": 1200
            }"#,
        );

        let rs = ResultSet::from_wire(data);
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.time_cost_us, 1200);
        assert_eq!(rs.column_values("Field"), vec!["age", "score"]);
        assert_eq!(rs.column_values("Null"), vec!["YES", "NO"]);
    }

    #[test]
    fn null_cells_become_empty() {
        let data = wire(r#"{"headers": ["Default"], "tables": [{"Default": null}]}"#);
        let rs = ResultSet::from_wire(data);
        assert_eq!(rs.column_values("Default"), vec![""]);
    }

    #[test]
    fn numeric_cells_keep_json_rendering() {
        let data = wire(r#"{"headers": ["Default"], "tables": [{"Default": 18}]}"#);
        let rs = ResultSet::from_wire(data);
        assert_eq!(rs.column_values("Default"), vec!["18"]);
    }

    #[test]
    fn missing_fields_default() {
        let data = wire("{}");
        let rs = ResultSet::from_wire(data);
        assert!(rs.is_empty());
        assert!(rs.headers.is_empty());
        assert_eq!(rs.time_cost_us, 0);
    }

    #[test]
    fn column_values_skips_rows_without_the_column() {
        let data = wire(
            r#"{"headers": ["Name"], "tables": [{"Name": "player"}, {"Other": "x"}]}"#,
        );
        let rs = ResultSet::from_wire(data);
        assert_eq!(rs.column_values("Name"), vec!["player"]);
    }
}
