//! Result types for InfluxDB 1.x query responses.
//!
//! The `/query` endpoint returns JSON shaped as `results` -> `series` ->
//! (`columns`, `values`). This module mirrors that body with serde and
//! flattens it into an ordered sequence of [`Row`]s, zipping each values
//! entry with the series' column names. Nothing is filtered or reordered.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::value::Value;

/// A single result row: column name to value.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Column name to value mapping.
    pub values: BTreeMap<String, Value>,
}

impl Row {
    /// Get a value by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get value as an owned string.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.values.get(name).and_then(|v| v.string())
    }

    /// Get value as f64.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(|v| v.as_float())
    }

    /// Get value as i64.
    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(|v| v.as_integer())
    }

    /// Get value as bool.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(|v| v.as_bool())
    }

    /// Get the `time` column, as returned by the server.
    pub fn time(&self) -> Option<&Value> {
        self.values.get("time")
    }
}

/// Response body of the `/query` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    error: Option<String>,
}

/// Result of one statement within a query.
#[derive(Debug, Deserialize)]
struct StatementResult {
    #[serde(default)]
    series: Vec<Series>,
    error: Option<String>,
}

/// One series of rows within a statement result.
#[derive(Debug, Deserialize)]
struct Series {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
    error: Option<String>,
}

impl QueryResponse {
    /// Flatten the response into rows, statement by statement, series by
    /// series, in the server's order.
    ///
    /// Any error the server embedded in the body (top-level, per-statement,
    /// or per-series) surfaces as [`Error::Query`] with the server's message.
    pub(crate) fn into_rows(self) -> Result<Vec<Row>> {
        if let Some(message) = self.error {
            return Err(Error::Query { message });
        }

        let mut rows = Vec::new();
        for result in self.results {
            if let Some(message) = result.error {
                return Err(Error::Query { message });
            }
            for series in result.series {
                if let Some(message) = series.error {
                    return Err(Error::Query { message });
                }
                for cells in series.values {
                    let mut values = BTreeMap::new();
                    for (column, cell) in series.columns.iter().zip(cells) {
                        values.insert(column.clone(), Value::from(cell));
                    }
                    rows.push(Row { values });
                }
            }
        }
        Ok(rows)
    }
}
