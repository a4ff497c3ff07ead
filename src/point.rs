//! Point documents and their line-protocol encoding.
//!
//! A [`Point`] is the ephemeral document shaped by `write_point`: measurement
//! name, tag map, field map, optional timestamp. It is encoded to InfluxDB
//! 1.x line protocol (nanosecond precision) for the `/write` endpoint and
//! never stored by this crate.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::value::FieldValue;

/// A single data point to be written to InfluxDB.
///
/// Built fresh per write call via the builder methods:
///
/// ```ignore
/// use influxdb_manager::Point;
///
/// let point = Point::new("cpu")
///     .tag("host", "server01")
///     .field("usage_idle", 98.2)
///     .field("core", 0i64);
/// ```
///
/// A point with an empty field map is representable and will be sent as-is;
/// the server rejects it, and that rejection is surfaced unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    measurement: String,
    tags: BTreeMap<String, String>,
    fields: BTreeMap<String, FieldValue>,
    timestamp: Option<DateTime<FixedOffset>>,
}

impl Point {
    /// Create a new point for the given measurement, with no tags, fields,
    /// or timestamp.
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
            timestamp: None,
        }
    }

    /// Add a tag to the point, replacing any previous value for the key.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add a field to the point, replacing any previous value for the key.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set the point timestamp. Without one, the server assigns its own
    /// receive time.
    pub fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The measurement name.
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    /// The tag map.
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// The field map.
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// The timestamp, if one was supplied.
    pub fn time(&self) -> Option<&DateTime<FixedOffset>> {
        self.timestamp.as_ref()
    }

    /// Encode the point as one InfluxDB line-protocol line with nanosecond
    /// timestamp precision.
    ///
    /// The line ends in an epoch-nanosecond timestamp if and only if the
    /// point has one.
    pub fn to_line_protocol(&self) -> Result<String> {
        let mut line = escape_measurement(&self.measurement);

        for (key, value) in &self.tags {
            line.push(',');
            line.push_str(&escape_key(key));
            line.push('=');
            line.push_str(&escape_key(value));
        }

        line.push(' ');
        let mut first = true;
        for (key, value) in &self.fields {
            if !first {
                line.push(',');
            }
            first = false;
            line.push_str(&escape_key(key));
            line.push('=');
            line.push_str(&encode_field_value(value));
        }

        if let Some(ts) = &self.timestamp {
            let nanos = ts
                .timestamp_nanos_opt()
                .ok_or_else(|| Error::InvalidTimestamp {
                    timestamp: ts.to_rfc3339(),
                })?;
            line.push(' ');
            line.push_str(&nanos.to_string());
        }

        Ok(line)
    }
}

/// Escape a measurement name: commas and spaces.
fn escape_measurement(s: &str) -> String {
    s.replace(',', "\\,").replace(' ', "\\ ")
}

/// Escape a tag key, tag value, or field key: commas, equals signs, spaces.
fn escape_key(s: &str) -> String {
    s.replace(',', "\\,").replace('=', "\\=").replace(' ', "\\ ")
}

/// Encode a field value in line-protocol syntax.
fn encode_field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }
        FieldValue::Integer(i) => format!("{}i", i),
        FieldValue::Float(f) => format!("{}", f),
    }
}
