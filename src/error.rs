//! Error types for influxdb-manager.

use thiserror::Error;

/// Error type for influxdb-manager operations.
///
/// Server-side failures are passed through unchanged; this layer never
/// retries or recovers locally.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection refused, TLS failure, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Session could not be established at connect time.
    #[error("Failed to establish session: {message}")]
    Connection {
        /// Description of the failure, typically the ping response.
        message: String,
    },

    /// An operation was attempted after `close()`.
    #[error("Connection is closed")]
    ConnectionClosed,

    /// The server rejected a point write.
    #[error("Write rejected by InfluxDB ({status}): {message}")]
    Write {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error body returned by the server.
        message: String,
    },

    /// The server reported a query failure (malformed query, unknown
    /// database, execution error).
    #[error("Query error from InfluxDB: {message}")]
    Query {
        /// Error message returned by InfluxDB.
        message: String,
    },

    /// Failed to decode the server's JSON response body.
    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// A point timestamp falls outside the representable nanosecond range.
    #[error("Timestamp out of range for nanosecond precision: {timestamp}")]
    InvalidTimestamp {
        /// The offending timestamp, RFC3339-formatted.
        timestamp: String,
    },
}

/// Result type alias for influxdb-manager operations.
pub type Result<T> = std::result::Result<T, Error>;
