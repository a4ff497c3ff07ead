//! InfluxDB 1.x manager facade.
//!
//! This module provides the main `Client` type: one configured connection
//! handle and narrow operations that each map onto a single HTTP round trip
//! against the server.

use reqwest::Url;
use tracing::debug;

use crate::config::ConnectParams;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::types::{QueryResponse, Row};

/// Manager facade over one InfluxDB 1.x server.
///
/// Holds exactly one connection handle for its lifetime: created by
/// [`Client::connect`], released by [`Client::close`]. There is no pooling,
/// no reconnect, no retry; every server-side failure propagates to the
/// caller unchanged.
///
/// # Example
///
/// ```ignore
/// use influxdb_manager::{Client, ConnectParams, Point};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let params = ConnectParams::new("localhost", 8086, "admin", "secret", "telemetry");
///     let mut client = Client::connect(params).await?;
///
///     client.create_database("telemetry").await?;
///     client
///         .write_point(Point::new("cpu").tag("host", "server01").field("usage_idle", 98.2))
///         .await?;
///
///     for row in client.query("SELECT * FROM \"cpu\"").await? {
///         println!("{:?}", row);
///     }
///
///     client.close();
///     Ok(())
/// }
/// ```
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: String,
    database: String,
    closed: bool,
}

impl Client {
    /// Establish a session with the server described by `params`.
    ///
    /// Verifies connectivity with one `GET /ping` round trip; a server that
    /// cannot be reached or answers the ping with a non-success status fails
    /// the construction.
    pub async fn connect(params: ConnectParams) -> Result<Self> {
        Self::connect_with_http(reqwest::Client::new(), params).await
    }

    /// Establish a session using a caller-configured `reqwest::Client`.
    ///
    /// This is the place to set timeouts, proxies, or TLS options; this
    /// layer imposes no policy of its own.
    pub async fn connect_with_http(http: reqwest::Client, params: ConnectParams) -> Result<Self> {
        let url_str = params.base_url();
        let base_url = Url::parse(&url_str).map_err(|e| Error::Connection {
            message: format!("invalid server address '{}': {}", url_str, e),
        })?;

        let client = Self {
            http,
            base_url,
            username: params.username,
            password: params.password,
            database: params.database,
            closed: false,
        };
        client.ping().await?;

        debug!(url = %client.base_url, database = %client.database, "session established");
        Ok(client)
    }

    /// Get the base URL of the server.
    pub fn url(&self) -> &Url {
        &self.base_url
    }

    /// Get the database this client is scoped to.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Build the full URL for an API endpoint.
    fn endpoint(&self, path: &str) -> String {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.to_string()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::ConnectionClosed)
        } else {
            Ok(())
        }
    }

    /// Probe the server's `/ping` endpoint.
    async fn ping(&self) -> Result<()> {
        let response = self
            .http
            .get(self.endpoint("/ping"))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Connection {
                message: format!("ping returned {}: {}", status, body),
            });
        }
        Ok(())
    }

    /// Request creation of a database on the server.
    ///
    /// Whether re-creating an existing database succeeds or fails is the
    /// server's call; this layer passes the outcome through.
    pub async fn create_database(&self, name: &str) -> Result<()> {
        self.ensure_open()?;
        debug!(database = name, "creating database");
        self.run_query(&format!("CREATE DATABASE \"{}\"", name))
            .await?;
        Ok(())
    }

    /// Write exactly one point to the server.
    ///
    /// The point is encoded to line protocol with nanosecond precision; its
    /// document carries a timestamp if and only if the point has one. A
    /// rejection (bad field type, empty fields, permission failure) surfaces
    /// as [`Error::Write`] with the server's status and message.
    pub async fn write_point(&self, point: Point) -> Result<()> {
        self.ensure_open()?;
        let line = point.to_line_protocol()?;
        debug!(measurement = point.measurement(), "writing point");

        let response = self
            .http
            .post(self.endpoint("/write"))
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("db", self.database.as_str()), ("precision", "ns")])
            .header("Content-Type", "text/plain")
            .body(line)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Write {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// Execute a raw query string and return its rows in server order.
    ///
    /// The query text is not inspected or validated here; malformed queries
    /// and execution failures surface as [`Error::Query`] with the server's
    /// message.
    pub async fn query(&self, query: impl Into<String>) -> Result<Vec<Row>> {
        self.ensure_open()?;
        self.run_query(&query.into()).await
    }

    /// List the measurement names known to the database, in server order.
    pub async fn list_measurements(&self) -> Result<Vec<String>> {
        let rows = self.query("SHOW MEASUREMENTS").await?;
        Ok(measurement_names(rows))
    }

    /// Fetch the field-key descriptors of one measurement, unmodified.
    ///
    /// A measurement the server does not know yields whatever the server
    /// yields for it (normally no rows).
    pub async fn field_keys(&self, measurement: &str) -> Result<Vec<Row>> {
        self.query(show_field_keys_query(measurement)).await
    }

    /// Fetch the tag-key descriptors of one measurement, unmodified.
    pub async fn tag_keys(&self, measurement: &str) -> Result<Vec<Row>> {
        self.query(show_tag_keys_query(measurement)).await
    }

    /// Release the connection handle.
    ///
    /// Idempotent; every operation after the first `close` fails with
    /// [`Error::ConnectionClosed`].
    pub fn close(&mut self) {
        if !self.closed {
            debug!(url = %self.base_url, "closing session");
            self.closed = true;
        }
    }

    /// One `/query` round trip: send the raw text, decode the JSON body,
    /// flatten it to rows.
    async fn run_query(&self, query: &str) -> Result<Vec<Row>> {
        let response = self
            .http
            .post(self.endpoint("/query"))
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("db", self.database.as_str())])
            .form(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Error bodies are JSON `{"error": "..."}` when the server got
            // far enough to produce one.
            let message = serde_json::from_slice::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| format!("server returned {}", status));
            return Err(Error::Query { message });
        }

        let decoded: QueryResponse = serde_json::from_slice(&body)?;
        let rows = decoded.into_rows()?;
        debug!(rows = rows.len(), "query returned");
        Ok(rows)
    }
}

/// Extract the `name` cell of each `SHOW MEASUREMENTS` row, in row order.
///
/// The server emits exactly one string `name` cell per catalogue row; a row
/// without one names no measurement and is skipped rather than invented.
fn measurement_names(rows: Vec<Row>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| row.get_string("name"))
        .collect()
}

/// Introspection query for the field keys of one measurement.
fn show_field_keys_query(measurement: &str) -> String {
    format!("SHOW FIELD KEYS FROM \"{}\"", measurement)
}

/// Introspection query for the tag keys of one measurement.
fn show_tag_keys_query(measurement: &str) -> String {
    format!("SHOW TAG KEYS FROM \"{}\"", measurement)
}
