//! Connection parameters for the manager facade.

use serde::Deserialize;

/// Coordinates and credentials for one InfluxDB 1.x server.
///
/// Deserializable so callers can load it from their configuration files:
///
/// ```ignore
/// let params: ConnectParams = toml::from_str(r#"
///     host = "localhost"
///     port = 8086
///     username = "admin"
///     password = "secret"
///     database = "telemetry"
/// "#)?;
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct ConnectParams {
    /// Server hostname or IP address.
    pub host: String,
    /// HTTP API port (8086 on a default install).
    pub port: u16,
    /// Username for HTTP basic authentication.
    pub username: String,
    /// Password for HTTP basic authentication.
    pub password: String,
    /// Database that writes and queries are scoped to.
    pub database: String,
}

impl ConnectParams {
    /// Create connection parameters from individual values.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    /// Base URL of the server's HTTP API.
    pub(crate) fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let params = ConnectParams::new("localhost", 8086, "u", "p", "db");
        assert_eq!(params.base_url(), "http://localhost:8086");
    }

    #[test]
    fn test_deserialize() {
        let params: ConnectParams = serde_json::from_value(serde_json::json!({
            "host": "influx.internal",
            "port": 18086,
            "username": "writer",
            "password": "hunter2",
            "database": "sensors"
        }))
        .unwrap();

        assert_eq!(params.host, "influx.internal");
        assert_eq!(params.port, 18086);
        assert_eq!(params.database, "sensors");
    }
}
