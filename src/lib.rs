//! # influxdb-manager
//!
//! A thin async manager facade over the InfluxDB 1.x HTTP API: database
//! creation, single-point writes, raw queries, and schema introspection,
//! each as one delegated round trip.
//!
//! ## Why?
//!
//! Application code that talks to InfluxDB usually needs a handful of
//! narrow, purpose-named calls, not a full query framework:
//!
//! ```ignore
//! let mut manager = Client::connect(params).await?;
//! manager.create_database("telemetry").await?;
//! manager.write_point(Point::new("cpu").tag("host", "a").field("value", 0.64)).await?;
//! let measurements = manager.list_measurements().await?;
//! manager.close();
//! ```
//!
//! This crate is deliberately only that surface. There is no batching, no
//! retry, no caching, and no client-side query validation; every failure the
//! server reports is surfaced unchanged as a [`Error`] variant.
//!
//! ## Quick Start
//!
//! ```ignore
//! use influxdb_manager::{Client, ConnectParams, Point};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let params = ConnectParams::new("localhost", 8086, "admin", "secret", "telemetry");
//!     let mut client = Client::connect(params).await?;
//!
//!     client
//!         .write_point(
//!             Point::new("temperature")
//!                 .tag("room", "office")
//!                 .field("celsius", 21.5),
//!         )
//!         .await?;
//!
//!     for row in client.query("SELECT * FROM \"temperature\"").await? {
//!         println!("{} = {:?}", row.get_string("room").unwrap_or_default(), row.get("celsius"));
//!     }
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One handle, one lifetime**: the connection is established at
//!   [`Client::connect`] and released by [`Client::close`]; operations after
//!   close fail predictably
//! - **Pass-through errors**: connection, write, and query failures carry
//!   the server's own message, never a locally invented one
//! - **Typed field values**: string, integer, and float fields via
//!   [`FieldValue`], encoded to line protocol with correct escaping
//! - **Ordered results**: query rows come back exactly as the server
//!   returned them

pub mod client;
pub mod config;
pub mod error;
pub mod point;
pub mod types;
pub mod value;

// Re-export main types at crate root
pub use client::Client;
pub use config::ConnectParams;
pub use error::{Error, Result};
pub use point::Point;
pub use types::Row;
pub use value::{FieldValue, Value};
