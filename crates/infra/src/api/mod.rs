//! Backend API access
//!
//! The backend exposes two endpoints the analyzer relies on:
//! - `POST {sqlEndpoint}` runs a read-only query and wraps the rows in an
//!   envelope (see [`envelope::SqlResponse`])
//! - `GET /health` answers `{"status": "ok"}`

pub mod client;
pub mod envelope;

pub use client::BackendClient;
pub use envelope::{HealthStatus, SqlRequest, SqlResponse};
