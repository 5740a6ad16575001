//! # DashLens Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (files, `.example` fallback, environment)
//! - HTTP client with retry and timeout support
//! - Backend API client (`SqlExecutor` implementation)
//! - File-based metric sources
//! - Logging initialisation
//!
//! ## Architecture
//! - Implements traits defined in `dashlens-core`
//! - Contains all "impure" code (I/O, network)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod sources;

// Re-export commonly used items
pub use api::BackendClient;
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::{init_tracing, subscriber, LogFormat};
pub use sources::JsonFileMetricSource;
