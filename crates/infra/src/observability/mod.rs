//! Observability infrastructure
//!
//! Only structured logging lives here; the analyzer keeps no metrics.

pub mod logging;

pub use logging::{default_directive, init_tracing, subscriber, LogFormat};
