//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set. Otherwise the level is `info` for DashLens
//! crates, raised to `debug` when the configuration asks for it. Logs go to
//! stderr so that stdout carries only reports.

use dashlens_domain::{DashLensError, Result};
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output encoding of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "warn,dashlens_core=debug,dashlens_infra=debug,dashlens_cli=debug"
    } else {
        "warn,dashlens_core=info,dashlens_infra=info,dashlens_cli=info"
    }
}

/// Build the subscriber without installing it
///
/// Used directly for scoped logging before the configuration is known.
pub fn subscriber(debug: bool, format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(debug),
            ),
        ),
        LogFormat::Json => {
            Box::new(registry.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        }
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns `DashLensError::Internal` if a global subscriber is already set.
pub fn init_tracing(debug: bool, format: LogFormat) -> Result<()> {
    subscriber(debug, format)
        .try_init()
        .map_err(|err| DashLensError::Internal(format!("failed to initialise logging: {err}")))
}
