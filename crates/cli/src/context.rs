//! Shared state for command execution

use anyhow::{Context as _, Result};
use dashlens_domain::Config;
use dashlens_infra::{config, init_tracing, subscriber, LogFormat};

use crate::cli::Cli;

/// Effective configuration plus anything derived from global flags
pub struct Context {
    pub config: Config,
}

impl Context {
    /// Load configuration and install logging
    ///
    /// Loading logs through a scoped subscriber driven by the flags alone,
    /// since the configured debug level is not known yet.
    pub fn new(cli: &Cli) -> Result<Self> {
        let format = if cli.json_logs { LogFormat::Json } else { LogFormat::Pretty };
        let loaded = tracing::subscriber::with_default(subscriber(cli.debug, format), || {
            config::load(cli.config.clone())
        });

        let mut config = loaded.context("failed to load configuration")?;
        if cli.debug {
            config.debug = true;
        }

        init_tracing(config.debug, format)?;

        tracing::debug!(?config, "effective configuration");
        Ok(Self { config })
    }
}
