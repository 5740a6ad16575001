//! `config`: inspect the effective configuration

use anyhow::Result;
use clap::Subcommand;
use dashlens_domain::Config;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration after files and environment are applied
    Show {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print the full URL of the SQL endpoint
    SqlUrl,
}

/// Execute a config subcommand
pub fn execute(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => println!("{}", render_config(&ctx.config, json)?),
        ConfigCommands::SqlUrl => println!("{}", ctx.config.sql_url()),
    }
    Ok(())
}

fn render_config(config: &Config, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_output_reloads_to_same_config() {
        let mut config = Config::default();
        config.request_headers.insert("X-Tenant".into(), "acme".into());

        let text = render_config(&config, false).unwrap();
        assert!(text.contains("apiUrl = \"http://localhost:8000\""));
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn json_output_uses_camel_case() {
        let text = render_config(&Config::default(), true).unwrap();
        assert!(text.contains("\"buttonPosition\": \"bottom-right\""));
    }
}
