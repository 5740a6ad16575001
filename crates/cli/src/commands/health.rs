//! `health`: backend reachability probe

use anyhow::Result;
use dashlens_infra::BackendClient;

use crate::context::Context;

/// Execute the health command
pub async fn execute(ctx: &Context) -> Result<()> {
    let client = BackendClient::new(&ctx.config)?;
    let status = client.health().await?;

    println!("Backend at {} is {}", ctx.config.api_url, status.status);
    Ok(())
}
