use std::net::IpAddr;

use anyhow::Result;
use tracing::info;

use crate::config::ServerConfig;
use crate::graphql::run_server;

use super::CommandContext;

pub async fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<IpAddr>) -> Result<()> {
    let config = ServerConfig::from_env().with_overrides(port, host);
    info!(host = %config.host, port = config.port, "starting GraphQL server");

    run_server(ctx.schema(), config).await?;
    Ok(())
}
