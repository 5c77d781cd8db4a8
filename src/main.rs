use anyhow::Result;
use clap::Parser;

use usergql::cli::handlers::{CommandContext, handle_query, handle_schema, handle_serve};
use usergql::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    usergql::logging::init(cli.verbose, cli.log_file);

    let ctx = CommandContext::default();

    match cli.command.unwrap_or(Commands::Serve {
        port: None,
        host: None,
    }) {
        Commands::Serve { port, host } => handle_serve(ctx, port, host).await,
        Commands::Query {
            operation,
            variables,
        } => handle_query(ctx, operation, variables).await,
        Commands::Schema => handle_schema(ctx),
    }
}
