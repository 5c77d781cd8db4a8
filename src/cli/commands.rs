use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "usergql")]
#[command(
    author,
    version,
    about = "A small GraphQL server over a fixed set of users"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "USERGQL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    ///
    /// Listens on 127.0.0.1:8080 by default. When PORT is set in the
    /// environment, its value is used and the server binds 0.0.0.0.
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides the PORT-derived default)
        #[arg(long)]
        host: Option<IpAddr>,
    },

    /// Execute a GraphQL operation in-process and print the response
    #[command(visible_alias = "q")]
    Query {
        /// Operation text, e.g. '{ users { id name } }'
        operation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
