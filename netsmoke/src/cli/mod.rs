//! CLI module for netsmoke

pub mod serve;

use clap::{Parser, Subcommand};

/// netsmoke - In-cluster network reachability smoke tester
#[derive(Parser, Debug)]
#[command(name = "netsmoke")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PORT                    Echo server listen port (default: 3000)
    NETSMOKE_INTERFACE      Interface used to derive the neighbor address (default: eth0)
    NETSMOKE_LOG_LEVEL      Log level (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the neighbor prober and the echo server
    Serve(serve::ServeArgs),
}
