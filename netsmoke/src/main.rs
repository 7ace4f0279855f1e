//! netsmoke Server Entry Point

use clap::Parser;
use netsmoke::cli::{Cli, Commands};
use netsmoke::config::{self, RuntimeConfig};
use netsmoke::probe::NeighborProber;
use netsmoke::shutdown::ShutdownController;
use netsmoke::{logging, net, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => {
            logging::init().expect("failed to initialize logging");
            run_server(args.port, args.interface).await;
        }
        None => {
            // No subcommand - default to serve
            logging::init().expect("failed to initialize logging");
            let port = config::get_env_parse("PORT", config::DEFAULT_PORT);
            let interface = config::get_env_or("NETSMOKE_INTERFACE", net::DEFAULT_INTERFACE);
            run_server(port, interface).await;
        }
    }
}

async fn run_server(port: u16, interface: String) {
    info!("netsmoke v{}", env!("CARGO_PKG_VERSION"));

    // 近隣アドレス解決に失敗した場合はここで終了する
    let config = match RuntimeConfig::resolve(port, interface) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        neighbor = %config.neighbor,
        instance_id = config.instance_id,
        "Runtime configuration resolved"
    );

    let shutdown = ShutdownController::default();

    NeighborProber::new(config.neighbor).start(shutdown.clone());

    let bind_addr = config.bind_addr();
    let state = AppState { config };

    if let Err(e) = server::run(state, &bind_addr, shutdown).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
