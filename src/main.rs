use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use avatar_proxy::lifecycle::{spawn_signal_listener, Shutdown};
use avatar_proxy::observability::logging;
use avatar_proxy::{load_config, HttpServer};

#[derive(Parser)]
#[command(name = "avatar-proxy")]
#[command(about = "Steam avatar lookup proxy", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Configuration failures are fatal before anything binds. The logger
    // is not up yet at this point, so report on stderr directly.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("avatar-proxy: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.endpoint,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
