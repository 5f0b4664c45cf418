//! REST-only binary entry point
//!
//! Runs only the REST API server, no terminal screen. Suited to
//! deployments where the chat front end lives elsewhere.

use clap::Parser;
use resort_scout::build_assistant;
use resort_scout::config::AppConfig;
use resort_scout::infrastructure::server;
use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "scout-rest", about = "Resort Scout REST API server")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// REST API bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting Resort Scout REST server");

    let config_path = args.config.as_deref().map(Path::new);
    let mut config = AppConfig::load_or_init(config_path)?;
    if let Some(addr) = args.addr {
        config.rest.bind = addr;
    }

    debug!(model = %config.model, "Configuration loaded");

    let assistant = Arc::new(build_assistant(&config)?);

    info!(addr = %config.rest.bind, "REST server starting");
    server::serve(assistant, config.rest.clone()).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
