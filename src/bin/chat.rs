//! Chat-only binary entry point
//!
//! Runs only the terminal chat screen against an already-running
//! REST backend.

use clap::Parser;
use resort_scout::application::BackendClient;
use resort_scout::config::AppConfig;
use resort_scout::tui::run_chat;
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(name = "scout-chat", about = "Resort Scout terminal chat")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Backend URL (overrides config if specified)
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config_path = args.config.as_deref().map(Path::new);
    let config = AppConfig::load_or_init(config_path)?;

    let backend_url = args
        .backend_url
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or(config.chat.backend_url);

    match run_chat(BackendClient::new(backend_url)).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Chat error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
