pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod infrastructure;
pub mod tui;
pub mod types;

pub use application::{Assistant, BackendClient};
pub use cli::{Cli, RunMode};
pub use config::AppConfig;
pub use infrastructure::{model, server, web};

use infrastructure::model::GeminiClient;
use infrastructure::web::HttpPageFetcher;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mode = match cli.mode {
        Some(m) => m,
        None => select_mode_interactive()?,
    };

    // The chat screen owns the terminal, logs stay quiet there
    let quiet_mode = matches!(mode, RunMode::Chat | RunMode::All);
    init_tracing(quiet_mode);
    info!("Starting resort-scout");
    debug!(mode = ?mode, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load_or_init(config_path)?;
    if let Some(addr) = cli.rest_addr {
        config.rest.bind = addr;
    }
    if let Some(url) = &cli.backend_url {
        config.chat.backend_url = url.trim_end_matches('/').to_string();
    }

    info!(mode = ?mode, "Running in selected mode");
    match mode {
        RunMode::Chat => {
            let backend = BackendClient::new(config.chat.backend_url.clone());
            tui::run_chat(backend).await?;
        }
        RunMode::Rest => {
            info!(addr = %config.rest.bind, "Starting REST server");
            let assistant = Arc::new(build_assistant(&config)?);
            server::serve(assistant, config.rest.clone()).await?;
        }
        RunMode::All => {
            info!(addr = %config.rest.bind, "Starting REST server and chat screen");
            let assistant = Arc::new(build_assistant(&config)?);
            let rest_config = config.rest.clone();

            // The screen talks to the server this process just started,
            // unless an explicit backend override says otherwise
            let backend_url = match cli.backend_url {
                Some(_) => config.chat.backend_url.clone(),
                None => format!("http://127.0.0.1:{}", config.rest.bind.port()),
            };

            // Spawn REST server in background
            let rest_handle = tokio::spawn(async move {
                if let Err(e) = server::serve(assistant, rest_config).await {
                    tracing::error!(error = %e, "REST server error");
                }
            });

            // Let the listener come up before the screen's first call
            tokio::time::sleep(Duration::from_millis(150)).await;

            let backend = BackendClient::new(backend_url);
            let chat_result = tui::run_chat(backend).await;

            // When the chat screen exits, take the server down with it
            rest_handle.abort();

            chat_result?;
        }
    }
    info!("Execution finished");
    Ok(())
}

/// Wire the extraction assistant from configuration. Fails when no
/// Gemini API key can be resolved; extraction cannot run without one.
pub fn build_assistant(
    config: &AppConfig,
) -> Result<Assistant<GeminiClient>, config::ConfigError> {
    let model = GeminiClient::from_config(&config.provider);
    if !model.has_api_key() {
        return Err(config::ConfigError::MissingApiKey);
    }
    let fetcher = Arc::new(HttpPageFetcher::from_config(&config.extraction));
    Ok(Assistant::new(model, fetcher, config))
}

fn select_mode_interactive() -> Result<RunMode, Box<dyn Error>> {
    println!();
    println!("Available modes:");
    println!("  1. Chat - Terminal chat screen");
    println!("  2. REST - API server");
    println!("  3. Both - Run chat + REST simultaneously");
    println!();
    print!("Select mode [1-3]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    match input.trim() {
        "1" | "chat" => Ok(RunMode::Chat),
        "2" | "rest" => Ok(RunMode::Rest),
        "3" | "both" | "all" => Ok(RunMode::All),
        _ => {
            println!("Invalid selection, defaulting to Chat");
            Ok(RunMode::Chat)
        }
    }
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
