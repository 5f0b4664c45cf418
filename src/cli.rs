use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "scout",
    version,
    about = "Chat-driven holiday resort extraction"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<String>,
    /// REST bind address (overrides config if specified)
    #[arg(long)]
    pub rest_addr: Option<SocketAddr>,
    /// Backend URL for the chat screen (overrides config if specified)
    #[arg(long)]
    pub backend_url: Option<String>,
    #[arg(long, short, value_enum)]
    pub mode: Option<RunMode>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Terminal chat screen
    Chat,
    /// REST API server
    Rest,
    /// Run chat and REST simultaneously
    All,
}
