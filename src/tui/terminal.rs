//! Raw terminal handling for the chat screen
//!
//! The chat screen owns the whole terminal while it runs: raw mode
//! plus the alternate screen on entry, both undone on the way out.

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{Stdout, stdout};

pub type ChatTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal for the chat screen
pub fn enter() -> std::io::Result<ChatTerminal> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Hand the terminal back to the shell
pub fn leave() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
