//! TUI chat screen
//!
//! A Ratatui-based chat interface for the extraction assistant:
//! - state.rs: transcript and input buffer state
//! - ui.rs: rendering
//! - input.rs: key handling
//! - runner.rs: coordinates the components

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{InputAction, handle_input};
pub use runner::run_chat;
pub use state::{ChatState, Sender, TranscriptEntry};
