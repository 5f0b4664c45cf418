//! Terminal user interface

pub mod screens;
pub mod terminal;

pub use screens::chat::{ChatState, InputAction, Sender, TranscriptEntry, handle_input, run_chat};
