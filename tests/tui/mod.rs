//! TUI unit tests module
//!
//! Organized by domain:
//! - chat/: ChatState, TranscriptEntry, input, send, scroll tests

pub mod chat;
