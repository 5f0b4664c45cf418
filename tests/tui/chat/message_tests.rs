//! TranscriptEntry tests

use resort_scout::tui::screens::chat::{Sender, TranscriptEntry};

#[test]
fn test_entry_user() {
    let entry = TranscriptEntry::user("Hello");
    assert_eq!(entry.sender, Sender::User);
    assert_eq!(entry.text, "Hello");
}

#[test]
fn test_entry_bot() {
    let entry = TranscriptEntry::bot("Hi there!");
    assert_eq!(entry.sender, Sender::Bot);
    assert_eq!(entry.text, "Hi there!");
}

#[test]
fn test_entry_notice() {
    let entry = TranscriptEntry::notice("Welcome");
    assert_eq!(entry.sender, Sender::Notice);
    assert_eq!(entry.text, "Welcome");
}

#[test]
fn test_entry_keeps_raw_text() {
    let entry = TranscriptEntry::user("  spaced out  ");
    assert_eq!(entry.text, "  spaced out  ");
}
