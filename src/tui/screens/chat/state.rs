//! Chat state management

use chrono::{DateTime, Local};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    /// Client-side note, e.g. a delivery failure or restart marker
    Notice,
}

/// A single transcript entry
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Notice,
            text: text.into(),
            sent_at: Local::now(),
        }
    }
}

/// Chat screen state
pub struct ChatState {
    /// Transcript, append-only while the screen lives
    pub entries: Vec<TranscriptEntry>,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, as a byte offset
    pub cursor_pos: usize,
    /// Scroll offset for the transcript
    pub scroll_offset: u16,
    /// Number of requests awaiting a reply
    pub pending: usize,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            pending: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    /// Append an entry to the transcript
    pub fn add_entry(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        // Auto-scroll to bottom
        self.scroll_to_bottom();
    }

    /// Get the current input and clear it. The buffer comes back
    /// exactly as typed, surrounding whitespace included.
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Whether the input holds anything besides whitespace
    pub fn has_message(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        if self.cursor_pos >= self.input.len() {
            self.input.push(c);
        } else {
            self.input.insert(self.cursor_pos, c);
        }
        self.cursor_pos += c.len_utf8();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if let Some((idx, _)) = self.input[..self.cursor_pos].char_indices().next_back() {
            self.input.remove(idx);
            self.cursor_pos = idx;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        if let Some((idx, _)) = self.input[..self.cursor_pos].char_indices().next_back() {
            self.cursor_pos = idx;
        }
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Scroll transcript up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll transcript down
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of the transcript
    pub fn scroll_to_bottom(&mut self) {
        // Will be clamped during render based on content height
        self.scroll_offset = u16::MAX;
    }

    /// Record a request going out. Input stays live; several requests
    /// can be in flight at once.
    pub fn begin_request(&mut self) {
        self.pending += 1;
    }

    /// Record a request settling, successfully or not
    pub fn finish_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Start the transcript over
    pub fn reset(&mut self) {
        self.entries.clear();
        self.pending = 0;
        self.scroll_offset = 0;
        self.status_message = Some("Conversation restarted".into());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.pending > 0 {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }
}
