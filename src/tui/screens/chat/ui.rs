//! Chat UI rendering components

use super::state::{ChatState, Sender};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, backend: &str) {
        let area = frame.area();

        // Layout: Status bar, Transcript, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(5),    // Transcript area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, backend);
        Self::render_transcript(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3]);
    }

    /// Render status bar with backend info
    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState, backend: &str) {
        let pending_indicator = if state.pending > 0 {
            Span::styled(
                format!(
                    " {} {} pending ",
                    SPINNER_FRAMES[state.loading_frame], state.pending
                ),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {} ", s), Style::default().fg(Color::DarkGray)))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 🏝 ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "Resort Scout ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
            Span::styled(backend.to_string(), Style::default().fg(Color::Magenta)),
            pending_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let para = Paragraph::new(status_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render the transcript area
    fn render_transcript(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();

        for entry in &state.entries {
            let (prefix, style) = match entry.sender {
                Sender::User => (
                    "You: ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Sender::Bot => ("Scout: ", Style::default().fg(Color::Green)),
                Sender::Notice => (
                    "Note: ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ),
            };

            let stamp = entry.sent_at.format("%H:%M").to_string();

            // First line with timestamp and prefix
            let content_lines: Vec<&str> = entry.text.lines().collect();
            if let Some(first_line) = content_lines.first() {
                lines.push(Line::from(vec![
                    Span::styled(format!("[{stamp}] "), Style::default().fg(Color::DarkGray)),
                    Span::styled(prefix, style),
                    Span::raw(*first_line),
                ]));
            }

            // Continuation lines with indent
            let indent = " ".repeat(stamp.len() + 3 + prefix.len());
            for line in content_lines.iter().skip(1) {
                lines.push(Line::from(format!("{}{}", indent, line)));
            }

            // Empty line between entries
            lines.push(Line::from(""));
        }

        // A reply is on the way; input stays open meanwhile
        if state.pending > 0 {
            lines.push(Line::from(Span::styled(
                format!(
                    "Scout: {} Thinking...",
                    SPINNER_FRAMES[state.loading_frame]
                ),
                Style::default().fg(Color::Yellow),
            )));
        }

        // Calculate scroll
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(inner_height);
        let scroll = if state.scroll_offset == u16::MAX {
            max_scroll as u16
        } else {
            state.scroll_offset.min(max_scroll as u16)
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        // Build input display with cursor
        let display_input = if state.input.is_empty() {
            "Type your message...".to_string()
        } else {
            // Insert cursor indicator at the char boundary
            let cursor_chars = state.input[..state.cursor_pos].chars().count();
            let mut chars: Vec<char> = state.input.chars().collect();
            if cursor_chars >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(cursor_chars, '|');
            }
            chars.into_iter().collect()
        };

        let input_line = Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_input, Style::default().fg(Color::White)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Message ");

        let para = Paragraph::new(input_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![
            Span::styled(" Enter/Ctrl+S", Style::default().fg(Color::Green)),
            Span::raw(": Send │ "),
            Span::styled("↑/↓", Style::default().fg(Color::Green)),
            Span::raw(": Scroll │ "),
            Span::styled("Ctrl+R", Style::default().fg(Color::Green)),
            Span::raw(": Restart │ "),
            Span::styled("Ctrl+Q", Style::default().fg(Color::Red)),
            Span::raw(": Quit "),
        ]);

        let para = Paragraph::new(help_text);
        frame.render_widget(para, area);
    }
}
