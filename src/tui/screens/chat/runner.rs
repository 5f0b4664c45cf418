//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::state::{ChatState, TranscriptEntry};
use super::ui::ChatUI;
use crate::application::BackendClient;
use crate::tui::terminal::{self, ChatTerminal};
use crossterm::event::{self};
use std::error::Error;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::error;

const WELCOME: &str =
    "Welcome to Resort Scout! Send the URL of a holiday listings page to begin.";

/// Run the TUI chat interface
pub async fn run_chat(backend: BackendClient) -> Result<(), Box<dyn Error>> {
    let mut screen = terminal::enter()?;
    let mut state = ChatState::new();

    let result = run_chat_loop(&mut screen, &mut state, backend).await;

    terminal::leave()?;
    result
}

/// Internal chat loop
async fn run_chat_loop(
    terminal: &mut ChatTerminal,
    state: &mut ChatState,
    backend: BackendClient,
) -> Result<(), Box<dyn Error>> {
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(16);

    state.add_entry(TranscriptEntry::notice(WELCOME));
    // A fresh screen starts a fresh backend conversation, the same way
    // reloading the page used to.
    spawn_reset(backend.clone(), response_tx.clone());

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, backend.base_url());
        })?;

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Reply(content) => {
                    state.finish_request();
                    state.add_entry(TranscriptEntry::bot(content));
                }
                ResponseEvent::Failure(note) => {
                    state.finish_request();
                    state.add_entry(TranscriptEntry::notice(note));
                }
                ResponseEvent::ResetFailed(note) => {
                    state.add_entry(TranscriptEntry::notice(note));
                }
            }
        }

        let timeout = if state.pending > 0 {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(state, event);

            match action {
                InputAction::Exit => {
                    return Ok(());
                }

                InputAction::Submit => {
                    // The transcript and the wire both get the input
                    // exactly as typed.
                    let raw = state.take_input();
                    state.add_entry(TranscriptEntry::user(raw.clone()));
                    state.begin_request();
                    state.status_message = None;

                    let backend = backend.clone();
                    let tx = response_tx.clone();
                    tokio::spawn(async move {
                        send_message(backend, raw, tx).await;
                    });
                }

                InputAction::Reset => {
                    state.reset();
                    state.add_entry(TranscriptEntry::notice(WELCOME));
                    spawn_reset(backend.clone(), response_tx.clone());
                }

                InputAction::ScrollUp => {
                    state.scroll_up();
                }

                InputAction::ScrollDown => {
                    state.scroll_down(1000); // Max scroll will be limited by content
                }

                InputAction::ScrollTop => {
                    state.scroll_offset = 0;
                }

                InputAction::ScrollBottom => {
                    state.scroll_to_bottom();
                }

                InputAction::None => {}
            }
        } else if state.pending > 0 {
            state.tick_loading();
        }
    }
}

/// Events from async response handling
enum ResponseEvent {
    Reply(String),
    Failure(String),
    ResetFailed(String),
}

/// Send one message asynchronously. Failures never produce a bot
/// entry, only a notice.
async fn send_message(backend: BackendClient, message: String, tx: mpsc::Sender<ResponseEvent>) {
    match backend.send(&message).await {
        Ok(reply) => {
            let _ = tx.send(ResponseEvent::Reply(reply)).await;
        }
        Err(err) => {
            error!(error = %err, "Chat message delivery failed");
            let _ = tx.send(ResponseEvent::Failure(err.user_message())).await;
        }
    }
}

fn spawn_reset(backend: BackendClient, tx: mpsc::Sender<ResponseEvent>) {
    tokio::spawn(async move {
        if let Err(err) = backend.reset().await {
            error!(error = %err, "Backend reset failed");
            let _ = tx.send(ResponseEvent::ResetFailed(err.user_message())).await;
        }
    });
}
