//! Send trigger tests
//!
//! Enter and Ctrl+S dispatch the same submit action; whitespace-only
//! buffers never send and are left exactly as typed.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use resort_scout::tui::screens::chat::{ChatState, InputAction, handle_input};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn state_with_input(text: &str) -> ChatState {
    let mut state = ChatState::new();
    state.input = text.to_string();
    state.cursor_pos = text.len();
    state
}

#[test]
fn enter_submits_non_empty_input() {
    let mut state = state_with_input("hello");
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn ctrl_s_submits_non_empty_input() {
    let mut state = state_with_input("hello");
    assert_eq!(handle_input(&mut state, ctrl('s')), InputAction::Submit);
}

#[test]
fn both_triggers_agree_for_identical_state() {
    for text in ["hello", "  hello  ", "   ", "", "CONTINUE"] {
        let mut via_enter = state_with_input(text);
        let mut via_ctrl_s = state_with_input(text);

        let enter_action = handle_input(&mut via_enter, key(KeyCode::Enter));
        let ctrl_s_action = handle_input(&mut via_ctrl_s, ctrl('s'));

        assert_eq!(enter_action, ctrl_s_action, "triggers diverged for {text:?}");
        assert_eq!(via_enter.input, via_ctrl_s.input);
    }
}

#[test]
fn whitespace_only_input_is_not_submitted() {
    let mut state = state_with_input("   ");

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::None);
    // Buffer stays exactly as typed
    assert_eq!(state.input, "   ");
}

#[test]
fn empty_input_is_not_submitted() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::None);
}

#[test]
fn submit_leaves_raw_text_for_the_runner() {
    // handle_input only decides the action; the runner takes the text
    let mut state = state_with_input("  hello  ");

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Submit);
    assert_eq!(state.take_input(), "  hello  ");
}

#[test]
fn typing_builds_up_the_buffer() {
    let mut state = ChatState::new();
    for c in "hi there".chars() {
        handle_input(&mut state, key(KeyCode::Char(c)));
    }
    assert_eq!(state.input, "hi there");
}

#[test]
fn release_events_are_ignored() {
    let mut state = state_with_input("hello");
    let release = Event::Key(KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert_eq!(handle_input(&mut state, release), InputAction::None);
    assert_eq!(state.input, "hello");
}

#[test]
fn ctrl_r_requests_a_restart() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, ctrl('r')), InputAction::Reset);
}

#[test]
fn ctrl_q_exits() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
}

#[test]
fn esc_clears_the_buffer_without_sending() {
    let mut state = state_with_input("half-typed");

    let action = handle_input(&mut state, key(KeyCode::Esc));

    assert_eq!(action, InputAction::None);
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn arrow_keys_scroll_the_transcript() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::Up)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, key(KeyCode::Down)), InputAction::ScrollDown);
}
