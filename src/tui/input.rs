//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on whether the
//! review form currently has focus: while editing, printable keys are text.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::SortKey;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The movie table has focus.
    Browse,
    /// The review form has focus.
    Editing,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// `Ctrl+C` quits from every context.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.key, KeyCode::Char('c')).then_some(AppMsg::Quit);
    }

    match context {
        InputContext::Browse => map_browse_key(key.key),
        InputContext::Editing => map_editing_key(key.key),
    }
}

/// Maps a key event using the browse context.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    map_key_to_message_with_context(key, InputContext::Browse)
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browse_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::SelectCursorRow),
        KeyCode::Char('s') => Some(AppMsg::SortBy(SortKey::Reviews)),
        KeyCode::Char('t') => Some(AppMsg::SortBy(SortKey::Title)),
        KeyCode::Char('c') => Some(AppMsg::SortBy(SortKey::FilmCompanyId)),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('w') => Some(AppMsg::OpenReviewForm),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_editing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(character) => Some(AppMsg::ReviewInsertChar(character)),
        KeyCode::Backspace => Some(AppMsg::ReviewBackspace),
        KeyCode::Enter => Some(AppMsg::ReviewSubmit),
        KeyCode::Esc => Some(AppMsg::ReviewCancel),
        _ => None,
    }
}
