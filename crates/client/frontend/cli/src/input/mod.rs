//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the panel without starting.
    Back,
    /// Leave the panel and start the game.
    StartGame,
    FocusNext,
    FocusPrev,
    /// Switch to the game-setup panel.
    PrevPanel,
    /// Switch to the player-setup panel.
    NextPanel,
    /// Step the focused selector backwards.
    Decrease,
    /// Step the focused selector forwards.
    Increase,
    /// Toggle, press or start editing the focused control.
    Activate,
    AddPlayer,
    ResetDefaults,
    ToggleHelp,
    /// Typed into the numeric edit buffer.
    EditChar(char),
    EditBackspace,
    EditCommit,
    EditCancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into panel commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Back;
        }

        match mode {
            AppMode::Browse => self.browse(key),
            AppMode::Editing(_) => self.editing(key),
        }
    }

    fn browse(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Left => KeyAction::Decrease,
            KeyCode::Right => KeyAction::Increase,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::PageUp => KeyAction::PrevPanel,
            KeyCode::PageDown => KeyAction::NextPanel,
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Char(ch) => self.browse_char(ch),
            _ => KeyAction::None,
        }
    }

    fn browse_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Back,
            'j' => KeyAction::FocusNext,
            'k' => KeyAction::FocusPrev,
            'h' => KeyAction::Decrease,
            'l' => KeyAction::Increase,
            ' ' => KeyAction::Activate,
            '[' => KeyAction::PrevPanel,
            ']' => KeyAction::NextPanel,
            'a' => KeyAction::AddPlayer,
            'r' => KeyAction::ResetDefaults,
            's' => KeyAction::StartGame,
            '?' => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn editing(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::EditCommit,
            KeyCode::Esc => KeyAction::EditCancel,
            KeyCode::Backspace => KeyAction::EditBackspace,
            KeyCode::Char(ch) => KeyAction::EditChar(ch),
            _ => KeyAction::None,
        }
    }
}
