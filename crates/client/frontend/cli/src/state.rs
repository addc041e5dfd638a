//! Terminal-only UI state layered over the options controller.

use game_core::ParameterId;

/// Text being typed into a numeric option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericEdit {
    pub parameter: ParameterId,
    pub buffer: String,
}

impl NumericEdit {
    pub fn new(parameter: ParameterId, initial: impl Into<String>) -> Self {
        Self {
            parameter,
            buffer: initial.into(),
        }
    }

    /// Accepts digits and a leading minus sign; the controller does the parsing.
    pub fn push(&mut self, ch: char) {
        if ch.is_ascii_digit() || (ch == '-' && self.buffer.is_empty()) {
            self.buffer.push(ch);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }
}

/// Top-level input mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Moving focus and editing selectors, toggles and slots.
    #[default]
    Browse,
    /// Typing into a numeric option.
    Editing(NumericEdit),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Key binding help is shown in the footer.
    pub show_help: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_edit(&mut self, parameter: ParameterId, initial: impl Into<String>) {
        self.mode = AppMode::Editing(NumericEdit::new(parameter, initial));
    }

    /// Leaves editing mode, returning the edit if there was one.
    pub fn finish_edit(&mut self) -> Option<NumericEdit> {
        match std::mem::take(&mut self.mode) {
            AppMode::Editing(edit) => Some(edit),
            AppMode::Browse => None,
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut NumericEdit> {
        match &mut self.mode {
            AppMode::Editing(edit) => Some(edit),
            AppMode::Browse => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, AppMode::Editing(_))
    }
}
