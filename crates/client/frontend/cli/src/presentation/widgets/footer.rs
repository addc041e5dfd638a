//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::PanelMode;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, mode: PanelMode, app_state: &AppState) {
    let mut text = match (&app_state.mode, mode) {
        (AppMode::Editing(edit), _) => vec![Line::from(vec![
            Span::raw(format!("Editing {}: ", edit.parameter)),
            Span::raw("[0-9/-] Type | [Backspace] Erase | [Enter] Commit | [Esc] Cancel"),
        ])],
        (AppMode::Browse, PanelMode::GameSetup) => vec![Line::from(vec![
            Span::raw("[Tab/jk] Focus | "),
            Span::raw("[Left/Right] Change | "),
            Span::raw("[Enter] Edit | "),
            Span::raw("[]] Players | "),
            Span::raw("[s] Start | "),
            Span::raw("[q] Back | "),
            Span::raw("[?] Help"),
        ])],
        (AppMode::Browse, PanelMode::PlayerSetup) => vec![Line::from(vec![
            Span::raw("[Tab/jk] Focus | "),
            Span::raw("[Left/Right] Leader/Civ | "),
            Span::raw("[Enter] Remove | "),
            Span::raw("[a] Add | "),
            Span::raw("[[] Options | "),
            Span::raw("[s] Start | "),
            Span::raw("[q] Back"),
        ])],
    };

    if app_state.show_help {
        text.push(Line::from("[r] Reset to defaults for the configured mode"));
        text.push(Line::from("[PgUp/PgDn] Switch panels | [Ctrl+C] Leave"));
        text.push(Line::from("Numeric options ignore zero and input without digits"));
    }

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
