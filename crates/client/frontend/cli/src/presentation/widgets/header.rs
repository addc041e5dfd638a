//! Header widget displaying the panel tabs and store status.

use client_frontend_core::{OptionsController, PanelMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::LobbyTheme;

/// Render the header with the two panel tabs, the store revision and lock state.
pub fn render(frame: &mut Frame, area: Rect, controller: &OptionsController, theme: &LobbyTheme) {
    let mode = controller.mode();
    let store = controller.store();
    let lock = if store.is_game_editable() {
        Span::raw("")
    } else {
        Span::styled(" [LOCKED]", Style::default().fg(Color::LightRed))
    };

    let text = Line::from(vec![
        Span::styled(" Game Setup ", theme.tab(mode == PanelMode::GameSetup)),
        Span::raw(" "),
        Span::styled(" Player Setup ", theme.tab(mode == PanelMode::PlayerSetup)),
        Span::raw(" | Revision: "),
        Span::styled(store.revision().to_string(), Style::default().fg(Color::Yellow)),
        lock,
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Advanced Options"),
    );

    frame.render_widget(paragraph, area);
}
