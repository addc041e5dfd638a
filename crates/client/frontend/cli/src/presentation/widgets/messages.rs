//! Messages widget displaying recent panel notices.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::LobbyTheme;

/// Render the message log panel.
///
/// `messages` arrive newest first and are drawn bottom-to-top.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    panel_height: u16,
    theme: &LobbyTheme,
) {
    let visible = panel_height.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = messages
        .iter()
        .take(visible)
        .map(|entry| {
            ListItem::new(format!("[r{}] {}", entry.revision, entry.text))
                .style(theme.message(entry.level))
        })
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < visible {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
