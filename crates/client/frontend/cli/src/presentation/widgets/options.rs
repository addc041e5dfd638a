//! Game-setup panel: option rows grouped by section.

use client_frontend_core::{Bucket, Control, OptionRow, OptionsController};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::LobbyTheme;
use crate::state::{AppMode, AppState};

/// Render standard options on the left and the advanced group on the right,
/// with the focused option's help text underneath.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    controller: &OptionsController,
    app_state: &AppState,
    theme: &LobbyTheme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let (standard, advanced): (Vec<Bucket>, Vec<Bucket>) =
        Bucket::iter().partition(|bucket| !bucket.is_advanced_or_victory());

    render_group(frame, columns[0], controller, app_state, theme, &standard);
    render_group(frame, columns[1], controller, app_state, theme, &advanced);

    let help = controller
        .focused_element()
        .and_then(|element| controller.row(element))
        .and_then(|row| row.help.clone())
        .unwrap_or_default();
    let help = Paragraph::new(help)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(help, rows[1]);
}

fn render_group(
    frame: &mut Frame,
    area: Rect,
    controller: &OptionsController,
    app_state: &AppState,
    theme: &LobbyTheme,
    buckets: &[Bucket],
) {
    let focused = controller.focused_element();
    let mut lines = Vec::new();

    for &bucket in buckets {
        let mut rows = controller.rows_in(bucket).peekable();
        if rows.peek().is_none() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let title = controller
            .resolve(bucket.title_key())
            .unwrap_or_else(|| bucket.default_title().to_owned());
        lines.push(Line::styled(title, theme.bucket_header(bucket)));

        for row in rows {
            let is_focused = focused == Some(row.element);
            lines.push(row_line(row, is_focused, app_state, theme));
        }
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn row_line<'a>(
    row: &'a OptionRow,
    focused: bool,
    app_state: &AppState,
    theme: &LobbyTheme,
) -> Line<'a> {
    let label_style = if focused { theme.focused() } else { theme.label() };
    let label = Span::styled(format!("  {:<28}", row.label), label_style);

    let value = match (&row.control, &app_state.mode) {
        (Control::Numeric { .. }, AppMode::Editing(edit)) if edit.parameter == row.parameter => {
            Span::styled(format!("{}_", edit.buffer), theme.editing())
        }
        (Control::Selector { .. }, _) => {
            Span::styled(format!("< {} >", row.control.display_value()), theme.value())
        }
        (Control::Toggle { checked }, _) => {
            Span::styled(if *checked { "[x]" } else { "[ ]" }, theme.value())
        }
        (Control::Numeric { text }, _) => Span::styled(text.clone(), theme.value()),
        (Control::ReadOnly { value } | Control::Fallback { value }, _) => {
            Span::styled(value.clone(), theme.read_only())
        }
    };

    Line::from(vec![label, value])
}
