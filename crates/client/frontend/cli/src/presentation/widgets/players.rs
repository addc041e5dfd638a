//! Player-setup panel: one row per active slot plus the local preview.

use client_frontend_core::{OptionsController, RosterOption, RosterSelector};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::LobbyTheme;

/// Render the slot list on the left and the local player's picks on the right.
pub fn render(frame: &mut Frame, area: Rect, controller: &OptionsController, theme: &LobbyTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_slots(frame, columns[0], controller, theme);
    render_preview(frame, columns[1], controller);
}

fn render_slots(frame: &mut Frame, area: Rect, controller: &OptionsController, theme: &LobbyTheme) {
    let panel = controller.player_panel();
    let focused = controller.focused_element();
    let mut lines = Vec::with_capacity(panel.rows.len() + 2);

    for row in &panel.rows {
        let marker = if row.is_local { "*" } else { " " };
        let mut spans = vec![
            Span::styled(
                format!("{marker}Player {:<3}", row.player.display_number()),
                theme.label(),
            ),
            Span::styled(format!("{:<9}", row.status.as_ref()), theme.read_only()),
            selector(&row.leader, controller.leader_options(), focused, theme),
            Span::raw(" "),
            selector(&row.civilization, controller.civilization_options(), focused, theme),
        ];
        if row.delete_enabled {
            let style = if focused == Some(row.delete) {
                theme.focused()
            } else {
                theme.value()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled("[Remove]", style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    if panel.add_enabled {
        let style = if focused == Some(panel.add) {
            theme.focused()
        } else {
            theme.value()
        };
        lines.push(Line::styled("[+ Add player]", style));
    }

    let title = format!("Players {}/{}", panel.rows.len(), panel.max_players);
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn selector<'a>(
    selector: &RosterSelector,
    options: &'a [RosterOption],
    focused: Option<client_frontend_core::ElementId>,
    theme: &LobbyTheme,
) -> Span<'a> {
    let label = selector
        .selected
        .and_then(|index| options.get(index))
        .map_or("Random", |option| option.label.as_str());
    let style = if focused == Some(selector.element) {
        theme.focused()
    } else {
        theme.value()
    };
    Span::styled(format!("< {label:<12} >"), style)
}

fn render_preview(frame: &mut Frame, area: Rect, controller: &OptionsController) {
    let selection = controller.local_selection();
    let mut text = Vec::new();

    let tooltip = |options: &[RosterOption], id: &str| {
        options
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.tooltip.clone())
    };
    if let Some(leader) = &selection.leader
        && let Some(tooltip) = tooltip(controller.leader_options(), leader.id.as_str())
    {
        text.extend(tooltip.lines().map(|line| Line::from(line.to_owned())));
        text.push(Line::from(""));
    }
    if let Some(civilization) = &selection.civilization
        && let Some(tooltip) = tooltip(controller.civilization_options(), civilization.id.as_str())
    {
        text.extend(tooltip.lines().map(|line| Line::from(line.to_owned())));
    }
    if text.is_empty() {
        text.push(Line::from("Pick a leader and civilization for your slot."));
    }

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Your Selection"));
    frame.render_widget(paragraph, area);
}
