//! Colors and modifiers for the options panel.

use client_frontend_core::{Bucket, MessageLevel};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules shared by every widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct LobbyTheme;

impl LobbyTheme {
    pub fn bucket_header(&self, bucket: Bucket) -> Style {
        let color = match bucket {
            Bucket::Standard => Color::Yellow,
            Bucket::Victory => Color::LightGreen,
            Bucket::Progression => Color::LightCyan,
            Bucket::Advanced => Color::LightMagenta,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn focused(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn read_only(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn editing(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::LightRed),
        }
    }
}
