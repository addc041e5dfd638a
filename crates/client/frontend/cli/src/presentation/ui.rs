//! UI rendering entry point composing the panel widgets.
use anyhow::Result;
use client_frontend_core::{OptionsController, PanelMode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    presentation::{terminal::Tui, theme::LobbyTheme, widgets},
    state::AppState,
};

/// Everything a frame needs; borrowed from the event loop.
pub(crate) struct RenderContext<'a> {
    pub controller: &'a OptionsController,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Draw the mounted panel.
pub(crate) fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Lays out header, mounted panel, messages and footer.
pub(crate) fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = LobbyTheme;
    let footer_height = if ctx.app_state.show_help { 6 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Panel
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(footer_height),            // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.controller, &theme);

    match ctx.controller.mode() {
        PanelMode::GameSetup => {
            widgets::options::render(frame, chunks[1], ctx.controller, ctx.app_state, &theme)
        }
        PanelMode::PlayerSetup => widgets::players::render(frame, chunks[1], ctx.controller, &theme),
    }

    let recent: Vec<_> = ctx
        .controller
        .messages()
        .recent(ctx.message_panel_height as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, chunks[2], &recent, ctx.message_panel_height, &theme);

    widgets::footer::render(frame, chunks[3], ctx.controller.mode(), ctx.app_state);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use client_frontend_core::{FrontendConfig, Navigation};
    use game_content::ContentFactory;
    use game_core::SetupStore;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use runtime::MemorySetupStore;

    use super::*;

    fn controller() -> OptionsController {
        let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../../data");
        let bundle = ContentFactory::new(data).load_all().unwrap();
        let store: Arc<dyn SetupStore> = Arc::new(MemorySetupStore::from_bundle(bundle));
        let mut controller = OptionsController::new(store, FrontendConfig::default());
        controller.attach();
        controller
    }

    fn screen(controller: &OptionsController, app_state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let ctx = RenderContext {
            controller,
            app_state,
            message_panel_height: 6,
        };
        terminal.draw(|frame| draw(frame, &ctx)).unwrap();
        text(terminal.backend().buffer())
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn game_setup_shows_section_headers_and_values() {
        let controller = controller();
        let screen = screen(&controller, &AppState::new());

        assert!(screen.contains("Game Options"));
        assert!(screen.contains("Victory Conditions"));
        assert!(screen.contains("Advanced Options"));
        assert!(screen.contains("Antiquity"));
    }

    #[test]
    fn player_setup_lists_active_slots() {
        let mut controller = controller();
        controller.navigate(Navigation::Next);
        let screen = screen(&controller, &AppState::new());

        assert!(screen.contains("Player 1"));
        assert!(screen.contains("Player 4"));
        assert!(!screen.contains("Player 5"));
        assert!(screen.contains("Augustus"));
    }
}
