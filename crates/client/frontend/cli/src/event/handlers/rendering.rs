//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the mounted panel.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            controller: &self.controller,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
