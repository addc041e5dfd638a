//! Frame loop driving the options controller and the terminal.
//!
//! Every frame the loop:
//! - ticks the controller so it can rebuild after store changes
//! - drains at most one pending key press
//! - redraws when anything visible changed

use anyhow::Result;
use client_frontend_core::{OptionsController, PanelRequest, TickStatus};
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};

/// Event loop owning the controller for the lifetime of the panel.
pub struct EventLoop {
    pub(crate) controller: OptionsController,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    /// CLI UI configuration
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(controller: OptionsController, cli_config: CliConfig) -> Self {
        Self {
            controller,
            input: InputHandler::new(),
            app_state: AppState::new(),
            cli_config,
        }
    }

    /// Runs until the user leaves the panel; the controller is detached on return.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<PanelRequest> {
        if !self.controller.is_attached() {
            self.controller.attach();
        }
        self.render(terminal)?;

        let frame = Duration::from_millis(self.cli_config.ui.frame_interval_ms);
        let request = loop {
            let outcome = tokio::select! {
                _ = time::sleep(frame) => self.handle_frame(terminal)?,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, leaving options panel");
                    Some(PanelRequest::Back)
                }
            };
            if let Some(request) = outcome {
                break request;
            }
        };

        self.controller.detach();
        Ok(request)
    }

    fn handle_frame(&mut self, terminal: &mut Tui) -> Result<Option<PanelRequest>> {
        match self.controller.tick() {
            TickStatus::Detached => return Ok(Some(PanelRequest::Back)),
            TickStatus::Rebuilt => self.render(terminal)?,
            TickStatus::Idle => {}
        }
        self.handle_input_tick(terminal)
    }
}
