//! Glue code tying the store handle, the options controller and the terminal together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use game_core::SetupStore;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, OptionsController, PanelRequest};

/// Terminal frontend for the advanced options panel.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, store: Arc<dyn SetupStore>) -> Result<PanelRequest> {
        tracing::info!("CLI options panel starting...");

        let mut controller = OptionsController::new(store, self.frontend_config.clone());
        controller.attach();
        let event_loop = EventLoop::new(controller, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let request = event_loop.run(&mut terminal).await?;

        tracing::info!("CLI options panel exiting");
        Ok(request)
    }
}
