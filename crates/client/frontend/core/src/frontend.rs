//! Trait describing a runnable lobby front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use game_core::SetupStore;

use crate::controller::PanelRequest;

/// Frontend abstraction for UI layers.
///
/// Frontends read and edit the configuration exclusively through the
/// injected store handle; they never own the store.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use std::sync::Arc;
///
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, FrontendConfig, OptionsController, PanelRequest};
/// use game_core::SetupStore;
///
/// struct Headless;
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, store: Arc<dyn SetupStore>) -> Result<PanelRequest> {
///         let mut controller = OptionsController::new(store, FrontendConfig::default());
///         controller.attach();
///         controller.tick();
///         Ok(controller.start_game())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user leaves the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, store: Arc<dyn SetupStore>) -> Result<PanelRequest>;
}
