//! Top-level client wiring a configuration store to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Store (game configuration, shared handle)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The store is built independently (see `client-bootstrap`) and handed to
//! the frontend as an `Arc<dyn SetupStore>`; the frontend never owns it.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::{Frontend, LaunchSummary, PanelRequest};

use std::sync::Arc;

use anyhow::Result;
use game_core::SetupStore;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives the store handle and the frontend
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. The frontend's request is returned once the user leaves the panel
pub struct Client {
    store: Arc<dyn SetupStore>,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user leaves the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<PanelRequest> {
        let mut frontend = self.frontend;
        let request = frontend.run(Arc::clone(&self.store)).await?;

        match &request {
            PanelRequest::StartGame(summary) => tracing::info!(
                "Starting game with {} options and {} players (revision {})",
                summary.options.len(),
                summary.players.len(),
                self.store.revision()
            ),
            PanelRequest::Back => tracing::info!("Left the options panel"),
        }

        Ok(request)
    }
}

/// Human-readable launch summary printed after the terminal is restored.
pub fn format_summary(summary: &LaunchSummary) -> String {
    let mut out = String::from("Game options:\n");
    for line in &summary.options {
        out.push_str(&format!("  [{}] {}: {}\n", line.bucket, line.label, line.value));
    }
    out.push_str("Players:\n");
    for slot in &summary.players {
        let leader = slot.leader.as_ref().map_or("random", |id| id.as_str());
        let civilization = slot.civilization.as_ref().map_or("random", |id| id.as_str());
        out.push_str(&format!(
            "  Player {} ({}): {} / {}\n",
            slot.id.display_number(),
            slot.status,
            leader,
            civilization
        ));
    }
    out
}
