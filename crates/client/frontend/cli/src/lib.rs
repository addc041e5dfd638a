//! Terminal UI frontend for the lobby's advanced options panel.
//!
//! This crate renders the game-setup and player-setup panels with ratatui
//! and routes crossterm key presses into the shared
//! [`client_frontend_core::OptionsController`].
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a `SetupStore` handle for every read and write
//! - Does NOT own the store
//! - Polls the store revision once per frame through the controller

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used by the lobby binary)
pub use client_frontend_core::FrontendConfig;
