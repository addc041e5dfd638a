//! Frontend configuration structures and loaders.
//!
//! This module contains panel settings shared across frontend
//! implementations (terminal, graphical, etc.).

use std::env;

use game_core::GameMode;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    /// Mode passed to the store when the user resets to defaults.
    pub reset_mode: GameMode,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, reset_mode: GameMode) -> Self {
        Self {
            messages,
            reset_mode,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOBBY_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `LOBBY_RESET_MODE` - Mode used by "reset to defaults" (default: singleplayer)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("LOBBY_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(mode) = read_env::<GameMode>("LOBBY_RESET_MODE") {
            config.reset_mode = mode;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 32 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
