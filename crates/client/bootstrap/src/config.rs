//! Lobby bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameMode;

/// Configuration required to bootstrap the lobby store.
#[derive(Clone, Debug)]
pub struct SetupConfig {
    /// Directory holding `setup.ron`, `roster.ron`, `strings.toml` and `config.toml`.
    pub data_dir: PathBuf,
    /// Mode the configuration is reset for on startup.
    pub game_mode: GameMode,
}

impl SetupConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    pub fn new(data_dir: impl Into<PathBuf>, game_mode: GameMode) -> Self {
        Self {
            data_dir: data_dir.into(),
            game_mode,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOBBY_DATA_DIR` - Content directory (default: `data`)
    /// - `LOBBY_GAME_MODE` - `singleplayer` or `multiplayer` (default: singleplayer)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("LOBBY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(raw) = env::var("LOBBY_GAME_MODE") {
            match raw.parse::<GameMode>() {
                Ok(mode) => config.game_mode = mode,
                Err(_) => tracing::warn!("Ignoring unknown LOBBY_GAME_MODE `{}`", raw),
            }
        }

        config
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DATA_DIR, GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bundled_data_dir() {
        let config = SetupConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.game_mode, GameMode::SinglePlayer);
    }
}
