//! Lobby configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for lobby configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(GameConfig::with_default_max_major_players(
            config.default_max_major_players,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn clamps_player_count_to_hard_ceiling() {
        let config = ConfigLoader::parse("default_max_major_players = 64").unwrap();
        assert_eq!(
            config.default_max_major_players,
            GameConfig::MAX_MAJOR_PLAYERS
        );
    }
}
