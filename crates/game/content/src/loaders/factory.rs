//! Content factory for loading every setup file from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, Roster, SetupCatalog, StringTable};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, SetupLoader, StringsLoader};

/// All content a store needs, loaded in one go.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub catalog: SetupCatalog,
    pub roster: Roster,
    pub strings: StringTable,
}

/// Content factory that loads setup content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml     (optional)
/// ├── setup.ron
/// ├── roster.ron
/// └── strings.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load lobby configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("{} not found, using default config", path.display());
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the setup catalog from `setup.ron`.
    pub fn load_catalog(&self) -> LoadResult<SetupCatalog> {
        SetupLoader::load(&self.data_dir.join("setup.ron"))
    }

    /// Load leaders and civilizations from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load localization strings from `strings.toml`.
    pub fn load_strings(&self) -> LoadResult<StringTable> {
        StringsLoader::load(&self.data_dir.join("strings.toml"))
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            catalog: self.load_catalog()?,
            roster: self.load_roster()?,
            strings: self.load_strings()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
