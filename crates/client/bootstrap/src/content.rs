//! Sources of setup content consumed by the store.
use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::{ContentBundle, ContentFactory};

pub trait ContentSource: Send + Sync {
    fn load(&self) -> Result<ContentBundle>;
}

/// Content source that loads setup files from a data directory.
///
/// This source uses the game-content crate's loaders to read RON/TOML files.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── setup.ron
/// ├── roster.ron
/// └── strings.toml
/// ```
#[derive(Clone, Debug)]
pub struct DirectoryContent {
    data_dir: PathBuf,
}

impl DirectoryContent {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves `data_dir` against the working directory, falling back to the
    /// directory next to the executable when the former does not exist.
    pub fn resolve(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        if data_dir.is_absolute() || data_dir.exists() {
            return Self::new(data_dir);
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(&data_dir)))
            .filter(|candidate| candidate.exists());

        Self::new(beside_exe.unwrap_or(data_dir))
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }
}

impl ContentSource for DirectoryContent {
    fn load(&self) -> Result<ContentBundle> {
        tracing::info!("Loading setup content from {}", self.data_dir.display());
        ContentFactory::new(&self.data_dir)
            .load_all()
            .with_context(|| format!("Failed to load content from {}", self.data_dir.display()))
    }
}

/// Content that is already in memory, for tests and embedded hosts.
#[derive(Clone, Debug)]
pub struct BundledContent {
    bundle: ContentBundle,
}

impl BundledContent {
    pub fn new(bundle: ContentBundle) -> Self {
        Self { bundle }
    }
}

impl ContentSource for BundledContent {
    fn load(&self) -> Result<ContentBundle> {
        Ok(self.bundle.clone())
    }
}
