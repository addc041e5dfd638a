//! Content loaders for reading setup data from files.
//!
//! Each loader converts one RON/TOML file into game-core types; the
//! [`ContentFactory`] ties them to a data directory.

pub mod config;
pub mod factory;
pub mod roster;
pub mod setup;
pub mod strings;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use roster::RosterLoader;
pub use setup::SetupLoader;
pub use strings::StringsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
