//! Leader and civilization roster loader.

use std::path::Path;

use game_core::Roster;

use crate::loaders::{LoadResult, read_file};

/// Loader for the roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        tracing::debug!(
            leaders = roster.leaders.len(),
            civilizations = roster.civilizations.len(),
            "loaded roster"
        );

        Ok(roster)
    }
}
