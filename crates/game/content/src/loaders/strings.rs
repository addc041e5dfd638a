//! Localization table loader.

use std::path::Path;

use game_core::StringTable;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// On-disk layout: a single `[strings]` table of key/text pairs.
#[derive(Debug, Deserialize)]
struct StringsFile {
    #[serde(default)]
    strings: StringTable,
}

/// Loader for localization strings from TOML files.
pub struct StringsLoader;

impl StringsLoader {
    pub fn load(path: &Path) -> LoadResult<StringTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StringTable> {
        let file: StringsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse strings TOML: {}", e))?;

        Ok(file.strings)
    }
}
