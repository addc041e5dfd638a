//! Setup catalog loader.

use std::path::Path;

use game_core::SetupCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for the setup catalog from RON files.
pub struct SetupLoader;

impl SetupLoader {
    /// Load and validate a setup catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`SetupCatalog`]
    pub fn load(path: &Path) -> LoadResult<SetupCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate a setup catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<SetupCatalog> {
        let catalog: SetupCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse setup catalog RON: {}", e))?;

        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid setup catalog: {}", e))?;

        tracing::debug!(
            parameters = catalog.parameters.len(),
            slots = catalog.slots.len(),
            "loaded setup catalog"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{DomainKind, PlayerId, SetupValue, SlotStatus};

    use super::*;

    const CATALOG: &str = r#"
(
    parameters: [
        (
            id: "Age",
            name: "LOC_AGE_NAME",
            domain: Select,
            values: [
                (value: Text("AGE_ANTIQUITY"), name: "LOC_AGE_ANTIQUITY_NAME"),
                (value: Text("AGE_MODERN"), name: "LOC_AGE_MODERN_NAME"),
            ],
            default: Text("AGE_ANTIQUITY"),
        ),
        (
            id: "GameRandomSeed",
            name: "LOC_GAME_SEED_NAME",
            description: Some("LOC_GAME_SEED_DESC"),
            domain: Integer,
            default: Int(1234),
        ),
    ],
    slots: [
        (status: Human, leader: Some("LEADER_AUGUSTUS")),
        (status: Computer),
        (status: Closed),
    ],
    local_player: 0,
    map_players: { "MAPSIZE_TINY": 4 },
)
"#;

    #[test]
    fn parses_catalog() {
        let catalog = SetupLoader::parse(CATALOG).unwrap();
        assert_eq!(catalog.parameters.len(), 2);
        assert_eq!(catalog.parameters[1].domain, DomainKind::Integer);
        assert_eq!(catalog.parameters[1].default, SetupValue::Int(1234));
        assert_eq!(catalog.slots[2].status, SlotStatus::Closed);
        assert_eq!(catalog.local_player, PlayerId(0));
        assert_eq!(catalog.map_players.get("MAPSIZE_TINY"), Some(&4));
    }

    #[test]
    fn rejects_invalid_default() {
        let broken = CATALOG.replace("default: Text(\"AGE_ANTIQUITY\")", "default: Text(\"AGE_NONE\")");
        let error = SetupLoader::parse(&broken).unwrap_err();
        assert!(error.to_string().contains("Invalid setup catalog"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.ron");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = SetupLoader::load(&path).unwrap();
        assert_eq!(catalog.slots.len(), 3);
    }
}
