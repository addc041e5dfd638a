/// Lobby configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Player slot count used when the map size has no explicit entry.
    pub default_max_major_players: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// A game never starts with fewer active slots than this.
    pub const MIN_ACTIVE_PLAYERS: usize = 2;
    /// Hard ceiling on major player slots regardless of map size.
    pub const MAX_MAJOR_PLAYERS: u32 = 12;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_MAJOR_PLAYERS: u32 = 8;

    pub fn new() -> Self {
        Self {
            default_max_major_players: Self::DEFAULT_MAX_MAJOR_PLAYERS,
        }
    }

    pub fn with_default_max_major_players(default_max_major_players: u32) -> Self {
        Self {
            default_max_major_players: default_max_major_players.min(Self::MAX_MAJOR_PLAYERS),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
