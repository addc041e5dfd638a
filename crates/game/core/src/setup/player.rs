use super::{CivilizationId, LeaderId, PlayerId};

/// Occupancy of a major player slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotStatus {
    /// Slot is not part of the game.
    #[default]
    Closed,
    /// Slot is played by the AI.
    Computer,
    /// Slot is played by a person.
    Human,
}

impl SlotStatus {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Per-player parameter keys understood by [`crate::SetupStore::set_player_parameter_value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum PlayerParameter {
    #[strum(serialize = "PlayerLeader")]
    Leader,
    #[strum(serialize = "PlayerCivilization")]
    Civilization,
}

/// Snapshot of one major player slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSlot {
    pub id: PlayerId,
    pub status: SlotStatus,
    pub leader: Option<LeaderId>,
    pub civilization: Option<CivilizationId>,
}

impl PlayerSlot {
    pub fn new(id: PlayerId, status: SlotStatus) -> Self {
        Self {
            id,
            status,
            leader: None,
            civilization: None,
        }
    }

    #[must_use]
    pub fn with_leader(mut self, leader: impl Into<LeaderId>) -> Self {
        self.leader = Some(leader.into());
        self
    }

    #[must_use]
    pub fn with_civilization(mut self, civilization: impl Into<CivilizationId>) -> Self {
        self.civilization = Some(civilization.into());
        self
    }

    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Mode the configuration is reset for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    #[strum(to_string = "single_player", serialize = "singleplayer")]
    SinglePlayer,
    Multiplayer,
}
