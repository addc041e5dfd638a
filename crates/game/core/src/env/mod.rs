//! Contracts for reading and editing the game being configured.
//!
//! [`SetupStore`] is the single seam between presentation code and whatever
//! owns the configuration (an engine binding, the in-memory store, a test
//! fake). [`RosterOracle`] exposes the read-only leader and civilization
//! catalogs that player slots pick from.
mod roster;
mod strings;

pub use roster::{CivilizationBonus, CivilizationInfo, LeaderInfo, Roster};
pub use strings::StringTable;

use crate::error::SetupResult;
use crate::setup::{
    GameMode, Parameter, ParameterId, PlayerId, PlayerParameter, PlayerSlot, SetupValue,
    SlotStatus, TextKey,
};

/// Provides the leaders and civilizations available to player slots.
pub trait RosterOracle: Send + Sync {
    /// All selectable leaders, in presentation order.
    fn leaders(&self) -> Vec<LeaderInfo>;

    /// Civilizations selectable under the current configuration.
    ///
    /// The pool may depend on game parameters (e.g. the starting age), so
    /// callers should re-query after parameter edits.
    fn civilizations(&self) -> Vec<CivilizationInfo>;
}

/// Read/write access to the game configuration.
///
/// Every accessor returns an owned snapshot. Writes are keyed by identifier;
/// implementations bump [`SetupStore::revision`] on each successful mutation
/// so pollers can detect changes they did not cause themselves.
pub trait SetupStore: RosterOracle {
    /// Monotonically increasing counter, bumped on every mutation.
    fn revision(&self) -> u64;

    /// All game parameters, in the store's enumeration order.
    fn game_parameters(&self) -> Vec<Parameter>;

    /// Looks up a single parameter by identifier.
    fn find_game_parameter(&self, id: &ParameterId) -> Option<Parameter>;

    /// Requests a new value for a game parameter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SetupError`] if the parameter is unknown, read-only, or the
    /// value lies outside its domain.
    fn set_game_parameter_value(&self, id: &ParameterId, value: SetupValue) -> SetupResult<()>;

    /// Requests a new value for a per-player parameter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SetupError`] if the slot is unknown or closed, or the value
    /// does not name a roster entry.
    fn set_player_parameter_value(
        &self,
        player: PlayerId,
        key: PlayerParameter,
        value: SetupValue,
    ) -> SetupResult<()>;

    /// Resolves a localization key, `None` when the key is unknown.
    fn resolve_string(&self, key: &TextKey) -> Option<String>;

    /// Snapshot of a player slot, `None` outside `0..max_major_players`.
    fn player(&self, id: PlayerId) -> Option<PlayerSlot>;

    /// Opens or closes a player slot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SetupError::PlayerNotFound`] for unknown slots.
    fn set_slot_status(&self, id: PlayerId, status: SlotStatus) -> SetupResult<()>;

    /// Number of major player slots supported by the current map.
    fn max_major_players(&self) -> u32;

    /// Slot controlled by the local user.
    fn local_player_id(&self) -> PlayerId;

    /// Returns true when the game configuration accepts edits.
    fn is_game_editable(&self) -> bool {
        true
    }

    /// Restores every parameter and slot to the defaults of `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SetupError::GameNotReady`] when the configuration is not editable.
    fn reset(&self, mode: GameMode) -> SetupResult<()>;

    /// All player slots in ascending id order.
    fn players(&self) -> Vec<PlayerSlot> {
        (0..self.max_major_players())
            .filter_map(|id| self.player(PlayerId(id)))
            .collect()
    }
}
