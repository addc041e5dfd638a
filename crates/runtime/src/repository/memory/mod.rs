//! In-memory [`SetupStore`] for local lobbies and tests.

mod state;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use game_content::ContentBundle;
use game_core::{
    CivilizationInfo, GameConfig, GameMode, LeaderInfo, Parameter, ParameterId, PlayerId,
    PlayerParameter, PlayerSlot, Roster, RosterOracle, SetupCatalog, SetupResult, SetupStore,
    SetupValue, SlotStatus, StringTable, TextKey,
};

use crate::oracle::RosterOracleImpl;
use state::SetupState;

/// Revisioned configuration held behind a shared lock.
///
/// Clones share the same state, so a host can hand one handle to the
/// presentation layer and keep another for itself.
#[derive(Clone)]
pub struct MemorySetupStore {
    state: Arc<RwLock<SetupState>>,
    strings: Arc<StringTable>,
}

impl MemorySetupStore {
    pub fn new(
        config: GameConfig,
        catalog: SetupCatalog,
        roster: Roster,
        strings: StringTable,
    ) -> Self {
        let state = SetupState::new(catalog, config, RosterOracleImpl::new(roster));
        Self {
            state: Arc::new(RwLock::new(state)),
            strings: Arc::new(strings),
        }
    }

    /// Builds a store from content loaded by [`game_content::ContentFactory`].
    pub fn from_bundle(bundle: ContentBundle) -> Self {
        Self::new(bundle.config, bundle.catalog, bundle.roster, bundle.strings)
    }

    /// Mode passed to the most recent reset.
    pub fn game_mode(&self) -> GameMode {
        self.read().mode()
    }

    /// Locks or unlocks the configuration for edits.
    pub fn set_editable(&self, editable: bool) {
        self.write().set_editable(editable);
    }

    fn read(&self) -> RwLockReadGuard<'_, SetupState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SetupState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn log_write(&self, what: &str, changed: bool) {
        if changed {
            tracing::debug!("{} committed, revision {}", what, self.revision());
        }
    }
}

impl std::fmt::Debug for MemorySetupStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySetupStore")
            .field("revision", &self.revision())
            .field("strings", &self.strings.len())
            .finish()
    }
}

impl RosterOracle for MemorySetupStore {
    fn leaders(&self) -> Vec<LeaderInfo> {
        self.read().roster().leaders()
    }

    /// Civilizations of the currently selected age.
    fn civilizations(&self) -> Vec<CivilizationInfo> {
        let state = self.read();
        let age = state.age();
        state.roster().civilizations_in(age.as_deref())
    }
}

impl SetupStore for MemorySetupStore {
    fn revision(&self) -> u64 {
        self.read().revision()
    }

    fn game_parameters(&self) -> Vec<Parameter> {
        self.read().parameters()
    }

    fn find_game_parameter(&self, id: &ParameterId) -> Option<Parameter> {
        self.read().parameter(id)
    }

    fn set_game_parameter_value(&self, id: &ParameterId, value: SetupValue) -> SetupResult<()> {
        let changed = self.write().set_parameter(id, value)?;
        self.log_write(id.as_str(), changed);
        Ok(())
    }

    fn set_player_parameter_value(
        &self,
        player: PlayerId,
        key: PlayerParameter,
        value: SetupValue,
    ) -> SetupResult<()> {
        let changed = self.write().set_player_parameter(player, key, value)?;
        self.log_write(key.as_ref(), changed);
        Ok(())
    }

    fn resolve_string(&self, key: &TextKey) -> Option<String> {
        self.strings.resolve(key).map(str::to_owned)
    }

    fn player(&self, id: PlayerId) -> Option<PlayerSlot> {
        self.read().player(id)
    }

    fn set_slot_status(&self, id: PlayerId, status: SlotStatus) -> SetupResult<()> {
        let changed = self.write().set_slot_status(id, status)?;
        self.log_write("slot status", changed);
        Ok(())
    }

    fn max_major_players(&self) -> u32 {
        self.read().max_major_players()
    }

    fn local_player_id(&self) -> PlayerId {
        self.read().local_player()
    }

    fn is_game_editable(&self) -> bool {
        self.read().is_editable()
    }

    fn reset(&self, mode: GameMode) -> SetupResult<()> {
        self.write().reset(mode)?;
        tracing::info!("Configuration reset for {} (revision {})", mode, self.revision());
        Ok(())
    }
}
