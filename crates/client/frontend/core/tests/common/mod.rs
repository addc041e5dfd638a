//! Scriptable [`SetupStore`] used by the controller tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use client_frontend_core::{FrontendConfig, OptionsController};
use game_core::{
    CivilizationInfo, Domain, DomainKind, GameMode, LeaderInfo, Parameter, ParameterId, PlayerId,
    PlayerParameter, PlayerSlot, PossibleValue, RosterOracle, SetupError, SetupResult, SetupStore,
    SetupValue, SlotStatus, TextKey,
};

#[derive(Default)]
struct Inner {
    revision: u64,
    parameters: Vec<Parameter>,
    slots: Vec<PlayerSlot>,
    strings: HashMap<String, String>,
    leaders: Vec<LeaderInfo>,
    civilizations: Vec<CivilizationInfo>,
    local: PlayerId,
    locked: bool,
    writes: Vec<(ParameterId, SetupValue)>,
    player_writes: Vec<(PlayerId, PlayerParameter, SetupValue)>,
    resets: Vec<GameMode>,
}

#[derive(Default)]
pub struct FakeStore {
    inner: Mutex<Inner>,
}

impl FakeStore {
    pub fn new() -> Self {
        let store = Self::default();
        store.lock().revision = 1;
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn with_parameter(self, parameter: Parameter) -> Self {
        {
            let mut inner = self.lock();
            inner
                .strings
                .entry(parameter.name.to_string())
                .or_insert_with(|| parameter.id.to_string());
            for possible in &parameter.domain.possible_values {
                inner
                    .strings
                    .entry(possible.name.to_string())
                    .or_insert_with(|| possible.value.to_string());
            }
            inner.parameters.push(parameter);
        }
        self
    }

    pub fn with_slots(self, statuses: &[SlotStatus]) -> Self {
        self.lock().slots = statuses
            .iter()
            .enumerate()
            .map(|(index, status)| PlayerSlot::new(PlayerId(index as u32), *status))
            .collect();
        self
    }

    pub fn with_local(self, local: PlayerId) -> Self {
        self.lock().local = local;
        self
    }

    pub fn with_leader(self, id: &str, name: &str) -> Self {
        self.lock().leaders.push(LeaderInfo::new(id, id));
        self.with_string(id, name)
    }

    pub fn with_civilization(self, id: &str, name: &str) -> Self {
        self.lock()
            .civilizations
            .push(CivilizationInfo::new(id, id));
        self.with_string(id, name)
    }

    pub fn with_string(self, key: &str, text: &str) -> Self {
        self.lock().strings.insert(key.to_owned(), text.to_owned());
        self
    }

    pub fn without_string(self, key: &str) -> Self {
        self.lock().strings.remove(key);
        self
    }

    pub fn lock_edits(&self) {
        self.lock().locked = true;
    }

    /// Changes a value the way another part of the host would.
    pub fn set_externally(&self, id: &str, value: SetupValue) {
        let mut inner = self.lock();
        if let Some(parameter) = inner.parameters.iter_mut().find(|p| p.id == id) {
            parameter.value.value = value;
        }
        inner.revision += 1;
    }

    pub fn bump(&self) {
        self.lock().revision += 1;
    }

    pub fn writes(&self) -> Vec<(ParameterId, SetupValue)> {
        self.lock().writes.clone()
    }

    pub fn player_writes(&self) -> Vec<(PlayerId, PlayerParameter, SetupValue)> {
        self.lock().player_writes.clone()
    }

    pub fn resets(&self) -> Vec<GameMode> {
        self.lock().resets.clone()
    }

    pub fn value(&self, id: &str) -> Option<SetupValue> {
        self.lock()
            .parameters
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.value.value.clone())
    }

    pub fn slot_status(&self, id: u32) -> SlotStatus {
        self.lock().slots[id as usize].status
    }
}

impl RosterOracle for FakeStore {
    fn leaders(&self) -> Vec<LeaderInfo> {
        self.lock().leaders.clone()
    }

    fn civilizations(&self) -> Vec<CivilizationInfo> {
        self.lock().civilizations.clone()
    }
}

impl SetupStore for FakeStore {
    fn revision(&self) -> u64 {
        self.lock().revision
    }

    fn game_parameters(&self) -> Vec<Parameter> {
        self.lock().parameters.clone()
    }

    fn find_game_parameter(&self, id: &ParameterId) -> Option<Parameter> {
        self.lock().parameters.iter().find(|p| &p.id == id).cloned()
    }

    fn set_game_parameter_value(&self, id: &ParameterId, value: SetupValue) -> SetupResult<()> {
        let mut inner = self.lock();
        if inner.locked {
            return Err(SetupError::GameNotReady);
        }
        let parameter = inner
            .parameters
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| SetupError::ParameterNotFound(id.clone()))?;
        if parameter.read_only {
            return Err(SetupError::ReadOnly(id.clone()));
        }
        parameter.value.name = parameter
            .domain
            .index_of(&value)
            .map(|index| parameter.domain.possible_values[index].name.clone());
        parameter.value.value = value.clone();
        inner.writes.push((id.clone(), value));
        inner.revision += 1;
        Ok(())
    }

    fn set_player_parameter_value(
        &self,
        player: PlayerId,
        key: PlayerParameter,
        value: SetupValue,
    ) -> SetupResult<()> {
        let mut inner = self.lock();
        if inner.locked {
            return Err(SetupError::GameNotReady);
        }
        let slot = inner
            .slots
            .get_mut(player.0 as usize)
            .ok_or(SetupError::PlayerNotFound(player))?;
        match key {
            PlayerParameter::Leader => slot.leader = Some(value.to_string().into()),
            PlayerParameter::Civilization => slot.civilization = Some(value.to_string().into()),
        }
        inner.player_writes.push((player, key, value));
        inner.revision += 1;
        Ok(())
    }

    fn resolve_string(&self, key: &TextKey) -> Option<String> {
        self.lock().strings.get(key.as_str()).cloned()
    }

    fn player(&self, id: PlayerId) -> Option<PlayerSlot> {
        self.lock().slots.get(id.0 as usize).cloned()
    }

    fn set_slot_status(&self, id: PlayerId, status: SlotStatus) -> SetupResult<()> {
        let mut inner = self.lock();
        if inner.locked {
            return Err(SetupError::GameNotReady);
        }
        let slot = inner
            .slots
            .get_mut(id.0 as usize)
            .ok_or(SetupError::PlayerNotFound(id))?;
        slot.status = status;
        inner.revision += 1;
        Ok(())
    }

    fn max_major_players(&self) -> u32 {
        self.lock().slots.len() as u32
    }

    fn local_player_id(&self) -> PlayerId {
        self.lock().local
    }

    fn is_game_editable(&self) -> bool {
        !self.lock().locked
    }

    fn reset(&self, mode: GameMode) -> SetupResult<()> {
        let mut inner = self.lock();
        inner.resets.push(mode);
        inner.revision += 1;
        Ok(())
    }
}

// ============================================================================
// Parameter fixtures
// ============================================================================

pub fn select(id: &str, values: &[&str], current: &str) -> Parameter {
    let possible = values
        .iter()
        .map(|value| PossibleValue::new(*value, format!("LOC_{value}")))
        .collect();
    let mut parameter = Parameter::new(id, format!("LOC_{id}_NAME"), Domain::select(possible), current);
    parameter.value.name = Some(format!("LOC_{current}").into());
    parameter
}

pub fn boolean(id: &str, value: bool) -> Parameter {
    Parameter::new(id, format!("LOC_{id}_NAME"), Domain::new(DomainKind::Boolean), value)
}

pub fn integer(id: &str, value: i64) -> Parameter {
    Parameter::new(id, format!("LOC_{id}_NAME"), Domain::new(DomainKind::Integer), value)
}

pub fn text(id: &str, value: &str) -> Parameter {
    Parameter::new(id, format!("LOC_{id}_NAME"), Domain::new(DomainKind::Text), value)
}

/// Store holding a parameter for every bucket plus one that is never shown.
pub fn lobby_store() -> FakeStore {
    FakeStore::new()
        .with_parameter(select(
            "AgeLength",
            &["AGE_LENGTH_SHORT", "AGE_LENGTH_STANDARD", "AGE_LENGTH_LONG"],
            "AGE_LENGTH_STANDARD",
        ))
        .with_parameter(boolean("MilitaryVictoryEnabled", true))
        .with_parameter(select("Difficulty", &["DIFFICULTY_PRINCE", "DIFFICULTY_DEITY"], "DIFFICULTY_PRINCE"))
        .with_parameter(integer("GameRandomSeed", 1337))
        .with_parameter(boolean("AgeProgressionFromPlayerEliminatedEnabled", false))
        .with_parameter(text("Ruleset", "RULESET_STANDARD"))
        .with_parameter(select("Age", &["AGE_ANTIQUITY", "AGE_MODERN"], "AGE_ANTIQUITY"))
        .with_slots(&[SlotStatus::Human, SlotStatus::Computer, SlotStatus::Closed])
}

pub fn controller(store: &Arc<FakeStore>) -> OptionsController<FakeStore> {
    let mut controller = OptionsController::new(Arc::clone(store), FrontendConfig::default());
    controller.attach();
    controller
}
