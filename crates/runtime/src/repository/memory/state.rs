//! Mutable configuration behind [`super::MemorySetupStore`].

use game_core::{
    DomainKind, GameConfig, GameMode, Parameter, ParameterId, ParameterSpec, PlayerId,
    PlayerParameter, PlayerSlot, SetupCatalog, SetupError, SetupResult, SetupValue, SlotStatus,
};

use crate::oracle::RosterOracleImpl;

/// Parameter whose value selects the civilization pool.
pub(crate) const AGE: &str = "Age";
/// Parameter whose value selects the slot count through `map_players`.
pub(crate) const MAP_SIZE: &str = "MapSize";

/// Live parameter values and slot occupancy.
///
/// `values[i]` always holds the current value of `catalog.parameters[i]`.
#[derive(Clone, Debug)]
pub(crate) struct SetupState {
    catalog: SetupCatalog,
    config: GameConfig,
    roster: RosterOracleImpl,
    values: Vec<SetupValue>,
    slots: Vec<PlayerSlot>,
    mode: GameMode,
    revision: u64,
    editable: bool,
}

impl SetupState {
    pub(crate) fn new(catalog: SetupCatalog, config: GameConfig, roster: RosterOracleImpl) -> Self {
        let values = default_values(&catalog);
        let slots = default_slots(&catalog);
        Self {
            catalog,
            config,
            roster,
            values,
            slots,
            mode: GameMode::default(),
            revision: 1,
            editable: true,
        }
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn mode(&self) -> GameMode {
        self.mode
    }

    pub(crate) fn roster(&self) -> &RosterOracleImpl {
        &self.roster
    }

    pub(crate) fn is_editable(&self) -> bool {
        self.editable
    }

    pub(crate) fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub(crate) fn local_player(&self) -> PlayerId {
        self.catalog.local_player
    }

    pub(crate) fn value_of(&self, id: &str) -> Option<&SetupValue> {
        self.position(id).map(|index| &self.values[index])
    }

    /// Text form of the current `Age` value.
    pub(crate) fn age(&self) -> Option<String> {
        self.value_of(AGE).map(ToString::to_string)
    }

    pub(crate) fn parameters(&self) -> Vec<Parameter> {
        self.catalog
            .parameters
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| self.snapshot(spec, value))
            .collect()
    }

    pub(crate) fn parameter(&self, id: &ParameterId) -> Option<Parameter> {
        let index = self.position(id.as_str())?;
        Some(self.snapshot(&self.catalog.parameters[index], &self.values[index]))
    }

    /// Stores `value` for parameter `id`.
    ///
    /// Returns whether the stored value changed.
    pub(crate) fn set_parameter(&mut self, id: &ParameterId, value: SetupValue) -> SetupResult<bool> {
        self.ensure_editable()?;
        let index = self
            .position(id.as_str())
            .ok_or_else(|| SetupError::ParameterNotFound(id.clone()))?;
        let spec = &self.catalog.parameters[index];
        if spec.read_only {
            return Err(SetupError::ReadOnly(id.clone()));
        }
        let value = normalize(spec.domain, value);
        if !spec.domain().accepts(&value) {
            return Err(SetupError::ValueOutOfDomain {
                parameter: id.clone(),
                value: value.to_string(),
            });
        }
        if self.values[index] == value {
            return Ok(false);
        }

        self.values[index] = value;
        match id.as_str() {
            MAP_SIZE => self.close_slots_beyond_map(),
            AGE => self.drop_unavailable_civilizations(),
            _ => {}
        }
        self.bump();
        Ok(true)
    }

    pub(crate) fn set_player_parameter(
        &mut self,
        player: PlayerId,
        key: PlayerParameter,
        value: SetupValue,
    ) -> SetupResult<bool> {
        self.ensure_editable()?;
        let entry = match value {
            SetupValue::Text(entry) => entry,
            other => {
                return Err(SetupError::ValueOutOfDomain {
                    parameter: ParameterId::from(key.as_ref()),
                    value: other.to_string(),
                });
            }
        };

        let known = match key {
            PlayerParameter::Leader => self.roster.leader(&entry.as_str().into()).is_some(),
            PlayerParameter::Civilization => {
                let age = self.age();
                self.roster
                    .civilization(&entry.as_str().into())
                    .is_some_and(|civ| civ.available_in(age.as_deref()))
            }
        };
        if !known {
            return Err(SetupError::UnknownRosterEntry(entry));
        }

        let slot = self.active_slot_mut(player)?;
        let changed = match key {
            PlayerParameter::Leader => replace(&mut slot.leader, entry.into()),
            PlayerParameter::Civilization => replace(&mut slot.civilization, entry.into()),
        };
        if changed {
            self.bump();
        }
        Ok(changed)
    }

    pub(crate) fn player(&self, id: PlayerId) -> Option<PlayerSlot> {
        if id.0 >= self.max_major_players() {
            return None;
        }
        self.slots.get(id.0 as usize).cloned()
    }

    pub(crate) fn set_slot_status(&mut self, id: PlayerId, status: SlotStatus) -> SetupResult<bool> {
        self.ensure_editable()?;
        if id.0 >= self.max_major_players() {
            return Err(SetupError::PlayerNotFound(id));
        }
        let slot = self
            .slots
            .get_mut(id.0 as usize)
            .ok_or(SetupError::PlayerNotFound(id))?;
        if slot.status == status {
            return Ok(false);
        }
        slot.status = status;
        self.bump();
        Ok(true)
    }

    /// Slot count for the current map size, capped by the catalog's slot layout.
    pub(crate) fn max_major_players(&self) -> u32 {
        let per_map = self
            .value_of(MAP_SIZE)
            .and_then(|size| self.catalog.map_players.get(&size.to_string()))
            .copied()
            .unwrap_or(self.config.default_max_major_players);
        let declared = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        per_map.min(GameConfig::MAX_MAJOR_PLAYERS).min(declared)
    }

    pub(crate) fn reset(&mut self, mode: GameMode) -> SetupResult<()> {
        self.ensure_editable()?;
        self.values = default_values(&self.catalog);
        self.slots = default_slots(&self.catalog);
        self.mode = mode;
        self.bump();
        Ok(())
    }

    fn ensure_editable(&self) -> SetupResult<()> {
        if self.editable {
            Ok(())
        } else {
            Err(SetupError::GameNotReady)
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.catalog
            .parameters
            .iter()
            .position(|spec| spec.id == id)
    }

    fn snapshot(&self, spec: &ParameterSpec, value: &SetupValue) -> Parameter {
        let mut parameter = spec.instantiate(value.clone());
        parameter.hidden = spec.hidden || !self.is_rule_satisfied(spec);
        parameter
    }

    fn is_rule_satisfied(&self, spec: &ParameterSpec) -> bool {
        match &spec.visible_when {
            None => true,
            Some(rule) => self
                .value_of(rule.parameter.as_str())
                .is_some_and(|current| current == &rule.equals),
        }
    }

    fn active_slot_mut(&mut self, id: PlayerId) -> SetupResult<&mut PlayerSlot> {
        if id.0 >= self.max_major_players() {
            return Err(SetupError::PlayerNotFound(id));
        }
        let slot = self
            .slots
            .get_mut(id.0 as usize)
            .ok_or(SetupError::PlayerNotFound(id))?;
        if !slot.is_active() {
            return Err(SetupError::SlotClosed(id));
        }
        Ok(slot)
    }

    /// Closes every slot the new map size no longer supports, except the local one.
    ///
    /// Closed slots below the new maximum are reopened as computer players
    /// until the lobby holds at least [`GameConfig::MIN_ACTIVE_PLAYERS`].
    fn close_slots_beyond_map(&mut self) {
        let max = self.max_major_players();
        let local = self.catalog.local_player;
        for slot in &mut self.slots {
            if slot.id.0 >= max && slot.id != local && slot.is_active() {
                tracing::debug!("Closing slot {} beyond map capacity {}", slot.id, max);
                slot.status = SlotStatus::Closed;
            }
        }

        let mut active = self.slots.iter().filter(|slot| slot.is_active()).count();
        for slot in self.slots.iter_mut().take(max as usize) {
            if active >= GameConfig::MIN_ACTIVE_PLAYERS {
                break;
            }
            if !slot.is_active() {
                tracing::debug!("Reopening slot {} to keep the lobby playable", slot.id);
                slot.status = SlotStatus::Computer;
                active += 1;
            }
        }
    }

    fn drop_unavailable_civilizations(&mut self) {
        let age = self.age();
        for slot in &mut self.slots {
            let stale = slot.civilization.as_ref().is_some_and(|id| {
                self.roster
                    .civilization(id)
                    .is_none_or(|civ| !civ.available_in(age.as_deref()))
            });
            if stale {
                slot.civilization = None;
            }
        }
    }
}

fn default_values(catalog: &SetupCatalog) -> Vec<SetupValue> {
    catalog
        .parameters
        .iter()
        .map(|spec| normalize(spec.domain, spec.default.clone()))
        .collect()
}

fn default_slots(catalog: &SetupCatalog) -> Vec<PlayerSlot> {
    catalog
        .slots
        .iter()
        .enumerate()
        .map(|(index, spec)| spec.instantiate(PlayerId(index as u32)))
        .collect()
}

/// Coerces equivalent representations to the one stored for `kind`.
fn normalize(kind: DomainKind, value: SetupValue) -> SetupValue {
    match (kind, value) {
        (DomainKind::Boolean, value) => match value.as_bool() {
            Some(flag) => SetupValue::Bool(flag),
            None => value,
        },
        (DomainKind::Integer, SetupValue::UInt(number)) => match i64::try_from(number) {
            Ok(number) => SetupValue::Int(number),
            Err(_) => SetupValue::UInt(number),
        },
        (DomainKind::UnsignedInteger, SetupValue::Int(number)) if number >= 0 => {
            SetupValue::UInt(number as u64)
        }
        (_, value) => value,
    }
}

fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        return false;
    }
    *slot = Some(value);
    true
}
