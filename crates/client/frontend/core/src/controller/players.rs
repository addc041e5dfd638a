//! Player slot rows: roster options, add/remove and leader/civilization picks.

use game_core::{
    GameConfig, PlayerId, PlayerParameter, PlayerSlot, SetupStore, SetupValue, SlotStatus,
};

use super::OptionsController;
use crate::view_model::{
    PlayerPanel, PlayerRow, RosterSelector, civilization_option, leader_option,
};

impl<S: SetupStore + ?Sized> OptionsController<S> {
    /// Rebuilds the player rows and the civilization option list.
    pub fn refresh_player_options(&mut self) {
        self.generate_civilization_options();

        let max_players = self.store.max_major_players();
        let local = self.store.local_player_id();
        let active: Vec<PlayerSlot> = self
            .store
            .players()
            .into_iter()
            .filter(PlayerSlot::is_active)
            .collect();
        let deletable = active.len() > GameConfig::MIN_ACTIVE_PLAYERS;

        let mut rows = Vec::with_capacity(active.len());
        for slot in &active {
            let leader = self.leader_index(slot);
            let civilization = self.civilization_index(slot);
            rows.push(PlayerRow {
                player: slot.id,
                status: slot.status,
                is_local: slot.id == local,
                leader: RosterSelector {
                    element: self.ids.allocate(),
                    selected: leader,
                },
                civilization: RosterSelector {
                    element: self.ids.allocate(),
                    selected: civilization,
                },
                delete: self.ids.allocate(),
                delete_enabled: deletable && slot.id != local,
            });
        }

        self.players = PlayerPanel {
            rows,
            add: self.players.add,
            add_enabled: active.len() < max_players as usize,
            max_players,
        };
    }

    /// Opens the lowest closed slot as a computer player.
    ///
    /// Returns false when every slot is already open.
    pub fn add_player(&mut self) -> bool {
        let Some(slot) = self
            .store
            .players()
            .into_iter()
            .find(|slot| slot.status == SlotStatus::Closed)
        else {
            return false;
        };

        if let Err(error) = self.store.set_slot_status(slot.id, SlotStatus::Computer) {
            self.report("add player", &error);
            return false;
        }
        let revision = self.store.revision();
        self.messages.info(
            revision,
            format!("Player {} joins as computer", slot.id.display_number()),
        );
        self.refresh_player_options();
        true
    }

    /// Closes `player`'s slot if its delete affordance is enabled.
    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        let deletable = self
            .players
            .row(player)
            .is_some_and(|row| row.delete_enabled);
        if !deletable || self.store.player(player).is_none() {
            return false;
        }

        if let Err(error) = self.store.set_slot_status(player, SlotStatus::Closed) {
            self.report("remove player", &error);
            return false;
        }
        let revision = self.store.revision();
        self.messages.info(
            revision,
            format!("Player {} removed", player.display_number()),
        );
        self.refresh_player_options();
        self.update_focus();
        true
    }

    /// Assigns the `index`-th leader option to `player`.
    pub fn select_leader(&mut self, player: PlayerId, index: usize) {
        let Some(option) = self.leader_options.get(index) else {
            return;
        };
        if !self.store.is_game_editable() || self.store.player(player).is_none() {
            return;
        }

        let value = SetupValue::text(option.id.as_str());
        if let Err(error) = self
            .store
            .set_player_parameter_value(player, PlayerParameter::Leader, value)
        {
            self.report(PlayerParameter::Leader.as_ref(), &error);
            return;
        }

        if let Some(row) = self.players.rows.iter_mut().find(|row| row.player == player) {
            row.leader.selected = Some(index);
        }
        if player == self.store.local_player_id() {
            self.local_selection.leader = self.leader_data.get(index).cloned();
        }
    }

    /// Assigns the `index`-th civilization option to `player`.
    pub fn select_civilization(&mut self, player: PlayerId, index: usize) {
        let Some(option) = self.civilization_options.get(index) else {
            return;
        };
        if !self.store.is_game_editable() || self.store.player(player).is_none() {
            return;
        }

        let value = SetupValue::text(option.id.as_str());
        if let Err(error) = self.store.set_player_parameter_value(
            player,
            PlayerParameter::Civilization,
            value,
        ) {
            self.report(PlayerParameter::Civilization.as_ref(), &error);
            return;
        }

        if let Some(row) = self.players.rows.iter_mut().find(|row| row.player == player) {
            row.civilization.selected = Some(index);
        }
        if player == self.store.local_player_id() {
            self.local_selection.civilization = self.civilization_data.get(index).cloned();
        }
    }

    /// Leader options are fixed for the panel's lifetime.
    pub(super) fn generate_leader_options(&mut self) {
        self.leader_data = self.store.leaders();
        self.leader_options = self
            .leader_data
            .iter()
            .map(|leader| leader_option(&*self.store, leader))
            .collect();
    }

    /// The civilization pool depends on game parameters, so it is rebuilt.
    fn generate_civilization_options(&mut self) {
        self.civilization_data = self.store.civilizations();
        self.civilization_options = self
            .civilization_data
            .iter()
            .map(|civilization| civilization_option(&*self.store, civilization))
            .collect();
    }

    fn leader_index(&self, slot: &PlayerSlot) -> Option<usize> {
        let leader = slot.leader.as_ref()?;
        self.leader_options
            .iter()
            .position(|option| option.id == leader.as_str())
    }

    fn civilization_index(&self, slot: &PlayerSlot) -> Option<usize> {
        let civilization = slot.civilization.as_ref()?;
        self.civilization_options
            .iter()
            .position(|option| option.id == civilization.as_str())
    }
}
