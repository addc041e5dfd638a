//! [`game_core::RosterOracle`] backed by a loaded [`Roster`].
use game_core::{CivilizationId, CivilizationInfo, LeaderId, LeaderInfo, Roster, RosterOracle};

/// RosterOracle implementation with static leader and civilization entries.
#[derive(Clone, Debug, Default)]
pub struct RosterOracleImpl {
    roster: Roster,
}

impl RosterOracleImpl {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn add_leader(&mut self, leader: LeaderInfo) {
        self.roster.leaders.push(leader);
    }

    pub fn add_civilization(&mut self, civilization: CivilizationInfo) {
        self.roster.civilizations.push(civilization);
    }

    pub fn leader(&self, id: &LeaderId) -> Option<&LeaderInfo> {
        self.roster.leader(id)
    }

    pub fn civilization(&self, id: &CivilizationId) -> Option<&CivilizationInfo> {
        self.roster.civilization(id)
    }

    /// Civilizations selectable while `age` is the configured starting age.
    pub fn civilizations_in(&self, age: Option<&str>) -> Vec<CivilizationInfo> {
        self.roster
            .civilizations
            .iter()
            .filter(|civ| civ.available_in(age))
            .cloned()
            .collect()
    }
}

impl RosterOracle for RosterOracleImpl {
    fn leaders(&self) -> Vec<LeaderInfo> {
        self.roster.leaders.clone()
    }

    fn civilizations(&self) -> Vec<CivilizationInfo> {
        self.roster.civilizations.clone()
    }
}
