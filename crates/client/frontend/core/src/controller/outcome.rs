//! What the panel hands back to its host.

use game_core::{CivilizationInfo, LeaderInfo, PlayerSlot, SetupStore};

use super::OptionsController;
use crate::classify::Bucket;

/// Tab navigation between the two panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Game setup.
    Previous,
    /// Player setup.
    Next,
}

/// Leader and civilization picked for the local player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalSelection {
    pub leader: Option<LeaderInfo>,
    pub civilization: Option<CivilizationInfo>,
}

/// One displayed option and its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub bucket: Bucket,
    pub label: String,
    pub value: String,
}

/// Snapshot of the configuration the user is launching with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchSummary {
    pub options: Vec<SummaryLine>,
    /// Active slots in ascending id order.
    pub players: Vec<PlayerSlot>,
}

/// Request for the host once the user leaves the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelRequest {
    StartGame(LaunchSummary),
    Back,
}

impl<S: SetupStore + ?Sized> OptionsController<S> {
    /// Summarizes the store as it is now, including edits made since the last tick.
    pub(super) fn launch_summary(&self) -> LaunchSummary {
        let parameters = self.store.game_parameters();
        let mut options: Vec<SummaryLine> = self
            .classifier
            .classify(&parameters)
            .into_iter()
            .map(|(bucket, parameter)| SummaryLine {
                bucket,
                label: self.label(parameter),
                value: self.build_control(parameter).display_value(),
            })
            .collect();
        options.sort_by_key(|line| line.bucket);

        let players = self
            .store
            .players()
            .into_iter()
            .filter(PlayerSlot::is_active)
            .collect();

        LaunchSummary { options, players }
    }
}
