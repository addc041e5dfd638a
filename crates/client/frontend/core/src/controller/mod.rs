//! Options-sync controller for the advanced options panel.
//!
//! The controller keeps view models in step with an injected [`SetupStore`]:
//! it polls the store revision once per frame, rebuilds the game option rows
//! when it changes, routes edits back into the store and restores focus onto
//! the last edited parameter after a rebuild.
//!
//! Edits always re-fetch the live parameter or slot by id; rows never hold
//! store objects.
mod game;
mod outcome;
mod players;

use std::sync::Arc;

use game_core::{
    CivilizationInfo, GameError, LeaderInfo, ParameterId, SetupError, SetupStore,
};

use crate::classify::{Bucket, Classifier};
use crate::config::FrontendConfig;
use crate::message::MessageLog;
use crate::poll::{RevisionWatcher, TickStatus};
use crate::view_model::{
    ElementId, ElementIds, Focus, OptionRow, PanelMode, PlayerPanel, RosterOption,
};

pub use outcome::{LaunchSummary, LocalSelection, Navigation, PanelRequest, SummaryLine};

/// Drives the game-setup and player-setup panels from a [`SetupStore`].
pub struct OptionsController<S: SetupStore + ?Sized = dyn SetupStore> {
    store: Arc<S>,
    config: FrontendConfig,
    classifier: Classifier,
    ids: ElementIds,
    watcher: RevisionWatcher,
    attached: bool,
    mode: PanelMode,
    focus: Focus,
    /// Last parameter the user edited; never cleared.
    last_changed: Option<ParameterId>,
    game_rows: Vec<OptionRow>,
    players: PlayerPanel,
    leader_data: Vec<LeaderInfo>,
    leader_options: Vec<RosterOption>,
    civilization_data: Vec<CivilizationInfo>,
    civilization_options: Vec<RosterOption>,
    local_selection: LocalSelection,
    messages: MessageLog,
}

impl<S: SetupStore + ?Sized> OptionsController<S> {
    pub fn new(store: Arc<S>, config: FrontendConfig) -> Self {
        Self::with_classifier(store, config, Classifier::default())
    }

    /// Builds both panels and mounts the game-setup panel.
    pub fn with_classifier(store: Arc<S>, config: FrontendConfig, classifier: Classifier) -> Self {
        let mut ids = ElementIds::default();
        let add = ids.allocate();
        let messages = MessageLog::new(config.messages.capacity);

        let mut controller = Self {
            store,
            config,
            classifier,
            ids,
            watcher: RevisionWatcher::new(),
            attached: false,
            mode: PanelMode::GameSetup,
            focus: Focus::Panel(PanelMode::GameSetup),
            last_changed: None,
            game_rows: Vec::new(),
            players: PlayerPanel::empty(add),
            leader_data: Vec::new(),
            leader_options: Vec::new(),
            civilization_data: Vec::new(),
            civilization_options: Vec::new(),
            local_selection: LocalSelection::default(),
            messages,
        };
        controller.generate_leader_options();
        controller.show_game_setup();
        controller
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Mounts the panel: polls once, then focuses the first control.
    pub fn attach(&mut self) {
        self.attached = true;
        tracing::info!("Advanced options panel attached");
        self.tick();
        self.update_focus();
    }

    pub fn detach(&mut self) {
        self.attached = false;
        tracing::info!("Advanced options panel detached");
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Per-frame poll: rebuilds game options when the store revision moved.
    pub fn tick(&mut self) -> TickStatus {
        if !self.attached {
            return TickStatus::Detached;
        }

        let revision = self.store.revision();
        if !self.watcher.is_stale(revision) {
            return TickStatus::Idle;
        }

        tracing::debug!(
            "Store revision {} -> {}, rebuilding game options",
            self.watcher.last_seen(),
            revision
        );
        self.refresh_game_options();
        self.watcher.adopt(revision);
        TickStatus::Rebuilt
    }

    // ========================================================================
    // Panels
    // ========================================================================

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn show_game_setup(&mut self) {
        self.mode = PanelMode::GameSetup;
        self.update_focus();
    }

    pub fn show_player_setup(&mut self) {
        self.mode = PanelMode::PlayerSetup;
        self.update_focus();
    }

    pub fn navigate(&mut self, direction: Navigation) {
        match direction {
            Navigation::Previous => self.show_game_setup(),
            Navigation::Next => self.show_player_setup(),
        }
    }

    /// Restores every parameter and slot to the defaults of the configured mode.
    pub fn reset_to_defaults(&mut self) {
        if !self.store.is_game_editable() {
            return;
        }
        match self.store.reset(self.config.reset_mode) {
            Ok(()) => {
                let revision = self.store.revision();
                self.messages
                    .info(revision, format!("Options reset ({})", self.config.reset_mode));
            }
            Err(error) => self.report("reset", &error),
        }
        self.refresh_game_options();
        self.refresh_player_options();
    }

    /// Requests the host to continue to game start.
    pub fn start_game(&self) -> PanelRequest {
        PanelRequest::StartGame(self.launch_summary())
    }

    /// Requests the host to leave the panel.
    pub fn back(&self) -> PanelRequest {
        PanelRequest::Back
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// The focused element, `None` when focus is on a panel or detached.
    pub fn focused_element(&self) -> Option<ElementId> {
        match self.focus {
            Focus::Element(element) if self.is_element_attached(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_focus_attached(&self) -> bool {
        match self.focus {
            Focus::Panel(mode) => mode == self.mode,
            Focus::Element(element) => self.is_element_attached(element),
        }
    }

    /// Returns true if `element` belongs to the mounted panel's current build.
    pub fn is_element_attached(&self, element: ElementId) -> bool {
        match self.mode {
            PanelMode::GameSetup => self.game_rows.iter().any(|row| row.element == element),
            PanelMode::PlayerSetup => self.players.contains(element),
        }
    }

    /// Focusable elements of the mounted panel, in display order.
    pub fn focusable_elements(&self) -> Vec<ElementId> {
        match self.mode {
            PanelMode::GameSetup => self.game_rows.iter().map(|row| row.element).collect(),
            PanelMode::PlayerSetup => self.players.elements(),
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let elements = self.focusable_elements();
        if elements.is_empty() {
            self.focus = Focus::Panel(self.mode);
            return;
        }

        let len = elements.len();
        let current = self
            .focused_element()
            .and_then(|element| elements.iter().position(|candidate| *candidate == element));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
        };
        self.focus = Focus::Element(elements[next]);
    }

    /// Rebuilds both panels and focuses the first game option, or the panel.
    fn update_focus(&mut self) {
        self.refresh_player_options();
        self.refresh_game_options();
        self.focus = match (self.mode, self.game_rows.first()) {
            (PanelMode::GameSetup, Some(row)) => Focus::Element(row.element),
            (mode, _) => Focus::Panel(mode),
        };
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Game option rows grouped by bucket in display order.
    pub fn game_rows(&self) -> &[OptionRow] {
        &self.game_rows
    }

    pub fn rows_in(&self, bucket: Bucket) -> impl Iterator<Item = &OptionRow> {
        self.game_rows.iter().filter(move |row| row.bucket == bucket)
    }

    pub fn row(&self, element: ElementId) -> Option<&OptionRow> {
        self.game_rows.iter().find(|row| row.element == element)
    }

    pub fn row_for(&self, parameter: &ParameterId) -> Option<&OptionRow> {
        self.game_rows.iter().find(|row| &row.parameter == parameter)
    }

    pub fn player_panel(&self) -> &PlayerPanel {
        &self.players
    }

    pub fn leader_options(&self) -> &[RosterOption] {
        &self.leader_options
    }

    pub fn civilization_options(&self) -> &[RosterOption] {
        &self.civilization_options
    }

    pub fn last_changed(&self) -> Option<&ParameterId> {
        self.last_changed.as_ref()
    }

    /// Leader and civilization picked for the local player, for previews.
    pub fn local_selection(&self) -> &LocalSelection {
        &self.local_selection
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn resolve(&self, key: &str) -> Option<String> {
        self.store.resolve_string(&key.into())
    }

    /// Logs a rejected write and notes it in the panel log.
    ///
    /// Not-ready and missing targets stay silent.
    fn report(&mut self, action: &str, error: &SetupError) {
        match error {
            SetupError::GameNotReady
            | SetupError::ParameterNotFound(_)
            | SetupError::PlayerNotFound(_) => {}
            _ => {
                tracing::warn!(
                    "{} rejected by store [{}/{}]: {}",
                    action,
                    error.severity().as_str(),
                    error.error_code(),
                    error
                );
                let revision = self.store.revision();
                self.messages
                    .warning(revision, format!("{action} rejected: {error}"));
            }
        }
    }
}
