//! Cross-frontend logic for the lobby's advanced options panel.
//!
//! Houses the options-sync controller, parameter classification, view-model
//! types and message logging that the terminal client and any future
//! graphical client reuse.
pub mod classify;
pub mod config;
pub mod controller;
pub mod frontend;
pub mod message;
pub mod poll;
pub mod view_model;

pub use classify::{Bucket, Classifier};
pub use config::{FrontendConfig, MessageConfig};
pub use controller::{
    LaunchSummary, LocalSelection, Navigation, OptionsController, PanelRequest, SummaryLine,
};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use poll::{RevisionWatcher, TickStatus};
pub use view_model::{
    Control, ElementId, Focus, OptionRow, PanelMode, PlayerPanel, PlayerRow, RosterOption,
    RosterSelector, SelectorItem,
};
