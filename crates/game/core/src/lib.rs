//! Game-setup vocabulary and store contracts shared across clients.
//!
//! `game-core` defines the parameters, player slots and roster entries a
//! pre-game lobby edits, plus the [`SetupStore`] contract through which every
//! read and write flows. Stores (in-memory, engine-backed, test fakes) and
//! presentation layers depend on the types re-exported here.
pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod setup;

pub use catalog::{CatalogError, ParameterSpec, SetupCatalog, SlotSpec, VisibilityRule};
pub use config::GameConfig;
pub use env::{
    CivilizationBonus, CivilizationInfo, LeaderInfo, Roster, RosterOracle, SetupStore,
    StringTable,
};
pub use error::{ErrorSeverity, GameError, SetupError, SetupResult};
pub use setup::{
    CivilizationId, Domain, DomainKind, GameMode, InvalidReason, LeaderId, Parameter,
    ParameterId, ParameterValue, PlayerId, PlayerParameter, PlayerSlot, PossibleValue,
    SetupValue, SlotStatus, TextKey,
};
