//! Snapshot types describing the game being configured.
//!
//! Everything here is a value snapshot: stores hand out clones and accept
//! write requests keyed by identifier, so consumers never hold references
//! into store-owned data.
mod common;
mod parameter;
mod player;
mod value;

pub use common::{CivilizationId, LeaderId, ParameterId, PlayerId, TextKey};
pub use parameter::{InvalidReason, Parameter};
pub use player::{GameMode, PlayerParameter, PlayerSlot, SlotStatus};
pub use value::{Domain, DomainKind, ParameterValue, PossibleValue, SetupValue};
