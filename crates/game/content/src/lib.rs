//! Data-driven setup content and loaders.
//!
//! This crate provides loaders for the lobby's RON/TOML data files:
//! - Setup catalog: parameters, defaults, slot layout (RON)
//! - Roster: leaders and civilizations (RON)
//! - Localization strings (TOML)
//! - Lobby configuration (TOML)
//!
//! Content is consumed by stores and never mutated after loading.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, LoadResult, RosterLoader, SetupLoader,
    StringsLoader,
};
