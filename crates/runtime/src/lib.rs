//! In-process backing for the lobby's configuration store.
//!
//! This crate turns loaded setup content into a live, revisioned
//! configuration that presentation layers read and edit through
//! [`game_core::SetupStore`].
//!
//! Modules are organized by responsibility:
//! - [`oracle`] wraps the immutable leader and civilization catalogs
//! - [`repository`] holds the mutable configuration and its revision counter
pub mod oracle;
pub mod repository;

pub use oracle::RosterOracleImpl;
pub use repository::MemorySetupStore;
