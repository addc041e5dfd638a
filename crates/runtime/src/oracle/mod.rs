//! Runtime wrappers around static roster content.
//!
//! The data is immutable at runtime; which entries are selectable under the
//! current configuration is decided by the store that owns the oracle.
mod roster;

pub use roster::RosterOracleImpl;
