//! Common error infrastructure for game-core.
//!
//! Stores report rejected writes through [`SetupError`]. Presentation layers
//! decide per call site whether a rejection is dropped silently, logged, or
//! surfaced; [`GameError::severity`] drives that choice.
//!
//! # Design Principles
//!
//! - **Type Safety**: rejected writes carry the offending identifier
//! - **Severity Classification**: errors are categorized for recovery strategies

use crate::setup::{ParameterId, PlayerId};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the store is not ready yet; the same edit may succeed later
/// - **Validation**: the edit itself is invalid and should not be retried as-is
/// - **Internal**: unexpected store inconsistency that requires investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry on the next user action.
    ///
    /// Examples: game configuration not editable yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: value outside the parameter domain, read-only parameter
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: poisoned store lock
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by [`crate::SetupStore`] implementations when a write is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The game configuration cannot be edited right now.
    #[error("game configuration is not editable")]
    GameNotReady,

    /// No parameter with this identifier exists.
    #[error("unknown game parameter `{0}`")]
    ParameterNotFound(ParameterId),

    /// The parameter exists but does not accept writes.
    #[error("game parameter `{0}` is read-only")]
    ReadOnly(ParameterId),

    /// The value does not belong to the parameter's domain.
    #[error("value `{value}` is outside the domain of `{parameter}`")]
    ValueOutOfDomain {
        parameter: ParameterId,
        value: String,
    },

    /// No player slot with this identifier exists.
    #[error("unknown player slot {0}")]
    PlayerNotFound(PlayerId),

    /// The player slot is closed and cannot take assignments.
    #[error("player slot {0} is closed")]
    SlotClosed(PlayerId),

    /// A leader or civilization id that the roster does not know.
    #[error("unknown roster entry `{0}`")]
    UnknownRosterEntry(String),

    /// The store's internal lock was poisoned by a panicking writer.
    #[error("setup store lock was poisoned")]
    LockPoisoned,
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameNotReady => ErrorSeverity::Recoverable,
            Self::LockPoisoned => ErrorSeverity::Internal,
            Self::ParameterNotFound(_)
            | Self::ReadOnly(_)
            | Self::ValueOutOfDomain { .. }
            | Self::PlayerNotFound(_)
            | Self::SlotClosed(_)
            | Self::UnknownRosterEntry(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameNotReady => "GAME_NOT_READY",
            Self::ParameterNotFound(_) => "PARAMETER_NOT_FOUND",
            Self::ReadOnly(_) => "READ_ONLY",
            Self::ValueOutOfDomain { .. } => "VALUE_OUT_OF_DOMAIN",
            Self::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            Self::SlotClosed(_) => "SLOT_CLOSED",
            Self::UnknownRosterEntry(_) => "UNKNOWN_ROSTER_ENTRY",
            Self::LockPoisoned => "LOCK_POISONED",
        }
    }
}

/// Result alias for store writes.
pub type SetupResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_is_recoverable() {
        let error = SetupError::GameNotReady;
        assert!(error.severity().is_recoverable());
        assert_eq!(error.error_code(), "GAME_NOT_READY");
    }

    #[test]
    fn domain_errors_are_validation() {
        let error = SetupError::ValueOutOfDomain {
            parameter: ParameterId::from("Difficulty"),
            value: "DIFFICULTY_NONE".into(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(
            error.to_string(),
            "value `DIFFICULTY_NONE` is outside the domain of `Difficulty`"
        );
    }

    #[test]
    fn poisoned_lock_is_internal() {
        assert!(SetupError::LockPoisoned.severity().is_internal());
    }
}
