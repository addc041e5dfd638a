//! Revision polling used to notice configuration changes made elsewhere.

/// Remembers the last store revision the panel was rebuilt for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevisionWatcher {
    last_seen: u64,
}

impl RevisionWatcher {
    /// Starts at revision 0, which no store reports, so the first poll rebuilds.
    pub const fn new() -> Self {
        Self { last_seen: 0 }
    }

    pub const fn last_seen(&self) -> u64 {
        self.last_seen
    }

    /// Returns true if `current` differs from the adopted revision.
    pub const fn is_stale(&self, current: u64) -> bool {
        current != self.last_seen
    }

    pub fn adopt(&mut self, revision: u64) {
        self.last_seen = revision;
    }
}

/// Result of one frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// Revision unchanged; nothing rebuilt.
    Idle,
    /// Game options were rebuilt for a new revision.
    Rebuilt,
    /// The panel is detached; the caller should stop ticking.
    Detached,
}

impl TickStatus {
    pub const fn should_continue(self) -> bool {
        !matches!(self, Self::Detached)
    }
}
