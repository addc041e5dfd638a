//! View-model snapshots built by [`crate::OptionsController`].
//!
//! Every rebuild hands out fresh [`ElementId`]s; an element is attached only
//! while its id is present in the currently mounted panel.
mod options;
mod players;
mod roster;

use std::fmt;

pub use options::{Control, OptionRow, SelectorItem};
pub use players::{PlayerPanel, PlayerRow, RosterSelector};
pub use roster::{RosterOption, leader_option, civilization_option};

/// Identity of one rendered control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Monotonic [`ElementId`] source; ids are never reused.
#[derive(Debug, Default)]
pub(crate) struct ElementIds {
    next: u64,
}

impl ElementIds {
    pub(crate) fn allocate(&mut self) -> ElementId {
        self.next += 1;
        ElementId(self.next)
    }
}

/// Which of the two panels is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum PanelMode {
    #[default]
    GameSetup,
    PlayerSetup,
}

/// Current keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    /// A panel container itself.
    Panel(PanelMode),
    Element(ElementId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_never_reused() {
        let mut ids = ElementIds::default();
        let first = ids.allocate();
        let second = ids.allocate();
        assert_ne!(first, second);
        assert!(second > first);
    }
}
