use game_core::{PlayerId, SlotStatus};

use super::ElementId;

/// Leader or civilization dropdown of a player row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterSelector {
    pub element: ElementId,
    /// Index into the controller's option list, `None` when unassigned.
    pub selected: Option<usize>,
}

/// Editable row of one active player slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    pub player: PlayerId,
    pub status: SlotStatus,
    pub is_local: bool,
    pub leader: RosterSelector,
    pub civilization: RosterSelector,
    pub delete: ElementId,
    /// The delete affordance is shown and usable.
    pub delete_enabled: bool,
}

impl PlayerRow {
    /// Focusable elements of the row in display order.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        [self.leader.element, self.civilization.element]
            .into_iter()
            .chain(self.delete_enabled.then_some(self.delete))
    }
}

/// Player-setup panel contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerPanel {
    /// Active slots in ascending id order.
    pub rows: Vec<PlayerRow>,
    pub add: ElementId,
    pub add_enabled: bool,
    pub max_players: u32,
}

impl PlayerPanel {
    pub(crate) fn empty(add: ElementId) -> Self {
        Self {
            rows: Vec::new(),
            add,
            add_enabled: false,
            max_players: 0,
        }
    }

    pub fn row(&self, player: PlayerId) -> Option<&PlayerRow> {
        self.rows.iter().find(|row| row.player == player)
    }

    /// Focusable elements in display order.
    pub fn elements(&self) -> Vec<ElementId> {
        self.rows
            .iter()
            .flat_map(|row| row.elements())
            .chain(self.add_enabled.then_some(self.add))
            .collect()
    }

    pub fn contains(&self, element: ElementId) -> bool {
        (self.add_enabled && element == self.add)
            || self.rows.iter().any(|row| row.elements().any(|id| id == element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::ElementIds;

    #[test]
    fn disabled_affordances_are_not_attached() {
        let mut ids = ElementIds::default();
        let mut panel = PlayerPanel::empty(ids.allocate());
        panel.rows.push(PlayerRow {
            player: PlayerId(0),
            status: SlotStatus::Human,
            is_local: true,
            leader: RosterSelector { element: ids.allocate(), selected: None },
            civilization: RosterSelector { element: ids.allocate(), selected: None },
            delete: ids.allocate(),
            delete_enabled: false,
        });

        for element in [panel.add, panel.rows[0].delete] {
            assert!(!panel.contains(element));
            assert!(!panel.elements().contains(&element));
        }

        panel.add_enabled = true;
        assert!(panel.contains(panel.add));
        assert_eq!(panel.elements().last(), Some(&panel.add));
    }
}
