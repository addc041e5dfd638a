//! Editing the focused control.

use client_frontend_core::{Control, PanelMode};
use game_core::{ParameterId, PlayerId};

use super::super::EventLoop;

/// What the focused element edits.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Target {
    Option { parameter: ParameterId, control: Control },
    Leader { player: PlayerId, selected: Option<usize> },
    Civilization { player: PlayerId, selected: Option<usize> },
    Remove(PlayerId),
    Add,
}

impl EventLoop {
    /// Steps a selector or flips a toggle.
    pub(in crate::event) fn step_focused(&mut self, forward: bool) {
        match self.focused_target() {
            Some(Target::Option {
                parameter,
                control: Control::Selector { items, selected },
            }) => {
                if let Some(next) = cycle(selected, items.len(), forward) {
                    self.controller
                        .select_parameter_value(&parameter, items[next].value_index);
                }
            }
            Some(Target::Option {
                parameter,
                control: Control::Toggle { checked },
            }) => self.controller.toggle_parameter(&parameter, !checked),
            Some(Target::Leader { player, selected }) => {
                let len = self.controller.leader_options().len();
                if let Some(next) = cycle(selected, len, forward) {
                    self.controller.select_leader(player, next);
                }
            }
            Some(Target::Civilization { player, selected }) => {
                let len = self.controller.civilization_options().len();
                if let Some(next) = cycle(selected, len, forward) {
                    self.controller.select_civilization(player, next);
                }
            }
            _ => {}
        }
    }

    /// Enter/space on the focused element.
    pub(in crate::event) fn activate_focused(&mut self) {
        match self.focused_target() {
            Some(Target::Option {
                parameter,
                control: Control::Numeric { text },
            }) => self.app_state.begin_edit(parameter, text),
            Some(Target::Remove(player)) => {
                self.controller.remove_player(player);
            }
            Some(Target::Add) => {
                self.controller.add_player();
            }
            Some(_) => self.step_focused(true),
            None => {}
        }
    }

    fn focused_target(&self) -> Option<Target> {
        let element = self.controller.focused_element()?;
        match self.controller.mode() {
            PanelMode::GameSetup => self.controller.row(element).map(|row| Target::Option {
                parameter: row.parameter.clone(),
                control: row.control.clone(),
            }),
            PanelMode::PlayerSetup => {
                let panel = self.controller.player_panel();
                if element == panel.add {
                    return Some(Target::Add);
                }
                panel.rows.iter().find_map(|row| {
                    if row.leader.element == element {
                        Some(Target::Leader {
                            player: row.player,
                            selected: row.leader.selected,
                        })
                    } else if row.civilization.element == element {
                        Some(Target::Civilization {
                            player: row.player,
                            selected: row.civilization.selected,
                        })
                    } else if row.delete == element {
                        Some(Target::Remove(row.player))
                    } else {
                        None
                    }
                })
            }
        }
    }
}

/// Next selector index, wrapping at both ends. `None` for an empty list.
fn cycle(selected: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (selected, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(index), true) => (index + 1) % len,
        (Some(index), false) => (index + len - 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::cycle;

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(Some(2), 3, true), Some(0));
        assert_eq!(cycle(Some(0), 3, false), Some(2));
        assert_eq!(cycle(None, 3, true), Some(0));
        assert_eq!(cycle(None, 3, false), Some(2));
        assert_eq!(cycle(Some(1), 0, true), None);
    }
}
