//! Input handling (keyboard polling and command dispatch).

use anyhow::Result;
use client_frontend_core::{Navigation, PanelRequest};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input without blocking the frame.
    pub(in crate::event) fn handle_input_tick(
        &mut self,
        terminal: &mut Tui,
    ) -> Result<Option<PanelRequest>> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(None);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let outcome = self.handle_key_press(key);
                self.render(terminal)?;
                Ok(outcome)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Dispatch a key press; returns the request when the panel should close.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> Option<PanelRequest> {
        match self.input.handle_key(key, &self.app_state.mode) {
            KeyAction::Back => return Some(self.controller.back()),
            KeyAction::StartGame => return Some(self.controller.start_game()),
            KeyAction::FocusNext => self.controller.focus_next(),
            KeyAction::FocusPrev => self.controller.focus_prev(),
            KeyAction::PrevPanel => self.controller.navigate(Navigation::Previous),
            KeyAction::NextPanel => self.controller.navigate(Navigation::Next),
            KeyAction::Decrease => self.step_focused(false),
            KeyAction::Increase => self.step_focused(true),
            KeyAction::Activate => self.activate_focused(),
            KeyAction::AddPlayer => {
                self.controller.add_player();
            }
            KeyAction::ResetDefaults => self.controller.reset_to_defaults(),
            KeyAction::ToggleHelp => self.app_state.show_help = !self.app_state.show_help,
            KeyAction::EditChar(ch) => {
                if let Some(edit) = self.app_state.edit_mut() {
                    edit.push(ch);
                }
            }
            KeyAction::EditBackspace => {
                if let Some(edit) = self.app_state.edit_mut() {
                    edit.pop();
                }
            }
            KeyAction::EditCommit => {
                if let Some(edit) = self.app_state.finish_edit() {
                    self.controller.edit_numeric(&edit.parameter, &edit.buffer);
                }
            }
            KeyAction::EditCancel => {
                self.app_state.finish_edit();
            }
            KeyAction::None => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use client_frontend_core::{FrontendConfig, OptionsController, PanelMode, PanelRequest};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use game_content::ContentFactory;
    use game_core::{ParameterId, PlayerId, SetupStore, SetupValue};
    use runtime::MemorySetupStore;

    use crate::config::CliConfig;
    use crate::event::EventLoop;

    fn event_loop() -> (Arc<dyn SetupStore>, EventLoop) {
        let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../../data");
        let bundle = ContentFactory::new(data).load_all().unwrap();
        let store: Arc<dyn SetupStore> = Arc::new(MemorySetupStore::from_bundle(bundle));
        let mut controller = OptionsController::new(Arc::clone(&store), FrontendConfig::default());
        controller.attach();
        (store, EventLoop::new(controller, CliConfig::default()))
    }

    fn press(event_loop: &mut EventLoop, code: KeyCode) -> Option<PanelRequest> {
        event_loop.handle_key_press(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn value(store: &Arc<dyn SetupStore>, id: &str) -> Option<SetupValue> {
        store
            .find_game_parameter(&ParameterId::from(id))
            .map(|parameter| parameter.value.value)
    }

    fn focus_parameter(event_loop: &mut EventLoop, id: &str) {
        let element = event_loop
            .controller
            .row_for(&ParameterId::from(id))
            .map(|row| row.element)
            .unwrap();
        event_loop
            .controller
            .set_focus(client_frontend_core::Focus::Element(element));
    }

    #[test]
    fn right_arrow_steps_focused_selector_and_focus_follows_rebuild() {
        let (store, mut event_loop) = event_loop();
        focus_parameter(&mut event_loop, "Age");

        press(&mut event_loop, KeyCode::Right);
        assert_eq!(value(&store, "Age"), Some(SetupValue::text("AGE_EXPLORATION")));

        event_loop.controller.tick();
        let age = event_loop.controller.row_for(&ParameterId::from("Age")).unwrap();
        assert_eq!(event_loop.controller.focused_element(), Some(age.element));
    }

    #[test]
    fn typed_zero_is_ignored_and_typed_seven_is_written() {
        let (store, mut event_loop) = event_loop();
        focus_parameter(&mut event_loop, "GameRandomSeed");

        press(&mut event_loop, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut event_loop, KeyCode::Backspace);
        }
        press(&mut event_loop, KeyCode::Char('0'));
        press(&mut event_loop, KeyCode::Enter);
        assert_eq!(value(&store, "GameRandomSeed"), Some(SetupValue::Int(1337)));

        press(&mut event_loop, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut event_loop, KeyCode::Backspace);
        }
        press(&mut event_loop, KeyCode::Char('7'));
        press(&mut event_loop, KeyCode::Enter);
        assert_eq!(value(&store, "GameRandomSeed"), Some(SetupValue::Int(7)));
    }

    #[test]
    fn player_panel_keys_add_and_pick_leaders() {
        let (store, mut event_loop) = event_loop();
        press(&mut event_loop, KeyCode::Char(']'));
        assert_eq!(event_loop.controller.mode(), PanelMode::PlayerSetup);

        press(&mut event_loop, KeyCode::Char('a'));
        assert_eq!(event_loop.controller.player_panel().rows.len(), 5);

        press(&mut event_loop, KeyCode::Tab);
        press(&mut event_loop, KeyCode::Right);
        let local = store.player(PlayerId(0)).unwrap();
        assert_eq!(
            local.leader.as_ref().map(|leader| leader.as_str()),
            Some("LEADER_HATSHEPSUT")
        );
    }

    #[test]
    fn quit_and_start_close_the_panel() {
        let (_store, mut event_loop) = event_loop();
        assert_eq!(press(&mut event_loop, KeyCode::Char('q')), Some(PanelRequest::Back));
        assert!(matches!(
            press(&mut event_loop, KeyCode::Char('s')),
            Some(PanelRequest::StartGame(_))
        ));
        assert_eq!(press(&mut event_loop, KeyCode::Tab), None);
    }
}
