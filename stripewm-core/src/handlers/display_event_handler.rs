//! Top level dispatch from display-server events to state handlers.

use crate::command::Command;
use crate::config::Config;
use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::models::Manager;
use crate::utils::modmask_lookup::ModMask;

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    /// Process a single event. Returns true when the display needs to be
    /// updated afterwards.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        let state = &mut self.state;
        match event {
            DisplayEvent::WindowMap(spec) => state.window_map_handler(spec),
            DisplayEvent::WindowUnmap(handle) => state.window_unmap_handler(handle),
            DisplayEvent::WindowDestroy(handle) => state.window_destroyed_handler(handle),
            DisplayEvent::MouseEnter(target) => state.mouse_enter_handler(target),
            DisplayEvent::KeyCombo(modmask, keysym) => self.key_combo_handler(modmask, keysym),
            DisplayEvent::MouseCombo(modmask, button, handle, point, zone) => {
                state.mouse_combo_handler(modmask, button, handle, point, zone)
            }
            DisplayEvent::Movement(point, button, time) => {
                state.motion_handler(point, button, time)
            }
            DisplayEvent::ConfigureRequest(params) => state.configure_request_handler(params),
            DisplayEvent::OutputsChanged(outputs) => state.outputs_changed_handler(outputs),
            DisplayEvent::WindowChange(change) => state.window_changed_handler(change),
            DisplayEvent::FullscreenRequest(handle, action) => {
                state.fullscreen_request_handler(handle, action)
            }
            DisplayEvent::ActiveRequest(handle) => state.active_request_handler(handle),
        }
    }

    /// Every keybind matching the combo fires; duplicate bindings are
    /// deliberate and there is no first-match short circuit. A key press
    /// is a deliberate action, so hover focus resumes.
    fn key_combo_handler(&mut self, modmask: ModMask, keysym: u32) -> bool {
        self.state.ignore_enter = false;
        let commands: Vec<Command> = self
            .state
            .keybinds
            .iter()
            .filter(|bind| bind.modifier == modmask && bind.keysym == keysym)
            .map(|bind| bind.command.clone())
            .collect();
        let mut handled = false;
        for command in &commands {
            handled |= self.command_handler(command);
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::super::window_handler::tests::spec;
    use crate::command::Command;
    use crate::config::{Keybind, TestConfig};
    use crate::display_event::DisplayEvent;
    use crate::models::{Area, Manager};
    use crate::utils::modmask_lookup::ModMask;

    fn manager() -> Manager<TestConfig, crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test(vec!["1".to_string(), "2".to_string()]);
        manager
            .state
            .outputs_changed_handler(vec![Area::new(0, 0, 1920, 1080)]);
        manager
    }

    #[test]
    fn duplicate_keybinds_all_fire() {
        let mut manager = manager();
        manager.state.keybinds = vec![
            Keybind {
                modifier: ModMask::Super,
                keysym: 0x31,
                command: Command::IncreaseGap,
            },
            Keybind {
                modifier: ModMask::Super,
                keysym: 0x31,
                command: Command::IncreaseGap,
            },
        ];
        manager.display_event_handler(DisplayEvent::KeyCombo(ModMask::Super, 0x31));
        let gap = manager
            .state
            .monitors
            .get(0)
            .and_then(|m| m.props(m.current_desktop))
            .unwrap()
            .gap_size;
        // Two bindings, two steps of 2.
        assert_eq!(gap, 4);
    }

    #[test]
    fn a_key_press_clears_enter_suppression() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        assert!(manager.state.ignore_enter);
        manager.display_event_handler(DisplayEvent::KeyCombo(ModMask::Super, 0xffff));
        assert!(!manager.state.ignore_enter);
    }

    #[test]
    fn events_route_to_their_handlers() {
        let mut manager = manager();
        assert!(manager.display_event_handler(DisplayEvent::WindowMap(spec(1))));
        assert!(manager
            .state
            .clients
            .contains(crate::models::WindowHandle(1)));
        assert!(manager.display_event_handler(DisplayEvent::WindowDestroy(
            crate::models::WindowHandle(1)
        )));
        assert!(manager.state.clients.is_empty());
    }
}
