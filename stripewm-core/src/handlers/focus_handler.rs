//! Focus transfer and focus-follows-mouse.

use crate::display_action::DisplayAction;
use crate::display_event::EnterTarget;
use crate::models::WindowHandle;
use crate::state::State;
use crate::utils::helpers::relative_find;

impl State {
    /// Move input focus to a managed client. A handle that resolves to
    /// nothing (including the root) is a no-op, and refocusing the already
    /// focused client fires no side effects.
    pub fn focus_client(&mut self, handle: WindowHandle) {
        let Some(client) = self.clients.resolve(handle) else {
            return;
        };
        let window = client.window;
        if self.focused_client == Some(window) {
            return;
        }
        let frame = client.frame;
        let fullscreen = client.fullscreen;
        let new_monitor = client.monitor;

        // Return the previous holder's border to the unselected color.
        if let Some(prev) = self.focused_client.and_then(|h| self.clients.get(h)) {
            if !prev.fullscreen {
                self.actions.push_back(DisplayAction::SetWindowBorder {
                    window: prev.frame,
                    color: self.default_border_color.clone(),
                    width: self.border_width,
                });
            }
        }

        self.actions.push_back(DisplayAction::SetInputFocus(window));
        if !fullscreen {
            self.actions.push_back(DisplayAction::SetWindowBorder {
                window: frame,
                color: self.focused_border_color.clone(),
                width: self.border_width,
            });
        }
        if let Some(client) = self.clients.get_mut(window) {
            client.urgent = false;
        }

        self.focused_client = Some(window);
        let old_monitor = self.focused_monitor;
        if new_monitor != old_monitor {
            // Republish the desktop hint only on a real monitor change with
            // a previous monitor on record, to keep property traffic down.
            if self.previous_monitor.is_some() {
                if let Some(mon) = self.monitors.get(new_monitor) {
                    let desktop = mon.current_desktop;
                    let name = mon
                        .desktops
                        .get(desktop)
                        .map_or_else(String::new, |d| d.name.clone());
                    self.actions.push_back(DisplayAction::SetCurrentDesktopHint {
                        monitor: new_monitor,
                        desktop,
                        name,
                    });
                }
            }
            self.previous_monitor = Some(old_monitor);
            self.focused_monitor = new_monitor;
        }
    }

    /// Drop focus without picking a successor. The previous holder keeps
    /// its state but loses the focused border color, so it does not come
    /// back from a hide still highlighted.
    pub fn drop_focus(&mut self) {
        if let Some(prev) = self.focused_client.and_then(|h| self.clients.get(h)) {
            if !prev.fullscreen {
                self.actions.push_back(DisplayAction::SetWindowBorder {
                    window: prev.frame,
                    color: self.default_border_color.clone(),
                    width: self.border_width,
                });
            }
        }
        self.focused_client = None;
    }

    /// Focus falls back to the root; every visible border goes quiet.
    pub fn unfocus_all(&mut self) {
        self.actions.push_back(DisplayAction::FocusRoot);
        let border: Vec<WindowHandle> = self
            .clients
            .iter()
            .filter(|c| !c.fullscreen)
            .map(|c| c.frame)
            .collect();
        for frame in border {
            self.actions.push_back(DisplayAction::SetWindowBorder {
                window: frame,
                color: self.default_border_color.clone(),
                width: self.border_width,
            });
        }
        self.focused_client = None;
    }

    /// Focus-follows-mouse entry point, suppressed while layout recompute
    /// churn is still in flight.
    pub fn mouse_enter_handler(&mut self, target: EnterTarget) -> bool {
        if self.ignore_enter {
            return false;
        }
        match target {
            EnterTarget::Root => {
                self.unfocus_all();
                true
            }
            EnterTarget::Window(handle) => {
                self.focus_client(handle);
                false
            }
            EnterTarget::Titlebar(handle) => {
                if let Some(client) = self.clients.resolve(handle) {
                    let (frame, area, name) = (client.frame, client.area, client.name.clone());
                    self.actions
                        .push_back(DisplayAction::RefreshTitlebar(frame, area, name));
                }
                self.focus_client(handle);
                false
            }
        }
    }

    /// Cycle focus through the clients visible on the focused monitor.
    pub fn focus_cycle(&mut self, shift: i32) -> bool {
        let Some(mon) = self.monitors.get(self.focused_monitor) else {
            return false;
        };
        let desktop = mon.current_desktop;
        let monitor = self.focused_monitor;
        let visible: Vec<WindowHandle> = self
            .clients
            .iter()
            .filter(|c| c.on_screen(monitor, desktop))
            .map(|c| c.window)
            .collect();
        if visible.is_empty() {
            return false;
        }
        let current = self.focused_client.unwrap_or(visible[0]);
        let next = relative_find(&visible, |h| *h == current, shift, true)
            .copied()
            .unwrap_or(visible[0]);
        self.focus_client(next);
        let frame = self.clients.get(next).map(|c| c.frame);
        if let Some(frame) = frame {
            self.actions.push_back(DisplayAction::RaiseWindow(frame));
        }
        true
    }

    /// EWMH active-window requests from unfocused clients flag urgency
    /// instead of stealing focus.
    pub fn active_request_handler(&mut self, handle: WindowHandle) -> bool {
        if self.focused_client == Some(handle) {
            return false;
        }
        let color = self.urgent_border_color.clone();
        let width = self.border_width;
        let Some(client) = self.clients.get_mut(handle) else {
            return false;
        };
        if client.urgent {
            return false;
        }
        client.urgent = true;
        let frame = client.frame;
        self.actions.push_back(DisplayAction::SetWindowBorder {
            window: frame,
            color,
            width,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::window_handler::tests::spec;
    use crate::config::TestConfig;
    use crate::display_action::DisplayAction;
    use crate::display_event::EnterTarget;
    use crate::models::{Area, Manager, WindowHandle};

    fn manager() -> Manager<TestConfig, crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test(vec!["1".to_string()]);
        manager
            .state
            .outputs_changed_handler(vec![Area::new(0, 0, 1920, 1080)]);
        for id in 1..=3 {
            manager.state.window_map_handler(spec(id));
        }
        manager
    }

    #[test]
    fn refocusing_fires_no_duplicate_side_effects() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        manager.state.actions.clear();
        manager.state.focus_client(WindowHandle(1));
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));
    }

    #[test]
    fn focus_change_restores_the_previous_border() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        manager.state.actions.clear();
        manager.state.focus_client(WindowHandle(2));
        let frame_of_1 = manager.state.clients.get(WindowHandle(1)).unwrap().frame;
        assert!(manager.state.actions.iter().any(|a| matches!(
            a,
            DisplayAction::SetWindowBorder { window, .. } if *window == frame_of_1
        )));
    }

    #[test]
    fn focus_clears_urgency() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        manager.state.active_request_handler(WindowHandle(2));
        assert!(manager.state.clients.get(WindowHandle(2)).unwrap().urgent);
        manager.state.focus_client(WindowHandle(2));
        assert!(!manager.state.clients.get(WindowHandle(2)).unwrap().urgent);
    }

    #[test]
    fn active_request_on_focused_client_does_nothing() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        assert!(!manager.state.active_request_handler(WindowHandle(1)));
        assert!(!manager.state.clients.get(WindowHandle(1)).unwrap().urgent);
    }

    #[test]
    fn enter_notify_is_suppressed_while_ignoring() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        manager.state.ignore_enter = true;
        manager.state.mouse_enter_handler(EnterTarget::Window(WindowHandle(2)));
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));

        manager.state.ignore_enter = false;
        manager.state.mouse_enter_handler(EnterTarget::Window(WindowHandle(2)));
        assert_eq!(manager.state.focused_client, Some(WindowHandle(2)));
    }

    #[test]
    fn root_enter_obeys_the_suppression_window() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        manager.state.ignore_enter = true;
        assert!(!manager.state.mouse_enter_handler(EnterTarget::Root));
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));
    }

    #[test]
    fn entering_the_root_drops_focus() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(1));
        manager.state.ignore_enter = false;
        manager.state.mouse_enter_handler(EnterTarget::Root);
        assert_eq!(manager.state.focused_client, None);
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::FocusRoot)));
    }

    #[test]
    fn focus_cycles_through_visible_clients() {
        let mut manager = manager();
        manager.state.focus_client(WindowHandle(3));
        manager.state.focus_cycle(1);
        assert_eq!(manager.state.focused_client, Some(WindowHandle(2)));
        manager.state.focus_cycle(-1);
        assert_eq!(manager.state.focused_client, Some(WindowHandle(3)));
        // Wraps at the tail.
        manager.state.focus_cycle(-1);
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));
    }
}
