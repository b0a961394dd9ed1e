//! Fullscreen toggling and oversize normalization.

use crate::display_action::DisplayAction;
use crate::models::WindowHandle;
use crate::state::State;

impl State {
    /// Make a client cover its monitor, saving what it had before, or
    /// restore that saved state. Restoring re-runs the oversize self-check
    /// so a client whose saved geometry already covers the monitor is
    /// normalized back into real fullscreen state.
    pub fn set_fullscreen(&mut self, handle: WindowHandle, value: bool) -> bool {
        let Some(client) = self.clients.resolve(handle) else {
            return false;
        };
        let window = client.window;
        if value {
            if client.fullscreen {
                return false;
            }
            let monitor = client.monitor;
            let Some(mon_area) = self.monitors.get(monitor).map(|m| m.area) else {
                return false;
            };
            let Some(client) = self.clients.get_mut(window) else {
                return false;
            };
            client.prev_area = client.area;
            client.floating_prev = client.floating();
            client.set_floating(true);
            client.fullscreen = true;
            client.area = mon_area;
            let frame = client.frame;
            self.actions.push_back(DisplayAction::SetWindowBorder {
                window: frame,
                color: self.default_border_color.clone(),
                width: 0,
            });
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(frame, mon_area));
            self.actions.push_back(DisplayAction::RaiseWindow(frame));
            self.actions
                .push_back(DisplayAction::SetFullscreenState(window, true));
            self.update_layout(monitor);
        } else {
            if !client.fullscreen {
                return false;
            }
            let Some(client) = self.clients.get_mut(window) else {
                return false;
            };
            client.fullscreen = false;
            client.area = client.prev_area;
            let floating_prev = client.floating_prev;
            client.set_floating(floating_prev);
            let frame = client.frame;
            let area = client.area;
            let monitor = client.monitor;
            let focused = self.focused_client == Some(window);
            self.actions.push_back(DisplayAction::SetWindowBorder {
                window: frame,
                color: if focused {
                    self.focused_border_color.clone()
                } else {
                    self.default_border_color.clone()
                },
                width: self.border_width,
            });
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(frame, area));
            self.actions
                .push_back(DisplayAction::SetFullscreenState(window, false));
            self.update_layout(monitor);
            self.normalize_oversize(window);
        }
        true
    }

    /// A client sitting on a monitor-sized floating area without the
    /// fullscreen flag is folded into real fullscreen state. Only the
    /// fullscreen path runs this check; arbitrary floating resizes do not.
    fn normalize_oversize(&mut self, handle: WindowHandle) {
        let Some(client) = self.clients.get(handle) else {
            return;
        };
        if client.fullscreen || !client.floating() {
            return;
        }
        let Some(mon_area) = self.monitors.get(client.monitor).map(|m| m.area) else {
            return;
        };
        if client.area.covers(&mon_area) {
            self.set_fullscreen(handle, true);
        }
    }

    /// EWMH three-state fullscreen request: 0 = off, 1 = on, 2 = toggle.
    pub fn fullscreen_request_handler(&mut self, handle: WindowHandle, action: u32) -> bool {
        let Some(client) = self.clients.resolve(handle) else {
            return false;
        };
        let window = client.window;
        let value = match action {
            0 => false,
            1 => true,
            2 => !client.fullscreen,
            _ => return false,
        };
        self.set_fullscreen(window, value)
    }

    /// At most one fullscreen client per visible set; everyone else on the
    /// pair is knocked back to their saved state.
    pub fn unfullscreen_others_on(
        &mut self,
        monitor: usize,
        desktop: usize,
        except: WindowHandle,
    ) {
        let others: Vec<WindowHandle> = self
            .clients
            .iter()
            .filter(|c| {
                c.fullscreen && c.window != except && c.on_screen(monitor, desktop)
            })
            .map(|c| c.window)
            .collect();
        for window in others {
            self.set_fullscreen(window, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::window_handler::tests::spec;
    use crate::config::TestConfig;
    use crate::models::{Area, Manager, WindowHandle};

    fn manager() -> Manager<TestConfig, crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test(vec!["1".to_string()]);
        manager
            .state
            .outputs_changed_handler(vec![Area::new(0, 0, 1920, 1080)]);
        manager.state.window_map_handler(spec(1));
        manager.state.window_map_handler(spec(2));
        manager
    }

    #[test]
    fn fullscreen_round_trip_restores_everything() {
        let mut manager = manager();
        let before = manager.state.clients.get(WindowHandle(1)).unwrap().clone();
        manager.state.set_fullscreen(WindowHandle(1), true);
        {
            let subject = manager.state.clients.get(WindowHandle(1)).unwrap();
            assert!(subject.fullscreen);
            assert!(subject.floating());
            assert_eq!(subject.area, Area::new(0, 0, 1920, 1080));
        }
        manager.state.set_fullscreen(WindowHandle(1), false);
        let after = manager.state.clients.get(WindowHandle(1)).unwrap();
        assert_eq!(after.area, before.area);
        assert_eq!(after.floating(), before.floating());
        assert!(!after.fullscreen);
    }

    #[test]
    fn redundant_toggles_are_rejected() {
        let mut manager = manager();
        assert!(!manager.state.set_fullscreen(WindowHandle(1), false));
        assert!(manager.state.set_fullscreen(WindowHandle(1), true));
        assert!(!manager.state.set_fullscreen(WindowHandle(1), true));
    }

    #[test]
    fn ewmh_request_follows_three_state_semantics() {
        let mut manager = manager();
        manager.state.fullscreen_request_handler(WindowHandle(1), 1);
        assert!(manager.state.clients.get(WindowHandle(1)).unwrap().fullscreen);
        manager.state.fullscreen_request_handler(WindowHandle(1), 2);
        assert!(!manager.state.clients.get(WindowHandle(1)).unwrap().fullscreen);
        manager.state.fullscreen_request_handler(WindowHandle(1), 2);
        assert!(manager.state.clients.get(WindowHandle(1)).unwrap().fullscreen);
        manager.state.fullscreen_request_handler(WindowHandle(1), 0);
        assert!(!manager.state.clients.get(WindowHandle(1)).unwrap().fullscreen);
    }

    #[test]
    fn a_monitor_sized_restore_is_normalized_back() {
        let mut manager = manager();
        manager.state.set_fullscreen(WindowHandle(1), true);
        {
            let subject = manager.state.clients.get_mut(WindowHandle(1)).unwrap();
            subject.prev_area = Area::new(0, 0, 1920, 1080);
            subject.floating_prev = true;
        }
        manager.state.set_fullscreen(WindowHandle(1), false);
        // The saved area covered the monitor, so the self-check refolds it.
        assert!(manager.state.clients.get(WindowHandle(1)).unwrap().fullscreen);
    }

    #[test]
    fn a_new_map_evicts_the_fullscreen_occupant() {
        let mut manager = manager();
        manager.state.set_fullscreen(WindowHandle(1), true);
        manager.state.window_map_handler(spec(3));
        assert!(!manager.state.clients.get(WindowHandle(1)).unwrap().fullscreen);
    }
}
