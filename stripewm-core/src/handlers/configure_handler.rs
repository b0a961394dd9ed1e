//! Configure requests and client property changes.

use crate::display_action::DisplayAction;
use crate::display_event::{ConfigureParams, WindowChange};
use crate::models::{Monitor, WindowType};
use crate::state::State;

impl State {
    /// Unmanaged windows get their request passed straight through. A
    /// tiled client does not get to fight the layout, so its request is
    /// dropped; floating clients are obeyed and the cached geometry is
    /// kept in sync.
    pub fn configure_request_handler(&mut self, params: ConfigureParams) -> bool {
        let Some(client) = self.clients.get_mut(params.window) else {
            self.actions
                .push_back(DisplayAction::PassthroughConfigure(params));
            return false;
        };

        let floating_layout = self
            .monitors
            .get(client.monitor)
            .and_then(Monitor::current_props)
            .is_some_and(|p| p.layout.is_floating());
        if !client.floating() && !floating_layout {
            return false;
        }

        if let Some(x) = params.x {
            client.area.x = x;
        }
        if let Some(y) = params.y {
            client.area.y = y;
        }
        if let Some(w) = params.w {
            client.area.w = w;
        }
        if let Some(h) = params.h {
            client.area.h = h;
        }
        client.apply_size_hints();
        let frame = client.frame;
        let area = client.area;
        let name = client.name.clone();
        let border = params.border.unwrap_or(self.border_width);
        let show_titlebar = client.show_titlebar;
        self.actions
            .push_back(DisplayAction::ConfigureWindow(frame, area, border));
        if params.raise {
            self.actions.push_back(DisplayAction::RaiseWindow(frame));
        }
        if show_titlebar {
            self.actions
                .push_back(DisplayAction::RefreshTitlebar(frame, area, name));
        }
        true
    }

    /// A client changed its window type or title after mapping.
    pub fn window_changed_handler(&mut self, change: WindowChange) -> bool {
        let Some(client) = self.clients.get_mut(change.window) else {
            return false;
        };
        let mut handled = false;

        if let Some(new_type) = change.r#type {
            if client.r#type != new_type {
                // The new type already feeds Client::floating, so the
                // before/after comparison has to use the old answer.
                let was_floating = client.floating();
                client.r#type = new_type;
                let monitor = client.monitor;
                if new_type.must_float() && !was_floating {
                    client.set_floating(true);
                    self.reset_layout_size_adds(monitor);
                    self.update_layout(monitor);
                } else if new_type == WindowType::Normal
                    && was_floating
                    && client.scratchpad.is_none()
                {
                    client.set_floating(false);
                    self.update_layout(monitor);
                }
                handled = true;
            }
        }

        if let Some(name) = change.name {
            let Some(client) = self.clients.get_mut(change.window) else {
                return handled;
            };
            client.name = name.clone();
            if client.show_titlebar {
                let frame = client.frame;
                let area = client.area;
                self.actions
                    .push_back(DisplayAction::RefreshTitlebar(frame, area, name));
            }
            handled = true;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::super::window_handler::tests::spec;
    use crate::config::TestConfig;
    use crate::display_event::{ConfigureParams, WindowChange};
    use crate::models::{Area, Manager, WindowHandle, WindowType};
    use crate::DisplayAction;

    fn manager() -> Manager<TestConfig, crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test(vec!["1".to_string()]);
        manager
            .state
            .outputs_changed_handler(vec![Area::new(0, 0, 1920, 1080)]);
        manager
    }

    fn request(window: WindowHandle) -> ConfigureParams {
        ConfigureParams {
            window,
            x: Some(10),
            y: Some(20),
            w: Some(300),
            h: Some(200),
            border: None,
            raise: false,
        }
    }

    #[test]
    fn unmanaged_requests_pass_through() {
        let mut manager = manager();
        manager.state.configure_request_handler(request(WindowHandle(99)));
        assert!(matches!(
            manager.state.actions.back(),
            Some(DisplayAction::PassthroughConfigure(_))
        ));
    }

    #[test]
    fn tiled_clients_cannot_reconfigure_themselves() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        let before = manager.state.clients.get(WindowHandle(1)).unwrap().area;
        manager.state.actions.clear();
        assert!(!manager.state.configure_request_handler(request(WindowHandle(1))));
        assert_eq!(
            manager.state.clients.get(WindowHandle(1)).unwrap().area,
            before
        );
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn floating_clients_are_obeyed_and_cached() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        manager
            .state
            .clients
            .get_mut(WindowHandle(1))
            .unwrap()
            .set_floating(true);
        assert!(manager.state.configure_request_handler(request(WindowHandle(1))));
        assert_eq!(
            manager.state.clients.get(WindowHandle(1)).unwrap().area,
            Area::new(10, 20, 300, 200)
        );
    }

    #[test]
    fn becoming_a_dialog_pops_the_client_out_of_the_layout() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        manager.state.window_map_handler(spec(2));
        manager.state.window_changed_handler(WindowChange {
            window: WindowHandle(1),
            r#type: Some(WindowType::Dialog),
            name: None,
        });
        assert!(manager.state.clients.get(WindowHandle(1)).unwrap().floating());
        // The remaining tiled client takes the whole usable area.
        assert_eq!(
            manager.state.clients.get(WindowHandle(2)).unwrap().area,
            Area::new(0, 0, 1920, 1080)
        );
    }

    #[test]
    fn returning_to_normal_rejoins_the_layout() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        manager.state.window_map_handler(spec(2));
        manager.state.window_changed_handler(WindowChange {
            window: WindowHandle(1),
            r#type: Some(WindowType::Dialog),
            name: None,
        });
        manager.state.window_changed_handler(WindowChange {
            window: WindowHandle(1),
            r#type: Some(WindowType::Normal),
            name: None,
        });
        assert!(!manager.state.clients.get(WindowHandle(1)).unwrap().floating());
        // Both clients tile again, splitting the monitor.
        assert_eq!(
            manager.state.clients.get(WindowHandle(2)).unwrap().area.w,
            960
        );
    }

    #[test]
    fn title_updates_refresh_the_titlebar() {
        let mut manager = manager();
        manager.state.show_titlebars = true;
        manager.state.window_map_handler(spec(1));
        manager
            .state
            .clients
            .get_mut(WindowHandle(1))
            .unwrap()
            .show_titlebar = true;
        manager.state.actions.clear();
        manager.state.window_changed_handler(WindowChange {
            window: WindowHandle(1),
            r#type: None,
            name: Some("editor".to_string()),
        });
        assert_eq!(
            manager.state.clients.get(WindowHandle(1)).unwrap().name,
            "editor"
        );
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::RefreshTitlebar(_, _, n) if n == "editor")));
    }
}
