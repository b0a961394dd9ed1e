//! Client adoption and removal.

use crate::display_action::DisplayAction;
use crate::display_event::WindowSpec;
use crate::models::{Client, WindowHandle, WindowType};
use crate::state::State;

impl State {
    /// Adopt a newly mapped window, or absorb its strut if it is a dock.
    /// Returns true when the visible state changed.
    pub fn window_map_handler(&mut self, spec: WindowSpec) -> bool {
        if spec.override_redirect || spec.r#type == WindowType::Dock {
            if let Some(strut) = spec.strut {
                self.struts.retain(|s| s.window != strut.window);
                self.struts.push(strut);
                self.update_all_layouts();
                return true;
            }
            return false;
        }
        if self.clients.contains(spec.window) {
            return false;
        }

        let cursor = spec.cursor;
        let mut client = self.make_client(spec);
        let monitor = client.monitor;
        let window = client.window;
        let frame = client.frame;
        let area = client.area;

        self.actions.push_back(DisplayAction::SetWindowBorder {
            window: frame,
            color: self.default_border_color.clone(),
            width: self.border_width,
        });
        self.actions
            .push_back(DisplayAction::MoveResizeWindow(frame, area));
        self.actions.push_back(DisplayAction::ShowWindow(frame));
        self.actions.push_back(DisplayAction::RaiseWindow(frame));

        // Tiling and fullscreen are mutually exclusive apart from the one
        // fullscreen occupant; a new map evicts it.
        let desktop = client.desktop;
        self.unfullscreen_others_on(monitor, desktop, window);
        self.reset_layout_size_adds(monitor);

        if let Some(index) = self.pending_scratchpad.take() {
            self.attach_scratchpad(&mut client, index);
            let area = client.area;
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(frame, area));
            self.clients.insert(client);
        } else {
            self.clients.insert(client);
            self.update_layout(monitor);
        }

        // Immediate focus only when the pointer already rests on the new
        // client.
        if self
            .clients
            .get(window)
            .is_some_and(|c| c.area.contains(cursor))
        {
            self.focus_client(window);
        }
        true
    }

    /// Build the registry entry for a spec. Geometry that could not be
    /// resolved upstream arrives zeroed; the entry is still created so the
    /// map never fails outright.
    fn make_client(&mut self, spec: WindowSpec) -> Client {
        let mut client = Client::new(spec.window, spec.frame, spec.area);
        client.name = spec.name;
        client.r#type = spec.r#type;
        client.hints = spec.hints;
        client.supports_delete = spec.supports_delete;
        client.show_titlebar = self.show_titlebars && spec.r#type == WindowType::Normal;
        client.apply_size_hints();

        // New clients start centered on the focused monitor.
        if let Some(focused) = self.monitors.get(self.focused_monitor) {
            client.area = focused.area.center_inside(client.area.w, client.area.h);
        }
        client.monitor = self.monitors.index_for_area(&client.area);
        client.desktop = self
            .monitors
            .get(client.monitor)
            .map_or(0, |m| m.current_desktop);
        self.ensure_desktop(client.monitor, client.desktop);
        client
    }

    /// An unmap is either the tail end of one of our own hides or the
    /// client going away for real.
    pub fn window_unmap_handler(&mut self, handle: WindowHandle) -> bool {
        if let Some(client) = self.clients.resolve_mut(handle) {
            if client.ignore_unmaps > 0 {
                client.ignore_unmaps -= 1;
                return false;
            }
            let window = client.window;
            return self.remove_client(window);
        }
        self.remove_strut(handle)
    }

    /// Destroy-notify for clients that never sent an unmap first.
    pub fn window_destroyed_handler(&mut self, handle: WindowHandle) -> bool {
        if let Some(window) = self.clients.resolve(handle).map(|c| c.window) {
            return self.remove_client(window);
        }
        self.remove_strut(handle)
    }

    fn remove_client(&mut self, window: WindowHandle) -> bool {
        let Some(client) = self.clients.remove(window) else {
            return false;
        };
        if let Some(slot) = client.scratchpad.and_then(|i| self.scratchpads.get_mut(i)) {
            slot.detach();
        }
        self.actions.push_back(DisplayAction::UnframeWindow {
            window: client.window,
            frame: client.frame,
        });
        if self.focused_client == Some(window) {
            self.focused_client = None;
            let next = self
                .clients
                .iter()
                .find(|c| c.on_screen(client.monitor, client.desktop))
                .map(|c| c.window);
            if let Some(next) = next {
                self.focus_client(next);
            }
        }
        self.update_layout(client.monitor);
        true
    }

    fn remove_strut(&mut self, window: WindowHandle) -> bool {
        let before = self.struts.len();
        self.struts.retain(|s| s.window != window);
        if self.struts.len() == before {
            return false;
        }
        self.update_all_layouts();
        true
    }

    /// Ask a client to close, politely when it speaks the delete protocol.
    pub fn kill_client(&mut self, handle: WindowHandle) {
        let Some(client) = self.clients.resolve(handle) else {
            return;
        };
        if client.supports_delete {
            self.actions
                .push_back(DisplayAction::KillWindow(client.window));
        } else {
            self.actions
                .push_back(DisplayAction::DestroyWindow(client.window));
        }
        // Removal itself arrives later as an unmap or destroy notify.
        self.update_layout(self.focused_monitor);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::config::TestConfig;
    use crate::display_action::DisplayAction;
    use crate::display_event::WindowSpec;
    use crate::models::{Area, Manager, Point, SizeHints, Strut, WindowHandle, WindowType};

    fn manager() -> Manager<TestConfig, crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test(vec!["1".to_string(), "2".to_string()]);
        manager
            .state
            .outputs_changed_handler(vec![Area::new(0, 0, 1920, 1080)]);
        manager
    }

    pub(crate) fn spec(id: u32) -> WindowSpec {
        WindowSpec {
            window: WindowHandle(id),
            frame: WindowHandle(1000 + id),
            area: Area::new(0, 0, 600, 400),
            hints: SizeHints::default(),
            r#type: WindowType::Normal,
            name: format!("window {id}"),
            override_redirect: false,
            strut: None,
            supports_delete: true,
            cursor: Point::new(-1, -1),
        }
    }

    #[test]
    fn mapped_windows_are_managed_newest_first() {
        let mut manager = manager();
        for id in 1..=3 {
            manager.state.window_map_handler(spec(id));
        }
        let order: Vec<u32> = manager.state.clients.iter().map(|c| c.window.0).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn override_redirect_windows_are_not_managed() {
        let mut manager = manager();
        let mut subject = spec(1);
        subject.override_redirect = true;
        assert!(!manager.state.window_map_handler(subject));
        assert!(manager.state.clients.is_empty());
    }

    #[test]
    fn dock_struts_shrink_the_layout() {
        let mut manager = manager();
        let mut dock = spec(9);
        dock.r#type = WindowType::Dock;
        dock.strut = Some(Strut {
            window: WindowHandle(9),
            top: 24,
            start_x: 0,
            end_x: 1920,
            ..Strut::default()
        });
        manager.state.window_map_handler(dock);
        assert_eq!(manager.state.struts.len(), 1);
        assert!(manager.state.clients.is_empty());

        manager.state.window_map_handler(spec(1));
        let client = manager.state.clients.get(WindowHandle(1)).unwrap();
        assert_eq!(client.area.y, 24);
    }

    #[test]
    fn synthetic_unmaps_are_swallowed_once() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        manager
            .state
            .clients
            .get_mut(WindowHandle(1))
            .unwrap()
            .ignore_unmaps = 1;
        assert!(!manager.state.window_unmap_handler(WindowHandle(1)));
        assert!(manager.state.clients.contains(WindowHandle(1)));
        assert!(manager.state.window_unmap_handler(WindowHandle(1)));
        assert!(!manager.state.clients.contains(WindowHandle(1)));
    }

    #[test]
    fn removal_unframes_and_refocuses() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        manager.state.window_map_handler(spec(2));
        manager.state.focus_client(WindowHandle(2));
        manager.state.actions.clear();

        manager.state.window_destroyed_handler(WindowHandle(2));
        assert!(manager.state.actions.iter().any(|a| matches!(
            a,
            DisplayAction::UnframeWindow {
                window: WindowHandle(2),
                ..
            }
        )));
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));
    }

    #[test]
    fn polite_kill_needs_the_delete_protocol() {
        let mut manager = manager();
        manager.state.window_map_handler(spec(1));
        let mut raw = spec(2);
        raw.supports_delete = false;
        manager.state.window_map_handler(raw);
        manager.state.actions.clear();

        manager.state.kill_client(WindowHandle(1));
        manager.state.kill_client(WindowHandle(2));
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::KillWindow(WindowHandle(1)))));
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::DestroyWindow(WindowHandle(2)))));
    }

    #[test]
    fn map_under_cursor_takes_focus() {
        let mut manager = manager();
        let mut subject = spec(1);
        subject.cursor = Point::new(960, 540);
        manager.state.window_map_handler(subject);
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));
    }
}
