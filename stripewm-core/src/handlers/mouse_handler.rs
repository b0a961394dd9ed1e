//! Button presses and pointer motion: click focus, titlebar hot zones,
//! interactive move and resize.

use crate::display_action::DisplayAction;
use crate::display_event::TitlebarZone;
use crate::models::{DragOrigin, Mode, Point, WindowHandle};
use crate::state::State;
use crate::utils::modmask_lookup::{Button, ModMask};

impl State {
    /// A button press is a deliberate action, so enter-notify suppression
    /// ends here.
    pub fn mouse_combo_handler(
        &mut self,
        modmask: ModMask,
        button: Button,
        handle: WindowHandle,
        point: Point,
        zone: TitlebarZone,
    ) -> bool {
        self.ignore_enter = false;
        match zone {
            TitlebarZone::Close => {
                self.kill_client(handle);
                return true;
            }
            TitlebarZone::AddToLayout => {
                if let Some(client) = self.clients.resolve_mut(handle) {
                    let monitor = client.monitor;
                    let window = client.window;
                    client.set_floating(false);
                    self.reset_layout_size_adds(monitor);
                    self.update_layout(monitor);
                    self.focus_client(window);
                }
                return true;
            }
            TitlebarZone::None => {}
        }

        let Some(client) = self.clients.resolve(handle) else {
            return false;
        };
        let window = client.window;
        let frame = client.frame;
        self.focus_client(window);
        self.actions.push_back(DisplayAction::RaiseWindow(frame));

        if modmask.contains(self.mousekey) {
            let Some(client) = self.clients.get(window) else {
                return true;
            };
            let origin = DragOrigin {
                window,
                pointer: point,
                window_pos: Point::new(client.area.x, client.area.y),
                window_w: client.area.w,
                window_h: client.area.h,
            };
            if button == self.move_button {
                self.mode = Mode::MovingWindow(origin);
            } else if button == self.resize_button {
                self.mode = Mode::ResizingWindow(origin);
            }
        }
        true
    }

    /// Debounced motion. Without a drag in progress this is a hover which
    /// may still shift focus; with one, the grabbed client follows the
    /// pointer.
    pub fn motion_handler(&mut self, point: Point, button: Button, time: u64) -> bool {
        if !self.motion_due(time) {
            return false;
        }
        // Real pointer movement is deliberate, hover focus resumes.
        self.ignore_enter = false;

        match self.mode {
            Mode::Normal => self.hover_handler(point),
            Mode::MovingWindow(origin) => {
                if button == Button::Zero {
                    self.mode = Mode::Normal;
                    return false;
                }
                self.drag_prepare(origin.window);
                let dx = point.x - origin.pointer.x;
                let dy = point.y - origin.pointer.y;
                let Some(client) = self.clients.get_mut(origin.window) else {
                    self.mode = Mode::Normal;
                    return false;
                };
                client.area.x = origin.window_pos.x + dx;
                client.area.y = origin.window_pos.y + dy;
                let frame = client.frame;
                let area = client.area;
                // The client may have been dragged onto another monitor.
                client.monitor = self.monitors.index_for_area(&area);
                self.actions
                    .push_back(DisplayAction::MoveResizeWindow(frame, area));
                true
            }
            Mode::ResizingWindow(origin) => {
                if button == Button::Zero {
                    self.mode = Mode::Normal;
                    return false;
                }
                self.drag_prepare(origin.window);
                let dx = point.x - origin.pointer.x;
                let dy = point.y - origin.pointer.y;
                let Some(client) = self.clients.get_mut(origin.window) else {
                    self.mode = Mode::Normal;
                    return false;
                };
                let (w, h) = client
                    .hints
                    .constrain(origin.window_w + dx, origin.window_h + dy);
                client.area.w = w;
                client.area.h = h;
                let frame = client.frame;
                let area = client.area;
                self.actions
                    .push_back(DisplayAction::MoveResizeWindow(frame, area));
                true
            }
        }
    }

    /// Hover focus plus focused-monitor tracking over empty root space.
    fn hover_handler(&mut self, point: Point) -> bool {
        let monitor = self.focused_monitor;
        let hovered = self
            .clients
            .iter()
            .find(|c| {
                c.on_screen(c.monitor, self.monitors.get(c.monitor).map_or(0, |m| m.current_desktop))
                    && c.area.contains(point)
            })
            .map(|c| c.window);
        if let Some(window) = hovered {
            if self.focused_client != Some(window) {
                self.focus_client(window);
                return true;
            }
            return false;
        }
        if let Some(mon) = self.monitors.at_point(point) {
            if mon.index != monitor {
                self.previous_monitor = Some(monitor);
                self.focused_monitor = mon.index;
            }
        }
        false
    }

    /// Any interactive move or resize evicts a tiled client from the
    /// layout first, and a fullscreen one loses that state.
    fn drag_prepare(&mut self, window: WindowHandle) {
        if self.clients.get(window).is_some_and(|c| c.fullscreen) {
            self.set_fullscreen(window, false);
        }
        let Some(client) = self.clients.get_mut(window) else {
            return;
        };
        if !client.floating() {
            let monitor = client.monitor;
            client.set_floating(true);
            self.reset_layout_size_adds(monitor);
            self.update_layout(monitor);
            // The recompute was on our own behalf, hover stays live.
            self.ignore_enter = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::window_handler::tests::spec;
    use crate::config::TestConfig;
    use crate::display_event::TitlebarZone;
    use crate::models::{Area, Manager, Mode, Point, WindowHandle};
    use crate::utils::modmask_lookup::{Button, ModMask};

    fn manager() -> Manager<TestConfig, crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test(vec!["1".to_string()]);
        manager
            .state
            .outputs_changed_handler(vec![Area::new(0, 0, 1920, 1080)]);
        manager.state.window_map_handler(spec(1));
        manager.state.window_map_handler(spec(2));
        manager.state.last_motion = 0;
        manager
    }

    #[test]
    fn click_focuses_and_raises() {
        let mut manager = manager();
        manager.state.mouse_combo_handler(
            ModMask::Zero,
            Button::Button1,
            WindowHandle(1),
            Point::new(10, 10),
            TitlebarZone::None,
        );
        assert_eq!(manager.state.focused_client, Some(WindowHandle(1)));
        assert_eq!(manager.state.mode, Mode::Normal);
    }

    #[test]
    fn mod_click_starts_a_move_drag() {
        let mut manager = manager();
        manager.state.mouse_combo_handler(
            ModMask::Super,
            Button::Button1,
            WindowHandle(1),
            Point::new(10, 10),
            TitlebarZone::None,
        );
        assert!(matches!(manager.state.mode, Mode::MovingWindow(_)));
    }

    #[test]
    fn dragging_a_tiled_client_makes_it_float() {
        let mut manager = manager();
        manager.state.mouse_combo_handler(
            ModMask::Super,
            Button::Button1,
            WindowHandle(1),
            Point::new(10, 10),
            TitlebarZone::None,
        );
        let before = manager.state.clients.get(WindowHandle(1)).unwrap().area;
        manager
            .state
            .motion_handler(Point::new(110, 60), Button::Button1, 1000);
        let client = manager.state.clients.get(WindowHandle(1)).unwrap();
        assert!(client.floating());
        assert_eq!(client.area.x, before.x + 100);
        assert_eq!(client.area.y, before.y + 50);
    }

    #[test]
    fn resize_respects_size_hints() {
        let mut manager = manager();
        {
            let client = manager.state.clients.get_mut(WindowHandle(1)).unwrap();
            client.hints.max_w = 700;
            client.set_floating(true);
            client.area = Area::new(0, 0, 600, 400);
        }
        manager.state.mouse_combo_handler(
            ModMask::Super,
            Button::Button3,
            WindowHandle(1),
            Point::new(10, 10),
            TitlebarZone::None,
        );
        manager
            .state
            .motion_handler(Point::new(510, 110), Button::Button3, 1000);
        let client = manager.state.clients.get(WindowHandle(1)).unwrap();
        assert_eq!(client.area.w, 700);
        assert_eq!(client.area.h, 500);
    }

    #[test]
    fn an_oversized_interactive_resize_does_not_auto_fullscreen() {
        let mut manager = manager();
        {
            let client = manager.state.clients.get_mut(WindowHandle(1)).unwrap();
            client.set_floating(true);
            client.area = Area::new(0, 0, 600, 400);
        }
        manager.state.mouse_combo_handler(
            ModMask::Super,
            Button::Button3,
            WindowHandle(1),
            Point::new(0, 0),
            TitlebarZone::None,
        );
        // Drag well past the monitor's full size.
        manager
            .state
            .motion_handler(Point::new(2000, 1200), Button::Button3, 1000);
        let client = manager.state.clients.get(WindowHandle(1)).unwrap();
        assert!(client.area.w >= 1920 && client.area.h >= 1080);
        assert!(!client.fullscreen);
    }

    #[test]
    fn releasing_the_button_ends_the_drag() {
        let mut manager = manager();
        manager.state.mouse_combo_handler(
            ModMask::Super,
            Button::Button1,
            WindowHandle(1),
            Point::new(10, 10),
            TitlebarZone::None,
        );
        manager
            .state
            .motion_handler(Point::new(50, 50), Button::Zero, 1000);
        assert_eq!(manager.state.mode, Mode::Normal);
    }

    #[test]
    fn titlebar_close_zone_kills_instead_of_focusing() {
        let mut manager = manager();
        manager.state.actions.clear();
        manager.state.mouse_combo_handler(
            ModMask::Zero,
            Button::Button1,
            WindowHandle(1),
            Point::new(5, 5),
            TitlebarZone::Close,
        );
        assert_ne!(manager.state.focused_client, Some(WindowHandle(1)));
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, crate::DisplayAction::KillWindow(WindowHandle(1)))));
    }

    #[test]
    fn hover_focuses_the_client_under_the_pointer() {
        let mut manager = manager();
        manager.state.ignore_enter = false;
        let target = manager.state.clients.get(WindowHandle(2)).unwrap().area;
        manager.state.motion_handler(
            target.center(),
            Button::Zero,
            1000,
        );
        assert_eq!(manager.state.focused_client, Some(WindowHandle(2)));
    }
}
