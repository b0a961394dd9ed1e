//! Output discovery and cross-monitor client migration.

use crate::display_action::DisplayAction;
use crate::models::Area;
use crate::state::State;

impl State {
    /// Register any newly discovered output areas. Overlapping areas are
    /// duplicates of monitors we already track; monitors are never removed
    /// during a session.
    pub fn outputs_changed_handler(&mut self, outputs: Vec<Area>) -> bool {
        let mut changed = false;
        for area in outputs {
            if let Some(index) = self.monitors.add_output(area) {
                self.ensure_desktop(index, 0);
                let name = self
                    .monitors
                    .get(index)
                    .and_then(|m| m.desktops.first())
                    .map_or_else(String::new, |d| d.name.clone());
                self.actions.push_back(DisplayAction::SetCurrentDesktopHint {
                    monitor: index,
                    desktop: 0,
                    name,
                });
                changed = true;
            }
        }
        changed
    }

    /// Move the focused client one monitor over, keeping its position and
    /// size proportional to the destination and carrying fullscreen intent
    /// across.
    pub fn move_to_monitor(&mut self, direction: i32) -> bool {
        let count = self.monitors.len();
        if count < 2 {
            return false;
        }
        let Some(window) = self.focused_client else {
            return false;
        };
        let Some(client) = self.clients.get(window) else {
            return false;
        };
        let source = client.monitor;
        let destination = if direction.is_negative() {
            (source + count - 1) % count
        } else {
            (source + 1) % count
        };
        let Some(src_area) = self.monitors.get(source).map(|m| m.area) else {
            return false;
        };
        let Some(dst_area) = self.monitors.get(destination).map(|m| m.area) else {
            return false;
        };
        let dst_desktop = self
            .monitors
            .get(destination)
            .map_or(0, |m| m.current_desktop);
        self.ensure_desktop(destination, dst_desktop);

        // Fullscreen is cleared for the move and re-applied on the other
        // side; the destination may hold only one fullscreen client.
        let was_fullscreen = self.clients.get(window).is_some_and(|c| c.fullscreen);
        if was_fullscreen {
            self.set_fullscreen(window, false);
        }

        if let Some(client) = self.clients.get_mut(window) {
            client.area = scale_between(client.area, src_area, dst_area);
            client.monitor = destination;
            client.desktop = dst_desktop;
            client.layout_size_add = 0.0;
            let frame = client.frame;
            let area = client.area;
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(frame, area));
        }

        self.reset_layout_size_adds(source);
        self.update_layout(source);
        if was_fullscreen {
            self.unfullscreen_others_on(destination, dst_desktop, window);
            self.set_fullscreen(window, true);
        } else {
            self.update_layout(destination);
        }
        self.previous_monitor = Some(self.focused_monitor);
        self.focused_monitor = destination;
        true
    }
}

/// Re-express an area relative to a destination rectangle, preserving the
/// normalized position and size it had in the source rectangle.
fn scale_between(area: Area, src: Area, dst: Area) -> Area {
    let rel_x = (area.x - src.x) as f32 / src.w as f32;
    let rel_y = (area.y - src.y) as f32 / src.h as f32;
    let rel_w = area.w as f32 / src.w as f32;
    let rel_h = area.h as f32 / src.h as f32;
    Area::new(
        dst.x + (rel_x * dst.w as f32) as i32,
        dst.y + (rel_y * dst.h as f32) as i32,
        ((rel_w * dst.w as f32) as i32).max(1),
        ((rel_h * dst.h as f32) as i32).max(1),
    )
}
