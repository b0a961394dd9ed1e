//! Scratchpad toggling: spawn on first use, then hide and show the
//! attached window without ever tiling it.

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Client, Manager};
use crate::state::State;
use crate::utils::child_process::exec_shell;

impl State {
    /// Bind a freshly mapped client to the slot that is waiting for it.
    /// The client floats, sized by the slot ratios and centered on the
    /// focused monitor.
    pub(crate) fn attach_scratchpad(&mut self, client: &mut Client, index: usize) {
        let Some(monitor) = self.monitors.get(self.focused_monitor) else {
            return;
        };
        let monitor_area = monitor.area;
        let Some(slot) = self.scratchpads.get_mut(index) else {
            return;
        };
        let w = (monitor_area.w as f32 * slot.width_ratio) as i32;
        let h = (monitor_area.h as f32 * slot.height_ratio) as i32;
        client.scratchpad = Some(index);
        client.set_floating(true);
        client.monitor = self.focused_monitor;
        client.area = monitor_area.center_inside(w.max(1), h.max(1));
        client.apply_size_hints();
        slot.window = Some(client.window);
        slot.hidden = false;
        slot.needs_restart = false;
    }
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    /// One keybind cycles a scratchpad through spawn, hide and show. A
    /// dead window is respawned rather than shown.
    pub fn toggle_scratchpad(&mut self, index: usize) -> bool {
        let Some(slot) = self.state.scratchpads.get(index) else {
            tracing::warn!("no scratchpad configured at index {}", index);
            return false;
        };
        let attached = slot
            .window
            .filter(|w| self.state.clients.contains(*w) && !slot.needs_restart);

        let Some(window) = attached else {
            let command = slot.command.clone();
            self.state.pending_scratchpad = Some(index);
            exec_shell(&command, &mut self.children);
            return true;
        };

        let hidden = self.state.scratchpads[index].hidden;
        if hidden {
            let monitor = self.state.focused_monitor;
            let desktop = self
                .state
                .monitors
                .get(monitor)
                .map_or(0, |m| m.current_desktop);
            let monitor_area = self.state.monitors.get(monitor).map(|m| m.area);
            let slot = &mut self.state.scratchpads[index];
            slot.hidden = false;
            let (width_ratio, height_ratio) = (slot.width_ratio, slot.height_ratio);
            if let Some(client) = self.state.clients.get_mut(window) {
                client.hidden = false;
                // The scratchpad follows the user to the current desktop.
                client.monitor = monitor;
                client.desktop = desktop;
                if let Some(area) = monitor_area {
                    let w = (area.w as f32 * width_ratio) as i32;
                    let h = (area.h as f32 * height_ratio) as i32;
                    client.area = area.center_inside(w.max(1), h.max(1));
                }
                let frame = client.frame;
                let area = client.area;
                self.state
                    .actions
                    .push_back(DisplayAction::MoveResizeWindow(frame, area));
                self.state.show_client(window);
                self.state.actions.push_back(DisplayAction::RaiseWindow(frame));
                self.state.focus_client(window);
            }
        } else {
            self.state.scratchpads[index].hidden = true;
            if let Some(client) = self.state.clients.get_mut(window) {
                client.hidden = true;
            }
            self.state.hide_client(window);
            if self.state.focused_client == Some(window) {
                self.state.drop_focus();
            }
        }
        true
    }
}
