//! Desktop switching and client reassignment.

use crate::display_action::DisplayAction;
use crate::models::WindowHandle;
use crate::state::State;

impl State {
    /// Switch the focused monitor to a desktop, creating it on first use.
    pub fn goto_desktop(&mut self, desktop: usize) -> bool {
        let monitor = self.focused_monitor;
        self.ensure_desktop(monitor, desktop);
        let Some(mon) = self.monitors.get(monitor) else {
            return false;
        };
        let old = mon.current_desktop;
        if old == desktop {
            return false;
        }

        // Old desktop goes dark, new one lights up. Only clients on this
        // monitor with the old or new index change visibility.
        let leaving: Vec<WindowHandle> = self
            .clients
            .iter()
            .filter(|c| c.monitor == monitor && c.desktop == old && !c.hidden)
            .map(|c| c.window)
            .collect();
        for window in leaving {
            self.hide_client(window);
        }

        if let Some(mon) = self.monitors.get_mut(monitor) {
            mon.current_desktop = desktop;
        }

        let arriving: Vec<WindowHandle> = self
            .clients
            .iter()
            .filter(|c| c.monitor == monitor && c.desktop == desktop && !c.hidden)
            .map(|c| c.window)
            .collect();
        for window in &arriving {
            self.show_client(*window);
        }

        let name = self
            .monitors
            .get(monitor)
            .and_then(|m| m.desktops.get(desktop))
            .map_or_else(String::new, |d| d.name.clone());
        self.actions.push_back(DisplayAction::SetCurrentDesktopHint {
            monitor,
            desktop,
            name,
        });

        self.update_layout(monitor);
        self.drop_focus();
        if let Some(window) = arriving.first() {
            self.focus_client(*window);
        }
        true
    }

    /// Move the focused client to another desktop on its monitor. The
    /// client leaves the screen, so focus is dropped with it.
    pub fn send_to_desktop(&mut self, desktop: usize) -> bool {
        let Some(window) = self.focused_client else {
            return false;
        };
        let Some(monitor) = self.clients.get(window).map(|c| c.monitor) else {
            return false;
        };
        self.ensure_desktop(monitor, desktop);
        let Some(client) = self.clients.get_mut(window) else {
            return false;
        };
        if client.desktop == desktop {
            return false;
        }
        client.desktop = desktop;
        client.layout_size_add = 0.0;
        self.drop_focus();
        self.hide_client(window);
        self.update_layout(monitor);
        true
    }

    /// Unmap without forgetting: the resulting unmap-notify must not be
    /// read as the client closing.
    pub fn hide_client(&mut self, handle: WindowHandle) {
        let Some(client) = self.clients.get_mut(handle) else {
            return;
        };
        client.ignore_unmaps += 1;
        let frame = client.frame;
        self.actions.push_back(DisplayAction::HideWindow(frame));
    }

    pub fn show_client(&mut self, handle: WindowHandle) {
        let Some(client) = self.clients.get(handle) else {
            return;
        };
        let frame = client.frame;
        self.actions.push_back(DisplayAction::ShowWindow(frame));
    }
}
