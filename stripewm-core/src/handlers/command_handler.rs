//! Dispatch for keybind commands and IPC commands.

use crate::command::Command;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::ipc::{IpcCommand, IpcReply};
use crate::layouts::{clamp_nmaster, LayoutKind};
use crate::models::{Manager, WindowHandle};
use crate::state::State;
use crate::utils::child_process::exec_shell;

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    /// Run one command. Returns true when state changed in a way that
    /// warrants flushing actions to the display server.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::trace!("command: {:?}", command);
        match command {
            Command::Execute(shell_command) => {
                exec_shell(shell_command, &mut self.children);
                false
            }
            Command::CloseWindow => {
                let Some(window) = self.state.focused_client else {
                    return false;
                };
                self.state.kill_client(window);
                true
            }
            Command::ToggleFullscreen => {
                let Some(window) = self.state.focused_client else {
                    return false;
                };
                let value = self
                    .state
                    .clients
                    .get(window)
                    .is_some_and(|c| !c.fullscreen);
                self.state.set_fullscreen(window, value)
            }
            Command::ToggleFloating => self.state.toggle_floating(),
            Command::GotoDesktop(desktop) => self.state.goto_desktop(*desktop),
            Command::SendToDesktop(desktop) => self.state.send_to_desktop(*desktop),
            Command::FocusNextWindow => self.state.focus_cycle(1),
            Command::FocusPreviousWindow => self.state.focus_cycle(-1),
            Command::IncreaseMasterCount => self.state.change_master_count(1),
            Command::DecreaseMasterCount => self.state.change_master_count(-1),
            Command::IncreaseMasterArea => self.state.change_master_area(1.0),
            Command::DecreaseMasterArea => self.state.change_master_area(-1.0),
            Command::IncreaseGap => self.state.change_gap(1),
            Command::DecreaseGap => self.state.change_gap(-1),
            Command::IncreaseSizeInLayout => self.state.change_size_in_layout(1.0),
            Command::DecreaseSizeInLayout => self.state.change_size_in_layout(-1.0),
            Command::SetLayout(layout) => self.state.set_layout(*layout),
            Command::MoveWindowToNextMonitor => self.state.move_to_monitor(1),
            Command::MoveWindowToPreviousMonitor => self.state.move_to_monitor(-1),
            Command::ToggleScratchpad(index) => self.toggle_scratchpad(*index),
            Command::Terminate(exit_code) => {
                self.state.exit_code = Some(*exit_code);
                true
            }
        }
    }

    /// Handle one decoded IPC command and produce its reply. Runs on the
    /// main loop between display-server events, never concurrently with a
    /// handler.
    pub fn ipc_command_handler(&mut self, command: &IpcCommand) -> IpcReply {
        match command {
            IpcCommand::Terminate { exit_code } => {
                self.state.exit_code = Some(*exit_code);
                IpcReply::None
            }
            IpcCommand::GetWindows => {
                IpcReply::Windows(self.state.clients.iter().map(|c| c.window).collect())
            }
            IpcCommand::KillWindow(window) => {
                self.state.kill_client(*window);
                IpcReply::None
            }
            IpcCommand::FocusWindow(window) => {
                self.state.focus_client(*window);
                IpcReply::None
            }
            IpcCommand::NextWindow(window) => {
                IpcReply::Window(self.state.clients.next_after(*window).map(|c| c.window))
            }
            IpcCommand::FirstWindow => {
                IpcReply::Window(self.state.clients.first().map(|c| c.window))
            }
            IpcCommand::GetFocus => IpcReply::Window(self.state.focused_client),
            IpcCommand::GetMonitorFocus => {
                if self.state.monitors.is_empty() {
                    IpcReply::MonitorIndex(None)
                } else {
                    IpcReply::MonitorIndex(Some(self.state.focused_monitor))
                }
            }
            IpcCommand::GetCursor => {
                let cursor = self.display_server.cursor_position();
                IpcReply::Cursor(cursor.x as f32, cursor.y as f32)
            }
            IpcCommand::GetWindowArea(window) => {
                IpcReply::WindowArea(self.state.clients.get(*window).map(|c| c.area))
            }
        }
    }
}

impl State {
    fn toggle_floating(&mut self) -> bool {
        let Some(window) = self.focused_client else {
            return false;
        };
        let Some(client) = self.clients.get_mut(window) else {
            return false;
        };
        if client.fullscreen {
            return false;
        }
        let monitor = client.monitor;
        let floating = !client.floating();
        client.set_floating(floating);
        if !floating {
            client.layout_size_add = 0.0;
        }
        self.reset_layout_size_adds(monitor);
        self.update_layout(monitor);
        true
    }

    /// Bounded step of the master count on the focused desktop. An out of
    /// bound step is rejected, not clamped.
    fn change_master_count(&mut self, delta: i32) -> bool {
        let monitor = self.focused_monitor;
        let max_nmaster = self.max_nmaster;
        let Some(props) = self
            .monitors
            .get_mut(monitor)
            .and_then(|m| m.props_mut(m.current_desktop))
        else {
            return false;
        };
        let next = i64::from(props.nmaster) + i64::from(delta);
        if next < 1 || next > i64::from(max_nmaster) {
            return false;
        }
        props.nmaster = next as u32;
        self.update_layout(monitor);
        true
    }

    /// Bounded step of the master area fraction. Shrinking is refused
    /// while a master's minimum width already pins the column.
    fn change_master_area(&mut self, direction: f32) -> bool {
        let monitor = self.focused_monitor;
        let (min, max, step) = (
            self.master_area_min,
            self.master_area_max,
            self.master_area_step,
        );
        let Some(props) = self
            .monitors
            .get_mut(monitor)
            .and_then(|m| m.props_mut(m.current_desktop))
        else {
            return false;
        };
        if direction < 0.0 && props.master_maxed {
            return false;
        }
        // Repeated f32 steps accumulate error, so a step landing within
        // half a step of a bound snaps onto it instead of missing it.
        let next = props.master_area + direction * step;
        let slack = step * 0.5;
        if next < min - slack || next > max + slack {
            return false;
        }
        props.master_area = next.clamp(min, max);
        self.update_layout(monitor);
        true
    }

    fn change_gap(&mut self, direction: i32) -> bool {
        let monitor = self.focused_monitor;
        let (min, max, step) = (self.gap_size_min, self.gap_size_max, self.gap_size_step);
        let Some(props) = self
            .monitors
            .get_mut(monitor)
            .and_then(|m| m.props_mut(m.current_desktop))
        else {
            return false;
        };
        let next = props.gap_size + direction * step;
        if next < min || next > max {
            return false;
        }
        props.gap_size = next;
        self.update_layout(monitor);
        true
    }

    fn set_layout(&mut self, layout: LayoutKind) -> bool {
        let monitor = self.focused_monitor;
        let Some(props) = self
            .monitors
            .get_mut(monitor)
            .and_then(|m| m.props_mut(m.current_desktop))
        else {
            return false;
        };
        if props.layout == layout {
            return false;
        }
        props.layout = layout;
        self.reset_layout_size_adds(monitor);
        self.update_layout(monitor);
        true
    }

    /// Manual resize of the focused client inside the layout. Only valid
    /// when another client in the same column can give up the space; the
    /// last column member is a derived remainder and cannot be resized.
    fn change_size_in_layout(&mut self, direction: f32) -> bool {
        let Some(window) = self.focused_client else {
            return false;
        };
        let (monitor, desktop) = match self.clients.get(window) {
            Some(client) if !client.floating() => (client.monitor, client.desktop),
            _ => return false,
        };
        let Some(props) = self
            .monitors
            .get(monitor)
            .and_then(|m| m.props(m.current_desktop))
            .copied()
        else {
            return false;
        };
        let order: Vec<WindowHandle> = self
            .clients
            .tiled_on(monitor, desktop)
            .iter()
            .map(|c| c.window)
            .collect();
        let Some(position) = order.iter().position(|w| *w == window) else {
            return false;
        };
        let (column_start, column_end) = match props.layout {
            LayoutKind::Floating => return false,
            LayoutKind::VerticalStripes | LayoutKind::HorizontalStripes => (0, order.len()),
            LayoutKind::TiledMaster => {
                let nmaster = clamp_nmaster(props.nmaster, order.len()) as usize;
                if position < nmaster {
                    (0, nmaster.min(order.len()))
                } else {
                    (nmaster, order.len())
                }
            }
        };
        if column_end - column_start < 2 || position + 1 >= column_end {
            return false;
        }
        let step = self.layout_size_step;
        if let Some(client) = self.clients.get_mut(window) {
            client.layout_size_add += direction * step;
        }
        self.update_layout(monitor);
        true
    }
}
