use serde::{Deserialize, Serialize};

use crate::display_event::ConfigureParams;
use crate::models::{Area, WindowHandle};

/// These are responses from the window manager.
/// The display server should act on these actions.
#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction {
    /// Nicely ask a window if it would please close at its convenience.
    KillWindow(WindowHandle),

    /// Force-destroy a window that does not speak the delete protocol.
    DestroyWindow(WindowHandle),

    /// Move and resize a frame together with its inner window.
    MoveResizeWindow(WindowHandle, Area),

    /// Map the frame, the client becomes visible.
    ShowWindow(WindowHandle),

    /// Unmap the frame for desktop switches and scratchpad hides.
    HideWindow(WindowHandle),

    /// Reparent the inner window back to root and drop the frame.
    UnframeWindow {
        window: WindowHandle,
        frame: WindowHandle,
    },

    SetWindowBorder {
        window: WindowHandle,
        color: String,
        width: i32,
    },

    /// Tell a window that it is to become focused.
    SetInputFocus(WindowHandle),

    /// Remove focus on any visible window by focusing the root window.
    FocusRoot,

    RaiseWindow(WindowHandle),

    /// Forward an untouched configure request for an unmanaged window.
    PassthroughConfigure(ConfigureParams),

    /// Apply a granted configure request and send the synthetic
    /// configure-notify the client expects.
    ConfigureWindow(WindowHandle, Area, i32),

    /// Publish the EWMH fullscreen state of a window.
    SetFullscreenState(WindowHandle, bool),

    /// Republish the current-desktop hint for a monitor.
    SetCurrentDesktopHint {
        monitor: usize,
        desktop: usize,
        name: String,
    },

    /// Hand new titlebar geometry and title text to the renderer.
    RefreshTitlebar(WindowHandle, Area, String),
}
