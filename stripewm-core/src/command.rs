use serde::{Deserialize, Serialize};

use crate::layouts::LayoutKind;

/// An action a keybind or an IPC client can ask the manager to perform.
/// Every variant carries its own payload so dispatch stays exhaustive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a shell command, fire and forget.
    Execute(String),
    CloseWindow,
    ToggleFullscreen,
    ToggleFloating,
    GotoDesktop(usize),
    SendToDesktop(usize),
    FocusNextWindow,
    FocusPreviousWindow,
    IncreaseMasterCount,
    DecreaseMasterCount,
    IncreaseMasterArea,
    DecreaseMasterArea,
    IncreaseGap,
    DecreaseGap,
    /// Grow the focused client inside the layout at the expense of the
    /// next client in its column.
    IncreaseSizeInLayout,
    DecreaseSizeInLayout,
    SetLayout(LayoutKind),
    MoveWindowToNextMonitor,
    MoveWindowToPreviousMonitor,
    ToggleScratchpad(usize),
    /// Shut the manager down with the given exit code.
    Terminate(i32),
}
