use serde::{Deserialize, Serialize};

use super::{Point, WindowHandle};

/// Geometry captured when a pointer drag starts, everything a motion
/// event needs to compute the new window frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOrigin {
    pub window: WindowHandle,
    pub pointer: Point,
    pub window_pos: Point,
    pub window_w: i32,
    pub window_h: i32,
}

/// What the window manager is currently doing with the pointer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    MovingWindow(DragOrigin),
    ResizingWindow(DragOrigin),
}

impl Mode {
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::MovingWindow(_) | Self::ResizingWindow(_))
    }
}
