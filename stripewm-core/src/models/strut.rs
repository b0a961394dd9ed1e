//! Reserved-space hints published by bars and docks.

use serde::{Deserialize, Serialize};

use super::Area;
use super::WindowHandle;

/// One window's reserved screen space. Widths are in pixels measured from the
/// respective screen edge; `start_x`/`end_x` bound the strut horizontally.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strut {
    pub window: WindowHandle,
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub start_x: i32,
    pub end_x: i32,
}

impl Strut {
    /// A strut only constrains the monitor that spans its horizontal extent.
    #[must_use]
    pub const fn applies_to(&self, monitor: &Area) -> bool {
        self.start_x >= monitor.x && self.end_x <= monitor.x + monitor.w
    }
}

/// Shrink a monitor's area by every strut that lies within it.
#[must_use]
pub fn usable_area(monitor: Area, struts: &[Strut]) -> Area {
    let mut usable = monitor;
    for strut in struts.iter().filter(|s| s.applies_to(&monitor)) {
        if strut.left > 0 {
            usable.x += strut.left;
            usable.w -= strut.left;
        }
        if strut.right > 0 {
            usable.w -= strut.right;
        }
        if strut.top > 0 {
            usable.y += strut.top;
            usable.h -= strut.top;
        }
        if strut.bottom > 0 {
            usable.h -= strut.bottom;
        }
    }
    usable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_strut_shrinks_from_the_top() {
        let monitor = Area::new(0, 0, 1920, 1080);
        let bar = Strut {
            top: 24,
            start_x: 0,
            end_x: 1920,
            ..Strut::default()
        };
        let usable = usable_area(monitor, &[bar]);
        assert_eq!(usable, Area::new(0, 24, 1920, 1056));
    }

    #[test]
    fn left_strut_moves_the_origin() {
        let monitor = Area::new(0, 0, 1920, 1080);
        let bar = Strut {
            left: 48,
            start_x: 0,
            end_x: 48,
            ..Strut::default()
        };
        let usable = usable_area(monitor, &[bar]);
        assert_eq!(usable, Area::new(48, 0, 1872, 1080));
    }

    #[test]
    fn struts_on_other_monitors_are_ignored() {
        let second = Area::new(1920, 0, 1920, 1080);
        let bar = Strut {
            top: 24,
            start_x: 0,
            end_x: 1920,
            ..Strut::default()
        };
        assert_eq!(usable_area(second, &[bar]), second);
    }

    #[test]
    fn multiple_struts_stack() {
        let monitor = Area::new(0, 0, 1000, 1000);
        let top = Strut {
            top: 20,
            start_x: 0,
            end_x: 1000,
            ..Strut::default()
        };
        let bottom = Strut {
            bottom: 30,
            start_x: 0,
            end_x: 1000,
            ..Strut::default()
        };
        assert_eq!(usable_area(monitor, &[top, bottom]), Area::new(0, 20, 1000, 950));
    }
}
