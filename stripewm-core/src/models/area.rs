//! Geometry primitives used throughout the window manager.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

/// A point in root-window coordinates. x,y from top left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in root-window coordinates. x,y from top left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Area {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= x && x <= max_x) && (self.y <= y && y <= max_y)
    }

    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        self.contains_point(p.x, p.y)
    }

    /// Area of the intersection with `other`, zero when disjoint.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> i64 {
        let x_overlap = i64::from(
            (self.x + self.w).min(other.x + other.w) - self.x.max(other.x),
        );
        let y_overlap = i64::from(
            (self.y + self.h).min(other.y + other.h) - self.y.max(other.y),
        );
        x_overlap.max(0) * y_overlap.max(0)
    }

    #[must_use]
    pub const fn center(&self) -> Point {
        Point {
            x: self.x + (self.w / 2),
            y: self.y + (self.h / 2),
        }
    }

    /// Covers `other` entirely, border to border.
    #[must_use]
    pub const fn covers(&self, other: &Self) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x + self.w >= other.x + other.w
            && self.y + self.h >= other.y + other.h
    }

    /// Centered placement of a `w` by `h` rectangle inside this area.
    #[must_use]
    pub const fn center_inside(&self, w: i32, h: i32) -> Self {
        Self {
            x: self.x + (self.w - w) / 2,
            y: self.y + (self.h - h) / 2,
            w,
            h,
        }
    }
}

/// ICCCM min/max size constraints for a client.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHints {
    pub min_w: i32,
    pub min_h: i32,
    pub max_w: i32,
    pub max_h: i32,
}

impl Default for SizeHints {
    fn default() -> Self {
        Self {
            min_w: 0,
            min_h: 0,
            max_w: i32::MAX,
            max_h: i32::MAX,
        }
    }
}

impl SizeHints {
    /// Min size equals max size, the client cannot be resized.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.min_w > 0 && self.min_h > 0 && self.min_w == self.max_w && self.min_h == self.max_h
    }

    /// Clamp a requested size into the hinted range.
    #[must_use]
    pub fn constrain(&self, w: i32, h: i32) -> (i32, i32) {
        let w = w.clamp(self.min_w.max(1), self.max_w.max(1));
        let h = h.clamp(self.min_h.max(1), self.max_h.max(1));
        (w, h)
    }
}
