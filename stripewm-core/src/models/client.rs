//! Managed client window information.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use super::Area;
use super::SizeHints;
use super::WindowType;

/// An opaque handle to a server-side window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub u32);

/// One managed top-level window. The manager owns the frame window; the
/// application owns the content window it was reparented out of.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Client {
    pub window: WindowHandle,
    pub frame: WindowHandle,
    pub name: String,
    pub r#type: WindowType,
    /// Current geometry of the frame.
    pub area: Area,
    /// Geometry saved across fullscreen toggles.
    pub prev_area: Area,
    pub hints: SizeHints,
    /// Manual height/width adjustment applied on top of the computed layout
    /// share. Borrows space from the next client in iteration order.
    pub layout_size_add: f32,
    is_floating: bool,
    pub floating_prev: bool,
    pub fullscreen: bool,
    pub fixed: bool,
    pub hidden: bool,
    pub urgent: bool,
    pub scratchpad: Option<usize>,
    pub show_titlebar: bool,
    pub supports_delete: bool,
    /// Synthetic unmaps still in flight; each suppresses one unmap-notify.
    pub ignore_unmaps: u8,
    /// Owning monitor, recomputed from geometry, never authoritative.
    pub monitor: usize,
    /// Desktop index relative to the owning monitor's desktop set.
    pub desktop: usize,
}

impl Client {
    #[must_use]
    pub fn new(window: WindowHandle, frame: WindowHandle, area: Area) -> Self {
        Self {
            window,
            frame,
            name: String::new(),
            r#type: WindowType::Normal,
            area,
            prev_area: area,
            hints: SizeHints::default(),
            layout_size_add: 0.0,
            is_floating: false,
            floating_prev: false,
            fullscreen: false,
            fixed: false,
            hidden: false,
            urgent: false,
            scratchpad: None,
            show_titlebar: false,
            supports_delete: false,
            ignore_unmaps: 0,
            monitor: 0,
            desktop: 0,
        }
    }

    #[must_use]
    pub fn floating(&self) -> bool {
        self.is_floating || self.r#type.must_float() || self.fixed
    }

    pub fn set_floating(&mut self, value: bool) {
        self.is_floating = value;
    }

    /// Apply ICCCM hints to the current area and record the fixed flag.
    pub fn apply_size_hints(&mut self) {
        let (w, h) = self.hints.constrain(self.area.w, self.area.h);
        self.area.w = w;
        self.area.h = h;
        self.fixed = self.hints.is_fixed();
    }

    /// A client is on-screen iff its desktop is the one its monitor displays.
    #[must_use]
    pub fn on_screen(&self, monitor: usize, current_desktop: usize) -> bool {
        self.monitor == monitor && self.desktop == current_desktop && !self.hidden
    }

    /// Eligible for the tiling layout on the given (monitor, desktop) pair.
    #[must_use]
    pub fn tiled_on(&self, monitor: usize, current_desktop: usize) -> bool {
        self.on_screen(monitor, current_desktop) && !self.floating() && !self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(WindowHandle(1), WindowHandle(100), Area::new(0, 0, 640, 480))
    }

    #[test]
    fn dialogs_always_float() {
        let mut subject = client();
        subject.r#type = WindowType::Dialog;
        assert!(subject.floating());
        subject.set_floating(false);
        assert!(subject.floating(), "a dialog must stay floating");
    }

    #[test]
    fn fixed_size_clients_float() {
        let mut subject = client();
        subject.hints = SizeHints {
            min_w: 640,
            min_h: 480,
            max_w: 640,
            max_h: 480,
        };
        subject.apply_size_hints();
        assert!(subject.fixed);
        assert!(subject.floating());
    }

    #[test]
    fn size_hints_clamp_the_mapped_area() {
        let mut subject = client();
        subject.hints.min_w = 800;
        subject.apply_size_hints();
        assert_eq!(subject.area.w, 800);
        assert_eq!(subject.area.h, 480);
    }

    #[test]
    fn on_screen_requires_matching_desktop_and_monitor() {
        let mut subject = client();
        subject.monitor = 1;
        subject.desktop = 2;
        assert!(subject.on_screen(1, 2));
        assert!(!subject.on_screen(1, 3));
        assert!(!subject.on_screen(0, 2));
        subject.hidden = true;
        assert!(!subject.on_screen(1, 2));
    }
}
