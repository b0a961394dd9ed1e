//! Physical monitors and their per-desktop state.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use crate::layouts::LayoutKind;

use super::Area;
use super::Point;

/// Per-(monitor, desktop) tiling parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LayoutProps {
    pub nmaster: u32,
    pub master_area: f32,
    pub gap_size: i32,
    pub layout: LayoutKind,
    /// Set when a master client's min-width forced the master column wider
    /// than `master_area` allows; blocks further master-area decrease.
    pub master_maxed: bool,
}

/// One lazily created desktop on a monitor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Desktop {
    pub name: String,
    /// Distinguishes "ever activated" from "pre-allocated".
    pub init: bool,
}

/// A physical display region. Monitors are added as new non-overlapping
/// output areas are discovered and never removed during a session.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Monitor {
    pub index: usize,
    pub area: Area,
    pub desktops: Vec<Desktop>,
    pub layout_props: Vec<LayoutProps>,
    pub current_desktop: usize,
}

impl Monitor {
    #[must_use]
    pub fn new(index: usize, area: Area) -> Self {
        Self {
            index,
            area,
            desktops: Vec::new(),
            layout_props: Vec::new(),
            current_desktop: 0,
        }
    }

    /// Make sure a desktop slot exists and is initialized. Re-creation after
    /// a teardown resets its layout params to the given defaults. Idempotent.
    pub fn ensure_desktop(&mut self, index: usize, names: &[String], defaults: LayoutProps) {
        while self.desktops.len() <= index {
            let slot = self.desktops.len();
            let name = names
                .get(slot)
                .cloned()
                .unwrap_or_else(|| (slot + 1).to_string());
            self.desktops.push(Desktop { name, init: false });
            self.layout_props.push(defaults);
        }
        if let Some(desktop) = self.desktops.get_mut(index) {
            if !desktop.init {
                desktop.init = true;
                self.layout_props[index] = defaults;
            }
        }
    }

    #[must_use]
    pub fn props(&self, desktop: usize) -> Option<&LayoutProps> {
        self.layout_props.get(desktop)
    }

    pub fn props_mut(&mut self, desktop: usize) -> Option<&mut LayoutProps> {
        self.layout_props.get_mut(desktop)
    }

    #[must_use]
    pub fn current_props(&self) -> Option<&LayoutProps> {
        self.layout_props.get(self.current_desktop)
    }
}

/// The list of all known monitors.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Monitors {
    list: Vec<Monitor>,
}

impl Monitors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an output area unless it overlaps an already known monitor.
    /// Returns the index of the new monitor when one was added.
    pub fn add_output(&mut self, area: Area) -> Option<usize> {
        if self.list.iter().any(|m| m.area.overlap(&area) > 0) {
            return None;
        }
        let index = self.list.len();
        self.list.push(Monitor::new(index, area));
        Some(index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Monitor> {
        self.list.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Monitor> {
        self.list.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Monitor> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Monitor> {
        self.list.iter_mut()
    }

    /// Monitor containing the given point, if any.
    #[must_use]
    pub fn at_point(&self, point: Point) -> Option<&Monitor> {
        self.list.iter().find(|m| m.area.contains(point))
    }

    /// Owning monitor for a client area: largest overlap wins, ties are
    /// broken by list order, no overlap falls back to the first monitor.
    /// Deterministic in the area and the monitor list alone.
    #[must_use]
    pub fn index_for_area(&self, area: &Area) -> usize {
        let mut best = 0;
        let mut best_overlap = 0;
        for monitor in &self.list {
            let overlap = monitor.area.overlap(area);
            if overlap > best_overlap {
                best = monitor.index;
                best_overlap = overlap;
            }
        }
        best
    }
}
