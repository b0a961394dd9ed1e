//! The tiling layout engine.
//!
//! `compute_layout` is a pure function from monitor geometry, client list and
//! layout parameters to one area per tiled client. Callers persist the
//! returned `master_maxed` flag and apply the areas through display actions.

pub mod stripes;
pub mod tiled_master;

use serde::{Deserialize, Serialize};

use crate::models::{usable_area, Area, Client, LayoutProps, SizeHints, Strut, WindowHandle};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    TiledMaster,
    VerticalStripes,
    HorizontalStripes,
    Floating,
}

impl LayoutKind {
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Floating)
    }
}

/// Keep at least one slave when more than one client is tiled. With a
/// single client the master count stays at one so no split ever divides
/// by zero.
#[must_use]
pub fn clamp_nmaster(nmaster: u32, tiled_count: usize) -> u32 {
    if tiled_count > 1 {
        nmaster.clamp(1, (tiled_count - 1) as u32)
    } else {
        nmaster.max(1)
    }
}

/// Compute one area per tiled client.
///
/// Struts from other monitors must already be filtered out by
/// `Strut::applies_to`; the remaining ones shrink the usable rectangle
/// before any layout runs. The second return value is the new
/// `master_maxed` flag for the (monitor, desktop) pair.
#[must_use]
pub fn compute_layout(
    monitor_area: Area,
    clients: &[&Client],
    struts: &[Strut],
    props: &LayoutProps,
    border: i32,
) -> (Vec<(WindowHandle, Area)>, bool) {
    let usable = usable_area(monitor_area, struts);
    match props.layout {
        LayoutKind::Floating => (Vec::new(), false),
        LayoutKind::TiledMaster => tiled_master::arrange(usable, clients, props, border),
        LayoutKind::VerticalStripes => (
            stripes::arrange(usable, clients, props, border, stripes::Direction::Vertical),
            false,
        ),
        LayoutKind::HorizontalStripes => (
            stripes::arrange(usable, clients, props, border, stripes::Direction::Horizontal),
            false,
        ),
    }
}

/// Shrink a layout slot by gaps and border, then clamp to the client's
/// size hints. Gaps only ever shrink, never grow.
pub(crate) fn slot_to_area(slot: Area, gap: i32, border: i32, hints: &SizeHints) -> Area {
    let inset = gap + border;
    let (w, h) = hints.constrain(slot.w - 2 * inset, slot.h - 2 * inset);
    Area::new(slot.x + gap, slot.y + gap, w, h)
}
