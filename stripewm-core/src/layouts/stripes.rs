//! Vertical and horizontal stripe layouts.
//!
//! All tiled clients form one sequence of equal shares along a single axis,
//! adjusted by the same rolling size-delta scheme as the master layout.

use crate::models::{Area, Client, LayoutProps, WindowHandle};

use super::slot_to_area;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Columns side by side, full height each.
    Vertical,
    /// Rows stacked, full width each.
    Horizontal,
}

pub(crate) fn arrange(
    usable: Area,
    clients: &[&Client],
    props: &LayoutProps,
    border: i32,
    direction: Direction,
) -> Vec<(WindowHandle, Area)> {
    if clients.is_empty() {
        return Vec::new();
    }
    let gap = props.gap_size;
    let span = match direction {
        Direction::Vertical => usable.w,
        Direction::Horizontal => usable.h,
    };
    let base = span as f32 / clients.len() as f32;
    let end = match direction {
        Direction::Vertical => usable.x + usable.w,
        Direction::Horizontal => usable.y + usable.h,
    };
    let mut cursor = match direction {
        Direction::Vertical => usable.x,
        Direction::Horizontal => usable.y,
    } as f32;
    let mut prev_add = 0.0;

    let mut areas = Vec::with_capacity(clients.len());
    for (i, client) in clients.iter().enumerate() {
        let start = cursor as i32;
        let share = if i == clients.len() - 1 {
            end - start
        } else {
            cursor += base + client.layout_size_add - prev_add;
            cursor as i32 - start
        };
        prev_add = client.layout_size_add;
        let slot = match direction {
            Direction::Vertical => Area::new(start, usable.y, share, usable.h),
            Direction::Horizontal => Area::new(usable.x, start, usable.w, share),
        };
        areas.push((client.window, slot_to_area(slot, gap, border, &client.hints)));
    }
    areas
}
