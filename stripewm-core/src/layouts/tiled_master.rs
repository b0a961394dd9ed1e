//! Master/slave column layout.
//!
//! The first `nmaster` clients share a left column sized by the master-area
//! fraction, everyone else shares the right column. Inside a column each
//! client gets an equal share of the height adjusted by the rolling
//! per-client size delta; the last client absorbs the remainder.

use crate::models::{Area, Client, LayoutProps, WindowHandle};

use super::{clamp_nmaster, slot_to_area};

pub(crate) fn arrange(
    usable: Area,
    clients: &[&Client],
    props: &LayoutProps,
    border: i32,
) -> (Vec<(WindowHandle, Area)>, bool) {
    if clients.is_empty() {
        return (Vec::new(), false);
    }
    let gap = props.gap_size;
    // A lone client takes the full usable width, no master/slave split.
    if let [only] = clients {
        let area = slot_to_area(usable, gap, border, &only.hints);
        return (vec![(only.window, area)], false);
    }

    let nmaster = clamp_nmaster(props.nmaster, clients.len()) as usize;
    let (masters, slaves) = clients.split_at(nmaster);

    let mut master_w = (usable.w as f32 * props.master_area) as i32;
    // A master whose minimum width exceeds the fraction forces the column
    // open and freezes further master-area shrink.
    let master_min = masters.iter().map(|c| c.hints.min_w).max().unwrap_or(0);
    let master_maxed = master_min > master_w;
    if master_maxed {
        master_w = master_min.min(usable.w);
    }

    let mut areas = Vec::with_capacity(clients.len());
    fill_column(
        Area::new(usable.x, usable.y, master_w, usable.h),
        masters,
        gap,
        border,
        &mut areas,
    );
    fill_column(
        Area::new(usable.x + master_w, usable.y, usable.w - master_w, usable.h),
        slaves,
        gap,
        border,
        &mut areas,
    );
    (areas, master_maxed)
}

/// Stack a column's members top to bottom. Each member's height is the
/// equal share plus its own size delta minus the previous member's, so a
/// manual resize borrows space only from the next member. The last member
/// is the remainder and keeps the column height exact.
fn fill_column(
    column: Area,
    members: &[&Client],
    gap: i32,
    border: i32,
    out: &mut Vec<(WindowHandle, Area)>,
) {
    if members.is_empty() {
        return;
    }
    let base = column.h as f32 / members.len() as f32;
    let bottom = column.y + column.h;
    let mut cursor = column.y as f32;
    let mut prev_add = 0.0;
    for (i, client) in members.iter().enumerate() {
        let top = cursor as i32;
        let slot_h = if i == members.len() - 1 {
            bottom - top
        } else {
            let h = base + client.layout_size_add - prev_add;
            cursor += h;
            cursor as i32 - top
        };
        prev_add = client.layout_size_add;
        let slot = Area::new(column.x, top, column.w, slot_h);
        out.push((client.window, slot_to_area(slot, gap, border, &client.hints)));
    }
}
