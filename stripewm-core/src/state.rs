//! The root aggregate every handler mutates through an exclusive borrow.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{Config, Keybind};
use crate::display_action::DisplayAction;
use crate::layouts::{clamp_nmaster, compute_layout};
use crate::models::{
    Client, ClientRegistry, LayoutProps, Mode, Monitors, ScratchpadSlot, Strut, WindowHandle,
};
use crate::utils::modmask_lookup::{Button, ModMask};

#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub clients: ClientRegistry,
    pub monitors: Monitors,
    pub struts: Vec<Strut>,
    pub scratchpads: Vec<ScratchpadSlot>,
    /// Scratchpad slot waiting for its spawned window to map.
    pub pending_scratchpad: Option<usize>,

    pub focused_client: Option<WindowHandle>,
    pub focused_monitor: usize,
    /// Last monitor a focus change landed on, gates the current-desktop
    /// hint republish.
    pub previous_monitor: Option<usize>,

    pub mode: Mode,
    /// Suppress focus-follows-mouse until the next deliberate user action;
    /// layout recomputes synthesize enter-notify churn.
    pub ignore_enter: bool,
    /// Timestamp of the last processed motion event, in milliseconds.
    pub last_motion: u64,

    pub actions: VecDeque<DisplayAction>,
    /// Set by a terminate command; the event loop exits with this code.
    pub exit_code: Option<i32>,

    // Immutable config snapshot for the session.
    pub desktop_names: Vec<String>,
    pub keybinds: Vec<Keybind>,
    pub mousekey: ModMask,
    pub move_button: Button,
    pub resize_button: Button,
    pub border_width: i32,
    pub default_border_color: String,
    pub focused_border_color: String,
    pub urgent_border_color: String,
    pub default_layout_props: LayoutProps,
    pub max_nmaster: u32,
    pub master_area_min: f32,
    pub master_area_max: f32,
    pub master_area_step: f32,
    pub gap_size_min: i32,
    pub gap_size_max: i32,
    pub gap_size_step: i32,
    pub layout_size_step: f32,
    pub motion_fps: u32,
    pub show_titlebars: bool,
    pub titlebar_height: i32,
}

impl State {
    pub fn new(config: &impl Config) -> Self {
        Self {
            clients: ClientRegistry::default(),
            monitors: Monitors::new(),
            struts: Vec::new(),
            scratchpads: config.create_list_of_scratchpads(),
            pending_scratchpad: None,
            focused_client: None,
            focused_monitor: 0,
            previous_monitor: None,
            mode: Mode::Normal,
            ignore_enter: false,
            last_motion: 0,
            actions: VecDeque::new(),
            exit_code: None,
            desktop_names: config.desktop_names(),
            keybinds: config.keybinds(),
            mousekey: config.mousekey(),
            move_button: config.move_button(),
            resize_button: config.resize_button(),
            border_width: config.border_width(),
            default_border_color: config.default_border_color(),
            focused_border_color: config.focused_border_color(),
            urgent_border_color: config.urgent_border_color(),
            default_layout_props: config.default_layout_props(),
            max_nmaster: config.max_nmaster(),
            master_area_min: config.master_area_min(),
            master_area_max: config.master_area_max(),
            master_area_step: config.master_area_step(),
            gap_size_min: config.gap_size_min(),
            gap_size_max: config.gap_size_max(),
            gap_size_step: config.gap_size_step(),
            layout_size_step: config.layout_size_step(),
            motion_fps: config.motion_fps(),
            show_titlebars: config.show_titlebars(),
            titlebar_height: config.titlebar_height(),
        }
    }

    #[must_use]
    pub fn focused_client(&self) -> Option<&Client> {
        self.clients.get(self.focused_client?)
    }

    /// True when this motion event is far enough from the last processed
    /// one; records it as processed when it is.
    pub fn motion_due(&mut self, time: u64) -> bool {
        let interval = 1000 / u64::from(self.motion_fps.max(1));
        if time.saturating_sub(self.last_motion) < interval {
            return false;
        }
        self.last_motion = time;
        true
    }

    /// Recompute the tiling layout for a monitor's current desktop and
    /// queue the geometry actions. Synthesized enter-notify events from
    /// the moves must not churn focus, so the ignore flag goes up.
    pub fn update_layout(&mut self, monitor: usize) {
        let Some(mon) = self.monitors.get(monitor) else {
            return;
        };
        let desktop = mon.current_desktop;
        let area = mon.area;
        let tiled = self.clients.tiled_on(monitor, desktop);
        if tiled.is_empty() {
            return;
        }
        let Some(props) = mon.props(desktop) else {
            return;
        };
        let mut props = *props;
        props.nmaster = clamp_nmaster(props.nmaster, tiled.len());
        let struts: Vec<Strut> = self
            .struts
            .iter()
            .filter(|s| s.applies_to(&area))
            .copied()
            .collect();
        let (areas, master_maxed) =
            compute_layout(area, &tiled, &struts, &props, self.border_width);
        props.master_maxed = master_maxed;
        if let Some(stored) = self
            .monitors
            .get_mut(monitor)
            .and_then(|m| m.props_mut(desktop))
        {
            *stored = props;
        }

        let show_titlebars = self.show_titlebars;
        for (window, new_area) in areas {
            let Some(client) = self.clients.get_mut(window) else {
                continue;
            };
            client.area = new_area;
            let frame = client.frame;
            let name = client.name.clone();
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(frame, new_area));
            if show_titlebars {
                self.actions
                    .push_back(DisplayAction::RefreshTitlebar(frame, new_area, name));
            }
        }
        self.ignore_enter = true;
    }

    pub fn update_all_layouts(&mut self) {
        for monitor in 0..self.monitors.len() {
            self.update_layout(monitor);
        }
    }

    /// Clear every manual in-layout size delta on a monitor's current
    /// desktop. Runs when the client set changes shape.
    pub fn reset_layout_size_adds(&mut self, monitor: usize) {
        let Some(desktop) = self.monitors.get(monitor).map(|m| m.current_desktop) else {
            return;
        };
        for client in self.clients.iter_mut() {
            if client.monitor == monitor && client.desktop == desktop {
                client.layout_size_add = 0.0;
            }
        }
    }

    /// Make sure a desktop exists on a monitor before anything references
    /// it. Safe to call repeatedly.
    pub fn ensure_desktop(&mut self, monitor: usize, desktop: usize) {
        let names = self.desktop_names.clone();
        let defaults = self.default_layout_props;
        if let Some(mon) = self.monitors.get_mut(monitor) {
            mon.ensure_desktop(desktop, &names, defaults);
        }
    }
}
