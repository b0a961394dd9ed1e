use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::layouts::LayoutKind;
use crate::models::{LayoutProps, ScratchpadSlot};
use crate::utils::modmask_lookup::{Button, ModMask};

/// One resolved keybind. Keysym resolution from config strings happens in
/// the loader, the core only matches numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub modifier: ModMask,
    pub keysym: u32,
    pub command: Command,
}

/// The immutable tunable snapshot the engine runs against. Implemented by
/// the config loader crate, and by `TestConfig` in the test suite.
pub trait Config {
    fn desktop_names(&self) -> Vec<String>;

    fn keybinds(&self) -> Vec<Keybind>;

    /// Modifier held for interactive move and resize drags.
    fn mousekey(&self) -> ModMask;

    fn create_list_of_scratchpads(&self) -> Vec<ScratchpadSlot>;

    fn border_width(&self) -> i32;
    fn default_border_color(&self) -> String;
    fn focused_border_color(&self) -> String;
    fn urgent_border_color(&self) -> String;

    fn default_layout(&self) -> LayoutKind;
    fn default_nmaster(&self) -> u32;
    /// Upper bound for the master-count increment, checked before mutation.
    fn max_nmaster(&self) -> u32;
    fn default_master_area(&self) -> f32;
    fn master_area_min(&self) -> f32;
    fn master_area_max(&self) -> f32;
    fn master_area_step(&self) -> f32;
    fn default_gap_size(&self) -> i32;
    fn gap_size_min(&self) -> i32;
    fn gap_size_max(&self) -> i32;
    fn gap_size_step(&self) -> i32;
    /// Step applied to a client's manual in-layout size delta.
    fn layout_size_step(&self) -> f32;

    /// Motion events are debounced to at most this many per second.
    fn motion_fps(&self) -> u32;
    fn move_button(&self) -> Button;
    fn resize_button(&self) -> Button;

    fn show_titlebars(&self) -> bool;
    fn titlebar_height(&self) -> i32;

    /// The layout parameters a freshly activated desktop starts with.
    fn default_layout_props(&self) -> LayoutProps {
        LayoutProps {
            nmaster: self.default_nmaster(),
            master_area: self.default_master_area(),
            gap_size: self.default_gap_size(),
            layout: self.default_layout(),
            master_maxed: false,
        }
    }
}

#[cfg(test)]
pub(crate) use tests::TestConfig;
