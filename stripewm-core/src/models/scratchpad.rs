use serde::{Deserialize, Serialize};

use super::WindowHandle;

/// A configured scratchpad slot. The window is spawned on first toggle and
/// shown or hidden on later toggles until it dies.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScratchpadSlot {
    pub name: String,
    /// Shell command used to (re)spawn the scratchpad client.
    pub command: String,
    /// Width and height as a fraction of the monitor, centered.
    pub width_ratio: f32,
    pub height_ratio: f32,
    pub window: Option<WindowHandle>,
    pub hidden: bool,
    /// The attached window went away, respawn on the next toggle.
    pub needs_restart: bool,
}

impl ScratchpadSlot {
    #[must_use]
    pub fn new(name: String, command: String, width_ratio: f32, height_ratio: f32) -> Self {
        Self {
            name,
            command,
            width_ratio,
            height_ratio,
            window: None,
            hidden: false,
            needs_restart: false,
        }
    }

    /// Forget the attached window, a later toggle spawns it again.
    pub fn detach(&mut self) {
        self.window = None;
        self.hidden = false;
        self.needs_restart = true;
    }
}
