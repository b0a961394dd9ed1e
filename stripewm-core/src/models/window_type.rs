use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    Dialog,
    Dock,
    Splash,
    #[default]
    Normal,
}

impl WindowType {
    /// Dialogs and splashes never join the tiling layout.
    #[must_use]
    pub fn must_float(self) -> bool {
        matches!(self, WindowType::Dialog | WindowType::Splash)
    }
}
