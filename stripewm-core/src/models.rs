mod area;
mod client;
mod manager;
mod mode;
mod monitor;
mod registry;
mod scratchpad;
mod strut;
mod window_type;

pub use area::{Area, Point, SizeHints};
pub use client::{Client, WindowHandle};
pub use manager::Manager;
pub use mode::{DragOrigin, Mode};
pub use monitor::{Desktop, LayoutProps, Monitor, Monitors};
pub use registry::ClientRegistry;
pub use scratchpad::ScratchpadSlot;
pub use strut::{usable_area, Strut};
pub use window_type::WindowType;
