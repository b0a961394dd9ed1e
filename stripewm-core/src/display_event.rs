use crate::models::{Area, Point, SizeHints, Strut, WindowHandle, WindowType};
use crate::utils::modmask_lookup::{Button, ModMask};

/// Everything the manager needs to adopt a newly mapped window. The
/// display server resolves geometry, hints and properties before the event
/// is delivered, so handlers never issue synchronous queries. The frame
/// window is created by the server when it builds this event.
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub window: WindowHandle,
    pub frame: WindowHandle,
    pub area: Area,
    pub hints: SizeHints,
    pub r#type: WindowType,
    pub name: String,
    pub override_redirect: bool,
    /// Reserved-space hint scanned off dock windows.
    pub strut: Option<Strut>,
    /// Advertises WM_DELETE_WINDOW, polite kills are possible.
    pub supports_delete: bool,
    /// Cursor position at map time, decides immediate focus.
    pub cursor: Point,
}

/// What an enter-notify landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterTarget {
    Root,
    Window(WindowHandle),
    Titlebar(WindowHandle),
}

/// Titlebar hot zone hit by a button press, resolved by the server from
/// the click offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlebarZone {
    #[default]
    None,
    Close,
    AddToLayout,
}

/// A configure request as forwarded from an application; unset fields were
/// not present in the request's value mask.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigureParams {
    pub window: WindowHandle,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub border: Option<i32>,
    pub raise: bool,
}

/// A property change on a managed window.
#[derive(Debug, Clone)]
pub struct WindowChange {
    pub window: WindowHandle,
    pub r#type: Option<WindowType>,
    pub name: Option<String>,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug)]
pub enum DisplayEvent {
    WindowMap(WindowSpec),
    WindowUnmap(WindowHandle),
    WindowDestroy(WindowHandle),
    MouseEnter(EnterTarget),
    KeyCombo(ModMask, u32),
    MouseCombo(ModMask, Button, WindowHandle, Point, TitlebarZone),
    /// Pointer motion with the still-held button, timestamped for debounce.
    Movement(Point, Button, u64),
    ConfigureRequest(ConfigureParams),
    /// Root geometry changed, outputs were re-enumerated.
    OutputsChanged(Vec<Area>),
    WindowChange(WindowChange),
    /// EWMH fullscreen client message: 0 = off, 1 = on, 2 = toggle.
    FullscreenRequest(WindowHandle, u32),
    /// EWMH active-window request.
    ActiveRequest(WindowHandle),
}
