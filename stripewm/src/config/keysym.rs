//! Key name to X11 keysym resolution for the keybind table.
//!
//! Latin-1 keys map directly to their codepoint per the X protocol; the
//! function and navigation keys use their fixed `XK_*` values.

/// Resolve a config key name to its keysym value.
#[must_use]
pub fn lookup(name: &str) -> Option<u32> {
    // Single Latin-1 characters are their own keysym.
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if ('\u{20}'..='\u{ff}').contains(&c) {
            return Some(c as u32);
        }
    }
    let keysym = match name {
        "space" => 0x0020,
        "exclam" => 0x0021,
        "numbersign" => 0x0023,
        "percent" => 0x0025,
        "apostrophe" => 0x0027,
        "plus" => 0x002b,
        "comma" => 0x002c,
        "minus" => 0x002d,
        "period" => 0x002e,
        "slash" => 0x002f,
        "semicolon" => 0x003b,
        "equal" => 0x003d,
        "bracketleft" => 0x005b,
        "backslash" => 0x005c,
        "bracketright" => 0x005d,
        "grave" => 0x0060,
        "BackSpace" => 0xff08,
        "Tab" => 0xff09,
        "Return" => 0xff0d,
        "Pause" => 0xff13,
        "Escape" => 0xff1b,
        "Delete" => 0xffff,
        "Home" => 0xff50,
        "Left" => 0xff51,
        "Up" => 0xff52,
        "Right" => 0xff53,
        "Down" => 0xff54,
        "Page_Up" | "Prior" => 0xff55,
        "Page_Down" | "Next" => 0xff56,
        "End" => 0xff57,
        "Insert" => 0xff63,
        "F1" => 0xffbe,
        "F2" => 0xffbf,
        "F3" => 0xffc0,
        "F4" => 0xffc1,
        "F5" => 0xffc2,
        "F6" => 0xffc3,
        "F7" => 0xffc4,
        "F8" => 0xffc5,
        "F9" => 0xffc6,
        "F10" => 0xffc7,
        "F11" => 0xffc8,
        "F12" => 0xffc9,
        "XF86_AudioRaiseVolume" => 0x1008_ff13,
        "XF86_AudioLowerVolume" => 0x1008_ff11,
        "XF86_AudioMute" => 0x1008_ff12,
        "XF86_MonBrightnessUp" => 0x1008_ff02,
        "XF86_MonBrightnessDown" => 0x1008_ff03,
        _ => return None,
    };
    Some(keysym)
}
