//! Binary IPC command protocol.
//!
//! Commands arrive as `[1 byte id][4 byte big-endian payload length][payload]`
//! over a Unix socket, one command per connection. Replies are written back on
//! the same connection before it is closed.

use crate::errors::{Result, StripeError};
use crate::models::{Area, WindowHandle};

/// Largest payload the server will read. Every known command fits well
/// below this, anything longer is a protocol violation.
pub const MAX_PAYLOAD: u32 = 256;

/// The value written for "no window" and "no monitor" replies.
const NONE_ID: i32 = -1;

/// A decoded command from an IPC client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcCommand {
    Terminate { exit_code: i32 },
    GetWindows,
    KillWindow(WindowHandle),
    FocusWindow(WindowHandle),
    NextWindow(WindowHandle),
    FirstWindow,
    GetFocus,
    GetMonitorFocus,
    GetCursor,
    GetWindowArea(WindowHandle),
}

/// What the manager sends back for a command.
#[derive(Debug, Clone, PartialEq)]
pub enum IpcReply {
    None,
    Windows(Vec<WindowHandle>),
    Window(Option<WindowHandle>),
    MonitorIndex(Option<usize>),
    Cursor(f32, f32),
    WindowArea(Option<Area>),
}

/// Payload size each command id must carry, `None` for unknown ids.
#[must_use]
pub const fn expected_payload_len(id: u8) -> Option<u32> {
    match id {
        0 => Some(4),
        1 => Some(0),
        2..=4 => Some(4),
        5..=8 => Some(0),
        9 => Some(4),
        _ => None,
    }
}

/// Decode a command from its id byte and payload.
///
/// # Errors
///
/// Returns `MalformedIpc` for unknown ids or a payload length mismatch.
pub fn decode_command(id: u8, payload: &[u8]) -> Result<IpcCommand> {
    let expected = expected_payload_len(id)
        .ok_or_else(|| StripeError::MalformedIpc(format!("unknown command id {id}")))?;
    if payload.len() as u32 != expected {
        return Err(StripeError::MalformedIpc(format!(
            "command {id} expects {expected} payload bytes, got {}",
            payload.len()
        )));
    }
    let arg = || -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(payload);
        u32::from_be_bytes(buf)
    };
    let command = match id {
        0 => IpcCommand::Terminate {
            exit_code: arg() as i32,
        },
        1 => IpcCommand::GetWindows,
        2 => IpcCommand::KillWindow(WindowHandle(arg())),
        3 => IpcCommand::FocusWindow(WindowHandle(arg())),
        4 => IpcCommand::NextWindow(WindowHandle(arg())),
        5 => IpcCommand::FirstWindow,
        6 => IpcCommand::GetFocus,
        7 => IpcCommand::GetMonitorFocus,
        8 => IpcCommand::GetCursor,
        9 => IpcCommand::GetWindowArea(WindowHandle(arg())),
        _ => unreachable!("expected_payload_len rejects unknown ids"),
    };
    Ok(command)
}

/// Serialize a reply. All integers and floats are big-endian.
#[must_use]
pub fn encode_reply(reply: &IpcReply) -> Vec<u8> {
    match reply {
        IpcReply::None => Vec::new(),
        IpcReply::Windows(windows) => {
            let mut out = Vec::with_capacity(4 + windows.len() * 4);
            out.extend_from_slice(&(windows.len() as u32).to_be_bytes());
            for window in windows {
                out.extend_from_slice(&window.0.to_be_bytes());
            }
            out
        }
        IpcReply::Window(window) => window
            .map_or(NONE_ID.to_be_bytes(), |w| w.0.to_be_bytes())
            .to_vec(),
        IpcReply::MonitorIndex(index) => index
            .map_or(NONE_ID.to_be_bytes(), |i| (i as i32).to_be_bytes())
            .to_vec(),
        IpcReply::Cursor(x, y) => {
            let mut out = Vec::with_capacity(8);
            out.extend_from_slice(&x.to_be_bytes());
            out.extend_from_slice(&y.to_be_bytes());
            out
        }
        IpcReply::WindowArea(area) => {
            let mut out = Vec::with_capacity(16);
            let fields = area.map_or([-1.0f32; 4], |a| {
                [a.x as f32, a.y as f32, a.w as f32, a.h as f32]
            });
            for field in fields {
                out.extend_from_slice(&field.to_be_bytes());
            }
            out
        }
    }
}

/// Encode a command the way a client sends it, header included.
#[must_use]
pub fn encode_command(command: &IpcCommand) -> Vec<u8> {
    let (id, payload) = match command {
        IpcCommand::Terminate { exit_code } => (0u8, Some(*exit_code as u32)),
        IpcCommand::GetWindows => (1, None),
        IpcCommand::KillWindow(w) => (2, Some(w.0)),
        IpcCommand::FocusWindow(w) => (3, Some(w.0)),
        IpcCommand::NextWindow(w) => (4, Some(w.0)),
        IpcCommand::FirstWindow => (5, None),
        IpcCommand::GetFocus => (6, None),
        IpcCommand::GetMonitorFocus => (7, None),
        IpcCommand::GetCursor => (8, None),
        IpcCommand::GetWindowArea(w) => (9, Some(w.0)),
    };
    let mut out = Vec::with_capacity(9);
    out.push(id);
    match payload {
        Some(value) => {
            out.extend_from_slice(&4u32.to_be_bytes());
            out.extend_from_slice(&value.to_be_bytes());
        }
        None => out.extend_from_slice(&0u32.to_be_bytes()),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_decode_from_their_wire_form() {
        let bytes = encode_command(&IpcCommand::KillWindow(WindowHandle(42)));
        assert_eq!(bytes[0], 2);
        assert_eq!(&bytes[1..5], &4u32.to_be_bytes());
        let decoded = decode_command(bytes[0], &bytes[5..]).unwrap();
        assert_eq!(decoded, IpcCommand::KillWindow(WindowHandle(42)));
    }

    #[test]
    fn terminate_carries_a_signed_exit_code() {
        let bytes = encode_command(&IpcCommand::Terminate { exit_code: -2 });
        let decoded = decode_command(bytes[0], &bytes[5..]).unwrap();
        assert_eq!(decoded, IpcCommand::Terminate { exit_code: -2 });
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(decode_command(200, &[]).is_err());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert!(decode_command(2, &[0, 0]).is_err());
        assert!(decode_command(1, &[0, 0, 0, 1]).is_err());
    }

    #[test]
    fn window_list_reply_is_count_then_ids() {
        let reply = IpcReply::Windows(vec![
            WindowHandle(3),
            WindowHandle(2),
            WindowHandle(1),
        ]);
        let bytes = encode_reply(&reply);
        assert_eq!(&bytes[0..4], &3u32.to_be_bytes());
        assert_eq!(&bytes[4..8], &3u32.to_be_bytes());
        assert_eq!(&bytes[8..12], &2u32.to_be_bytes());
        assert_eq!(&bytes[12..16], &1u32.to_be_bytes());
    }

    #[test]
    fn missing_window_encodes_as_minus_one() {
        assert_eq!(encode_reply(&IpcReply::Window(None)), (-1i32).to_be_bytes());
        assert_eq!(
            encode_reply(&IpcReply::MonitorIndex(None)),
            (-1i32).to_be_bytes()
        );
    }

    #[test]
    fn window_area_reply_is_four_floats() {
        let bytes = encode_reply(&IpcReply::WindowArea(Some(Area::new(10, 20, 300, 400))));
        assert_eq!(&bytes[0..4], &10.0f32.to_be_bytes());
        assert_eq!(&bytes[4..8], &20.0f32.to_be_bytes());
        assert_eq!(&bytes[8..12], &300.0f32.to_be_bytes());
        assert_eq!(&bytes[12..16], &400.0f32.to_be_bytes());
    }
}
