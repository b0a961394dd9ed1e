//! Core window management: state, layouts, event handlers and the IPC
//! protocol. Display-server specifics live behind the [`DisplayServer`]
//! trait.
#![warn(clippy::pedantic)]
// Globally allowed because they otherwise make a lot of noise around
// geometry math and serde glue.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod ipc;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use command::Command;
pub use config::{Config, Keybind};
pub use display_action::DisplayAction;
pub use display_event::{
    ConfigureParams, DisplayEvent, EnterTarget, TitlebarZone, WindowChange, WindowSpec,
};
pub use display_servers::DisplayServer;
pub use ipc::{IpcCommand, IpcReply};
pub use layouts::LayoutKind;
pub use models::{Manager, Mode};
pub use state::State;
pub use utils::child_process;
pub use utils::ipc_socket::{IpcRequest, IpcSocket};
pub use utils::modmask_lookup::{Button, ModMask};
