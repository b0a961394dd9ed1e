pub mod command_handler;
mod configure_handler;
mod desktop_handler;
pub mod display_event_handler;
mod focus_handler;
mod fullscreen_handler;
mod monitor_handler;
mod mouse_handler;
mod scratchpad_handler;
mod window_handler;
