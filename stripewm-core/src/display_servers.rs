#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::Point;
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The opaque display-server capability. Real implementations sit on top
/// of an X transport and do the protocol work; the engine only sees typed
/// events in and actions out.
pub trait DisplayServer {
    fn new(config: &impl Config) -> Self;

    /// Drain every event the server has buffered, without blocking.
    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    /// Apply one outgoing action. May synthesize a follow-up event.
    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    /// Resolves once the event connection is readable again. The event
    /// loop parks here when there is nothing to do.
    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);

    /// Current root-relative cursor position, used by the IPC cursor query.
    fn cursor_position(&self) -> Point;
}
