use super::Config;
use super::DisplayEvent;
use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::models::Point;

#[derive(Clone, Default)]
pub struct MockDisplayServer {
    /// Everything the manager asked us to do, in order.
    pub actions: Vec<DisplayAction>,
    pub cursor: Point,
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        vec![]
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        self.actions.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        unimplemented!()
    }

    fn flush(&self) {}

    fn cursor_position(&self) -> Point {
        self.cursor
    }
}
