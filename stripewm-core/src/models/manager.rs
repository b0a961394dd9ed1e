use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::state::State;
use crate::utils::child_process::Children;

/// Ties the pure window manager state to a display server backend and to
/// the processes it spawned.
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub children: Children,
    pub reap_requested: Arc<AtomicBool>,
    pub display_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(config: C) -> Self {
        Self {
            state: State::new(&config),
            display_server: SERVER::new(&config),
            config,
            children: Default::default(),
            reap_requested: Default::default(),
        }
    }

    pub fn register_child_hook(&self) {
        crate::utils::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Reap any exited children if a SIGCHLD arrived since the last pass.
    pub fn reap_children(&mut self) {
        if self.reap_requested.swap(false, Ordering::SeqCst) {
            self.children.remove_finished_children();
        }
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test(desktop_names: Vec<String>) -> Self {
        use crate::config::TestConfig;
        Self::new(TestConfig {
            desktop_names,
            ..TestConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    #[test]
    fn a_sigchld_flag_reaps_exited_children() {
        let mut manager = Manager::new_test(vec!["1".to_string()]);
        let mut child = Command::new("true")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .unwrap();
        child.wait().unwrap();
        manager.children.insert(child);
        assert_eq!(manager.children.len(), 1);

        manager.reap_requested.store(true, Ordering::SeqCst);
        manager.reap_children();
        assert!(manager.children.is_empty());
        // The flag was consumed by the pass.
        assert!(!manager.reap_requested.load(Ordering::SeqCst));
    }

    #[test]
    fn no_reap_without_a_pending_sigchld() {
        let mut manager = Manager::new_test(vec!["1".to_string()]);
        let mut child = Command::new("true")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .unwrap();
        child.wait().unwrap();
        manager.children.insert(child);
        manager.reap_children();
        assert_eq!(manager.children.len(), 1);
    }
}
