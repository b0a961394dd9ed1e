use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Manager;
use crate::utils::ipc_socket::IpcSocket;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Run the manager until a terminate command arrives. Returns the
    /// requested exit code.
    ///
    /// # Errors
    ///
    /// Fails at startup when the IPC socket cannot be bound. Steady-state
    /// event handling never returns an error.
    pub async fn event_loop(mut self) -> Result<i32> {
        let socket_file = place_runtime_file(IpcSocket::socket_name())?;
        let mut ipc = IpcSocket::listen(socket_file).await?;

        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();

            let mut needs_update = false;
            tokio::select! {
                _ = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                // IPC commands only run between display events, keeping a
                // single writer to the state.
                Some(request) = ipc.read_request(), if event_buffer.is_empty() => {
                    let reply = self.ipc_command_handler(&request.command);
                    _ = request.reply.send(reply);
                    needs_update = true;
                }
                else => {
                    event_buffer
                        .drain(..)
                        .for_each(|event| needs_update = self.display_event_handler(event) || needs_update);
                }
            }

            // Actions may synthesize new events, handled on the next pass
            // rather than recursively.
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }
            if needs_update {
                self.display_server.flush();
            }

            self.reap_children();

            if let Some(exit_code) = self.state.exit_code {
                ipc.shutdown().await;
                return Ok(exit_code);
            }
        }
    }
}

fn place_runtime_file<P>(path: P) -> Result<PathBuf>
where
    P: AsRef<Path>,
{
    Ok(xdg::BaseDirectories::with_prefix("stripewm")?.place_runtime_file(path)?)
}
