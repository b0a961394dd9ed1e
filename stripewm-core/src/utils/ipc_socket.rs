//! Unix socket service for the binary IPC protocol.
//!
//! Connections are accepted and decoded off the main loop. Each decoded
//! command is forwarded over a channel together with a oneshot reply slot,
//! so all state access stays on the event loop task.
use std::env;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::{mpsc, oneshot};

use crate::errors::{Result, StripeError};
use crate::ipc::{decode_command, encode_reply, IpcCommand, IpcReply, MAX_PAYLOAD};

/// One decoded command waiting for the event loop, with its reply slot.
#[derive(Debug)]
pub struct IpcRequest {
    pub command: IpcCommand,
    pub reply: oneshot::Sender<IpcReply>,
}

/// Holds the socket path, the accept task and the request receiver.
#[derive(Debug)]
pub struct IpcSocket {
    rx: mpsc::UnboundedReceiver<IpcRequest>,
    listener: Option<tokio::task::JoinHandle<()>>,
    socket_file: PathBuf,
}

impl IpcSocket {
    /// Bind the Unix socket and start accepting connections.
    ///
    /// # Errors
    ///
    /// Will error if the socket cannot be bound, likely a filesystem issue
    /// such as inadequate permissions or a dead parent directory.
    pub async fn listen(socket_file: PathBuf) -> Result<Self> {
        let listener = match UnixListener::bind(&socket_file) {
            Ok(listener) => listener,
            Err(_) => {
                // A previous instance may have left a stale socket behind.
                fs::remove_file(socket_file.as_path()).await?;
                UnixListener::bind(&socket_file)?
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, _)) => {
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            if let Err(err) = handle_connection(stream, tx).await {
                                tracing::warn!("Dropping IPC connection: {err}");
                            }
                        });
                    }
                    Err(err) => tracing::error!("IPC accept failed: {err:?}"),
                }
            }
        });

        Ok(Self {
            rx,
            listener: Some(task),
            socket_file,
        })
    }

    /// Well-known socket path for the current display.
    #[must_use]
    pub fn socket_name() -> PathBuf {
        let display = env::var("DISPLAY")
            .ok()
            .and_then(|d| d.rsplit_once(':').map(|(_, r)| r.to_owned()))
            .unwrap_or_else(|| "0".to_string());

        PathBuf::from(format!("stripewm-{display}.sock"))
    }

    /// Next pending request, `None` once the service is shut down.
    pub async fn read_request(&mut self) -> Option<IpcRequest> {
        self.rx.recv().await
    }

    /// Stop accepting connections and remove the socket file.
    pub async fn shutdown(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            listener.await.ok();
            fs::remove_file(self.socket_file.as_path()).await.ok();
        }
        self.rx.close();
    }
}

/// One connection carries exactly one command. A malformed header or
/// payload closes the connection without touching manager state.
async fn handle_connection(
    mut stream: UnixStream,
    tx: mpsc::UnboundedSender<IpcRequest>,
) -> Result<()> {
    let mut header = [0u8; 5];
    stream.read_exact(&mut header).await?;
    let id = header[0];
    let len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]);
    if len > MAX_PAYLOAD {
        return Err(StripeError::MalformedIpc(format!(
            "payload length {len} exceeds limit"
        )));
    }
    let mut payload = vec![0u8; len as usize];
    stream.read_exact(&mut payload).await?;
    let command = decode_command(id, &payload)?;

    let (reply_tx, reply_rx) = oneshot::channel();
    tx.send(IpcRequest {
        command,
        reply: reply_tx,
    })
    .map_err(|_| StripeError::IpcClosed)?;
    let reply = reply_rx.await.map_err(|_| StripeError::IpcClosed)?;

    stream.write_all(&encode_reply(&reply)).await?;
    stream.shutdown().await.ok();
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ipc::encode_command;
    use crate::models::WindowHandle;
    use crate::utils::helpers::test::temp_path;

    async fn roundtrip(socket: PathBuf, command: IpcCommand) -> Vec<u8> {
        let mut stream = UnixStream::connect(socket).await.unwrap();
        stream.write_all(&encode_command(&command)).await.unwrap();
        let mut reply = Vec::new();
        stream.read_to_end(&mut reply).await.unwrap();
        reply
    }

    #[tokio::test]
    async fn request_reaches_the_drain_and_reply_reaches_the_client() {
        let socket_file = temp_path().await.unwrap();
        fs::remove_file(socket_file.as_path()).await.unwrap();
        let mut ipc = IpcSocket::listen(socket_file.clone()).await.unwrap();

        let client = tokio::spawn(roundtrip(
            socket_file.clone(),
            IpcCommand::NextWindow(WindowHandle(7)),
        ));

        let request = ipc.read_request().await.unwrap();
        assert_eq!(request.command, IpcCommand::NextWindow(WindowHandle(7)));
        request
            .reply
            .send(IpcReply::Window(Some(WindowHandle(9))))
            .unwrap();

        assert_eq!(client.await.unwrap(), 9u32.to_be_bytes());
        ipc.shutdown().await;
    }

    #[tokio::test]
    async fn malformed_command_closes_the_connection_only() {
        let socket_file = temp_path().await.unwrap();
        fs::remove_file(socket_file.as_path()).await.unwrap();
        let mut ipc = IpcSocket::listen(socket_file.clone()).await.unwrap();

        // Unknown id, empty payload. The connection closes with no reply.
        {
            let mut stream = UnixStream::connect(socket_file.clone()).await.unwrap();
            stream
                .write_all(&[250, 0, 0, 0, 0])
                .await
                .unwrap();
            let mut reply = Vec::new();
            stream.read_to_end(&mut reply).await.unwrap();
            assert!(reply.is_empty());
        }

        // The service keeps accepting well-formed commands afterwards.
        let client = tokio::spawn(roundtrip(socket_file.clone(), IpcCommand::GetFocus));
        let request = ipc.read_request().await.unwrap();
        assert_eq!(request.command, IpcCommand::GetFocus);
        request.reply.send(IpcReply::Window(None)).unwrap();
        assert_eq!(client.await.unwrap(), (-1i32).to_be_bytes());
        ipc.shutdown().await;
    }

    #[tokio::test]
    async fn oversized_length_is_rejected() {
        let socket_file = temp_path().await.unwrap();
        fs::remove_file(socket_file.as_path()).await.unwrap();
        let mut ipc = IpcSocket::listen(socket_file.clone()).await.unwrap();

        let mut stream = UnixStream::connect(socket_file.clone()).await.unwrap();
        let mut bytes = vec![1u8];
        bytes.extend_from_slice(&(MAX_PAYLOAD + 1).to_be_bytes());
        stream.write_all(&bytes).await.unwrap();
        let mut reply = Vec::new();
        stream.read_to_end(&mut reply).await.unwrap();
        assert!(reply.is_empty());
        ipc.shutdown().await;
    }

    #[tokio::test]
    async fn socket_cleanup() {
        let socket_file = temp_path().await.unwrap();
        fs::remove_file(socket_file.as_path()).await.unwrap();
        let mut ipc = IpcSocket::listen(socket_file.clone()).await.unwrap();
        ipc.shutdown().await;
        assert!(!socket_file.exists());
    }

    #[tokio::test]
    async fn socket_already_bound() {
        let socket_file = temp_path().await.unwrap();
        fs::remove_file(socket_file.as_path()).await.unwrap();
        let mut old = IpcSocket::listen(socket_file.clone()).await.unwrap();
        assert!(socket_file.exists());
        let mut new = IpcSocket::listen(socket_file.clone()).await.unwrap();
        new.shutdown().await;
        assert!(!socket_file.exists());
        old.shutdown().await;
    }
}
