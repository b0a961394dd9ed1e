use thiserror::Error;

pub type Result<T> = std::result::Result<T, StripeError>;

#[derive(Debug, Error)]
pub enum StripeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Malformed IPC command: {0}")]
    MalformedIpc(String),
    #[error("IPC service is gone")]
    IpcClosed,
}
