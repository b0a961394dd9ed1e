//! One-shot IPC client: connect, send a single command, print the reply.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stripewm_core::ipc::encode_command;
use stripewm_core::models::WindowHandle;
use stripewm_core::{IpcCommand, IpcSocket};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use xdg::BaseDirectories;

#[derive(Parser)]
#[command(name = "stripewm-command", about = "Sends external commands to stripewm")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Shut the window manager down.
    Terminate {
        #[arg(default_value_t = 0)]
        exit_code: i32,
    },
    /// List all managed window ids, most recently mapped first.
    GetWindows,
    /// Politely close a window, or destroy it if it refuses.
    KillWindow { window: u32 },
    /// Focus a window by id.
    FocusWindow { window: u32 },
    /// Print the window after the given one in mapping order.
    NextWindow { window: u32 },
    /// Print the most recently mapped window.
    FirstWindow,
    /// Print the focused window.
    GetFocus,
    /// Print the focused monitor index.
    GetMonitorFocus,
    /// Print the cursor position.
    GetCursor,
    /// Print a window's position and size.
    GetWindowArea { window: u32 },
}

impl CliCommand {
    fn into_ipc(self) -> IpcCommand {
        match self {
            CliCommand::Terminate { exit_code } => IpcCommand::Terminate { exit_code },
            CliCommand::GetWindows => IpcCommand::GetWindows,
            CliCommand::KillWindow { window } => IpcCommand::KillWindow(WindowHandle(window)),
            CliCommand::FocusWindow { window } => IpcCommand::FocusWindow(WindowHandle(window)),
            CliCommand::NextWindow { window } => IpcCommand::NextWindow(WindowHandle(window)),
            CliCommand::FirstWindow => IpcCommand::FirstWindow,
            CliCommand::GetFocus => IpcCommand::GetFocus,
            CliCommand::GetMonitorFocus => IpcCommand::GetMonitorFocus,
            CliCommand::GetCursor => IpcCommand::GetCursor,
            CliCommand::GetWindowArea { window } => IpcCommand::GetWindowArea(WindowHandle(window)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.into_ipc();

    let socket_name = IpcSocket::socket_name();
    let socket_file = BaseDirectories::with_prefix("stripewm")?
        .find_runtime_file(&socket_name)
        .with_context(|| format!("couldn't find {}, is stripewm running?", socket_name.display()))?;

    let mut stream = UnixStream::connect(&socket_file)
        .await
        .with_context(|| format!("couldn't connect to {}", socket_file.display()))?;
    stream.write_all(&encode_command(&command)).await?;
    stream.shutdown().await?;

    let mut reply = Vec::new();
    stream.read_to_end(&mut reply).await?;
    print_reply(&command, &reply)
}

fn print_reply(command: &IpcCommand, reply: &[u8]) -> Result<()> {
    match command {
        IpcCommand::Terminate { .. }
        | IpcCommand::KillWindow(_)
        | IpcCommand::FocusWindow(_) => Ok(()),
        IpcCommand::GetWindows => {
            let count = read_u32(reply, 0)? as usize;
            for i in 0..count {
                println!("{}", read_u32(reply, 4 + i * 4)?);
            }
            Ok(())
        }
        IpcCommand::NextWindow(_) | IpcCommand::FirstWindow | IpcCommand::GetFocus => {
            print_optional_id(reply)
        }
        IpcCommand::GetMonitorFocus => print_optional_id(reply),
        IpcCommand::GetCursor => {
            println!("{} {}", read_f32(reply, 0)?, read_f32(reply, 4)?);
            Ok(())
        }
        IpcCommand::GetWindowArea(_) => {
            let x = read_f32(reply, 0)?;
            if x < 0.0 {
                bail!("no such window");
            }
            println!(
                "{} {} {} {}",
                x,
                read_f32(reply, 4)?,
                read_f32(reply, 8)?,
                read_f32(reply, 12)?
            );
            Ok(())
        }
    }
}

fn print_optional_id(reply: &[u8]) -> Result<()> {
    let id = read_u32(reply, 0)? as i32;
    if id < 0 {
        bail!("none");
    }
    println!("{id}");
    Ok(())
}

fn read_u32(reply: &[u8], offset: usize) -> Result<u32> {
    let bytes: [u8; 4] = reply
        .get(offset..offset + 4)
        .context("reply truncated")?
        .try_into()?;
    Ok(u32::from_be_bytes(bytes))
}

fn read_f32(reply: &[u8], offset: usize) -> Result<f32> {
    let bytes: [u8; 4] = reply
        .get(offset..offset + 4)
        .context("reply truncated")?
        .try_into()?;
    Ok(f32::from_be_bytes(bytes))
}
