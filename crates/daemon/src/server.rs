// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The IPC server loop.
//!
//! Startup is strictly sequenced: runtime dir, stale-socket removal (only
//! when the recorded pid is confirmed dead), config, notifier, bind, socket
//! permissions, pid file, accept loop. The pid file is written only after a
//! successful bind so its presence always implies a bound socket at the
//! time of writing.
//!
//! Connections are one-shot: a single request frame in, a single response
//! frame out, then close. Each connection runs in its own task with its own
//! buffer; the notifier is the only shared state.

use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::broadcast;
use tokio::time::timeout;
use tracing::{info, warn};

use msg_core::{
    ensure_runtime_dir, load_config, read_pid_file, Error, LivenessProbe, Result, RuntimePaths,
    SignalProbe,
};
use msg_ipc::{decode_request, encode_response, DaemonRequest, DaemonResponse};

use crate::notifier::{Notifier, SlackNotifier};
use crate::shutdown::{remove_runtime_files, ShutdownState};

/// How long a connection may sit without delivering a full frame.
const READ_TIMEOUT: Duration = Duration::from_secs(15);
/// Bound on writing the response frame back.
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Full daemon startup and serve loop; returns on graceful shutdown.
pub async fn run(paths: RuntimePaths, state: Arc<ShutdownState>) -> Result<()> {
    ensure_runtime_dir(&paths)?;
    remove_stale_socket(&paths)?;

    let config = load_config(&paths)?;
    let notifier = SlackNotifier::new(&config);
    notifier.start().await?;

    let listener = bind_listener(&paths)?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    spawn_signal_listener(shutdown_tx)?;

    serve(&paths, listener, Arc::new(notifier), state, shutdown_rx).await
}

/// Remove a leftover socket file, but only when the daemon that owned it is
/// confirmed dead. A live daemon's socket is left alone so the subsequent
/// bind fails loudly instead of hijacking it.
fn remove_stale_socket(paths: &RuntimePaths) -> io::Result<()> {
    let running = read_pid_file(&paths.pid_path).is_some_and(|pid| SignalProbe.is_alive(pid));
    if running {
        return Ok(());
    }

    match fs::remove_file(&paths.socket_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Bind the socket, restrict it to owner-only, and record our pid.
fn bind_listener(paths: &RuntimePaths) -> Result<UnixListener> {
    let listener = UnixListener::bind(&paths.socket_path).map_err(Error::Io)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&paths.socket_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::write(&paths.pid_path, format!("{}\n", std::process::id()))?;
    Ok(listener)
}

/// Forward SIGINT/SIGTERM into the shutdown channel.
fn spawn_signal_listener(shutdown_tx: broadcast::Sender<()>) -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).map_err(Error::Io)?;
    let mut sigterm = signal(SignalKind::terminate()).map_err(Error::Io)?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
        let _ = shutdown_tx.send(());
    });

    Ok(())
}

/// Accept connections until a shutdown is requested, then clean up.
pub async fn serve<N: Notifier + 'static>(
    paths: &RuntimePaths,
    listener: UnixListener,
    notifier: Arc<N>,
    state: Arc<ShutdownState>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<()> {
    info!("msgd listening on {}", paths.socket_path.display());

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _)) => {
                        let notifier = Arc::clone(&notifier);
                        tokio::spawn(async move {
                            handle_connection(stream, notifier.as_ref()).await;
                        });
                    }
                    Err(e) => warn!("failed to accept connection: {e}"),
                }
            }
            _ = shutdown_rx.recv() => break,
        }
    }

    if state.begin() {
        info!("shutting down");
        drop(listener);
        notifier.stop().await;
        remove_runtime_files(paths);
        state.finish();
        info!("msgd stopped");
    }

    Ok(())
}

/// Serve one connection: buffer until the first newline or the peer's
/// half-close, dispatch exactly once, write one response frame, close.
async fn handle_connection<N: Notifier>(stream: UnixStream, notifier: &N) {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut frame = Vec::new();

    // read_until returns on the newline trigger or on EOF, whichever comes
    // first, so both dispatch triggers funnel into one decode.
    match timeout(READ_TIMEOUT, reader.read_until(b'\n', &mut frame)).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => {
            warn!("failed to read request: {e}");
            return;
        }
        Err(_) => {
            warn!("connection timed out before a full frame arrived");
            return;
        }
    }

    let raw = String::from_utf8_lossy(&frame);
    let response = dispatch(&raw, notifier).await;
    let encoded = encode_response(&response);

    match timeout(WRITE_TIMEOUT, write_half.write_all(encoded.as_bytes())).await {
        Ok(Ok(())) => {
            let _ = write_half.shutdown().await;
        }
        Ok(Err(e)) => warn!("failed to write response: {e}"),
        Err(_) => warn!("timed out writing response"),
    }
}

/// Decode and execute one request. Never fails: every error becomes an
/// error response so a bad frame cannot crash the daemon.
async fn dispatch<N: Notifier>(raw: &str, notifier: &N) -> DaemonResponse {
    match decode_request(raw) {
        Ok(DaemonRequest::Ping) => DaemonResponse::Ok {
            pid: Some(std::process::id()),
        },
        Ok(DaemonRequest::Notify { message }) => match notifier.send_message(&message).await {
            Ok(()) => DaemonResponse::Ok { pid: None },
            Err(e) => {
                warn!("notify failed: {e}");
                DaemonResponse::Err {
                    code: e.code().to_string(),
                }
            }
        },
        Err(e) => DaemonResponse::Err {
            code: e.code().to_string(),
        },
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
