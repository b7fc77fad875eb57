//! TCP server: accept loop and per-connection task management.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming connections from solver clients.
//! 3. Running each connection's full lifecycle in its own Tokio task:
//!    read one request, solve it, write one response, close.
//! 4. Shutting down gracefully when the `running` flag is cleared.
//!
//! # Scalability
//!
//! The accept loop never services a connection inline: it accepts and
//! immediately spawns a dedicated task before accepting the next
//! connection, so a slow client or a long Durand–Kerner run never delays
//! other callers. Tokio's multi-threaded runtime spreads the tasks across
//! OS threads automatically.
//!
//! # Isolation
//!
//! Each connection task owns its socket and all request-scoped data
//! (coefficient vector, root set). A malformed or degenerate request
//! fails only its own task; the listener keeps accepting. The socket
//! closes when the task's stream is dropped, on every exit path.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use polysolve_core::protocol::codec::{
    decode_request, encode_response, encode_response_compat, ProtocolError,
};
use polysolve_core::{SolveRequest, SolveResponse, SolveStatus};

use crate::application::solve_service;
use crate::domain::ServerConfig;

// ── Public API ────────────────────────────────────────────────────────────────

/// Binds the configured address and runs the accept loop until `running`
/// is set to `false`.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (e.g., the port
/// is already in use or the process lacks permission to bind).
pub async fn run_server(config: ServerConfig, running: Arc<AtomicBool>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind solver listener on {}", config.bind_addr))?;

    info!("solver listening on {}", config.bind_addr);
    serve(listener, config, running).await
}

/// Runs the accept loop on an already-bound listener.
///
/// Split out from [`run_server`] so integration tests can bind an
/// ephemeral port themselves and learn the address before serving.
pub async fn serve(
    listener: TcpListener,
    config: ServerConfig,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let config = Arc::new(config);

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // A short timeout on `accept()` lets the loop observe the
        // `running` flag even when no clients are connecting.
        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                debug!("connection from {peer_addr}");
                let cfg = Arc::clone(&config);

                // One task per connection: the accept loop is never
                // delayed by a slow read or a long solve.
                tokio::spawn(async move {
                    handle_connection(stream, peer_addr, cfg).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error (e.g., too many open file
                // descriptors). Log and keep serving.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout: no connection in the last 200 ms.
            }
        }
    }

    Ok(())
}

// ── Per-connection handler ────────────────────────────────────────────────────

/// Top-level handler for a single connection task.
///
/// Wraps [`run_connection`] and logs the outcome, so `run_connection` can
/// use `?` for clean error propagation.
async fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, config: Arc<ServerConfig>) {
    match run_connection(stream, peer_addr, &config).await {
        Ok(()) => debug!("connection {peer_addr} closed"),
        Err(e) => warn!("connection {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs one connection's full lifecycle:
/// read request → solve → write response → close.
///
/// A malformed frame gets an `InvalidRequest` status response in the
/// default framing; the compat framing has no way to express an error, so
/// there the connection just closes (the legacy failure signal). Either
/// way the error stays local to this connection.
async fn run_connection(
    mut stream: TcpStream,
    peer_addr: SocketAddr,
    config: &ServerConfig,
) -> anyhow::Result<()> {
    let request = match read_request(&mut stream).await {
        Ok(request) => request,
        Err(RequestError::Protocol(e)) => {
            warn!("connection {peer_addr}: malformed request: {e}");
            if !config.compat {
                let frame = encode_response(&SolveResponse::failed(SolveStatus::InvalidRequest));
                stream.write_all(&frame).await.ok();
            }
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("connection {peer_addr}: request read failed"))
        }
    };

    info!(
        "connection {peer_addr}: solve request, degree {}",
        request.degree()
    );

    let response = solve_service::respond(&request);

    let frame = if config.compat {
        if response.status != SolveStatus::Ok {
            // The legacy frame cannot carry a failure; close with nothing
            // written, exactly as the original server did.
            anyhow::bail!(
                "solve failed ({}); compat framing sends no response",
                response.status
            );
        }
        encode_response_compat(&response)
    } else {
        encode_response(&response)
    };

    stream
        .write_all(&frame)
        .await
        .with_context(|| format!("connection {peer_addr}: response write failed"))?;

    // Flush the FIN so the client sees a clean end-of-stream.
    stream.shutdown().await.ok();
    Ok(())
}

// ── Streaming request reader ──────────────────────────────────────────────────

/// Errors from [`read_request`], split so the caller can distinguish a
/// malformed frame (answerable with a status response) from a dead socket.
#[derive(Debug, Error)]
enum RequestError {
    #[error(transparent)]
    Protocol(ProtocolError),

    #[error("connection closed before a complete request arrived")]
    Eof,

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads bytes until the buffer holds one complete request frame.
///
/// TCP is a stream: a single `read()` may deliver a partial frame or
/// extra bytes beyond it. Bytes accumulate in a local buffer and
/// [`decode_request`] runs after every read; `InsufficientData` means
/// keep reading, anything else is final. Trailing bytes after the frame
/// are ignored (the protocol is one request per connection).
async fn read_request(stream: &mut TcpStream) -> Result<SolveRequest, RequestError> {
    let mut recv_buf: Vec<u8> = Vec::with_capacity(256);
    let mut read_tmp = [0u8; 1024];

    loop {
        match decode_request(&recv_buf) {
            Ok((request, consumed)) => {
                if recv_buf.len() > consumed {
                    debug!("{} trailing bytes after request frame ignored", recv_buf.len() - consumed);
                }
                return Ok(request);
            }
            Err(ProtocolError::InsufficientData { .. }) => {}
            Err(e) => return Err(RequestError::Protocol(e)),
        }

        let n = stream.read(&mut read_tmp).await?;
        if n == 0 {
            return Err(RequestError::Eof);
        }
        recv_buf.extend_from_slice(&read_tmp[..n]);
    }
}
