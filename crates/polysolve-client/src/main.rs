//! PolySolve command-line client.
//!
//! Sends one polynomial to a PolySolve server and prints the returned
//! roots. Coefficients are given leading-to-constant on the command line;
//! the degree is inferred from their count, and clap rejects anything
//! non-numeric before a single byte is transmitted.
//!
//! # Usage
//!
//! ```text
//! polysolve-client [OPTIONS] <COEFF> <COEFF>...
//!
//! # x² − 3x + 2:
//! polysolve-client 1 -3 2
//! Root 1: 2.00000 + 0.00000i
//! Root 2: 1.00000 + 0.00000i
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Default     | Description                    |
//! |--------------------|-------------|--------------------------------|
//! | `POLYSOLVE_HOST`   | `127.0.0.1` | Server hostname or IP          |
//! | `POLYSOLVE_PORT`   | `5000`      | Server TCP port                |
//! | `POLYSOLVE_COMPAT` | unset       | Expect legacy response framing |

use anyhow::{bail, Context};
use clap::Parser;
use num_complex::Complex64;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use polysolve_core::protocol::codec::{
    decode_response, decode_response_compat, encode_request, ProtocolError,
};
use polysolve_core::protocol::messages::DEFAULT_PORT;
use polysolve_core::{SolveRequest, SolveResponse, SolveStatus};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// PolySolve client.
///
/// Sends a polynomial's coefficients to a PolySolve server and prints all
/// of its complex roots.
#[derive(Debug, Parser)]
#[command(
    name = "polysolve-client",
    about = "Solve a real-coefficient polynomial via a PolySolve server",
    version
)]
struct Cli {
    /// Server hostname or IP address.
    #[arg(long, default_value = "127.0.0.1", env = "POLYSOLVE_HOST")]
    host: String,

    /// Server TCP port.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "POLYSOLVE_PORT")]
    port: u16,

    /// Expect legacy response frames without the status field.
    ///
    /// Use when talking to a server running with `--compat`.
    #[arg(long, env = "POLYSOLVE_COMPAT")]
    compat: bool,

    /// Polynomial coefficients, leading coefficient first, constant term
    /// last. At least two are required (degree ≥ 1).
    #[arg(
        required = true,
        num_args = 2..,
        value_name = "COEFF",
        allow_negative_numbers = true
    )]
    coefficients: Vec<f64>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let request = SolveRequest::new(cli.coefficients.clone());

    let response = submit(&cli.host, cli.port, cli.compat, &request).await?;

    if response.status != SolveStatus::Ok {
        bail!("server rejected the request: {}", response.status);
    }

    for (i, root) in response.roots.iter().enumerate() {
        println!("{}", format_root(i, root));
    }
    Ok(())
}

/// Connects, sends the encoded request, and reads the response.
///
/// # Errors
///
/// A failed connection is reported as a connectivity error; a connection
/// closed before a full response frame arrives (the legacy server's only
/// failure signal) is reported as such.
async fn submit(
    host: &str,
    port: u16,
    compat: bool,
    request: &SolveRequest,
) -> anyhow::Result<SolveResponse> {
    let mut stream = TcpStream::connect((host, port))
        .await
        .with_context(|| format!("failed to connect to solver at {host}:{port}"))?;

    debug!("connected to {host}:{port}, degree {}", request.degree());

    stream
        .write_all(&encode_request(request))
        .await
        .context("failed to send solve request")?;

    read_response(&mut stream, compat).await
}

/// Accumulates reply bytes until one complete response frame decodes.
async fn read_response(stream: &mut TcpStream, compat: bool) -> anyhow::Result<SolveResponse> {
    let mut recv_buf: Vec<u8> = Vec::with_capacity(256);
    let mut read_tmp = [0u8; 1024];

    loop {
        let decoded = if compat {
            decode_response_compat(&recv_buf)
        } else {
            decode_response(&recv_buf)
        };
        match decoded {
            Ok((response, _consumed)) => return Ok(response),
            Err(ProtocolError::InsufficientData { .. }) => {}
            Err(e) => return Err(e).context("malformed response from server"),
        }

        let n = stream
            .read(&mut read_tmp)
            .await
            .context("failed to read solve response")?;
        if n == 0 {
            bail!("server closed the connection without a complete response");
        }
        recv_buf.extend_from_slice(&read_tmp[..n]);
    }
}

/// Formats one root the way the original client displayed them:
/// `Root 1: 2.00000 + 0.00000i`.
fn format_root(index: usize, root: &Complex64) -> String {
    let sign = if root.im >= 0.0 { '+' } else { '-' };
    format!(
        "Root {}: {:.5} {} {:.5}i",
        index + 1,
        root.re,
        sign,
        root.im.abs()
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_coefficients_in_order() {
        let cli = Cli::parse_from(["polysolve-client", "1", "-3", "2"]);
        assert_eq!(cli.coefficients, vec![1.0, -3.0, 2.0]);
    }

    #[test]
    fn test_cli_allows_negative_leading_coefficient() {
        let cli = Cli::parse_from(["polysolve-client", "-2", "4"]);
        assert_eq!(cli.coefficients, vec![-2.0, 4.0]);
    }

    #[test]
    fn test_cli_rejects_single_coefficient() {
        assert!(Cli::try_parse_from(["polysolve-client", "1"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_coefficient() {
        // Malformed input never reaches the wire.
        assert!(Cli::try_parse_from(["polysolve-client", "1", "abc"]).is_err());
    }

    #[test]
    fn test_cli_default_host_and_port() {
        let cli = Cli::parse_from(["polysolve-client", "1", "2"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 5000);
        assert!(!cli.compat);
    }

    #[test]
    fn test_cli_host_and_port_override() {
        let cli = Cli::parse_from([
            "polysolve-client",
            "--host",
            "10.0.0.5",
            "--port",
            "9000",
            "1",
            "2",
        ]);
        assert_eq!(cli.host, "10.0.0.5");
        assert_eq!(cli.port, 9000);
    }

    #[test]
    fn test_format_root_positive_imaginary() {
        let s = format_root(0, &Complex64::new(0.0, 1.0));
        assert_eq!(s, "Root 1: 0.00000 + 1.00000i");
    }

    #[test]
    fn test_format_root_negative_imaginary() {
        let s = format_root(1, &Complex64::new(-0.5, -1.25));
        assert_eq!(s, "Root 2: -0.50000 - 1.25000i");
    }

    #[test]
    fn test_format_root_real_root() {
        let s = format_root(0, &Complex64::new(2.0, 0.0));
        assert_eq!(s, "Root 1: 2.00000 + 0.00000i");
    }
}
