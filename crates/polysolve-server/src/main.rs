//! PolySolve server entry point.
//!
//! This binary listens for TCP connections carrying one binary-encoded
//! polynomial each, finds all of its complex roots, and writes them back.
//!
//! # Usage
//!
//! ```text
//! polysolve-server [OPTIONS]
//!
//! Options:
//!   --port <PORT>   TCP port to listen on [default: 5000]
//!   --bind <ADDR>   IP address to bind [default: 0.0.0.0]
//!   --compat        Emit legacy response frames without the status field
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable           | Default   | Description                        |
//! |--------------------|-----------|------------------------------------|
//! | `POLYSOLVE_PORT`   | `5000`    | TCP listener port                  |
//! | `POLYSOLVE_BIND`   | `0.0.0.0` | Listener bind address              |
//! | `POLYSOLVE_COMPAT` | unset     | Legacy response framing when set   |
//!
//! Log level is controlled by `RUST_LOG` (e.g., `RUST_LOG=debug`).

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use polysolve_core::protocol::messages::DEFAULT_PORT;
use polysolve_server::domain::ServerConfig;
use polysolve_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// PolySolve request server.
///
/// Accepts one solve request per TCP connection and replies with the
/// polynomial's complex roots.
#[derive(Debug, Parser)]
#[command(
    name = "polysolve-server",
    about = "TCP server that returns all complex roots of a real-coefficient polynomial",
    version
)]
struct Cli {
    /// TCP port to listen on for solve requests.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "POLYSOLVE_PORT")]
    port: u16,

    /// IP address to bind the listener to.
    ///
    /// Use `0.0.0.0` to accept connections from any network interface, or
    /// `127.0.0.1` to accept only local connections.
    #[arg(long, default_value = "0.0.0.0", env = "POLYSOLVE_BIND")]
    bind: String,

    /// Emit legacy response frames without the status field.
    ///
    /// In this mode a failed solve closes the connection with no response
    /// at all. Intended only for compatibility testing against callers of
    /// the original protocol.
    #[arg(long, env = "POLYSOLVE_COMPAT")]
    compat: bool,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(ServerConfig {
            bind_addr,
            compat: self.compat,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_server_config()?;

    info!(
        "PolySolve server starting: bind={}, compat={}",
        config.bind_addr, config.compat
    );

    // Shutdown flag shared with the accept loop.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    run_server(config, running).await?;

    info!("PolySolve server stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_port_is_5000() {
        let cli = Cli::parse_from(["polysolve-server"]);
        assert_eq!(cli.port, 5000);
    }

    #[test]
    fn test_cli_default_bind_is_all_interfaces() {
        let cli = Cli::parse_from(["polysolve-server"]);
        assert_eq!(cli.bind, "0.0.0.0");
    }

    #[test]
    fn test_cli_compat_is_off_by_default() {
        let cli = Cli::parse_from(["polysolve-server"]);
        assert!(!cli.compat);
    }

    #[test]
    fn test_cli_port_override() {
        let cli = Cli::parse_from(["polysolve-server", "--port", "9999"]);
        assert_eq!(cli.port, 9999);
    }

    #[test]
    fn test_cli_bind_override() {
        let cli = Cli::parse_from(["polysolve-server", "--bind", "127.0.0.1"]);
        assert_eq!(cli.bind, "127.0.0.1");
    }

    #[test]
    fn test_cli_compat_flag() {
        let cli = Cli::parse_from(["polysolve-server", "--compat"]);
        assert!(cli.compat);
    }

    #[test]
    fn test_into_server_config_defaults() {
        let cli = Cli::parse_from(["polysolve-server"]);
        let config = cli.into_server_config().unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(!config.compat);
    }

    #[test]
    fn test_into_server_config_custom_port_and_bind() {
        let cli = Cli::parse_from(["polysolve-server", "--bind", "127.0.0.1", "--port", "8080"]);
        let config = cli.into_server_config().unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_into_server_config_invalid_bind_returns_error() {
        let cli = Cli {
            port: 5000,
            bind: "not.an.ip".to_string(),
            compat: false,
        };
        assert!(cli.into_server_config().is_err());
    }
}
