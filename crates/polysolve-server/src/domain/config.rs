//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime
//! settings. It is constructed from CLI arguments in `main.rs` or from
//! defaults in tests; the domain layer itself never reads the environment.

use std::net::SocketAddr;

use polysolve_core::protocol::messages::DEFAULT_PORT;

/// All runtime configuration for the solver server.
///
/// Build this struct once at startup and wrap it in an `Arc` so it can be
/// shared cheaply across connection tasks.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port the TCP listener binds to.
    ///
    /// `0.0.0.0` accepts connections from any interface; use `127.0.0.1`
    /// to accept only local connections.
    pub bind_addr: SocketAddr,

    /// Emit legacy response frames without the status field.
    ///
    /// In compat mode a failed solve sends no response at all (the
    /// original protocol's only failure signal); leave this off unless
    /// testing against a legacy caller.
    pub compat: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            compat: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_5000() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr.port(), 5000);
    }

    #[test]
    fn test_default_bind_is_all_interfaces() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_compat_mode_is_off_by_default() {
        assert!(!ServerConfig::default().compat);
    }

    #[test]
    fn test_config_can_be_cloned() {
        let cfg = ServerConfig {
            bind_addr: "127.0.0.1:9000".parse().unwrap(),
            compat: true,
        };
        let cloned = cfg.clone();
        assert_eq!(cfg.bind_addr, cloned.bind_addr);
        assert_eq!(cfg.compat, cloned.compat);
    }
}
