//! Infrastructure layer: the TCP listener and per-connection tasks.

pub mod tcp_server;

pub use tcp_server::{run_server, serve};
