//! Domain types for the solver server.

pub mod config;

pub use config::ServerConfig;
