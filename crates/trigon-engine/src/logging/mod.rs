//! Logging utilities.
//!
//! Centralizes logger initialization so both the engine and the demo binary
//! share one setup path. Built on the standard `log` facade with an
//! `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
