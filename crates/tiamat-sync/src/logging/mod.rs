//! Logging utilities.
//!
//! Centralizes logger initialization for tools and tests built on the
//! engine crates. Library code only uses the `log` facade; the `env_logger`
//! backend is wired up here.

mod init;

pub use init::{LoggingConfig, init_logging};
