//! Logging setup.
//!
//! Engine code logs through the `log` facade only; the host installs the
//! `env_logger` backend once at start-up.

mod init;

pub use init::{init_logging, LoggingConfig};
