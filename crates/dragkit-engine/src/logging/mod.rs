//! Logger initialization over the `log` facade, backed by `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
