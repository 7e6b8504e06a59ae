//! Logging utilities
//!
//! This module provides helper functions for the diagnostic logging system.
//! The operator-facing activity log lives in the console module and is
//! rendered regardless of the diagnostic log level.

/// Initialize the logging system
///
/// # Parameters
///
/// * `level` - Log level used unless `RUST_LOG` overrides it
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::init_from_env(env);
}
