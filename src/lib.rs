//! Keypool Admin: operator console for a remote license key management service
//!
//! This library implements a thin client over a hosted key-management
//! function. It can fetch key pool statistics, ask the service to top up the
//! pool when it runs low, and request a manual batch of new license keys.
//! All business logic (key generation, pool thresholds, persistence) lives in
//! the remote service; this crate only builds request envelopes, performs the
//! HTTP calls, and renders the outcomes into an append-only activity log.
//!
//! # Main Features
//!
//! - Typed request/response envelopes matching the service wire contract
//! - HTTP client with bounded timeout and fixed service-key headers
//! - Append-only, timestamped activity log with a transient status cell
//! - Interactive operator shell with one detached task per action
//!
//! # Example
//!
//! ```no_run
//! use keypool_admin::api::KeyManagementClient;
//! use keypool_admin::config::ConsoleConfig;
//! use keypool_admin::console::{ActivityLog, Console, StatusCell};
//! use keypool_admin::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Embedded defaults point at the hosted key-management function
//!     let config = ConsoleConfig::default();
//!     config.validate()?;
//!
//!     let console = Console {
//!         client: KeyManagementClient::new(&config)?,
//!         log: ActivityLog::new(),
//!         status: StatusCell::new(),
//!     };
//!
//!     // Fetch statistics once and print the resulting log lines
//!     console.fetch_statistics("my-admin-secret").await;
//!     for line in console.log.rendered_lines() {
//!         println!("{}", line);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Public modules
pub mod api;
pub mod common;
pub mod config;
pub mod console;

// Re-export commonly used structures and functions for convenience
pub use api::{AdminAction, AdminRequest, AdminResponse, KeyManagementClient, KeyPoolStats};
pub use common::{init_logger, AdminError, Result};
pub use config::ConsoleConfig;
pub use console::{ActivityLog, Console, Shell};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
