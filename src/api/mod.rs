//! Key management API module
//!
//! This module defines the wire contract of the remote key-management
//! function and the HTTP client that speaks it. Envelopes are constructed,
//! sent, and discarded per call; nothing is persisted.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::KeyManagementClient;
pub use types::{
    AdminAction, AdminRequest, AdminResponse, KeyPoolStats, MAX_MANUAL_COUNT, MIN_MANUAL_COUNT,
};
