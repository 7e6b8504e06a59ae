//! Key management wire types
//!
//! This module defines the request and response envelopes exchanged with the
//! remote key-management function. Field names follow the service contract
//! exactly: the action and statistics fields are snake_case, the credential
//! field is `adminKey`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::AdminError;

/// Smallest batch the service accepts for manual generation
pub const MIN_MANUAL_COUNT: u32 = 1;

/// Largest batch the service accepts for manual generation
pub const MAX_MANUAL_COUNT: u32 = 50;

/// Admin actions understood by the key-management function
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    /// Fetch key pool statistics
    GetStats,
    /// Generate keys only if the pool is below the service's threshold
    CheckAndGenerate,
    /// Generate a fixed number of keys
    ManualGenerate,
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetStats => write!(f, "get_stats"),
            Self::CheckAndGenerate => write!(f, "check_and_generate"),
            Self::ManualGenerate => write!(f, "manual_generate"),
        }
    }
}

impl FromStr for AdminAction {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "get_stats" => Ok(Self::GetStats),
            "check_and_generate" => Ok(Self::CheckAndGenerate),
            "manual_generate" => Ok(Self::ManualGenerate),
            _ => Err(AdminError::Validation(format!(
                "Invalid action: {}. Valid values are: get_stats, check_and_generate, manual_generate",
                s
            ))),
        }
    }
}

/// Request envelope sent to the key-management function
///
/// `count` is present only for manual generation and must lie within
/// [`MIN_MANUAL_COUNT`, `MAX_MANUAL_COUNT`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminRequest {
    /// Requested action
    pub action: AdminAction,

    /// Operator's admin secret key
    #[serde(rename = "adminKey")]
    pub admin_key: String,

    /// Number of keys to generate (manual generation only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl AdminRequest {
    /// Build a statistics request
    pub fn get_stats(admin_key: impl Into<String>) -> Self {
        Self {
            action: AdminAction::GetStats,
            admin_key: admin_key.into(),
            count: None,
        }
    }

    /// Build a conditional auto-generation request
    pub fn check_and_generate(admin_key: impl Into<String>) -> Self {
        Self {
            action: AdminAction::CheckAndGenerate,
            admin_key: admin_key.into(),
            count: None,
        }
    }

    /// Build a manual batch generation request
    pub fn manual_generate(admin_key: impl Into<String>, count: u32) -> Self {
        Self {
            action: AdminAction::ManualGenerate,
            admin_key: admin_key.into(),
            count: Some(count),
        }
    }
}

/// Key pool statistics as reported by the service
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyPoolStats {
    /// Total keys ever issued into the pool
    pub total_keys: u64,

    /// Unassigned keys currently available
    pub available_keys: u64,

    /// Licenses currently active
    pub active_licenses: u64,

    /// Licenses assigned but inactive
    pub inactive_licenses: u64,
}

/// Response envelope returned by the key-management function
///
/// All fields except `success` are optional; a malformed or absent `success`
/// deserializes as `false` and is treated as failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdminResponse {
    /// Whether the service accepted and executed the action
    pub success: bool,

    /// Free-text outcome message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Pool statistics (statistics action only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<KeyPoolStats>,

    /// Newly generated keys (generation actions only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_keys: Option<Vec<String>>,

    /// Available key count before generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_before: Option<u64>,

    /// Available key count after generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_after: Option<u64>,
}

impl AdminResponse {
    /// The server message, or a generic fallback when the server sent none
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("Unknown error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_names() {
        assert_eq!(AdminAction::GetStats.to_string(), "get_stats");
        assert_eq!(
            AdminAction::CheckAndGenerate.to_string(),
            "check_and_generate"
        );
        assert_eq!(AdminAction::ManualGenerate.to_string(), "manual_generate");

        assert_eq!(
            "MANUAL_GENERATE".parse::<AdminAction>().unwrap(),
            AdminAction::ManualGenerate
        );
        assert!("generate".parse::<AdminAction>().is_err());
    }

    #[test]
    fn test_request_envelope_shape() {
        let request = AdminRequest::manual_generate("secret-key", 3);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"action":"manual_generate","adminKey":"secret-key","count":3}"#
        );
    }

    #[test]
    fn test_count_omitted_unless_manual() {
        let stats = serde_json::to_string(&AdminRequest::get_stats("k")).unwrap();
        assert_eq!(stats, r#"{"action":"get_stats","adminKey":"k"}"#);

        let auto = serde_json::to_string(&AdminRequest::check_and_generate("k")).unwrap();
        assert_eq!(auto, r#"{"action":"check_and_generate","adminKey":"k"}"#);
    }

    #[test]
    fn test_response_success_defaults_to_false() {
        // Envelope without a success field reads as failure
        let envelope: AdminResponse = serde_json::from_str(r#"{"message":"oops"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message(), "oops");

        // Entirely empty envelope also reads as failure with a generic message
        let envelope: AdminResponse = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message(), "Unknown error");
    }

    #[test]
    fn test_response_full_envelope() {
        let body = r#"{
            "success": true,
            "message": "Generated 2 new keys",
            "generated_keys": ["AAAA-BBBB", "CCCC-DDDD"],
            "available_before": 1,
            "available_after": 3
        }"#;

        let envelope: AdminResponse = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.generated_keys.as_ref().unwrap().len(), 2);
        assert_eq!(envelope.available_before, Some(1));
        assert_eq!(envelope.available_after, Some(3));
    }

    #[test]
    fn test_stats_fields_default_to_zero() {
        let stats: KeyPoolStats = serde_json::from_str(r#"{"available_keys":7}"#).unwrap();
        assert_eq!(stats.available_keys, 7);
        assert_eq!(stats.total_keys, 0);
        assert_eq!(stats.active_licenses, 0);
        assert_eq!(stats.inactive_licenses, 0);
    }
}
