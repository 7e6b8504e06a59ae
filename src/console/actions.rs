//! Console action views
//!
//! The three operator actions: fetch statistics, conditional auto-generation,
//! and manual batch generation. Each view validates its input locally,
//! performs one request through the client, and renders the outcome into the
//! activity log. Every operation is one-shot; there are no retries.

use log::warn;

use crate::api::{
    AdminRequest, AdminResponse, KeyManagementClient, MAX_MANUAL_COUNT, MIN_MANUAL_COUNT,
};
use crate::common::AdminError;

use super::log::{ActivityLog, StatusCell, STATUS_BUSY, STATUS_READY};

/// Available-key count below which the statistics view warns the operator
pub const LOW_STOCK_THRESHOLD: u64 = 3;

/// Shared handles the action views operate on
///
/// Cheap to clone; clones share the activity log and status cell, so each
/// action can run in its own detached task.
#[derive(Debug, Clone)]
pub struct Console {
    /// HTTP client for the key-management endpoint
    pub client: KeyManagementClient,

    /// Operator-facing activity log
    pub log: ActivityLog,

    /// Transient status line
    pub status: StatusCell,
}

impl Console {
    /// Fetch key pool statistics and render the four counters
    ///
    /// Emits a low-stock warning when the available-key count drops below
    /// [`LOW_STOCK_THRESHOLD`].
    pub async fn fetch_statistics(&self, admin_key: &str) {
        let Some(admin_key) = self.credential(admin_key) else {
            return;
        };

        self.log.append("Fetching license statistics...");

        let request = AdminRequest::get_stats(admin_key);
        let Some(envelope) = self.dispatch(&request).await else {
            return;
        };

        if !envelope.success {
            self.log
                .append(format!("Request failed: {}", envelope.message()));
            return;
        }

        let stats = envelope.stats.unwrap_or_default();
        self.log.append("License statistics:");
        self.log.append(format!("  Total keys: {}", stats.total_keys));
        self.log
            .append(format!("  Available keys: {}", stats.available_keys));
        self.log
            .append(format!("  Active licenses: {}", stats.active_licenses));
        self.log
            .append(format!("  Inactive licenses: {}", stats.inactive_licenses));

        if stats.available_keys < LOW_STOCK_THRESHOLD {
            warn!(
                "Key pool is low: {} available keys",
                stats.available_keys
            );
            self.log
                .append("WARNING: low available key count, consider generating more keys");
        } else {
            self.log.append("Key pool status: healthy");
        }
    }

    /// Ask the service to generate keys if the pool is below its threshold
    ///
    /// The threshold itself is owned by the service; the view renders the
    /// free-text outcome and, when keys were created, the new keys plus the
    /// before/after available counts.
    pub async fn auto_generate(&self, admin_key: &str) {
        let Some(admin_key) = self.credential(admin_key) else {
            return;
        };

        self.log
            .append("Checking key pool, generating keys if needed...");

        let request = AdminRequest::check_and_generate(admin_key);
        let Some(envelope) = self.dispatch(&request).await else {
            return;
        };

        if !envelope.success {
            self.log
                .append(format!("Auto-generation failed: {}", envelope.message()));
            return;
        }

        let message = envelope.message().to_string();
        self.log.append(&message);

        // The service signals creation through its outcome message
        if message.contains("Generated") {
            self.render_generated_keys(&envelope);

            let before = envelope.available_before.unwrap_or(0);
            let after = envelope.available_after.unwrap_or(0);
            self.log
                .append(format!("Available keys: {} -> {}", before, after));
        }
    }

    /// Generate a fixed batch of keys
    ///
    /// The count is validated locally before any request is sent.
    pub async fn manual_generate(&self, admin_key: &str, count: u32) {
        let Some(admin_key) = self.credential(admin_key) else {
            return;
        };

        if !(MIN_MANUAL_COUNT..=MAX_MANUAL_COUNT).contains(&count) {
            warn!("Rejected manual generation with count {}", count);
            self.log.append(format!(
                "Invalid count {}: enter a number between {} and {}",
                count, MIN_MANUAL_COUNT, MAX_MANUAL_COUNT
            ));
            return;
        }

        self.log
            .append(format!("Manually generating {} license keys...", count));

        let request = AdminRequest::manual_generate(admin_key, count);
        let Some(envelope) = self.dispatch(&request).await else {
            return;
        };

        if !envelope.success {
            self.log
                .append(format!("Manual generation failed: {}", envelope.message()));
            return;
        }

        self.log
            .append(format!("Successfully generated {} keys", count));
        self.render_generated_keys(&envelope);
    }

    /// Reject an empty credential before any request is sent
    fn credential<'a>(&self, admin_key: &'a str) -> Option<&'a str> {
        let trimmed = admin_key.trim();
        if trimmed.is_empty() {
            warn!("Action blocked: admin secret key is not set");
            self.log
                .append("Admin secret key is not set, use 'key <secret>' first");
            return None;
        }
        Some(trimmed)
    }

    /// Perform one request, flipping the status cell around the call
    ///
    /// Failures are rendered into the log and collapse to `None`; the
    /// console stays usable either way.
    async fn dispatch(&self, request: &AdminRequest) -> Option<AdminResponse> {
        self.status.set(STATUS_BUSY);
        let result = self.client.send(request).await;
        self.status.set(STATUS_READY);

        match result {
            Ok(envelope) => Some(envelope),
            Err(AdminError::Http { status, body }) => {
                self.log.append(format!("HTTP error {}: {}", status, body));
                None
            }
            Err(AdminError::Json(e)) => {
                self.log.append(format!("Invalid response: {}", e));
                None
            }
            Err(AdminError::Transport(msg)) => {
                self.log.append(format!("Network error: {}", msg));
                None
            }
            Err(e) => {
                self.log.append(e.to_string());
                None
            }
        }
    }

    fn render_generated_keys(&self, envelope: &AdminResponse) {
        let keys = envelope.generated_keys.iter().flatten();
        self.log.append("New keys:");
        for key in keys {
            self.log.append(format!("  {}", key));
        }
    }
}
