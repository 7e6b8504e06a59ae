//! Key management HTTP client
//!
//! This module performs the actual HTTP calls against the key-management
//! endpoint. Every call is one-shot: build the envelope, POST it with a
//! bounded timeout, parse the response envelope. HTTP-level failures
//! (non-200 status) are reported with their status code and raw body,
//! transport failures with the underlying error text.

use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};

use crate::common::{AdminError, Result};
use crate::config::ConsoleConfig;

use super::types::{AdminRequest, AdminResponse};

/// Client for the remote key-management function
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct KeyManagementClient {
    http: Client,
    endpoint: String,
    service_key: String,
}

impl KeyManagementClient {
    /// Create a client from the console configuration
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| AdminError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            service_key: config.service_key.clone(),
        })
    }

    /// The endpoint URL this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a request envelope and parse the response envelope
    ///
    /// The service key rides along as both the `apikey` header and the
    /// bearer token; the admin secret travels inside the envelope.
    pub async fn send(&self, request: &AdminRequest) -> Result<AdminResponse> {
        debug!("Dispatching {} request to {}", request.action, self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AdminError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::Transport(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(AdminError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: AdminResponse = serde_json::from_str(&body)?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_default_config() {
        let config = ConsoleConfig::default();
        let client = KeyManagementClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), config.endpoint);
    }
}
