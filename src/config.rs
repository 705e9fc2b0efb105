//! Keygate configuration.

use serde::{Deserialize, Serialize};

/// Default licensing API base path.
pub const DEFAULT_API_BASE_URL: &str = "https://api.keygen.sh/v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration for license-backed login verification.
///
/// The host application loads this at startup (it deserializes from the
/// host's own config format) and hands it to
/// [`LicenseAuthenticator::new`](crate::LicenseAuthenticator::new).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeygateConfig {
    /// Account identifier scoping all API calls to a tenant on the
    /// licensing service.
    pub account_id: String,

    /// Product identifier naming which licensable product is checked
    /// during login.
    pub product_id: String,

    /// Base URL of the licensing API (e.g. `https://api.keygen.sh/v1`).
    /// Overridable per environment and for tests against a local server.
    pub api_base_url: String,

    /// Bounded timeout applied to every remote call, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for KeygateConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            product_id: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl KeygateConfig {
    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), crate::KeygateError> {
        if self.account_id.is_empty() {
            return Err(crate::KeygateError::Config(
                "account_id cannot be empty".to_string(),
            ));
        }
        if self.product_id.is_empty() {
            return Err(crate::KeygateError::Config(
                "product_id cannot be empty".to_string(),
            ));
        }
        if self.api_base_url.is_empty() {
            return Err(crate::KeygateError::Config(
                "api_base_url cannot be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(crate::KeygateError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
