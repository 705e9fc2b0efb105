//! License authenticator - the main public API for Keygate.
//!
//! `LicenseAuthenticator` runs the fixed four-step login pipeline against
//! the licensing service:
//! 1. Exchange credentials for a short-lived bearer token
//! 2. Resolve the token's bearer into a user profile
//! 3. Find the license binding that user to the configured product
//! 4. Ask the service whether that license is currently valid
//!
//! Each step depends on the previous one's output, so the steps run strictly
//! in order and the first failure aborts the attempt.

use crate::backend::AuthBackend;
use crate::client::http::{ApiResponse, LicensingClient};
use crate::clock::{Clock, SystemClock};
use crate::config::KeygateConfig;
use crate::protocol::models::{
    parse_first_license, parse_token, parse_user, parse_validation, AccessToken, License,
    UserProfile,
};
use crate::KeygateError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a full verification pipeline run.
///
/// Besides the validity verdict this carries the resolved profile and
/// license so a host that syncs profile fields after login can do so
/// without a second round-trip.
#[derive(Debug, Clone)]
pub struct Verification {
    /// Whether the service reported the license as currently valid.
    pub valid: bool,

    /// Profile of the authenticated user.
    pub user: UserProfile,

    /// The license that was validated.
    pub license: License,
}

/// Authenticates users by validating their product license.
///
/// Create one instance per host application and reuse it; concurrent
/// `authenticate` calls are independent and share no mutable state.
pub struct LicenseAuthenticator {
    config: KeygateConfig,
    client: LicensingClient,
    clock: Arc<dyn Clock>,
}

impl LicenseAuthenticator {
    /// Create a new authenticator with the given configuration.
    ///
    /// # Errors
    /// Returns an error if configuration validation or HTTP client
    /// creation fails.
    pub fn new(config: KeygateConfig) -> Result<Self, KeygateError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an authenticator with a custom clock.
    pub fn with_clock(config: KeygateConfig, clock: Arc<dyn Clock>) -> Result<Self, KeygateError> {
        config.validate()?;
        let client = LicensingClient::new(&config)?;

        Ok(Self {
            config,
            client,
            clock,
        })
    }

    /// Verify credentials against the licensing service.
    ///
    /// Runs the full pipeline and returns the verdict together with the
    /// resolved user and license. Errors are returned to the caller;
    /// use [`authenticate`](Self::authenticate) for the fail-closed
    /// boolean contract.
    ///
    /// # Errors
    /// - `MissingCredentials` - identifier or secret is empty
    /// - `Transport` - connection or timeout failure at any step
    /// - `RemoteAuth` - the service rejected a step (non-success status)
    /// - `Protocol` - a success response was malformed
    /// - `NoLicenseFound` - the user holds no license for the product
    /// - `TokenExpired` - the issued token expired mid-attempt
    pub async fn verify(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Verification, KeygateError> {
        if identifier.is_empty() || secret.is_empty() {
            return Err(KeygateError::MissingCredentials);
        }

        let token = self.issue_token(identifier, secret).await?;
        debug!(token_id = %token.id, "token issued");

        let user = self.resolve_user(&token).await?;
        debug!(user_id = %user.id, "user resolved");

        let license = self.find_license(&user, &token).await?;
        debug!(license_id = %license.id, "license found");

        let valid = self.validate_license(&license, &token).await?;
        debug!(license_id = %license.id, valid, "license validated");

        Ok(Verification {
            valid,
            user,
            license,
        })
    }

    /// Authenticate a user, returning `true` only for a fully verified
    /// login with a currently valid license.
    ///
    /// Fail-closed boundary: every pipeline error is caught here, recorded
    /// in the operational log, and collapsed to `false`. Callers cannot
    /// distinguish bad credentials from an unreachable service.
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> bool {
        match self.verify(identifier, secret).await {
            Ok(verification) => verification.valid,
            Err(err) => {
                warn!(error = %err, detail = ?err, "login verification failed");
                false
            }
        }
    }

    /// Step 1: exchange credentials for a bearer token (expects 201).
    async fn issue_token(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<AccessToken, KeygateError> {
        let response = self.client.create_token(identifier, secret).await?;
        let body = expect_status(response, 201)?;
        parse_token(&body)
    }

    /// Step 2: resolve the token's bearer into a user profile (expects 200).
    async fn resolve_user(&self, token: &AccessToken) -> Result<UserProfile, KeygateError> {
        self.ensure_fresh(token)?;
        let response = self
            .client
            .fetch_user(&token.subject_id, &token.token)
            .await?;
        let body = expect_status(response, 200)?;
        parse_user(&body)
    }

    /// Step 3: find the license binding the user to the configured product
    /// (expects 200; empty result set is an explicit error).
    async fn find_license(
        &self,
        user: &UserProfile,
        token: &AccessToken,
    ) -> Result<License, KeygateError> {
        self.ensure_fresh(token)?;
        let response = self
            .client
            .list_licenses(&user.id, &self.config.product_id, &token.token)
            .await?;
        let body = expect_status(response, 200)?;
        parse_first_license(&body, &user.id)
    }

    /// Step 4: ask the service for the license's current validity
    /// (expects 200).
    async fn validate_license(
        &self,
        license: &License,
        token: &AccessToken,
    ) -> Result<bool, KeygateError> {
        self.ensure_fresh(token)?;
        let response = self
            .client
            .validate_license(&license.id, &token.token)
            .await?;
        let body = expect_status(response, 200)?;
        parse_validation(&body)
    }

    /// A token must be unexpired before every call that presents it.
    fn ensure_fresh(&self, token: &AccessToken) -> Result<(), KeygateError> {
        if token.is_expired_at(self.clock.now()) {
            return Err(KeygateError::TokenExpired);
        }
        Ok(())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &KeygateConfig {
        &self.config
    }
}

fn expect_status(response: ApiResponse, expected: u16) -> Result<Vec<u8>, KeygateError> {
    if response.status != expected {
        return Err(KeygateError::RemoteAuth {
            status: response.status,
            body: response.body_lossy(),
        });
    }
    Ok(response.body)
}

#[async_trait]
impl AuthBackend for LicenseAuthenticator {
    async fn authenticate(&self, identifier: &str, secret: &str) -> bool {
        LicenseAuthenticator::authenticate(self, identifier, secret).await
    }
}
