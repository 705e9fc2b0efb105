//! Reqwest-based HTTP client for the licensing API.
//!
//! This module handles the raw HTTP communication with the licensing
//! service. It knows the four endpoints the login pipeline touches and
//! nothing about their payloads; parsing lives in [`crate::protocol`].

use crate::config::KeygateConfig;
use crate::KeygateError;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use std::time::Duration;

const JSON_API: &str = "application/vnd.api+json";

/// HTTP response reduced to what the pipeline needs: status and raw body.
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    async fn from_response(response: Response) -> Result<Self, KeygateError> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| KeygateError::Transport(format!("Failed to read body: {e}")))?
            .to_vec();

        Ok(Self { status, body })
    }

    /// Body as a lossy UTF-8 string, for error reporting and logs.
    pub fn body_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Licensing API client scoped to one account.
pub struct LicensingClient {
    client: Client,
    base_url: String,
    account_id: String,
}

impl LicensingClient {
    /// Create a new client from config.
    ///
    /// The underlying connection pool is built once and reused for every
    /// call; the configured timeout bounds each request individually.
    pub fn new(config: &KeygateConfig) -> Result<Self, KeygateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| KeygateError::Transport(format!("Failed to create client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            account_id: config.account_id.clone(),
        })
    }

    fn account_url(&self, rest: &str) -> String {
        format!("{}/accounts/{}{}", self.base_url, self.account_id, rest)
    }

    /// `POST /accounts/{account}/tokens` with HTTP Basic credentials.
    pub async fn create_token(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<ApiResponse, KeygateError> {
        let response = self
            .client
            .post(self.account_url("/tokens"))
            .basic_auth(identifier, Some(secret))
            .header(ACCEPT, JSON_API)
            .send()
            .await
            .map_err(map_send_error)?;

        ApiResponse::from_response(response).await
    }

    /// `GET /accounts/{account}/users/{user}` with a bearer token.
    pub async fn fetch_user(
        &self,
        user_id: &str,
        bearer: &str,
    ) -> Result<ApiResponse, KeygateError> {
        let response = self
            .client
            .get(self.account_url(&format!("/users/{user_id}")))
            .bearer_auth(bearer)
            .header(ACCEPT, JSON_API)
            .send()
            .await
            .map_err(map_send_error)?;

        ApiResponse::from_response(response).await
    }

    /// `GET /accounts/{account}/licenses?user=..&product=..` with a bearer token.
    pub async fn list_licenses(
        &self,
        user_id: &str,
        product_id: &str,
        bearer: &str,
    ) -> Result<ApiResponse, KeygateError> {
        let response = self
            .client
            .get(self.account_url("/licenses"))
            .query(&[("user", user_id), ("product", product_id)])
            .bearer_auth(bearer)
            .header(ACCEPT, JSON_API)
            .send()
            .await
            .map_err(map_send_error)?;

        ApiResponse::from_response(response).await
    }

    /// `GET /accounts/{account}/licenses/{license}/actions/validate` with a bearer token.
    pub async fn validate_license(
        &self,
        license_id: &str,
        bearer: &str,
    ) -> Result<ApiResponse, KeygateError> {
        let response = self
            .client
            .get(self.account_url(&format!("/licenses/{license_id}/actions/validate")))
            .bearer_auth(bearer)
            .header(ACCEPT, JSON_API)
            .send()
            .await
            .map_err(map_send_error)?;

        ApiResponse::from_response(response).await
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn map_send_error(err: reqwest::Error) -> KeygateError {
    if err.is_timeout() {
        KeygateError::Transport(format!("Request timed out: {err}"))
    } else {
        KeygateError::Transport(format!("Request failed: {err}"))
    }
}
