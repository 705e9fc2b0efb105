//! # Keygate
//!
//! **License-backed login verification for [Keygen](https://keygen.sh)-compatible
//! licensing services.**
//!
//! Keygate answers one question for a host user-management system: *may this
//! user log in?* It does so by running a fixed four-step pipeline against the
//! licensing service:
//!
//! 1. **Token** — exchange the user's credentials for a short-lived bearer
//!    token (HTTP Basic against the account's token endpoint)
//! 2. **User** — resolve the token's bearer into a user profile
//! 3. **License** — find the license binding that user to the configured
//!    product
//! 4. **Validate** — ask the service whether that license is currently valid
//!
//! Any failure anywhere in the pipeline collapses to a failed login.
//!
//! ## Quickstart
//!
//! ```no_run
//! use keygate::{KeygateConfig, LicenseAuthenticator};
//!
//! # async fn run() -> Result<(), keygate::KeygateError> {
//! let config = KeygateConfig {
//!     account_id: "your-account-id".to_string(),
//!     product_id: "your-product-id".to_string(),
//!     ..Default::default()
//! };
//!
//! let authenticator = LicenseAuthenticator::new(config)?;
//!
//! if authenticator.authenticate("ada@example.edu", "secret").await {
//!     println!("login ok");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! [`LicenseAuthenticator::authenticate`] is fail-closed: transport
//! failures, rejected credentials, missing licenses, and malformed
//! responses all come back as `false`. The raw failure detail (status code,
//! response body) goes to the `tracing` log for operators and is never
//! surfaced to the end user. Hosts that need to distinguish failure kinds
//! call [`LicenseAuthenticator::verify`] instead and match on
//! [`KeygateError`].
//!
//! ## Configuration
//!
//! - `account_id` — tenant scope on the licensing service
//! - `product_id` — the licensable product checked during login
//! - `api_base_url` — licensing API base, overridable per environment
//! - `request_timeout_secs` — bounded timeout applied to every remote call
//!
//! See [`KeygateConfig`] for full documentation.

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Protocol layer
pub mod protocol;

// Client layer
pub mod client;

// Host integration seam
pub mod backend;

// Authenticator (main public API)
pub mod authenticator;

// Re-exports for public API
pub use authenticator::{LicenseAuthenticator, Verification};
pub use backend::AuthBackend;
pub use clock::{Clock, SystemClock};
pub use config::KeygateConfig;
pub use errors::KeygateError;
pub use protocol::models::{AccessToken, License, UserProfile};
