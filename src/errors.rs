//! Keygate error types.

use thiserror::Error;

/// Errors that can occur while verifying a login against the licensing service.
#[derive(Debug, Error)]
pub enum KeygateError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, DNS, or timeout failure talking to the licensing service.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status at some pipeline step.
    ///
    /// Carries the raw status and body for the operational log; never shown
    /// to the end user.
    #[error("Licensing service returned HTTP {status}")]
    RemoteAuth {
        /// HTTP status code of the failed response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// A success response was malformed or missed a required JSON field.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The license query matched no license for this user and product.
    #[error("No license found for user {user_id}")]
    NoLicenseFound {
        /// The user whose license lookup came back empty.
        user_id: String,
    },

    /// The access token expired before a dependent call could use it.
    #[error("Access token expired before use")]
    TokenExpired,

    /// Identifier or secret was empty; rejected before any network call.
    #[error("Missing credentials")]
    MissingCredentials,
}
