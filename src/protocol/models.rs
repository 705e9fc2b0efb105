//! Licensing-service response documents and typed extraction.
//!
//! The service speaks JSON:API (`application/vnd.api+json`): every document
//! wraps its payload in `data`, attributes live under `data.attributes`, and
//! related resources under `data.relationships`. This module parses the four
//! documents the login pipeline sees and extracts the domain types the rest
//! of the crate works with.

use crate::KeygateError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// ── Wire documents ──────────────────────────────────────────────

/// Token-creation response document (`POST /tokens`, 201).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDocument {
    pub data: TokenData,
}

/// `data` member of a token document.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    pub id: String,
    pub attributes: TokenAttributes,
    pub relationships: TokenRelationships,
}

/// Token attributes. Both fields are required; the token is unusable
/// without the opaque bearer string and its expiry.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenAttributes {
    pub token: String,
    pub expiry: String,
}

/// Token relationships; `bearer` points at the owning user.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRelationships {
    pub bearer: Relationship,
}

/// A to-one relationship wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: ResourceIdentifier,
}

/// Bare resource identifier inside a relationship.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}

/// User-resource response document (`GET /users/{id}`, 200).
#[derive(Debug, Clone, Deserialize)]
pub struct UserDocument {
    pub data: UserData,
}

/// `data` member of a user document.
#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    pub id: String,
    pub attributes: UserAttributes,
}

/// User attributes. `metadata` is free-form on the service side and may be
/// absent entirely; parsing must not fail without it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributes {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

/// The metadata keys the host cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub institution: Option<String>,
}

/// License-collection response document (`GET /licenses?...`, 200).
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseListDocument {
    pub data: Vec<LicenseData>,
}

/// One license resource in a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseData {
    pub id: String,
    pub attributes: LicenseAttributes,
}

/// License attributes. `expiry` is null for perpetual licenses.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseAttributes {
    pub key: String,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Validate-action response document (`GET /licenses/{id}/actions/validate`, 200).
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationDocument {
    pub meta: ValidationMeta,
}

/// Validation verdict reported by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationMeta {
    pub valid: bool,
}

// ── Domain types ────────────────────────────────────────────────

/// Short-lived bearer token issued for one authentication attempt.
///
/// Never cached across attempts; dies with the attempt that created it.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Token resource id.
    pub id: String,
    /// Opaque bearer string presented in `Authorization` headers.
    pub token: String,
    /// Id of the user the token was issued to.
    pub subject_id: String,
    /// Instant after which the token must not be used.
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Whether the token is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Profile of the user the token belongs to. Read-only once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// User resource id.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Display name as stored on the service.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Optional institution from the profile metadata.
    pub institution: Option<String>,
}

/// License record binding a user to the configured product.
#[derive(Debug, Clone)]
pub struct License {
    /// License resource id.
    pub id: String,
    /// License key string.
    pub key: String,
    /// Expiry instant; `None` for perpetual licenses.
    pub expires_at: Option<DateTime<Utc>>,
}

// ── Parsing ─────────────────────────────────────────────────────

fn protocol_err(context: &str, err: impl std::fmt::Display) -> KeygateError {
    KeygateError::Protocol(format!("{context}: {err}"))
}

/// Parse a 201 token-creation body into an [`AccessToken`].
///
/// All four fields (id, token, bearer id, expiry) are required; a missing
/// field or an unparseable expiry is a protocol error.
pub fn parse_token(body: &[u8]) -> Result<AccessToken, KeygateError> {
    let doc: TokenDocument =
        serde_json::from_slice(body).map_err(|e| protocol_err("invalid token document", e))?;

    let expires_at = DateTime::parse_from_rfc3339(&doc.data.attributes.expiry)
        .map_err(|e| protocol_err("invalid token expiry", e))?
        .with_timezone(&Utc);

    Ok(AccessToken {
        id: doc.data.id,
        token: doc.data.attributes.token,
        subject_id: doc.data.relationships.bearer.data.id,
        expires_at,
    })
}

/// Parse a 200 user-resource body into a [`UserProfile`].
pub fn parse_user(body: &[u8]) -> Result<UserProfile, KeygateError> {
    let doc: UserDocument =
        serde_json::from_slice(body).map_err(|e| protocol_err("invalid user document", e))?;

    let attributes = doc.data.attributes;
    Ok(UserProfile {
        id: doc.data.id,
        first_name: attributes.first_name,
        last_name: attributes.last_name,
        full_name: attributes.full_name,
        email: attributes.email,
        institution: attributes.metadata.and_then(|m| m.institution),
    })
}

/// Parse a 200 license-collection body and select the first license.
///
/// The service's ordering is kept as-is; no client-side sorting. An empty
/// collection is reported as [`KeygateError::NoLicenseFound`] rather than
/// indexed blindly.
pub fn parse_first_license(body: &[u8], user_id: &str) -> Result<License, KeygateError> {
    let doc: LicenseListDocument =
        serde_json::from_slice(body).map_err(|e| protocol_err("invalid license list", e))?;

    let first = doc
        .data
        .into_iter()
        .next()
        .ok_or_else(|| KeygateError::NoLicenseFound {
            user_id: user_id.to_string(),
        })?;

    let expires_at = match first.attributes.expiry {
        Some(raw) => Some(
            DateTime::parse_from_rfc3339(&raw)
                .map_err(|e| protocol_err("invalid license expiry", e))?
                .with_timezone(&Utc),
        ),
        None => None,
    };

    Ok(License {
        id: first.id,
        key: first.attributes.key,
        expires_at,
    })
}

/// Parse a 200 validate-action body into the service's validity verdict.
pub fn parse_validation(body: &[u8]) -> Result<bool, KeygateError> {
    let doc: ValidationDocument =
        serde_json::from_slice(body).map_err(|e| protocol_err("invalid validation document", e))?;
    Ok(doc.meta.valid)
}
