//! Token response signature verification.
//!
//! Salesforce signs every token response: `signature` is the base64-encoded
//! HMAC-SHA256 of the response's `id` followed by its `issued_at`, keyed with
//! the connected app's consumer secret. This module recomputes that value and
//! refuses to build an [`AuthSession`] from a response that does not match.
//!
//! # Security
//!
//! The signature comparison is constant-time.
//!
//! # Example
//!
//! ```rust
//! use salesforce_api::ConsumerSecret;
//! use salesforce_api::auth::oauth::{compute_signature, verify_token_response};
//!
//! let secret = ConsumerSecret::new("testConsumerSecret").unwrap();
//! let id = "https://login.salesforce.com/id/00D/005";
//! let issued_at = "1332093834282";
//! let signature = compute_signature(id, issued_at, secret.as_ref());
//!
//! let body = serde_json::json!({
//!     "id": id,
//!     "issued_at": issued_at,
//!     "access_token": "token",
//!     "instance_url": "https://na14.salesforce.com",
//!     "signature": signature,
//! })
//! .to_string();
//!
//! let session = verify_token_response(&body, &secret).unwrap();
//! assert_eq!(session.access_token(), "token");
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::oauth::error::{OAuthError, SignatureError};
use crate::auth::AuthSession;
use crate::config::ConsumerSecret;

type HmacSha256 = Hmac<Sha256>;

/// Computes the signature of a token response.
///
/// The MAC is fed `id` and then `issued_at` as two separate updates, with no
/// delimiter between them. The digest is returned as standard padded base64.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(id: &str, issued_at: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(id.as_bytes());
    mac.update(issued_at.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two strings.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Verifies a raw token response body and turns it into an [`AuthSession`].
///
/// # Errors
///
/// - [`SignatureError::Missing`] if the body is not a JSON object or has no
///   (or an empty) `signature` field
/// - [`SignatureError::Invalid`] if the recomputed signature differs, or if
///   `id`/`issued_at` are absent so no signature can be recomputed
/// - [`OAuthError::InvalidSession`] if the verified body lacks a field every
///   session needs (`access_token`, `instance_url`)
///
/// Signature errors carry `raw_body` unchanged.
///
/// A signature only covers `id` and `issued_at`. An authentic response that
/// still lacks `access_token` or `instance_url` is not passed through as a
/// session: it fails with [`OAuthError::InvalidSession`], carrying the raw
/// body, so callers never hold a session they cannot make requests with.
pub fn verify_token_response(
    raw_body: &str,
    secret: &ConsumerSecret,
) -> Result<AuthSession, OAuthError> {
    let parsed = serde_json::from_str::<Value>(raw_body).ok();
    let Some(Value::Object(fields)) = parsed else {
        return Err(missing(raw_body));
    };

    let signature = match fields.get("signature") {
        None | Some(Value::Null) => return Err(missing(raw_body)),
        Some(Value::String(s)) if s.is_empty() => return Err(missing(raw_body)),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(invalid(raw_body)),
    };

    let (Some(id), Some(issued_at)) = (
        fields.get("id").and_then(Value::as_str),
        fields.get("issued_at").and_then(Value::as_str),
    ) else {
        return Err(invalid(raw_body));
    };

    let computed = compute_signature(id, issued_at, secret.as_ref());
    if !constant_time_compare(&computed, signature) {
        return Err(invalid(raw_body));
    }

    AuthSession::from_verified(Value::Object(fields)).map_err(|e| OAuthError::InvalidSession {
        reason: e.to_string(),
        response: raw_body.to_string(),
    })
}

fn missing(raw_body: &str) -> OAuthError {
    tracing::warn!("Rejected token response without a payload signature");
    SignatureError::Missing {
        response: raw_body.to_string(),
    }
    .into()
}

fn invalid(raw_body: &str) -> OAuthError {
    tracing::warn!("Rejected token response whose signature could not be verified");
    SignatureError::Invalid {
        response: raw_body.to_string(),
    }
    .into()
}
