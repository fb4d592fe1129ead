//! OAuth2-specific error types.
//!
//! Errors are split by when they can happen:
//!
//! - [`PreconditionError`]: returned synchronously by a flow method, before
//!   any request exists. Nothing has touched the network.
//! - [`OAuthError`]: returned by `send().await`, after a round trip. Wraps
//!   signature failures ([`SignatureError`]) and transport failures
//!   ([`HttpError`]), the latter forwarded unchanged.
//!
//! # Example
//!
//! ```rust
//! use salesforce_api::auth::oauth::{SignatureError, PreconditionError};
//!
//! let error = PreconditionError::MissingAuthorizationCode;
//! assert_eq!(error.to_string(), "Missing authorization code");
//!
//! let error = SignatureError::Missing { response: "{}".to_string() };
//! assert_eq!(error.to_string(), "Missing payload signature.");
//! assert_eq!(error.status_code(), 500);
//! assert_eq!(error.response(), "{}");
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// A required flow parameter was absent.
///
/// Raised before any network interaction; no request was sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// The authorization-code flow was called without a `code`.
    #[error("Missing authorization code")]
    MissingAuthorizationCode,

    /// The revoke flow was called without a `token`.
    #[error("Missing token.")]
    MissingToken,
}

/// A token response failed signature verification.
///
/// Both variants carry the exact response body string the server sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The response had no `signature` field.
    #[error("Missing payload signature.")]
    Missing {
        /// The raw response body.
        response: String,
    },

    /// The recomputed signature did not match the `signature` field.
    #[error("The signature could not be verified.")]
    Invalid {
        /// The raw response body.
        response: String,
    },
}

impl SignatureError {
    /// Status marker reported with every signature failure.
    pub const STATUS_CODE: u16 = 500;

    /// Returns the status marker (always 500).
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        Self::STATUS_CODE
    }

    /// Returns the fixed error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "Missing payload signature.",
            Self::Invalid { .. } => "The signature could not be verified.",
        }
    }

    /// Returns the raw response body that failed verification.
    #[must_use]
    pub fn response(&self) -> &str {
        match self {
            Self::Missing { response } | Self::Invalid { response } => response,
        }
    }
}

/// Errors delivered after a flow's network round trip.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
///
/// # Example
///
/// ```rust
/// use salesforce_api::auth::oauth::{OAuthError, SignatureError};
/// use salesforce_api::clients::HttpError;
///
/// fn describe(err: &OAuthError) -> String {
///     match err {
///         OAuthError::Signature(e) => format!("untrusted response ({}): {}", e.status_code(), e),
///         OAuthError::Http(HttpError::Response(e)) => format!("authority said {}", e.code),
///         OAuthError::Http(e) => format!("transport failed: {e}"),
///         OAuthError::InvalidSession { reason, .. } => format!("bad session: {reason}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token response could not be trusted.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// The transport failed or the authority answered with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response was authentic but lacked fields a session needs.
    #[error("Verified token response is not a usable session: {reason}")]
    InvalidSession {
        /// What was wrong with the response.
        reason: String,
        /// The raw response body.
        response: String,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
    assert_send_sync::<PreconditionError>();
};
