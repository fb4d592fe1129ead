//! Verified OAuth2 sessions.
//!
//! This module provides the [`AuthSession`] type returned by the token flows.

use chrono::{DateTime, Utc};
use serde::{de::Error as _, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// An authenticated Salesforce session.
///
/// An `AuthSession` can only be obtained from a token response whose
/// signature has been recomputed and matched (see
/// [`verify_token_response`](crate::auth::oauth::verify_token_response)), so
/// holding one implies verification succeeded. The library keeps no copy of
/// it; the caller owns the value.
///
/// The verified response object is kept whole. Serializing a session writes
/// it back unchanged, including `null` values and fields this type does not
/// name; the getters are read-only views over it.
///
/// # Thread Safety
///
/// `AuthSession` is `Send + Sync`.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    id: String,
    issued_at: String,
    access_token: String,
    instance_url: String,
    signature: String,
    fields: Map<String, Value>,
}

/// Fields every usable token response carries.
#[derive(Deserialize)]
struct RequiredFields {
    id: String,
    issued_at: String,
    access_token: String,
    instance_url: String,
    signature: String,
}

impl AuthSession {
    /// Builds a session from a token response body whose signature has
    /// already been verified.
    pub(crate) fn from_verified(body: Value) -> Result<Self, serde_json::Error> {
        let required = RequiredFields::deserialize(&body)?;
        let Value::Object(fields) = body else {
            return Err(serde_json::Error::custom("token response is not a JSON object"));
        };

        Ok(Self {
            id: required.id,
            issued_at: required.issued_at,
            access_token: required.access_token,
            instance_url: required.instance_url,
            signature: required.signature,
            fields,
        })
    }

    fn optional_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Identity URL of the authenticated user; also the resource used to
    /// fetch the current user.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Issue timestamp as sent by the authority (milliseconds since the epoch).
    #[must_use]
    pub fn issued_at(&self) -> &str {
        &self.issued_at
    }

    /// Parses [`issued_at`](Self::issued_at) into a UTC timestamp.
    ///
    /// Returns `None` if the value is not a millisecond epoch timestamp.
    #[must_use]
    pub fn issued_at_time(&self) -> Option<DateTime<Utc>> {
        self.issued_at
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }

    /// The bearer token for API calls.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Base URL of the API instance the token is valid against.
    #[must_use]
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Granted scopes, space separated, if reported as a string.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.optional_str("scope")
    }

    /// The verified response signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Token type (normally `Bearer`), if reported as a string.
    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.optional_str("token_type")
    }

    /// Refresh token, if the connected app is allowed to issue one.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.optional_str("refresh_token")
    }

    /// The complete verified token response, named fields included.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for AuthSession {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

// Verify AuthSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthSession>();
};
