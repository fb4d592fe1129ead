//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated OAuth2 consumer key (the connected app's client id).
///
/// # Example
///
/// ```rust
/// use salesforce_api::ConsumerKey;
///
/// let key = ConsumerKey::new("3MVG9-consumer-key").unwrap();
/// assert_eq!(key.as_ref(), "3MVG9-consumer-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyValue {
                field: "consumer_key",
            });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth2 consumer secret.
///
/// The secret is sent to the token endpoint and is also the HMAC key used to
/// verify token response signatures.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ConsumerSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use salesforce_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyValue {
                field: "consumer_secret",
            });
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// The redirect URI registered on the connected app.
///
/// Only emptiness is checked: the authority is the source of truth for
/// whether the value matches the registered callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Creates a new callback URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the URL is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                field: "callback_url",
            });
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for CallbackUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated base URL of the OAuth2 authority.
///
/// This newtype validates that the URL has a scheme and a host. A trailing
/// `/` is removed so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use salesforce_api::DomainUrl;
///
/// let url = DomainUrl::new("https://login.salesforce.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://login.salesforce.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainUrl {
    url: String,
}

impl DomainUrl {
    /// Creates a new validated domain URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the URL is blank, or
    /// [`ConfigError::InvalidDomain`] if it lacks a scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        if url.is_empty() {
            return Err(ConfigError::EmptyValue { field: "domain" });
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidDomain { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidDomain { url: url.clone() });
        }

        // Skip "://"
        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidDomain { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        if url[host_start..].starts_with([':', '/', '?', '#']) {
            return Err(ConfigError::InvalidDomain { url });
        }

        Ok(Self { url })
    }

    /// Joins an absolute endpoint path onto this domain.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

impl AsRef<str> for DomainUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
