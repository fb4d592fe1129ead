//! Configuration types for the Salesforce API client.
//!
//! This module provides the configuration types used to initialize the OAuth2
//! service, the REST request builders and the [`SalesforceClient`] that wires
//! them together.
//!
//! # Overview
//!
//! - [`OAuth2Config`]: The four values the OAuth2 service needs
//! - [`SalesforceConfig`]: The full client configuration (OAuth2 + API version)
//! - [`DomainUrl`], [`CallbackUrl`], [`ConsumerKey`], [`ConsumerSecret`]: Validated newtypes
//! - [`ApiVersion`]: The Data REST API version to use
//!
//! # Validation Order
//!
//! Required fields are checked in a fixed order and the first missing one is
//! reported: `domain`, `callback_url`, `consumer_key`, `consumer_secret`, and
//! for the full client configuration, `api_version`.
//!
//! # Environment Fallback
//!
//! [`SalesforceConfigBuilder::env_fallback`] fills any field that was not set
//! explicitly from `SALESFORCE_*` environment variables. Explicit builder values
//! always win over the environment.
//!
//! # Example
//!
//! ```rust
//! use salesforce_api::{SalesforceConfig, DomainUrl, CallbackUrl, ConsumerKey, ConsumerSecret, ApiVersion};
//!
//! let config = SalesforceConfig::builder()
//!     .domain(DomainUrl::new("https://login.salesforce.com").unwrap())
//!     .callback_url(CallbackUrl::new("https://myapp.example.com/oauth/callback").unwrap())
//!     .consumer_key(ConsumerKey::new("consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! [`SalesforceClient`]: crate::SalesforceClient

mod newtypes;
mod version;

pub use newtypes::{CallbackUrl, ConsumerKey, ConsumerSecret, DomainUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Environment variable holding the OAuth2 authority base URL.
pub const ENV_DOMAIN: &str = "SALESFORCE_DOMAIN";
/// Environment variable holding the OAuth2 redirect URI.
pub const ENV_CALLBACK_URL: &str = "SALESFORCE_CALLBACK_URL";
/// Environment variable holding the connected app consumer key.
pub const ENV_CONSUMER_KEY: &str = "SALESFORCE_CONSUMER_KEY";
/// Environment variable holding the connected app consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "SALESFORCE_CONSUMER_SECRET";
/// Environment variable holding the Data REST API version.
pub const ENV_API_VERSION: &str = "SALESFORCE_API_VERSION";
/// Environment variable holding the optional User-Agent prefix.
pub const ENV_USER_AGENT_PREFIX: &str = "SALESFORCE_USER_AGENT_PREFIX";

/// Configuration for the OAuth2 service.
///
/// Immutable once built. `OAuth2Config` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use salesforce_api::{OAuth2Config, DomainUrl, CallbackUrl, ConsumerKey, ConsumerSecret};
///
/// let config = OAuth2Config::builder()
///     .domain(DomainUrl::new("https://testDomain.com").unwrap())
///     .callback_url(CallbackUrl::new("testCallbackUrl").unwrap())
///     .consumer_key(ConsumerKey::new("testConsumerKey").unwrap())
///     .consumer_secret(ConsumerSecret::new("testConsumerSecret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.domain().as_ref(), "https://testDomain.com");
/// ```
#[derive(Clone, Debug)]
pub struct OAuth2Config {
    domain: DomainUrl,
    callback_url: CallbackUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
}

impl OAuth2Config {
    /// Creates a new builder for constructing an `OAuth2Config`.
    #[must_use]
    pub fn builder() -> OAuth2ConfigBuilder {
        OAuth2ConfigBuilder::new()
    }

    /// Returns the OAuth2 authority base URL.
    #[must_use]
    pub const fn domain(&self) -> &DomainUrl {
        &self.domain
    }

    /// Returns the redirect URI.
    #[must_use]
    pub const fn callback_url(&self) -> &CallbackUrl {
        &self.callback_url
    }

    /// Returns the consumer key (client id).
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret (client secret and signature key).
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }
}

/// Builder for constructing [`OAuth2Config`] instances.
///
/// All four fields are required.
#[derive(Debug, Default)]
pub struct OAuth2ConfigBuilder {
    domain: Option<DomainUrl>,
    callback_url: Option<CallbackUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
}

impl OAuth2ConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth2 authority base URL (required).
    #[must_use]
    pub fn domain(mut self, domain: DomainUrl) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the redirect URI (required).
    #[must_use]
    pub fn callback_url(mut self, url: CallbackUrl) -> Self {
        self.callback_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Builds the [`OAuth2Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first missing
    /// field, checked in the order `domain`, `callback_url`, `consumer_key`,
    /// `consumer_secret`.
    pub fn build(self) -> Result<OAuth2Config, ConfigError> {
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;
        let callback_url = self
            .callback_url
            .ok_or(ConfigError::MissingRequiredField {
                field: "callback_url",
            })?;
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(OAuth2Config {
            domain,
            callback_url,
            consumer_key,
            consumer_secret,
        })
    }
}

/// Configuration for the whole Salesforce client.
///
/// Holds the [`OAuth2Config`] plus the settings used by the REST request
/// builders and the HTTP transport.
///
/// # Thread Safety
///
/// `SalesforceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SalesforceConfig {
    oauth2: OAuth2Config,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl SalesforceConfig {
    /// Creates a new builder for constructing a `SalesforceConfig`.
    #[must_use]
    pub fn builder() -> SalesforceConfigBuilder {
        SalesforceConfigBuilder::new()
    }

    /// Builds a configuration entirely from `SALESFORCE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable holds an invalid value or a
    /// required variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        SalesforceConfigBuilder::new().env_fallback()?.build()
    }

    /// Returns the OAuth2 part of the configuration.
    #[must_use]
    pub const fn oauth2(&self) -> &OAuth2Config {
        &self.oauth2
    }

    /// Returns the Data REST API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuth2Config>();
    assert_send_sync::<SalesforceConfig>();
};

/// Builder for constructing [`SalesforceConfig`] instances.
///
/// Required fields are `domain`, `callback_url`, `consumer_key`,
/// `consumer_secret` and `api_version`. `user_agent_prefix` is optional.
///
/// # Example
///
/// ```rust
/// use salesforce_api::{SalesforceConfig, ApiVersion, DomainUrl};
///
/// // Explicit values take precedence over the environment
/// let builder = SalesforceConfig::builder()
///     .domain(DomainUrl::new("https://test.salesforce.com").unwrap())
///     .api_version(ApiVersion::release(61));
/// # let _ = builder;
/// ```
#[derive(Debug, Default)]
pub struct SalesforceConfigBuilder {
    domain: Option<DomainUrl>,
    callback_url: Option<CallbackUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl SalesforceConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth2 authority base URL (required).
    #[must_use]
    pub fn domain(mut self, domain: DomainUrl) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the redirect URI (required).
    #[must_use]
    pub fn callback_url(mut self, url: CallbackUrl) -> Self {
        self.callback_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the Data REST API version (required).
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Fills every field not set explicitly from the process environment.
    ///
    /// See the `ENV_*` constants in this module for variable names.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an environment variable holds an invalid value.
    pub fn env_fallback(self) -> Result<Self, ConfigError> {
        self.fallback_from(|name| std::env::var(name).ok())
    }

    /// Fills every field not set explicitly using `lookup`, which maps an
    /// `ENV_*` variable name to its value.
    ///
    /// Values already set on the builder are never overwritten, and `lookup`
    /// is not consulted for them.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a looked-up value is invalid.
    pub fn fallback_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.domain.is_none() {
            self.domain = lookup(ENV_DOMAIN).map(DomainUrl::new).transpose()?;
        }
        if self.callback_url.is_none() {
            self.callback_url = lookup(ENV_CALLBACK_URL).map(CallbackUrl::new).transpose()?;
        }
        if self.consumer_key.is_none() {
            self.consumer_key = lookup(ENV_CONSUMER_KEY).map(ConsumerKey::new).transpose()?;
        }
        if self.consumer_secret.is_none() {
            self.consumer_secret = lookup(ENV_CONSUMER_SECRET)
                .map(ConsumerSecret::new)
                .transpose()?;
        }
        if self.api_version.is_none() {
            self.api_version = lookup(ENV_API_VERSION)
                .map(|v| v.parse::<ApiVersion>())
                .transpose()?;
        }
        if self.user_agent_prefix.is_none() {
            self.user_agent_prefix = lookup(ENV_USER_AGENT_PREFIX).filter(|p| !p.is_empty());
        }
        Ok(self)
    }

    /// Builds the [`SalesforceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first missing
    /// field, in the order `domain`, `callback_url`, `consumer_key`,
    /// `consumer_secret`, `api_version`.
    pub fn build(self) -> Result<SalesforceConfig, ConfigError> {
        let mut oauth2 = OAuth2ConfigBuilder::new();
        oauth2.domain = self.domain;
        oauth2.callback_url = self.callback_url;
        oauth2.consumer_key = self.consumer_key;
        oauth2.consumer_secret = self.consumer_secret;
        let oauth2 = oauth2.build()?;

        let api_version = self.api_version.ok_or(ConfigError::MissingRequiredField {
            field: "api_version",
        })?;

        Ok(SalesforceConfig {
            oauth2,
            api_version,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_builder() -> SalesforceConfigBuilder {
        SalesforceConfig::builder()
            .domain(DomainUrl::new("https://testDomain.com").unwrap())
            .callback_url(CallbackUrl::new("testCallbackUrl").unwrap())
            .consumer_key(ConsumerKey::new("testConsumerKey").unwrap())
            .consumer_secret(ConsumerSecret::new("testConsumerSecret").unwrap())
            .api_version(ApiVersion::Custom("testApiVersion".to_string()))
    }

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_oauth2_builder_reports_first_missing_field_in_order() {
        let result = OAuth2Config::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "domain" })
        ));

        let result = OAuth2Config::builder()
            .domain(DomainUrl::new("https://d.example.com").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "callback_url"
            })
        ));

        let result = OAuth2Config::builder()
            .domain(DomainUrl::new("https://d.example.com").unwrap())
            .callback_url(CallbackUrl::new("cu").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_key"
            })
        ));

        let result = OAuth2Config::builder()
            .domain(DomainUrl::new("https://d.example.com").unwrap())
            .callback_url(CallbackUrl::new("cu").unwrap())
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_secret"
            })
        ));
    }

    #[test]
    fn test_validation_stops_at_first_missing_field() {
        // consumer_key is set but domain is not: domain is reported
        let result = OAuth2Config::builder()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "domain" })
        ));
    }

    #[test]
    fn test_client_builder_requires_api_version_last() {
        let result = SalesforceConfig::builder()
            .domain(DomainUrl::new("https://d.example.com").unwrap())
            .callback_url(CallbackUrl::new("cu").unwrap())
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .consumer_secret(ConsumerSecret::new("cs").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_version"
            })
        ));

        // Missing OAuth2 fields are reported before api_version
        let result = SalesforceConfig::builder()
            .api_version(ApiVersion::latest())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "domain" })
        ));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = full_builder().user_agent_prefix("MyApp/1.0").build().unwrap();

        assert_eq!(config.oauth2().domain().as_ref(), "https://testDomain.com");
        assert_eq!(config.oauth2().callback_url().as_ref(), "testCallbackUrl");
        assert_eq!(config.oauth2().consumer_key().as_ref(), "testConsumerKey");
        assert_eq!(
            config.oauth2().consumer_secret().as_ref(),
            "testConsumerSecret"
        );
        assert_eq!(config.api_version().to_string(), "testApiVersion");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_fallback_fills_every_unset_field() {
        let env = env_of(&[
            (ENV_DOMAIN, "https://testDomain.com"),
            (ENV_CALLBACK_URL, "testCallbackUrl"),
            (ENV_CONSUMER_KEY, "testConsumerKey"),
            (ENV_CONSUMER_SECRET, "testConsumerSecret"),
            (ENV_API_VERSION, "v60.0"),
        ]);

        let config = SalesforceConfig::builder()
            .fallback_from(|name| env.get(name).cloned())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.oauth2().domain().as_ref(), "https://testDomain.com");
        assert_eq!(config.api_version(), &ApiVersion::release(60));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_explicit_values_take_precedence_over_environment() {
        let env = env_of(&[
            (ENV_DOMAIN, "https://from-env.example.com"),
            (ENV_CONSUMER_KEY, "envKey"),
            (ENV_API_VERSION, "v55.0"),
        ]);

        let config = full_builder()
            .fallback_from(|name| env.get(name).cloned())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.oauth2().domain().as_ref(), "https://testDomain.com");
        assert_eq!(config.oauth2().consumer_key().as_ref(), "testConsumerKey");
        assert_eq!(config.api_version().to_string(), "testApiVersion");
    }

    #[test]
    fn test_fallback_rejects_invalid_environment_values() {
        let env = env_of(&[(ENV_DOMAIN, "no-scheme.example.com")]);

        let result = SalesforceConfig::builder().fallback_from(|name| env.get(name).cloned());

        assert!(matches!(result, Err(ConfigError::InvalidDomain { .. })));
    }

    #[test]
    fn test_fallback_missing_variables_are_reported_in_order() {
        let env = env_of(&[(ENV_DOMAIN, "https://d.example.com")]);

        let result = SalesforceConfig::builder()
            .fallback_from(|name| env.get(name).cloned())
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "callback_url"
            })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SalesforceConfig>();
        assert_send_sync::<OAuth2Config>();
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = full_builder().build().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("SalesforceConfig"));
        assert!(!debug_str.contains("testConsumerSecret"));
    }
}
