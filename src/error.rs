//! Error types for the Salesforce API client.
//!
//! This module contains the configuration error type. Configuration errors are
//! raised synchronously while building configuration values, before any
//! service exists and long before any network traffic.
//!
//! # Example
//!
//! ```rust
//! use salesforce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyValue { field: "consumer_key" })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
///
/// Each variant names the offending field or value so the message is
/// actionable on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field was never set (neither explicitly nor from the environment).
    #[error("Missing required configuration field: '{field}'.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A field was set to an empty string.
    #[error("Configuration field '{field}' cannot be empty.")]
    EmptyValue {
        /// The name of the empty field.
        field: &'static str,
    },

    /// The OAuth2 authority domain is not a usable base URL.
    #[error("Invalid domain '{url}'. Expected a base URL with scheme (e.g., 'https://login.salesforce.com').")]
    InvalidDomain {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'vNN.N' (e.g., 'v62.0').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}
