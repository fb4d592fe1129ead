//! HTTP-specific error types for the Salesforce API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A non-2xx HTTP response, carrying the raw body
//! - [`HttpError`]: Unified transport error type
//!
//! The OAuth2 flows forward these errors unchanged to the caller; they never
//! reinterpret or retry them.
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforce_api::clients::HttpError;
//!
//! match client.data().get_logged_user(&session).await {
//!     Ok(body) => println!("User: {}", body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Transport(e)) => println!("Transport error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use salesforce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     message: r#"{"error":"invalid_grant","error_description":"expired authorization code"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("invalid_grant"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Unified error type for all transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error from the default reqwest transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom [`Transport`](crate::clients::Transport).
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}
