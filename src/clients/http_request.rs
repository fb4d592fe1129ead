//! HTTP request descriptors.
//!
//! [`HttpRequest`] is the value produced by the request builders and consumed
//! by a [`Transport`](crate::clients::Transport). It is a plain description of
//! a request: method, absolute URL, and headers.

use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method, used by the OAuth2 token and revoke endpoints.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A request descriptor ready to be executed by a transport.
///
/// Headers are kept in a sorted map so two descriptors built from the same
/// inputs compare and print identically.
///
/// # Example
///
/// ```rust
/// use salesforce_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://na1.salesforce.com/services/apexrest/Cases")
///     .header("Authorization", "Bearer token")
///     .build();
///
/// assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, including any query string.
    pub url: String,
    /// Headers to send with the request.
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Returns the `Authorization` header value, if set.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).map(String::as_str)
    }
}

/// Name of the header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    headers: BTreeMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Adds a single header, replacing any previous value for the same name.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds an `Authorization: Bearer {token}` header.
    #[must_use]
    pub fn bearer_auth(self, access_token: &str) -> Self {
        self.header(AUTHORIZATION, format!("Bearer {access_token}"))
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            headers: self.headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_builder_creates_get_request_without_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/a").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.com/a");
        assert!(request.headers.is_empty());
        assert!(request.authorization().is_none());
    }

    #[test]
    fn test_bearer_auth_sets_authorization_header() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com")
            .bearer_auth("abc123")
            .build();

        assert_eq!(request.authorization(), Some("Bearer abc123"));
    }

    #[test]
    fn test_header_replaces_previous_value() {
        let request = HttpRequest::builder(HttpMethod::Post, "https://example.com")
            .header("X-Custom", "one")
            .header("X-Custom", "two")
            .build();

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers.get("X-Custom"), Some(&"two".to_string()));
    }
}
