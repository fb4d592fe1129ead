//! HTTP transport for Salesforce API communication.
//!
//! This module provides the [`Transport`] trait, the capability every network
//! operation in this crate is written against, and [`HttpClient`], its default
//! reqwest-backed implementation.

use std::collections::HashMap;
use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::SalesforceConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The capability to execute an [`HttpRequest`].
///
/// A transport reports every HTTP status as a response; classifying non-2xx
/// statuses is left to the caller. Errors are only returned when no response
/// was obtained at all. Retries, timeouts and cancellation belong to the
/// transport, not to the OAuth2 core.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use std::future::Future;
/// use salesforce_api::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// /// A transport that answers every request with an empty JSON object.
/// struct Canned;
///
/// impl Transport for Canned {
///     fn send(
///         &self,
///         _request: HttpRequest,
///     ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
///         async { Ok(HttpResponse::new(200, HashMap::new(), "{}".to_string())) }
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and resolves once with the response or an error.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

/// Default transport built on reqwest.
///
/// The client adds:
/// - A `User-Agent` identifying this library (with optional prefix)
/// - `Accept: application/json`
///
/// Headers present on the [`HttpRequest`] override these defaults.
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`; clones share the underlying
/// connection handle.
///
/// # Example
///
/// ```rust
/// use salesforce_api::clients::HttpClient;
///
/// let client = HttpClient::new(Some("MyApp/1.0"));
/// assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `user_agent_prefix` - Optional prefix prepended to the `User-Agent` header
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(user_agent_prefix: Option<&str>) -> Self {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Salesforce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Creates a client using the configuration's `user_agent_prefix`.
    #[must_use]
    pub fn from_config(config: &SalesforceConfig) -> Self {
        Self::new(config.user_agent_prefix())
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &self.default_headers {
            if !request.headers.contains_key(key) {
                req_builder = req_builder.header(key, value);
            }
        }
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        if let Some(limit) = headers.get("sforce-limit-info").and_then(|v| v.first()) {
            tracing::debug!(
                "Salesforce API usage after {} {}: {}",
                request.http_method,
                request.url,
                limit
            );
        }

        Ok(HttpResponse::new(code, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Salesforce API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(Some("MyApp/1.0"));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Salesforce API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::default();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
