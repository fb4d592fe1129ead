//! Token endpoint requests.
//!
//! A [`TokenRequest`] is what the authorization-code, password and refresh
//! flows hand back once their preconditions hold. Nothing has been sent at
//! that point; [`TokenRequest::send`] performs the single round trip and
//! verifies the response signature before returning a session.

use std::fmt;

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::signature::verify_token_response;
use crate::auth::AuthSession;
use crate::clients::{
    HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError, Transport,
};
use crate::config::ConsumerSecret;

/// Path of the token endpoint, relative to the domain.
pub const TOKEN_PATH: &str = "/services/oauth2/token";

/// Grant type of the web server (authorization-code) flow.
pub const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";
/// Grant type of the username-password flow.
pub const PASSWORD_GRANT_TYPE: &str = "password";
/// Grant type of the refresh-token flow.
pub const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// A token request that passed its preconditions and is ready to send.
///
/// The request URL carries the client secret in its query string, as the
/// token endpoint requires, so the `Debug` output of this type omits it.
///
/// # Example
///
/// ```rust,ignore
/// let request = service.authenticate(&FlowParams::code(code))?;
/// let session = request.send().await?;
/// println!("instance: {}", session.instance_url());
/// ```
pub struct TokenRequest<'a, T: Transport> {
    transport: &'a T,
    consumer_secret: &'a ConsumerSecret,
    grant_type: &'static str,
    url: String,
}

impl<'a, T: Transport> TokenRequest<'a, T> {
    pub(crate) const fn new(
        transport: &'a T,
        consumer_secret: &'a ConsumerSecret,
        grant_type: &'static str,
        url: String,
    ) -> Self {
        Self {
            transport,
            consumer_secret,
            grant_type,
            url,
        }
    }

    /// Returns the exact URL the request will be sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the `grant_type` of this request.
    #[must_use]
    pub const fn grant_type(&self) -> &'static str {
        self.grant_type
    }

    /// Returns the request descriptor handed to the transport.
    #[must_use]
    pub fn http_request(&self) -> HttpRequest {
        HttpRequest::builder(HttpMethod::Post, self.url.as_str()).build()
    }

    /// Sends the request and verifies the response.
    ///
    /// Consumes the request, so each request resolves exactly once.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::Http`] with the transport's error unchanged, or with
    ///   [`HttpError::Response`] if the token endpoint answered with a non-2xx
    ///   status (no signature verification is attempted then)
    /// - [`OAuthError::Signature`] if the response signature is missing or wrong
    /// - [`OAuthError::InvalidSession`] if an authentic response lacks session fields
    pub async fn send(self) -> Result<AuthSession, OAuthError> {
        tracing::debug!(
            grant_type = self.grant_type,
            endpoint = TOKEN_PATH,
            "Sending OAuth2 token request"
        );

        let response = self.transport.send(self.http_request()).await?;
        let body = success_body(response)?;

        verify_token_response(&body, self.consumer_secret)
    }
}

impl<T: Transport> fmt::Debug for TokenRequest<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("grant_type", &self.grant_type)
            .finish_non_exhaustive()
    }
}

/// Returns the body of a 2xx response, or the status and raw body as an error.
pub(crate) fn success_body(response: HttpResponse) -> Result<String, HttpError> {
    if response.is_ok() {
        return Ok(response.body);
    }

    tracing::warn!(
        status = response.code,
        "OAuth2 endpoint returned a non-success status"
    );
    Err(HttpResponseError {
        code: response.code,
        message: response.body,
    }
    .into())
}
