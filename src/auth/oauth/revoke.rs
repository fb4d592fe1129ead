//! Token revocation requests.

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::token::success_body;
use crate::clients::{HttpMethod, HttpRequest, Transport};

/// Path of the revoke endpoint, relative to the domain.
pub const REVOKE_PATH: &str = "/services/oauth2/revoke";

/// A revoke request that passed its preconditions and is ready to send.
///
/// The revoke endpoint returns no signed payload, so nothing is verified.
#[derive(Debug)]
pub struct RevokeRequest<'a, T: Transport> {
    transport: &'a T,
    url: String,
}

impl<'a, T: Transport> RevokeRequest<'a, T> {
    pub(crate) const fn new(transport: &'a T, url: String) -> Self {
        Self { transport, url }
    }

    /// Returns the exact URL the request will be sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the request descriptor handed to the transport.
    #[must_use]
    pub fn http_request(&self) -> HttpRequest {
        HttpRequest::builder(HttpMethod::Post, self.url.as_str()).build()
    }

    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Http`] if the transport fails or the endpoint
    /// answers with a non-2xx status.
    pub async fn send(self) -> Result<(), OAuthError> {
        tracing::debug!(endpoint = REVOKE_PATH, "Sending OAuth2 revoke request");

        let response = self.transport.send(self.http_request()).await?;
        success_body(response)?;
        Ok(())
    }
}
