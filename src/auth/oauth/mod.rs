//! OAuth 2.0 implementation for Salesforce connected apps.
//!
//! This module provides the OAuth2 flows supported by the client:
//!
//! - **Web server flow**: [`OAuth2Service::authorization_url`] builds the URL
//!   to redirect the user to, and [`OAuth2Service::authenticate`] exchanges
//!   the returned `code` for a session
//! - **Username-password flow**: [`OAuth2Service::password`]
//! - **Refresh token flow**: [`OAuth2Service::refresh`]
//! - **Revocation**: [`OAuth2Service::revoke`]
//!
//! # Two Error Channels
//!
//! Every flow method runs synchronously and checks its required parameters
//! before anything is sent. A missing `code` or `token` is reported right
//! away as a [`PreconditionError`], and no request is ever created. When the
//! preconditions hold, the method returns a [`TokenRequest`] or
//! [`RevokeRequest`]; awaiting its `send()` performs the round trip and
//! reports failures as [`OAuthError`].
//!
//! # Security Features
//!
//! - **Signature verification**: every token response is checked against an
//!   HMAC-SHA256 of its `id` and `issued_at`, keyed with the consumer secret,
//!   before an [`AuthSession`] is returned
//! - **Constant-time comparison** of signatures
//! - **No hidden state**: the service holds only its immutable configuration
//!   and transport; sessions belong to the caller
//!
//! # Example
//!
//! ```rust,no_run
//! use salesforce_api::{OAuth2Config, DomainUrl, CallbackUrl, ConsumerKey, ConsumerSecret};
//! use salesforce_api::auth::oauth::{FlowParams, OAuth2Service, OAuthError};
//!
//! # async fn run(code_from_callback: String) -> Result<(), Box<dyn std::error::Error>> {
//! let config = OAuth2Config::builder()
//!     .domain(DomainUrl::new("https://login.salesforce.com")?)
//!     .callback_url(CallbackUrl::new("https://myapp.example.com/oauth/callback")?)
//!     .consumer_key(ConsumerKey::new("consumer-key")?)
//!     .consumer_secret(ConsumerSecret::new("consumer-secret")?)
//!     .build()?;
//!
//! let service = OAuth2Service::new(config);
//!
//! // Step 1: redirect the user
//! let url = service.authorization_url(&FlowParams::new().with("scope", "api"));
//! println!("Visit {url}");
//!
//! // Step 2: exchange the code from the callback
//! let request = service.authenticate(&FlowParams::code(code_from_callback))?;
//! match request.send().await {
//!     Ok(session) => println!("Logged in against {}", session.instance_url()),
//!     Err(OAuthError::Signature(e)) => eprintln!("Forged or corrupted response: {e}"),
//!     Err(e) => eprintln!("Token request failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod authorize;
mod error;
mod params;
mod revoke;
mod signature;
mod token;

pub use authorize::{authorization_url, AUTHORIZE_PATH};
pub use error::{OAuthError, PreconditionError, SignatureError};
pub use params::FlowParams;
pub use revoke::{RevokeRequest, REVOKE_PATH};
pub use signature::{compute_signature, constant_time_compare, verify_token_response};
pub use token::{
    TokenRequest, AUTHORIZATION_CODE_GRANT_TYPE, PASSWORD_GRANT_TYPE, REFRESH_TOKEN_GRANT_TYPE,
    TOKEN_PATH,
};

use crate::auth::AuthSession;
use crate::clients::{HttpClient, Transport};
use crate::config::OAuth2Config;
use params::encode_query;

/// Client for the Salesforce OAuth2 endpoints.
///
/// Holds an immutable [`OAuth2Config`] and a [`Transport`]. Flow invocations
/// share no mutable state, so one service can run any number of flows
/// concurrently.
///
/// # Thread Safety
///
/// `OAuth2Service` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust
/// use salesforce_api::{OAuth2Config, DomainUrl, CallbackUrl, ConsumerKey, ConsumerSecret};
/// use salesforce_api::auth::oauth::{FlowParams, OAuth2Service, PreconditionError};
///
/// let config = OAuth2Config::builder()
///     .domain(DomainUrl::new("https://testDomain.com").unwrap())
///     .callback_url(CallbackUrl::new("testCallbackUrl").unwrap())
///     .consumer_key(ConsumerKey::new("testConsumerKey").unwrap())
///     .consumer_secret(ConsumerSecret::new("testConsumerSecret").unwrap())
///     .build()
///     .unwrap();
/// let service = OAuth2Service::new(config);
///
/// // Preconditions fail before any request exists
/// let error = service.authenticate(&FlowParams::new()).unwrap_err();
/// assert_eq!(error, PreconditionError::MissingAuthorizationCode);
///
/// let request = service.revoke(&FlowParams::token("testToken")).unwrap();
/// assert_eq!(request.url(), "https://testDomain.com/services/oauth2/revoke?token=testToken");
/// ```
#[derive(Clone, Debug)]
pub struct OAuth2Service<T: Transport = HttpClient> {
    config: OAuth2Config,
    transport: T,
}

impl OAuth2Service<HttpClient> {
    /// Creates a service using the default reqwest transport.
    #[must_use]
    pub fn new(config: OAuth2Config) -> Self {
        Self::with_transport(config, HttpClient::default())
    }
}

impl<T: Transport> OAuth2Service<T> {
    /// Creates a service that sends its requests through `transport`.
    #[must_use]
    pub const fn with_transport(config: OAuth2Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the service configuration.
    #[must_use]
    pub const fn config(&self) -> &OAuth2Config {
        &self.config
    }

    /// Returns the transport used by this service.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the authorization URL. See [`authorization_url`].
    #[must_use]
    pub fn authorization_url(&self, options: &FlowParams) -> String {
        authorization_url(&self.config, options)
    }

    /// Prepares the authorization-code grant.
    ///
    /// The query string holds `client_id`, `client_secret`, `redirect_uri`,
    /// `grant_type=authorization_code` and `code`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::MissingAuthorizationCode`] if `params` has
    /// no `code`, or an empty one.
    pub fn authenticate(
        &self,
        params: &FlowParams,
    ) -> Result<TokenRequest<'_, T>, PreconditionError> {
        let code = params
            .required("code")
            .ok_or(PreconditionError::MissingAuthorizationCode)?;

        let query = encode_query([
            ("client_id", self.config.consumer_key().as_ref()),
            ("client_secret", self.config.consumer_secret().as_ref()),
            ("redirect_uri", self.config.callback_url().as_ref()),
            ("grant_type", AUTHORIZATION_CODE_GRANT_TYPE),
            ("code", code),
        ]);

        Ok(self.token_request(AUTHORIZATION_CODE_GRANT_TYPE, &query))
    }

    /// Prepares the username-password grant.
    ///
    /// The query string holds `client_id`, `client_secret` and
    /// `grant_type=password`, followed by every caller field in order
    /// (normally `username` and `password`). Credentials are not checked
    /// locally; the authority validates them.
    #[must_use]
    pub fn password(&self, params: &FlowParams) -> TokenRequest<'_, T> {
        let base = [
            ("client_id", self.config.consumer_key().as_ref()),
            ("client_secret", self.config.consumer_secret().as_ref()),
            ("grant_type", PASSWORD_GRANT_TYPE),
        ];
        let query = encode_query(base.into_iter().chain(params.iter()));

        self.token_request(PASSWORD_GRANT_TYPE, &query)
    }

    /// Prepares the refresh-token grant.
    ///
    /// The query string holds `client_id`, `client_secret`, `redirect_uri` and
    /// `grant_type=refresh_token`, followed by every caller field in order
    /// (normally `refresh_token`).
    #[must_use]
    pub fn refresh(&self, params: &FlowParams) -> TokenRequest<'_, T> {
        let base = [
            ("client_id", self.config.consumer_key().as_ref()),
            ("client_secret", self.config.consumer_secret().as_ref()),
            ("redirect_uri", self.config.callback_url().as_ref()),
            ("grant_type", REFRESH_TOKEN_GRANT_TYPE),
        ];
        let query = encode_query(base.into_iter().chain(params.iter()));

        self.token_request(REFRESH_TOKEN_GRANT_TYPE, &query)
    }

    /// Refreshes the access token of `session`.
    ///
    /// Returns `None` if the session carries no refresh token.
    #[must_use]
    pub fn refresh_session(&self, session: &AuthSession) -> Option<TokenRequest<'_, T>> {
        session
            .refresh_token()
            .map(|token| self.refresh(&FlowParams::refresh_token(token)))
    }

    /// Prepares a token revocation.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::MissingToken`] if `params` has no `token`,
    /// or an empty one.
    pub fn revoke(&self, params: &FlowParams) -> Result<RevokeRequest<'_, T>, PreconditionError> {
        let token = params
            .required("token")
            .ok_or(PreconditionError::MissingToken)?;

        let url = format!(
            "{}?{}",
            self.config.domain().join(REVOKE_PATH),
            encode_query([("token", token)])
        );

        Ok(RevokeRequest::new(&self.transport, url))
    }

    fn token_request(&self, grant_type: &'static str, query: &str) -> TokenRequest<'_, T> {
        let url = format!("{}?{}", self.config.domain().join(TOKEN_PATH), query);
        TokenRequest::new(
            &self.transport,
            self.config.consumer_secret(),
            grant_type,
            url,
        )
    }
}

// Verify the default service is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuth2Service>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CallbackUrl, ConsumerKey, ConsumerSecret, DomainUrl};

    fn create_test_service() -> OAuth2Service {
        let config = OAuth2Config::builder()
            .domain(DomainUrl::new("https://testDomain.com").unwrap())
            .callback_url(CallbackUrl::new("testCallbackUrl").unwrap())
            .consumer_key(ConsumerKey::new("testConsumerKey").unwrap())
            .consumer_secret(ConsumerSecret::new("testConsumerSecret").unwrap())
            .build()
            .unwrap();
        OAuth2Service::new(config)
    }

    #[test]
    fn test_authenticate_requires_code() {
        let service = create_test_service();

        assert_eq!(
            service.authenticate(&FlowParams::new()).unwrap_err(),
            PreconditionError::MissingAuthorizationCode
        );
        assert_eq!(
            service.authenticate(&FlowParams::code("")).unwrap_err(),
            PreconditionError::MissingAuthorizationCode
        );
    }

    #[test]
    fn test_authenticate_url_order() {
        let service = create_test_service();
        let request = service.authenticate(&FlowParams::code("testCode")).unwrap();

        assert_eq!(
            request.url(),
            "https://testDomain.com/services/oauth2/token?client_id=testConsumerKey&client_secret=testConsumerSecret&redirect_uri=testCallbackUrl&grant_type=authorization_code&code=testCode"
        );
        assert_eq!(request.grant_type(), "authorization_code");
    }

    #[test]
    fn test_authenticate_ignores_other_params() {
        let service = create_test_service();
        let params = FlowParams::new().with("state", "s").with("code", "c");
        let request = service.authenticate(&params).unwrap();

        assert!(request.url().ends_with("&grant_type=authorization_code&code=c"));
    }

    #[test]
    fn test_password_url_without_params() {
        let service = create_test_service();
        let request = service.password(&FlowParams::new());

        assert_eq!(
            request.url(),
            "https://testDomain.com/services/oauth2/token?client_id=testConsumerKey&client_secret=testConsumerSecret&grant_type=password"
        );
    }

    #[test]
    fn test_password_appends_credentials_in_order() {
        let service = create_test_service();
        let request = service.password(&FlowParams::password("user@example.com", "pw+token"));

        assert!(request
            .url()
            .ends_with("&grant_type=password&username=user%40example.com&password=pw%2Btoken"));
    }

    #[test]
    fn test_refresh_url_without_params() {
        let service = create_test_service();
        let request = service.refresh(&FlowParams::new());

        assert_eq!(
            request.url(),
            "https://testDomain.com/services/oauth2/token?client_id=testConsumerKey&client_secret=testConsumerSecret&redirect_uri=testCallbackUrl&grant_type=refresh_token"
        );
    }

    #[test]
    fn test_refresh_appends_refresh_token() {
        let service = create_test_service();
        let request = service.refresh(&FlowParams::refresh_token("5Aep861"));

        assert!(request
            .url()
            .ends_with("&grant_type=refresh_token&refresh_token=5Aep861"));
    }

    #[test]
    fn test_revoke_requires_token() {
        let service = create_test_service();

        assert_eq!(
            service.revoke(&FlowParams::new()).unwrap_err(),
            PreconditionError::MissingToken
        );
        assert_eq!(
            service.revoke(&FlowParams::token("")).unwrap_err(),
            PreconditionError::MissingToken
        );
    }

    #[test]
    fn test_revoke_url() {
        let service = create_test_service();
        let request = service.revoke(&FlowParams::token("testToken")).unwrap();

        assert_eq!(
            request.url(),
            "https://testDomain.com/services/oauth2/revoke?token=testToken"
        );
    }

    #[test]
    fn test_token_request_debug_hides_secret() {
        let service = create_test_service();
        let request = service.authenticate(&FlowParams::code("testCode")).unwrap();

        let debug_str = format!("{request:?}");
        assert!(debug_str.contains("authorization_code"));
        assert!(!debug_str.contains("testConsumerSecret"));
    }

    #[test]
    fn test_requests_are_posts_without_headers() {
        let service = create_test_service();
        let request = service.password(&FlowParams::new()).http_request();

        assert_eq!(request.http_method, crate::clients::HttpMethod::Post);
        assert!(request.headers.is_empty());
    }
}
