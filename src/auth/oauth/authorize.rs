//! Authorization URL generation.
//!
//! The authorization URL is the first step of the web server flow: the user
//! is redirected there, logs in, and Salesforce redirects back to the
//! callback URL with a `code` to pass to
//! [`OAuth2Service::authenticate`](crate::auth::oauth::OAuth2Service::authenticate).
//!
//! # Example
//!
//! ```rust
//! use salesforce_api::{OAuth2Config, DomainUrl, CallbackUrl, ConsumerKey, ConsumerSecret};
//! use salesforce_api::auth::oauth::{authorization_url, FlowParams};
//!
//! let config = OAuth2Config::builder()
//!     .domain(DomainUrl::new("https://testDomain.com").unwrap())
//!     .callback_url(CallbackUrl::new("testCallbackUrl").unwrap())
//!     .consumer_key(ConsumerKey::new("testConsumerKey").unwrap())
//!     .consumer_secret(ConsumerSecret::new("testConsumerSecret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = authorization_url(&config, &FlowParams::new().with("scope", "api"));
//! assert_eq!(
//!     url,
//!     "https://testDomain.com/services/oauth2/authorize?client_id=testConsumerKey&redirect_uri=testCallbackUrl&response_type=code&scope=api"
//! );
//! ```

use crate::auth::oauth::params::{encode_query, FlowParams};
use crate::config::OAuth2Config;

/// Path of the authorization endpoint, relative to the domain.
pub const AUTHORIZE_PATH: &str = "/services/oauth2/authorize";

/// Builds the URL to redirect the user to for authorization.
///
/// The query string holds `client_id`, `redirect_uri` and `response_type=code`
/// in that order, followed by every entry of `options` in caller order
/// (typically `scope`, `state`, `prompt`). Every key and value is
/// percent-encoded.
///
/// Pure and deterministic: identical inputs always yield the identical string.
#[must_use]
pub fn authorization_url(config: &OAuth2Config, options: &FlowParams) -> String {
    let base = [
        ("client_id", config.consumer_key().as_ref()),
        ("redirect_uri", config.callback_url().as_ref()),
        ("response_type", "code"),
    ];
    let query = encode_query(base.into_iter().chain(options.iter()));

    format!("{}?{}", config.domain().join(AUTHORIZE_PATH), query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CallbackUrl, ConsumerKey, ConsumerSecret, DomainUrl};

    fn create_test_config() -> OAuth2Config {
        OAuth2Config::builder()
            .domain(DomainUrl::new("https://testDomain.com").unwrap())
            .callback_url(CallbackUrl::new("testCallbackUrl").unwrap())
            .consumer_key(ConsumerKey::new("testConsumerKey").unwrap())
            .consumer_secret(ConsumerSecret::new("testConsumerSecret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorization_url_with_scope() {
        let url = authorization_url(&create_test_config(), &FlowParams::new().with("scope", "api"));

        assert_eq!(
            url,
            "https://testDomain.com/services/oauth2/authorize?client_id=testConsumerKey&redirect_uri=testCallbackUrl&response_type=code&scope=api"
        );
    }

    #[test]
    fn test_authorization_url_without_options() {
        let url = authorization_url(&create_test_config(), &FlowParams::new());

        assert!(url.ends_with("?client_id=testConsumerKey&redirect_uri=testCallbackUrl&response_type=code"));
    }

    #[test]
    fn test_options_follow_caller_order() {
        let options = FlowParams::new()
            .with("state", "s1")
            .with("scope", "api")
            .with("prompt", "login");
        let url = authorization_url(&create_test_config(), &options);

        assert!(url.ends_with("&response_type=code&state=s1&scope=api&prompt=login"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let config = OAuth2Config::builder()
            .domain(DomainUrl::new("https://login.salesforce.com").unwrap())
            .callback_url(CallbackUrl::new("https://app.example.com/oauth/callback").unwrap())
            .consumer_key(ConsumerKey::new("3MVG9.key").unwrap())
            .consumer_secret(ConsumerSecret::new("secret").unwrap())
            .build()
            .unwrap();
        let url = authorization_url(&config, &FlowParams::new().with("scope", "api refresh_token"));

        assert_eq!(
            url,
            "https://login.salesforce.com/services/oauth2/authorize?client_id=3MVG9.key&redirect_uri=https%3A%2F%2Fapp.example.com%2Foauth%2Fcallback&response_type=code&scope=api%20refresh_token"
        );
    }

    #[test]
    fn test_is_idempotent() {
        let config = create_test_config();
        let options = FlowParams::new().with("scope", "api");

        assert_eq!(
            authorization_url(&config, &options),
            authorization_url(&config, &options)
        );
    }
}
