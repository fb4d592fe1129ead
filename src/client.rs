//! Composition of the OAuth2 service and the REST request builders.

use crate::auth::oauth::OAuth2Service;
use crate::clients::{ApexRestService, DataService, HttpClient, Transport};
use crate::config::SalesforceConfig;
use crate::error::ConfigError;

/// Entry point bundling everything built from one [`SalesforceConfig`].
///
/// - [`auth`](Self::auth): the OAuth2 flows
/// - [`data`](Self::data): the Data REST API request builder
/// - [`apex`](Self::apex): the Apex REST request builder
///
/// All three share one transport. Clients built from different
/// configurations are fully independent.
///
/// # Example
///
/// ```rust
/// use salesforce_api::{SalesforceClient, SalesforceConfig, ApiVersion};
/// use salesforce_api::{CallbackUrl, ConsumerKey, ConsumerSecret, DomainUrl};
///
/// let config = SalesforceConfig::builder()
///     .domain(DomainUrl::new("https://login.salesforce.com").unwrap())
///     .callback_url(CallbackUrl::new("https://myapp.example.com/callback").unwrap())
///     .consumer_key(ConsumerKey::new("consumer-key").unwrap())
///     .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
///     .api_version(ApiVersion::release(61))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// let client = SalesforceClient::new(config);
/// assert_eq!(client.data().api_version(), &ApiVersion::release(61));
/// ```
#[derive(Clone, Debug)]
pub struct SalesforceClient<T: Transport + Clone = HttpClient> {
    auth: OAuth2Service<T>,
    data: DataService<T>,
    apex: ApexRestService,
}

impl SalesforceClient<HttpClient> {
    /// Builds a client using the default reqwest transport, configured with
    /// the configuration's `user_agent_prefix`.
    #[must_use]
    pub fn new(config: SalesforceConfig) -> Self {
        let transport = HttpClient::from_config(&config);
        Self::with_transport(config, transport)
    }

    /// Builds a client entirely from `SALESFORCE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing or invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        SalesforceConfig::from_env().map(Self::new)
    }
}

impl<T: Transport + Clone> SalesforceClient<T> {
    /// Builds a client that sends through `transport`.
    #[must_use]
    pub fn with_transport(config: SalesforceConfig, transport: T) -> Self {
        tracing::debug!(
            domain = config.oauth2().domain().as_ref(),
            api_version = %config.api_version(),
            "Building Salesforce client"
        );

        let data = DataService::with_transport(config.api_version().clone(), transport.clone());
        let auth = OAuth2Service::with_transport(config.oauth2().clone(), transport);

        Self {
            auth,
            data,
            apex: ApexRestService::new(),
        }
    }

    /// Returns the OAuth2 service.
    #[must_use]
    pub const fn auth(&self) -> &OAuth2Service<T> {
        &self.auth
    }

    /// Returns the Data REST API request builder.
    #[must_use]
    pub const fn data(&self) -> &DataService<T> {
        &self.data
    }

    /// Returns the Apex REST request builder.
    #[must_use]
    pub const fn apex(&self) -> &ApexRestService {
        &self.apex
    }
}

// Verify SalesforceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SalesforceClient>();
};
