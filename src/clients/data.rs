//! Request builder for the Salesforce Data REST API.
//!
//! This module provides the [`DataService`] type, which turns an
//! [`AuthSession`] and a resource path into a signed request descriptor for
//! `/services/data/{version}/...`.

use crate::auth::AuthSession;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_client::{HttpClient, Transport};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::ApiVersion;

/// Path prefix of the Data REST API, relative to the instance URL.
pub const DATA_PATH: &str = "/services/data";

/// Builds authenticated requests against the Data REST API.
///
/// Each service owns its API version; two services configured with different
/// versions never affect each other.
///
/// # Thread Safety
///
/// `DataService` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust,ignore
/// use salesforce_api::{ApiVersion, DataService};
///
/// let data = DataService::new(ApiVersion::release(62));
/// let request = data.create_data_request(&session, "sobjects/Account");
/// assert_eq!(
///     request.url,
///     format!("{}/services/data/v62.0/sobjects/Account", session.instance_url())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct DataService<T: Transport = HttpClient> {
    api_version: ApiVersion,
    transport: T,
}

// Verify DataService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataService>();
};

impl DataService<HttpClient> {
    /// Creates a service for `api_version` using the default reqwest transport.
    #[must_use]
    pub fn new(api_version: ApiVersion) -> Self {
        Self::with_transport(api_version, HttpClient::default())
    }
}

impl<T: Transport> DataService<T> {
    /// Creates a service for `api_version` that sends through `transport`.
    #[must_use]
    pub const fn with_transport(api_version: ApiVersion, transport: T) -> Self {
        Self {
            api_version,
            transport,
        }
    }

    /// Returns the API version this service builds requests for.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Builds a GET request for `{instance_url}/services/data/{api_version}/{resource}`.
    ///
    /// The request carries `Authorization: Bearer {access_token}`. Pure: the
    /// same session and resource always yield an identical request.
    #[must_use]
    pub fn create_data_request(&self, session: &AuthSession, resource: &str) -> HttpRequest {
        let url = format!(
            "{}{}/{}/{}",
            session.instance_url(),
            DATA_PATH,
            self.api_version,
            resource
        );

        HttpRequest::builder(HttpMethod::Get, url)
            .bearer_auth(session.access_token())
            .build()
    }

    /// Fetches the identity of the logged-in user.
    ///
    /// Sends an authenticated GET to the session's identity URL
    /// ([`AuthSession::id`]) and returns the response body unmodified.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unchanged, or
    /// [`HttpError::Response`] if the identity endpoint answers with a
    /// non-2xx status.
    pub async fn get_logged_user(&self, session: &AuthSession) -> Result<String, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, session.id())
            .bearer_auth(session.access_token())
            .build();

        tracing::debug!("Fetching logged-in user identity");
        let response = self.transport.send(request).await?;

        if !response.is_ok() {
            tracing::warn!(
                status = response.code,
                "Identity endpoint returned a non-success status"
            );
            return Err(HttpResponseError {
                code: response.code,
                message: response.body,
            }
            .into());
        }

        Ok(response.body)
    }
}
