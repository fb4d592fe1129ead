//! Request builder for Apex REST services.

use crate::auth::AuthSession;
use crate::clients::http_request::{HttpMethod, HttpRequest};

/// Path prefix of custom Apex REST services, relative to the instance URL.
pub const APEX_REST_PATH: &str = "/services/apexrest";

/// Builds authenticated requests against custom Apex REST services.
///
/// Apex REST endpoints are not versioned, so the service holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApexRestService;

impl ApexRestService {
    /// Creates a new Apex REST request builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds a GET request for `{instance_url}/services/apexrest/{resource}`
    /// carrying `Authorization: Bearer {access_token}`.
    #[must_use]
    pub fn create_apex_request(&self, session: &AuthSession, resource: &str) -> HttpRequest {
        let url = format!("{}{}/{}", session.instance_url(), APEX_REST_PATH, resource);

        HttpRequest::builder(HttpMethod::Get, url)
            .bearer_auth(session.access_token())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_apex_request() {
        let session = AuthSession::from_verified(json!({
            "id": "https://domain/testId",
            "issued_at": "1332093834282",
            "instance_url": "testInstanceUrl",
            "access_token": "testAccessTocken",
            "signature": "unused"
        }))
        .unwrap();

        let request = ApexRestService::new().create_apex_request(&session, "testResource");

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "testInstanceUrl/services/apexrest/testResource");
        assert_eq!(request.authorization(), Some("Bearer testAccessTocken"));
    }
}
