//! HTTP types and request builders for the Salesforce REST APIs.
//!
//! This module provides the transport layer and the authenticated request
//! builders that consume a verified [`AuthSession`](crate::AuthSession).
//!
//! # Overview
//!
//! - [`Transport`]: The capability to execute a request; implemented by [`HttpClient`]
//! - [`HttpRequest`]: A request descriptor (method, URL, headers)
//! - [`HttpResponse`]: A response with its raw body
//! - [`HttpError`]: Transport and non-success status errors
//! - [`DataService`]: Builds requests for `/services/data/{version}/...`
//! - [`ApexRestService`]: Builds requests for `/services/apexrest/...`
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforce_api::{ApiVersion, ApexRestService, DataService};
//!
//! let data = DataService::new(ApiVersion::latest());
//! let request = data.create_data_request(&session, "sobjects/Account/describe");
//!
//! let apex = ApexRestService::new();
//! let request = apex.create_apex_request(&session, "Cases");
//!
//! // The request builders only describe requests; executing them is up to
//! // the caller's transport.
//! let response = http_client.send(request).await?;
//! ```

mod apex;
mod data;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use apex::{ApexRestService, APEX_REST_PATH};
pub use data::{DataService, DATA_PATH};
pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, Transport, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, AUTHORIZATION};
pub use http_response::HttpResponse;
