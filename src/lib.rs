//! # Salesforce API Rust Client
//!
//! A Rust client for the Salesforce (Force.com) OAuth2 service and REST APIs.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SalesforceConfig`] and [`OAuth2Config`],
//!   with `SALESFORCE_*` environment variable fallback
//! - The OAuth2 web server, username-password, refresh token and revoke
//!   flows via [`auth::oauth`]
//! - Signature verification of every token response before an
//!   [`AuthSession`] is handed out
//! - Authenticated request builders for the Data REST API ([`DataService`])
//!   and Apex REST services ([`ApexRestService`])
//! - An async reqwest-backed [`HttpClient`] behind the [`Transport`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use salesforce_api::{SalesforceClient, SalesforceConfig, ApiVersion};
//! use salesforce_api::{CallbackUrl, ConsumerKey, ConsumerSecret, DomainUrl};
//! use salesforce_api::auth::oauth::FlowParams;
//!
//! let config = SalesforceConfig::builder()
//!     .domain(DomainUrl::new("https://login.salesforce.com").unwrap())
//!     .callback_url(CallbackUrl::new("https://myapp.example.com/oauth/callback").unwrap())
//!     .consumer_key(ConsumerKey::new("your-consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("your-consumer-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = SalesforceClient::new(config);
//! let url = client.auth().authorization_url(&FlowParams::new().with("scope", "api"));
//! assert!(url.starts_with("https://login.salesforce.com/services/oauth2/authorize?client_id="));
//! ```
//!
//! ## OAuth Authentication
//!
//! Flow methods check their parameters synchronously and return a pending
//! request; `send().await` performs the round trip:
//!
//! ```rust,ignore
//! use salesforce_api::auth::oauth::{FlowParams, OAuthError};
//!
//! // Fails immediately, without touching the network, if `code` is missing
//! let request = client.auth().authenticate(&FlowParams::code(code))?;
//!
//! // Fails after the round trip if the response cannot be verified
//! let session = request.send().await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use salesforce_api::clients::Transport;
//!
//! let request = client.data().create_data_request(&session, "sobjects/Account/describe");
//! let response = http_client.send(request).await?;
//!
//! let identity = client.data().get_logged_user(&session).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Verified sessions only**: An [`AuthSession`] cannot be constructed
//!   without passing signature verification

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::AuthSession;
pub use client::SalesforceClient;
pub use config::{
    ApiVersion, CallbackUrl, ConsumerKey, ConsumerSecret, DomainUrl, OAuth2Config,
    OAuth2ConfigBuilder, SalesforceConfig, SalesforceConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApexRestService, DataService, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, Transport,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    FlowParams, OAuth2Service, OAuthError, PreconditionError, RevokeRequest, SignatureError,
    TokenRequest,
};
