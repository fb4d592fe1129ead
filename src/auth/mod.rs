//! Authentication types for the Salesforce API client.
//!
//! # Overview
//!
//! - [`oauth`]: The OAuth2 flows and token response verification
//! - [`AuthSession`]: A verified session, handed to the REST request builders
//!
//! # OAuth Flow
//!
//! ```rust,ignore
//! use salesforce_api::auth::oauth::{FlowParams, OAuth2Service};
//!
//! // 1. Redirect the user to the authorization URL
//! let url = service.authorization_url(&FlowParams::new().with("scope", "api"));
//!
//! // 2. Exchange the code from the callback for a verified session
//! let session = service.authenticate(&FlowParams::code(code))?.send().await?;
//! ```

pub mod oauth;
mod session;

pub use session::AuthSession;
