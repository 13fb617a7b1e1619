//! Client library for the organization management API's service-account
//! endpoints.
//!
//! A service account is a non-human identity scoped to an organization,
//! authenticated via a role/JWT pair or an API key. This crate covers the
//! two operations the remote API exposes for them: creation under an
//! organization and deletion by id.

pub mod config;
pub mod models;
pub mod services;

pub use config::OrganizationApiConfig;
pub use models::{ServiceAccountRequest, ServiceAccountResponse};
pub use services::OrganizationClient;
