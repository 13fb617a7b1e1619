use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

/// Immutable connection settings for the organization API.
///
/// The authorization value is the pre-formed header contents (e.g.
/// `Bearer <token>`); token acquisition happens elsewhere.
#[derive(Deserialize, Clone, Debug)]
pub struct OrganizationApiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Value of the `version` query parameter sent on every request.
    pub api_version: String,
    /// Full `Authorization` header value.
    pub authorization: Secret<String>,
}

impl OrganizationApiConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base_url = env::var("ORG_API_BASE_URL").context("ORG_API_BASE_URL must be set")?;
        let api_version = env::var("ORG_API_VERSION").context("ORG_API_VERSION must be set")?;
        let authorization =
            env::var("ORG_API_AUTHORIZATION").context("ORG_API_AUTHORIZATION must be set")?;

        Ok(Self {
            base_url,
            api_version,
            authorization: Secret::new(authorization),
        })
    }
}
