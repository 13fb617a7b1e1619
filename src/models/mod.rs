//! JSON:API payload types for the service-account endpoints.
//!
//! The wire format nests attributes under `{"data": {"type": ...,
//! "attributes": ...}}`. The wrappers are spelled out as structs so that
//! optional fields keep their presence semantics on the wire.

use serde::{Deserialize, Serialize};

/// Resource type discriminator carried in every request envelope.
pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Desired attributes for a new service account.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceAccountRequest {
    pub name: String,
    pub role_id: String,
    /// Authentication scheme, e.g. `"jwt"` or `"api_key"`.
    pub auth_type: String,
    /// JWKS endpoint for JWT-authenticated accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_ttl_seconds: Option<u64>,
}

/// Top-level `{"data": ...}` wrapper for create requests.
#[derive(Debug, Serialize)]
pub struct ServiceAccountRequestEnvelope {
    pub data: ServiceAccountRequestResource,
}

#[derive(Debug, Serialize)]
pub struct ServiceAccountRequestResource {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: ServiceAccountRequest,
}

impl ServiceAccountRequestEnvelope {
    pub fn new(request: ServiceAccountRequest) -> Self {
        Self {
            data: ServiceAccountRequestResource {
                kind: SERVICE_ACCOUNT_TYPE,
                attributes: request,
            },
        }
    }
}

/// Server response for a created service account.
///
/// The resource's `type` is echoed back but not validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountResponse {
    pub data: ServiceAccountResource,
    #[serde(default)]
    pub links: Option<ResourceLinks>,
    #[serde(default)]
    pub jsonapi: Option<JsonApiVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: ServiceAccountAttributes,
    #[serde(default)]
    pub links: Option<ResourceLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountAttributes {
    pub name: String,
    pub role_id: String,
    pub auth_type: String,
    /// Issued credentials; which of these is populated depends on the
    /// account's auth type.
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub jwks_url: String,
    #[serde(default)]
    pub access_token_ttl_seconds: Option<u64>,
}

/// JSON:API navigation links, all optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub related: Option<String>,
    #[serde(default, rename = "self")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonApiVersion {
    #[serde(default)]
    pub version: Option<String>,
}
