//! Service-account operations against the organization API.
//!
//! Create and delete are the only operations the remote API exposes for
//! service accounts; in particular there is no get or list endpoint.

use crate::config::OrganizationApiConfig;
use crate::models::{
    ServiceAccountRequest, ServiceAccountRequestEnvelope, ServiceAccountResponse,
};
use anyhow::{anyhow, Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;

/// JSON:API media type sent on every request.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Client for the organization API's service-account endpoints.
///
/// Holds only immutable configuration and a shared `reqwest::Client`, so it
/// can be cloned and used concurrently without coordination. No timeouts or
/// retries are applied here; callers own cancellation by dropping the
/// returned future.
#[derive(Clone)]
pub struct OrganizationClient {
    client: Client,
    config: OrganizationApiConfig,
}

impl OrganizationClient {
    pub fn new(config: OrganizationApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a service account under an organization.
    ///
    /// Issues `POST /v3/orgs/{org_id}/service_accounts` with the request
    /// wrapped in a JSON:API envelope. A 201 response is parsed and
    /// returned; any other status becomes an error carrying the raw
    /// response body.
    pub async fn create_service_account(
        &self,
        org_id: &str,
        request: ServiceAccountRequest,
    ) -> Result<ServiceAccountResponse> {
        let url = format!(
            "{}/v3/orgs/{}/service_accounts",
            self.config.base_url, org_id
        );

        let envelope = ServiceAccountRequestEnvelope::new(request);
        let payload =
            serde_json::to_vec(&envelope).context("Failed to encode service account request")?;

        let response = self
            .client
            .post(&url)
            .query(&[("version", self.config.api_version.as_str())])
            .header(CONTENT_TYPE, JSON_API_CONTENT_TYPE)
            .header(AUTHORIZATION, self.config.authorization.expose_secret())
            .body(payload)
            .send()
            .await
            .context("Failed to send create service account request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read create service account response body")?;

        tracing::debug!(status = %status, body = %body, "create service account response");

        // TODO: confirm with the API owners whether a create can ever answer
        // 200 instead of 201; until then only 201 counts as success.
        if status == StatusCode::CREATED {
            let parsed: ServiceAccountResponse = serde_json::from_str(&body)
                .context("Failed to decode service account response")?;
            tracing::info!(
                org_id = %org_id,
                service_account_id = %parsed.data.id,
                "service account created"
            );
            Ok(parsed)
        } else {
            tracing::error!(
                org_id = %org_id,
                status = %status,
                body = %body,
                "service account creation failed"
            );
            Err(anyhow!("invalid status code: {}", body))
        }
    }

    /// Delete a service account by id.
    ///
    /// Issues `DELETE /v3/orgs/{org_id}/service_accounts/{id}`. A 204
    /// response is success. A 404 is also treated as success: the
    /// organization may have been deleted first, taking its service
    /// accounts with it, and with no get endpoint there is no way to check
    /// existence beforehand. Any other status becomes an error carrying the
    /// numeric status code.
    pub async fn delete_service_account(
        &self,
        org_id: &str,
        service_account_id: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/v3/orgs/{}/service_accounts/{}",
            self.config.base_url, org_id, service_account_id
        );

        let response = self
            .client
            .delete(&url)
            .query(&[("version", self.config.api_version.as_str())])
            .header(CONTENT_TYPE, JSON_API_CONTENT_TYPE)
            .header(AUTHORIZATION, self.config.authorization.expose_secret())
            .send()
            .await
            .context("Failed to send delete service account request")?;

        let status = response.status();

        tracing::debug!(
            org_id = %org_id,
            service_account_id = %service_account_id,
            status = %status,
            "delete service account response"
        );

        match status {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::NOT_FOUND => {
                tracing::warn!(
                    org_id = %org_id,
                    service_account_id = %service_account_id,
                    "service account already gone, treating delete as success"
                );
                Ok(())
            }
            other => {
                tracing::error!(
                    org_id = %org_id,
                    service_account_id = %service_account_id,
                    status = %other,
                    "service account deletion failed"
                );
                Err(anyhow!("invalid status code: {}", other.as_u16()))
            }
        }
    }
}
