use organization_client::config::OrganizationApiConfig;
use organization_client::services::OrganizationClient;
use secrecy::Secret;
use wiremock::MockServer;

pub const TEST_AUTHORIZATION: &str = "Bearer test-token";
pub const TEST_API_VERSION: &str = "2023-06-01";

pub struct TestApi {
    pub server: MockServer,
    pub client: OrganizationClient,
}

impl TestApi {
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;

        let config = OrganizationApiConfig {
            base_url: server.uri(),
            api_version: TEST_API_VERSION.to_string(),
            authorization: Secret::new(TEST_AUTHORIZATION.to_string()),
        };

        let client = OrganizationClient::new(config);

        TestApi { server, client }
    }
}
