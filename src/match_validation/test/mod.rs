
use crate::match_validation::config::ProviderConfig;
use httpmock::MockServer;

pub const VALID_GSTIN: &str = "27AAPFU0939F1ZV";
pub const API_KEY: &str = "test-secret";
pub const PROVIDER_PATH: &str = "/api/verifyGST";

pub fn provider_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::default()
        .with_endpoint(server.url(PROVIDER_PATH))
        .with_api_key(API_KEY)
}
