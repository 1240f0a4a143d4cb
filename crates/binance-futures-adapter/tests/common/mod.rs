/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{ClientConfig, Credentials, FuturesClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials used against mock servers
pub fn test_credentials() -> Credentials {
    Credentials {
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
    }
}

/// Client pointed at a mock server, with test credentials attached
pub fn authenticated_client(server: &MockServer) -> FuturesClient {
    let mut client =
        FuturesClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");
    client.set_credentials(test_credentials());
    client
}
