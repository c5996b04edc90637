/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for betatransfer-adapter tests

use betatransfer_adapter::{BetatransferClient, ClientConfig, Credentials};
use wiremock::MockServer;

#[allow(dead_code)]
pub const PUBLIC_TOKEN: &str = "pub";
#[allow(dead_code)]
pub const PRIVATE_TOKEN: &str = "secret";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(PUBLIC_TOKEN, PRIVATE_TOKEN)
}

/// Client pointed at the mock server with the fixture credentials
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> BetatransferClient {
    BetatransferClient::with_config(test_credentials(), ClientConfig::with_base_url(server.uri()))
        .expect("client init")
}

/// The history item used across scenarios
#[allow(dead_code)]
pub fn sample_item() -> serde_json::Value {
    serde_json::json!({
        "id": "42",
        "type": "deposit",
        "amount": "10.5",
        "paymentSystem": "visa",
        "currency": "USD",
        "address": "addr1",
        "paymentCard": "card1",
        "status": "success"
    })
}
