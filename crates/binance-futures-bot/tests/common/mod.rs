/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-bot tests

use binance_futures_bot::{BotConfig, TradingBot};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration wired to test credentials
pub fn test_config() -> BotConfig {
    BotConfig {
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
        ..BotConfig::default()
    }
}

/// Mount a healthy response for the startup account probe
pub async fn mount_account_probe(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/fapi/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalWalletBalance": "15000.00",
            "totalUnrealizedProfit": "0",
            "availableBalance": "14500.00",
            "assets": []
        })))
        .mount(server)
        .await;
}

/// Connect a bot against a mock server, mounting the probe first
pub async fn connect_bot(server: &MockServer) -> TradingBot {
    mount_account_probe(server).await;
    TradingBot::connect_with_base_url(&test_config(), &server.uri())
        .await
        .expect("bot should connect against healthy probe")
}

/// A full order record as the exchange would return it
pub fn order_json(order_id: i64, symbol: &str, side: &str, order_type: &str) -> Value {
    json!({
        "orderId": order_id,
        "clientOrderId": format!("cl-{order_id}"),
        "symbol": symbol,
        "side": side,
        "type": order_type,
        "status": "NEW",
        "origQty": "0.01",
        "executedQty": "0",
        "price": "0",
        "avgPrice": "0",
        "stopPrice": "0",
        "timeInForce": "GTC",
        "reduceOnly": false,
        "updateTime": 1617939110373u64
    })
}
