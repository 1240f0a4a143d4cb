/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (ticker prices, exchange trading rules)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{FuturesClient, Result};
use crate::types::{ExchangeInfo, SymbolPrice};
use reqwest::Method;

impl FuturesClient {
    /// Latest traded price for a symbol
    ///
    /// GET /fapi/v1/ticker/price?symbol={symbol}
    pub async fn symbol_price(&self, symbol: &str) -> Result<SymbolPrice> {
        let builder =
            self.public_request(Method::GET, "/fapi/v1/ticker/price", &[("symbol", symbol)])?;
        self.send_json(builder).await
    }

    /// Current trading rules for all listed symbols
    ///
    /// GET /fapi/v1/exchangeInfo
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        let builder = self.public_request(
            Method::GET,
            "/fapi/v1/exchangeInfo",
            &[] as &[(&str, &str)],
        )?;
        self.send_json(builder).await
    }

    /// Connectivity check
    ///
    /// GET /fapi/v1/ping
    pub async fn ping(&self) -> Result<()> {
        let builder =
            self.public_request(Method::GET, "/fapi/v1/ping", &[] as &[(&str, &str)])?;
        let _: serde_json::Value = self.send_json(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, FuturesClient};
    use crate::types::{ExchangeInfo, SymbolInfo, SymbolPrice};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_client(server: &MockServer) -> FuturesClient {
        FuturesClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_symbol_price() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "symbol": "BTCUSDT",
            "price": "60123.45",
            "time": 1589437530011
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/ticker/price"))
            .and(query_param("symbol", "BTCUSDT"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .symbol_price("BTCUSDT")
            .await
            .expect("symbol_price failed");

        let expected = SymbolPrice {
            symbol: "BTCUSDT".to_string(),
            price: "60123.45".parse().expect("price"),
            time: 1_589_437_530_011,
        };

        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_exchange_info() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "serverTime": 1565613908500,
            "symbols": [
                {
                    "symbol": "BTCUSDT",
                    "status": "TRADING",
                    "baseAsset": "BTC",
                    "quoteAsset": "USDT",
                    "pricePrecision": 2,
                    "quantityPrecision": 3
                },
                {
                    "symbol": "ETHUSDT",
                    "status": "TRADING",
                    "baseAsset": "ETH",
                    "quoteAsset": "USDT",
                    "pricePrecision": 2,
                    "quantityPrecision": 3
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/exchangeInfo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.exchange_info().await.expect("exchange_info failed");

        let expected = ExchangeInfo {
            server_time: 1_565_613_908_500,
            symbols: vec![
                SymbolInfo {
                    symbol: "BTCUSDT".to_string(),
                    status: "TRADING".to_string(),
                    base_asset: "BTC".to_string(),
                    quote_asset: "USDT".to_string(),
                    price_precision: 2,
                    quantity_precision: 3,
                },
                SymbolInfo {
                    symbol: "ETHUSDT".to_string(),
                    status: "TRADING".to_string(),
                    base_asset: "ETH".to_string(),
                    quote_asset: "USDT".to_string(),
                    price_precision: 2,
                    quantity_precision: 3,
                },
            ],
        };

        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/ping"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw("{}", "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client.ping().await.expect("ping failed");
    }
}
