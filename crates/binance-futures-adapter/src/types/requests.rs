/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs, encoded as query parameters
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side, TimeInForce};

/// Parameters for POST /fapi/v1/order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
}

impl NewOrderRequest {
    /// A market order: no price, no time-in-force
    pub fn market(symbol: String, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol,
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
            reduce_only: None,
            new_client_order_id: None,
        }
    }

    /// A limit order resting at `price`
    pub fn limit(
        symbol: String,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol,
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            stop_price: None,
            time_in_force: Some(time_in_force),
            reduce_only: None,
            new_client_order_id: None,
        }
    }

    /// A stop-limit order: triggers at `stop_price`, executes at `price`
    pub fn stop_limit(
        symbol: String,
        side: Side,
        quantity: Decimal,
        stop_price: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol,
            side,
            order_type: OrderType::Stop,
            quantity,
            price: Some(price),
            stop_price: Some(stop_price),
            time_in_force: Some(time_in_force),
            reduce_only: None,
            new_client_order_id: None,
        }
    }
}

/// Parameters identifying a single order (GET/DELETE /fapi/v1/order)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdRequest {
    pub symbol: String,
    pub order_id: i64,
}

/// Parameters for GET /fapi/v1/openOrders and GET /fapi/v2/positionRisk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Parameters for POST /fapi/v1/leverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeLeverageRequest {
    pub symbol: String,
    pub leverage: u32,
}

/// Empty parameter set for signed endpoints without arguments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoParams {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_order_query_has_no_price_fields() {
        let req = NewOrderRequest::market(
            "BTCUSDT".to_string(),
            Side::Buy,
            "0.01".parse().unwrap(),
        );
        let query = serde_urlencoded::to_string(&req).unwrap();
        assert_eq!(query, "symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01");
    }

    #[test]
    fn test_limit_order_query_carries_price_and_tif() {
        let req = NewOrderRequest::limit(
            "ETHUSDT".to_string(),
            Side::Sell,
            "1.5".parse().unwrap(),
            "3000".parse().unwrap(),
            TimeInForce::Gtc,
        );
        let query = serde_urlencoded::to_string(&req).unwrap();
        assert_eq!(
            query,
            "symbol=ETHUSDT&side=SELL&type=LIMIT&quantity=1.5&price=3000&timeInForce=GTC"
        );
    }

    #[test]
    fn test_stop_limit_order_query_carries_both_prices() {
        let req = NewOrderRequest::stop_limit(
            "BTCUSDT".to_string(),
            Side::Sell,
            "0.5".parse().unwrap(),
            "59000".parse().unwrap(),
            "58900".parse().unwrap(),
            TimeInForce::Gtc,
        );
        let query = serde_urlencoded::to_string(&req).unwrap();
        assert!(query.contains("type=STOP"));
        assert!(query.contains("stopPrice=59000"));
        assert!(query.contains("price=58900"));
    }

    #[test]
    fn test_symbol_filter_none_encodes_empty() {
        let query = serde_urlencoded::to_string(SymbolFilter { symbol: None }).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_no_params_encodes_empty() {
        let query = serde_urlencoded::to_string(NoParams {}).unwrap();
        assert!(query.is_empty());
    }
}
