/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{MarginType, OrderStatus, OrderType, PositionSide, Side, TimeInForce};

/// A single order as reported by the exchange
///
/// Returned by order placement, cancellation, open-order listing, and
/// status queries alike. Owned and mutated exclusively by the exchange;
/// never cached locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    #[serde(default)]
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::str")]
    pub orig_qty: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_qty: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub avg_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub stop_price: Decimal,
    pub time_in_force: TimeInForce,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub update_time: i64,
}

/// One entry from GET /fapi/v2/positionRisk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInfo {
    pub symbol: String,
    /// Signed: positive long, negative short
    #[serde(with = "rust_decimal::serde::str")]
    pub position_amt: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub entry_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub mark_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub un_realized_profit: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub liquidation_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub leverage: Decimal,
    pub margin_type: MarginType,
    pub position_side: PositionSide,
    #[serde(default)]
    pub update_time: i64,
}

/// One entry from GET /fapi/v2/balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    #[serde(default)]
    pub account_alias: String,
    pub asset: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cross_wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(default)]
    pub update_time: i64,
}

/// Per-asset detail inside GET /fapi/v2/account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
    pub asset: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub unrealized_profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
}

/// Account summary from GET /fapi/v2/account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_unrealized_profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(default)]
    pub assets: Vec<AccountAsset>,
}

/// Latest traded price from GET /fapi/v1/ticker/price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolPrice {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub time: i64,
}

/// Trading rules for one symbol inside GET /fapi/v1/exchangeInfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub price_precision: u32,
    pub quantity_precision: u32,
}

/// Exchange trading rules from GET /fapi/v1/exchangeInfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(default)]
    pub server_time: i64,
    pub symbols: Vec<SymbolInfo>,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    // Binance omits some decimal fields or sends them as bare numbers
    // depending on endpoint version; accept both and default to zero.
    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_deserializes_from_placement_ack() {
        let value = json!({
            "orderId": 22542179,
            "clientOrderId": "x-abc123",
            "symbol": "BTCUSDT",
            "side": "BUY",
            "type": "MARKET",
            "status": "FILLED",
            "origQty": "0.01",
            "executedQty": "0.01",
            "price": "0",
            "avgPrice": "60012.34",
            "stopPrice": "0",
            "timeInForce": "GTC",
            "reduceOnly": false,
            "updateTime": 1566818724722u64
        });

        let order: Order = serde_json::from_value(value).expect("order should deserialize");

        assert_eq!(order.order_id, 22542179);
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.order_type, OrderType::Market);
        assert_eq!(order.status, OrderStatus::Filled);
        assert_eq!(order.executed_qty, "0.01".parse::<Decimal>().unwrap());
        assert_eq!(order.avg_price, "60012.34".parse::<Decimal>().unwrap());
    }

    #[test]
    fn order_deserializes_without_avg_price() {
        let value = json!({
            "orderId": 1,
            "clientOrderId": "cl-1",
            "symbol": "BTCUSDT",
            "side": "SELL",
            "type": "LIMIT",
            "status": "NEW",
            "origQty": "1",
            "executedQty": "0",
            "price": "65000",
            "timeInForce": "GTC"
        });

        let order: Order = serde_json::from_value(value).expect("order should deserialize");

        assert_eq!(order.avg_price, Decimal::ZERO);
        assert_eq!(order.stop_price, Decimal::ZERO);
        assert_eq!(order.update_time, 0);
    }

    #[test]
    fn position_info_deserializes() {
        let value = json!({
            "symbol": "BTCUSDT",
            "positionAmt": "-0.050",
            "entryPrice": "60000.0",
            "markPrice": "60123.45",
            "unRealizedProfit": "-6.17",
            "liquidationPrice": "72000.1",
            "leverage": "10",
            "marginType": "cross",
            "positionSide": "BOTH",
            "updateTime": 1617939110373u64
        });

        let position: PositionInfo =
            serde_json::from_value(value).expect("position should deserialize");

        assert!(position.position_amt < Decimal::ZERO);
        assert_eq!(position.margin_type, MarginType::Cross);
        assert_eq!(position.position_side, PositionSide::Both);
    }

    #[test]
    fn account_summary_deserializes_without_assets() {
        let value = json!({
            "totalWalletBalance": "1000.5",
            "totalUnrealizedProfit": "0",
            "availableBalance": "900.25"
        });

        let account: AccountSummary =
            serde_json::from_value(value).expect("account should deserialize");

        assert_eq!(
            account.total_wallet_balance,
            "1000.5".parse::<Decimal>().unwrap()
        );
        assert!(account.assets.is_empty());
    }
}
