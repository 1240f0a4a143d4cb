/*
[INPUT]:  Raw order intent (symbol, side, quantity, prices) from the caller
[OUTPUT]: Validated exchange order requests and their results
[POS]:    Core order management - validation and submission
[UPDATE]: When order types or validation rules change
*/

use std::sync::Arc;

use binance_futures_adapter::{FuturesClient, NewOrderRequest, Order, Side, TimeInForce};
use rust_decimal::Decimal;
use tracing::{error, info};

use crate::error::{BotError, Result};

/// Validates order parameters and submits order requests.
///
/// Holds a shared reference to the connection owned by
/// [`crate::TradingBot`]; the bot retains sole responsibility for the
/// connection's lifecycle.
#[derive(Debug)]
pub struct OrderManager {
    client: Arc<FuturesClient>,
}

impl OrderManager {
    pub fn new(client: Arc<FuturesClient>) -> Self {
        Self { client }
    }

    /// Validate the parameters common to every placement call.
    ///
    /// Runs before any network call: a failure here guarantees nothing was
    /// sent to the exchange. Returns the uppercased symbol and parsed side.
    fn validate_order_params(
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Result<(String, Side)> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(BotError::InvalidParameter("symbol is required".to_string()));
        }

        let side = side.parse::<Side>().map_err(|_| {
            BotError::InvalidParameter(format!("side must be BUY or SELL, got {side:?}"))
        })?;

        if quantity <= Decimal::ZERO {
            return Err(BotError::InvalidParameter(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        Ok((symbol, side))
    }

    fn validate_price(name: &str, price: Decimal) -> Result<()> {
        if price <= Decimal::ZERO {
            return Err(BotError::InvalidParameter(format!(
                "{name} must be positive, got {price}"
            )));
        }
        Ok(())
    }

    fn parse_time_in_force(time_in_force: Option<&str>) -> Result<TimeInForce> {
        match time_in_force {
            None => Ok(TimeInForce::Gtc),
            Some(raw) => raw.parse::<TimeInForce>().map_err(|_| {
                BotError::InvalidParameter(format!(
                    "time-in-force must be GTC, IOC, or FOK, got {raw:?}"
                ))
            }),
        }
    }

    /// Place a market order, executed immediately at best available price
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Result<Order> {
        let (symbol, side) = Self::validate_order_params(symbol, side, quantity)?;

        info!(%symbol, %side, %quantity, "placing MARKET order");
        let req = NewOrderRequest::market(symbol.clone(), side, quantity);
        let order = self.client.new_order(&req).await.map_err(|err| {
            error!(%symbol, error = %err, "market order failed");
            BotError::from(err)
        })?;

        info!(
            order_id = order.order_id,
            status = %order.status,
            executed_qty = %order.executed_qty,
            "market order accepted"
        );
        Ok(order)
    }

    /// Place a limit order resting at `price` until filled, cancelled, or
    /// expired per time-in-force (default GTC)
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: Option<&str>,
    ) -> Result<Order> {
        let (symbol, side) = Self::validate_order_params(symbol, side, quantity)?;
        Self::validate_price("price", price)?;
        let time_in_force = Self::parse_time_in_force(time_in_force)?;

        info!(%symbol, %side, %quantity, %price, %time_in_force, "placing LIMIT order");
        let req = NewOrderRequest::limit(symbol.clone(), side, quantity, price, time_in_force);
        let order = self.client.new_order(&req).await.map_err(|err| {
            error!(%symbol, error = %err, "limit order failed");
            BotError::from(err)
        })?;

        info!(order_id = order.order_id, status = %order.status, "limit order placed");
        Ok(order)
    }

    /// Place a stop-limit order: becomes an active limit order at
    /// `limit_price` once `stop_price` is reached
    pub async fn place_stop_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        time_in_force: Option<&str>,
    ) -> Result<Order> {
        let (symbol, side) = Self::validate_order_params(symbol, side, quantity)?;
        Self::validate_price("stop price", stop_price)?;
        Self::validate_price("limit price", limit_price)?;
        let time_in_force = Self::parse_time_in_force(time_in_force)?;

        info!(
            %symbol, %side, %quantity, %stop_price, %limit_price,
            "placing STOP-LIMIT order"
        );
        let req = NewOrderRequest::stop_limit(
            symbol.clone(),
            side,
            quantity,
            stop_price,
            limit_price,
            time_in_force,
        );
        let order = self.client.new_order(&req).await.map_err(|err| {
            error!(%symbol, error = %err, "stop-limit order failed");
            BotError::from(err)
        })?;

        info!(order_id = order.order_id, status = %order.status, "stop-limit order placed");
        Ok(order)
    }

    /// List currently open orders, optionally filtered by symbol
    pub async fn get_open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        let symbol = symbol.map(|s| s.trim().to_uppercase());

        let orders = self
            .client
            .open_orders(symbol.as_deref())
            .await
            .map_err(|err| {
                error!(error = %err, "failed to get open orders");
                BotError::from(err)
            })?;

        info!(count = orders.len(), "retrieved open orders");
        Ok(orders)
    }

    /// Request cancellation of a specific order
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let symbol = symbol.trim().to_uppercase();

        info!(%symbol, order_id, "cancelling order");
        let order = self
            .client
            .cancel_order(&symbol, order_id)
            .await
            .map_err(|err| {
                error!(%symbol, order_id, error = %err, "cancel order failed");
                BotError::from(err)
            })?;

        info!(order_id, status = %order.status, "order cancelled");
        Ok(order)
    }

    /// Current snapshot of one order's state
    pub async fn get_order_status(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let symbol = symbol.trim().to_uppercase();

        let order = self
            .client
            .query_order(&symbol, order_id)
            .await
            .map_err(|err| {
                error!(%symbol, order_id, error = %err, "failed to get order status");
                BotError::from(err)
            })?;

        info!(order_id, status = %order.status, "order status retrieved");
        Ok(order)
    }
}
