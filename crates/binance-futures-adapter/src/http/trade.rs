/*
[INPUT]:  Order requests carried as signed query parameters
[OUTPUT]: Order records and cancellation confirmations
[POS]:    HTTP layer - trading endpoints (require HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{FuturesClient, Result};
use crate::types::{NewOrderRequest, Order, OrderIdRequest, SymbolFilter};
use reqwest::Method;

impl FuturesClient {
    /// Create a new order
    ///
    /// POST /fapi/v1/order
    ///
    /// A successful call is a real, billable action against the account.
    /// There is no idempotency key: callers must not blindly retry a
    /// placement that failed with a transport error.
    pub async fn new_order(&self, req: &NewOrderRequest) -> Result<Order> {
        let builder = self.signed_request(Method::POST, "/fapi/v1/order", req)?;
        self.send_json(builder).await
    }

    /// List currently open orders, optionally filtered by symbol
    ///
    /// GET /fapi/v1/openOrders?symbol={symbol}
    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        let params = SymbolFilter {
            symbol: symbol.map(str::to_string),
        };
        let builder = self.signed_request(Method::GET, "/fapi/v1/openOrders", &params)?;
        self.send_json(builder).await
    }

    /// Cancel an open order
    ///
    /// DELETE /fapi/v1/order
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let params = OrderIdRequest {
            symbol: symbol.to_string(),
            order_id,
        };
        let builder = self.signed_request(Method::DELETE, "/fapi/v1/order", &params)?;
        self.send_json(builder).await
    }

    /// Current snapshot of one order's state
    ///
    /// GET /fapi/v1/order
    pub async fn query_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let params = OrderIdRequest {
            symbol: symbol.to_string(),
            order_id,
        };
        let builder = self.signed_request(Method::GET, "/fapi/v1/order", &params)?;
        self.send_json(builder).await
    }
}
