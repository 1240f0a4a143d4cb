/*
[INPUT]:  Bot configuration (credentials, network target)
[OUTPUT]: Validated exchange connection and account/order operations
[POS]:    Core facade - owns the exchange client, delegates order flow
[UPDATE]: When account operations or the startup probe change
*/

use std::sync::Arc;

use binance_futures_adapter::{
    AssetBalance, ChangeLeverageResponse, ClientConfig, Credentials, FuturesClient, Order,
    PositionInfo, SymbolInfo,
};
use rust_decimal::Decimal;
use tracing::{error, info};

use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::orders::OrderManager;

/// Valid initial-leverage range on USDT-M futures
const LEVERAGE_RANGE: std::ops::RangeInclusive<u32> = 1..=125;

/// Owns a single authenticated connection to the exchange and exposes
/// account queries; all order mutations go through [`OrderManager`].
///
/// Construction probes the account endpoint and fails if it is
/// unreachable, so a `TradingBot` value is always live.
#[derive(Debug)]
pub struct TradingBot {
    client: Arc<FuturesClient>,
    orders: OrderManager,
}

impl TradingBot {
    /// Connect to the network named in the configuration and validate the
    /// connection before returning
    pub async fn connect(config: &BotConfig) -> Result<Self> {
        info!(network = ?config.network, "initializing futures trading bot");

        let client = FuturesClient::new(config.network)?;
        Self::finish_connect(client, config).await
    }

    /// Connect against an explicit base URL (mock servers, alternate
    /// gateways)
    pub async fn connect_with_base_url(config: &BotConfig, base_url: &str) -> Result<Self> {
        let client = FuturesClient::with_config_and_base_url(ClientConfig::default(), base_url)?;
        Self::finish_connect(client, config).await
    }

    async fn finish_connect(mut client: FuturesClient, config: &BotConfig) -> Result<Self> {
        client.set_credentials(Credentials {
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        });

        let client = Arc::new(client);
        let bot = Self {
            orders: OrderManager::new(Arc::clone(&client)),
            client,
        };
        bot.validate_connection().await?;
        Ok(bot)
    }

    /// Probe the account endpoint; propagate any failure so the bot is
    /// never usable in a half-initialized state
    async fn validate_connection(&self) -> Result<()> {
        let account = self.client.account().await.map_err(|err| {
            error!(error = %err, "API connection validation failed");
            BotError::from(err)
        })?;

        info!(
            wallet_balance = %account.total_wallet_balance,
            "connection validated"
        );
        Ok(())
    }

    /// Per-asset futures wallet balances
    pub async fn get_account_balance(&self) -> Result<Vec<AssetBalance>> {
        let balances = self.client.balances().await.map_err(|err| {
            error!(error = %err, "error fetching balance");
            BotError::from(err)
        })?;

        Ok(balances)
    }

    /// Position records, optionally filtered by symbol
    pub async fn get_positions(&self, symbol: Option<&str>) -> Result<Vec<PositionInfo>> {
        let symbol = symbol.map(|s| s.trim().to_uppercase());

        let positions = self
            .client
            .position_risk(symbol.as_deref())
            .await
            .map_err(|err| {
                error!(error = %err, "error fetching positions");
                BotError::from(err)
            })?;

        Ok(positions)
    }

    /// Change initial leverage for a symbol (1-125)
    pub async fn set_leverage(&self, symbol: &str, leverage: u32) -> Result<ChangeLeverageResponse> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(BotError::InvalidParameter("symbol is required".to_string()));
        }
        if !LEVERAGE_RANGE.contains(&leverage) {
            return Err(BotError::InvalidParameter(format!(
                "leverage must be between {} and {}, got {leverage}",
                LEVERAGE_RANGE.start(),
                LEVERAGE_RANGE.end()
            )));
        }

        info!(%symbol, leverage, "setting leverage");
        let response = self
            .client
            .change_leverage(&symbol, leverage)
            .await
            .map_err(|err| {
                error!(%symbol, leverage, error = %err, "error setting leverage");
                BotError::from(err)
            })?;

        info!(%symbol, leverage = response.leverage, "leverage set");
        Ok(response)
    }

    /// Latest traded price for a symbol
    pub async fn get_current_price(&self, symbol: &str) -> Result<Decimal> {
        let symbol = symbol.trim().to_uppercase();

        let ticker = self.client.symbol_price(&symbol).await.map_err(|err| {
            error!(%symbol, error = %err, "error fetching price");
            BotError::from(err)
        })?;

        info!(%symbol, price = %ticker.price, "current price");
        Ok(ticker.price)
    }

    /// Trading rules for one symbol from the exchange-info listing
    pub async fn get_symbol_info(&self, symbol: &str) -> Result<SymbolInfo> {
        let symbol = symbol.trim().to_uppercase();

        let exchange_info = self.client.exchange_info().await.map_err(|err| {
            error!(error = %err, "error fetching exchange info");
            BotError::from(err)
        })?;

        exchange_info
            .symbols
            .into_iter()
            .find(|entry| entry.symbol == symbol)
            .ok_or(BotError::SymbolNotFound { symbol })
    }

    // Order operations, delegated to OrderManager

    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Result<Order> {
        self.orders.place_market_order(symbol, side, quantity).await
    }

    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: Option<&str>,
    ) -> Result<Order> {
        self.orders
            .place_limit_order(symbol, side, quantity, price, time_in_force)
            .await
    }

    pub async fn place_stop_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        time_in_force: Option<&str>,
    ) -> Result<Order> {
        self.orders
            .place_stop_limit_order(symbol, side, quantity, stop_price, limit_price, time_in_force)
            .await
    }

    pub async fn get_open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        self.orders.get_open_orders(symbol).await
    }

    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        self.orders.cancel_order(symbol, order_id).await
    }

    pub async fn get_order_status(&self, symbol: &str, order_id: i64) -> Result<Order> {
        self.orders.get_order_status(symbol, order_id).await
    }
}
