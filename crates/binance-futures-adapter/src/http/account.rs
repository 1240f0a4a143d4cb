/*
[INPUT]:  Query parameters and signed-request credentials
[OUTPUT]: Account data (summary, balances, positions, leverage)
[POS]:    HTTP layer - account endpoints (require HMAC signature)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::{FuturesClient, Result};
use crate::types::{
    AccountSummary, AssetBalance, ChangeLeverageRequest, ChangeLeverageResponse, NoParams,
    PositionInfo, SymbolFilter,
};
use reqwest::Method;

impl FuturesClient {
    /// Account summary (wallet balance, unrealized PnL, per-asset detail)
    ///
    /// GET /fapi/v2/account
    pub async fn account(&self) -> Result<AccountSummary> {
        let builder = self.signed_request(Method::GET, "/fapi/v2/account", &NoParams {})?;
        self.send_json(builder).await
    }

    /// Per-asset futures wallet balances
    ///
    /// GET /fapi/v2/balance
    pub async fn balances(&self) -> Result<Vec<AssetBalance>> {
        let builder = self.signed_request(Method::GET, "/fapi/v2/balance", &NoParams {})?;
        self.send_json(builder).await
    }

    /// Position information, optionally restricted to one symbol
    ///
    /// GET /fapi/v2/positionRisk?symbol={symbol}
    pub async fn position_risk(&self, symbol: Option<&str>) -> Result<Vec<PositionInfo>> {
        let params = SymbolFilter {
            symbol: symbol.map(str::to_string),
        };
        let builder = self.signed_request(Method::GET, "/fapi/v2/positionRisk", &params)?;
        self.send_json(builder).await
    }

    /// Change initial leverage for a symbol
    ///
    /// POST /fapi/v1/leverage
    pub async fn change_leverage(
        &self,
        symbol: &str,
        leverage: u32,
    ) -> Result<ChangeLeverageResponse> {
        let params = ChangeLeverageRequest {
            symbol: symbol.to_string(),
            leverage,
        };
        let builder = self.signed_request(Method::POST, "/fapi/v1/leverage", &params)?;
        self.send_json(builder).await
    }
}
