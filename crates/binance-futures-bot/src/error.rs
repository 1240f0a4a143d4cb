/*
[INPUT]:  Validation failures and exchange-side errors
[OUTPUT]: Structured error types for bot operations
[POS]:    Error handling layer - unified error types for the bot crate
[UPDATE]: When adding new error sources or improving error messages
*/

use binance_futures_adapter::BinanceError;
use thiserror::Error;

/// Main error type for bot operations
#[derive(Error, Debug)]
pub enum BotError {
    /// Rejected locally before any network call
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Symbol absent from the exchange-info listing
    #[error("Symbol {symbol} not found on the exchange")]
    SymbolNotFound { symbol: String },

    /// Failure signaled by the exchange or the transport.
    ///
    /// Propagated unchanged; nothing here retries. Order placement has no
    /// idempotency guard, so a blind retry risks duplicate submission.
    #[error(transparent)]
    Exchange(#[from] BinanceError),
}

impl BotError {
    /// True for errors raised before any request left the process
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            BotError::InvalidParameter(_) | BotError::Exchange(BinanceError::MissingCredentials)
        )
    }
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_is_local() {
        assert!(BotError::InvalidParameter("quantity must be positive".into()).is_local());
    }

    #[test]
    fn test_exchange_error_is_not_local() {
        let err = BotError::Exchange(BinanceError::Api {
            code: -1121,
            message: "Invalid symbol.".to_string(),
        });
        assert!(!err.is_local());
    }
}
