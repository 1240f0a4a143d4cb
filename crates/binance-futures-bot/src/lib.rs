/*
[INPUT]:  Public API exports for binance-futures-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod bot;
pub mod config;
pub mod error;
pub mod orders;

// Re-export main types for convenience
pub use bot::TradingBot;
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use orders::OrderManager;
