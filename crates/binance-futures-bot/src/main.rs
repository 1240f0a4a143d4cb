/*
[INPUT]:  CLI arguments, YAML configuration file, environment variables
[OUTPUT]: Order-management operations against the exchange
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use binance_futures_adapter::Network;
use binance_futures_bot::{BotConfig, TradingBot};

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "binance-futures-bot",
    version,
    about = "Binance USDT-M futures order management CLI"
)]
struct Cli {
    /// YAML configuration file; BINANCE_API_KEY/BINANCE_API_SECRET are
    /// used when omitted
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Target the simulated-funds testnet
    #[arg(long, conflicts_with = "live")]
    testnet: bool,
    /// Target the live exchange
    #[arg(long)]
    live: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a market order
    Market {
        symbol: String,
        side: String,
        quantity: Decimal,
    },
    /// Place a limit order
    Limit {
        symbol: String,
        side: String,
        quantity: Decimal,
        price: Decimal,
        /// Time-in-force: GTC, IOC, or FOK
        #[arg(long = "tif")]
        time_in_force: Option<String>,
    },
    /// Place a stop-limit order
    StopLimit {
        symbol: String,
        side: String,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        /// Time-in-force: GTC, IOC, or FOK
        #[arg(long = "tif")]
        time_in_force: Option<String>,
    },
    /// List open orders
    OpenOrders { symbol: Option<String> },
    /// Cancel an order
    Cancel { symbol: String, order_id: i64 },
    /// Show one order's status
    Status { symbol: String, order_id: i64 },
    /// Show per-asset balances
    Balance,
    /// Show positions
    Positions { symbol: Option<String> },
    /// Change initial leverage for a symbol
    Leverage { symbol: String, leverage: u32 },
    /// Show the latest traded price
    Price { symbol: String },
    /// Show trading rules for a symbol
    SymbolInfo { symbol: String },
    /// Menu-driven interactive session
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config_path {
        Some(path) => {
            let path = path.to_str().context("config path must be valid utf-8")?;
            BotConfig::from_file(path).context("load config")?
        }
        None => BotConfig::from_env(),
    };
    if args.testnet {
        config.network = Network::Testnet;
    }
    if args.live {
        config.network = Network::Live;
    }
    config.require_credentials()?;

    let _guard = init_tracing(&args.log_level, config.log_file.as_deref())?;
    info!(network = ?config.network, "starting binance-futures-bot");

    let bot = TradingBot::connect(&config)
        .await
        .context("bot initialization failed")?;

    match args.command {
        Command::Interactive => cli::interactive::run(&bot, &config).await,
        command => cli::run_command(&bot, command).await,
    }
}

fn init_tracing(log_level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .context("log file path must name a file")?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(None)
        }
    }
}
