/*
[INPUT]:  Interactive user input via menu prompts
[OUTPUT]: Order-management operations and rendered results
[POS]:    CLI layer - menu-driven session
[UPDATE]: When adding menu actions or changing prompts
*/

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_decimal::Decimal;

use binance_futures_bot::{BotConfig, TradingBot};

use super::{
    print_balances, print_open_orders, print_order_ack, print_order_detail, print_positions,
};

const MENU: [&str; 11] = [
    "Place market order",
    "Place limit order",
    "Place stop-limit order",
    "View open orders",
    "Cancel order",
    "Check order status",
    "View account balance",
    "View positions",
    "Set leverage",
    "Get current price",
    "Exit",
];

pub async fn run(bot: &TradingBot, config: &BotConfig) -> Result<()> {
    println!(
        "{}",
        style("Binance Futures Trading Bot").bold().cyan()
    );
    println!(
        "{}",
        style("Market | Limit | Stop-Limit orders").dim()
    );

    let theme = ColorfulTheme::default();
    loop {
        println!();
        let selection = Select::with_theme(&theme)
            .with_prompt("Select an action")
            .items(&MENU)
            .default(0)
            .interact()?;

        if selection == MENU.len() - 1 {
            println!("Goodbye!");
            return Ok(());
        }

        // Operation failures are rendered and the menu continues; only
        // prompt/terminal errors abort the session.
        if let Err(err) = dispatch(bot, config, &theme, selection).await {
            println!("{} {err:#}", style("error:").red().bold());
        }
    }
}

async fn dispatch(
    bot: &TradingBot,
    config: &BotConfig,
    theme: &ColorfulTheme,
    selection: usize,
) -> Result<()> {
    match selection {
        0 => {
            let (symbol, side, quantity) = prompt_order_basics(theme)?;
            let order = bot.place_market_order(&symbol, &side, quantity).await?;
            print_order_ack(&order);
        }
        1 => {
            let (symbol, side, quantity) = prompt_order_basics(theme)?;
            let price: Decimal = Input::with_theme(theme)
                .with_prompt("Limit price")
                .interact_text()?;
            let order = bot
                .place_limit_order(&symbol, &side, quantity, price, None)
                .await?;
            print_order_ack(&order);
        }
        2 => {
            let (symbol, side, quantity) = prompt_order_basics(theme)?;
            let stop_price: Decimal = Input::with_theme(theme)
                .with_prompt("Stop price")
                .interact_text()?;
            let limit_price: Decimal = Input::with_theme(theme)
                .with_prompt("Limit price")
                .interact_text()?;
            let order = bot
                .place_stop_limit_order(&symbol, &side, quantity, stop_price, limit_price, None)
                .await?;
            print_order_ack(&order);
        }
        3 => {
            let symbol: String = Input::with_theme(theme)
                .with_prompt("Symbol (empty for all)")
                .allow_empty(true)
                .interact_text()?;
            let filter = if symbol.trim().is_empty() {
                None
            } else {
                Some(symbol)
            };
            let orders = bot.get_open_orders(filter.as_deref()).await?;
            print_open_orders(&orders);
        }
        4 => {
            let (symbol, order_id) = prompt_order_ref(theme)?;
            let order = bot.cancel_order(&symbol, order_id).await?;
            println!(
                "{} order {} cancelled ({})",
                style("✓").green().bold(),
                order.order_id,
                order.status
            );
        }
        5 => {
            let (symbol, order_id) = prompt_order_ref(theme)?;
            let order = bot.get_order_status(&symbol, order_id).await?;
            print_order_detail(&order);
        }
        6 => {
            let balances = bot.get_account_balance().await?;
            print_balances(&balances);
        }
        7 => {
            let positions = bot.get_positions(None).await?;
            print_positions(&positions);
        }
        8 => {
            let symbol: String = Input::with_theme(theme)
                .with_prompt("Symbol")
                .interact_text()?;
            let leverage: u32 = Input::with_theme(theme)
                .with_prompt("Leverage (1-125)")
                .default(config.default_leverage)
                .interact_text()?;
            let response = bot.set_leverage(&symbol, leverage).await?;
            println!(
                "{} leverage set to {}x for {}",
                style("✓").green().bold(),
                response.leverage,
                response.symbol
            );
        }
        9 => {
            let symbol: String = Input::with_theme(theme)
                .with_prompt("Symbol")
                .interact_text()?;
            let price = bot.get_current_price(&symbol).await?;
            println!("{}: {}", symbol.trim().to_uppercase(), style(price).bold());
        }
        _ => unreachable!("selection bounded by menu length"),
    }
    Ok(())
}

fn prompt_order_basics(theme: &ColorfulTheme) -> Result<(String, String, Decimal)> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt("Symbol (e.g. BTCUSDT)")
        .interact_text()?;
    let side: String = Input::with_theme(theme)
        .with_prompt("Side (BUY/SELL)")
        .interact_text()?;
    let quantity: Decimal = Input::with_theme(theme)
        .with_prompt("Quantity")
        .interact_text()?;
    Ok((symbol, side, quantity))
}

fn prompt_order_ref(theme: &ColorfulTheme) -> Result<(String, i64)> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt("Symbol")
        .interact_text()?;
    let order_id: i64 = Input::with_theme(theme)
        .with_prompt("Order ID")
        .interact_text()?;
    Ok((symbol, order_id))
}
