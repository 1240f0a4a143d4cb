/*
[INPUT]:  Parsed subcommands and bot query results
[OUTPUT]: Rendered exchange records on stdout
[POS]:    CLI layer - command dispatch and presentation
[UPDATE]: When adding subcommands or changing output format
*/

use anyhow::Result;
use binance_futures_adapter::{AssetBalance, Order, PositionInfo, SymbolInfo};
use console::style;
use rust_decimal::Decimal;

use binance_futures_bot::TradingBot;

use crate::Command;

pub mod interactive;

pub(crate) async fn run_command(bot: &TradingBot, command: Command) -> Result<()> {
    match command {
        Command::Market {
            symbol,
            side,
            quantity,
        } => {
            let order = bot.place_market_order(&symbol, &side, quantity).await?;
            print_order_ack(&order);
        }
        Command::Limit {
            symbol,
            side,
            quantity,
            price,
            time_in_force,
        } => {
            let order = bot
                .place_limit_order(&symbol, &side, quantity, price, time_in_force.as_deref())
                .await?;
            print_order_ack(&order);
        }
        Command::StopLimit {
            symbol,
            side,
            quantity,
            stop_price,
            limit_price,
            time_in_force,
        } => {
            let order = bot
                .place_stop_limit_order(
                    &symbol,
                    &side,
                    quantity,
                    stop_price,
                    limit_price,
                    time_in_force.as_deref(),
                )
                .await?;
            print_order_ack(&order);
        }
        Command::OpenOrders { symbol } => {
            let orders = bot.get_open_orders(symbol.as_deref()).await?;
            print_open_orders(&orders);
        }
        Command::Cancel { symbol, order_id } => {
            let order = bot.cancel_order(&symbol, order_id).await?;
            println!(
                "{} order {} cancelled ({})",
                style("✓").green().bold(),
                order.order_id,
                order.status
            );
        }
        Command::Status { symbol, order_id } => {
            let order = bot.get_order_status(&symbol, order_id).await?;
            print_order_detail(&order);
        }
        Command::Balance => {
            let balances = bot.get_account_balance().await?;
            print_balances(&balances);
        }
        Command::Positions { symbol } => {
            let positions = bot.get_positions(symbol.as_deref()).await?;
            print_positions(&positions);
        }
        Command::Leverage { symbol, leverage } => {
            let response = bot.set_leverage(&symbol, leverage).await?;
            println!(
                "{} leverage set to {}x for {}",
                style("✓").green().bold(),
                response.leverage,
                response.symbol
            );
        }
        Command::Price { symbol } => {
            let price = bot.get_current_price(&symbol).await?;
            println!("{}: {}", symbol.trim().to_uppercase(), style(price).bold());
        }
        Command::SymbolInfo { symbol } => {
            let info = bot.get_symbol_info(&symbol).await?;
            print_symbol_info(&info);
        }
        // handled by the caller
        Command::Interactive => unreachable!("interactive mode dispatched in main"),
    }
    Ok(())
}

pub(crate) fn print_order_ack(order: &Order) {
    println!("{} order placed", style("✓").green().bold());
    println!("  Order ID: {}", order.order_id);
    println!("  Status:   {}", order.status);
    println!("  Executed: {}/{}", order.executed_qty, order.orig_qty);
    if order.price > Decimal::ZERO {
        println!("  Price:    {}", order.price);
    }
    if order.stop_price > Decimal::ZERO {
        println!("  Stop:     {}", order.stop_price);
    }
}

pub(crate) fn print_order_detail(order: &Order) {
    println!("Order {} ({})", style(order.order_id).bold(), order.symbol);
    println!("  Side:     {}", order.side);
    println!("  Type:     {}", order.order_type);
    println!("  Status:   {}", order.status);
    println!("  Price:    {}", order.price);
    println!("  Executed: {}/{}", order.executed_qty, order.orig_qty);
}

pub(crate) fn print_open_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No open orders");
        return;
    }

    println!("{} open order(s):", orders.len());
    for order in orders {
        println!(
            "  #{} {} {} {} qty {} @ {} ({})",
            order.order_id,
            order.symbol,
            order.side,
            order.order_type,
            order.orig_qty,
            order.price,
            order.status
        );
    }
}

pub(crate) fn print_balances(balances: &[AssetBalance]) {
    let nonzero: Vec<&AssetBalance> = balances
        .iter()
        .filter(|entry| entry.balance != Decimal::ZERO)
        .collect();

    if nonzero.is_empty() {
        println!("No non-zero balances");
        return;
    }

    for entry in nonzero {
        println!(
            "  {}: {} (available {})",
            style(&entry.asset).bold(),
            entry.balance,
            entry.available_balance
        );
    }
}

pub(crate) fn print_positions(positions: &[PositionInfo]) {
    let open: Vec<&PositionInfo> = positions
        .iter()
        .filter(|position| position.position_amt != Decimal::ZERO)
        .collect();

    if open.is_empty() {
        println!("No open positions");
        return;
    }

    for position in open {
        println!("{}", style(&position.symbol).bold());
        println!("  Amount:         {}", position.position_amt);
        println!("  Entry price:    {}", position.entry_price);
        println!("  Mark price:     {}", position.mark_price);
        println!("  Unrealized PnL: {}", position.un_realized_profit);
        println!("  Leverage:       {}x", position.leverage);
    }
}

pub(crate) fn print_symbol_info(info: &SymbolInfo) {
    println!("{} ({})", style(&info.symbol).bold(), info.status);
    println!("  Base asset:         {}", info.base_asset);
    println!("  Quote asset:        {}", info.quote_asset);
    println!("  Price precision:    {}", info.price_precision);
    println!("  Quantity precision: {}", info.quantity_precision);
}
