//! API endpoint walkthrough
//!
//! Exercises every public endpoint, and every private endpoint when
//! `CF_API_KEY` / `CF_API_SECRET` are set in the environment.
//!
//! Run: cargo run --bin api_tester

use cf_rest::{CfRestClient, Credentials, EditOrder, OrderSide, OrderType};
use chrono::TimeZone;
use colored::*;
use rust_decimal_macros::dec;

const SYMBOL: &str = "PI_XBTUSD";

fn banner(label: &str) {
    println!();
    println!("{}", "═".repeat(70).cyan());
    println!("{}", format!("  {}", label).cyan().bold());
    println!("{}", "═".repeat(70).cyan());
}

fn show(label: &str, result: Result<String, cf_rest::RestError>) {
    match result {
        Ok(body) => println!("{} {}:\n{}", "✓".green(), label.bold(), body),
        Err(e) => println!("{} {}: {}", "✗".red(), label.bold(), e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    banner("PUBLIC ENDPOINTS");

    let client = CfRestClient::new();
    let last_time = chrono::Utc.with_ymd_and_hms(2016, 1, 20, 0, 0, 0).unwrap();

    show("getInstruments", client.get_instruments().await);
    show("getTickers", client.get_tickers().await);
    show("getOrderBook", client.get_orderbook(SYMBOL).await);
    show("getHistory", client.get_history(SYMBOL, Some(last_time)).await);

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(_) => {
            println!();
            println!(
                "{}",
                "CF_API_KEY / CF_API_SECRET not set; skipping private endpoints".yellow()
            );
            return Ok(());
        }
    };

    banner("PRIVATE ENDPOINTS");

    let client = CfRestClient::with_credentials(creds);

    show("getAccounts", client.get_accounts().await);

    show(
        "sendOrder (limit)",
        client
            .send_order(OrderType::Limit, SYMBOL, OrderSide::Buy, dec!(1), dec!(1), None)
            .await,
    );

    show(
        "sendOrder (stop)",
        client
            .send_order(
                OrderType::Stop,
                SYMBOL,
                OrderSide::Buy,
                dec!(1),
                dec!(1.1),
                Some(dec!(2)),
            )
            .await,
    );

    let edit = EditOrder::new("5b02d8a4-1655-4409-b26d-c896b87d6df9")
        .with_size(dec!(2))
        .with_limit_price(dec!(2));
    show("editOrder", client.edit_order(&edit).await);

    show(
        "cancelOrder",
        client.cancel_order("5b02d8a4-1655-4409-b26d-c896b87d6df9").await,
    );

    let batch = serde_json::json!({
        "batchOrder": [
            {
                "order": "send",
                "order_tag": "1",
                "orderType": "lmt",
                "symbol": SYMBOL,
                "side": "buy",
                "size": 1,
                "limitPrice": 1.00,
            },
            {
                "order": "cancel",
                "order_id": "b8dbe131-5104-4fcf-af90-44321b30a6b8",
            },
        ],
    });
    show("sendBatchOrder", client.send_batch_order(&batch).await);

    show("cancelAllOrders", client.cancel_all_orders().await);
    show("cancelAllOrdersAfter", client.cancel_all_orders_after(5).await);
    show("getOpenOrders", client.get_open_orders().await);

    let last_fill_time = chrono::Utc.with_ymd_and_hms(2016, 2, 1, 0, 0, 0).unwrap();
    show("getFills", client.get_fills(Some(last_fill_time)).await);

    show("getOpenPositions", client.get_open_positions().await);
    show("getRecentOrders", client.get_recent_orders(Some(SYMBOL)).await);
    show("getNotifications", client.get_notifications().await);

    let last_transfer_time = chrono::Utc.with_ymd_and_hms(2016, 2, 1, 0, 0, 0).unwrap();
    show("getTransfers", client.get_transfers(Some(last_transfer_time)).await);

    Ok(())
}
