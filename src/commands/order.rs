use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use printforge::client::PrintServiceClient;
use printforge::models::{OrderId, OrderRequest, QuoteId};

/// Execute the order place command
///
/// Turns a previously received quote into an order.
pub async fn place(base_url: Option<String>, quote: QuoteId, ship_to: String) -> Result<()> {
    let cfg = super::load_config_with(base_url)?;
    let client = PrintServiceClient::new(&cfg.service);

    let receipt = client
        .place_order(&OrderRequest {
            quote_id: quote,
            shipping_address: ship_to,
        })
        .await?;

    println!(
        "{} order #{} ({}), total {:.2}",
        "✓ Placed".green(),
        receipt.order_id,
        receipt.status,
        receipt.total_price
    );
    Ok(())
}

/// Execute the order show command
///
/// Fetches an order and renders its line items.
pub async fn show(base_url: Option<String>, id: OrderId) -> Result<()> {
    let cfg = super::load_config_with(base_url)?;
    let client = PrintServiceClient::new(&cfg.service);

    let order = client.fetch_order(id).await?;

    println!("{}", format!("Order #{}", order.order_id).green().bold());
    println!(
        "  {} {}    {} {:.2}    {} {}",
        "Status:".cyan(),
        order.status,
        "Total:".cyan(),
        order.total_price,
        "Placed:".cyan(),
        order.created_at.format("%Y-%m-%d %H:%M")
    );
    match &order.tracking_code {
        Some(code) => println!("  {} {}", "Tracking:".cyan(), code),
        None => println!("  {} {}", "Tracking:".cyan(), "not yet shipped".dimmed()),
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("QUOTE").fg(Color::Cyan),
        Cell::new("MATERIAL").fg(Color::Cyan),
        Cell::new("QUANTITY").fg(Color::Cyan),
        Cell::new("STATUS").fg(Color::Cyan),
        Cell::new("LEAD TIME").fg(Color::Cyan),
    ]);
    for item in &order.items {
        table.add_row(vec![
            Cell::new(item.quote_id),
            Cell::new(item.material_id),
            Cell::new(item.quantity),
            Cell::new(&item.status),
            Cell::new(format!("{:.0} days", item.lead_time_days)),
        ]);
    }
    println!("{}", table);
    Ok(())
}
