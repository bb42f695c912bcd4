use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::sync::Arc;

use printforge::client::PrintServiceClient;
use printforge::models::PricingConfig;
use printforge::pricing_view::{PricingConfigViewer, PricingView};

/// Execute the pricing command
///
/// Read-only view of the active pricing configuration: version metadata,
/// grouped parameters (e.g. per-family densities), then the flat
/// operational parameters. On failure only the static error message is
/// shown, never fabricated data.
pub async fn execute(base_url: Option<String>) -> Result<()> {
    let cfg = super::load_config_with(base_url)?;

    let client = Arc::new(PrintServiceClient::new(&cfg.service));
    let viewer = PricingConfigViewer::new(client);

    match viewer.load().await {
        Ok(config) => {
            render_config(&config);
            Ok(())
        }
        Err(err) => {
            if let PricingView::Failed(message) = viewer.view().await {
                println!("{}", message.red());
            }
            Err(err.into())
        }
    }
}

fn render_config(config: &PricingConfig) {
    println!("{}", "Pricing configuration".green().bold());
    println!(
        "  v{} · effective {} · last updated by {}",
        config.version,
        config.effective_from.format("%Y-%m-%d"),
        config.created_by
    );
    println!();

    for (name, group) in config.grouped_parameters() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new(name.to_uppercase()).fg(Color::Cyan),
            Cell::new("VALUE").fg(Color::Cyan),
        ]);
        for (key, value) in group {
            table.add_row(vec![Cell::new(key), Cell::new(format!("{}", value))]);
        }
        println!("{}", table);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("OPERATIONAL").fg(Color::Cyan),
        Cell::new("VALUE").fg(Color::Cyan),
    ]);
    for (name, value) in config.scalar_parameters() {
        table.add_row(vec![Cell::new(name), Cell::new(format!("{}", value))]);
    }
    println!("{}", table);
}
