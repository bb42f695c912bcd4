use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::sync::Arc;
use tracing::info;

use printforge::catalog::MaterialCatalog;
use printforge::client::PrintServiceClient;
use printforge::error::WorkflowError;
use printforge::models::QuoteResult;
use printforge::orchestrator::QuoteOrchestrator;

use crate::cli::QuoteArgs;

/// Execute the quote command
///
/// Drives the full upload-to-quote workflow: load the material catalog
/// (falling back to the built-in material if the service is down), upload
/// the model file, validate inputs, request the quote, and render the
/// price breakdown.
pub async fn execute(base_url: Option<String>, args: QuoteArgs) -> Result<()> {
    let cfg = super::load_config_with(base_url)?;

    let client = Arc::new(PrintServiceClient::new(&cfg.service));
    let catalog = Arc::new(MaterialCatalog::new(
        client.clone(),
        cfg.catalog.fallback.clone(),
    ));
    let orchestrator = QuoteOrchestrator::new(client, catalog.clone());

    let materials = catalog.load().await?;
    if catalog.is_fallback() {
        println!(
            "{}",
            "⚠ Catalog service unreachable, using the built-in fallback material. Prices are provisional."
                .yellow()
        );
    }

    let material_id = match args.material {
        Some(id) => id,
        None => materials
            .iter()
            .find(|material| material.active)
            .map(|material| material.id)
            .context("no active material available to quote against")?,
    };

    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .context("model file path has no usable file name")?
        .to_string();
    let file_bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    info!(file = %args.file.display(), size = file_bytes.len(), "Read model file");

    println!("{} {}", "Uploading".yellow(), file_name);
    let receipt = orchestrator.upload_model(file_bytes, &file_name).await?;
    println!(
        "{} model #{} ({:.1} cm³, about {:.0} g)",
        "✓ Uploaded".green(),
        receipt.model_id,
        receipt.volume_mm3 / 1000.0,
        receipt.weight_g
    );

    println!("{}", "Requesting quote...".yellow());
    match orchestrator
        .request_quote(material_id, args.quantity, args.post_minutes)
        .await
    {
        Ok(quote) => {
            render_quote(&quote, args.quantity);
            Ok(())
        }
        Err(WorkflowError::Transport(err)) if err.is_timeout() => Err(anyhow::anyhow!(
            "the quote service did not answer in time: {err}"
        )),
        Err(err) => Err(err.into()),
    }
}

/// Render a quote as a breakdown table plus summary lines.
fn render_quote(quote: &QuoteResult, quantity: u32) {
    println!();
    println!("{}", format!("Quote #{}", quote.quote_id).green().bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("COST COMPONENT").fg(Color::Cyan),
        Cell::new("AMOUNT").fg(Color::Cyan),
    ]);

    for (name, amount) in quote
        .breakdown
        .iter()
        .filter(|(name, _)| name.as_str() != "total")
    {
        table.add_row(vec![Cell::new(name), Cell::new(format!("{:.2}", amount))]);
    }
    table.add_row(vec![
        Cell::new("total").fg(Color::Green),
        Cell::new(format!("{:.2}", quote.total)).fg(Color::Green),
    ]);

    println!("{}", table);

    println!(
        "  {} {:.2}    {} {}    {} {:.0} days",
        "Unit price:".cyan(),
        quote.unit_price,
        "Quantity:".cyan(),
        quantity,
        "Lead time:".cyan(),
        quote.lead_time_days
    );
    println!("  {} {}", "Pricing version:".cyan(), quote.config_version);

    let drift = (quote.breakdown_sum() - quote.total).abs();
    if drift > 0.01 {
        println!(
            "  {}",
            format!(
                "note: components sum differs from total by {:.2} (minimums or multipliers applied)",
                drift
            )
            .dimmed()
        );
    }
}
