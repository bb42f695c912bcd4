use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::sync::Arc;

use printforge::catalog::MaterialCatalog;
use printforge::client::PrintServiceClient;
use printforge::models::MaterialDraft;

use crate::cli::MaterialAddArgs;

/// Execute the materials list command
///
/// Loads the catalog and renders it as a table. If the service is down the
/// built-in fallback material is shown instead, clearly marked.
pub async fn list(base_url: Option<String>) -> Result<()> {
    let cfg = super::load_config_with(base_url)?;

    let client = Arc::new(PrintServiceClient::new(&cfg.service));
    let catalog = MaterialCatalog::new(client, cfg.catalog.fallback.clone());

    let materials = catalog.load().await?;
    if catalog.is_fallback() {
        println!(
            "{}",
            "⚠ Catalog service unreachable, showing the built-in fallback material.".yellow()
        );
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("FAMILY").fg(Color::Cyan),
        Cell::new("BRAND").fg(Color::Cyan),
        Cell::new("COLOR").fg(Color::Cyan),
        Cell::new("DENSITY").fg(Color::Cyan),
        Cell::new("COST/KG").fg(Color::Cyan),
        Cell::new("SURCHARGE").fg(Color::Cyan),
        Cell::new("ACTIVE").fg(Color::Cyan),
    ]);

    for material in &materials {
        let active = if material.active {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(material.id),
            Cell::new(&material.family),
            Cell::new(&material.brand),
            Cell::new(format!("{} {}", material.color_name, material.hex)),
            Cell::new(format!("{:.2}", material.density)),
            Cell::new(format!("{:.2}", material.cost_per_kg)),
            Cell::new(format!("{:.2}", material.surcharge)),
            active,
        ]);
    }

    println!("{}", table);
    println!("{} materials", materials.len());
    Ok(())
}

/// Execute the materials add command
///
/// Creates a material through the admin endpoint and prints the assigned id.
pub async fn add(base_url: Option<String>, args: MaterialAddArgs) -> Result<()> {
    let cfg = super::load_config_with(base_url)?;
    let client = PrintServiceClient::new(&cfg.service);

    let draft = MaterialDraft {
        family: args.family,
        brand: args.brand,
        color_name: args.color,
        hex: args.hex,
        density: args.density,
        cost_per_kg: args.cost_per_kg,
        surcharge: args.surcharge,
    };

    let material = client.create_material(&draft).await?;
    println!(
        "{} material #{} ({})",
        "✓ Created".green(),
        material.id,
        material.label()
    );
    Ok(())
}
