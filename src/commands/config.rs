use anyhow::Result;
use colored::Colorize;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration after file, environment, and CLI
/// overrides are applied.
pub fn show(base_url: Option<String>) -> Result<()> {
    info!("Loading configuration for display");
    let cfg = super::load_config_with(base_url)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(base_url: Option<String>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    let cfg = super::load_config_with(base_url)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Service".cyan(), cfg.service.base_url);
    println!(
        "  {}: {}s",
        "Request timeout".cyan(),
        cfg.service.timeout_seconds
    );
    println!(
        "  {}: {}",
        "Fallback material".cyan(),
        cfg.catalog.fallback.label()
    );

    Ok(())
}
