use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use printforge::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Quote(quote_args) => {
            commands::quote::execute(args.base_url, quote_args).await?;
        }
        cli::Commands::Materials { action } => match action {
            Some(cli::MaterialCommands::Add(add_args)) => {
                commands::materials::add(args.base_url, add_args).await?;
            }
            None => {
                commands::materials::list(args.base_url).await?;
            }
        },
        cli::Commands::Pricing => {
            commands::pricing::execute(args.base_url).await?;
        }
        cli::Commands::Order { action } => match action {
            cli::OrderCommands::Place { quote, ship_to } => {
                commands::order::place(args.base_url, quote, ship_to).await?;
            }
            cli::OrderCommands::Show { id } => {
                commands::order::show(args.base_url, id).await?;
            }
        },
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(args.base_url)?,
            cli::ConfigCommands::Validate => commands::config::validate(args.base_url)?,
        },
        cli::Commands::Version => {
            println!("PrintForge CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
