use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "printforge", version, about = "Upload-to-quote workflow for the PrintForge service")]
pub struct Cli {
    /// Base URL of the print service (overrides configuration)
    #[arg(long, env = "PRINTFORGE_API_URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Upload a model file and request an instant quote
    Quote(QuoteArgs),

    /// Browse the sellable material catalog (default)
    Materials {
        #[command(subcommand)]
        action: Option<MaterialCommands>,
    },

    /// Show the active pricing configuration
    Pricing,

    /// Place or inspect orders
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Path to the model file to upload
    pub file: PathBuf,

    /// Material id to quote against (defaults to the first active material)
    #[arg(short, long)]
    pub material: Option<u64>,

    /// Number of copies
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,

    /// Post-processing minutes per item
    #[arg(short, long, default_value = "0")]
    pub post_minutes: u32,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MaterialCommands {
    /// Create a material through the admin endpoint
    Add(MaterialAddArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MaterialAddArgs {
    /// Polymer family, e.g. PLA
    #[arg(long)]
    pub family: String,

    /// Manufacturer or product line
    #[arg(long)]
    pub brand: String,

    /// Color name, e.g. Natural
    #[arg(long)]
    pub color: String,

    /// Display color as a hex string
    #[arg(long, default_value = "#FFFFFF")]
    pub hex: String,

    /// Density in g/cm3
    #[arg(long)]
    pub density: f64,

    /// Material cost per kilogram
    #[arg(long)]
    pub cost_per_kg: f64,

    /// Per-print surcharge
    #[arg(long, default_value = "0.0")]
    pub surcharge: f64,
}

#[derive(Subcommand, Debug, Clone)]
pub enum OrderCommands {
    /// Turn a quote into an order
    Place {
        /// Quote id returned by a previous quote
        #[arg(long)]
        quote: u64,

        /// Shipping address for the order
        #[arg(long)]
        ship_to: String,
    },

    /// Show an order with its line items
    Show {
        /// Order id
        id: u64,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration sources
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to the catalog listing
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Materials { action: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_lists_materials() {
        let cli = Cli {
            base_url: None,
            command: None,
        };

        match cli.get_command() {
            Commands::Materials { action } => {
                assert!(action.is_none());
            }
            _ => panic!("Expected Materials command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote() {
        let args = vec![
            "printforge", "quote", "bracket.stl", "--material", "2", "--quantity", "3",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote(args) => {
                assert_eq!(args.file, PathBuf::from("bracket.stl"));
                assert_eq!(args.material, Some(2));
                assert_eq!(args.quantity, 3);
                assert_eq!(args.post_minutes, 0);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote_defaults() {
        let args = vec!["printforge", "quote", "bracket.stl"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote(args) => {
                assert_eq!(args.material, None);
                assert_eq!(args.quantity, 1);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_material_add() {
        let args = vec![
            "printforge", "materials", "add",
            "--family", "PETG",
            "--brand", "Prusament",
            "--color", "Jet Black",
            "--density", "1.27",
            "--cost-per-kg", "55.0",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Materials { action: Some(MaterialCommands::Add(args)) } => {
                assert_eq!(args.family, "PETG");
                assert_eq!(args.hex, "#FFFFFF");
                assert_eq!(args.surcharge, 0.0);
            }
            _ => panic!("Expected Materials add command"),
        }
    }

    #[test]
    fn test_cli_parsing_order_place() {
        let args = vec![
            "printforge", "order", "place", "--quote", "7", "--ship-to", "1 Main St",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Order { action: OrderCommands::Place { quote, ship_to } } => {
                assert_eq!(quote, 7);
                assert_eq!(ship_to, "1 Main St");
            }
            _ => panic!("Expected Order place command"),
        }
    }

    #[test]
    fn test_cli_parsing_base_url_override() {
        let args = vec!["printforge", "--base-url", "http://10.0.0.5:8000", "pricing"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert!(matches!(cli.get_command(), Commands::Pricing));
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["printforge", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                matches!(action, ConfigCommands::Show);
            }
            _ => panic!("Expected Config command"),
        }
    }
}
