//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - quote: Upload a model and request an instant quote
//! - materials: Browse the catalog or create materials
//! - pricing: Show the active pricing configuration
//! - order: Place and inspect orders
//! - config: Configuration display and validation

pub mod config;
pub mod materials;
pub mod order;
pub mod pricing;
pub mod quote;

use anyhow::Result;
use printforge::config::{load_config, Config};

/// Load configuration and apply the CLI/env base URL override.
pub(crate) fn load_config_with(base_url: Option<String>) -> Result<Config> {
    let mut cfg = load_config()?;
    if let Some(base_url) = base_url {
        cfg.service.base_url = base_url;
    }
    Ok(cfg)
}
