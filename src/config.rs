use serde::{Deserialize, Serialize};

use crate::models::Material;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Connection settings for the print service API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL every endpoint path is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds, applied to every remote call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Catalog behavior, including the offline fallback material
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Material served while the catalog endpoint is unreachable and no
    /// load has succeeded yet. Overridable so deployments can choose
    /// their own degraded-mode default.
    #[serde(default = "default_fallback_material")]
    pub fallback: Material,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback_material(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_fallback_material() -> Material {
    Material {
        id: 1,
        family: "PLA".to_string(),
        brand: "Generic".to_string(),
        color_name: "Natural".to_string(),
        hex: "#FFFFFF".to_string(),
        density: 1.24,
        cost_per_kg: 45.0,
        surcharge: 0.0,
        active: true,
    }
}

/// Load configuration from the optional `printforge` file and
/// `PRINTFORGE`-prefixed environment variables. Missing sources leave
/// the built-in defaults in place.
pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("printforge").required(false))
        .add_source(config::Environment::with_prefix("PRINTFORGE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if !cfg.service.base_url.starts_with("http://") && !cfg.service.base_url.starts_with("https://")
    {
        anyhow::bail!(
            "service.base_url must be an http(s) URL, got '{}'",
            cfg.service.base_url
        );
    }

    if cfg.service.timeout_seconds == 0 {
        anyhow::bail!("service.timeout_seconds must be greater than zero");
    }

    if cfg.catalog.fallback.density <= 0.0 {
        anyhow::bail!("catalog.fallback.density must be positive");
    }

    if cfg.catalog.fallback.cost_per_kg < 0.0 {
        anyhow::bail!("catalog.fallback.cost_per_kg cannot be negative");
    }

    // The fallback is the only selectable material in degraded mode, so an
    // inactive one would make quoting impossible while offline.
    if !cfg.catalog.fallback.active {
        anyhow::bail!("catalog.fallback must be an active material");
    }

    Ok(())
}
