use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::client::PrintServiceClient;
use crate::error::WorkflowError;
use crate::models::PricingConfig;

/// Message shown when the pricing configuration cannot be fetched. There
/// is deliberately no fallback data here: showing fabricated pricing
/// parameters on an admin surface is worse than showing none.
pub const PRICING_LOAD_ERROR: &str = "Unable to load pricing configuration";

/// What the admin surface currently has to render.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingView {
    NotLoaded,
    Loaded(PricingConfig),
    Failed(String),
}

/// Read-only view of the active pricing parameter set.
///
/// Independent of the quote path: quoting works whether or not this view
/// ever loads. No retry, no caching beyond the current view.
pub struct PricingConfigViewer {
    client: Arc<PrintServiceClient>,
    view: RwLock<PricingView>,
}

impl PricingConfigViewer {
    pub fn new(client: Arc<PrintServiceClient>) -> Self {
        Self {
            client,
            view: RwLock::new(PricingView::NotLoaded),
        }
    }

    /// Fetch the active configuration. On failure the view holds the
    /// static error message and the transport error is returned.
    pub async fn load(&self) -> Result<PricingConfig, WorkflowError> {
        match self.client.fetch_pricing_config().await {
            Ok(config) => {
                info!(
                    version = %config.version,
                    parameters = config.parameters.len(),
                    "Pricing configuration loaded"
                );
                *self.view.write().await = PricingView::Loaded(config.clone());
                Ok(config)
            }
            Err(err) => {
                warn!(error = %err, "Pricing configuration fetch failed");
                *self.view.write().await = PricingView::Failed(PRICING_LOAD_ERROR.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn view(&self) -> PricingView {
        self.view.read().await.clone()
    }
}
