use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::PrintServiceClient;
use crate::error::TransportError;
use crate::models::{Material, MaterialId};

/// Where the current material list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// No load has completed yet.
    Unloaded,
    /// Served by the catalog endpoint.
    Remote,
    /// The injected offline fallback; treat prices as provisional.
    Fallback,
}

/// Point-in-time view of the catalog.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub materials: Vec<Material>,
    pub source: CatalogSource,
}

/// Cache of the sellable material list.
///
/// A load atomically replaces the whole list, so readers always see a
/// consistent snapshot and never a partial merge. When the very first load
/// fails, the injected fallback material is served instead so the quoting
/// form stays usable while the service is down. That is the only error
/// this crate absorbs without surfacing it.
pub struct MaterialCatalog {
    client: Arc<PrintServiceClient>,
    fallback: Material,
    state: ArcSwap<CatalogSnapshot>,
}

impl MaterialCatalog {
    /// `fallback` is the single material served in degraded mode. It is
    /// injected here rather than baked in so deployments and tests can
    /// supply their own.
    pub fn new(client: Arc<PrintServiceClient>, fallback: Material) -> Self {
        Self {
            client,
            fallback,
            state: ArcSwap::from_pointee(CatalogSnapshot {
                materials: Vec::new(),
                source: CatalogSource::Unloaded,
            }),
        }
    }

    /// Fetch the material list and replace the cache.
    ///
    /// On failure before any successful load, installs and returns the
    /// fallback material. On failure after a successful load, the previous
    /// cache stays intact and the error is returned.
    pub async fn load(&self) -> Result<Vec<Material>, TransportError> {
        match self.client.list_materials().await {
            Ok(materials) => {
                info!(count = materials.len(), "Material catalog loaded");
                self.state.store(Arc::new(CatalogSnapshot {
                    materials: materials.clone(),
                    source: CatalogSource::Remote,
                }));
                Ok(materials)
            }
            Err(err) if self.state.load().source != CatalogSource::Remote => {
                warn!(
                    error = %err,
                    "Catalog unavailable, serving fallback material"
                );
                let materials = vec![self.fallback.clone()];
                self.state.store(Arc::new(CatalogSnapshot {
                    materials: materials.clone(),
                    source: CatalogSource::Fallback,
                }));
                Ok(materials)
            }
            Err(err) => {
                warn!(error = %err, "Catalog refresh failed, keeping previous list");
                Err(err)
            }
        }
    }

    /// Re-invoke [`load`](Self::load) and swallow any failure. Used after
    /// an upload to pick up availability changes; the workflow proceeds
    /// either way.
    pub async fn refresh(&self) {
        let _ = self.load().await;
    }

    /// The current materials together with their source tag.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.load().as_ref().clone()
    }

    /// Look up a material by id in the current snapshot.
    pub fn find(&self, id: MaterialId) -> Option<Material> {
        self.state
            .load()
            .materials
            .iter()
            .find(|material| material.id == id)
            .cloned()
    }

    /// True while the cache is serving the injected fallback. Callers
    /// should flag prices computed against it as provisional.
    pub fn is_fallback(&self) -> bool {
        self.state.load().source == CatalogSource::Fallback
    }
}
