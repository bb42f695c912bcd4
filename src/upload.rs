use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::catalog::MaterialCatalog;
use crate::client::PrintServiceClient;
use crate::error::WorkflowError;
use crate::models::{UploadReceipt, UploadedModel};

/// Tracks the most recently uploaded model.
///
/// At most one upload is in flight at a time. An overlapping submit is
/// rejected rather than queued, so a slow upload can never be overwritten
/// by a later one whose model id arrives out of order. A failed or
/// cancelled upload leaves the previously held model untouched.
pub struct UploadSession {
    client: Arc<PrintServiceClient>,
    catalog: Arc<MaterialCatalog>,
    guard: Semaphore,
    current: RwLock<Option<UploadedModel>>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl UploadSession {
    pub fn new(client: Arc<PrintServiceClient>, catalog: Arc<MaterialCatalog>) -> Self {
        Self {
            client,
            catalog,
            guard: Semaphore::new(1),
            current: RwLock::new(None),
            cancel: Mutex::new(None),
        }
    }

    /// Upload a model file and make it the session's current model.
    ///
    /// On success the previous model is replaced wholesale and one catalog
    /// refresh is triggered; the refresh failing does not undo the upload.
    pub async fn submit(
        &self,
        file_bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<UploadReceipt, WorkflowError> {
        let _permit = self
            .guard
            .try_acquire()
            .map_err(|_| WorkflowError::ConcurrentOperation { operation: "upload" })?;

        let token = CancellationToken::new();
        *self.cancel.lock().await = Some(token.clone());

        let result = tokio::select! {
            result = self.client.upload_model(file_bytes, file_name) => {
                result.map_err(WorkflowError::from)
            }
            _ = token.cancelled() => Err(WorkflowError::Cancelled),
        };
        *self.cancel.lock().await = None;

        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(file_name, error = %err, "Model upload failed, session unchanged");
                return Err(err);
            }
        };

        info!(
            model_id = receipt.model_id,
            file_name,
            weight_g = receipt.weight_g,
            "Model uploaded"
        );
        *self.current.write().await = Some(UploadedModel {
            model_id: receipt.model_id,
            display_name: file_name.to_string(),
        });

        // The service may change size-dependent availability after seeing
        // the model, so give the catalog one chance to pick that up.
        self.catalog.refresh().await;

        Ok(receipt)
    }

    /// The model the session currently holds, if any.
    pub async fn current(&self) -> Option<UploadedModel> {
        self.current.read().await.clone()
    }

    /// True while an upload is outstanding.
    pub fn is_uploading(&self) -> bool {
        self.guard.available_permits() == 0
    }

    /// Cancel the in-flight upload, if any. The held model and the
    /// single-flight guard are both left in a clean state.
    pub async fn cancel(&self) {
        if let Some(token) = self.cancel.lock().await.take() {
            token.cancel();
        }
    }
}
