use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::MaterialCatalog;
use crate::client::PrintServiceClient;
use crate::error::{PreconditionError, WorkflowError};
use crate::models::{
    Material, MaterialId, QuoteRequest, QuoteResult, UploadReceipt, UploadedModel,
};
use crate::upload::UploadSession;

/// Observable phase of the quote workflow.
///
/// Input validation runs synchronously before the request is issued, so
/// there is no suspension point in which a separate validating phase could
/// be observed from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotePhase {
    Idle,
    Requesting,
    Quoted,
    Failed(String),
}

/// Snapshot of the workflow state handed to rendering surfaces.
#[derive(Debug, Clone)]
pub struct QuoteState {
    pub phase: QuotePhase,
    /// Last successful quote. Kept for display even after a later failure,
    /// in which case `stale` is set.
    pub quote: Option<QuoteResult>,
    /// True when `quote` predates the failure recorded in `phase`.
    pub stale: bool,
}

/// Drives the upload-to-quote workflow.
///
/// Validates inputs against the upload session and the material catalog,
/// issues the quote request, and folds success or failure back into the
/// user-visible state. Overlapping quote requests are rejected, never
/// queued, so the displayed quote always matches the last submitted
/// inputs.
pub struct QuoteOrchestrator {
    client: Arc<PrintServiceClient>,
    catalog: Arc<MaterialCatalog>,
    session: UploadSession,
    guard: Semaphore,
    state: RwLock<QuoteState>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl QuoteOrchestrator {
    pub fn new(client: Arc<PrintServiceClient>, catalog: Arc<MaterialCatalog>) -> Self {
        let session = UploadSession::new(client.clone(), catalog.clone());
        Self {
            client,
            catalog,
            session,
            guard: Semaphore::new(1),
            state: RwLock::new(QuoteState {
                phase: QuotePhase::Idle,
                quote: None,
                stale: false,
            }),
            cancel: Mutex::new(None),
        }
    }

    /// The upload session feeding this orchestrator.
    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Upload a model file, making it the current model for quoting.
    pub async fn upload_model(
        &self,
        file_bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<UploadReceipt, WorkflowError> {
        self.session.submit(file_bytes, file_name).await
    }

    /// Request a quote for the current model.
    ///
    /// Overlapping calls are rejected up front, then the inputs are
    /// validated locally before any network traffic. A success replaces
    /// the previous quote wholesale, a failure keeps it flagged stale, and
    /// a cancellation reverts the phase to whatever it was before.
    pub async fn request_quote(
        &self,
        material_id: MaterialId,
        quantity: u32,
        post_processing_minutes: u32,
    ) -> Result<QuoteResult, WorkflowError> {
        // Guard first: an overlapping caller gets the wait signal even
        // when its inputs happen to be invalid too.
        let _permit = self.guard.try_acquire().map_err(|_| {
            WorkflowError::ConcurrentOperation {
                operation: "quote request",
            }
        })?;

        let model = self.session.current().await;
        let snapshot = self.catalog.snapshot();
        let request = match validate_request(
            model.as_ref(),
            &snapshot.materials,
            material_id,
            quantity,
            post_processing_minutes,
        ) {
            Ok(request) => request,
            Err(err) => {
                let mut state = self.state.write().await;
                state.stale = state.quote.is_some();
                state.phase = QuotePhase::Failed(err.to_string());
                return Err(err.into());
            }
        };

        let request_id = Uuid::new_v4();
        let prior_phase = {
            let mut state = self.state.write().await;
            let prior = state.phase.clone();
            state.phase = QuotePhase::Requesting;
            prior
        };
        info!(
            %request_id,
            model_id = request.model_id,
            material_id = request.material_id,
            quantity = request.quantity,
            post_processing_minutes = request.post_processing_minutes,
            "Requesting quote"
        );

        let token = CancellationToken::new();
        *self.cancel.lock().await = Some(token.clone());

        let result = tokio::select! {
            result = self.client.request_quote(&request) => {
                result.map_err(WorkflowError::from)
            }
            _ = token.cancelled() => Err(WorkflowError::Cancelled),
        };
        *self.cancel.lock().await = None;

        match result {
            Ok(quote) => {
                info!(
                    %request_id,
                    quote_id = quote.quote_id,
                    total = quote.total,
                    config_version = %quote.config_version,
                    "Quote received"
                );
                let mut state = self.state.write().await;
                state.phase = QuotePhase::Quoted;
                state.quote = Some(quote.clone());
                state.stale = false;
                Ok(quote)
            }
            Err(WorkflowError::Cancelled) => {
                warn!(%request_id, "Quote request cancelled");
                let mut state = self.state.write().await;
                state.phase = prior_phase;
                Err(WorkflowError::Cancelled)
            }
            Err(err) => {
                warn!(%request_id, error = %err, "Quote request failed");
                let mut state = self.state.write().await;
                state.stale = state.quote.is_some();
                state.phase = QuotePhase::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Cancel the in-flight quote request, if any.
    pub async fn cancel(&self) {
        if let Some(token) = self.cancel.lock().await.take() {
            token.cancel();
        }
    }

    pub async fn state(&self) -> QuoteState {
        self.state.read().await.clone()
    }

    /// True while a quote request is outstanding.
    pub fn is_requesting(&self) -> bool {
        self.guard.available_permits() == 0
    }
}

/// Check the workflow preconditions and assemble the wire payload.
/// Violations are reported without any network traffic.
fn validate_request(
    model: Option<&UploadedModel>,
    materials: &[Material],
    material_id: MaterialId,
    quantity: u32,
    post_processing_minutes: u32,
) -> Result<QuoteRequest, PreconditionError> {
    let model = model.ok_or(PreconditionError::NoModelUploaded)?;

    let material = materials
        .iter()
        .find(|material| material.id == material_id)
        .ok_or(PreconditionError::UnknownMaterial(material_id))?;
    if !material.active {
        return Err(PreconditionError::InactiveMaterial(material_id));
    }

    if quantity < 1 {
        return Err(PreconditionError::InvalidQuantity);
    }

    Ok(QuoteRequest {
        model_id: model.model_id,
        material_id,
        quantity,
        post_processing_minutes,
    })
}
