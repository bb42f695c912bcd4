use crate::models::MaterialId;

/// Failure of a single request/response exchange with the print service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request itself failed (connect, timeout, body decode).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl TransportError {
    /// True when the failure was a client-side request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(err) if err.is_timeout())
    }
}

/// Local validation failure raised before any network traffic happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("upload a model and select a material first")]
    NoModelUploaded,

    #[error("material {0} is not in the current catalog")]
    UnknownMaterial(MaterialId),

    #[error("material {0} is not available for sale")]
    InactiveMaterial(MaterialId),

    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// Errors surfaced by the workflow components.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// A single-flight guard rejected an overlapping call.
    #[error("another {operation} is already in flight")]
    ConcurrentOperation { operation: &'static str },

    /// The caller cancelled the in-flight request.
    #[error("operation cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = TransportError::Status {
            status: 422,
            message: "Model or material not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "service returned 422: Model or material not found"
        );
    }

    #[test]
    fn test_precondition_display() {
        assert_eq!(
            PreconditionError::NoModelUploaded.to_string(),
            "upload a model and select a material first"
        );
        assert_eq!(
            PreconditionError::InactiveMaterial(9).to_string(),
            "material 9 is not available for sale"
        );
        assert_eq!(
            PreconditionError::InvalidQuantity.to_string(),
            "quantity must be at least 1"
        );
    }

    #[test]
    fn test_precondition_is_transparent_through_workflow_error() {
        let error = WorkflowError::from(PreconditionError::UnknownMaterial(3));
        assert_eq!(error.to_string(), "material 3 is not in the current catalog");
    }

    #[test]
    fn test_concurrent_operation_display() {
        let error = WorkflowError::ConcurrentOperation {
            operation: "quote request",
        };
        assert_eq!(
            error.to_string(),
            "another quote request is already in flight"
        );
    }
}
