use reqwest::multipart;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::error::TransportError;
use crate::models::{
    Material, MaterialDraft, OrderDetail, OrderId, OrderReceipt, OrderRequest, PricingConfig,
    QuoteRequest, QuoteResult, UploadReceipt,
};

/// Typed HTTP client for the print service API.
///
/// Every method is a single request/response exchange with no retry and no
/// local state. The configured timeout is applied per request, so a hung
/// call can never hold a caller's single-flight guard forever.
pub struct PrintServiceClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Error body shape used by the service for non-2xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl PrintServiceClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Build on an existing [`reqwest::Client`], sharing its connection pool.
    pub fn with_client(client: reqwest::Client, config: &ServiceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the sellable material catalog.
    ///
    /// Sends a `GET /api/materials` request.
    pub async fn list_materials(&self) -> Result<Vec<Material>, TransportError> {
        let response = self
            .client
            .get(format!("{}/api/materials", self.base_url))
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Upload a model file for later quoting.
    ///
    /// Sends a `POST /api/upload` multipart request carrying the file under
    /// the `file` field. Returns the assigned model id and the geometry the
    /// service measured.
    pub async fn upload_model(
        &self,
        file_bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<UploadReceipt, TransportError> {
        let part = multipart::Part::bytes(file_bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Price a model against a material and quantity.
    ///
    /// Sends a `POST /api/quote` request with the validated payload.
    pub async fn request_quote(
        &self,
        request: &QuoteRequest,
    ) -> Result<QuoteResult, TransportError> {
        let response = self
            .client
            .post(format!("{}/api/quote", self.base_url))
            .json(request)
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the active pricing parameter set.
    ///
    /// Sends a `GET /api/admin/pricing/config` request.
    pub async fn fetch_pricing_config(&self) -> Result<PricingConfig, TransportError> {
        let response = self
            .client
            .get(format!("{}/api/admin/pricing/config", self.base_url))
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a material through the admin endpoint.
    ///
    /// Sends a `POST /api/admin/material` request and returns the stored
    /// material with its assigned id.
    pub async fn create_material(&self, draft: &MaterialDraft) -> Result<Material, TransportError> {
        let response = self
            .client
            .post(format!("{}/api/admin/material", self.base_url))
            .json(draft)
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Turn a quote into an order.
    ///
    /// Sends a `POST /api/order` request.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, TransportError> {
        let response = self
            .client
            .post(format!("{}/api/order", self.base_url))
            .json(order)
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch an order with its line items.
    ///
    /// Sends a `GET /api/order/{id}` request.
    pub async fn fetch_order(&self, order_id: OrderId) -> Result<OrderDetail, TransportError> {
        let response = self
            .client
            .get(format!("{}/api/order/{}", self.base_url, order_id))
            .timeout(self.timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure captures
    /// the status and body, unwrapping the service's `{"detail": ...}`
    /// error shape when present.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TransportError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
