use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::material::MaterialId;

/// Identifier the service assigns to an uploaded model file.
pub type ModelId = u64;

/// Identifier of a priced quote.
pub type QuoteId = u64;

/// Quote request payload assembled after local validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Model to price, from a prior upload
    pub model_id: ModelId,
    /// Selected catalog material
    pub material_id: MaterialId,
    /// Number of copies, at least 1
    pub quantity: u32,
    /// Post-processing minutes per item, zero for none
    pub post_processing_minutes: u32,
}

/// Upload endpoint response: the assigned model id plus the geometry
/// the service measured on the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Identifier to reference the model in later quote requests
    pub model_id: ModelId,
    /// Server-side name of the stored file
    pub filename: String,
    /// Model volume in cubic millimeters
    pub volume_mm3: f64,
    /// Surface area in square millimeters
    pub surface_mm2: f64,
    /// Estimated print weight in grams
    pub weight_g: f64,
}

/// The model an upload session currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedModel {
    pub model_id: ModelId,
    /// Name of the file as the user picked it, not the server-side path.
    pub display_name: String,
}

/// A priced, versioned quote. Immutable once received; superseded
/// wholesale by the next successful quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Identifier to reference this quote when ordering
    pub quote_id: QuoteId,
    /// Price of a single item
    pub unit_price: f64,
    /// Total for the requested quantity
    pub total: f64,
    /// Estimated production lead time in days
    pub lead_time_days: f64,
    /// Cost component name to amount, entry order carries no meaning
    pub breakdown: BTreeMap<String, f64>,
    /// Version of the pricing configuration that produced this quote
    pub config_version: String,
}

impl QuoteResult {
    /// Sum of the breakdown components, excluding the "total" entry some
    /// service versions echo into the breakdown.
    pub fn breakdown_sum(&self) -> f64 {
        self.breakdown
            .iter()
            .filter(|(name, _)| name.as_str() != "total")
            .map(|(_, amount)| amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_wire_format() {
        let request = QuoteRequest {
            model_id: 42,
            material_id: 1,
            quantity: 3,
            post_processing_minutes: 15,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model_id"], 42);
        assert_eq!(json["material_id"], 1);
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["post_processing_minutes"], 15);
    }

    #[test]
    fn test_quote_result_parses_service_response() {
        let json = r#"{
            "quote_id": 7,
            "unit_price": 12.4,
            "total": 37.2,
            "lead_time_days": 2,
            "breakdown": {"material": 4.1, "machine": 18.6, "setup": 4.0},
            "config_version": "1.0.0"
        }"#;
        let quote: QuoteResult = serde_json::from_str(json).unwrap();
        assert_eq!(quote.quote_id, 7);
        assert_eq!(quote.lead_time_days, 2.0);
        assert_eq!(quote.breakdown.len(), 3);
        assert_eq!(quote.config_version, "1.0.0");
    }

    #[test]
    fn test_breakdown_sum_skips_echoed_total() {
        let json = r#"{
            "quote_id": 1,
            "unit_price": 10.0,
            "total": 30.0,
            "lead_time_days": 2,
            "breakdown": {"material": 12.0, "machine": 18.0, "total": 30.0},
            "config_version": "1.0.0"
        }"#;
        let quote: QuoteResult = serde_json::from_str(json).unwrap();
        assert!((quote.breakdown_sum() - 30.0).abs() < 1e-9);
    }
}
