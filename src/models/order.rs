use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::material::MaterialId;
use super::quote::QuoteId;

/// Identifier of a placed order.
pub type OrderId = u64;

/// Payload to turn an accepted quote into an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Quote to convert, must still reference a known quote
    pub quote_id: QuoteId,
    /// Free-form shipping address
    pub shipping_address: String,
}

/// Order placement response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Identifier of the created order
    pub order_id: OrderId,
    /// Initial order status, e.g. "processing"
    pub status: String,
    /// Total charged for the order
    pub total_price: f64,
}

/// One quoted line inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Quote this line was created from
    pub quote_id: QuoteId,
    /// Material the line prints in
    pub material_id: MaterialId,
    /// Number of copies
    pub quantity: u32,
    /// Line status
    pub status: String,
    /// Estimated production lead time in days
    pub lead_time_days: f64,
}

/// Full order view as returned by the order lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Order identifier
    pub order_id: OrderId,
    /// Current order status
    pub status: String,
    /// Total charged for the order
    pub total_price: f64,
    /// Carrier tracking code once the order ships
    pub tracking_code: Option<String>,
    /// When the order was placed; the service reports naive timestamps
    pub created_at: NaiveDateTime,
    /// Quoted lines belonging to this order
    pub items: Vec<OrderLine>,
}
