//! Wire types for the print service API
//!
//! - material: catalog entries and admin creation payloads
//! - quote: upload receipts and quote request/response types
//! - pricing: versioned pricing parameter sets
//! - order: order placement and lookup types

pub mod material;
pub mod order;
pub mod pricing;
pub mod quote;

pub use material::{Material, MaterialDraft, MaterialId};
pub use order::{OrderDetail, OrderId, OrderLine, OrderReceipt, OrderRequest};
pub use pricing::{ParameterValue, PricingConfig};
pub use quote::{ModelId, QuoteId, QuoteRequest, QuoteResult, UploadReceipt, UploadedModel};
