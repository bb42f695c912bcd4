use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pricing parameter - either a bare number or a named sub-mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Flat numeric parameter: {"machine_rate_eur_per_hour": 6.0}
    Number(f64),
    /// Grouped parameters: {"density": {"PLA": 1.24, "PETG": 1.27}}
    Group(BTreeMap<String, f64>),
}

/// The active pricing parameter set and its version metadata.
///
/// Read-only from the workflow's perspective; changing parameters is an
/// admin-side concern handled outside this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Version label of this parameter set
    pub version: String,
    /// When this version became the active one; the service reports
    /// naive timestamps
    pub effective_from: NaiveDateTime,
    /// Parameter name to value
    pub parameters: BTreeMap<String, ParameterValue>,
    /// Who activated this version
    pub created_by: String,
}

impl PricingConfig {
    /// Parameters that are plain numbers, for flat table rendering.
    pub fn scalar_parameters(&self) -> impl Iterator<Item = (&str, f64)> {
        self.parameters
            .iter()
            .filter_map(|(name, value)| match value {
                ParameterValue::Number(n) => Some((name.as_str(), *n)),
                ParameterValue::Group(_) => None,
            })
    }

    /// Parameters that are named sub-mappings, e.g. per-family densities.
    pub fn grouped_parameters(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.parameters
            .iter()
            .filter_map(|(name, value)| match value {
                ParameterValue::Group(group) => Some((name.as_str(), group)),
                ParameterValue::Number(_) => None,
            })
    }
}
