use serde::{Deserialize, Serialize};

/// Catalog identifier assigned by the print service.
pub type MaterialId = u64;

/// A printable filament material as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalog identifier
    pub id: MaterialId,
    /// Polymer family, e.g. "PLA" or "PETG"
    pub family: String,
    /// Manufacturer or product line
    pub brand: String,
    /// Human-readable color name
    pub color_name: String,
    /// Display color as a hex string, e.g. "#FFFFFF"
    pub hex: String,
    /// Density in g/cm3
    pub density: f64,
    /// Material cost per kilogram
    pub cost_per_kg: f64,
    /// Per-print surcharge on top of the material cost, may be zero
    pub surcharge: f64,
    /// Only active materials may be quoted
    pub active: bool,
}

impl Material {
    /// Short "family · color" label used on display surfaces.
    pub fn label(&self) -> String {
        format!("{} · {}", self.family, self.color_name)
    }
}

/// Payload for creating a material through the admin endpoint.
/// The service assigns the id and activation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDraft {
    /// Polymer family, e.g. "PLA"
    pub family: String,
    /// Manufacturer or product line
    pub brand: String,
    /// Human-readable color name
    pub color_name: String,
    /// Display color as a hex string
    pub hex: String,
    /// Density in g/cm3
    pub density: f64,
    /// Material cost per kilogram
    pub cost_per_kg: f64,
    /// Optional per-print surcharge
    #[serde(default)]
    pub surcharge: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_label() {
        let material = Material {
            id: 1,
            family: "PLA".to_string(),
            brand: "Generic".to_string(),
            color_name: "Natural".to_string(),
            hex: "#FFFFFF".to_string(),
            density: 1.24,
            cost_per_kg: 45.0,
            surcharge: 0.0,
            active: true,
        };
        assert_eq!(material.label(), "PLA · Natural");
    }

    #[test]
    fn test_draft_surcharge_defaults_to_zero() {
        let json = r##"{
            "family": "PETG",
            "brand": "Prusament",
            "color_name": "Jet Black",
            "hex": "#111111",
            "density": 1.27,
            "cost_per_kg": 55.0
        }"##;
        let draft: MaterialDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.surcharge, 0.0);
    }
}
