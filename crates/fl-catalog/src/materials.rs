//! Pipe material catalog: code → absolute wall roughness.

use crate::error::{CatalogError, CatalogResult};
use fl_core::units::{Length, m};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    pub code: &'static str,
    pub display_name: &'static str,
    /// Absolute roughness, m.
    pub roughness_m: f64,
}

impl MaterialEntry {
    pub fn roughness(&self) -> Length {
        m(self.roughness_m)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.code.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
    }
}

const MATERIALS: [MaterialEntry; 8] = [
    MaterialEntry {
        code: "pvc",
        display_name: "PVC / plastic",
        roughness_m: 1.5e-6,
    },
    MaterialEntry {
        code: "copper",
        display_name: "Drawn copper tubing",
        roughness_m: 1.5e-6,
    },
    MaterialEntry {
        code: "steel",
        display_name: "Commercial steel",
        roughness_m: 4.6e-5,
    },
    MaterialEntry {
        code: "stainless",
        display_name: "Stainless steel",
        roughness_m: 1.5e-5,
    },
    MaterialEntry {
        code: "galvanized",
        display_name: "Galvanized steel",
        roughness_m: 1.5e-4,
    },
    MaterialEntry {
        code: "cast-iron",
        display_name: "Cast iron",
        roughness_m: 2.6e-4,
    },
    MaterialEntry {
        code: "ductile-iron",
        display_name: "Ductile iron, cement lined",
        roughness_m: 1.2e-4,
    },
    MaterialEntry {
        code: "concrete",
        display_name: "Concrete",
        roughness_m: 1.0e-3,
    },
];

pub fn materials() -> &'static [MaterialEntry] {
    &MATERIALS
}

/// Resolve a material code.
pub fn material(code: &str) -> CatalogResult<&'static MaterialEntry> {
    MATERIALS
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code.trim()))
        .ok_or_else(|| CatalogError::InvalidCode {
            kind: "material",
            code: code.to_string(),
        })
}
