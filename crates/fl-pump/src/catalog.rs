//! Built-in centrifugal pump catalog.
//!
//! Six pumps spanning small-to-large duty. Constructed once at process start
//! via [`PumpCatalog::standard`] and passed into analyses by reference; the
//! records are never mutated afterwards.

use crate::curve::{PumpCurveRecord, PumpDefinition};
use crate::error::PumpResult;

const PUMP_DEFINITIONS: [PumpDefinition; 6] = [
    PumpDefinition {
        id: "CP-32",
        display_name: "CP-32 end-suction centrifugal",
        flows: &[0.0, 0.002, 0.004, 0.006, 0.008, 0.010],
        heads: &[12.0, 11.6, 10.9, 9.8, 8.2, 6.0],
        efficiencies: &[0.0, 0.35, 0.55, 0.65, 0.62, 0.50],
    },
    PumpDefinition {
        id: "CP-50",
        display_name: "CP-50 end-suction centrifugal",
        flows: &[0.0, 0.005, 0.010, 0.015, 0.020, 0.025],
        heads: &[18.0, 17.4, 16.2, 14.4, 11.8, 8.5],
        efficiencies: &[0.0, 0.42, 0.61, 0.72, 0.68, 0.55],
    },
    PumpDefinition {
        id: "CP-65",
        display_name: "CP-65 end-suction centrifugal",
        flows: &[0.0, 0.008, 0.016, 0.024, 0.032, 0.040],
        heads: &[26.0, 25.2, 23.4, 20.5, 16.4, 11.0],
        efficiencies: &[0.0, 0.45, 0.64, 0.75, 0.71, 0.58],
    },
    PumpDefinition {
        id: "CP-80",
        display_name: "CP-80 single-stage centrifugal",
        flows: &[0.0, 0.012, 0.024, 0.036, 0.048, 0.060],
        heads: &[38.0, 36.8, 34.2, 30.0, 24.2, 16.5],
        efficiencies: &[0.0, 0.48, 0.67, 0.78, 0.74, 0.60],
    },
    PumpDefinition {
        id: "CP-100",
        display_name: "CP-100 single-stage centrifugal",
        flows: &[0.0, 0.020, 0.040, 0.060, 0.080, 0.100],
        heads: &[55.0, 53.4, 49.6, 43.5, 35.0, 24.0],
        efficiencies: &[0.0, 0.50, 0.69, 0.80, 0.76, 0.62],
    },
    PumpDefinition {
        id: "CP-125",
        display_name: "CP-125 split-case centrifugal",
        flows: &[0.0, 0.030, 0.060, 0.090, 0.120, 0.150],
        heads: &[75.0, 72.9, 67.8, 59.5, 48.0, 33.0],
        efficiencies: &[0.0, 0.52, 0.70, 0.82, 0.78, 0.64],
    },
];

/// Immutable pump curve collection.
#[derive(Debug, Clone)]
pub struct PumpCatalog {
    pumps: Vec<PumpCurveRecord>,
}

impl PumpCatalog {
    /// The built-in catalog.
    pub fn standard() -> PumpResult<Self> {
        let pumps = PUMP_DEFINITIONS
            .iter()
            .map(PumpCurveRecord::from_definition)
            .collect::<PumpResult<Vec<_>>>()?;
        Ok(Self { pumps })
    }

    /// A catalog from caller-supplied records.
    pub fn from_records(pumps: Vec<PumpCurveRecord>) -> Self {
        Self { pumps }
    }

    pub fn pumps(&self) -> &[PumpCurveRecord] {
        &self.pumps
    }

    pub fn len(&self) -> usize {
        self.pumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pumps.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PumpCurveRecord> {
        self.pumps.iter().find(|p| p.id == id)
    }
}
