//! Fitting catalog: code → minor-loss coefficient and display name.

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingEntry {
    pub code: &'static str,
    pub display_name: &'static str,
    /// Minor-loss coefficient K, multiplied by velocity head for head loss.
    pub k: f64,
}

impl FittingEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.code.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
    }
}

const FITTINGS: [FittingEntry; 12] = [
    FittingEntry {
        code: "elbow-90",
        display_name: "90° standard elbow",
        k: 0.9,
    },
    FittingEntry {
        code: "elbow-45",
        display_name: "45° standard elbow",
        k: 0.4,
    },
    FittingEntry {
        code: "tee-run",
        display_name: "Tee, flow through run",
        k: 0.6,
    },
    FittingEntry {
        code: "tee-branch",
        display_name: "Tee, flow through branch",
        k: 1.8,
    },
    FittingEntry {
        code: "gate-valve",
        display_name: "Gate valve, fully open",
        k: 0.15,
    },
    FittingEntry {
        code: "globe-valve",
        display_name: "Globe valve, fully open",
        k: 10.0,
    },
    FittingEntry {
        code: "ball-valve",
        display_name: "Ball valve, fully open",
        k: 0.05,
    },
    FittingEntry {
        code: "butterfly-valve",
        display_name: "Butterfly valve, fully open",
        k: 0.9,
    },
    FittingEntry {
        code: "check-valve",
        display_name: "Swing check valve",
        k: 2.5,
    },
    FittingEntry {
        code: "strainer",
        display_name: "Y-strainer, clean",
        k: 1.8,
    },
    FittingEntry {
        code: "entrance",
        display_name: "Sharp-edged entrance",
        k: 0.5,
    },
    FittingEntry {
        code: "exit",
        display_name: "Pipe exit",
        k: 1.0,
    },
];

pub fn fittings() -> &'static [FittingEntry] {
    &FITTINGS
}

/// Resolve a fitting code.
pub fn fitting(code: &str) -> CatalogResult<&'static FittingEntry> {
    FITTINGS
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code.trim()))
        .ok_or_else(|| CatalogError::InvalidCode {
            kind: "fitting",
            code: code.to_string(),
        })
}
