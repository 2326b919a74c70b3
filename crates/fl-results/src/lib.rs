//! fl-results: serializable analysis records.
//!
//! Flattens an [`fl_hydraulics::AnalysisResult`] into plain-f64 SI snapshot
//! structs with serde derives, for consumption by report-generation and
//! plotting collaborators. The record mirrors the analysis output verbatim;
//! no values are recomputed here.

pub mod types;

pub use types::{
    AnalysisRecord, BoundarySnapshot, EnergyLineSnapshot, FittingSnapshot, FlowSnapshot,
    FrictionSnapshot, LossPointSnapshot, OperatingPointSnapshot, PipeSnapshot, PowerSnapshot,
    SystemCurveSnapshot,
};
