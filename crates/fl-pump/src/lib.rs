//! fl-pump: pump curves, catalog, and operating-point selection.
//!
//! A [`PumpCurveRecord`] holds one pump's sampled (Q, H, η) curve with its
//! derived best-efficiency point, shutoff head, and zero-head flow. The
//! built-in catalog is constructed once via [`PumpCatalog::standard`] and
//! shared read-only. [`select`] intersects each viable candidate's head curve
//! with a [`SystemCurve`] and scores the result; it always terminates with a
//! usable operating point, falling back to the highest-shutoff-head pump when
//! nothing passes the screen.

pub mod catalog;
pub mod curve;
pub mod error;
pub mod select;
pub mod system;

pub use catalog::PumpCatalog;
pub use curve::{BestEfficiencyPoint, PumpCurveRecord, PumpDefinition};
pub use error::{PumpError, PumpResult};
pub use select::{
    CandidateOutcome, CandidateReport, OperatingPoint, ScreenReason, Selection, select,
};
pub use system::SystemCurve;
