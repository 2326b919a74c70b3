//! fl-core: stable foundation for flowline.
//!
//! Contains:
//! - units (uom SI types + constructors + boundary conversions)
//! - numeric (Real + tolerances + float helpers)
//! - interp (1-D linear and monotone-cubic interpolation)
//! - error (shared error types)

pub mod error;
pub mod interp;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FlError, FlResult};
pub use numeric::*;
pub use units::*;
