//! fl-fluids: fluid property providers for hydraulic analysis.
//!
//! The core needs only two transport properties at a given temperature:
//! density and dynamic viscosity. Providers implement [`FluidPropertyProvider`]
//! and are passed into the analysis by reference; the built-in [`Water`]
//! provider covers liquid water from 0 to 100 °C by table lookup.

pub mod error;
pub mod water;

pub use error::{FluidError, FluidResult};
pub use water::Water;

use fl_core::units::{Density, DynVisc, Temperature};

/// Transport properties at a single state point.
#[derive(Debug, Clone, Copy)]
pub struct FluidProperties {
    pub density: Density,
    pub viscosity: DynVisc,
}

/// Temperature-dependent property source.
///
/// Implementations are deterministic and read-only; a single instance may be
/// shared across concurrent analyses.
pub trait FluidPropertyProvider: Send + Sync {
    /// Properties at the given temperature.
    fn properties(&self, temperature: Temperature) -> FluidResult<FluidProperties>;
}
