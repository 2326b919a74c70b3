//! Input and state types for a single pipe-run analysis.

use crate::error::{HydraulicsError, HydraulicsResult};
use crate::friction::FlowRegime;
use fl_core::units::{Area, Density, DynVisc, Length, Pressure, Temperature, Velocity, VolumeRate};
use fl_core::units::constants::G0_MPS2;
use fl_fluids::FluidPropertyProvider;

/// A straight constant-diameter pipe run.
#[derive(Debug, Clone)]
pub struct PipeSpec {
    /// Inner diameter.
    pub diameter: Length,
    /// Run length.
    pub length: Length,
    /// Absolute wall roughness.
    pub roughness: Length,
}

impl PipeSpec {
    pub fn new(diameter: Length, length: Length, roughness: Length) -> HydraulicsResult<Self> {
        if !(diameter.value > 0.0) {
            return Err(HydraulicsError::Domain {
                what: "pipe diameter must be positive",
            });
        }
        if !(length.value > 0.0) {
            return Err(HydraulicsError::Domain {
                what: "pipe length must be positive",
            });
        }
        if !(roughness.value >= 0.0) {
            return Err(HydraulicsError::Domain {
                what: "pipe roughness cannot be negative",
            });
        }
        Ok(Self {
            diameter,
            length,
            roughness,
        })
    }

    /// Flow cross-section πD²/4.
    pub fn area(&self) -> Area {
        self.diameter * self.diameter * (std::f64::consts::PI / 4.0)
    }

    /// ε/D.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness.value / self.diameter.value
    }
}

/// A fitting at a position along the pipe run.
///
/// Order (by position) matters for profile construction; fittings may share
/// a position, each contributing its own discrete drop.
#[derive(Debug, Clone)]
pub struct Fitting {
    pub code: String,
    pub display_name: String,
    /// Minor-loss coefficient.
    pub k: f64,
    /// Distance from the pipe inlet.
    pub position: Length,
}

impl Fitting {
    pub fn new(code: &str, display_name: &str, k: f64, position: Length) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            k,
            position,
        }
    }
}

/// Flow and fluid inputs for an analysis.
#[derive(Debug, Clone, Copy)]
pub struct FlowInput {
    /// Volumetric design flow.
    pub q: VolumeRate,
    pub density: Density,
    pub viscosity: DynVisc,
}

impl FlowInput {
    pub fn new(q: VolumeRate, density: Density, viscosity: DynVisc) -> Self {
        Self {
            q,
            density,
            viscosity,
        }
    }

    /// Flow from a measured mean velocity in the given pipe.
    pub fn from_velocity(
        velocity: Velocity,
        pipe: &PipeSpec,
        density: Density,
        viscosity: DynVisc,
    ) -> Self {
        Self {
            q: velocity * pipe.area(),
            density,
            viscosity,
        }
    }

    /// Flow with fluid properties resolved by a provider at a temperature.
    pub fn from_provider(
        q: VolumeRate,
        provider: &dyn FluidPropertyProvider,
        temperature: Temperature,
    ) -> HydraulicsResult<Self> {
        let props = provider.properties(temperature)?;
        Ok(Self {
            q,
            density: props.density,
            viscosity: props.viscosity,
        })
    }
}

/// Inlet/outlet elevations and pressures.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryCondition {
    pub z_in: Length,
    pub z_out: Length,
    pub p_in: Pressure,
    pub p_out: Pressure,
}

impl BoundaryCondition {
    pub fn new(z_in: Length, z_out: Length, p_in: Pressure, p_out: Pressure) -> Self {
        Self {
            z_in,
            z_out,
            p_in,
            p_out,
        }
    }

    /// Static head Δz + ΔP/(ρg) the pump must overcome, m.
    pub fn static_head(&self, density: Density) -> f64 {
        let dz = self.z_out.value - self.z_in.value;
        let dp = self.p_out.value - self.p_in.value;
        dz + dp / (density.value * G0_MPS2)
    }
}

/// Derived flow state echoed in the analysis result.
#[derive(Debug, Clone, Copy)]
pub struct FlowState {
    pub q: VolumeRate,
    pub velocity: Velocity,
    pub density: Density,
    pub viscosity: DynVisc,
    pub reynolds: f64,
    pub relative_roughness: f64,
    pub regime: FlowRegime,
}
