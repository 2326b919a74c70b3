//! Liquid water properties by table lookup.

use crate::error::{FluidError, FluidResult};
use crate::{FluidPropertyProvider, FluidProperties};
use fl_core::interp::{self, Extrapolate};
use fl_core::units::{Temperature, kgpm3, pas};
use uom::si::thermodynamic_temperature::degree_celsius;

/// (T °C, density kg/m³, dynamic viscosity mPa·s) at atmospheric pressure.
const WATER_TABLE: [(f64, f64, f64); 21] = [
    (0.0, 999.84, 1.7914),
    (5.0, 999.97, 1.5188),
    (10.0, 999.70, 1.3069),
    (15.0, 999.10, 1.1382),
    (20.0, 998.21, 1.0016),
    (25.0, 997.05, 0.8900),
    (30.0, 995.65, 0.7972),
    (35.0, 994.03, 0.7191),
    (40.0, 992.22, 0.6527),
    (45.0, 990.21, 0.5958),
    (50.0, 988.04, 0.5465),
    (55.0, 985.69, 0.5036),
    (60.0, 983.20, 0.4660),
    (65.0, 980.55, 0.4329),
    (70.0, 977.76, 0.4035),
    (75.0, 974.84, 0.3774),
    (80.0, 971.79, 0.3540),
    (85.0, 968.61, 0.3330),
    (90.0, 965.31, 0.3142),
    (95.0, 961.89, 0.2971),
    (100.0, 958.35, 0.2818),
];

/// Liquid water, 0–100 °C at atmospheric pressure.
///
/// Properties between table rows are linearly interpolated; temperatures
/// outside the table are an error rather than an extrapolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Water;

impl Water {
    pub fn new() -> Self {
        Self
    }

    fn lookup(&self, t_c: f64) -> FluidResult<(f64, f64)> {
        let min_c = WATER_TABLE[0].0;
        let max_c = WATER_TABLE[WATER_TABLE.len() - 1].0;
        if !t_c.is_finite() || t_c < min_c || t_c > max_c {
            return Err(FluidError::OutOfRange {
                value_c: t_c,
                min_c,
                max_c,
            });
        }

        let ts: Vec<f64> = WATER_TABLE.iter().map(|r| r.0).collect();
        let rhos: Vec<f64> = WATER_TABLE.iter().map(|r| r.1).collect();
        let mus: Vec<f64> = WATER_TABLE.iter().map(|r| r.2).collect();

        let rho = interp::linear(&ts, &rhos, t_c, Extrapolate::Clamp)
            .map_err(|_| FluidError::NonPhysical { what: "water table" })?;
        let mu_mpas = interp::linear(&ts, &mus, t_c, Extrapolate::Clamp)
            .map_err(|_| FluidError::NonPhysical { what: "water table" })?;

        Ok((rho, mu_mpas * 1.0e-3))
    }
}

impl FluidPropertyProvider for Water {
    fn properties(&self, temperature: Temperature) -> FluidResult<FluidProperties> {
        let t_c = temperature.get::<degree_celsius>();
        let (rho, mu) = self.lookup(t_c)?;
        Ok(FluidProperties {
            density: kgpm3(rho),
            viscosity: pas(mu),
        })
    }
}
