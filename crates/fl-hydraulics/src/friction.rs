//! Flow-regime classification and Darcy friction factor.
//!
//! Laminar flow has the exact closed form f = 64/Re. Turbulent flow solves
//! the implicit Colebrook–White relation by Newton–Raphson seeded with the
//! Swamee–Jain approximation; the transitional band blends the two linearly.

use crate::error::{HydraulicsError, HydraulicsResult};
use fl_core::numeric::clamp;
use tracing::warn;

/// Iteration cap for the Colebrook–White Newton solve.
pub const MAX_ITERATIONS: usize = 20;
/// Absolute convergence tolerance on f between iterates.
pub const TOLERANCE: f64 = 1e-8;
/// Physical bounds for the Darcy friction factor in turbulent flow. Iterates
/// are clamped here after each Newton update. The clamp can mask true
/// non-convergence; the solution's `converged` flag records it separately.
pub const F_MIN: f64 = 0.008;
pub const F_MAX: f64 = 0.10;

const RE_LAMINAR_MAX: f64 = 2300.0;
const RE_TURBULENT_MIN: f64 = 4000.0;

/// Reynolds window inside which advisory diagnostics are worth emitting.
/// Chart-generation sweeps routinely leave it; warnings there are noise.
fn realistic_reynolds(re: f64) -> bool {
    re > 100.0 && re < 1.0e6
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowRegime::Laminar => write!(f, "laminar"),
            FlowRegime::Transitional => write!(f, "transitional"),
            FlowRegime::Turbulent => write!(f, "turbulent"),
        }
    }
}

/// Friction factor with its provenance.
#[derive(Debug, Clone, Copy)]
pub struct FrictionSolution {
    /// Darcy friction factor.
    pub factor: f64,
    pub regime: FlowRegime,
    /// False when the Newton iteration hit its cap; the factor is then the
    /// last (clamped) iterate.
    pub converged: bool,
    /// Newton iterations spent (0 for pure laminar).
    pub iterations: usize,
}

/// Classify the regime and compute the Darcy friction factor.
pub fn solve(reynolds: f64, relative_roughness: f64) -> HydraulicsResult<FrictionSolution> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(HydraulicsError::Domain {
            what: "Reynolds number must be positive",
        });
    }
    if !relative_roughness.is_finite() || relative_roughness < 0.0 {
        return Err(HydraulicsError::Domain {
            what: "relative roughness cannot be negative",
        });
    }

    let solution = if reynolds < RE_LAMINAR_MAX {
        FrictionSolution {
            factor: 64.0 / reynolds,
            regime: FlowRegime::Laminar,
            converged: true,
            iterations: 0,
        }
    } else if reynolds > RE_TURBULENT_MIN {
        let (factor, converged, iterations) = solve_turbulent(reynolds, relative_roughness);
        FrictionSolution {
            factor,
            regime: FlowRegime::Turbulent,
            converged,
            iterations,
        }
    } else {
        // Transitional band: blend the laminar value at Re = 2300 with the
        // turbulent solve at Re = 4000.
        let f_laminar = 64.0 / RE_LAMINAR_MAX;
        let (f_turbulent, converged, iterations) =
            solve_turbulent(RE_TURBULENT_MIN, relative_roughness);
        let weight = (reynolds - RE_LAMINAR_MAX) / (RE_TURBULENT_MIN - RE_LAMINAR_MAX);
        FrictionSolution {
            factor: (1.0 - weight) * f_laminar + weight * f_turbulent,
            regime: FlowRegime::Transitional,
            converged,
            iterations,
        }
    };

    if !solution.converged && realistic_reynolds(reynolds) {
        warn!(
            reynolds,
            relative_roughness,
            factor = solution.factor,
            "Colebrook-White iteration cap reached without convergence"
        );
    }

    // Observational only: an out-of-range factor is reported, never altered.
    if (solution.factor < F_MIN || solution.factor > F_MAX)
        && reynolds < 1.0e7
        && realistic_reynolds(reynolds)
    {
        warn!(
            reynolds,
            factor = solution.factor,
            "friction factor outside expected range [{F_MIN}, {F_MAX}]"
        );
    }

    Ok(solution)
}

/// Colebrook–White residual g(f) = 1/√f + 2·log₁₀(ε/D/3.7 + 2.51/(Re·√f)).
fn colebrook_residual(f: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let s = f.sqrt();
    1.0 / s + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * s)).log10()
}

/// Swamee–Jain closed-form approximation, used as the Newton starting point.
fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let re_term = 5.74 / reynolds.powf(0.9);
    let arg = if relative_roughness == 0.0 {
        re_term
    } else {
        relative_roughness / 3.7 + re_term
    };
    0.25 / arg.log10().powi(2)
}

fn solve_turbulent(reynolds: f64, relative_roughness: f64) -> (f64, bool, usize) {
    let mut f = clamp(swamee_jain(reynolds, relative_roughness), F_MIN, F_MAX);

    for iter in 1..=MAX_ITERATIONS {
        let s = f.sqrt();
        let arg = relative_roughness / 3.7 + 2.51 / (reynolds * s);
        let residual = colebrook_residual(f, reynolds, relative_roughness);
        let derivative = -0.5
            * f.powf(-1.5)
            * (1.0 + (2.0 / std::f64::consts::LN_10) * 2.51 / (reynolds * arg));

        let next = clamp(f - residual / derivative, F_MIN, F_MAX);
        let delta = (next - f).abs();
        f = next;
        if delta < TOLERANCE {
            return (f, true, iter);
        }
    }

    (f, false, MAX_ITERATIONS)
}
