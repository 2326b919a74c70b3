//! Analysis orchestration: from pipe/fitting/flow/boundary inputs to a
//! complete result record.

use crate::energy::{self, EnergyProfile};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::friction::{self, FrictionSolution};
use crate::profile::{self, LossProfile};
use crate::types::{BoundaryCondition, Fitting, FlowInput, FlowState, PipeSpec};
use fl_core::units::constants::G0_MPS2;
use fl_core::units::{Power, Pressure, pa, watt};
use fl_pump::{OperatingPoint, PumpCatalog, Selection, SystemCurve, select};

/// Motor sizing margin over shaft power.
pub const MOTOR_MARGIN: f64 = 1.15;
/// Efficiency assumed when the reported operating efficiency is effectively
/// zero (at or below the selector's clamp floor).
pub const DEFAULT_EFFICIENCY: f64 = 0.70;
const EFFICIENCY_FLOOR: f64 = 0.01;

/// Hydraulic, shaft, and motor power for the duty point.
#[derive(Debug, Clone, Copy)]
pub struct PowerFigures {
    pub hydraulic: Power,
    pub shaft: Power,
    pub motor: Power,
}

/// The complete outcome of one analysis run: echoed inputs, derived flow
/// state, losses, system curve, selected pump, power, and the spatial
/// loss/energy profiles. Consumed unchanged by report and plot collaborators.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub pipe: PipeSpec,
    pub fittings: Vec<Fitting>,
    pub boundary: BoundaryCondition,
    pub flow: FlowState,
    pub friction: FrictionSolution,
    /// Major (friction) head loss, m.
    pub h_friction: f64,
    /// Minor (fittings) head loss, m.
    pub h_minor: f64,
    /// Total head loss, m.
    pub h_total: f64,
    pub dp_friction: Pressure,
    pub dp_minor: Pressure,
    pub dp_total: Pressure,
    /// Sum of fitting loss coefficients.
    pub k_total: f64,
    /// Required pump head from the extended Bernoulli balance, m.
    pub pump_head_required: f64,
    pub system_curve: SystemCurve,
    pub operating_point: OperatingPoint,
    /// Full per-candidate selection report.
    pub selection: Selection,
    pub power: PowerFigures,
    pub loss_profile: LossProfile,
    pub energy_profile: EnergyProfile,
}

/// Run a full analysis against the given pump catalog.
///
/// Pure and deterministic: identical inputs produce identical results. The
/// catalog is read-only and may be shared across concurrent calls.
///
/// # Errors
/// Fails on precondition violations (non-positive flow, diameter, or length,
/// out-of-range fitting positions) and on an empty pump catalog. Friction
/// non-convergence and fallback pump selection are reported in the result,
/// not as errors.
pub fn analyze(
    catalog: &PumpCatalog,
    pipe: &PipeSpec,
    fittings: &[Fitting],
    flow: &FlowInput,
    boundary: &BoundaryCondition,
) -> HydraulicsResult<AnalysisResult> {
    let q = flow.q.value;
    let rho = flow.density.value;
    let mu = flow.viscosity.value;

    if !(q > 0.0) {
        return Err(HydraulicsError::Domain {
            what: "design flow must be positive",
        });
    }
    if !(pipe.diameter.value > 0.0) || !(pipe.length.value > 0.0) {
        return Err(HydraulicsError::Domain {
            what: "pipe dimensions must be positive",
        });
    }
    if !(rho > 0.0) || !(mu > 0.0) {
        return Err(HydraulicsError::Domain {
            what: "fluid properties must be positive",
        });
    }

    let diameter = pipe.diameter.value;
    let length = pipe.length.value;

    // Flow state.
    let area = pipe.area().value;
    let velocity = q / area;
    let reynolds = rho * velocity * diameter / mu;
    let relative_roughness = pipe.relative_roughness();
    let velocity_head = velocity * velocity / (2.0 * G0_MPS2);

    // Darcy friction factor.
    let friction_solution = friction::solve(reynolds, relative_roughness)?;

    // Major loss (Darcy-Weisbach).
    let h_friction =
        friction_solution.factor * (length / diameter) * velocity_head;
    let dp_friction = rho * G0_MPS2 * h_friction;

    // Minor losses.
    let k_total: f64 = fittings.iter().map(|f| f.k).sum();
    let h_minor = k_total * velocity_head;
    let dp_minor = rho * G0_MPS2 * h_minor;

    let h_total = h_friction + h_minor;
    let dp_total = dp_friction + dp_minor;

    // Spatial loss profile.
    let loss_profile = profile::build(length, h_friction, velocity_head, fittings)?;

    // Extended Bernoulli, inlet to outlet.
    let h_static = boundary.static_head(flow.density);
    let pump_head_required = h_static + h_total;

    // System curve around the duty point.
    let k_sys = h_total / (q * q);
    let system_curve = SystemCurve::sample(h_static, k_sys, q)?;

    // Pump selection.
    let selection = select(catalog, &system_curve, pump_head_required, q)?;
    let operating_point = selection.operating_point.clone();

    // Power. An operating efficiency at the clamp floor is treated as
    // unreported; the conventional 0.70 stands in.
    let hydraulic = rho * G0_MPS2 * q * pump_head_required;
    let eta = if operating_point.efficiency > EFFICIENCY_FLOOR {
        operating_point.efficiency
    } else {
        DEFAULT_EFFICIENCY
    };
    let shaft = hydraulic / eta;
    let motor = MOTOR_MARGIN * shaft;

    // Grade lines.
    let energy_profile = energy::compute(&loss_profile, boundary, length, velocity, rho);

    let flow_state = FlowState {
        q: flow.q,
        velocity: fl_core::units::mps(velocity),
        density: flow.density,
        viscosity: flow.viscosity,
        reynolds,
        relative_roughness,
        regime: friction_solution.regime,
    };

    Ok(AnalysisResult {
        pipe: pipe.clone(),
        fittings: fittings.to_vec(),
        boundary: *boundary,
        flow: flow_state,
        friction: friction_solution,
        h_friction,
        h_minor,
        h_total,
        dp_friction: pa(dp_friction),
        dp_minor: pa(dp_minor),
        dp_total: pa(dp_total),
        k_total,
        pump_head_required,
        system_curve,
        operating_point,
        selection,
        power: PowerFigures {
            hydraulic: watt(hydraulic),
            shaft: watt(shaft),
            motor: watt(motor),
        },
        loss_profile,
        energy_profile,
    })
}
