//! Snapshot data types. All values are SI (m, m³/s, Pa, kg/m³, Pa·s, W).

use fl_hydraulics::AnalysisResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeSnapshot {
    pub diameter_m: f64,
    pub length_m: f64,
    pub roughness_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittingSnapshot {
    pub code: String,
    pub display_name: String,
    pub k: f64,
    pub position_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundarySnapshot {
    pub z_in_m: f64,
    pub z_out_m: f64,
    pub p_in_pa: f64,
    pub p_out_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub q_m3_s: f64,
    pub velocity_m_s: f64,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub reynolds: f64,
    pub relative_roughness: f64,
    /// "laminar", "transitional", or "turbulent".
    pub regime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrictionSnapshot {
    pub factor: f64,
    pub converged: bool,
    pub iterations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossPointSnapshot {
    pub x_m: f64,
    pub h_friction_m: f64,
    pub h_minor_m: f64,
    pub h_total_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemCurveSnapshot {
    pub h_static_m: f64,
    pub k_sys: f64,
    pub flows_m3_s: Vec<f64>,
    pub heads_m: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingPointSnapshot {
    pub pump_id: String,
    pub pump_name: String,
    pub flow_m3_s: f64,
    pub head_m: f64,
    pub efficiency: f64,
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerSnapshot {
    pub hydraulic_w: f64,
    pub shaft_w: f64,
    pub motor_w: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyLineSnapshot {
    pub x_m: Vec<f64>,
    pub elevation_m: Vec<f64>,
    pub egl_m: Vec<f64>,
    pub hgl_m: Vec<f64>,
}

/// The full analysis record handed to report and plot collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub pipe: PipeSnapshot,
    pub fittings: Vec<FittingSnapshot>,
    pub boundary: BoundarySnapshot,
    pub flow: FlowSnapshot,
    pub friction: FrictionSnapshot,
    pub h_friction_m: f64,
    pub h_minor_m: f64,
    pub h_total_m: f64,
    pub dp_friction_pa: f64,
    pub dp_minor_pa: f64,
    pub dp_total_pa: f64,
    pub k_total: f64,
    pub pump_head_required_m: f64,
    pub system_curve: SystemCurveSnapshot,
    pub operating_point: OperatingPointSnapshot,
    pub power: PowerSnapshot,
    pub loss_profile: Vec<LossPointSnapshot>,
    pub energy_profile: EnergyLineSnapshot,
}

impl From<&AnalysisResult> for AnalysisRecord {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            pipe: PipeSnapshot {
                diameter_m: result.pipe.diameter.value,
                length_m: result.pipe.length.value,
                roughness_m: result.pipe.roughness.value,
            },
            fittings: result
                .fittings
                .iter()
                .map(|f| FittingSnapshot {
                    code: f.code.clone(),
                    display_name: f.display_name.clone(),
                    k: f.k,
                    position_m: f.position.value,
                })
                .collect(),
            boundary: BoundarySnapshot {
                z_in_m: result.boundary.z_in.value,
                z_out_m: result.boundary.z_out.value,
                p_in_pa: result.boundary.p_in.value,
                p_out_pa: result.boundary.p_out.value,
            },
            flow: FlowSnapshot {
                q_m3_s: result.flow.q.value,
                velocity_m_s: result.flow.velocity.value,
                density_kg_m3: result.flow.density.value,
                viscosity_pa_s: result.flow.viscosity.value,
                reynolds: result.flow.reynolds,
                relative_roughness: result.flow.relative_roughness,
                regime: result.flow.regime.to_string(),
            },
            friction: FrictionSnapshot {
                factor: result.friction.factor,
                converged: result.friction.converged,
                iterations: result.friction.iterations,
            },
            h_friction_m: result.h_friction,
            h_minor_m: result.h_minor,
            h_total_m: result.h_total,
            dp_friction_pa: result.dp_friction.value,
            dp_minor_pa: result.dp_minor.value,
            dp_total_pa: result.dp_total.value,
            k_total: result.k_total,
            pump_head_required_m: result.pump_head_required,
            system_curve: SystemCurveSnapshot {
                h_static_m: result.system_curve.h_static,
                k_sys: result.system_curve.k_sys,
                flows_m3_s: result.system_curve.flows.clone(),
                heads_m: result.system_curve.heads.clone(),
            },
            operating_point: OperatingPointSnapshot {
                pump_id: result.operating_point.pump_id.clone(),
                pump_name: result.operating_point.pump_name.clone(),
                flow_m3_s: result.operating_point.flow,
                head_m: result.operating_point.head,
                efficiency: result.operating_point.efficiency,
                fallback: result.operating_point.fallback,
            },
            power: PowerSnapshot {
                hydraulic_w: result.power.hydraulic.value,
                shaft_w: result.power.shaft.value,
                motor_w: result.power.motor.value,
            },
            loss_profile: result
                .loss_profile
                .points
                .iter()
                .map(|p| LossPointSnapshot {
                    x_m: p.x,
                    h_friction_m: p.h_friction,
                    h_minor_m: p.h_minor,
                    h_total_m: p.h_total,
                })
                .collect(),
            energy_profile: EnergyLineSnapshot {
                x_m: result.energy_profile.x.clone(),
                elevation_m: result.energy_profile.elevation.clone(),
                egl_m: result.energy_profile.egl.clone(),
                hgl_m: result.energy_profile.hgl.clone(),
            },
        }
    }
}
