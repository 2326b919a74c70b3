//! Energy and hydraulic grade lines.

use crate::profile::LossProfile;
use crate::types::BoundaryCondition;
use fl_core::units::constants::G0_MPS2;

/// EGL/HGL arrays sampled at the loss-profile positions.
#[derive(Debug, Clone)]
pub struct EnergyProfile {
    /// Distance from inlet, m.
    pub x: Vec<f64>,
    /// Pipe centerline elevation, m.
    pub elevation: Vec<f64>,
    /// Energy grade line, m of head.
    pub egl: Vec<f64>,
    /// Hydraulic grade line, m of head.
    pub hgl: Vec<f64>,
}

/// Compute EGL and HGL along the pipe.
///
/// The velocity head is constant (constant diameter), so the HGL is the EGL
/// shifted down by V²/(2g). Elevation varies linearly between the inlet and
/// outlet; total inlet head is P_in/(ρg) + V²/(2g) + z_in, and each sampled
/// cumulative loss is subtracted from it.
pub fn compute(
    profile: &LossProfile,
    boundary: &BoundaryCondition,
    pipe_length: f64,
    velocity: f64,
    density: f64,
) -> EnergyProfile {
    let velocity_head = velocity * velocity / (2.0 * G0_MPS2);
    let z_in = boundary.z_in.value;
    let z_out = boundary.z_out.value;
    let h_in_total = boundary.p_in.value / (density * G0_MPS2) + velocity_head + z_in;

    let n = profile.points.len();
    let mut x = Vec::with_capacity(n);
    let mut elevation = Vec::with_capacity(n);
    let mut egl = Vec::with_capacity(n);
    let mut hgl = Vec::with_capacity(n);

    for point in &profile.points {
        let line = h_in_total - point.h_total;
        x.push(point.x);
        elevation.push(z_in + (z_out - z_in) * point.x / pipe_length);
        egl.push(line);
        hgl.push(line - velocity_head);
    }

    EnergyProfile {
        x,
        elevation,
        egl,
        hgl,
    }
}
