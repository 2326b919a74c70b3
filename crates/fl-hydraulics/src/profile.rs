//! Distributed head-loss profile along the pipe.

use crate::error::{HydraulicsError, HydraulicsResult};
use crate::types::Fitting;

/// One sample of the cumulative loss curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the inlet, m.
    pub x: f64,
    /// Cumulative friction head loss, m.
    pub h_friction: f64,
    /// Cumulative minor head loss, m.
    pub h_minor: f64,
    /// Cumulative total head loss, m.
    pub h_total: f64,
}

impl ProfilePoint {
    fn new(x: f64, h_friction: f64, h_minor: f64) -> Self {
        Self {
            x,
            h_friction,
            h_minor,
            h_total: h_friction + h_minor,
        }
    }
}

/// Cumulative friction/minor/total head loss sampled from inlet to outlet.
///
/// Positions are non-decreasing; each fitting contributes a pre/post sample
/// pair at the same x, encoding its physically instantaneous drop.
#[derive(Debug, Clone)]
pub struct LossProfile {
    pub points: Vec<ProfilePoint>,
}

impl LossProfile {
    /// The outlet sample.
    pub fn final_point(&self) -> &ProfilePoint {
        self.points
            .last()
            .expect("profile always has inlet and outlet samples")
    }
}

/// Build the loss profile for a pipe run.
///
/// Friction loss accrues linearly with distance (uniform gradient over a
/// constant-diameter pipe); each fitting adds its K·V²/(2g) as a discrete
/// jump at its position. Fittings are processed in position order; ones that
/// share a position each contribute their own jump.
pub fn build(
    pipe_length: f64,
    h_friction_total: f64,
    velocity_head: f64,
    fittings: &[Fitting],
) -> HydraulicsResult<LossProfile> {
    let mut order: Vec<usize> = (0..fittings.len()).collect();
    order.sort_by(|&a, &b| {
        fittings[a]
            .position
            .value
            .total_cmp(&fittings[b].position.value)
    });

    let mut points = Vec::with_capacity(2 * fittings.len() + 2);
    points.push(ProfilePoint::new(0.0, 0.0, 0.0));

    let mut h_minor_cum = 0.0;
    for &idx in &order {
        let fitting = &fittings[idx];
        let x = fitting.position.value;
        if !(0.0..=pipe_length).contains(&x) {
            return Err(HydraulicsError::Domain {
                what: "fitting position outside pipe run",
            });
        }
        if !(fitting.k >= 0.0) {
            return Err(HydraulicsError::Domain {
                what: "fitting loss coefficient cannot be negative",
            });
        }

        let h_friction = h_friction_total * x / pipe_length;
        points.push(ProfilePoint::new(x, h_friction, h_minor_cum));
        h_minor_cum += fitting.k * velocity_head;
        points.push(ProfilePoint::new(x, h_friction, h_minor_cum));
    }

    points.push(ProfilePoint::new(pipe_length, h_friction_total, h_minor_cum));

    Ok(LossProfile { points })
}
