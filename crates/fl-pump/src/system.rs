//! System curve: required head as a function of flow for a fixed piping
//! system.

use crate::error::{PumpError, PumpResult};

/// Sampled system curve H(Q) = h_static + k_sys·Q².
///
/// The static head may be negative (outlet below inlet); the loss coefficient
/// is non-negative for any physical system.
#[derive(Debug, Clone)]
pub struct SystemCurve {
    /// Static head Δz + ΔP/(ρg), m.
    pub h_static: f64,
    /// Loss coefficient h_L/Q_design², m/(m³/s)².
    pub k_sys: f64,
    /// Flow samples, m³/s.
    pub flows: Vec<f64>,
    /// Head samples, m.
    pub heads: Vec<f64>,
}

impl SystemCurve {
    pub const SAMPLE_COUNT: usize = 50;

    /// Sample the curve over [0, 1.5·q_design].
    pub fn sample(h_static: f64, k_sys: f64, q_design: f64) -> PumpResult<Self> {
        if !(q_design > 0.0) {
            return Err(PumpError::InvalidSystemCurve {
                what: "design flow must be positive",
            });
        }
        if !h_static.is_finite() || !k_sys.is_finite() || k_sys < 0.0 {
            return Err(PumpError::InvalidSystemCurve {
                what: "non-finite or negative curve coefficients",
            });
        }

        let q_max = 1.5 * q_design;
        let n = Self::SAMPLE_COUNT;
        let mut flows = Vec::with_capacity(n);
        let mut heads = Vec::with_capacity(n);
        for i in 0..n {
            let q = q_max * (i as f64) / ((n - 1) as f64);
            flows.push(q);
            heads.push(h_static + k_sys * q * q);
        }

        Ok(Self {
            h_static,
            k_sys,
            flows,
            heads,
        })
    }

    /// Analytic head at a flow (the samples are for interpolation consumers).
    pub fn head_at(&self, q: f64) -> f64 {
        self.h_static + self.k_sys * q * q
    }

    pub fn min_flow(&self) -> f64 {
        self.flows[0]
    }

    pub fn max_flow(&self) -> f64 {
        *self.flows.last().unwrap_or(&0.0)
    }
}
