//! Pump curve records with derived characteristic points.

use crate::error::{PumpError, PumpResult};
use fl_core::interp::MonotoneCubic;

/// Static pump curve definition, as written in the catalog source.
#[derive(Debug, Clone, Copy)]
pub struct PumpDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Flow samples, m³/s, strictly increasing from zero.
    pub flows: &'static [f64],
    /// Head samples, m, decreasing in intent.
    pub heads: &'static [f64],
    /// Efficiency samples, fraction in [0, 1].
    pub efficiencies: &'static [f64],
}

/// Best-efficiency point derived from the sampled efficiency curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestEfficiencyPoint {
    pub flow: f64,
    pub head: f64,
    pub efficiency: f64,
}

/// One pump's validated curve data.
///
/// Immutable after construction; derived quantities (BEP, shutoff head,
/// zero-head flow) are computed once here so selection never re-derives them.
#[derive(Debug, Clone)]
pub struct PumpCurveRecord {
    pub id: String,
    pub display_name: String,
    pub flows: Vec<f64>,
    pub heads: Vec<f64>,
    pub efficiencies: Vec<f64>,
    pub bep: BestEfficiencyPoint,
    /// Head at zero flow, m.
    pub shutoff_head: f64,
    /// Flow at which head reaches zero, m³/s (extrapolated if unsampled).
    pub max_flow: f64,
}

impl PumpCurveRecord {
    pub fn from_definition(def: &PumpDefinition) -> PumpResult<Self> {
        Self::new(
            def.id,
            def.display_name,
            def.flows.to_vec(),
            def.heads.to_vec(),
            def.efficiencies.to_vec(),
        )
    }

    pub fn new(
        id: &str,
        display_name: &str,
        flows: Vec<f64>,
        heads: Vec<f64>,
        efficiencies: Vec<f64>,
    ) -> PumpResult<Self> {
        let invalid = |what| PumpError::InvalidCurve {
            pump: id.to_string(),
            what,
        };

        if flows.len() < 2 {
            return Err(invalid("fewer than two curve samples"));
        }
        if heads.len() != flows.len() || efficiencies.len() != flows.len() {
            return Err(invalid("sample arrays differ in length"));
        }
        if flows.windows(2).any(|w| w[1] <= w[0]) {
            return Err(invalid("flow samples not strictly increasing"));
        }
        if flows[0] < 0.0 {
            return Err(invalid("negative flow sample"));
        }
        if flows
            .iter()
            .chain(&heads)
            .chain(&efficiencies)
            .any(|v| !v.is_finite())
        {
            return Err(invalid("non-finite curve sample"));
        }
        if efficiencies.iter().any(|&e| !(0.0..=1.0).contains(&e)) {
            return Err(invalid("efficiency outside [0, 1]"));
        }

        let bep_idx = efficiencies
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let bep = BestEfficiencyPoint {
            flow: flows[bep_idx],
            head: heads[bep_idx],
            efficiency: efficiencies[bep_idx],
        };
        if bep.flow <= 0.0 {
            return Err(invalid("best-efficiency point at zero flow"));
        }

        let shutoff_head = if flows[0] == 0.0 {
            heads[0]
        } else {
            MonotoneCubic::fit(&flows, &heads)
                .map_err(|source| PumpError::Interpolation {
                    pump: id.to_string(),
                    source,
                })?
                .eval(0.0)
        };
        let max_flow = zero_head_flow(&flows, &heads);

        Ok(Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            flows,
            heads,
            efficiencies,
            bep,
            shutoff_head,
            max_flow,
        })
    }

    /// Largest sampled head.
    pub fn max_head(&self) -> f64 {
        self.heads.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sampled flow.
    pub fn min_flow(&self) -> f64 {
        self.flows[0]
    }

    /// Largest sampled flow (not the zero-head flow).
    pub fn max_sampled_flow(&self) -> f64 {
        *self.flows.last().unwrap_or(&0.0)
    }
}

/// Flow at which the sampled head curve crosses zero. If the samples never
/// reach zero head, the last segment is extended; a non-falling last segment
/// pins the result to the last sample.
fn zero_head_flow(flows: &[f64], heads: &[f64]) -> f64 {
    for i in 0..heads.len() - 1 {
        if heads[i] > 0.0 && heads[i + 1] <= 0.0 {
            let t = heads[i] / (heads[i] - heads[i + 1]);
            return flows[i] + t * (flows[i + 1] - flows[i]);
        }
    }

    let n = heads.len();
    let slope = (heads[n - 1] - heads[n - 2]) / (flows[n - 1] - flows[n - 2]);
    if slope < 0.0 {
        flows[n - 1] - heads[n - 1] / slope
    } else {
        flows[n - 1]
    }
}
