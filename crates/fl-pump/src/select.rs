//! Operating-point selection against a system curve.

use crate::catalog::PumpCatalog;
use crate::curve::PumpCurveRecord;
use crate::error::{PumpError, PumpResult};
use crate::system::SystemCurve;
use fl_core::interp::{self, Extrapolate, MonotoneCubic};
use fl_core::numeric::clamp;
use tracing::warn;

/// Points in the common evaluation grid per candidate.
pub const EVAL_GRID_POINTS: usize = 500;

/// Candidates whose maximum head falls below this fraction of the required
/// head cannot plausibly serve the duty point.
const HEAD_SCREEN_FACTOR: f64 = 0.9;
/// Candidates whose minimum flow exceeds this multiple of the design flow
/// cannot plausibly serve the duty point.
const FLOW_SCREEN_FACTOR: f64 = 1.5;
/// Accepted operating points may undershoot the required head by 5%.
const ACCEPT_HEAD_FACTOR: f64 = 0.95;
const FALLBACK_HEAD_FACTOR: f64 = 1.1;
const FALLBACK_EFFICIENCY: f64 = 0.70;
const MIN_EFFICIENCY: f64 = 0.01;
const MAX_EFFICIENCY: f64 = 1.0;

/// A selected pump with its operating point on the system curve.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPoint {
    pub pump_id: String,
    pub pump_name: String,
    /// Flow at the intersection, m³/s.
    pub flow: f64,
    /// Head at the intersection, m.
    pub head: f64,
    /// Pump efficiency at the intersection, clamped to [0.01, 1.0].
    pub efficiency: f64,
    /// True when no candidate passed the screen and the approximate
    /// highest-shutoff fallback was substituted.
    pub fallback: bool,
}

/// Why a candidate never reached evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenReason {
    /// Maximum head below 0.9 × required head.
    InsufficientHead,
    /// Minimum flow above 1.5 × design flow.
    FlowRangeMismatch,
}

/// Outcome per catalog entry. Screened-out and numerically-failed candidates
/// are reported distinctly rather than silently skipped.
#[derive(Debug, Clone)]
pub enum CandidateOutcome {
    Scored {
        flow: f64,
        head: f64,
        efficiency: f64,
        score: f64,
        accepted: bool,
    },
    ScreenedOut(ScreenReason),
    Failed(PumpError),
}

#[derive(Debug, Clone)]
pub struct CandidateReport {
    pub pump_id: String,
    pub outcome: CandidateOutcome,
}

/// Selection result: the winning operating point plus the full per-candidate
/// report for diagnosability.
#[derive(Debug, Clone)]
pub struct Selection {
    pub operating_point: OperatingPoint,
    pub candidates: Vec<CandidateReport>,
}

struct ScoredCandidate {
    flow: f64,
    head: f64,
    efficiency: f64,
    score: f64,
    accepted: bool,
}

struct BestPick {
    pump_idx: usize,
    score: f64,
    flow: f64,
    head: f64,
    efficiency: f64,
}

/// Find the best-matching pump for the given system curve and duty point.
///
/// Every catalog entry is screened, evaluated on a common grid, and scored;
/// the accepted candidate with the lowest score wins. When nothing is
/// accepted the highest-shutoff-head pump is returned with an approximate
/// operating point (Q = design flow, H = 1.1 × required head, η = 0.70) and
/// a warning, so the selector always terminates with a usable result.
///
/// The only error is an empty catalog. Callers guarantee `q_design > 0`.
pub fn select(
    catalog: &PumpCatalog,
    system: &SystemCurve,
    h_required: f64,
    q_design: f64,
) -> PumpResult<Selection> {
    if catalog.is_empty() {
        return Err(PumpError::EmptyCatalog);
    }

    let mut candidates = Vec::with_capacity(catalog.len());
    let mut best: Option<BestPick> = None;

    for (pump_idx, pump) in catalog.pumps().iter().enumerate() {
        let outcome = if pump.max_head() < HEAD_SCREEN_FACTOR * h_required {
            CandidateOutcome::ScreenedOut(ScreenReason::InsufficientHead)
        } else if pump.min_flow() > FLOW_SCREEN_FACTOR * q_design {
            CandidateOutcome::ScreenedOut(ScreenReason::FlowRangeMismatch)
        } else {
            match evaluate(pump, system, h_required, q_design) {
                Ok(c) => {
                    let better = c.accepted
                        && best.as_ref().is_none_or(|b| c.score < b.score);
                    if better {
                        best = Some(BestPick {
                            pump_idx,
                            score: c.score,
                            flow: c.flow,
                            head: c.head,
                            efficiency: c.efficiency,
                        });
                    }
                    CandidateOutcome::Scored {
                        flow: c.flow,
                        head: c.head,
                        efficiency: c.efficiency,
                        score: c.score,
                        accepted: c.accepted,
                    }
                }
                Err(e) => CandidateOutcome::Failed(e),
            }
        };
        candidates.push(CandidateReport {
            pump_id: pump.id.clone(),
            outcome,
        });
    }

    let operating_point = match best {
        Some(b) => {
            let pump = &catalog.pumps()[b.pump_idx];
            OperatingPoint {
                pump_id: pump.id.clone(),
                pump_name: pump.display_name.clone(),
                flow: b.flow,
                head: b.head,
                efficiency: b.efficiency,
                fallback: false,
            }
        }
        None => fallback_point(catalog, h_required, q_design),
    };

    Ok(Selection {
        operating_point,
        candidates,
    })
}

/// Intersect one pump's head curve with the system curve on a common grid
/// and score the result.
fn evaluate(
    pump: &PumpCurveRecord,
    system: &SystemCurve,
    h_required: f64,
    q_design: f64,
) -> PumpResult<ScoredCandidate> {
    let q_lo = pump.min_flow().max(system.min_flow());
    let q_hi = pump.max_sampled_flow().min(system.max_flow());
    if q_hi <= q_lo {
        return Err(PumpError::NoOverlap {
            pump: pump.id.clone(),
        });
    }

    let interp_err = |source| PumpError::Interpolation {
        pump: pump.id.clone(),
        source,
    };
    let head_curve = MonotoneCubic::fit(&pump.flows, &pump.heads).map_err(&interp_err)?;
    let eff_curve = MonotoneCubic::fit(&pump.flows, &pump.efficiencies).map_err(&interp_err)?;

    // Discrete intersection: the grid point minimizing |H_pump - H_sys|,
    // not a root-find. Resolution error shrinks as the grid is refined.
    let mut best_q = q_lo;
    let mut best_gap = f64::INFINITY;
    for i in 0..EVAL_GRID_POINTS {
        let q = q_lo + (q_hi - q_lo) * (i as f64) / ((EVAL_GRID_POINTS - 1) as f64);
        let h_pump = head_curve.eval(q);
        let h_sys = interp::linear(&system.flows, &system.heads, q, Extrapolate::Extend)
            .map_err(&interp_err)?;
        let gap = (h_pump - h_sys).abs();
        if gap < best_gap {
            best_gap = gap;
            best_q = q;
        }
    }

    let flow = best_q;
    let head = head_curve.eval(flow);
    let efficiency = clamp(eff_curve.eval(flow), MIN_EFFICIENCY, MAX_EFFICIENCY);

    let h_ref = h_required.abs().max(1e-12);
    let score = 1.0 * (flow - q_design).abs() / q_design
        + 2.0 * (1.0 - efficiency)
        + 0.5 * ((head - h_required) / h_ref).abs()
        + 1.5 * (flow - pump.bep.flow).abs() / pump.bep.flow;

    Ok(ScoredCandidate {
        flow,
        head,
        efficiency,
        score,
        accepted: head >= ACCEPT_HEAD_FACTOR * h_required,
    })
}

/// No candidate accepted: substitute the highest-shutoff-head pump with an
/// approximate operating point.
fn fallback_point(catalog: &PumpCatalog, h_required: f64, q_design: f64) -> OperatingPoint {
    let mut pick = &catalog.pumps()[0];
    for pump in &catalog.pumps()[1..] {
        if pump.shutoff_head > pick.shutoff_head {
            pick = pump;
        }
    }

    warn!(
        pump_id = %pick.id,
        h_required,
        q_design,
        "no suitable pump in catalog; reporting approximate operating point"
    );

    OperatingPoint {
        pump_id: pick.id.clone(),
        pump_name: pick.display_name.clone(),
        flow: q_design,
        head: FALLBACK_HEAD_FACTOR * h_required,
        efficiency: FALLBACK_EFFICIENCY,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_pump_catalog() -> PumpCatalog {
        // "small" fails the head screen for h_required = 15; "right" passes
        // and intersects the system curve above 0.95 × h_required.
        let small = PumpCurveRecord::new(
            "small",
            "Small pump",
            vec![0.0, 0.004, 0.008],
            vec![8.0, 6.5, 4.0],
            vec![0.0, 0.55, 0.45],
        )
        .unwrap();
        let right = PumpCurveRecord::new(
            "right",
            "Right-sized pump",
            vec![0.0, 0.005, 0.010, 0.015, 0.020, 0.025],
            vec![18.0, 17.4, 16.2, 14.4, 11.8, 8.5],
            vec![0.0, 0.42, 0.61, 0.72, 0.68, 0.55],
        )
        .unwrap();
        PumpCatalog::from_records(vec![small, right])
    }

    #[test]
    fn single_surviving_candidate_is_selected() {
        let catalog = two_pump_catalog();
        let h_required = 15.0;
        let q_design = 0.012;
        let k_sys = 5.0 / (q_design * q_design);
        let system = SystemCurve::sample(10.0, k_sys, q_design).unwrap();

        let selection = select(&catalog, &system, h_required, q_design).unwrap();
        let op = &selection.operating_point;

        assert_eq!(op.pump_id, "right");
        assert!(!op.fallback);
        assert!(op.head >= 0.95 * h_required);
        assert!(op.flow > 0.0 && op.flow < 0.025);

        assert!(matches!(
            selection.candidates[0].outcome,
            CandidateOutcome::ScreenedOut(ScreenReason::InsufficientHead)
        ));
        assert!(matches!(
            selection.candidates[1].outcome,
            CandidateOutcome::Scored { accepted: true, .. }
        ));
    }

    #[test]
    fn operating_point_sits_on_both_curves() {
        let catalog = two_pump_catalog();
        let q_design = 0.012;
        let system = SystemCurve::sample(10.0, 5.0 / (q_design * q_design), q_design).unwrap();
        let selection = select(&catalog, &system, 15.0, q_design).unwrap();
        let op = &selection.operating_point;

        // Discrete intersection: curves agree to grid resolution.
        let h_sys = system.head_at(op.flow);
        assert_relative_eq!(op.head, h_sys, max_relative = 0.02);
    }

    #[test]
    fn all_screened_out_takes_fallback_path() {
        let catalog = two_pump_catalog();
        let h_required = 100.0;
        let q_design = 0.012;
        let system = SystemCurve::sample(95.0, 5.0 / (q_design * q_design), q_design).unwrap();

        let selection = select(&catalog, &system, h_required, q_design).unwrap();
        let op = &selection.operating_point;

        assert!(op.fallback);
        // Highest shutoff head wins the fallback.
        assert_eq!(op.pump_id, "right");
        assert_eq!(op.flow, q_design);
        assert_relative_eq!(op.head, 1.1 * h_required, max_relative = 1e-12);
        assert_eq!(op.efficiency, 0.70);
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = two_pump_catalog();
        let q_design = 0.012;
        let system = SystemCurve::sample(10.0, 5.0 / (q_design * q_design), q_design).unwrap();

        let a = select(&catalog, &system, 15.0, q_design).unwrap();
        let b = select(&catalog, &system, 15.0, q_design).unwrap();
        assert_eq!(a.operating_point, b.operating_point);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let catalog = PumpCatalog::from_records(vec![]);
        let system = SystemCurve::sample(10.0, 1000.0, 0.01).unwrap();
        assert!(matches!(
            select(&catalog, &system, 15.0, 0.01),
            Err(PumpError::EmptyCatalog)
        ));
    }

    #[test]
    fn flow_range_mismatch_is_screened() {
        // Pump whose minimum sampled flow is far above the duty point.
        let oversized = PumpCurveRecord::new(
            "huge",
            "Huge pump",
            vec![0.5, 0.6, 0.7],
            vec![40.0, 35.0, 28.0],
            vec![0.5, 0.7, 0.6],
        )
        .unwrap();
        let catalog = PumpCatalog::from_records(vec![oversized]);
        let q_design = 0.01;
        let system = SystemCurve::sample(10.0, 1000.0, q_design).unwrap();

        let selection = select(&catalog, &system, 12.0, q_design).unwrap();
        assert!(matches!(
            selection.candidates[0].outcome,
            CandidateOutcome::ScreenedOut(ScreenReason::FlowRangeMismatch)
        ));
        assert!(selection.operating_point.fallback);
    }
}
