//! 1-D interpolation over sampled curves.
//!
//! Two schemes: piecewise linear, and shape-preserving monotone cubic
//! (Fritsch–Carlson tangents with cubic Hermite segments). The monotone
//! cubic never overshoots the sampled data.

use crate::error::FlError;
use crate::numeric::Real;

/// Endpoint handling for queries outside the sampled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Hold the boundary value.
    Clamp,
    /// Continue the boundary segment's slope.
    Extend,
}

fn check_knots(xs: &[Real], ys: &[Real], what: &'static str) -> Result<(), FlError> {
    if xs.len() != ys.len() {
        return Err(FlError::LengthMismatch {
            what,
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(FlError::InvalidArg { what });
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(FlError::Invariant { what });
    }
    Ok(())
}

/// Index of the segment [xs[i], xs[i+1]] containing x, clamped to the
/// boundary segments for out-of-range queries.
fn segment_of(xs: &[Real], x: Real) -> usize {
    match xs.binary_search_by(|probe| probe.total_cmp(&x)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(0) => 0,
        Err(i) => (i - 1).min(xs.len() - 2),
    }
}

/// Piecewise-linear interpolation of (xs, ys) at x.
///
/// Knots must be strictly increasing. Out-of-range queries follow the
/// requested extrapolation mode.
pub fn linear(xs: &[Real], ys: &[Real], x: Real, extrapolate: Extrapolate) -> Result<Real, FlError> {
    check_knots(xs, ys, "linear interpolation knots")?;

    let n = xs.len();
    if extrapolate == Extrapolate::Clamp {
        if x <= xs[0] {
            return Ok(ys[0]);
        }
        if x >= xs[n - 1] {
            return Ok(ys[n - 1]);
        }
    }

    let i = segment_of(xs, x);
    let t = (x - xs[i]) / (xs[i + 1] - xs[i]);
    Ok(ys[i] + t * (ys[i + 1] - ys[i]))
}

/// Shape-preserving monotone cubic interpolant (PCHIP).
///
/// Tangents are the Fritsch–Carlson weighted harmonic means, zeroed at local
/// extrema, so the interpolant is monotone wherever the data is. Queries
/// outside the knot range extend linearly with the endpoint tangent.
#[derive(Debug, Clone)]
pub struct MonotoneCubic {
    xs: Vec<Real>,
    ys: Vec<Real>,
    tangents: Vec<Real>,
}

impl MonotoneCubic {
    pub fn fit(xs: &[Real], ys: &[Real]) -> Result<Self, FlError> {
        check_knots(xs, ys, "monotone cubic knots")?;

        let n = xs.len();
        let h: Vec<Real> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let d: Vec<Real> = ys
            .windows(2)
            .zip(&h)
            .map(|(w, hi)| (w[1] - w[0]) / hi)
            .collect();

        let mut tangents = vec![0.0; n];
        tangents[0] = endpoint_tangent(h[0], h.get(1).copied(), d[0], d.get(1).copied());
        tangents[n - 1] = endpoint_tangent(
            h[n - 2],
            if n > 2 { Some(h[n - 3]) } else { None },
            d[n - 2],
            if n > 2 { Some(d[n - 3]) } else { None },
        );
        for i in 1..n - 1 {
            if d[i - 1] * d[i] <= 0.0 {
                tangents[i] = 0.0;
            } else {
                let w1 = 2.0 * h[i] + h[i - 1];
                let w2 = h[i] + 2.0 * h[i - 1];
                tangents[i] = (w1 + w2) / (w1 / d[i - 1] + w2 / d[i]);
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            tangents,
        })
    }

    pub fn eval(&self, x: Real) -> Real {
        let n = self.xs.len();
        if x < self.xs[0] {
            return self.ys[0] + self.tangents[0] * (x - self.xs[0]);
        }
        if x > self.xs[n - 1] {
            return self.ys[n - 1] + self.tangents[n - 1] * (x - self.xs[n - 1]);
        }

        let i = segment_of(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * self.ys[i]
            + h10 * h * self.tangents[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.tangents[i + 1]
    }

    pub fn knot_range(&self) -> (Real, Real) {
        (self.xs[0], *self.xs.last().unwrap())
    }
}

/// One-sided three-point tangent estimate at a curve endpoint, limited so the
/// interpolant stays monotone in the boundary segment.
fn endpoint_tangent(h0: Real, h1: Option<Real>, d0: Real, d1: Option<Real>) -> Real {
    let (h1, d1) = match (h1, d1) {
        (Some(h1), Some(d1)) => (h1, d1),
        // Two knots only: the secant is the tangent.
        _ => return d0,
    };

    let mut t = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if t * d0 <= 0.0 {
        t = 0.0;
    } else if d0 * d1 <= 0.0 && t.abs() > 3.0 * d0.abs() {
        t = 3.0 * d0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_exact_at_knots() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [10.0, 20.0, 15.0];
        for (x, y) in xs.iter().zip(&ys) {
            assert_eq!(linear(&xs, &ys, *x, Extrapolate::Clamp).unwrap(), *y);
        }
    }

    #[test]
    fn linear_midpoints_and_extrapolation() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 0.0];
        assert_eq!(linear(&xs, &ys, 0.5, Extrapolate::Clamp).unwrap(), 0.5);
        assert_eq!(linear(&xs, &ys, 1.5, Extrapolate::Clamp).unwrap(), 0.5);
        assert_eq!(linear(&xs, &ys, 3.0, Extrapolate::Clamp).unwrap(), 0.0);
        assert_eq!(linear(&xs, &ys, 3.0, Extrapolate::Extend).unwrap(), -1.0);
        assert_eq!(linear(&xs, &ys, -1.0, Extrapolate::Extend).unwrap(), -1.0);
    }

    #[test]
    fn linear_rejects_bad_knots() {
        assert!(linear(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0], 0.5, Extrapolate::Clamp).is_err());
        assert!(linear(&[0.0, 1.0], &[1.0], 0.5, Extrapolate::Clamp).is_err());
        assert!(linear(&[0.0], &[1.0], 0.5, Extrapolate::Clamp).is_err());
    }

    #[test]
    fn cubic_reproduces_knots() {
        let xs = [0.0, 0.01, 0.02, 0.03];
        let ys = [18.0, 16.2, 14.4, 11.8];
        let interp = MonotoneCubic::fit(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert_relative_eq!(interp.eval(*x), *y, max_relative = 1e-12);
        }
    }

    #[test]
    fn cubic_no_overshoot_between_knots() {
        // Decreasing data: interpolant must stay within each segment's bounds.
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [55.0, 53.4, 49.6, 43.5, 35.0];
        let interp = MonotoneCubic::fit(&xs, &ys).unwrap();
        for i in 0..xs.len() - 1 {
            for k in 1..20 {
                let x = xs[i] + (xs[i + 1] - xs[i]) * (k as f64) / 20.0;
                let y = interp.eval(x);
                assert!(y <= ys[i] + 1e-9 && y >= ys[i + 1] - 1e-9, "overshoot at {x}: {y}");
            }
        }
    }

    #[test]
    fn cubic_extends_linearly_past_endpoints() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [10.0, 8.0, 6.0];
        let interp = MonotoneCubic::fit(&xs, &ys).unwrap();
        // Uniform slope -2 data: endpoint tangents equal the secant.
        assert_relative_eq!(interp.eval(3.0), 4.0, max_relative = 1e-9);
        assert_relative_eq!(interp.eval(-1.0), 12.0, max_relative = 1e-9);
    }

    #[test]
    fn cubic_two_knots_is_a_line() {
        let interp = MonotoneCubic::fit(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert_relative_eq!(interp.eval(1.0), 3.0, max_relative = 1e-12);
    }
}
