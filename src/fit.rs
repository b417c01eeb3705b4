//! Fitting a piecewise cubic through time-stamped points.
//!
//! Both axes are fitted independently against time.
//! The second derivatives at the breakpoints are estimated from the neighbouring slopes only,
//! a local approximation of the natural cubic spline which doesn't solve the coupled
//! tridiagonal system. The curve's shape depends on this estimate, so don't replace it.

use crate::curve::{Curve, Segment};
use crate::error::CurveError;
use crate::sample::Sample;

/// Fewest points [`fit`] accepts.
pub const MIN_POINTS: usize = 2;

/// Fit a curve through `points`.
///
/// Time stamps are normalized to `[0, 1]` and must be strictly increasing.
/// The curve passes through every point at its normalized time.
pub fn fit(points: &[Sample]) -> Result<Curve, CurveError> {
    if points.len() < MIN_POINTS {
        return Err(CurveError::InsufficientPoints {
            found: points.len(),
            required: MIN_POINTS,
        });
    }
    let points = normalize_time(points)?;

    let t: Vec<f64> = points.iter().map(|p| p.t).collect();
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();

    let kx = fit_axis(&t, &x);
    let ky = fit_axis(&t, &y);

    Ok(Curve {
        duration: points[points.len() - 1].t,
        points,
        kx,
        ky,
    })
}

/// Re-stamp every point as `(t - t_first) / (t_last - t_first)`.
fn normalize_time(points: &[Sample]) -> Result<Vec<Sample>, CurveError> {
    let t_first = points[0].t;
    let t_last = points[points.len() - 1].t;
    if t_last == t_first {
        return Err(CurveError::DegenerateDuration(t_first));
    }
    if let Some(index) = points
        .windows(2)
        .position(|pair| !(pair[1].t > pair[0].t))
    {
        return Err(CurveError::NonIncreasingTime { index: index + 1 });
    }

    let span = t_last - t_first;
    Ok(points
        .iter()
        .map(|p| p.with_time((p.t - t_first) / span))
        .collect())
}

/// Segments for one axis given strictly increasing `t`.
fn fit_axis(t: &[f64], v: &[f64]) -> Vec<Segment> {
    let n = t.len();

    let dt: Vec<f64> = t.windows(2).map(|w| w[1] - w[0]).collect();
    let dv: Vec<f64> = v
        .windows(2)
        .zip(&dt)
        .map(|(w, &dt)| (w[1] - w[0]) / dt)
        .collect();

    // Natural ends, interior from the neighbouring slopes.
    let mut f = vec![0.0; n];
    for i in 0..n.saturating_sub(2) {
        f[i + 1] = 3.0 * (dv[i + 1] - dv[i]) / (dt[i + 1] + dt[i]);
    }

    (0..n - 1)
        .map(|i| {
            Segment::new(
                (f[i + 1] - f[i]) / (6.0 * dt[i]),
                f[i] / 2.0,
                dv[i] - dt[i] * (f[i + 1] + 2.0 * f[i]) / 6.0,
                v[i],
                t[i],
                t[i + 1],
            )
        })
        .collect()
}
