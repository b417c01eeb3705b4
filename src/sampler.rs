//! Evenly time-spaced sampling of a sub range of a [`Curve`].

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::sample::Sample;

/// Hard ceiling on the number of steps, bounding the mesh size of long strokes.
///
/// Past this point a long curve visibly loses detail.
pub const MAX_STEPS: usize = 8190;

/// Resolution law for [`CurveSampler::sub_interval`]:
/// `min(base_steps + steps_per_point * points, max_steps)` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSampler {
    /// Steps for a curve with no points
    pub base_steps: usize,
    /// Additional steps per control point
    pub steps_per_point: usize,
    /// Upper bound on the number of steps
    pub max_steps: usize,
}

impl Default for CurveSampler {
    fn default() -> Self {
        CurveSampler {
            base_steps: 20,
            steps_per_point: 4,
            max_steps: MAX_STEPS,
        }
    }
}

impl CurveSampler {
    /// Number of steps used for a curve with `point_count` control points.
    ///
    /// Sampling yields one more sample than steps.
    pub fn num_steps(&self, point_count: usize) -> usize {
        self.base_steps
            .saturating_add(self.steps_per_point.saturating_mul(point_count))
            .min(self.max_steps)
            .max(1)
    }

    /// Sample `curve` on `[t_offset, t_offset + t_length]`.
    ///
    /// The window is shifted, not truncated, to lie inside the curve's time span:
    /// a request running past the end moves to the left.
    /// Always returns `num_steps + 1` samples carrying absolute times.
    pub fn sub_interval(&self, curve: &Curve, t_offset: f64, t_length: f64) -> Vec<Sample> {
        let t_offset = clamp_offset(curve, t_offset, t_length);
        let steps = self.num_steps(curve.points().len());

        let kx = curve.segments_x();
        let ky = curve.segments_y();
        let last = kx.len() - 1;

        // Sample times only grow, so the cursor only ever moves forward.
        let mut cursor = kx.iter().position(|s| s.contains(t_offset)).unwrap_or(0);

        let mut samples = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let t = t_offset + t_length * step as f64 / steps as f64;
            while cursor < last && kx[cursor].t2 < t {
                cursor += 1;
            }
            samples.push(Sample::new(kx[cursor].value(t), ky[cursor].value(t), t));
        }
        samples
    }
}

/// `clamp(t_offset, t_first, t_last - t_length)`, preferring `t_first` when the
/// window is longer than the curve.
fn clamp_offset(curve: &Curve, t_offset: f64, t_length: f64) -> f64 {
    t_offset.min(curve.t_last() - t_length).max(curve.t_first())
}

/// Sample with the default resolution law, see [`CurveSampler::sub_interval`].
pub fn sub_interval(curve: &Curve, t_offset: f64, t_length: f64) -> Vec<Sample> {
    CurveSampler::default().sub_interval(curve, t_offset, t_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit;

    fn curve(n: usize) -> Curve {
        let points: Vec<Sample> = (0..n)
            .map(|i| {
                let t = i as f64;
                Sample::new(10.0 * t, (t * 0.7).sin() * 25.0, t * 0.04)
            })
            .collect();
        fit(&points).unwrap()
    }

    #[test]
    fn cardinality() {
        let c = curve(6);
        let samples = sub_interval(&c, 0.0, 1.0);
        assert_eq!(samples.len(), 20 + 4 * 6 + 1);
        assert!(samples.windows(2).all(|w| w[0].t < w[1].t));
        assert_eq!(samples[0].t, 0.0);
        assert_eq!(samples[samples.len() - 1].t, 1.0);
    }

    #[test]
    fn steps_are_capped() {
        let sampler = CurveSampler::default();
        assert_eq!(sampler.num_steps(4), 36);
        assert_eq!(sampler.num_steps(2047), MAX_STEPS);
        assert_eq!(sampler.num_steps(100_000), MAX_STEPS);
        assert_eq!(sampler.num_steps(usize::MAX), MAX_STEPS);
    }

    #[test]
    fn window_is_shifted_not_truncated() {
        let c = curve(5);
        let samples = sub_interval(&c, 0.9, 0.5);
        assert_eq!(samples[0].t, 0.5);
        assert_eq!(samples[samples.len() - 1].t, 1.0);
        assert!(samples.iter().all(|s| (0.0..=1.0).contains(&s.t)));

        let samples = sub_interval(&c, -0.3, 0.25);
        assert_eq!(samples[0].t, 0.0);
        assert_eq!(samples[samples.len() - 1].t, 0.25);
    }

    #[test]
    fn samples_lie_on_the_curve() {
        let c = curve(9);
        for s in sub_interval(&c, 0.2, 0.6) {
            let p = c.evaluate(s.t);
            assert!((p.x - s.x).abs() < 1e-9 && (p.y - s.y).abs() < 1e-9, "{:?}", s);
        }
    }

    #[test]
    fn passes_through_control_points() {
        // 4 points → 36 steps, so every 12th sample lands on a breakpoint.
        let c = curve(4);
        let samples = sub_interval(&c, 0.0, 1.0);
        for (i, p) in c.points().iter().enumerate() {
            let s = samples[i * 12];
            assert!((s.x - p.x).abs() < 1e-9, "x at {}", i);
            assert!((s.y - p.y).abs() < 1e-9, "y at {}", i);
        }
    }

    #[test]
    fn zero_length_window() {
        let c = curve(4);
        let samples = sub_interval(&c, 1.0, 0.0);
        assert_eq!(samples.len(), 37);
        let end = c.points()[3];
        assert!(samples.iter().all(|s| s.t == 1.0 && (s.x - end.x).abs() < 1e-9));
    }
}
