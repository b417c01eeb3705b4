//! Capturing pointer input as a time-stamped stroke.
//!
//! Raw pointer events arrive at whatever rate the platform delivers them.
//! [`StrokeRecorder`] thins them out to at least one `step` apart and pads
//! long pauses with points held at the last position, so the fitter always
//! sees a roughly uniform time spacing.

use num::ToPrimitive;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::curve::Curve;
use crate::error::CurveError;
use crate::fit::fit;
use crate::sample::Sample;

/// Points appended by a single [`StrokeRecorder::add_point`] call.
pub type Accepted = SmallVec<[Sample; 4]>;

/// Most held points inserted for a single pause.
pub const MAX_HELD: usize = 1024;

/// Input throttling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    /// Minimum time between two accepted points
    pub step: f64,
    /// Points needed before a curve is fitted
    pub min_fit_points: usize,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        StrokeConfig {
            step: 0.03,
            min_fit_points: 4,
        }
    }
}

/// Collects the points of one stroke at a time.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    config: StrokeConfig,
    points: Vec<Sample>,
    active: bool,
}

impl StrokeRecorder {
    /// A recorder with the given throttling
    pub fn new(config: StrokeConfig) -> Self {
        StrokeRecorder {
            config,
            points: Vec::new(),
            active: false,
        }
    }

    /// Start a new stroke, discarding the previous one
    pub fn begin(&mut self) {
        self.points.clear();
        self.active = true;
    }

    /// Finish the stroke; further points are ignored until the next [`begin`](Self::begin)
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Whether a stroke is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points recorded so far
    pub fn points(&self) -> &[Sample] {
        &self.points
    }

    /// Offer a pointer position captured at time `t`.
    ///
    /// Returns the points that were appended: nothing if no stroke is active,
    /// `t` isn't finite or the point is less than `step` after the last one;
    /// otherwise the point, preceded by held copies of the last position if the
    /// gap exceeded `2 * step`. At most [`MAX_HELD`] copies are inserted, and none
    /// once adding `step` no longer changes the time stamp.
    pub fn add_point(&mut self, x: f64, y: f64, t: f64) -> Accepted {
        let mut accepted = Accepted::new();
        if !self.active {
            log::trace!("ignoring point ({}, {}) outside of a stroke", x, y);
            return accepted;
        }

        if !t.is_finite() {
            log::trace!("ignoring point ({}, {}) at t = {}", x, y, t);
            return accepted;
        }

        let step = self.config.step;
        if let Some(&last) = self.points.last() {
            if !(t - last.t >= step) {
                log::trace!("throttled point at t = {}", t);
                return accepted;
            }
            // Leave at most 2 * step between the last held point and `t`.
            let held_count = ((t - last.t) / step - 2.0)
                .ceil()
                .to_usize()
                .unwrap_or(0)
                .min(MAX_HELD);
            let mut held = last;
            for _ in 0..held_count {
                let next = held.t + step;
                if !(next > held.t) {
                    break;
                }
                held = held.with_time(next);
                accepted.push(held);
            }
            if !accepted.is_empty() {
                log::trace!("held position for {} points before t = {}", accepted.len(), t);
            }
        }

        accepted.push(Sample::new(x, y, t));
        self.points.extend_from_slice(&accepted);
        accepted
    }

    /// Whether enough points were recorded to fit a curve
    pub fn is_fittable(&self) -> bool {
        self.points.len() >= self.config.min_fit_points
    }

    /// Fit a curve through the recorded points.
    pub fn curve(&self) -> Result<Curve, CurveError> {
        if !self.is_fittable() {
            return Err(CurveError::InsufficientPoints {
                found: self.points.len(),
                required: self.config.min_fit_points,
            });
        }
        fit(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> StrokeRecorder {
        let mut recorder = StrokeRecorder::new(StrokeConfig {
            step: 0.25,
            min_fit_points: 4,
        });
        recorder.begin();
        recorder
    }

    #[test]
    fn ignores_points_outside_stroke() {
        let mut recorder = StrokeRecorder::default();
        assert!(recorder.add_point(1.0, 1.0, 0.0).is_empty());
        recorder.begin();
        assert_eq!(recorder.add_point(1.0, 1.0, 0.0).len(), 1);
        recorder.end();
        assert!(!recorder.is_active());
        assert!(recorder.add_point(2.0, 2.0, 1.0).is_empty());
        assert_eq!(recorder.points().len(), 1);
    }

    #[test]
    fn throttles() {
        let mut recorder = recorder();
        recorder.add_point(0.0, 0.0, 0.0);
        assert!(recorder.add_point(1.0, 0.0, 0.1).is_empty());
        assert!(recorder.add_point(1.0, 0.0, 0.0).is_empty());
        assert_eq!(recorder.add_point(1.0, 0.0, 0.25).len(), 1);
        assert_eq!(recorder.points().len(), 2);
    }

    #[test]
    fn holds_position_across_pauses() {
        let mut recorder = recorder();
        recorder.add_point(3.0, 4.0, 0.0);
        let accepted = recorder.add_point(9.0, 9.0, 1.0);
        // held at 0.25 and 0.5, the remaining gap of 0.5 is short enough
        assert_eq!(
            accepted.as_slice(),
            &[
                Sample::new(3.0, 4.0, 0.25),
                Sample::new(3.0, 4.0, 0.5),
                Sample::new(9.0, 9.0, 1.0),
            ]
        );
        assert_eq!(recorder.points().len(), 4);
        assert!(recorder.points().windows(2).all(|w| w[1].t - w[0].t <= 0.5));
    }

    #[test]
    fn ignores_non_finite_times() {
        let mut recorder = recorder();
        recorder.add_point(0.0, 0.0, 0.0);
        assert!(recorder.add_point(1.0, 1.0, f64::INFINITY).is_empty());
        assert!(recorder.add_point(1.0, 1.0, f64::NAN).is_empty());
        assert_eq!(recorder.points().len(), 1);
        assert_eq!(recorder.add_point(1.0, 1.0, 0.25).len(), 1);
    }

    #[test]
    fn long_pauses_are_bounded() {
        let mut recorder = recorder();
        recorder.add_point(0.0, 0.0, 0.0);
        let accepted = recorder.add_point(1.0, 1.0, 1e9);
        assert_eq!(accepted.len(), MAX_HELD + 1);
        assert_eq!(accepted[MAX_HELD], Sample::new(1.0, 1.0, 1e9));
    }

    #[test]
    fn held_points_stop_when_time_saturates() {
        let mut recorder = StrokeRecorder::new(StrokeConfig::default());
        recorder.begin();
        recorder.add_point(0.0, 0.0, 1e15);
        // 1e15 + 0.03 rounds back to 1e15
        let accepted = recorder.add_point(1.0, 1.0, 1e15 + 1.0);
        assert_eq!(accepted.as_slice(), &[Sample::new(1.0, 1.0, 1e15 + 1.0)]);
        assert_eq!(recorder.points().len(), 2);
    }

    #[test]
    fn fits_once_enough_points() {
        let mut recorder = recorder();
        for i in 0..3 {
            recorder.add_point(i as f64, 0.0, i as f64 * 0.3);
        }
        assert!(!recorder.is_fittable());
        assert_eq!(
            recorder.curve(),
            Err(CurveError::InsufficientPoints {
                found: 3,
                required: 4
            })
        );
        recorder.add_point(3.0, 1.0, 0.9);
        let curve = recorder.curve().unwrap();
        assert_eq!(curve.points().len(), 4);
        assert_eq!(curve.t_last(), 1.0);
    }

    #[test]
    fn begin_discards_previous_stroke() {
        let mut recorder = recorder();
        recorder.add_point(0.0, 0.0, 0.0);
        recorder.add_point(0.0, 0.0, 0.3);
        recorder.begin();
        assert!(recorder.points().is_empty());
    }
}
