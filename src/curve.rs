//! Piecewise cubic curves parameterized by normalized time.
//!
//! A [`Curve`] is produced by [`fit`](crate::fit::fit) and never mutated afterwards:
//! new input produces a new curve.

use nalgebra::{RowVector4, Vector2};

use crate::polynomial::{CubicPolynomial, Polynomial};
use crate::sample::Sample;

/// One cubic piece of a single axis, valid on `[t1, t2)`.
///
/// `value(t) = a (t - t1)^3 + b (t - t1)^2 + c (t - t1) + d`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    poly: CubicPolynomial,
    /// Start of the interval
    pub t1: f64,
    /// End of the interval
    pub t2: f64,
}

impl Segment {
    /// Construct a segment from its coefficients
    pub fn new(a: f64, b: f64, c: f64, d: f64, t1: f64, t2: f64) -> Self {
        Segment {
            poly: Polynomial(RowVector4::new(d, c, b, a)),
            t1,
            t2,
        }
    }

    /// Cubic coefficient
    pub fn a(&self) -> f64 {
        self.poly.coefficient(3)
    }

    /// Quadratic coefficient
    pub fn b(&self) -> f64 {
        self.poly.coefficient(2)
    }

    /// Linear coefficient
    pub fn c(&self) -> f64 {
        self.poly.coefficient(1)
    }

    /// Constant, i.e. the value at `t1`
    pub fn d(&self) -> f64 {
        self.poly.coefficient(0)
    }

    /// Evaluate the piece at absolute time `t`.
    ///
    /// `t` outside of `[t1, t2)` extrapolates the cubic.
    pub fn value(&self, t: f64) -> f64 {
        self.poly.value(t - self.t1)
    }

    /// First derivative with respect to time at absolute time `t`.
    pub fn slope(&self, t: f64) -> f64 {
        self.poly.derive().value(t - self.t1)
    }

    /// Whether `t` lies inside `[t1, t2)`
    pub fn contains(&self, t: f64) -> bool {
        self.t1 <= t && t < self.t2
    }
}

/// A fitted curve: the time-normalized control points and one segment per axis and interval.
///
/// Invariants:
/// - `kx.len() == ky.len() == points.len() - 1`
/// - `kx[i].t2 == kx[i + 1].t1`, same for `ky`
/// - `kx[0].t1 == points[0].t` and `kx[last].t2 == points[last].t`
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub(crate) points: Vec<Sample>,
    pub(crate) kx: Vec<Segment>,
    pub(crate) ky: Vec<Segment>,
    pub(crate) duration: f64,
}

impl Curve {
    /// The control points with normalized time stamps
    pub fn points(&self) -> &[Sample] {
        &self.points
    }

    /// Segments of the x axis
    pub fn segments_x(&self) -> &[Segment] {
        &self.kx
    }

    /// Segments of the y axis
    pub fn segments_y(&self) -> &[Segment] {
        &self.ky
    }

    /// Total normalized time span, `1.0` for every fitted curve
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time of the first control point
    pub fn t_first(&self) -> f64 {
        self.points[0].t
    }

    /// Time of the last control point
    pub fn t_last(&self) -> f64 {
        self.points[self.points.len() - 1].t
    }

    /// Number of segments per axis
    pub fn segment_count(&self) -> usize {
        self.kx.len()
    }

    /// Index of the segment whose interval contains `t`.
    ///
    /// Times before the curve map to the first segment, times at or after its end to the last one.
    pub fn segment_index(&self, t: f64) -> usize {
        match self.kx.iter().position(|s| s.contains(t)) {
            Some(i) => i,
            None if t < self.t_first() => 0,
            None => self.kx.len() - 1,
        }
    }

    /// The point on the curve at time `t`
    pub fn evaluate(&self, t: f64) -> Vector2<f64> {
        let i = self.segment_index(t);
        Vector2::new(self.kx[i].value(t), self.ky[i].value(t))
    }

    /// The curve's velocity at time `t`
    ///
    /// *The resulting vector is not normalized!*
    pub fn tangent(&self, t: f64) -> Vector2<f64> {
        let i = self.segment_index(t);
        Vector2::new(self.kx[i].slope(t), self.ky[i].slope(t))
    }
}
