//! Time-stamped 2D points.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point of a stroke together with the time it was captured at.
///
/// For raw input `t` is seconds since the stroke started.
/// Points stored inside a [`Curve`](crate::Curve) use normalized time in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Time stamp
    pub t: f64,
}

impl Sample {
    /// Construct a new sample
    pub const fn new(x: f64, y: f64, t: f64) -> Self {
        Sample { x, y, t }
    }

    /// The sample's position as a vector
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Same position, different time stamp
    pub fn with_time(&self, t: f64) -> Self {
        Sample { t, ..*self }
    }
}
