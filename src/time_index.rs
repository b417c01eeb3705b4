//! Mapping normalized time onto ribbon vertices.
//!
//! The ribbon mesh is built once per curve over its whole lifetime. What is
//! actually drawn each frame is a [`DrawRange`] in normalized time, which is
//! resolved here to a [`VertexRange`] without touching the geometry.

use num::ToPrimitive;

use crate::error::CurveError;

/// Normalized time of every sample of a ribbon, non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeIndex(Vec<f64>);

impl TimeIndex {
    /// Wrap per-sample times.
    ///
    /// Fails for an empty array and for arrays which decrease anywhere:
    /// [`resolve`](TimeIndex::resolve) relies on both.
    pub fn new(times: Vec<f64>) -> Result<Self, CurveError> {
        if times.is_empty() {
            return Err(CurveError::InsufficientPoints {
                found: 0,
                required: 1,
            });
        }
        if let Some(index) = times.windows(2).position(|w| !(w[1] >= w[0])) {
            return Err(CurveError::NonMonotonicIndex { index: index + 1 });
        }
        Ok(TimeIndex(times))
    }

    /// Number of indexed samples
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, an index holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The indexed times
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sample index closest to normalized time `query`.
    ///
    /// `query <= 0` gives the first, `query >= 1` the last index.
    /// Anything in between starts from the uniform spacing guess
    /// `round(query * len)` and walks from there.
    pub fn resolve(&self, query: f64) -> usize {
        let times = &self.0;
        let last = times.len() - 1;
        if query <= 0.0 {
            return 0;
        }
        if query >= 1.0 {
            return last;
        }

        let guess = (query * times.len() as f64).round();
        let mut index = guess.to_usize().unwrap_or(0).min(last);
        if times[index] >= query {
            while index > 0 && times[index] >= query {
                index -= 1;
            }
        } else {
            while index < last && times[index] < query {
                index += 1;
            }
        }
        index
    }

    /// Vertex range of the ribbon to draw for `range`, `None` if it covers no quad.
    pub fn vertex_range(&self, range: DrawRange) -> Option<VertexRange> {
        let start = self.resolve(range.start);
        let end = self.resolve(range.end);
        if end <= start {
            return None;
        }
        Some(VertexRange {
            start: start * 2,
            count: (end - start) * 2,
        })
    }
}

/// A window of normalized time `[start, end]` to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRange {
    /// Normalized start time
    pub start: f64,
    /// Normalized end time
    pub end: f64,
}

impl DrawRange {
    /// The whole curve
    pub const FULL: DrawRange = DrawRange {
        start: 0.0,
        end: 1.0,
    };

    /// Construct a range
    pub const fn new(start: f64, end: f64) -> Self {
        DrawRange { start, end }
    }
}

impl Default for DrawRange {
    fn default() -> Self {
        DrawRange::FULL
    }
}

/// Vertices of a triangle strip to draw: `count` vertices from `start` on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRange {
    /// First vertex
    pub start: usize,
    /// Number of vertices
    pub count: usize,
}

impl VertexRange {
    /// One past the last vertex
    pub fn end(&self) -> usize {
        self.start + self.count
    }
}
