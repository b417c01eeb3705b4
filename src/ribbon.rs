//! Constant width ribbon meshes along sampled curves.
//!
//! Every sample contributes two vertices, one on each wall of the ribbon,
//! which are drawn as a triangle strip.
//! The texture coordinates encode time: `u` is the position along the drawn
//! samples (for fading the ends) and `v` the position within the whole
//! curve's lifetime (for the colour gradient).

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::bounding_box::BoundingBox;
use crate::error::CurveError;
use crate::sample::Sample;
use crate::time_index::{DrawRange, TimeIndex, VertexRange};

/// Builds [`RibbonMesh`]es.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonBuilder {
    /// Half width of the ribbon in css pixels
    pub pixel_width: f64,
    /// Device pixels per css pixel
    pub pixel_ratio: f64,
}

impl Default for RibbonBuilder {
    fn default() -> Self {
        RibbonBuilder {
            pixel_width: 1.0,
            pixel_ratio: 1.0,
        }
    }
}

impl RibbonBuilder {
    /// Distance of each wall from the centre line in device pixels
    pub fn half_width(&self) -> f64 {
        self.pixel_width * self.pixel_ratio
    }

    /// Turn `samples` into a ribbon.
    ///
    /// `total_time` is the duration of the whole curve the samples were taken from;
    /// each sample's `v` coordinate is `t / total_time`.
    /// A single sample turns into a square dot of side `2 * half_width`.
    pub fn build(&self, samples: &[Sample], total_time: f64) -> Result<RibbonMesh, CurveError> {
        if samples.is_empty() {
            return Err(CurveError::InsufficientPoints {
                found: 0,
                required: 1,
            });
        }
        if total_time == 0.0 {
            return Err(CurveError::DegenerateDuration(total_time));
        }

        match samples {
            [dot] => self.dot(dot, total_time),
            _ => self.strip(samples, total_time),
        }
    }

    fn dot(&self, p: &Sample, total_time: f64) -> Result<RibbonMesh, CurveError> {
        let w = self.half_width();
        let positions = [
            (p.x - w, p.y - w),
            (p.x - w, p.y + w),
            (p.x + w, p.y - w),
            (p.x + w, p.y + w),
        ]
        .iter()
        .flat_map(|&(x, y)| [x as f32, y as f32])
        .collect();

        Ok(RibbonMesh {
            positions,
            uvs: vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0],
            indices: vec![0, 1, 2, 3],
            time_index: TimeIndex::new(vec![p.t / total_time])?,
            shape: Shape::Dot,
        })
    }

    fn strip(&self, samples: &[Sample], total_time: f64) -> Result<RibbonMesh, CurveError> {
        let w = self.half_width();
        let n = samples.len();
        let angles = tangent_angles(samples);

        let mut positions = Vec::with_capacity(4 * n);
        let mut uvs = Vec::with_capacity(4 * n);
        let mut indices = Vec::with_capacity(2 * n);
        let mut times = Vec::with_capacity(n);

        for (i, (p, angle)) in samples.iter().zip(angles).enumerate() {
            let (sin, cos) = (-angle).sin_cos();
            positions.extend_from_slice(&[
                (p.x - w * sin) as f32,
                (p.y - w * cos) as f32,
                (p.x + w * sin) as f32,
                (p.y + w * cos) as f32,
            ]);

            let u = i as f64 / (n - 1) as f64;
            let v = p.t / total_time;
            uvs.extend_from_slice(&[u as f32, v as f32, u as f32, v as f32]);
            times.push(v);

            let first = 2 * i as u32;
            indices.extend_from_slice(&[first, first + 1]);
        }

        Ok(RibbonMesh {
            positions,
            uvs,
            indices,
            time_index: TimeIndex::new(times)?,
            shape: Shape::Strip,
        })
    }
}

/// Direction of travel at every sample, in radians.
///
/// The ends use the one neighbouring difference they have. Interior samples
/// average the incoming and outgoing angle without weighting by length,
/// which only approximates a smoothed tangent.
///
/// The average is taken on the raw `atan2` values in `(-π, π]`, so it breaks
/// down whenever the two headings lie on either side of the wrap at `±π`.
/// This happens on any stroke heading left (negative `x`) with a little
/// vertical jitter: headings of `π - ε` and `-π + ε` average to about `0`,
/// pointing right, and the two walls swap sides at that sample.
pub fn tangent_angles(samples: &[Sample]) -> Vec<f64> {
    let n = samples.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let heading = |from: &Sample, to: &Sample| {
        let d: Vector2<f64> = to.position() - from.position();
        d.y.atan2(d.x)
    };

    (0..n)
        .map(|i| {
            if i == 0 {
                heading(&samples[0], &samples[1])
            } else if i == n - 1 {
                heading(&samples[i - 1], &samples[i])
            } else {
                let outgoing = heading(&samples[i], &samples[i + 1]);
                let incoming = heading(&samples[i - 1], &samples[i]);
                0.5 * (outgoing + incoming)
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Dot,
    Strip,
}

/// Geometry buffers of a ribbon, ready to upload.
///
/// The mesh is never patched: a new curve means a new mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonMesh {
    positions: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
    time_index: TimeIndex,
    shape: Shape,
}

impl RibbonMesh {
    /// Interleaved `x, y` of every vertex
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Interleaved `u, v` of every vertex
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Triangle strip indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Normalized time of every sample, for [`DrawRange`] lookups
    pub fn time_index(&self) -> &TimeIndex {
        &self.time_index
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Number of samples the ribbon was built from
    pub fn sample_count(&self) -> usize {
        self.time_index.len()
    }

    /// Whether this is the square built from a single sample
    pub fn is_dot(&self) -> bool {
        self.shape == Shape::Dot
    }

    /// Position of vertex `i`
    pub fn vertex(&self, i: usize) -> Vector2<f32> {
        Vector2::new(self.positions[2 * i], self.positions[2 * i + 1])
    }

    /// Texture coordinate of vertex `i`
    pub fn uv(&self, i: usize) -> Vector2<f32> {
        Vector2::new(self.uvs[2 * i], self.uvs[2 * i + 1])
    }

    /// Every vertex
    pub fn full_range(&self) -> VertexRange {
        VertexRange {
            start: 0,
            count: self.vertex_count(),
        }
    }

    /// Vertices to draw for `range`, `None` if nothing is visible.
    ///
    /// A dot has no extent in time and is always drawn whole.
    pub fn vertex_range(&self, range: DrawRange) -> Option<VertexRange> {
        match self.shape {
            Shape::Dot => Some(self.full_range()),
            Shape::Strip => self.time_index.vertex_range(range),
        }
    }

    /// Bounds of all vertices
    pub fn bounding_box(&self) -> Option<BoundingBox<f32>> {
        BoundingBox::from_points((0..self.vertex_count()).map(|i| self.vertex(i)))
    }
}
