//! Owning a curve and its ribbon across frames.
//!
//! Curves change when new input arrives, the visible window changes every
//! frame. [`CurveInstance`] keeps the two apart: replacing the curve only marks
//! the mesh stale, and the mesh is rebuilt on the next render pass. Moving the
//! draw range only changes which vertices of the existing mesh are drawn.

use crate::animation::RibbonUniforms;
use crate::curve::Curve;
use crate::error::CurveError;
use crate::ribbon::{RibbonBuilder, RibbonMesh};
use crate::sampler::CurveSampler;
use crate::time_index::{DrawRange, VertexRange};

/// Lifecycle of a [`CurveInstance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// No curve
    Empty,
    /// The mesh doesn't match the curve (or doesn't exist yet)
    Dirty,
    /// The mesh matches the curve
    Built,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Geometry to draw from
    pub mesh: &'a RibbonMesh,
    /// Vertices to draw
    pub range: VertexRange,
    /// Shader inputs
    pub uniforms: RibbonUniforms,
}

/// A curve, its ribbon mesh, and what part of it is visible.
#[derive(Debug, Clone, Default)]
pub struct CurveInstance {
    curve: Option<Curve>,
    mesh: Option<RibbonMesh>,
    dirty: bool,
    draw_range: DrawRange,
    uniforms: RibbonUniforms,
    sampler: CurveSampler,
    builder: RibbonBuilder,
}

impl CurveInstance {
    /// An empty instance sampling and building ribbons with the given settings
    pub fn new(sampler: CurveSampler, builder: RibbonBuilder) -> Self {
        CurveInstance {
            sampler,
            builder,
            ..Default::default()
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> InstanceState {
        match (&self.curve, self.dirty) {
            (None, _) => InstanceState::Empty,
            (Some(_), true) => InstanceState::Dirty,
            (Some(_), false) => InstanceState::Built,
        }
    }

    /// Replace the curve. The mesh is rebuilt on the next [`rebuild`](Self::rebuild).
    pub fn update_curve(&mut self, curve: Curve) {
        log::debug!("curve replaced, {} control points", curve.points().len());
        self.curve = Some(curve);
        self.dirty = true;
    }

    /// Replace the shader inputs
    pub fn update_uniforms(&mut self, uniforms: RibbonUniforms) {
        self.uniforms = uniforms;
    }

    /// Current shader inputs
    pub fn uniforms(&self) -> &RibbonUniforms {
        &self.uniforms
    }

    /// Set the visible window in normalized time. Never rebuilds the mesh.
    pub fn set_draw_range(&mut self, range: DrawRange) {
        self.draw_range = range;
    }

    /// The visible window in normalized time
    pub fn draw_range(&self) -> DrawRange {
        self.draw_range
    }

    /// The owned curve
    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    /// The current mesh, possibly stale, see [`state`](Self::state)
    pub fn mesh(&self) -> Option<&RibbonMesh> {
        self.mesh.as_ref()
    }

    /// Whether there is anything to render
    pub fn is_renderable(&self) -> bool {
        self.curve.is_some()
    }

    /// Rebuild the mesh over the curve's whole time span if it is stale.
    ///
    /// Returns whether a new mesh was built. The old mesh is only dropped once
    /// the new one is complete, so a failed rebuild keeps the previous mesh and
    /// the instance stays dirty.
    pub fn rebuild(&mut self) -> Result<bool, CurveError> {
        let curve = match (&self.curve, self.dirty) {
            (Some(curve), true) => curve,
            _ => return Ok(false),
        };

        let samples = self.sampler.sub_interval(curve, 0.0, 1.0);
        let mesh = self.builder.build(&samples, curve.duration())?;
        log::debug!(
            "rebuilt ribbon: {} samples, {} vertices",
            samples.len(),
            mesh.vertex_count()
        );

        let old = self.mesh.replace(mesh);
        drop(old);
        self.dirty = false;
        Ok(true)
    }

    /// Vertices to draw for the current draw range, `None` if nothing is visible
    /// or no mesh was built yet.
    pub fn vertex_range(&self) -> Option<VertexRange> {
        self.mesh.as_ref()?.vertex_range(self.draw_range)
    }

    /// Prepare a frame: rebuild if stale, then resolve the draw range.
    ///
    /// Returns `None` when there is nothing to draw. Rebuild failures are
    /// logged and the previous mesh, if any, is used.
    pub fn frame(&mut self) -> Option<Frame<'_>> {
        if let Err(err) = self.rebuild() {
            log::warn!("skipping ribbon rebuild: {}", err);
        }
        let mesh = self.mesh.as_ref()?;
        let range = mesh.vertex_range(self.draw_range)?;
        Some(Frame {
            mesh,
            range,
            uniforms: self.uniforms,
        })
    }

    /// Drop curve and mesh
    pub fn reset(&mut self) {
        self.curve = None;
        self.mesh = None;
        self.dirty = false;
    }
}
