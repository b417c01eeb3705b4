//! Defines and implements the helper method [`DrawRibbon::add_ribbon`] on various drawing contexts.
//!
//! GPU renderers draw the mesh buffers directly as a triangle strip. Contexts
//! without strip support go through [`quads`], which splits the visible part
//! of the strip into one quadrilateral per pair of neighbouring samples.
use nalgebra::Vector2;

use crate::instance::Frame;
use crate::ribbon::RibbonMesh;
use crate::time_index::VertexRange;

/// Draw ribbons on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw ribbons as svg polygons
pub trait DrawRibbon {
    /// Add the visible part of a frame's ribbon to the drawing context.
    fn add_ribbon(&mut self, frame: &Frame<'_>);
}

/// Four corners of a ribbon piece, in drawing order around its outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Corners going around the outline
    pub corners: [Vector2<f32>; 4],
    /// Mean texture coordinate of the corners
    pub uv: Vector2<f32>,
}

/// Split the vertices `range` of `mesh` into quads.
pub fn quads(mesh: &RibbonMesh, range: VertexRange) -> impl Iterator<Item = Quad> + '_ {
    let pieces: Vec<[usize; 4]> = if mesh.is_dot() {
        vec![[0, 1, 3, 2]]
    } else {
        let first = range.start / 2;
        let samples = range.count / 2;
        (first..first + samples.saturating_sub(1))
            .map(|k| [2 * k, 2 * k + 1, 2 * k + 3, 2 * k + 2])
            .collect()
    };

    pieces.into_iter().map(move |vertices| {
        let uv = vertices
            .iter()
            .fold(Vector2::zeros(), |sum: Vector2<f32>, &i| sum + mesh.uv(i))
            / 4.0;
        Quad {
            corners: vertices.map(|i| mesh.vertex(i)),
            uv,
        }
    })
}

#[cfg(feature = "draw-svg")]
pub mod svg;
