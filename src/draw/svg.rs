//! Draw a ribbon in a svg

use std::fmt::Write;

use crate::draw::{quads, DrawRibbon};
use crate::instance::Frame;

/// This type wraps a mutable String reference and implements [`DrawRibbon`] on it.
/// [`DrawRibbon::add_ribbon`] appends one `<polygon>` per quad, filled with the
/// quad's shaded colour.
///
/// ```
/// # use splinetrail::{fit, CurveInstance, Sample};
/// use splinetrail::draw::DrawRibbon;
/// use splinetrail::draw::svg::SVGPolygons;
///
/// let curve = fit(&[Sample::new(0.0, 0.0, 0.0), Sample::new(10.0, 0.0, 1.0)])?;
/// let mut instance = CurveInstance::default();
/// instance.update_curve(curve);
/// let frame = instance.frame().unwrap();
///
/// let mut svg = String::new();
/// SVGPolygons::from(&mut svg).add_ribbon(&frame);
/// assert!(svg.starts_with("<polygon"));
/// # Ok::<(), splinetrail::CurveError>(())
/// ```
pub struct SVGPolygons<'s>(&'s mut String);

impl<'s> From<&'s mut String> for SVGPolygons<'s> {
    fn from(string: &'s mut String) -> Self {
        SVGPolygons(string)
    }
}

impl<'s> DrawRibbon for SVGPolygons<'s> {
    fn add_ribbon(&mut self, frame: &Frame<'_>) {
        for quad in quads(frame.mesh, frame.range) {
            let [r, g, b, a] = frame.uniforms.shade(quad.uv.x, quad.uv.y);
            let _ = write!(self.0, "<polygon points=\"");
            for (i, corner) in quad.corners.iter().enumerate() {
                let separator = if i == 0 { "" } else { " " };
                let _ = write!(self.0, "{}{},{}", separator, corner.x, corner.y);
            }
            let _ = writeln!(
                self.0,
                "\" fill=\"rgb({},{},{})\" fill-opacity=\"{}\"/>",
                channel(r),
                channel(g),
                channel(b),
                a
            );
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.max(0.0).min(1.0) * 255.0).round() as u8
}

/// A complete svg document showing `frame`, sized to the whole mesh plus `margin`.
pub fn document(frame: &Frame<'_>, margin: f32) -> String {
    let mut svg = String::new();
    if let Some(bb) = frame.mesh.bounding_box() {
        let bb = bb.expand(margin);
        let size = bb.size();
        let _ = writeln!(
            svg,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            bb.min.x, bb.min.y, size.x, size.y
        );
    }
    SVGPolygons::from(&mut svg).add_ribbon(frame);
    let _ = writeln!(svg, "</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit;
    use crate::instance::CurveInstance;
    use crate::sample::Sample;

    #[test]
    fn polygons() {
        let mut instance = CurveInstance::default();
        instance.update_curve(
            fit(&[
                Sample::new(0.0, 0.0, 0.0),
                Sample::new(5.0, 5.0, 0.5),
                Sample::new(10.0, 0.0, 1.0),
            ])
            .unwrap(),
        );
        let frame = instance.frame().unwrap();
        let svg = document(&frame, 2.0);
        assert!(svg.starts_with("<svg viewBox="));
        assert!(svg.trim_end().ends_with("</svg>"));
        // 20 + 4 * 3 steps, drawn up to the last sample
        assert_eq!(svg.matches("<polygon").count(), 31);
    }

    #[test]
    fn channels() {
        assert_eq!(channel(1.0), 255);
        assert_eq!(channel(0.5), 128);
        assert_eq!(channel(-1.0), 0);
    }
}
