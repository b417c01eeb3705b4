#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod animation;
pub mod bounding_box;
pub mod config;
pub mod curve;
pub mod draw;
pub mod error;
pub mod fit;
pub mod instance;
pub mod polynomial;
pub mod ribbon;
pub mod sample;
pub mod sampler;
pub mod stroke;
pub mod time_index;

pub use crate::animation::{FrameClock, RibbonUniforms};
pub use crate::curve::{Curve, Segment};
pub use crate::error::{ConfigError, CurveError};
pub use crate::fit::fit;
pub use crate::instance::{CurveInstance, Frame, InstanceState};
pub use crate::ribbon::{RibbonBuilder, RibbonMesh};
pub use crate::sample::Sample;
pub use crate::sampler::{sub_interval, CurveSampler};
pub use crate::stroke::StrokeRecorder;
pub use crate::time_index::{DrawRange, TimeIndex, VertexRange};

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::{fit, sub_interval, DrawRange, InstanceState, RibbonBuilder, Sample};

    /// Pointer positions of a wavy stroke, one every 10ms
    fn pointer_events() -> impl Iterator<Item = (f64, f64, f64)> {
        (0..200).map(|i| {
            let t = i as f64 * 0.01;
            (20.0 + 150.0 * t, 120.0 + 30.0 * (4.0 * t).sin(), t)
        })
    }

    #[test]
    fn stroke_to_frame() {
        let config = Config::default();
        let mut recorder = config.recorder();
        let mut instance = config.instance();

        recorder.begin();
        for (x, y, t) in pointer_events() {
            if recorder.add_point(x, y, t).is_empty() {
                continue;
            }
            match recorder.curve() {
                Ok(curve) => instance.update_curve(curve),
                Err(_) => assert!(!recorder.is_fittable()),
            }
        }
        recorder.end();

        assert_eq!(instance.state(), InstanceState::Dirty);
        let n = recorder.points().len();
        let frame = instance.frame().unwrap();
        assert_eq!(frame.mesh.sample_count(), 20 + 4 * n + 1);
        assert_eq!(frame.range.start, 0);
        assert_eq!(frame.range.count, 2 * (20 + 4 * n));

        // The visible window moves without touching the mesh.
        instance.set_draw_range(DrawRange::new(0.25, 0.75));
        let range = instance.vertex_range().unwrap();
        assert!(range.start > 0 && range.end() < 2 * (20 + 4 * n));
        assert_eq!(instance.state(), InstanceState::Built);
    }

    #[test]
    fn zigzag_scenario() {
        let curve = fit(&[
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 1.0, 1.0),
            Sample::new(2.0, 0.0, 2.0),
            Sample::new(3.0, 1.0, 3.0),
        ])
        .unwrap();
        assert_eq!(curve.segment_count(), 3);
        assert!(curve.segments_y()[0].value(0.0).abs() < 1e-12);
        assert!((curve.segments_y()[2].value(1.0) - 1.0).abs() < 1e-12);

        let samples = sub_interval(&curve, 0.9, 0.5);
        assert_eq!(samples.len(), 37);
        assert_eq!(samples[0].t, 0.5);
        assert_eq!(samples[36].t, 1.0);

        let mesh = RibbonBuilder::default().build(&samples, curve.duration()).unwrap();
        assert_eq!(mesh.vertex_count(), 74);
        assert_eq!(mesh.vertex_range(DrawRange::new(0.5, 0.5)), None);
        // The ribbon only spans the second half of the curve's lifetime.
        assert_eq!(mesh.uv(0).y, 0.5);
        assert_eq!(mesh.uv(0).x, 0.0);
        assert_eq!(mesh.uv(73).x, 1.0);
    }
}
