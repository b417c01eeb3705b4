use std::sync::Once;

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use splinetrail::config::Config;
use splinetrail::draw::quads;
use splinetrail::{CurveInstance, DrawRange, FrameClock, InstanceState, Sample, StrokeRecorder};

static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    });
}

fn js_error(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[derive(Serialize)]
struct Stats {
    points: usize,
    samples: usize,
    vertices: usize,
    built: bool,
}

/// One stroke at a time: recording, fitting and drawing its ribbon.
#[wasm_bindgen]
pub struct StrokeSession {
    config: Config,
    recorder: StrokeRecorder,
    instance: CurveInstance,
    clock: FrameClock,
}

#[wasm_bindgen]
impl StrokeSession {
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<StrokeSession, JsValue> {
        init();
        let config = match config {
            Some(json) => Config::from_json(&json).map_err(js_error)?,
            None => Config::default(),
        };
        Ok(StrokeSession {
            recorder: config.recorder(),
            instance: config.instance(),
            clock: config.clock(),
            config,
        })
    }

    /// Replace the current stroke with an array of `{x, y, t}` objects
    #[wasm_bindgen(js_name = loadPoints)]
    pub fn load_points(&mut self, points: Array) -> Result<(), JsValue> {
        let points = (0..points.length())
            .map(|i| points.get(i).into_serde::<Sample>().map_err(js_error))
            .collect::<Result<Vec<_>, _>>()?;
        self.recorder.begin();
        for p in points {
            self.recorder.add_point(p.x, p.y, p.t);
        }
        self.recorder.end();
        self.refit();
        Ok(())
    }

    #[wasm_bindgen(js_name = beginStroke)]
    pub fn begin_stroke(&mut self) {
        self.recorder.begin();
        self.instance.reset();
        self.clock.reset();
    }

    /// Offer a pointer position, returns whether it was recorded
    #[wasm_bindgen(js_name = addPoint)]
    pub fn add_point(&mut self, x: f64, y: f64, t: f64) -> bool {
        if self.recorder.add_point(x, y, t).is_empty() {
            return false;
        }
        self.refit();
        true
    }

    #[wasm_bindgen(js_name = endStroke)]
    pub fn end_stroke(&mut self) {
        self.recorder.end();
    }

    fn refit(&mut self) {
        if !self.recorder.is_fittable() {
            return;
        }
        match self.recorder.curve() {
            Ok(curve) => self.instance.update_curve(curve),
            Err(err) => log::warn!("stroke not fitted: {}", err),
        }
    }

    #[wasm_bindgen(js_name = setDrawRange)]
    pub fn set_draw_range(&mut self, start: f64, end: f64) {
        self.instance.set_draw_range(DrawRange::new(start, end));
    }

    /// Advance the animation by `dt` seconds, returns whether a frame is due
    pub fn tick(&mut self, dt: f64) -> bool {
        match self.clock.tick(dt) {
            Some(cycle) => {
                let mut uniforms = *self.instance.uniforms();
                uniforms.cycle = cycle;
                self.instance.update_uniforms(uniforms);
                true
            }
            None => false,
        }
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn reset(&mut self) {
        self.recorder = self.config.recorder();
        self.instance.reset();
        self.clock.reset();
    }

    /// Interleaved vertex positions, rebuilding the mesh if needed
    pub fn vertices(&mut self) -> Vec<f32> {
        self.rebuild();
        self.instance
            .mesh()
            .map(|mesh| mesh.positions().to_vec())
            .unwrap_or_default()
    }

    /// Interleaved texture coordinates, rebuilding the mesh if needed
    pub fn uvs(&mut self) -> Vec<f32> {
        self.rebuild();
        self.instance
            .mesh()
            .map(|mesh| mesh.uvs().to_vec())
            .unwrap_or_default()
    }

    /// Triangle strip indices, rebuilding the mesh if needed
    pub fn indices(&mut self) -> Vec<u32> {
        self.rebuild();
        self.instance
            .mesh()
            .map(|mesh| mesh.indices().to_vec())
            .unwrap_or_default()
    }

    /// Unit direction `[x, y]` of the curve at normalized time `t`, empty without a curve
    pub fn direction(&self, t: f64) -> Vec<f64> {
        let tangent = match self.instance.curve() {
            Some(curve) => curve.tangent(t.max(0.0).min(1.0)),
            None => return Vec::new(),
        };
        match tangent.try_normalize(f64::EPSILON) {
            Some(unit) => vec![unit.x, unit.y],
            None => Vec::new(),
        }
    }

    /// `[first, count]` of the vertices to draw, empty if nothing is visible
    #[wasm_bindgen(js_name = vertexRange)]
    pub fn vertex_range(&mut self) -> Vec<u32> {
        self.rebuild();
        self.instance
            .vertex_range()
            .map(|range| vec![range.start as u32, range.count as u32])
            .unwrap_or_default()
    }

    fn rebuild(&mut self) {
        if let Err(err) = self.instance.rebuild() {
            log::warn!("ribbon not rebuilt: {}", err);
        }
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        let mesh = self.instance.mesh();
        JsValue::from_serde(&Stats {
            points: self.recorder.points().len(),
            samples: mesh.map_or(0, |mesh| mesh.sample_count()),
            vertices: mesh.map_or(0, |mesh| mesh.vertex_count()),
            built: self.instance.state() == InstanceState::Built,
        })
        .map_err(js_error)
    }

    /// Fill the visible part of the ribbon, one path per quad
    pub fn draw(&mut self, ctx: CanvasRenderingContext2d) {
        let frame = match self.instance.frame() {
            Some(frame) => frame,
            None => return,
        };
        for quad in quads(frame.mesh, frame.range) {
            let [r, g, b, a] = frame.uniforms.shade(quad.uv.x, quad.uv.y);
            if a <= 0.0 {
                continue;
            }
            let [first, rest @ ..] = quad.corners;
            ctx.begin_path();
            ctx.move_to(first.x as f64, first.y as f64);
            for corner in rest {
                ctx.line_to(corner.x as f64, corner.y as f64);
            }
            ctx.close_path();
            let colour = format!(
                "rgba({}, {}, {}, {})",
                (r * 255.0).round(),
                (g * 255.0).round(),
                (b * 255.0).round(),
                a
            );
            ctx.set_fill_style(&JsValue::from_str(&colour));
            ctx.fill();
        }
    }
}
