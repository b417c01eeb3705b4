//! Per-frame animation state handed to the renderer alongside the mesh.

use num::Float;
use serde::{Deserialize, Serialize};

/// An RGB colour, components in `[0, 1]`
pub type Rgb = [f32; 3];

/// Values the ribbon shader reads every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibbonUniforms {
    /// Global animation phase in `[0, 1)`
    pub cycle: f32,
    /// Colour at the start of the curve's lifetime, `v = 0`
    pub colour_start: Rgb,
    /// Colour at the end of the curve's lifetime, `v = 1`
    pub colour_end: Rgb,
}

impl Default for RibbonUniforms {
    fn default() -> Self {
        RibbonUniforms {
            cycle: 0.0,
            colour_start: [1.0, 0.0, 0.0],
            colour_end: [1.0, 1.0, 0.0],
        }
    }
}

impl RibbonUniforms {
    /// Gradient colour at normalized lifetime `v`.
    pub fn colour_at(&self, v: f32) -> Rgb {
        let v = v.max(0.0).min(1.0);
        [0, 1, 2].map(|i| lerp(self.colour_start[i], self.colour_end[i], v))
    }

    /// Opacity at position `u` along the drawn samples.
    ///
    /// A window of the ribbon around the current phase is opaque, the rest fades out.
    pub fn fade(&self, u: f32) -> f32 {
        let offset = (0.5 - u + 2.0 * self.cycle - 1.0).abs();
        1.0 - smoothstep(0.4, 0.5, offset)
    }

    /// RGBA for a vertex with texture coordinate `(u, v)`
    pub fn shade(&self, u: f32, v: f32) -> [f32; 4] {
        let [r, g, b] = self.colour_at(v);
        [r, g, b, self.fade(u)]
    }
}

fn lerp<F: Float>(a: F, b: F, s: F) -> F {
    a + (b - a) * s
}

fn smoothstep<F: Float>(edge0: F, edge1: F, x: F) -> F {
    let t = ((x - edge0) / (edge1 - edge0)).max(F::zero()).min(F::one());
    let three = F::one() + F::one() + F::one();
    t * t * (three - (t + t))
}

/// Frame pacing and the global animation phase.
///
/// Feed it the wall clock time elapsed since the previous call;
/// it answers whether a frame is due and at which phase.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    cycle_period: f64,
    frame_interval: f64,
    elapsed: f64,
    since_frame: f64,
    paused: bool,
}

impl FrameClock {
    /// A clock completing one cycle every `cycle_period` seconds,
    /// rendering no more than `max_fps` frames per second.
    pub fn new(cycle_period: f64, max_fps: u32) -> Self {
        FrameClock {
            cycle_period,
            frame_interval: 1.0 / f64::from(max_fps.max(1)),
            elapsed: 0.0,
            since_frame: f64::INFINITY,
            paused: false,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns the new phase if a frame is due, `None` while paused or
    /// when the previous frame was less than a frame interval ago.
    pub fn tick(&mut self, dt: f64) -> Option<f32> {
        if self.paused {
            return None;
        }
        self.elapsed += dt;
        self.since_frame += dt;
        if self.since_frame < self.frame_interval {
            return None;
        }
        self.since_frame = 0.0;
        Some(self.cycle())
    }

    /// Phase in `[0, 1)` of the current cycle
    pub fn cycle(&self) -> f32 {
        let turns = self.elapsed / self.cycle_period;
        (turns - turns.trunc()) as f32
    }

    /// Seconds of animated time
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Stop advancing
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue advancing
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the clock is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Back to phase zero, the next tick renders
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.since_frame = f64::INFINITY;
    }
}
