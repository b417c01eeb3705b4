//! Tunables in one place, loadable from json.

use serde::{Deserialize, Serialize};

use crate::animation::{FrameClock, Rgb, RibbonUniforms};
use crate::error::ConfigError;
use crate::instance::CurveInstance;
use crate::ribbon::RibbonBuilder;
use crate::sampler::CurveSampler;
use crate::stroke::{StrokeConfig, StrokeRecorder};

/// Animation and colour settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds per animation cycle
    pub cycle_period: f64,
    /// Upper bound on rendered frames per second
    pub max_fps: u32,
    /// Colour at the start of a curve's lifetime
    pub colour_start: Rgb,
    /// Colour at the end of a curve's lifetime
    pub colour_end: Rgb,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let uniforms = RibbonUniforms::default();
        AnimationConfig {
            cycle_period: 3.0,
            max_fps: 60,
            colour_start: uniforms.colour_start,
            colour_end: uniforms.colour_end,
        }
    }
}

/// All settings. Missing json fields take their default.
///
/// ```
/// # use splinetrail::config::Config;
/// let config = Config::from_json(r#"{ "ribbon": { "pixel_width": 2.5 } }"#)?;
/// assert_eq!(config.ribbon.pixel_width, 2.5);
/// assert_eq!(config.stroke.min_fit_points, 4);
/// # Ok::<(), splinetrail::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Curve sampling resolution
    pub sampling: CurveSampler,
    /// Ribbon geometry
    pub ribbon: RibbonBuilder,
    /// Input throttling
    pub stroke: StrokeConfig,
    /// Animation and colours
    pub animation: AnimationConfig,
}

impl Config {
    /// Parse and validate a json config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to json
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ribbon.pixel_width", self.ribbon.pixel_width),
            ("ribbon.pixel_ratio", self.ribbon.pixel_ratio),
            ("stroke.step", self.stroke.step),
            ("animation.cycle_period", self.animation.cycle_period),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.animation.max_fps == 0 {
            return Err(ConfigError::Invalid("animation.max_fps must be positive".into()));
        }
        if self.sampling.max_steps == 0 {
            return Err(ConfigError::Invalid("sampling.max_steps must be positive".into()));
        }
        if self.stroke.min_fit_points < crate::fit::MIN_POINTS {
            return Err(ConfigError::Invalid(format!(
                "stroke.min_fit_points must be at least {}, got {}",
                crate::fit::MIN_POINTS,
                self.stroke.min_fit_points
            )));
        }
        Ok(())
    }

    /// An empty curve instance using these settings
    pub fn instance(&self) -> CurveInstance {
        let mut instance = CurveInstance::new(self.sampling, self.ribbon);
        instance.update_uniforms(self.uniforms());
        instance
    }

    /// A stroke recorder using these settings
    pub fn recorder(&self) -> StrokeRecorder {
        StrokeRecorder::new(self.stroke)
    }

    /// A frame clock using these settings
    pub fn clock(&self) -> FrameClock {
        FrameClock::new(self.animation.cycle_period, self.animation.max_fps)
    }

    /// Uniforms at phase zero with the configured colours
    pub fn uniforms(&self) -> RibbonUniforms {
        RibbonUniforms {
            cycle: 0.0,
            colour_start: self.animation.colour_start,
            colour_end: self.animation.colour_end,
        }
    }
}
