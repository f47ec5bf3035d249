//! Render settings.
//!
//! Settings come from built-in defaults, optionally replaced by a JSON file,
//! then overridden by whichever command line flags were given.

use crate::cli::Args;
use clap::ValueEnum;
use raytrace_renderer::{Camera, RenderConfig, ShadingMode, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which scene to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    /// Ground, 484 candidate small spheres and three large ones
    #[default]
    Random,
    /// Diffuse, metal and glass spheres side by side
    Showcase,
    /// One grey sphere straight ahead
    SingleSphere,
    /// Calibration gradient, no tracing
    Gradient,
}

/// Shading mode as exposed to users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Scatter,
    Normals,
}

impl From<Mode> for ShadingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Scatter => ShadingMode::Scatter,
            Mode::Normals => ShadingMode::Normals,
        }
    }
}

/// Camera placement. Vectors are `[x, y, z]` arrays in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
}

impl CameraSettings {
    /// The wide view used by the random scene.
    pub fn overview() -> Self {
        Self {
            look_from: Vec3::new(13.0, 2.0, 3.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            vfov: 20.0,
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
        }
    }
}

/// Everything needed for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub samples: u32,
    pub max_depth: u32,
    pub seed: u64,
    pub scene: SceneKind,
    pub mode: Mode,
    pub parallel: bool,
    /// Overrides the scene's preset camera when present
    pub camera: Option<CameraSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples: 100,
            max_depth: 50,
            seed: 0,
            scene: SceneKind::Random,
            mode: Mode::Scatter,
            parallel: true,
            camera: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse settings from JSON text.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply command line overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(samples) = args.samples {
            self.samples = samples;
        }
        if let Some(max_depth) = args.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(scene) = args.scene {
            self.scene = scene;
        }
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if args.sequential {
            self.parallel = false;
        }
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples == 0 {
            return Err(ConfigError::Invalid(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The explicit camera, or the scene's preset.
    pub fn camera_settings(&self) -> CameraSettings {
        self.camera.unwrap_or(match self.scene {
            SceneKind::Random => CameraSettings::overview(),
            _ => CameraSettings::default(),
        })
    }

    /// Build the camera for the configured image aspect.
    pub fn camera(&self) -> Camera {
        let cam = self.camera_settings();
        Camera::new(
            cam.look_from,
            cam.look_at,
            cam.vup,
            cam.vfov,
            self.width as f64 / self.height as f64,
        )
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            image_height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            mode: self.mode.into(),
        }
    }
}
