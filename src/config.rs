// src/config.rs

//! Construction-time configuration for a fractal grid.
//!
//! Every section deserializes with `#[serde(default)]`, so a configuration
//! file only needs to name the settings it overrides. Defaults mirror the
//! classic full-set view: a 1000×600 grid over real ∈ [-2.5, 1.5] and
//! imag ∈ [-1.5, 1.5] with a 1000-iteration budget.

use std::path::Path;

use anyhow::Context as _;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::color::{ColorMapper, Rgb};

/// Root configuration, grouped into logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Grid resolution and iteration budget.
    pub grid: GridConfig,
    /// Initial world-space rectangle.
    pub world: WorldConfig,
    /// Color scheme selection.
    pub colors: ColorConfig,
    /// Pan/zoom sensitivity for the command shell.
    pub input: InputConfig,
    /// Parallel execution settings.
    pub performance: PerformanceConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Pixel resolution and per-pixel iteration budget, fixed for the grid's
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid width in pixels. Must exceed 1.
    pub resolution_x: u32,
    /// Grid height in pixels. Must exceed 1.
    pub resolution_y: u32,
    /// Escape-time iteration budget per pixel.
    pub max_iterations: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            resolution_x: 1000,
            resolution_y: 600,
            max_iterations: 1000,
        }
    }
}

/// Initial corners of the visible world rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub min_re: f64,
    pub min_im: f64,
    pub max_re: f64,
    pub max_im: f64,
}

impl WorldConfig {
    pub fn min(&self) -> Complex64 {
        Complex64::new(self.min_re, self.min_im)
    }

    pub fn max(&self) -> Complex64 {
        Complex64::new(self.max_re, self.max_im)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        // The full set with a little margin on every side.
        WorldConfig {
            min_re: -2.5,
            min_im: -1.5,
            max_re: 1.5,
            max_im: 1.5,
        }
    }
}

/// Which coloring strategy a grid uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Linear interpolation between background and foreground. The default.
    #[default]
    Cheap,
    /// Logarithmically smoothed HSV coloring.
    Expensive,
}

/// Color scheme selection plus the two endpoint colors used by the cheap
/// scheme. Immutable for the lifetime of a grid; pan/zoom never touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub scheme: ColorScheme,
    /// Color of immediately-diverging points under the cheap scheme.
    pub background: Rgb,
    /// Color of converged (in-set) points under the cheap scheme.
    pub foreground: Rgb,
}

impl ColorConfig {
    /// Builds the mapper this configuration selects.
    pub fn mapper(&self) -> ColorMapper {
        match self.scheme {
            ColorScheme::Cheap => ColorMapper::Linear {
                background: self.background,
                foreground: self.foreground,
            },
            ColorScheme::Expensive => ColorMapper::Smooth,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            scheme: ColorScheme::Cheap,
            background: Rgb::CYAN,
            foreground: Rgb::BLACK,
        }
    }
}

/// Pixels per discrete input event in the command shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Pan distance per pan command, in pixels.
    pub pan_sensitivity: i64,
    /// Zoom amount per zoom command, in pixels.
    pub zoom_sensitivity: i64,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            pan_sensitivity: 10,
            zoom_sensitivity: 5,
        }
    }
}

/// Parallel execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for grid recomputation.
    /// Set to 1 for a fully sequential pass; the output is identical.
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig { worker_threads: 4 }
    }
}
