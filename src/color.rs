// src/color.rs

//! RGB color type and the two iteration-to-color strategies.
//!
//! The cheap strategy interpolates linearly between a background and a
//! foreground color; the expensive one derives a continuous escape value
//! from the final iterate and runs it through an HSV→RGB conversion.
//! Strategies are selected per grid instance, never mixed per pixel.

use serde::{Deserialize, Serialize};

use crate::escape::EscapeResult;

/// An RGB triple, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Substituted for pixels whose smoothed escape value is numerically
/// undefined (the double logarithm has no finite value at `|z| <= 1`).
const SENTINEL: Rgb = Rgb::BLACK;

const SMOOTH_SATURATION: f64 = 0.8;
const SMOOTH_VALUE: f64 = 1.0;
const HUE_OFFSET: f64 = 0.95;
const HUE_PER_ITERATION: f64 = 20.0;

/// Maps an escape-time result to a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMapper {
    /// Linear interpolation between two configured colors. O(1), the default.
    Linear { background: Rgb, foreground: Rgb },
    /// Logarithmically smoothed HSV coloring. Costs two `ln` calls per
    /// escaped pixel but removes the visible iteration banding.
    Smooth,
}

impl ColorMapper {
    /// Color for one pixel's escape result under this strategy.
    pub fn color_for(&self, result: &EscapeResult, max_iterations: u32) -> Rgb {
        match self {
            ColorMapper::Linear {
                background,
                foreground,
            } => linear_color(*background, *foreground, result.iterations, max_iterations),
            ColorMapper::Smooth => smooth_color(result),
        }
    }
}

/// Channelwise `p * (fg - bg) + bg` with `p = iterations / max_iterations`,
/// rounded to nearest and clamped.
fn linear_color(background: Rgb, foreground: Rgb, iterations: u32, max_iterations: u32) -> Rgb {
    let p = f64::from(iterations) / f64::from(max_iterations);
    let channel = |bg: u8, fg: u8| {
        let v = p * (f64::from(fg) - f64::from(bg)) + f64::from(bg);
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(background.r, foreground.r),
        channel(background.g, foreground.g),
        channel(background.b, foreground.b),
    )
}

/// Continuous escape value `n + 1 - ln(ln|z|) / ln 2`, fed into HSV.
///
/// A final iterate with `|z| <= 1` makes the double logarithm undefined or
/// negative-infinite; those pixels get [`SENTINEL`] instead of a NaN.
fn smooth_color(result: &EscapeResult) -> Rgb {
    let magnitude = result.z.norm();
    if magnitude <= 1.0 {
        return SENTINEL;
    }
    let smooth = f64::from(result.iterations) + 1.0 - magnitude.ln().ln() / std::f64::consts::LN_2;
    hsv_to_rgb(
        HUE_OFFSET + HUE_PER_ITERATION * smooth,
        SMOOTH_SATURATION,
        SMOOTH_VALUE,
    )
}

/// HSV→RGB over six 60°-wide sectors, inclusive-low/exclusive-high.
///
/// The hue is normalized into `[0, 360)` first; rounding at the wraparound
/// boundary can land exactly on 360, which is clamped back to the first
/// sector rather than falling through all six range checks.
fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let mut h = hue % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h = 0.0;
    }

    let chroma = value * saturation;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let to_byte = |c: f64| ((c + m) * 255.0).clamp(0.0, 255.0) as u8;
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}
