// src/viewport.rs

//! Maps the pixel grid onto a rectangle of the complex plane.
//!
//! The viewport owns the world-space window and the pan offset. Pan state is
//! kept in exact pixel units so that panning never accumulates floating-point
//! drift; zooming moves the rectangle corners directly, one pixel step per
//! requested zoom pixel, preserving the screen aspect ratio.

use log::{debug, warn};
use num_complex::Complex64;

use crate::error::FractalError;

/// The world-space window currently visible through the pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    world_min: Complex64,
    world_max: Complex64,
    pan_x: i64,
    pan_y: i64,
    resolution_x: u32,
    resolution_y: u32,
}

impl Viewport {
    /// Creates a viewport over `[world_min, world_max]` sampled by a
    /// `resolution_x` × `resolution_y` grid.
    ///
    /// The coordinate mapping divides by `resolution - 1`, so both
    /// dimensions must exceed 1; the world rectangle must be non-degenerate.
    pub fn new(
        resolution_x: u32,
        resolution_y: u32,
        world_min: Complex64,
        world_max: Complex64,
    ) -> Result<Self, FractalError> {
        if resolution_x <= 1 || resolution_y <= 1 {
            return Err(FractalError::DegenerateResolution {
                width: resolution_x,
                height: resolution_y,
            });
        }
        if world_min.re >= world_max.re || world_min.im >= world_max.im {
            return Err(FractalError::DegenerateWorldRect);
        }
        Ok(Viewport {
            world_min,
            world_max,
            pan_x: 0,
            pan_y: 0,
            resolution_x,
            resolution_y,
        })
    }

    /// World-space coordinate sampled by pixel `(x, y)` under the current
    /// pan offset. Pure: identical inputs and viewport state give identical
    /// results.
    #[inline]
    pub fn to_complex(&self, x: u32, y: u32) -> Complex64 {
        let re = self.world_min.re
            + (i64::from(x) + self.pan_x) as f64 * (self.world_max.re - self.world_min.re)
                / f64::from(self.resolution_x - 1);
        let im = self.world_min.im
            + (i64::from(y) + self.pan_y) as f64 * (self.world_max.im - self.world_min.im)
                / f64::from(self.resolution_y - 1);
        Complex64::new(re, im)
    }

    /// Shifts the sampled window opposite to the direction of travel, so a
    /// positive delta moves the visual content that way. Unbounded; integer
    /// accumulation makes `pan(d)` followed by `pan(-d)` an exact identity.
    pub fn pan(&mut self, delta_x: i64, delta_y: i64) {
        self.pan_x -= delta_x;
        self.pan_y -= delta_y;
        debug!("viewport pan offset now ({}, {})", self.pan_x, self.pan_y);
    }

    /// Shrinks (positive `pixels`) or grows (negative) the window by moving
    /// each corner toward or away from the opposite one, one step per pixel.
    ///
    /// The imaginary-axis step is the real-axis step scaled by the screen
    /// aspect ratio, so a valid zoom never changes the window's shape.
    /// A zoom that would invert or collapse either axis is rejected with
    /// [`FractalError::InvalidZoom`] and leaves the viewport untouched.
    pub fn zoom(&mut self, pixels: i64) -> Result<(), FractalError> {
        let step_x = (self.world_max.re - self.world_min.re) / f64::from(self.resolution_x - 1);
        let step_y = step_x * f64::from(self.resolution_y) / f64::from(self.resolution_x);
        let shift_x = pixels as f64 * step_x;
        let shift_y = pixels as f64 * step_y;

        let new_min = Complex64::new(self.world_min.re + shift_x, self.world_min.im + shift_y);
        let new_max = Complex64::new(self.world_max.re - shift_x, self.world_max.im - shift_y);
        if new_min.re >= new_max.re || new_min.im >= new_max.im {
            warn!("rejected zoom by {pixels} px: world rectangle would collapse");
            return Err(FractalError::InvalidZoom { pixels });
        }

        self.world_min = new_min;
        self.world_max = new_max;
        debug!(
            "viewport zoomed to re [{}, {}], im [{}, {}]",
            new_min.re, new_max.re, new_min.im, new_max.im
        );
        Ok(())
    }

    pub fn world_min(&self) -> Complex64 {
        self.world_min
    }

    pub fn world_max(&self) -> Complex64 {
        self.world_max
    }

    /// Height-to-width ratio of the world rectangle.
    pub fn aspect_ratio(&self) -> f64 {
        (self.world_max.im - self.world_min.im) / (self.world_max.re - self.world_min.re)
    }
}
