// src/grid.rs

//! The fractal grid: owns the pixel buffer and orchestrates recomputation.
//!
//! Resolution and iteration budget are fixed at construction; the buffer
//! always holds exactly `resolution_x * resolution_y` pixels, indexed as
//! `x + resolution_x * y`. Every update recomputes the whole buffer from the
//! current viewport; readers can never observe a half-written buffer because
//! `update` holds the grid exclusively (`&mut self`) for its full duration.

use std::time::Instant;

use log::{debug, info};

use crate::color::{ColorMapper, Rgb};
use crate::config::Config;
use crate::error::FractalError;
use crate::scheduler::{self, ComputeContext};
use crate::viewport::Viewport;

/// One grid cell: screen position plus computed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

/// Whether the buffer currently matches the viewport.
///
/// `Recomputing` is only ever set while `update` runs; since `update` takes
/// `&mut self`, no reader can hold the grid at that point, so the public API
/// only ever observes `Idle`. The state exists for internal assertions and
/// logging, not as a runtime lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    Idle,
    Recomputing,
}

/// A fixed-resolution pixel grid over a pannable, zoomable viewport.
#[derive(Debug)]
pub struct FractalGrid {
    resolution_x: u32,
    resolution_y: u32,
    max_iterations: u32,
    viewport: Viewport,
    mapper: ColorMapper,
    worker_threads: usize,
    state: GridState,
    buffer: Vec<Pixel>,
}

impl FractalGrid {
    /// Builds a grid from configuration.
    ///
    /// Fails with [`FractalError::DegenerateResolution`] or
    /// [`FractalError::DegenerateWorldRect`] before anything is computed.
    /// The buffer is allocated at full length immediately, with positions
    /// filled in, so the length and index invariants hold from construction
    /// on; colors are meaningful after the first [`update`](Self::update).
    pub fn new(config: &Config) -> Result<Self, FractalError> {
        let resolution_x = config.grid.resolution_x;
        let resolution_y = config.grid.resolution_y;
        let viewport = Viewport::new(
            resolution_x,
            resolution_y,
            config.world.min(),
            config.world.max(),
        )?;

        let mut buffer = Vec::with_capacity(resolution_x as usize * resolution_y as usize);
        for y in 0..resolution_y {
            for x in 0..resolution_x {
                buffer.push(Pixel {
                    x,
                    y,
                    color: Rgb::default(),
                });
            }
        }

        info!(
            "fractal grid created: {}x{}, {} iterations max, {} worker threads",
            resolution_x, resolution_y, config.grid.max_iterations, config.performance.worker_threads
        );

        Ok(FractalGrid {
            resolution_x,
            resolution_y,
            max_iterations: config.grid.max_iterations,
            viewport,
            mapper: config.colors.mapper(),
            worker_threads: config.performance.worker_threads,
            state: GridState::Idle,
            buffer,
        })
    }

    /// Recomputes every pixel from the current viewport, replacing the
    /// buffer contents wholesale. The viewport is read-only for the whole
    /// pass and no second mutation can start until this one returns.
    pub fn update(&mut self) {
        self.state = GridState::Recomputing;
        let started = Instant::now();

        let ctx = ComputeContext {
            viewport: &self.viewport,
            mapper: &self.mapper,
            resolution_x: self.resolution_x,
            resolution_y: self.resolution_y,
            max_iterations: self.max_iterations,
        };
        scheduler::compute_parallel(&ctx, &mut self.buffer, self.worker_threads);

        self.state = GridState::Idle;
        info!(
            "recomputed {}x{} grid in {:?}",
            self.resolution_x,
            self.resolution_y,
            started.elapsed()
        );
    }

    /// Pans the viewport by a pixel delta, then recomputes.
    pub fn pan_fractal(&mut self, delta_x: i64, delta_y: i64) {
        debug!("pan by ({delta_x}, {delta_y}) px");
        self.viewport.pan(delta_x, delta_y);
        self.update();
    }

    /// Zooms the viewport by a pixel amount (positive = in, negative = out),
    /// then recomputes. An invalid zoom is propagated without mutating the
    /// viewport or touching the buffer.
    pub fn zoom_fractal(&mut self, pixels: i64) -> Result<(), FractalError> {
        debug!("zoom by {pixels} px");
        self.viewport.zoom(pixels)?;
        self.update();
        Ok(())
    }

    /// Read-only access to the finished pixel buffer, ordered by
    /// `x + resolution_x * y`.
    pub fn pixels(&self) -> &[Pixel] {
        debug_assert_eq!(self.state, GridState::Idle);
        &self.buffer
    }

    /// Buffer index of pixel `(x, y)`.
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        (x + self.resolution_x * y) as usize
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.resolution_x, self.resolution_y)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorScheme, Config};

    fn small_config() -> Config {
        let mut config = Config::default();
        config.grid.resolution_x = 8;
        config.grid.resolution_y = 5;
        config.grid.max_iterations = 30;
        config.performance.worker_threads = 2;
        config
    }

    #[test]
    fn construction_rejects_degenerate_resolution() {
        let mut config = small_config();
        config.grid.resolution_y = 1;
        assert_eq!(
            FractalGrid::new(&config).unwrap_err(),
            FractalError::DegenerateResolution {
                width: 8,
                height: 1
            }
        );
    }

    #[test]
    fn buffer_invariants_hold_from_construction() {
        let grid = FractalGrid::new(&small_config()).unwrap();
        assert_eq!(grid.pixels().len(), 8 * 5);
        assert_eq!(grid.state(), GridState::Idle);
        for (index, pixel) in grid.pixels().iter().enumerate() {
            assert_eq!(grid.pixel_index(pixel.x, pixel.y), index);
        }
    }

    #[test]
    fn buffer_invariants_survive_pan_and_zoom() {
        let mut grid = FractalGrid::new(&small_config()).unwrap();
        grid.update();
        grid.pan_fractal(3, -2);
        grid.zoom_fractal(1).unwrap();
        assert_eq!(grid.pixels().len(), 8 * 5);
        for (index, pixel) in grid.pixels().iter().enumerate() {
            assert_eq!(grid.pixel_index(pixel.x, pixel.y), index);
        }
    }

    #[test]
    fn invalid_zoom_leaves_grid_untouched() {
        let mut grid = FractalGrid::new(&small_config()).unwrap();
        grid.update();
        let viewport_before = grid.viewport().clone();
        let buffer_before = grid.pixels().to_vec();

        assert!(grid.zoom_fractal(1_000_000).is_err());
        assert_eq!(grid.viewport(), &viewport_before);
        assert_eq!(grid.pixels(), buffer_before.as_slice());
        assert_eq!(grid.state(), GridState::Idle);
    }

    #[test]
    fn smooth_scheme_never_writes_placeholder_positions() {
        let mut config = small_config();
        config.colors.scheme = ColorScheme::Expensive;
        let mut grid = FractalGrid::new(&config).unwrap();
        grid.update();
        let (width, _) = grid.resolution();
        for (index, pixel) in grid.pixels().iter().enumerate() {
            assert_eq!(index as u32, pixel.x + width * pixel.y);
        }
    }
}
