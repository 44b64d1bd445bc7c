// src/scheduler.rs

//! Full-grid computation with scoped worker threads.
//!
//! The pixel rows are partitioned into contiguous, disjoint bands, one per
//! worker; the buffer is split with `split_at_mut` so the borrow checker
//! proves the workers cannot alias. Each pixel depends only on its own
//! coordinate and the shared read-only context, so the result is
//! bit-identical whether the bands run in parallel, sequentially, or in any
//! interleaving.

use log::trace;

use crate::color::ColorMapper;
use crate::escape;
use crate::grid::Pixel;
use crate::viewport::Viewport;

/// Shared read-only inputs for one full-grid recomputation.
///
/// Everything here is borrowed immutably for the duration of the pass, so
/// references to it may cross thread boundaries freely.
pub struct ComputeContext<'a> {
    pub viewport: &'a Viewport,
    pub mapper: &'a ColorMapper,
    pub resolution_x: u32,
    pub resolution_y: u32,
    pub max_iterations: u32,
}

/// Computes the whole grid into `buffer` using `num_threads` workers over
/// disjoint row bands. Falls back to a single sequential pass when
/// `num_threads <= 1`; parallelism is a performance choice, never an
/// observable-behavior change.
///
/// `buffer` must hold exactly `resolution_x * resolution_y` pixels.
pub fn compute_parallel(ctx: &ComputeContext<'_>, buffer: &mut [Pixel], num_threads: usize) {
    let width = ctx.resolution_x as usize;
    let height = ctx.resolution_y as usize;
    debug_assert_eq!(buffer.len(), width * height);

    if num_threads <= 1 {
        compute_stripe(ctx, buffer, 0, height);
        return;
    }
    // More workers than rows would produce empty bands.
    let num_threads = num_threads.min(height);

    let rows_per_thread = height / num_threads;
    let remainder = height % num_threads;

    // Carve the buffer into disjoint row bands up front, spreading the
    // remainder rows one per band from the front.
    let mut bands = Vec::with_capacity(num_threads);
    let mut remaining = buffer;
    let mut start_y = 0;
    for i in 0..num_threads {
        let rows = rows_per_thread + usize::from(i < remainder);
        let end_y = start_y + rows;
        let (band, rest) = remaining.split_at_mut(rows * width);
        bands.push((band, start_y, end_y));
        remaining = rest;
        start_y = end_y;
    }

    std::thread::scope(|s| {
        for (band, start_y, end_y) in bands {
            s.spawn(move || compute_stripe(ctx, band, start_y, end_y));
        }
    });
}

/// Computes rows `[start_y, end_y)` into `band`, which must hold exactly
/// those rows' pixels. Viewport → evaluator → color mapper, per pixel.
pub fn compute_stripe(ctx: &ComputeContext<'_>, band: &mut [Pixel], start_y: usize, end_y: usize) {
    trace!("computing stripe rows {start_y}..{end_y}");
    let width = ctx.resolution_x as usize;
    for y in start_y..end_y {
        let row = &mut band[(y - start_y) * width..(y - start_y + 1) * width];
        for (x, pixel) in row.iter_mut().enumerate() {
            let c = ctx.viewport.to_complex(x as u32, y as u32);
            let result = escape::evaluate(c, ctx.max_iterations);
            *pixel = Pixel {
                x: x as u32,
                y: y as u32,
                color: ctx.mapper.color_for(&result, ctx.max_iterations),
            };
        }
    }
}
