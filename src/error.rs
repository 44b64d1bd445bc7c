// src/error.rs

//! Error taxonomy for grid construction and viewport mutation.
//!
//! Construction-time errors are fatal and reported before anything is
//! computed; `InvalidZoom` is recoverable and leaves prior state intact.
//! Per-pixel numeric edge cases in the smoothed color scheme are not errors
//! at all: they are absorbed locally as a sentinel color (see `color`).

use thiserror::Error;

/// Everything that can go wrong while building or steering a fractal grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalError {
    /// The coordinate mapping divides by `resolution - 1`, so a grid with a
    /// dimension of 0 or 1 cannot be constructed.
    #[error("degenerate resolution {width}x{height}: both dimensions must exceed 1")]
    DegenerateResolution { width: u32, height: u32 },

    /// The configured world rectangle is empty or inverted.
    #[error("degenerate world rectangle: min must lie strictly below max on both axes")]
    DegenerateWorldRect,

    /// The requested zoom would invert or collapse the world rectangle.
    /// The viewport is left untouched and no recomputation is triggered.
    #[error("zoom by {pixels} pixels would invert the world rectangle")]
    InvalidZoom { pixels: i64 },
}
