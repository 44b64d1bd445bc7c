// src/lib.rs

//! Escape-time fractal computation over a pannable, zoomable viewport.
//!
//! The pipeline: a [`Viewport`] maps screen pixels to complex-plane
//! coordinates, [`escape::evaluate`] runs the escape-time iteration,
//! a [`ColorMapper`] turns the result into a color, and the
//! [`FractalGrid`] drives all of it across the pixel grid through the
//! parallel scheduler. Display is someone else's job: an external shell
//! issues serial pan/zoom commands and reads the finished buffer via
//! [`FractalGrid::pixels`].

pub use num_complex;

pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod grid;
pub mod scheduler;
pub mod viewport;

pub use color::{ColorMapper, Rgb};
pub use config::{ColorScheme, Config};
pub use error::FractalError;
pub use escape::{evaluate, EscapeResult};
pub use grid::{FractalGrid, GridState, Pixel};
pub use viewport::Viewport;
