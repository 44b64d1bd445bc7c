// src/main.rs

//! Text-mode driver shell for the fractal grid.
//!
//! Plays the role of the external collaborator: it issues pan/zoom commands
//! serially from a single control loop and reads the finished buffer only on
//! an explicit render request. Window creation and event polling belong to a
//! real display shell; this one reads commands from stdin and prints a
//! downsampled ASCII preview.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use fractal_grid::{Config, FractalGrid};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => Config::default(),
    };

    let mut grid = FractalGrid::new(&config).context("failed to construct fractal grid")?;
    grid.update();
    print_preview(&grid)?;

    let pan = config.input.pan_sensitivity;
    let zoom = config.input.zoom_sensitivity;
    info!("commands: left right up down in out render quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        match line.trim() {
            "left" => grid.pan_fractal(-pan, 0),
            "right" => grid.pan_fractal(pan, 0),
            "up" => grid.pan_fractal(0, -pan),
            "down" => grid.pan_fractal(0, pan),
            "in" => {
                if let Err(e) = grid.zoom_fractal(zoom) {
                    warn!("zoom ignored: {e}");
                }
            }
            "out" => {
                if let Err(e) = grid.zoom_fractal(-zoom) {
                    warn!("zoom ignored: {e}");
                }
            }
            "render" => print_preview(&grid)?,
            "quit" => break,
            "" => {}
            other => warn!("unknown command: {other:?}"),
        }
    }

    info!("exiting");
    Ok(())
}

/// Prints a downsampled ASCII rendering of the buffer, darkest pixels as the
/// densest glyphs. A display surrogate, not image persistence.
fn print_preview(grid: &FractalGrid) -> io::Result<()> {
    const RAMP: &[u8] = b"@%#*+=-:. ";
    let (width, height) = grid.resolution();
    let cols = width.min(96);
    let rows = height.min(30);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let pixels = grid.pixels();
    for row in 0..rows {
        let y = row * (height - 1) / (rows - 1).max(1);
        let mut line = String::with_capacity(cols as usize);
        for col in 0..cols {
            let x = col * (width - 1) / (cols - 1).max(1);
            let color = pixels[grid.pixel_index(x, y)].color;
            let luminance = (u32::from(color.r) + u32::from(color.g) + u32::from(color.b)) / 3;
            let glyph = RAMP[(luminance as usize * (RAMP.len() - 1)) / 255];
            line.push(glyph as char);
        }
        writeln!(out, "{line}")?;
    }
    out.flush()
}
