//! Consumers of a finished height grid: denormalization and file exports.
//!
//! Images map `x` to the column and `y` to the row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use tracing::debug;

use crate::error::Result;
use crate::gradient::ColorGradient;
use crate::grid::{Grid, HeightGrid};

/// Scale normalized heights to world units.
pub fn denormalize(heights: &HeightGrid, max_height: f32) -> Grid<f32> {
    heights.map(|&h| h * max_height)
}

/// Render heights as 8-bit grayscale, black at 0 and white at 1.
pub fn render_grayscale(heights: &HeightGrid) -> GrayImage {
    let mut img: GrayImage = ImageBuffer::new(heights.width as u32, heights.length as u32);
    for (x, y, &h) in heights.iter() {
        let luma = (h.clamp(0.0, 1.0) * 255.0).round() as u8;
        img.put_pixel(x as u32, y as u32, Luma([luma]));
    }
    img
}

/// Render heights through a colour gradient.
pub fn render_colored(heights: &HeightGrid, gradient: &ColorGradient) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(heights.width as u32, heights.length as u32);
    for (x, y, &h) in heights.iter() {
        img.put_pixel(x as u32, y as u32, Rgb(gradient.evaluate(h)));
    }
    img
}

/// Save a grayscale heightmap. The format follows the file extension.
pub fn export_grayscale(heights: &HeightGrid, path: &Path) -> Result<()> {
    render_grayscale(heights).save(path)?;
    debug!(path = %path.display(), "wrote grayscale heightmap");
    Ok(())
}

/// Save a gradient-coloured texture of the heights.
pub fn export_colored(heights: &HeightGrid, gradient: &ColorGradient, path: &Path) -> Result<()> {
    render_colored(heights, gradient).save(path)?;
    debug!(path = %path.display(), "wrote colour texture");
    Ok(())
}

/// Write denormalized heights as little-endian `f32`, row by row (`y` major).
pub fn export_raw(heights: &HeightGrid, max_height: f32, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for &h in denormalize(heights, max_height).values() {
        writer.write_all(&h.to_le_bytes())?;
    }
    writer.flush()?;
    debug!(path = %path.display(), "wrote raw heights");
    Ok(())
}
