// Rasterizer: grid -> off-screen bitmap -> PNG bytes (-> data URI).
// Each cell becomes a solid square block of (v, v, v).

use std::io::Cursor;

use base64::Engine as _;
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::types::{EXPORT_CELL_PX, GRID_SIZE, MAX_EXPORT_CELL_PX};

/// A finished export: PNG-encoded bitmap of the grid at one moment.
#[derive(Debug, Clone)]
pub struct Export {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl Export {
    /// `data:image/png;base64,...`
    pub fn data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.png);
        format!("data:image/png;base64,{b64}")
    }
}

/// Paint with an already validated `cell_px`.
fn paint(grid: &Grid, cell_px: u32) -> RgbImage {
    let side = GRID_SIZE as u32 * cell_px;
    let mut img = RgbImage::from_pixel(side, side, Rgb([255, 255, 255]));
    for (row, col, v) in grid.iter() {
        let x0 = col as u32 * cell_px;
        let y0 = row as u32 * cell_px;
        for y in y0..y0 + cell_px {
            for x in x0..x0 + cell_px {
                img.put_pixel(x, y, Rgb([v, v, v]));
            }
        }
    }
    img
}

/// Paint the grid into a bitmap with `cell_px`×`cell_px` blocks per cell.
/// `cell_px` must be in `1..=MAX_EXPORT_CELL_PX`.
pub fn rasterize_scaled(grid: &Grid, cell_px: u32) -> Result<RgbImage> {
    if !(1..=MAX_EXPORT_CELL_PX).contains(&cell_px) {
        return Err(Error::InvalidScale(cell_px));
    }
    Ok(paint(grid, cell_px))
}

/// The standard 10px-per-cell bitmap (320×320 for a 32×32 grid).
pub fn rasterize(grid: &Grid) -> RgbImage {
    paint(grid, EXPORT_CELL_PX)
}

/// Rasterize at `cell_px` and encode as PNG.
pub fn export_scaled(grid: &Grid, cell_px: u32) -> Result<Export> {
    let img = rasterize_scaled(grid, cell_px)?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(Export { width: img.width(), height: img.height(), png })
}

/// Rasterize at the standard scale and encode as PNG.
pub fn export(grid: &Grid) -> Result<Export> {
    export_scaled(grid, EXPORT_CELL_PX)
}
