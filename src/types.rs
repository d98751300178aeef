// Core constants and the window frame buffer.

/// Cells per side of the (square) grid.
pub const GRID_SIZE: usize = 32;
/// Total number of cells; fixed for the lifetime of a grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// How much one brush pass darkens a cell.
pub const SHADE_DECREMENT: u8 = 50;
/// Brightness of an untouched cell.
pub const WHITE: u8 = 255;
/// Side of the pixel block each cell becomes in an exported bitmap.
pub const EXPORT_CELL_PX: u32 = 10;
/// Largest block size an export may be scaled to (2048×2048 bitmap).
pub const MAX_EXPORT_CELL_PX: u32 = 64;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

/// Pack a greyscale brightness into minifb's 0x00RRGGBB.
#[inline]
pub fn grey(v: u8) -> u32 {
    let v = v as u32;
    (v << 16) | (v << 8) | v
}
