//! On-screen layout and rendering of the grid model.
//!
//! The view only reads the model: pointer pixels are mapped to cell indices
//! here, and the session decides what those events do.

use crate::draw::{draw_text_5x7, fill_rect, stroke_rect, text_width};
use crate::grid::Grid;
use crate::types::{grey, FrameBuffer, GRID_SIZE};

const BACKGROUND: u32 = 0x00_F4_F4_F4;
const LINE: u32 = 0x00_00_00_00;
const HOVER: u32 = 0x00_33_99_FF;
const BUTTON_HOT: u32 = 0x00_E0_E0_E0;

pub const RESET_LABEL: &str = "RESET GRID";
const LABEL_SCALE: usize = 2;
const STATUS_SCALE: usize = 1;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Where everything sits in the window.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub cell_px: usize,
    pub gap: usize,
    pub margin: usize,
    pub grid: Rect,
    pub button: Rect,
    pub status_y: usize,
    pub width: usize,
    pub height: usize,
}

impl Layout {
    /// Lay out a `cell_px` grid with 1px gridlines, the reset button centred
    /// underneath and a status line below that.
    pub fn new(cell_px: usize) -> Self {
        let gap = 1;
        let margin = 16;
        let side = GRID_SIZE * cell_px + (GRID_SIZE + 1) * gap;
        let grid = Rect { x: margin, y: margin, w: side, h: side };

        let (pad_x, pad_y) = (16, 8);
        let bw = text_width(RESET_LABEL, LABEL_SCALE) + 2 * pad_x;
        let bh = 7 * LABEL_SCALE + 2 * pad_y;
        let width = side + 2 * margin;
        let button = Rect {
            x: (width.saturating_sub(bw)) / 2,
            y: grid.y + side + 20,
            w: bw,
            h: bh,
        };
        let status_y = button.y + bh + 12;
        let height = status_y + 7 * STATUS_SCALE + margin;

        Self { cell_px, gap, margin, grid, button, status_y, width, height }
    }

    fn pitch(&self) -> usize {
        self.cell_px + self.gap
    }

    /// Top-left pixel of cell (row, col).
    pub fn cell_origin(&self, row: usize, col: usize) -> (usize, usize) {
        (
            self.grid.x + self.gap + col * self.pitch(),
            self.grid.y + self.gap + row * self.pitch(),
        )
    }

    /// Cell under pixel (x,y). Gridlines and everything outside the grid map to `None`.
    /// Visual: decides which cell the brush lands on as you drag.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<usize> {
        let lx = x.checked_sub(self.grid.x + self.gap)?;
        let ly = y.checked_sub(self.grid.y + self.gap)?;
        let (col, cx) = (lx / self.pitch(), lx % self.pitch());
        let (row, cy) = (ly / self.pitch(), ly % self.pitch());
        if col >= GRID_SIZE || row >= GRID_SIZE || cx >= self.cell_px || cy >= self.cell_px {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Inside the grid container, gridlines included.
    pub fn over_grid(&self, x: usize, y: usize) -> bool {
        self.grid.contains(x, y)
    }

    pub fn over_button(&self, x: usize, y: usize) -> bool {
        self.button.contains(x, y)
    }
}

/// What the frame should show besides the grid itself.
pub struct Hud<'a> {
    pub hovered: Option<usize>,
    pub button_hot: bool,
    pub status: &'a str,
}

/// Paint the whole window from the model.
/// Visual: exactly what the window shows after the next `present`.
pub fn render(layout: &Layout, grid: &Grid, hud: &Hud<'_>, fb: &mut FrameBuffer) {
    fb.clear(BACKGROUND);

    // Gridlines: fill the container black, then cells on top leave 1px lines.
    let g = layout.grid;
    fill_rect(fb, g.x, g.y, g.w, g.h, LINE);
    for (row, col, v) in grid.iter() {
        let (x, y) = layout.cell_origin(row, col);
        fill_rect(fb, x, y, layout.cell_px, layout.cell_px, grey(v));
    }

    // Visual: thin blue frame shows which cell the pointer is over.
    if let Some(i) = hud.hovered {
        let (x, y) = layout.cell_origin(i / GRID_SIZE, i % GRID_SIZE);
        stroke_rect(fb, x, y, layout.cell_px, layout.cell_px, HOVER);
    }

    let b = layout.button;
    if hud.button_hot {
        fill_rect(fb, b.x, b.y, b.w, b.h, BUTTON_HOT);
    }
    stroke_rect(fb, b.x, b.y, b.w, b.h, LINE);
    let label_x = b.x + (b.w - text_width(RESET_LABEL, LABEL_SCALE)) / 2;
    let label_y = b.y + (b.h - 7 * LABEL_SCALE) / 2;
    draw_text_5x7(fb, label_x, label_y, RESET_LABEL, LABEL_SCALE, LINE);

    draw_text_5x7(fb, layout.margin, layout.status_y, hud.status, STATUS_SCALE, LINE);
}
