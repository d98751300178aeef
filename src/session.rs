// The one stateful view: owns the grid and the drawing flag, and turns
// pointer events into brush passes, resets and exports.

use crate::brush::apply_brush;
use crate::error::Result;
use crate::grid::Grid;
use crate::raster::{self, Export};

#[derive(Debug, Default)]
pub struct Sketch {
    grid: Grid,
    drawing: bool,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Pointer pressed over the grid.
    pub fn press(&mut self) {
        self.drawing = true;
    }

    /// Pointer entered cell `index`. Brushes only while drawing.
    pub fn hover(&mut self, index: usize) -> usize {
        if !self.drawing {
            return 0;
        }
        apply_brush(&mut self.grid, index)
    }

    /// Pointer released. Ends the stroke and rasterizes the grid.
    /// `None` if no stroke was in progress.
    pub fn release(&mut self) -> Result<Option<Export>> {
        if !self.drawing {
            return Ok(None);
        }
        // Flag drops before rasterizing so no brush pass can interleave.
        self.drawing = false;
        raster::export(&self.grid).map(Some)
    }

    /// Pointer left the grid; behaves like a release.
    pub fn leave(&mut self) -> Result<Option<Export>> {
        self.release()
    }

    /// Whiten every cell. The drawing flag is left as is.
    pub fn reset(&mut self) {
        self.grid.reset();
        log::info!("grid reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    #[test]
    fn hover_without_press_does_nothing() {
        let mut s = Sketch::new();
        assert_eq!(s.hover(100), 0);
        assert!(s.grid().is_blank());
    }

    #[test]
    fn press_hover_release_darkens_and_exports() {
        let mut s = Sketch::new();
        s.press();
        assert!(s.is_drawing());
        assert_eq!(s.hover(0), 3);
        let out = s.release().unwrap().expect("stroke was active");
        assert!(!s.is_drawing());
        assert_eq!((out.width, out.height), (320, 320));
        assert_eq!(s.grid().shade(0), Some(205));
        assert_eq!(s.grid().shade(1), Some(205));
        assert_eq!(s.grid().shade(GRID_SIZE), Some(205));
    }

    #[test]
    fn release_when_idle_yields_nothing() {
        let mut s = Sketch::new();
        assert!(s.release().unwrap().is_none());
        assert!(s.leave().unwrap().is_none());
    }

    #[test]
    fn leave_ends_stroke() {
        let mut s = Sketch::new();
        s.press();
        s.hover(200);
        assert!(s.leave().unwrap().is_some());
        assert!(!s.is_drawing());
        assert_eq!(s.hover(300), 0);
    }

    #[test]
    fn reset_keeps_drawing_flag() {
        let mut s = Sketch::new();
        s.press();
        s.hover(77);
        s.reset();
        assert!(s.is_drawing());
        assert!(s.grid().is_blank());
        s.hover(77);
        assert_eq!(s.grid().shade(77), Some(205));
    }
}
