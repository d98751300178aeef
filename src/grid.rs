//! Grid model: one brightness value per cell, stored row-major.

use crate::types::{CELL_COUNT, GRID_SIZE, SHADE_DECREMENT, WHITE};

/// Fixed-size greyscale grid. Cells are only ever mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A fresh grid with every cell white.
    pub fn new() -> Self {
        Self { cells: vec![WHITE; CELL_COUNT] }
    }

    /// Number of cells (always `CELL_COUNT`; a grid is never empty).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Brightness of the cell at `index`, or `None` outside the grid.
    pub fn shade(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    pub fn shade_at(&self, row: usize, col: usize) -> Option<u8> {
        index_of(row, col).and_then(|i| self.shade(i))
    }

    /// Darken one cell by `SHADE_DECREMENT`, clamping at black.
    /// Returns false when `index` does not resolve to a cell.
    pub fn darken(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(v) => {
                *v = v.saturating_sub(SHADE_DECREMENT);
                true
            }
            None => false,
        }
    }

    /// Back to all-white.
    pub fn reset(&mut self) {
        self.cells.fill(WHITE);
    }

    /// True if no cell has been darkened since creation/reset.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&v| v == WHITE)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate `(row, col, brightness)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (i / GRID_SIZE, i % GRID_SIZE, v))
    }
}

/// Row/column of a linear index.
#[inline]
pub fn position(index: usize) -> (usize, usize) {
    (index / GRID_SIZE, index % GRID_SIZE)
}

/// Linear index of (row, col), or `None` if either is off the grid.
#[inline]
pub fn index_of(row: usize, col: usize) -> Option<usize> {
    (row < GRID_SIZE && col < GRID_SIZE).then_some(row * GRID_SIZE + col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_white() {
        let g = Grid::new();
        assert_eq!(g.len(), 1024);
        assert!(g.cells().iter().all(|&v| v == 255));
        assert!(g.is_blank());
    }

    #[test]
    fn darken_clamps_at_zero() {
        let mut g = Grid::new();
        for k in 1..=8u32 {
            assert!(g.darken(7));
            let expected = 255i32 - 50 * k as i32;
            assert_eq!(g.shade(7), Some(expected.max(0) as u8));
        }
        assert_eq!(g.shade(7), Some(0));
    }

    #[test]
    fn darken_out_of_range_is_ignored() {
        let mut g = Grid::new();
        assert!(!g.darken(CELL_COUNT));
        assert!(g.is_blank());
    }

    #[test]
    fn reset_restores_every_cell() {
        let mut g = Grid::new();
        for i in (0..CELL_COUNT).step_by(3) {
            g.darken(i);
            g.darken(i);
        }
        assert!(!g.is_blank());
        g.reset();
        assert!(g.is_blank());
        assert_eq!(g.len(), CELL_COUNT);
    }

    #[test]
    fn index_and_position_agree() {
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(33), (1, 1));
        assert_eq!(position(1023), (31, 31));
        assert_eq!(index_of(1, 1), Some(33));
        assert_eq!(index_of(32, 0), None);
        assert_eq!(index_of(0, 32), None);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new();
        g.darken(GRID_SIZE + 2);
        let (r, c, v) = g.iter().nth(GRID_SIZE + 2).unwrap();
        assert_eq!((r, c, v), (1, 2, 205));
        assert_eq!(g.shade_at(1, 2), Some(205));
    }
}
