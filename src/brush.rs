// Brush engine: darkens the hovered cell plus its orthogonal neighbours.
// Neighbours are found by index arithmetic, then filtered twice:
//   1) the index must be inside the grid,
//   2) the neighbour must be within Chebyshev distance 1 of the hovered cell.
// Check 2 is what stops index-1 at column 0 (or index+1 at the last column)
// from landing on the far edge of the adjacent row.

use crate::grid::{position, Grid};
use crate::types::{CELL_COUNT, GRID_SIZE};

/// Candidate neighbour indices: left, right, up, down.
/// `None` where the arithmetic would go below zero.
fn candidates(index: usize) -> [Option<usize>; 4] {
    [
        index.checked_sub(1),
        index.checked_add(1),
        index.checked_sub(GRID_SIZE),
        index.checked_add(GRID_SIZE),
    ]
}

/// True when (r0,c0) and (r1,c1) are 8-neighbours (or the same cell).
#[inline]
fn within_chebyshev_one(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// Cells the brush touches when hovering `hovered`, hovered cell first.
/// Empty when `hovered` is not a cell.
pub fn footprint(hovered: usize) -> Vec<usize> {
    if hovered >= CELL_COUNT {
        return Vec::new();
    }
    let here = position(hovered);
    let mut cells = Vec::with_capacity(5);
    cells.push(hovered);
    for adj in candidates(hovered).into_iter().flatten() {
        if adj >= CELL_COUNT {
            continue;
        }
        if within_chebyshev_one(here, position(adj)) {
            cells.push(adj);
        }
    }
    cells
}

/// Apply one brush pass at `hovered`. Returns how many cells were darkened.
pub fn apply_brush(grid: &mut Grid, hovered: usize) -> usize {
    let cells = footprint(hovered);
    for &i in &cells {
        grid.darken(i);
    }
    log::trace!("brush at {hovered}: darkened {:?}", cells);
    cells.len()
}
