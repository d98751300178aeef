// Turns polled mouse state (one sample per frame) into the discrete pointer
// events a browser would deliver: enter-cell, press, release, leave, click.

use crate::view::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered a cell (fires whether or not the button is held).
    Hover(usize),
    /// Button went down over the grid.
    Press,
    /// Button came up over the grid.
    Release,
    /// Pointer left the grid container.
    Leave,
    /// Press and release both landed on the reset button.
    Reset,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    over_grid: bool,
    hovered: Option<usize>,
    button_armed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Feed one frame's sample. Events come back in delivery order.
    pub fn update(&mut self, layout: &Layout, pos: Option<(usize, usize)>, down: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pressed = down && !self.was_down;
        let released = !down && self.was_down;

        let in_grid = pos.is_some_and(|(x, y)| layout.over_grid(x, y));
        let on_button = pos.is_some_and(|(x, y)| layout.over_button(x, y));
        let cell = pos.and_then(|(x, y)| layout.cell_at(x, y));

        if self.over_grid && !in_grid {
            events.push(PointerEvent::Leave);
        }
        if let Some(i) = cell {
            if self.hovered != Some(i) {
                events.push(PointerEvent::Hover(i));
            }
        }
        if pressed {
            if in_grid {
                events.push(PointerEvent::Press);
            }
            self.button_armed = on_button;
        }
        if released {
            if in_grid {
                events.push(PointerEvent::Release);
            }
            if self.button_armed && on_button {
                events.push(PointerEvent::Reset);
            }
            self.button_armed = false;
        }

        self.was_down = down;
        self.over_grid = in_grid;
        self.hovered = cell;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointerEvent::*;

    fn centre(l: &Layout, index: usize) -> Option<(usize, usize)> {
        let (x, y) = l.cell_origin(index / 32, index % 32);
        Some((x + l.cell_px / 2, y + l.cell_px / 2))
    }

    #[test]
    fn drag_across_cells_emits_hovers_between_press_and_release() {
        let l = Layout::new(20);
        let mut t = PointerTracker::new();
        assert_eq!(t.update(&l, centre(&l, 40), false), vec![Hover(40)]);
        assert_eq!(t.update(&l, centre(&l, 40), true), vec![Press]);
        assert_eq!(t.update(&l, centre(&l, 40), true), vec![]);
        assert_eq!(t.update(&l, centre(&l, 41), true), vec![Hover(41)]);
        assert_eq!(t.update(&l, centre(&l, 41), false), vec![Release]);
        assert_eq!(t.hovered(), Some(41));
    }

    #[test]
    fn leaving_window_emits_leave_once() {
        let l = Layout::new(20);
        let mut t = PointerTracker::new();
        t.update(&l, centre(&l, 0), true);
        assert_eq!(t.update(&l, None, true), vec![Leave]);
        assert_eq!(t.update(&l, None, true), vec![]);
        assert_eq!(t.update(&l, None, false), vec![]);
        assert_eq!(t.hovered(), None);
    }

    #[test]
    fn crossing_a_gridline_re_enters_cell() {
        let l = Layout::new(20);
        let mut t = PointerTracker::new();
        let (x, y) = l.cell_origin(0, 1);
        t.update(&l, Some((x + 5, y + 5)), false);
        assert_eq!(t.update(&l, Some((x - 1, y + 5)), false), vec![]);
        assert_eq!(t.update(&l, Some((x + 5, y + 5)), false), vec![Hover(1)]);
    }

    #[test]
    fn click_on_button_resets() {
        let l = Layout::new(20);
        let mut t = PointerTracker::new();
        let p = Some((l.button.x + 3, l.button.y + 3));
        t.update(&l, p, false);
        assert_eq!(t.update(&l, p, true), vec![]);
        assert_eq!(t.update(&l, p, false), vec![Reset]);
    }

    #[test]
    fn release_off_button_does_not_reset() {
        let l = Layout::new(20);
        let mut t = PointerTracker::new();
        let p = Some((l.button.x + 3, l.button.y + 3));
        t.update(&l, p, true);
        assert_eq!(t.update(&l, Some((0, 0)), false), vec![]);
    }

    #[test]
    fn press_outside_grid_is_not_a_press() {
        let l = Layout::new(20);
        let mut t = PointerTracker::new();
        assert_eq!(t.update(&l, Some((1, 1)), true), vec![]);
    }
}
