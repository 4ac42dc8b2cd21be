//! Exhaustive search for free rectangles on a grid.

use alloc::vec::Vec;

use crate::common::Coordinate;
use crate::grid::{Cell, Grid};

/// Every top-left anchor at which a `height`×`width` block lies inside the grid and
/// holds only `free` cells, in row-major order.
///
/// An empty result is an ordinary outcome, not an error.
pub fn find_blocks(grid: &Grid, height: usize, width: usize, free: Cell) -> Vec<Coordinate> {
    let mut anchors = Vec::new();
    if height == 0 || width == 0 || height > grid.height() || width > grid.width() {
        return anchors;
    }
    for r in 0..=grid.height() - height {
        for c in 0..=grid.width() - width {
            let fits = (r..r + height)
                .all(|rr| (c..c + width).all(|cc| grid.get(Coordinate::new(rr, cc)) == Some(free)));
            if fits {
                anchors.push(Coordinate::new(r, c));
            }
        }
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn every_cell_of_empty_grid_is_a_1x1_block() {
        let grid = Grid::new(3, 4);
        assert_eq!(find_blocks(&grid, 1, 1, Cell::Empty).len(), 12);
    }

    #[test]
    fn block_larger_than_grid_finds_nothing() {
        let grid = Grid::new(3, 3);
        assert!(find_blocks(&grid, 1, 5, Cell::Empty).is_empty());
        assert!(find_blocks(&grid, 5, 1, Cell::Empty).is_empty());
    }

    #[test]
    fn occupied_cells_break_blocks() {
        let mut grid = Grid::new(2, 3);
        grid.set(Coordinate::new(0, 1), Cell::Buffer);
        assert_eq!(
            find_blocks(&grid, 1, 2, Cell::Empty),
            vec![Coordinate::new(1, 0), Coordinate::new(1, 1)]
        );
        assert_eq!(
            find_blocks(&grid, 2, 1, Cell::Empty),
            vec![Coordinate::new(0, 0), Coordinate::new(0, 2)]
        );
        assert_eq!(find_blocks(&grid, 1, 1, Cell::Buffer), vec![Coordinate::new(0, 1)]);
    }
}
