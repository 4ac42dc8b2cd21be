//! The placement grid.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coordinate, Segment};
use crate::symbols::SymbolSet;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Keeps the next ship one cell away. Only exists while a fleet is being deployed.
    Buffer,
    Ship { id: usize, segment: Segment },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_ship(&self) -> bool {
        matches!(self, Cell::Ship { .. })
    }
}

/// A `height`×`width` matrix of cells, row-major. Dimensions never change.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty grid.
    ///
    /// Dimensions are not checked here; the oracle rejects oversized maps first.
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: alloc::vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `coord`. Returns `false` when out of bounds.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of ship cells.
    pub fn ship_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_ship()).count()
    }

    /// Reset every buffer cell to empty.
    pub fn clear_buffers(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Buffer) {
            *cell = Cell::Empty;
        }
    }

    /// Raw symbol matrix for a renderer.
    pub fn to_symbols(&self, symbols: &SymbolSet) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| {
                row.iter()
                    .map(|cell| match *cell {
                        Cell::Empty => symbols.free,
                        Cell::Buffer => symbols.buffer,
                        Cell::Ship { segment, .. } => symbols.segment(segment),
                    })
                    .collect()
            })
            .collect()
    }

    /// One line per row, symbols separated by spaces. No colour.
    pub fn render(&self, symbols: &SymbolSet) -> String {
        let mut out = String::new();
        for row in self.to_symbols(symbols) {
            for (i, ch) in row.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.width + coord.col)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.height, self.width)?;
        for line in self.render(&SymbolSet::default()).lines() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Orientation;

    #[test]
    fn out_of_bounds_access() {
        let mut grid = Grid::new(2, 3);
        assert_eq!(grid.get(Coordinate::new(1, 2)), Some(Cell::Empty));
        assert_eq!(grid.get(Coordinate::new(2, 0)), None);
        assert!(!grid.set(Coordinate::new(0, 3), Cell::Buffer));
        assert_eq!(grid.count(Cell::Empty), 6);
    }

    #[test]
    fn clear_buffers_keeps_ships() {
        let mut grid = Grid::new(1, 3);
        grid.set(Coordinate::new(0, 0), Cell::Buffer);
        grid.set(
            Coordinate::new(0, 1),
            Cell::Ship { id: 0, segment: Segment::Single },
        );
        grid.clear_buffers();
        assert_eq!(grid.count(Cell::Buffer), 0);
        assert_eq!(grid.ship_cells(), 1);
    }

    #[test]
    fn renders_symbols() {
        let mut grid = Grid::new(2, 2);
        grid.set(
            Coordinate::new(0, 0),
            Cell::Ship { id: 0, segment: Segment::Bow(Orientation::Horizontal) },
        );
        grid.set(
            Coordinate::new(0, 1),
            Cell::Ship { id: 0, segment: Segment::Hull(Orientation::Horizontal) },
        );
        assert_eq!(grid.render(&SymbolSet::default()), "\u{25C0} \u{25A4}\n? ?\n");
    }
}
