//! Random placement of a single ship and the gap buffer around it.

use alloc::vec::Vec;
use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Coordinate, DeployError, Orientation};
use crate::grid::{Cell, Grid};
use crate::search::find_blocks;
use crate::ship::expand;

/// Which orientation a multi-cell ship tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum OrientationPolicy {
    /// Coin flip per ship, so neither axis is favoured.
    #[default]
    Randomized,
    /// Always horizontal, falling back to vertical.
    HorizontalFirst,
}

/// Where a ship will go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub orientation: Orientation,
    pub coordinates: Vec<Coordinate>,
}

/// Pick an orientation and a uniformly random free anchor for a ship of `size`.
///
/// Does not modify the grid.
pub fn place_ship<R: Rng + ?Sized>(
    grid: &Grid,
    size: usize,
    policy: OrientationPolicy,
    rng: &mut R,
) -> Result<Placement, DeployError> {
    let order = if size == 1 {
        [Orientation::Single, Orientation::Single]
    } else {
        let first = match policy {
            OrientationPolicy::Randomized if rng.random_bool(0.5) => Orientation::Vertical,
            _ => Orientation::Horizontal,
        };
        [first, first.flip()]
    };

    for orientation in order {
        let (h, w) = orientation.extent(size);
        let anchors = find_blocks(grid, h, w, Cell::Empty);
        if let Some(&anchor) = anchors.choose(rng) {
            trace!(
                "size {} {:?} at {} ({} candidates)",
                size,
                orientation,
                anchor,
                anchors.len()
            );
            return Ok(Placement {
                orientation,
                coordinates: expand(anchor, orientation, size),
            });
        }
        if orientation == Orientation::Single {
            break;
        }
    }
    Err(DeployError::PlacementExhausted { size })
}

/// Mark every free 8-neighbour of `ship` as buffer. Ship cells are left alone.
pub fn allocate_buffer(grid: &mut Grid, ship: &[Coordinate]) {
    let (height, width) = (grid.height(), grid.width());
    for &cell in ship {
        for n in cell.neighbors(height, width) {
            if grid.get(n) == Some(Cell::Empty) {
                grid.set(n, Cell::Buffer);
            }
        }
    }
}
