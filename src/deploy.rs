//! One deployment attempt: place a whole fleet onto a grid, largest ship first.

use log::{debug, trace};
use rand::Rng;

use crate::common::DeployError;
use crate::config::{DEFAULT_GAPS_BETWEEN_SHIPS, MAX_DEPLOY_ATTEMPTS};
use crate::fleet::Fleet;
use crate::grid::{Cell, Grid};
use crate::placement::{allocate_buffer, place_ship, OrientationPolicy};
use crate::symbols::SymbolSet;

/// Knobs shared by the deployment loop and the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployOptions {
    /// Keep a one-cell gap (including diagonals) between ships.
    pub gaps: bool,
    pub symbols: SymbolSet,
    /// Attempt budget for the oracle.
    pub max_attempts: usize,
    pub orientation: OrientationPolicy,
}

impl DeployOptions {
    pub fn with_gaps(gaps: bool) -> Self {
        Self {
            gaps,
            ..Self::default()
        }
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            gaps: DEFAULT_GAPS_BETWEEN_SHIPS,
            symbols: SymbolSet::default(),
            max_attempts: MAX_DEPLOY_ATTEMPTS,
            orientation: OrientationPolicy::default(),
        }
    }
}

/// Place every undeployed ship of `fleet` onto `grid`.
///
/// A single placement failure ends the attempt; the grid and fleet are then in a
/// partial state and must be thrown away. On success no buffer cells remain.
pub fn deploy_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &mut Fleet,
    options: &DeployOptions,
    rng: &mut R,
) -> Result<(), DeployError> {
    while let Some(index) = fleet.largest_undeployed() {
        let Some(ship) = fleet.ship_mut(index) else {
            break;
        };
        let placement = match place_ship(grid, ship.size(), options.orientation, rng) {
            Ok(p) => p,
            Err(e) => {
                debug!("could not place {} (size {}): {}", ship.name(), ship.size(), e);
                return Err(e);
            }
        };
        ship.deploy(placement.orientation, placement.coordinates)?;
        for (coord, segment) in ship.segments() {
            grid.set(coord, Cell::Ship { id: index, segment });
        }
        if options.gaps {
            allocate_buffer(grid, ship.coordinates());
        }
        trace!("deployed {:?}", ship);
    }
    grid.clear_buffers();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::ShipSpec;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn one_by_one_grid_holds_a_tug() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut grid = Grid::new(1, 1);
        let mut fleet = Fleet::from_specs(&[ShipSpec::new("TugBoat", 1, 1)]);
        deploy_fleet(&mut grid, &mut fleet, &DeployOptions::default(), &mut rng).unwrap();
        assert!(fleet.all_deployed());
        assert_eq!(grid.ship_cells(), 1);
    }

    #[test]
    fn gaps_make_a_tight_fit_fail() {
        // Two tugs on a 1x2 strip only fit when touching.
        let specs = [ShipSpec::new("TugBoat", 1, 2)];
        let mut rng = SmallRng::seed_from_u64(5);

        let mut grid = Grid::new(1, 2);
        let mut fleet = Fleet::from_specs(&specs);
        let err = deploy_fleet(&mut grid, &mut fleet, &DeployOptions::with_gaps(true), &mut rng);
        assert_eq!(err, Err(DeployError::PlacementExhausted { size: 1 }));

        let mut grid = Grid::new(1, 2);
        let mut fleet = Fleet::from_specs(&specs);
        deploy_fleet(&mut grid, &mut fleet, &DeployOptions::with_gaps(false), &mut rng).unwrap();
        assert_eq!(grid.ship_cells(), 2);
    }

    #[test]
    fn success_leaves_no_buffer() {
        let mut rng = SmallRng::seed_from_u64(11);
        let template = Fleet::from_specs(&crate::config::DEFAULT_FLEET);
        let mut successes = 0;
        for _ in 0..50 {
            let mut grid = Grid::new(10, 10);
            let mut fleet = template.fresh();
            if deploy_fleet(&mut grid, &mut fleet, &DeployOptions::default(), &mut rng).is_ok() {
                assert_eq!(grid.count(Cell::Buffer), 0);
                assert_eq!(grid.ship_cells(), fleet.total_cells());
                successes += 1;
            }
        }
        assert!(successes > 0);
    }
}
