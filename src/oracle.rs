//! Bounded-retry feasibility check for a (grid size, fleet) pair.
//!
//! Placement is randomized, so one failed attempt proves nothing. The oracle
//! retries on a fresh grid and a fresh fleet until an attempt succeeds or the
//! budget runs out. A reported success is always a real deployment; a reported
//! failure may, rarely, be wrong for very tight configurations.

use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::Rng;

use crate::common::{DeployError, Orientation};
use crate::config::{MAX_MAP_CELLS, MAX_MAP_SIDE};
use crate::deploy::{deploy_fleet, DeployOptions};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::ship::ShipSpec;

/// A successful deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub grid: Grid,
    pub fleet: Fleet,
    /// Attempt number that succeeded, starting at 1.
    pub attempts: usize,
}

impl Deployment {
    /// Raw symbol rows for the presentation layer.
    pub fn symbols(&self, options: &DeployOptions) -> Vec<Vec<char>> {
        self.grid.to_symbols(&options.symbols)
    }

    /// Number of deployed ships with each orientation: (single, horizontal, vertical).
    pub fn orientation_counts(&self) -> (usize, usize, usize) {
        self.fleet
            .ships()
            .iter()
            .fold((0, 0, 0), |(s, h, v), ship| match ship.orientation() {
                Some(Orientation::Single) => (s + 1, h, v),
                Some(Orientation::Horizontal) => (s, h + 1, v),
                Some(Orientation::Vertical) => (s, h, v + 1),
                None => (s, h, v),
            })
    }
}

/// Reject configurations the core does not accept.
pub fn validate(height: usize, width: usize, specs: &[ShipSpec]) -> Result<(), DeployError> {
    if height == 0 || width == 0 {
        return Err(DeployError::InvalidFleet("map dimensions must be positive"));
    }
    if height > MAX_MAP_SIDE || width > MAX_MAP_SIDE {
        return Err(DeployError::InvalidFleet("map side is too long"));
    }
    match height.checked_mul(width) {
        Some(cells) if cells <= MAX_MAP_CELLS => {}
        _ => return Err(DeployError::InvalidFleet("map has too many cells")),
    }
    if specs.iter().all(|s| s.quantity == 0) {
        return Err(DeployError::InvalidFleet("fleet is empty"));
    }
    if specs.iter().any(|s| s.size == 0) {
        return Err(DeployError::InvalidFleet("ship size must be positive"));
    }
    if specs.iter().any(|s| s.quantity == 0) {
        return Err(DeployError::InvalidFleet("ship quantity must be positive"));
    }
    Ok(())
}

/// Try up to `options.max_attempts` fresh deployments and return the first that works.
///
/// Never touches caller state: every attempt builds its own grid and fleet.
pub fn find_deployment<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    specs: &[ShipSpec],
    options: &DeployOptions,
    rng: &mut R,
) -> Result<Deployment, DeployError> {
    validate(height, width, specs)?;
    let template = Fleet::from_specs(specs);

    for attempt in 1..=options.max_attempts {
        let mut grid = Grid::new(height, width);
        let mut fleet = template.fresh();
        match deploy_fleet(&mut grid, &mut fleet, options, rng) {
            Ok(()) => {
                debug!(
                    "{} ships on {}x{} deployed on attempt {}",
                    fleet.len(),
                    height,
                    width,
                    attempt
                );
                return Ok(Deployment {
                    grid,
                    fleet,
                    attempts: attempt,
                });
            }
            Err(DeployError::PlacementExhausted { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    warn!(
        "{} ships ({} cells) do not fit on {}x{} after {} attempts",
        template.len(),
        template.total_cells(),
        height,
        width,
        options.max_attempts
    );
    Err(DeployError::Infeasible {
        attempts: options.max_attempts,
    })
}

/// `true` if [`find_deployment`] succeeds for this configuration.
pub fn is_feasible<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    specs: &[ShipSpec],
    options: &DeployOptions,
    rng: &mut R,
) -> bool {
    let feasible = find_deployment(height, width, specs, options, rng).is_ok();
    info!("{}x{} with {} ship types: feasible={}", height, width, specs.len(), feasible);
    feasible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FLEET;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_fleet_fits_default_map() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let d = find_deployment(10, 10, &DEFAULT_FLEET, &DeployOptions::default(), &mut rng)
            .unwrap();
        assert!(d.attempts >= 1 && d.attempts <= 50);
        assert!(d.fleet.all_deployed());
        let (single, h, v) = d.orientation_counts();
        assert_eq!(single, 4);
        assert_eq!(h + v, 6);
    }

    #[test]
    fn carrier_never_fits_three_by_three() {
        let mut rng = SmallRng::seed_from_u64(1);
        let specs = [ShipSpec::new("Carrier", 5, 1)];
        assert_eq!(
            find_deployment(3, 3, &specs, &DeployOptions::default(), &mut rng),
            Err(DeployError::Infeasible { attempts: 50 })
        );
    }

    #[test]
    fn malformed_configuration_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let opts = DeployOptions::default();
        let tug = [ShipSpec::new("TugBoat", 1, 1)];
        assert!(matches!(
            find_deployment(0, 5, &tug, &opts, &mut rng),
            Err(DeployError::InvalidFleet(_))
        ));
        assert!(matches!(
            find_deployment(usize::MAX, 2, &tug, &opts, &mut rng),
            Err(DeployError::InvalidFleet(_))
        ));
        assert!(matches!(
            find_deployment(MAX_MAP_SIDE + 1, 1, &tug, &opts, &mut rng),
            Err(DeployError::InvalidFleet(_))
        ));
        assert!(find_deployment(MAX_MAP_SIDE, MAX_MAP_SIDE, &tug, &opts, &mut rng).is_ok());
        assert!(matches!(
            find_deployment(5, 5, &[], &opts, &mut rng),
            Err(DeployError::InvalidFleet(_))
        ));
        assert!(matches!(
            find_deployment(5, 5, &[ShipSpec::new("Ghost", 0, 1)], &opts, &mut rng),
            Err(DeployError::InvalidFleet(_))
        ));
    }
}
