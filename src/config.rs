use crate::ship::ShipSpec;

pub const DEFAULT_MAP_HEIGHT: usize = 10;
pub const DEFAULT_MAP_WIDTH: usize = 10;
pub const DEFAULT_FREE_SYMBOL: char = '?';
pub const DEFAULT_GAPS_BETWEEN_SHIPS: bool = true;

/// Longest side a map may have.
pub const MAX_MAP_SIDE: usize = 100;
/// Largest number of cells a map may have.
pub const MAX_MAP_CELLS: usize = MAX_MAP_SIDE * MAX_MAP_SIDE;

/// Number of fresh deployment attempts the oracle makes before giving up.
pub const MAX_DEPLOY_ATTEMPTS: usize = 50;

pub const NUM_DEFAULT_RECORDS: usize = 6;
pub const DEFAULT_FLEET: [ShipSpec; NUM_DEFAULT_RECORDS] = [
    ShipSpec::new("AircraftCarrier", 5, 1),
    ShipSpec::new("Battleship", 4, 1),
    ShipSpec::new("Cruiser", 3, 1),
    ShipSpec::new("Submarine", 3, 1),
    ShipSpec::new("Destroyer", 2, 2),
    ShipSpec::new("TugBoat", 1, 4),
];

/// Total number of ship cells in the default fleet.
pub const DEFAULT_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2 * 2 + 4;
