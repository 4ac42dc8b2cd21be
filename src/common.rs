//! Common types for fleet deployment: coordinates, orientations and errors.

use alloc::string::String;
use core::fmt;

/// A (row, column) position on a grid, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// In-bounds 8-neighbours (including diagonals) on a `height`×`width` grid.
    pub fn neighbors(self, height: usize, width: usize) -> impl Iterator<Item = Coordinate> {
        let rows = self.row.saturating_sub(1)..=(self.row + 1).min(height.saturating_sub(1));
        let cols = self.col.saturating_sub(1)..=(self.col + 1).min(width.saturating_sub(1));
        rows.flat_map(move |r| cols.clone().map(move |c| Coordinate::new(r, c)))
            .filter(move |c| *c != self)
    }

    /// Returns `true` if the two coordinates touch by edge or corner.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// One-cell ship. Only valid for size 1.
    Single,
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Height and width of the block a ship of `size` covers in this orientation.
    pub fn extent(self, size: usize) -> (usize, usize) {
        match self {
            Orientation::Single => (1, 1),
            Orientation::Horizontal => (1, size),
            Orientation::Vertical => (size, 1),
        }
    }

    /// The other axis of a multi-cell ship. `Single` maps to itself.
    pub fn flip(self) -> Self {
        match self {
            Orientation::Single => Orientation::Single,
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Part of a ship a grid cell holds. The bow is the top-left end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Single,
    Bow(Orientation),
    Hull(Orientation),
}

/// Errors returned by placement, deployment and the feasibility oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    /// No free block on the current grid fits a ship of this size.
    PlacementExhausted { size: usize },
    /// Every attempt in the retry budget failed.
    Infeasible { attempts: usize },
    /// Grid dimensions or fleet configuration violate a precondition.
    InvalidFleet(&'static str),
    /// A ship was given a coordinate list of the wrong length.
    CoordinateCount { expected: usize, actual: usize },
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::PlacementExhausted { size } => {
                write!(f, "No room left for a ship of size {}", size)
            }
            DeployError::Infeasible { attempts } => write!(
                f,
                "Fleet does not fit on the map ({} attempts); \
                 choose smaller or fewer ships or a larger map",
                attempts
            ),
            DeployError::InvalidFleet(reason) => write!(f, "Invalid configuration: {}", reason),
            DeployError::CoordinateCount { expected, actual } => write!(
                f,
                "Ship needs {} coordinates but was given {}",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeployError {}

/// Errors returned when editing [`crate::Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The candidate configuration could not be deployed.
    Deploy(DeployError),
    /// No ship with this name is in the fleet.
    UnknownShip(String),
    /// A size, quantity or dimension was out of range.
    InvalidValue(&'static str),
}

impl From<DeployError> for SettingsError {
    fn from(err: DeployError) -> Self {
        SettingsError::Deploy(err)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Deploy(e) => write!(f, "{}", e),
            SettingsError::UnknownShip(name) => write!(f, "No ship named '{}' in the fleet", name),
            SettingsError::InvalidValue(reason) => write!(f, "Invalid value: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let n: Vec<_> = Coordinate::new(0, 0).neighbors(5, 5).collect();
        assert_eq!(
            n,
            [(0, 1), (1, 0), (1, 1)].map(Coordinate::from).to_vec()
        );
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(Coordinate::new(2, 2).neighbors(5, 5).count(), 8);
        assert_eq!(Coordinate::new(0, 0).neighbors(1, 1).count(), 0);
    }

    #[test]
    fn adjacency_includes_diagonals() {
        let c = Coordinate::new(3, 3);
        assert!(c.is_adjacent(Coordinate::new(4, 4)));
        assert!(c.is_adjacent(Coordinate::new(2, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinate::new(5, 3)));
    }
}
