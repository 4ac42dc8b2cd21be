//! Ship configuration records and deployable ships.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coordinate, DeployError, Orientation, Segment};

/// One row of a fleet configuration table: `quantity` ships named `name` of `size` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub name: Cow<'static, str>,
    pub size: usize,
    pub quantity: usize,
}

impl ShipSpec {
    /// Create a configuration record from a static name.
    pub const fn new(name: &'static str, size: usize, quantity: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            size,
            quantity,
        }
    }

    /// Create a configuration record from a runtime name.
    pub fn named(name: impl Into<String>, size: usize, quantity: usize) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            size,
            quantity,
        }
    }

    /// Number of grid cells this record demands in total.
    pub fn cells(&self) -> usize {
        self.size * self.quantity
    }
}

/// A ship that is either waiting to be deployed or sits at fixed coordinates.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    name: Cow<'static, str>,
    size: usize,
    orientation: Option<Orientation>,
    coordinates: Vec<Coordinate>,
}

impl Ship {
    /// A new, undeployed ship.
    pub fn new(name: Cow<'static, str>, size: usize) -> Self {
        Self {
            name,
            size,
            orientation: None,
            coordinates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Orientation, once deployed.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Grid cells the ship occupies, bow first. Empty until deployed.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn is_deployed(&self) -> bool {
        self.orientation.is_some()
    }

    /// Record the ship's final position.
    ///
    /// Fails without touching the ship unless exactly `size` coordinates are given.
    pub fn deploy(
        &mut self,
        orientation: Orientation,
        coordinates: Vec<Coordinate>,
    ) -> Result<(), DeployError> {
        if coordinates.len() != self.size {
            return Err(DeployError::CoordinateCount {
                expected: self.size,
                actual: coordinates.len(),
            });
        }
        self.orientation = Some(orientation);
        self.coordinates = coordinates;
        Ok(())
    }

    /// Same ship, back in the undeployed state.
    pub fn undeployed(&self) -> Self {
        Ship::new(self.name.clone(), self.size)
    }

    /// Segment shown at each of the ship's coordinates, in order.
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Segment)> + '_ {
        let orientation = self.orientation.unwrap_or(Orientation::Single);
        self.coordinates.iter().enumerate().map(move |(i, &c)| {
            let segment = match (orientation, i) {
                (Orientation::Single, _) => Segment::Single,
                (o, 0) => Segment::Bow(o),
                (o, _) => Segment::Hull(o),
            };
            (c, segment)
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, orientation: {:?}, coordinates: {:?} }}",
            self.name, self.size, self.orientation, self.coordinates,
        )
    }
}

/// Coordinates covered by a ship of `size` anchored at `anchor`, bow first.
pub fn expand(anchor: Coordinate, orientation: Orientation, size: usize) -> Vec<Coordinate> {
    (0..size)
        .map(|i| match orientation {
            Orientation::Single => anchor,
            Orientation::Horizontal => Coordinate::new(anchor.row, anchor.col + i),
            Orientation::Vertical => Coordinate::new(anchor.row + i, anchor.col),
        })
        .collect()
}
