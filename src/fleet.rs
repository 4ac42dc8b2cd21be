//! An ordered collection of ships built from a configuration table.

use alloc::vec::Vec;

use crate::ship::{Ship, ShipSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// One undeployed ship per unit of quantity, in table order.
    pub fn from_specs(specs: &[ShipSpec]) -> Self {
        let ships = specs
            .iter()
            .flat_map(|spec| {
                (0..spec.quantity).map(move |_| Ship::new(spec.name.clone(), spec.size))
            })
            .collect();
        Fleet { ships }
    }

    /// A copy of this fleet with every ship undeployed.
    pub fn fresh(&self) -> Self {
        Fleet {
            ships: self.ships.iter().map(Ship::undeployed).collect(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Index of the largest ship not yet deployed. Ties go to the earliest ship.
    pub fn largest_undeployed(&self) -> Option<usize> {
        self.ships
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_deployed())
            // max_by_key keeps the last maximum, so compare on reversed index too
            .max_by_key(|(i, s)| (s.size(), core::cmp::Reverse(*i)))
            .map(|(i, _)| i)
    }

    pub fn all_deployed(&self) -> bool {
        self.ships.iter().all(Ship::is_deployed)
    }

    /// Number of ships carrying `name`.
    pub fn count_by_name(&self, name: &str) -> usize {
        self.ships.iter().filter(|s| s.name() == name).count()
    }

    /// Distinct ship names in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for ship in &self.ships {
            if !names.contains(&ship.name()) {
                names.push(ship.name());
            }
        }
        names
    }

    /// Sum of all ship sizes.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }
}
