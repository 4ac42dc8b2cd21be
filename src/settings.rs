//! Live game settings. Every edit is checked against the oracle before it is applied.

use alloc::string::String;
use alloc::vec::Vec;
use log::{info, warn};
use rand::Rng;

use crate::common::SettingsError;
use crate::config::{
    DEFAULT_FLEET, DEFAULT_GAPS_BETWEEN_SHIPS, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, MAX_MAP_SIDE,
};
use crate::deploy::DeployOptions;
use crate::oracle::{find_deployment, Deployment};
use crate::placement::OrientationPolicy;
use crate::ship::ShipSpec;
use crate::symbols::SymbolSet;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub height: usize,
    pub width: usize,
    pub fleet: Vec<ShipSpec>,
    pub gaps: bool,
    pub symbols: SymbolSet,
    pub orientation: OrientationPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            height: DEFAULT_MAP_HEIGHT,
            width: DEFAULT_MAP_WIDTH,
            fleet: DEFAULT_FLEET.to_vec(),
            gaps: DEFAULT_GAPS_BETWEEN_SHIPS,
            symbols: SymbolSet::default(),
            orientation: OrientationPolicy::default(),
        }
    }
}

impl Settings {
    pub fn options(&self) -> DeployOptions {
        DeployOptions {
            gaps: self.gaps,
            symbols: self.symbols,
            orientation: self.orientation,
            ..DeployOptions::default()
        }
    }

    /// Total number of ships.
    pub fn ship_count(&self) -> usize {
        self.fleet.iter().map(|s| s.quantity).sum()
    }

    /// Total number of ship cells.
    pub fn ship_cells(&self) -> usize {
        self.fleet.iter().map(ShipSpec::cells).sum()
    }

    /// Deploy the current fleet for a new game.
    pub fn deploy<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deployment, SettingsError> {
        Ok(find_deployment(self.height, self.width, &self.fleet, &self.options(), rng)?)
    }

    pub fn resize_map<R: Rng + ?Sized>(
        &mut self,
        height: usize,
        width: usize,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        if height == 0 || width == 0 {
            return Err(SettingsError::InvalidValue("map dimensions must be positive"));
        }
        if height > MAX_MAP_SIDE || width > MAX_MAP_SIDE {
            return Err(SettingsError::InvalidValue("map side is too long"));
        }
        let mut candidate = self.clone();
        candidate.height = height;
        candidate.width = width;
        self.commit(candidate, rng)
    }

    /// Add ships. A record with the same name and size absorbs the quantity.
    pub fn add_ship<R: Rng + ?Sized>(
        &mut self,
        spec: ShipSpec,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        if spec.size == 0 {
            return Err(SettingsError::InvalidValue("ship size must be positive"));
        }
        if spec.quantity == 0 {
            return Err(SettingsError::InvalidValue("ship quantity must be positive"));
        }
        let mut candidate = self.clone();
        match candidate
            .fleet
            .iter_mut()
            .find(|s| s.name == spec.name && s.size == spec.size)
        {
            Some(existing) => existing.quantity += spec.quantity,
            None => candidate.fleet.push(spec),
        }
        self.commit(candidate, rng)
    }

    /// Remove one ship from the first record named `name`.
    pub fn remove_ship<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        if self.ship_count() <= 1 {
            return Err(SettingsError::InvalidValue("fleet needs at least one ship"));
        }
        let mut candidate = self.clone();
        let index = candidate.position(name)?;
        candidate.fleet[index].quantity -= 1;
        if candidate.fleet[index].quantity == 0 {
            candidate.fleet.remove(index);
        }
        self.commit(candidate, rng)
    }

    /// Change the size of every ship named `name`, across all records with that name.
    pub fn resize_ship<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        size: usize,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        if size == 0 {
            return Err(SettingsError::InvalidValue("ship size must be positive"));
        }
        let mut candidate = self.clone();
        candidate.position(name)?;
        for spec in candidate.fleet.iter_mut().filter(|s| s.name == name) {
            spec.size = size;
        }
        self.commit(candidate, rng)
    }

    /// Set the quantity of the first record named `name`. Other records sharing the
    /// name keep their quantity.
    pub fn set_quantity<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        quantity: usize,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        if quantity == 0 {
            return Err(SettingsError::InvalidValue("ship quantity must be positive"));
        }
        let mut candidate = self.clone();
        let index = candidate.position(name)?;
        candidate.fleet[index].quantity = quantity;
        self.commit(candidate, rng)
    }

    pub fn set_gaps<R: Rng + ?Sized>(
        &mut self,
        gaps: bool,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        let mut candidate = self.clone();
        candidate.gaps = gaps;
        self.commit(candidate, rng)
    }

    fn position(&self, name: &str) -> Result<usize, SettingsError> {
        self.fleet
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| SettingsError::UnknownShip(String::from(name)))
    }

    fn commit<R: Rng + ?Sized>(
        &mut self,
        candidate: Settings,
        rng: &mut R,
    ) -> Result<(), SettingsError> {
        match candidate.deploy(rng) {
            Ok(d) => {
                info!(
                    "settings updated: {}x{}, {} ships, gaps={} (fit on attempt {})",
                    candidate.height,
                    candidate.width,
                    candidate.ship_count(),
                    candidate.gaps,
                    d.attempts
                );
                *self = candidate;
                Ok(())
            }
            Err(e) => {
                warn!("settings change rejected: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn rejected_resize_leaves_settings_untouched() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut settings = Settings::default();
        let before = settings.clone();
        let err = settings.resize_map(3, 3, &mut rng).unwrap_err();
        assert!(matches!(err, SettingsError::Deploy(crate::DeployError::Infeasible { .. })));
        assert_eq!(settings, before);
    }

    #[test]
    fn remove_drops_empty_record() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut settings = Settings::default();
        settings.remove_ship("Battleship", &mut rng).unwrap();
        assert!(settings.fleet.iter().all(|s| s.name != "Battleship"));
        settings.remove_ship("TugBoat", &mut rng).unwrap();
        assert_eq!(settings.fleet.iter().find(|s| s.name == "TugBoat").unwrap().quantity, 3);
        assert_eq!(
            settings.remove_ship("Dinghy", &mut rng),
            Err(SettingsError::UnknownShip("Dinghy".into()))
        );
    }
}
