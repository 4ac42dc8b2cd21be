//! Commonly used types and utilities for ease of import.

pub use crate::{
    find_deployment, is_feasible, Coordinate, DeployError, DeployOptions, Deployment, Fleet,
    Grid, Orientation, Settings, SettingsError, ShipSpec, SymbolSet, DEFAULT_FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
