//! Fleet deployment for Battleship-style games.
//!
//! Places a fleet of straight ships onto a rectangular grid with random but valid
//! positions, and decides whether a map size and fleet composition can be used at
//! all before a settings screen commits to them.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod deploy;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod oracle;
mod placement;
pub mod prelude;
mod search;
mod settings;
mod ship;
mod symbols;

pub use common::*;
pub use config::*;
pub use deploy::*;
pub use fleet::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use oracle::*;
pub use placement::*;
pub use search::*;
pub use settings::*;
pub use ship::*;
pub use symbols::*;
