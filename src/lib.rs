#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod battle;
mod common;
mod config;
mod coordinate;
mod grid;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
mod scenario;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use battle::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use scenario::*;
pub use ship::*;
