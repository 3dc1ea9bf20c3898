#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod position;
#[cfg(feature = "std")]
pub mod ui;
mod vessel;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use position::*;
pub use vessel::*;
