//! Players: target selection strategies and the shared firing loop.

use rand::rngs::SmallRng;

use crate::common::{GridError, ShotResult};
use crate::grid::Grid;
use crate::position::Position;

mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, CliPlayer};

/// Interface implemented by the different player kinds.
pub trait Player {
    /// Choose the next square to fire at on a `size`×`size` opposing grid.
    fn choose_target(&mut self, rng: &mut SmallRng, size: i32) -> Position;

    /// Called when a chosen square is rejected by the opposing grid.
    fn notify_rejected(&mut self, _target: Position, _error: &GridError) {}

    /// Fire at the opposing grid until a shot lands, retrying rejected
    /// squares. Returns the square finally struck and its result; whether
    /// the shooter keeps the turn is the caller's business.
    fn play_turn(&mut self, rng: &mut SmallRng, enemy: &mut Grid) -> (Position, ShotResult) {
        loop {
            let target = self.choose_target(rng, enemy.size());
            match enemy.resolve_shot(target) {
                Ok(result) => return (target, result),
                Err(error) => self.notify_rejected(target, &error),
            }
        }
    }
}
