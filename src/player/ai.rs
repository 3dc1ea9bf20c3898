use rand::rngs::SmallRng;
use rand::Rng;

use super::Player;
use crate::position::Position;

/// Automated player that fires uniformly at random.
///
/// It keeps no record of its own shots; squares already tried are simply
/// rejected by the opposing grid and redrawn. That weakness is the
/// intended difficulty level.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, size: i32) -> Position {
        Position::new(rng.random_range(0..size), rng.random_range(0..size))
    }
}
