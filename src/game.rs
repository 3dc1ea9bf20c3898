//! Match control: turn alternation, the extra-turn rule and win detection.

use alloc::boxed::Box;

use log::trace;
use rand::rngs::SmallRng;

use crate::common::ShotResult;
use crate::grid::Grid;
use crate::player::Player;
use crate::position::Position;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Side that fired.
    pub side: Side,
    /// Square finally struck, after any rejected attempts.
    pub target: Position,
    pub result: ShotResult,
    /// The same side moves again.
    pub extra_turn: bool,
    /// Set as soon as the defending fleet is wiped out.
    pub winner: Option<Side>,
}

/// Two players, two grids and a turn counter.
///
/// Each side's player fires at the other side's grid. A hit or a sink
/// keeps the turn; a miss passes it. The match is over the moment either
/// grid loses its whole fleet.
pub struct Game {
    players: [Box<dyn Player>; 2],
    grids: [Grid; 2],
    turn: usize,
    steps: usize,
}

impl Game {
    /// Wire players to grids. `players[0]` defends `grids[0]` and fires at
    /// `grids[1]`, and vice versa. Side One moves first.
    pub fn new(players: [Box<dyn Player>; 2], grids: [Grid; 2]) -> Self {
        Game {
            players,
            grids,
            turn: 0,
            steps: 0,
        }
    }

    /// Grid defended by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    /// Number of shots resolved so far, extra turns included.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Side due to fire next.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::One
        } else {
            Side::Two
        }
    }

    /// Winner, if either fleet has been wiped out.
    pub fn winner(&self) -> Option<Side> {
        if self.grids[Side::One.index()].all_destroyed() {
            Some(Side::Two)
        } else if self.grids[Side::Two.index()].all_destroyed() {
            Some(Side::One)
        } else {
            None
        }
    }

    /// Let the active side fire once. Returns `None` when the match is
    /// already decided; no further shots are fired then.
    pub fn step(&mut self, rng: &mut SmallRng) -> Option<TurnOutcome> {
        if self.winner().is_some() {
            return None;
        }
        let side = self.active_side();
        let (target, result) =
            self.players[side.index()].play_turn(rng, &mut self.grids[side.opponent().index()]);
        trace!("{:?} fired at {}: {:?}", side, target, result);
        self.steps += 1;
        let extra_turn = result.grants_extra_turn();
        if !extra_turn {
            self.turn += 1;
        }
        Some(TurnOutcome {
            side,
            target,
            result,
            extra_turn,
            winner: self.winner(),
        })
    }

    /// Run to completion and return the winning side.
    pub fn play(&mut self, rng: &mut SmallRng) -> Side {
        loop {
            if let Some(winner) = self.winner() {
                return winner;
            }
            self.step(rng);
        }
    }
}
