//! Randomized fleet placement with a global retry budget.

use log::debug;
use rand::Rng;

use crate::config::{FLEET, PLACEMENT_ATTEMPT_CAP};
use crate::grid::Grid;
use crate::position::Position;
use crate::vessel::{Orientation, Vessel};

/// Attempt to lay out one full fleet on an empty grid.
///
/// Each vessel is dropped at a random bow and orientation until it fits.
/// Returns `None` once the shared attempt budget is spent, telling the
/// caller to restart from an empty grid instead of looping on an unlucky
/// sequence of placements.
pub fn try_place_fleet<R: Rng + ?Sized>(rng: &mut R, size: i32, concealed: bool) -> Option<Grid> {
    let mut grid = Grid::new(size, concealed);
    let mut attempts: u32 = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPT_CAP {
                debug!("abandoning board after {} placement attempts", attempts);
                return None;
            }
            let bow = Position::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if grid.place(Vessel::new(bow, length, orientation)).is_ok() {
                break;
            }
        }
    }
    grid.reset_targeting();
    debug!("fleet placed in {} attempts", attempts);
    Some(grid)
}

/// Lay out a fleet, restarting from an empty grid whenever the attempt
/// budget runs out.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R, size: i32, concealed: bool) -> Grid {
    loop {
        if let Some(grid) = try_place_fleet(rng, size, concealed) {
            return grid;
        }
    }
}
