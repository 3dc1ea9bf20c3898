//! Shot outcomes and grid errors shared across the crate.

use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot struck open water.
    Miss,
    /// Shot struck a vessel that is still afloat.
    Hit,
    /// Shot removed the last intact square of a vessel.
    Sunk,
}

impl ShotResult {
    /// Hits and sinks grant the shooter another immediate turn.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by grid operations. Each one is recoverable by retrying
/// with a different target or placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot at or is otherwise spent.
    AlreadyTargeted,
    /// Vessel placement leaves the grid or collides with a reserved square.
    InvalidPlacement,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds => write!(f, "that square is off the grid"),
            GridError::AlreadyTargeted => write!(f, "that square has already been targeted"),
            GridError::InvalidPlacement => write!(f, "the vessel does not fit there"),
        }
    }
}
