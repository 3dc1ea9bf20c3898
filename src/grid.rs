//! Playing grid: cell states, occupancy bookkeeping and shot resolution.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{GridError, ShotResult};
use crate::position::Position;
use crate::vessel::Vessel;

/// Display state of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Untouched water.
    Empty,
    /// Covered by a vessel hull.
    Occupied,
    /// A shot that struck a vessel.
    Hit,
    /// A shot that struck water.
    Miss,
    /// Water bordering a destroyed vessel, revealed when it sank.
    Buffer,
}

/// One player's playing surface.
///
/// Holds a `size`×`size` matrix of cell states, the vessels placed on it,
/// and the set of busy squares no future shot or placement may use. A
/// grid is populated once by fleet placement and afterwards mutated only
/// by shots directed at it.
pub struct Grid {
    size: i32,
    concealed: bool,
    cells: Vec<CellState>,
    busy: Vec<Position>,
    vessels: Vec<Vessel>,
    destroyed: usize,
}

impl Grid {
    /// An empty grid. `concealed` marks the grid for renderers that must
    /// not reveal vessel positions to the opposing player.
    pub fn new(size: i32, concealed: bool) -> Self {
        Grid {
            size,
            concealed,
            cells: vec![CellState::Empty; (size * size) as usize],
            busy: Vec::new(),
            vessels: Vec::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn concealed(&self) -> bool {
        self.concealed
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels destroyed so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Whether the whole fleet on this grid has been destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    /// Whether `p` lies outside the grid.
    pub fn is_out(&self, p: Position) -> bool {
        !(0 <= p.x && p.x < self.size && 0 <= p.y && p.y < self.size)
    }

    /// State of the square at `p`, or `None` off the grid.
    pub fn cell(&self, p: Position) -> Option<CellState> {
        if self.is_out(p) {
            None
        } else {
            Some(self.cells[self.index(p)])
        }
    }

    fn index(&self, p: Position) -> usize {
        (p.x * self.size + p.y) as usize
    }

    fn set_cell(&mut self, p: Position, state: CellState) {
        let idx = self.index(p);
        self.cells[idx] = state;
    }

    fn is_busy(&self, p: Position) -> bool {
        self.busy.contains(&p)
    }

    /// Place a vessel, marking its squares occupied and reserving the ring
    /// of bordering squares so no later placement can touch the hull.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), GridError> {
        for cell in vessel.cells() {
            if self.is_out(cell) || self.is_busy(cell) {
                return Err(GridError::InvalidPlacement);
            }
        }
        for cell in vessel.cells() {
            self.set_cell(cell, CellState::Occupied);
            self.busy.push(cell);
        }
        self.vessels.push(vessel);
        self.reserve_buffer(&vessel, false);
        Ok(())
    }

    // Reserve the ring of squares around a hull. `paint` additionally
    // marks the ring visible, used once the vessel has been destroyed.
    fn reserve_buffer(&mut self, vessel: &Vessel, paint: bool) {
        for cell in vessel.cells() {
            for near in cell.neighborhood() {
                if !self.is_out(near) && !self.is_busy(near) {
                    if paint {
                        self.set_cell(near, CellState::Buffer);
                    }
                    self.busy.push(near);
                }
            }
        }
    }

    /// Resolve a shot at `p`, updating cell states, hit points and the
    /// destroyed counter. Every accepted shot spends its square for the
    /// rest of the match.
    pub fn resolve_shot(&mut self, p: Position) -> Result<ShotResult, GridError> {
        if self.is_out(p) {
            return Err(GridError::OutOfBounds);
        }
        if self.is_busy(p) {
            return Err(GridError::AlreadyTargeted);
        }
        self.busy.push(p);

        if let Some(i) = self.vessels.iter().position(|v| v.is_hit_by(p)) {
            self.vessels[i].take_hit();
            self.set_cell(p, CellState::Hit);
            if self.vessels[i].is_destroyed() {
                self.destroyed += 1;
                let sunk = self.vessels[i];
                self.reserve_buffer(&sunk, true);
                return Ok(ShotResult::Sunk);
            }
            return Ok(ShotResult::Hit);
        }

        self.set_cell(p, CellState::Miss);
        Ok(ShotResult::Miss)
    }

    /// Forget placement bookkeeping so play starts with a clean shot
    /// history. Vessels and cell states are untouched.
    pub fn reset_targeting(&mut self) {
        self.busy.clear();
    }
}
