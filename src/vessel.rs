//! Vessels: straight runs of grid squares with hit points.

use crate::position::Position;

/// Axis a vessel extends along from its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Consecutive squares advance along `x`.
    Horizontal,
    /// Consecutive squares advance along `y`.
    Vertical,
}

/// A straight run of squares with hit points equal to its length.
///
/// A vessel belongs to exactly one grid. The grid decrements its hit
/// points when resolving shots; the vessel itself only answers geometry
/// questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Position,
    length: i32,
    orientation: Orientation,
    hit_points: i32,
}

impl Vessel {
    /// A fresh vessel with full hit points.
    pub fn new(bow: Position, length: i32, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        Vessel {
            bow,
            length,
            orientation,
            hit_points: length,
        }
    }

    pub fn bow(&self) -> Position {
        self.bow
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Squares covered by the hull, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Vessel {
            bow,
            length,
            orientation,
            ..
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => Position::new(bow.x + i, bow.y),
            Orientation::Vertical => Position::new(bow.x, bow.y + i),
        })
    }

    /// Whether `target` lies on the hull.
    pub fn is_hit_by(&self, target: Position) -> bool {
        self.cells().any(|cell| cell == target)
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    /// A vessel with no hit points left is destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    // Called by the owning grid when it confirms a hit.
    pub(crate) fn take_hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }
}
