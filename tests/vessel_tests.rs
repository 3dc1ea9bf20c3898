use seabattle::{Orientation, Position, Vessel};

#[test]
fn horizontal_cells_advance_along_x() {
    let vessel = Vessel::new(Position::new(0, 0), 3, Orientation::Horizontal);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(
        cells,
        vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
    );
}

#[test]
fn vertical_cells_advance_along_y() {
    let vessel = Vessel::new(Position::new(2, 1), 2, Orientation::Vertical);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(cells, vec![Position::new(2, 1), Position::new(2, 2)]);
}

#[test]
fn is_hit_by_matches_hull_cells_only() {
    let vessel = Vessel::new(Position::new(1, 1), 2, Orientation::Horizontal);
    assert!(vessel.is_hit_by(Position::new(1, 1)));
    assert!(vessel.is_hit_by(Position::new(2, 1)));
    assert!(!vessel.is_hit_by(Position::new(3, 1)));
    assert!(!vessel.is_hit_by(Position::new(1, 2)));
}

#[test]
fn fresh_vessel_has_full_hit_points() {
    let vessel = Vessel::new(Position::new(0, 0), 3, Orientation::Vertical);
    assert_eq!(vessel.hit_points(), 3);
    assert!(!vessel.is_destroyed());
}
