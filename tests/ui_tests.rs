use seabattle::{ui, Grid, Orientation, Position, ShotResult, Vessel};

fn grid_with_vessel(concealed: bool) -> Grid {
    let mut grid = Grid::new(6, concealed);
    grid.place(Vessel::new(Position::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    grid.reset_targeting();
    grid
}

#[test]
fn renders_the_numbered_board_layout() {
    let drawn = ui::render_grid(&grid_with_vessel(false));
    let mut lines = drawn.lines();
    assert_eq!(lines.next(), Some("  | 1 | 2 | 3 | 4 | 5 | 6 |"));
    assert_eq!(lines.next(), Some("1 | ■ | O | O | O | O | O |"));
    assert_eq!(lines.next(), Some("2 | ■ | O | O | O | O | O |"));
    assert_eq!(drawn.lines().count(), 7);
}

#[test]
fn concealed_grids_hide_their_vessels() {
    assert!(ui::render_grid(&grid_with_vessel(false)).contains('■'));
    assert!(!ui::render_grid(&grid_with_vessel(true)).contains('■'));
}

#[test]
fn hits_and_misses_always_show() {
    let mut grid = grid_with_vessel(true);
    grid.resolve_shot(Position::new(0, 0)).unwrap();
    grid.resolve_shot(Position::new(5, 5)).unwrap();
    let drawn = ui::render_grid(&grid);
    assert!(drawn.contains('X'));
    assert!(drawn.contains('.'));
}

#[test]
fn shot_results_have_distinct_descriptions() {
    assert_eq!(ui::describe_shot(ShotResult::Miss), "Miss!");
    assert_eq!(ui::describe_shot(ShotResult::Hit), "Vessel damaged!");
    assert_eq!(ui::describe_shot(ShotResult::Sunk), "Vessel destroyed!");
}
