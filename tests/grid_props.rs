use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    try_place_fleet, CellState, Grid, GridError, Position, FLEET, FLEET_SIZE, GRID_SIZE,
};

fn placed_grid(seed: u64) -> Option<Grid> {
    let mut rng = SmallRng::seed_from_u64(seed);
    try_place_fleet(&mut rng, GRID_SIZE, false)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A board is either abandoned inside the attempt budget or fully
    /// legal: every hull square in bounds, the right number of squares
    /// occupied, and no two vessels sharing or bordering a square.
    #[test]
    fn placement_terminates_and_produces_a_legal_fleet(seed in any::<u64>()) {
        let Some(grid) = placed_grid(seed) else { return Ok(()) };
        prop_assert_eq!(grid.vessels().len(), FLEET_SIZE);

        let expected: i32 = FLEET.iter().sum();
        let mut hull_cells = 0;
        for vessel in grid.vessels() {
            for cell in vessel.cells() {
                hull_cells += 1;
                prop_assert!(!grid.is_out(cell));
            }
        }
        prop_assert_eq!(hull_cells, expected);

        let mut occupied = 0;
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                if grid.cell(Position::new(x, y)) == Some(CellState::Occupied) {
                    occupied += 1;
                }
            }
        }
        prop_assert_eq!(occupied, expected);

        let vessels = grid.vessels();
        for i in 0..vessels.len() {
            for j in (i + 1)..vessels.len() {
                for a in vessels[i].cells() {
                    for b in vessels[j].cells() {
                        let apart = (a.x - b.x).abs() > 1 || (a.y - b.y).abs() > 1;
                        prop_assert!(apart, "vessels {} and {} touch at {} / {}", i, j, a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn second_shot_at_the_same_square_is_rejected(
        seed in any::<u64>(),
        x in 0..GRID_SIZE,
        y in 0..GRID_SIZE,
    ) {
        let Some(mut grid) = placed_grid(seed) else { return Ok(()) };
        let target = Position::new(x, y);
        grid.resolve_shot(target).unwrap();
        prop_assert_eq!(
            grid.resolve_shot(target).unwrap_err(),
            GridError::AlreadyTargeted
        );
    }

    /// Shooting every hull square sinks the whole fleet exactly once.
    #[test]
    fn sinking_the_whole_fleet_counts_every_vessel(seed in any::<u64>()) {
        let Some(mut grid) = placed_grid(seed) else { return Ok(()) };
        let hulls: Vec<Vec<Position>> = grid
            .vessels()
            .iter()
            .map(|v| v.cells().collect())
            .collect();
        for hull in &hulls {
            for &cell in hull {
                grid.resolve_shot(cell).unwrap();
            }
        }
        prop_assert_eq!(grid.destroyed_count(), FLEET_SIZE);
        prop_assert!(grid.all_destroyed());
    }
}
