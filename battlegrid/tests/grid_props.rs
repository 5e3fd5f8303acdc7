use battlegrid::{
    board::{CannotShootReason, CellState, Coordinate, Grid, PlacementGenerator},
    config::GameConfig,
    ships::{Fleet, Orientation, Vessel},
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn random_grid(seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    PlacementGenerator::from_config(&GameConfig::default())
        .generate(&mut rng)
        .unwrap()
}

fn snapshot(grid: &Grid) -> Vec<CellState> {
    grid.rows().flatten().map(|(_, state)| state).collect()
}

fn live_vessels(grid: &Grid) -> usize {
    grid.vessels().iter().filter(|v| v.hit_points() > 0).count()
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_grids_hold_the_full_fleet(seed in any::<u64>()) {
        let grid = random_grid(seed);
        prop_assert_eq!(grid.vessels_afloat(), 7);
        let lengths: Vec<_> = grid.vessels().iter().map(|v| v.length()).collect();
        prop_assert_eq!(lengths, Fleet::STANDARD.to_vec());
        let ship_cells = grid.rows().flatten().filter(|&(_, s)| s == CellState::Ship).count();
        prop_assert_eq!(ship_cells, Fleet::standard().total_cells());
    }

    #[test]
    fn generated_vessels_never_touch(seed in any::<u64>()) {
        let grid = random_grid(seed);
        for (i, a) in grid.vessels().iter().enumerate() {
            for b in &grid.vessels()[i + 1..] {
                let keep_out = a.bounds().expanded(1);
                prop_assert!(b.cells().all(|c| !keep_out.contains(c)));
            }
        }
    }

    #[test]
    fn in_bounds_placement_on_empty_grid_succeeds(
        x in 0..6i32,
        y in 0..6i32,
        length in 1..=3usize,
        orientation in orientation(),
    ) {
        let vessel = Vessel::new(Coordinate::new(x, y), length, orientation);
        prop_assume!(vessel.cells().all(|c| (0..6).contains(&c.x) && (0..6).contains(&c.y)));
        let mut grid = Grid::new(6);
        grid.place_vessel(vessel.clone()).unwrap();
        prop_assert!(vessel.cells().all(|c| grid[c] == CellState::Ship));
        prop_assert_eq!(grid.vessels_afloat(), 1);
    }

    #[test]
    fn out_of_bounds_shots_change_nothing(
        seed in any::<u64>(),
        x in -20..20i32,
        y in -20..20i32,
    ) {
        prop_assume!(!(0..6).contains(&x) || !(0..6).contains(&y));
        let mut grid = random_grid(seed);
        let before = snapshot(&grid);
        let err = grid.fire_at(Coordinate::new(x, y)).unwrap_err();
        prop_assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        prop_assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn second_shot_at_a_cell_is_rejected(seed in any::<u64>(), x in 0..6i32, y in 0..6i32) {
        let mut grid = random_grid(seed);
        let coord = Coordinate::new(x, y);
        grid.fire_at(coord).unwrap();
        let after = snapshot(&grid);
        let err = grid.fire_at(coord).unwrap_err();
        prop_assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        prop_assert_eq!(snapshot(&grid), after);
    }

    #[test]
    fn afloat_count_tracks_live_vessels(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..6i32, 0..6i32), 0..60),
    ) {
        let mut grid = random_grid(seed);
        for (x, y) in shots {
            let _ = grid.fire_at(Coordinate::new(x, y));
            prop_assert_eq!(grid.vessels_afloat(), live_vessels(&grid));
            for vessel in grid.vessels() {
                prop_assert!(vessel.hit_points() <= vessel.length());
            }
        }
    }
}
