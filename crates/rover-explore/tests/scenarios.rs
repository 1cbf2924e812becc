use rover_core::{Cell, Direction, TerrainKind};
use rover_explore::{
    explore_unbounded, explore_unbounded_with_config, explore_with_battery, BatteryExplorer,
    DfsExplorer, ExploreConfig, ExploreError, StepKind,
};
use rover_terrain::TerrainGrid;
use rover_test_utils::{find_marker, grid_from_ascii, RecordingSensor};

#[test]
fn open_3x3_from_centre_covers_everything() {
    let g = TerrainGrid::new(3, 3).unwrap();
    let (map, report) = explore_unbounded(&g, Cell::new(1, 1)).unwrap();
    assert_eq!(map.visited_count(), 9);
    assert_eq!(report.reachable_count, 9);
    assert_eq!(report.coverage_ratio, 1.0);
    assert!(report.unvisited_reachable.is_empty());
    assert_eq!(map.position(), Cell::new(1, 1));
}

#[test]
fn battery_of_four_leaves_cells_unvisited() {
    let g = TerrainGrid::new(5, 5)
        .unwrap()
        .with_obstacles([Cell::new(2, 2)])
        .unwrap();
    let (map, report) = explore_with_battery(&g, Cell::new(0, 0), 4).unwrap();

    assert_eq!(map.position(), Cell::new(0, 0));
    assert_eq!(map.battery_remaining(), Some(0));
    assert_eq!(report.reachable_count, 24);
    assert!(report.visited_count < report.reachable_count);
    assert_eq!(
        report.unvisited_reachable.len(),
        report.reachable_count - report.visited_count
    );
    for cell in &report.unvisited_reachable {
        assert!(!map.is_visited(*cell));
    }
    assert!(report.coverage_ratio > 0.0 && report.coverage_ratio < 1.0);
    assert!(report.unreachable_open.is_empty());
}

#[test]
fn boxed_in_home_is_fully_covered() {
    let rows = [".X.", "XHX", ".X."];
    let g = grid_from_ascii(&rows);
    let home = find_marker(&rows, 'H').unwrap();

    let (map, report) = explore_unbounded(&g, home).unwrap();
    assert_eq!(map.visited_cells().collect::<Vec<_>>(), vec![home]);
    assert_eq!(report.coverage_ratio, 1.0);
    assert_eq!(report.reachable_count, 1);
    assert_eq!(report.unreachable_open.len(), 4);

    let (map, report) = explore_with_battery(&g, home, 10).unwrap();
    assert_eq!(map.visited_count(), 1);
    assert_eq!(report.metrics.moves, 0);
    assert_eq!(map.battery_remaining(), Some(10));
}

#[test]
fn zero_battery_start_stays_home() {
    let g = TerrainGrid::new(4, 4).unwrap();
    let (map, report) = explore_with_battery(&g, Cell::new(2, 1), 0).unwrap();
    assert_eq!(report.metrics.moves, 0);
    assert_eq!(map.visited_cells().collect::<Vec<_>>(), vec![Cell::new(2, 1)]);
    assert_eq!(report.visited_count, 1);
    assert_eq!(report.unvisited_reachable.len(), 15);
}

#[test]
fn obstacle_home_is_rejected() {
    let g = grid_from_ascii(&["X.."]);
    let err = explore_unbounded(&g, Cell::new(0, 0)).unwrap_err();
    assert!(matches!(
        err,
        ExploreError::InvalidStart {
            kind: TerrainKind::Obstacle,
            ..
        }
    ));
    assert!(!err.is_internal_fault());
}

#[test]
fn maze_is_mapped_including_walls() {
    let rows = [
        "H..X....",
        ".X.X.XX.",
        ".X...X..",
        ".XXXXX.X",
        "........",
    ];
    let g = grid_from_ascii(&rows);
    let home = find_marker(&rows, 'H').unwrap();
    let (map, report) = explore_unbounded(&g, home).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.visited_count, g.open_count());
    // Every wall touching the reachable area is recorded.
    for cell in g.canonical_ordering() {
        if g.kind_at(cell) == TerrainKind::Obstacle {
            let touches = Direction::ALL
                .into_iter()
                .any(|d| map.is_visited(cell.neighbour(d)));
            assert_eq!(map.kind(cell) == TerrainKind::Obstacle, touches, "{cell}");
        }
    }
}

#[test]
fn dense_export_matches_ground_truth() {
    let rows = ["H.X", "..X", "X.."];
    let g = grid_from_ascii(&rows);
    let (map, _) = explore_unbounded(&g, Cell::new(0, 0)).unwrap();
    let dense = map.to_dense();
    assert_eq!(dense.origin(), Cell::new(0, 0));
    assert_eq!((dense.rows(), dense.cols()), (3, 3));
    for cell in g.canonical_ordering() {
        assert_eq!(dense.kind_at(cell), Some(g.kind_at(cell)), "{cell}");
    }
}

#[test]
fn dense_export_trims_surrounding_walls() {
    let rows = ["XXXXX", "X.H.X", "XXXXX"];
    let g = grid_from_ascii(&rows);
    let (map, _) = explore_unbounded(&g, Cell::new(1, 2)).unwrap();
    let dense = map.to_dense();
    assert_eq!(dense.origin(), Cell::new(1, 1));
    assert_eq!((dense.rows(), dense.cols()), (1, 3));
    assert_eq!(dense.kind_at(Cell::new(0, 2)), None);
    assert_eq!(dense.kind_at(Cell::new(1, 4)), None);
}

#[test]
fn explorers_only_probe_locally() {
    let g = grid_from_ascii(&["....", ".X..", "...X", "X..."]);
    let config = ExploreConfig::default();

    let sensor = RecordingSensor::new(&g);
    let run = DfsExplorer::new(&sensor, &config).run(Cell::new(0, 0)).unwrap();
    for probe in sensor.probes() {
        assert!(
            run.map.visited_cells().any(|v| v == probe || v.is_adjacent(probe)),
            "probe of {probe} was not local"
        );
    }
    assert_eq!(sensor.probe_count() as u64, run.metrics.probes);
    // Every recorded cell was probed exactly once.
    assert_eq!(sensor.probe_count(), run.map.known_count());

    let sensor = RecordingSensor::new(&g);
    let run = BatteryExplorer::new(&sensor, &config)
        .run(Cell::new(0, 0), 7)
        .unwrap();
    for probe in sensor.probes() {
        assert!(run
            .map
            .visited_cells()
            .any(|v| v == probe || v.is_adjacent(probe)));
    }
}

#[test]
fn direction_order_is_configurable() {
    let g = TerrainGrid::new(3, 3).unwrap();
    let west_first = ExploreConfig {
        direction_order: [
            Direction::West,
            Direction::South,
            Direction::East,
            Direction::North,
        ],
        ..ExploreConfig::default()
    };
    let (default_map, _) = explore_unbounded(&g, Cell::new(1, 1)).unwrap();
    let (west_map, report) =
        explore_unbounded_with_config(&g, Cell::new(1, 1), &west_first).unwrap();
    assert_eq!(default_map.visited_cells().nth(1), Some(Cell::new(0, 1)));
    assert_eq!(west_map.visited_cells().nth(1), Some(Cell::new(1, 0)));
    assert_eq!(report.coverage_ratio, 1.0);
}

#[test]
fn bad_direction_order_fails_before_probing() {
    let g = TerrainGrid::new(3, 3).unwrap();
    let config = ExploreConfig {
        direction_order: [Direction::North; 4],
        ..ExploreConfig::default()
    };
    let sensor = RecordingSensor::new(&g);
    let err = DfsExplorer::new(&sensor, &config)
        .run(Cell::new(1, 1))
        .unwrap_err();
    assert!(matches!(err, ExploreError::Config(_)));
    assert_eq!(sensor.probe_count(), 0);
}

#[test]
fn battery_trail_walks_home_at_the_end() {
    let g = grid_from_ascii(&["......", "..XX..", "......"]);
    let config = ExploreConfig::default();
    let run = BatteryExplorer::new(&g, &config)
        .run(Cell::new(1, 0), 9)
        .unwrap();
    let last = run.trail.last().unwrap();
    assert_eq!(last.to, Cell::new(1, 0));
    assert_eq!(last.return_distance, Some(0));
    assert!(run
        .trail
        .iter()
        .all(|s| s.kind != StepKind::Backtrack));
}
