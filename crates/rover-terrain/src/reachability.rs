//! Ground-truth flood fill.
//!
//! These functions read the terrain directly and are used only as an
//! oracle by coverage reports and tests. Explorers never call them.

use crate::grid::TerrainGrid;
use indexmap::IndexSet;
use rover_core::{Cell, Direction};
use std::collections::VecDeque;

/// All `Open` cells 4-connected to `home`, in breadth-first discovery order.
///
/// `home` itself is the first element. Returns an empty set if `home` is
/// not `Open` in the terrain.
pub fn reachable_from(grid: &TerrainGrid, home: Cell) -> IndexSet<Cell> {
    let mut seen = IndexSet::new();
    if !grid.kind_at(home).is_traversable() {
        return seen;
    }

    let mut queue = VecDeque::new();
    seen.insert(home);
    queue.push_back(home);

    while let Some(cell) = queue.pop_front() {
        for d in Direction::ALL {
            let nb = cell.neighbour(d);
            if grid.kind_at(nb).is_traversable() && seen.insert(nb) {
                queue.push_back(nb);
            }
        }
    }
    seen
}

/// Returns `true` if `target` can be reached from `home` over `Open` cells.
pub fn is_reachable(grid: &TerrainGrid, home: Cell, target: Cell) -> bool {
    reachable_from(grid, home).contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    #[test]
    fn open_grid_reaches_everything() {
        let g = TerrainGrid::new(4, 5).unwrap();
        let reach = reachable_from(&g, c(2, 2));
        assert_eq!(reach.len(), 20);
        assert_eq!(reach.get_index(0), Some(&c(2, 2)));
    }

    #[test]
    fn discovery_order_is_breadth_first() {
        let g = TerrainGrid::new(3, 3).unwrap();
        let reach = reachable_from(&g, c(1, 1));
        let first_ring: Vec<Cell> = reach.iter().skip(1).take(4).copied().collect();
        assert_eq!(first_ring, vec![c(0, 1), c(1, 2), c(2, 1), c(1, 0)]);
    }

    #[test]
    fn wall_splits_components() {
        // Column 2 is a wall.
        let g = TerrainGrid::new(3, 5)
            .unwrap()
            .with_obstacles([c(0, 2), c(1, 2), c(2, 2)])
            .unwrap();
        let reach = reachable_from(&g, c(0, 0));
        assert_eq!(reach.len(), 6);
        assert!(!reach.contains(&c(0, 3)));
        assert!(is_reachable(&g, c(0, 0), c(2, 1)));
        assert!(!is_reachable(&g, c(0, 0), c(2, 4)));
    }

    #[test]
    fn blocked_home_reaches_nothing() {
        let g = TerrainGrid::new(2, 2)
            .unwrap()
            .with_obstacles([c(0, 0)])
            .unwrap();
        assert!(reachable_from(&g, c(0, 0)).is_empty());
        assert!(reachable_from(&g, c(5, 5)).is_empty());
    }

    #[test]
    fn enclosed_home_reaches_only_itself() {
        let g = TerrainGrid::new(3, 3)
            .unwrap()
            .with_obstacles([c(0, 1), c(1, 0), c(1, 2), c(2, 1)])
            .unwrap();
        let reach = reachable_from(&g, c(1, 1));
        assert_eq!(reach.len(), 1);
        assert!(reach.contains(&c(1, 1)));
    }
}
