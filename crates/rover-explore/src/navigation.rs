//! Shortest paths over the known map.
//!
//! Everything here searches only cells the map has recorded as `Open`;
//! unknown territory is never assumed passable. Two structures are provided:
//!
//! - [`KnownBfs`]: a one-shot breadth-first search from an arbitrary source,
//!   with parent links for path reconstruction.
//! - [`DistanceField`]: distances to home, either rebuilt from scratch or
//!   maintained incrementally as the map grows.
//!
//! Distances only ever shrink as the map grows, because recording a new
//! `Open` cell can open a shortcut but never closes one.

use crate::config::ReturnPlanner;
use crate::map::MapModel;
use indexmap::IndexMap;
use rover_core::{Cell, Direction};
use std::borrow::Cow;
use std::collections::VecDeque;

// ── KnownBfs ───────────────────────────────────────────────────────

/// Breadth-first search result over known `Open` cells.
#[derive(Clone, Debug)]
pub struct KnownBfs {
    source: Cell,
    /// `cell -> (distance, parent)`, in discovery order.
    reached: IndexMap<Cell, (u32, Option<Cell>)>,
}

impl KnownBfs {
    /// Search from `source`, expanding neighbours in `order`.
    ///
    /// The result is empty if `source` is not recorded `Open`.
    pub fn run(map: &MapModel, source: Cell, order: &[Direction]) -> Self {
        let mut reached = IndexMap::new();
        if map.kind(source).is_traversable() {
            let mut queue = VecDeque::new();
            reached.insert(source, (0, None));
            queue.push_back((source, 0u32));
            while let Some((cell, dist)) = queue.pop_front() {
                for &d in order {
                    let nb = cell.neighbour(d);
                    if map.kind(nb).is_traversable() && !reached.contains_key(&nb) {
                        reached.insert(nb, (dist + 1, Some(cell)));
                        queue.push_back((nb, dist + 1));
                    }
                }
            }
        }
        Self { source, reached }
    }

    /// The search origin.
    pub fn source(&self) -> Cell {
        self.source
    }

    /// Move count from the source to `cell`, `None` if unreachable.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.reached.get(&cell).map(|&(d, _)| d)
    }

    /// Cells to step through from the source to `target`, excluding the
    /// source and ending with `target`. Empty if `target` is the source.
    pub fn path_to(&self, target: Cell) -> Option<Vec<Cell>> {
        let mut path = Vec::new();
        let mut cur = target;
        loop {
            let &(_, parent) = self.reached.get(&cur)?;
            match parent {
                Some(p) => {
                    path.push(cur);
                    cur = p;
                }
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// Number of cells reached, including the source.
    pub fn len(&self) -> usize {
        self.reached.len()
    }

    /// Returns `true` if the source itself was not traversable.
    pub fn is_empty(&self) -> bool {
        self.reached.is_empty()
    }
}

// ── DistanceField ──────────────────────────────────────────────────

/// Known-map distances from every reachable `Open` cell to home.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    home: Cell,
    dist: IndexMap<Cell, u32>,
}

impl DistanceField {
    /// A field holding only `home` at distance 0.
    pub fn new(home: Cell) -> Self {
        let mut dist = IndexMap::new();
        dist.insert(home, 0);
        Self { home, dist }
    }

    /// Build the field from scratch with a breadth-first search from home.
    pub fn rebuild(map: &MapModel, order: &[Direction]) -> Self {
        let home = map.home();
        let bfs = KnownBfs::run(map, home, order);
        let mut field = Self::new(home);
        for (&cell, &(d, _)) in &bfs.reached {
            field.dist.insert(cell, d);
        }
        field
    }

    /// The cell all distances lead to.
    pub fn home(&self) -> Cell {
        self.home
    }

    /// Known distance from `cell` to home, `None` if no known path.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.dist.get(&cell).copied()
    }

    /// Update after `cell` was newly recorded `Open` in `map`.
    ///
    /// Seeds `cell` from its best known neighbour, then relaxes outward:
    /// any recorded `Open` cell whose distance improves is re-queued.
    pub fn relax_from(&mut self, map: &MapModel, cell: Cell, order: &[Direction]) {
        let best = order
            .iter()
            .filter_map(|&d| self.distance(cell.neighbour(d)))
            .min();
        let Some(best) = best else {
            // Not yet connected to anything with a known distance.
            return;
        };
        if self.distance(cell).is_some_and(|cur| cur <= best + 1) {
            return;
        }
        self.dist.insert(cell, best + 1);

        let mut queue = VecDeque::from([cell]);
        while let Some(u) = queue.pop_front() {
            let du = self.dist[&u];
            for &d in order {
                let v = u.neighbour(d);
                if !map.kind(v).is_traversable() {
                    continue;
                }
                if self.distance(v).is_none_or(|dv| dv > du + 1) {
                    self.dist.insert(v, du + 1);
                    queue.push_back(v);
                }
            }
        }
    }

    /// Cells to step through from `from` to home, excluding `from` and
    /// ending with home. Each step lands on a neighbour exactly one closer;
    /// ties go to the earliest direction in `order`.
    pub fn path_home(&self, map: &MapModel, from: Cell, order: &[Direction]) -> Option<Vec<Cell>> {
        let mut remaining = self.distance(from)?;
        let mut path = Vec::with_capacity(remaining as usize);
        let mut cur = from;
        while remaining > 0 {
            let next = order
                .iter()
                .map(|&d| cur.neighbour(d))
                .find(|&nb| {
                    map.kind(nb).is_traversable() && self.distance(nb) == Some(remaining - 1)
                })?;
            path.push(next);
            cur = next;
            remaining -= 1;
        }
        Some(path)
    }

    /// Number of cells with a known distance.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Always `false`: home is always present.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

// ── HomeDistance ───────────────────────────────────────────────────

/// Distance-to-home provider selected by [`ReturnPlanner`].
#[derive(Clone, Debug)]
pub(crate) enum HomeDistance {
    Incremental(DistanceField),
    Rebuild,
}

impl HomeDistance {
    pub(crate) fn new(planner: ReturnPlanner, home: Cell) -> Self {
        match planner {
            ReturnPlanner::Incremental => Self::Incremental(DistanceField::new(home)),
            ReturnPlanner::Rebuild => Self::Rebuild,
        }
    }

    /// Notify that `cell` was newly recorded `Open`.
    pub(crate) fn on_open_recorded(&mut self, map: &MapModel, cell: Cell, order: &[Direction]) {
        if let Self::Incremental(field) = self {
            field.relax_from(map, cell, order);
        }
    }

    /// A distance field consistent with the current map.
    pub(crate) fn field(&self, map: &MapModel, order: &[Direction]) -> Cow<'_, DistanceField> {
        match self {
            Self::Incremental(field) => Cow::Borrowed(field),
            Self::Rebuild => Cow::Owned(DistanceField::rebuild(map, order)),
        }
    }
}
