use crate::rule::Rule;
use rustc_hash::FxHashMap;
use std::iter::FromIterator;

/// A cell position on the unbounded plane.
pub type Coord = (i64, i64);

/// Offsets of the Moore neighborhood, clockwise from the top.
const NEIGHBORHOOD: [Coord; 8] = [
    (0, 1),   // top
    (1, 1),   // top-right
    (1, 0),   // right
    (1, -1),  // bottom-right
    (0, -1),  // bottom
    (-1, -1), // bottom-left
    (-1, 0),  // left
    (-1, 1),  // top-left
];

/// A sparse plane of cells.
///
/// A coordinate is either untouched (not stored), or stored with its
/// liveness. After [`cleanup`](World::cleanup) only living cells are stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    pub(crate) plane: FxHashMap<Coord, bool>,
    rule: Rule,
}

impl World {
    /// A world where exactly the given cells are alive.
    pub fn new<I: IntoIterator<Item = Coord>>(cells: I) -> Self {
        cells.into_iter().collect()
    }

    /// An empty world evolving under `rule`.
    pub fn with_rule(rule: Rule) -> Self {
        World {
            plane: FxHashMap::default(),
            rule,
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.plane.get(&coord).copied()
    }

    pub fn set(&mut self, coord: Coord, alive: bool) -> &mut Self {
        self.plane.insert(coord, alive);
        self
    }

    pub fn is_untouched(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    pub fn is_dead(&self, coord: Coord) -> bool {
        !self.is_alive(coord)
    }

    /// Whether the cell is alive in the next generation.
    pub fn survives(&self, coord: Coord) -> bool {
        let n = self.living_neighbors(coord);
        (self.is_alive(coord) && self.rule.survival[n])
            || (self.is_dead(coord) && self.rule.birth[n])
    }

    pub fn living_neighbors(&self, coord: Coord) -> usize {
        World::neighbors(coord)
            .iter()
            .filter(|&&neighbor| self.is_alive(neighbor))
            .count()
    }

    /// Drops every dead entry, leaving only the living cells.
    pub fn cleanup(&mut self) {
        self.plane.retain(|_, alive| *alive);
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.plane.values().filter(|&&alive| alive).count()
    }

    /// Number of stored entries, dead or alive.
    pub fn touched(&self) -> usize {
        self.plane.len()
    }

    pub fn neighbors(coord: Coord) -> [Coord; 8] {
        let mut neighbors = NEIGHBORHOOD;
        for offset in neighbors.iter_mut() {
            *offset = World::add(coord, *offset);
        }
        neighbors
    }

    /// Component-wise sum. Wraps around at the limits of `i64`, so the
    /// neighborhoods of cells on the edge of the plane wrap to the other side.
    pub fn add(a: Coord, b: Coord) -> Coord {
        (a.0.wrapping_add(b.0), a.1.wrapping_add(b.1))
    }

    /// Bound: (left, right, top, bottom), all inclusive.
    ///
    /// Returns `None` if there are no living cells.
    pub fn bound(&self) -> Option<(i64, i64, i64, i64)> {
        self.cells().fold(None, |bound, (x, y)| match bound {
            None => Some((x, x, y, y)),
            Some((left, right, top, bottom)) => {
                Some((left.min(x), right.max(x), top.min(y), bottom.max(y)))
            }
        })
    }
}

impl FromIterator<Coord> for World {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut world = World::default();
        world.extend(iter);
        world
    }
}

/// Sets the given cells alive.
impl Extend<Coord> for World {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for coord in iter {
            self.set(coord, true);
        }
    }
}
