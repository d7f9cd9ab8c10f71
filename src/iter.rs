use crate::world::{Coord, World};

impl World {
    /// Living cells, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.plane
            .iter()
            .filter(|&(_, &alive)| alive)
            .map(|(&coord, _)| coord)
    }

    // Bound: (left, right, top, bottom), all inclusive.
    pub fn for_living_cells<F>(&self, bound: (i64, i64, i64, i64), f: F)
    where
        F: FnMut(i64, i64),
    {
        let mut f = f;
        let (left, right, top, bottom) = bound;
        for (x, y) in self.cells() {
            if left <= x && x <= right && top <= y && y <= bottom {
                f(x, y);
            }
        }
    }
}
