use crate::world::{Coord, World};
use std::{iter, mem};
use tracing::{debug, trace};

/// Evolves a [`World`] one generation at a time.
///
/// The present world is only read, and the future world only written,
/// while a generation is computed.
#[derive(Clone, Debug, Default)]
pub struct SpaceTime {
    present: World,
    future: World,
    generation: u64,
}

impl From<World> for SpaceTime {
    fn from(world: World) -> Self {
        SpaceTime::new(world)
    }
}

impl SpaceTime {
    pub fn new(world: World) -> Self {
        debug!(
            population = world.population(),
            touched = world.touched(),
            "starting a new space-time"
        );
        let future = World::with_rule(world.rule());
        SpaceTime {
            present: world,
            future,
            generation: 0,
        }
    }

    pub fn present(&self) -> &World {
        &self.present
    }

    pub fn future(&self) -> &World {
        &self.future
    }

    pub fn into_present(self) -> World {
        self.present
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn advance(&mut self) {
        self.compute_next_generation();
        let fresh = World::with_rule(self.future.rule());
        self.present = mem::replace(&mut self.future, fresh);
        self.generation += 1;
    }

    pub fn run(&mut self, generations: u64) {
        debug!(from = self.generation, generations, "running");
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Fills the future world from the present one.
    ///
    /// Only touched cells and their neighbors can change, so those are the
    /// only cells evaluated. Each cell is evaluated at most once.
    pub fn compute_next_generation(&mut self) {
        let present = &self.present;
        let future = &mut self.future;
        for &coord in present.plane.keys() {
            update_neighborhood(present, future, coord);
        }
        let evaluated = future.touched();
        future.cleanup();
        trace!(
            generation = self.generation + 1,
            evaluated,
            population = future.touched(),
            "computed next generation"
        );
    }

    /// Writes the next state of `coord` and its neighbors into the future
    /// world, skipping cells that already have one. Does not clean up.
    pub fn update_cell(&mut self, coord: Coord) {
        update_neighborhood(&self.present, &mut self.future, coord);
    }
}

fn update_neighborhood(present: &World, future: &mut World, coord: Coord) {
    let neighbors = World::neighbors(coord);
    for cell in iter::once(coord).chain(neighbors.iter().copied()) {
        if future.is_untouched(cell) {
            future.set(cell, present.survives(cell));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_cells(world: &World) -> Vec<(i64, i64)> {
        let mut cells = world.cells().collect::<Vec<_>>();
        cells.sort();
        cells
    }

    #[test]
    fn test_new() {
        let world = World::new(vec![(0, 0), (1, 0)]);
        let space_time = SpaceTime::new(world.clone());
        assert_eq!(space_time.present(), &world);
        assert_eq!(space_time.future(), &World::default());
        assert_eq!(space_time.generation(), 0);
    }

    #[test]
    fn test_compute_next_generation() {
        let cells = vec![
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 2),
            (4, 0),
        ];
        let world = World::new(cells);
        let mut space_time = SpaceTime::new(world.clone());
        space_time.compute_next_generation();
        assert_eq!(space_time.present(), &world);
        assert_eq!(
            sorted_cells(space_time.future()),
            vec![(0, 0), (1, 3), (2, 0), (2, 3), (3, 1), (3, 2)]
        );
        assert_eq!(space_time.future().touched(), 6);
    }

    #[test]
    fn test_advance() {
        let mut space_time = SpaceTime::new(World::new(vec![(0, -1), (0, 0), (0, 1)]));
        space_time.compute_next_generation();
        let computed = space_time.future().clone();
        space_time.advance();
        assert_eq!(space_time.present(), &computed);
        assert_eq!(space_time.future(), &World::default());
        assert_eq!(space_time.generation(), 1);
        assert_eq!(sorted_cells(space_time.present()), vec![(-1, 0), (0, 0), (1, 0)]);
        space_time.advance();
        assert_eq!(sorted_cells(space_time.present()), vec![(0, -1), (0, 0), (0, 1)]);
        assert_eq!(space_time.generation(), 2);
    }

    #[test]
    fn test_advance_dead_entries() {
        let mut world = World::new(vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        world.set((5, 5), false).set((-3, 2), false);
        let mut space_time = SpaceTime::new(world);
        space_time.advance();
        assert_eq!(sorted_cells(space_time.present()), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(space_time.present().touched(), 4);
    }

    #[test]
    fn test_empty() {
        let mut space_time = SpaceTime::default();
        space_time.run(3);
        assert_eq!(space_time.present(), &World::default());
        assert_eq!(space_time.generation(), 3);
    }

    #[test]
    fn test_update_cell_on_empty() {
        let mut space_time = SpaceTime::default();
        space_time.update_cell((1, 1));
        let future = space_time.future();
        assert_eq!(future.touched(), 9);
        assert_eq!(future.get((1, 1)), Some(false));
        for &neighbor in World::neighbors((1, 1)).iter() {
            assert_eq!(future.get(neighbor), Some(false));
        }
        assert_eq!(space_time.present(), &World::default());

        let mut future = future.clone();
        future.cleanup();
        assert_eq!(future.touched(), 0);
    }

    #[test]
    fn test_update_cell_first_writer_wins() {
        let mut space_time = SpaceTime::new(World::new(vec![(0, -1), (0, 0), (0, 1)]));
        space_time.future.set((1, 0), false).set((0, 1), true);
        space_time.update_cell((0, 0));
        let future = space_time.future();
        assert_eq!(future.touched(), 9);
        assert_eq!(future.get((1, 0)), Some(false));
        assert_eq!(future.get((0, 1)), Some(true));
        assert_eq!(future.get((-1, 0)), Some(true));
        assert_eq!(future.get((0, 0)), Some(true));
        assert_eq!(future.get((0, -1)), Some(false));
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut space_time = SpaceTime::new(World::new(vec![(1, 1)]));
        space_time.compute_next_generation();
        assert_eq!(space_time.future().touched(), 0);
        space_time.advance();
        assert_eq!(space_time.present().population(), 0);
    }

    #[test]
    fn test_keeps_rule() -> Result<(), crate::Error> {
        let rule = "B36/S23".parse()?;
        let mut world = World::with_rule(rule);
        world.extend(vec![(0, 0), (1, 0), (2, 0)]);
        let mut space_time = SpaceTime::new(world);
        space_time.advance();
        assert_eq!(space_time.present().rule(), rule);
        assert_eq!(space_time.future().rule(), rule);
        assert_eq!(sorted_cells(space_time.present()), vec![(1, -1), (1, 0), (1, 1)]);
        Ok(())
    }
}
