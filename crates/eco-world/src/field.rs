//! Rectangular field of cells, each empty or holding one animal.

use crate::randomizer::RandomSource;
use eco_core::{AnimalId, Direction, Error, FieldConfig, Location, Result};

/// A bounded (non-wrapping) grid indexed by [`Location`]
#[derive(Debug, Clone)]
pub struct Field {
    depth: i32,
    width: i32,
    cells: Vec<Option<AnimalId>>,
}

impl Field {
    pub fn new(depth: i32, width: i32) -> Self {
        let size = (depth.max(0) as usize) * (width.max(0) as usize);
        Self {
            depth,
            width,
            cells: vec![None; size],
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.depth, config.width)
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn contains(&self, loc: Location) -> bool {
        (0..self.depth).contains(&loc.row) && (0..self.width).contains(&loc.col)
    }

    /// Animal at `loc`, if any
    pub fn get_object_at(&self, loc: Location) -> Result<Option<AnimalId>> {
        let index = self.index_of(loc)?;
        Ok(self.cells[index])
    }

    pub fn is_free(&self, loc: Location) -> Result<bool> {
        Ok(self.get_object_at(loc)?.is_none())
    }

    /// Put `id` at `loc`. The animal's previous cell is left to the caller.
    pub fn place(&mut self, id: AnimalId, loc: Location) -> Result<()> {
        let index = self.index_of(loc)?;
        match self.cells[index] {
            Some(occupant) if occupant != id => Err(Error::OccupancyConflict {
                location: loc,
                occupant,
                incoming: id,
            }),
            _ => {
                self.cells[index] = Some(id);
                Ok(())
            }
        }
    }

    pub fn clear(&mut self, loc: Location) -> Result<()> {
        let index = self.index_of(loc)?;
        self.cells[index] = None;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// In-bounds neighbours of `loc` in row-major order, `loc` excluded.
    pub fn adjacent_locations(&self, loc: Location) -> Result<Vec<Location>> {
        self.check(loc)?;
        Ok(Direction::all()
            .iter()
            .map(|&d| loc.offset(d))
            .filter(|&n| self.contains(n))
            .collect())
    }

    /// Unoccupied neighbours of `loc`, same order as [`Field::adjacent_locations`].
    ///
    /// This is a snapshot: claiming one of these cells still needs [`Field::place`].
    pub fn free_adjacent_locations(&self, loc: Location) -> Result<Vec<Location>> {
        Ok(self
            .adjacent_locations(loc)?
            .into_iter()
            .filter(|&n| self.cells[self.linear(n)].is_none())
            .collect())
    }

    /// One free neighbour picked uniformly, or `None` when `loc` is surrounded.
    /// Nothing is drawn from `rng` in the surrounded case.
    pub fn free_adjacent_location(
        &self,
        loc: Location,
        rng: &mut impl RandomSource,
    ) -> Result<Option<Location>> {
        let free = self.free_adjacent_locations(loc)?;
        if free.is_empty() {
            return Ok(None);
        }
        let pick = rng.next_below(free.len() as u32) as usize;
        Ok(free.get(pick).copied())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterator over all locations
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.cells.len()).map(move |i| self.location_of(i))
    }

    /// Iterator over every cell with its location
    pub fn iter(&self) -> impl Iterator<Item = (Location, Option<AnimalId>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.location_of(i), *cell))
    }

    fn check(&self, loc: Location) -> Result<()> {
        if self.contains(loc) {
            Ok(())
        } else {
            Err(Error::InvalidLocation {
                location: loc,
                depth: self.depth,
                width: self.width,
            })
        }
    }

    fn index_of(&self, loc: Location) -> Result<usize> {
        self.check(loc)?;
        Ok(self.linear(loc))
    }

    fn linear(&self, loc: Location) -> usize {
        (loc.row * self.width + loc.col) as usize
    }

    fn location_of(&self, index: usize) -> Location {
        let row = (index as i32) / self.width;
        let col = (index as i32) % self.width;
        Location::new(row, col)
    }
}
