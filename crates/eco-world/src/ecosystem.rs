//! The per-tick life-cycle engine: aging, hunger, breeding, hunting, movement.

use crate::animal::{Animal, Population};
use crate::field::Field;
use crate::randomizer::{RandomSource, Randomizer};
use eco_core::{AnimalId, Error, Location, Result, Sex, Species};
use tracing::{debug, instrument, trace};

/// Field, animal arena and random source for one run
pub struct Ecosystem<R: RandomSource = Randomizer> {
    field: Field,
    population: Population,
    rng: R,
}

impl Ecosystem<Randomizer> {
    pub fn with_seed(depth: i32, width: i32, seed: u64) -> Self {
        Self::new(Field::new(depth, width), Randomizer::new(seed))
    }
}

impl<R: RandomSource> Ecosystem<R> {
    pub fn new(field: Field, rng: R) -> Self {
        Self {
            field,
            population: Population::new(),
            rng,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn animal(&self, id: AnimalId) -> Result<&Animal> {
        self.population.get(id).ok_or(Error::UnknownAnimal(id))
    }

    fn animal_mut(&mut self, id: AnimalId) -> Result<&mut Animal> {
        self.population.get_mut(id).ok_or(Error::UnknownAnimal(id))
    }

    /// Remove every animal from the field and the arena
    pub fn clear(&mut self) {
        self.field.clear_all();
        self.population.clear();
    }

    /// Create an animal at `loc`.
    ///
    /// With `random_age` the age is drawn from `[0, max_age)` and a predator's
    /// food level from `[0, food value of its prey)`; otherwise the animal is a
    /// newborn with a full stomach. Sex is a fair coin either way.
    pub fn create_animal(
        &mut self,
        species: Species,
        random_age: bool,
        loc: Location,
    ) -> Result<AnimalId> {
        let params = species.params();
        let age = if random_age {
            self.rng.next_below(params.max_age)
        } else {
            0
        };
        let food_level = match params.prey {
            Some(prey) => {
                let full = prey.params().food_value;
                if random_age {
                    self.rng.next_below(full)
                } else {
                    full
                }
            }
            None => 0,
        };
        let sex = Sex::from_bool(self.rng.next_bool());

        self.spawn(Animal::new(species, sex, age, food_level, loc))
    }

    /// Insert a fully formed animal and claim its cell
    pub fn spawn(&mut self, animal: Animal) -> Result<AnimalId> {
        let loc = animal.location().ok_or_else(|| {
            Error::InvalidConfig("cannot spawn an animal without a location".to_string())
        })?;
        // Reject bad cells before the arena hands out an id.
        self.field.get_object_at(loc)?;

        let id = self.population.insert(animal);
        if let Err(e) = self.field.place(id, loc) {
            self.population.remove(id);
            return Err(e);
        }
        Ok(id)
    }

    /// Mark an animal dead and evict it from the field
    pub fn set_dead(&mut self, id: AnimalId) -> Result<()> {
        let animal = self.population.get_mut(id).ok_or(Error::UnknownAnimal(id))?;
        if let Some(loc) = animal.set_dead() {
            self.field.clear(loc)?;
        }
        Ok(())
    }

    /// Move an animal to `loc`, vacating the cell it held
    pub fn set_location(&mut self, id: AnimalId, loc: Location) -> Result<()> {
        let animal = self.population.get_mut(id).ok_or(Error::UnknownAnimal(id))?;
        let old = animal.location();
        self.field.place(id, loc)?;
        if let Some(old) = old.filter(|&old| old != loc) {
            self.field.clear(old)?;
        }
        animal.set_location(loc);
        Ok(())
    }

    /// Run one animal's turn. Offspring are pushed onto `newborns`.
    ///
    /// Dead animals do nothing.
    pub fn act(&mut self, id: AnimalId, newborns: &mut Vec<AnimalId>) -> Result<()> {
        if !self.animal(id)?.is_alive() {
            return Ok(());
        }

        let (species, survived_age) = {
            let animal = self.animal_mut(id)?;
            (animal.species, animal.increment_age())
        };
        if !survived_age {
            debug!(animal = %id, species = %species, "died of old age");
            return self.set_dead(id);
        }

        if species.is_predator() && !self.animal_mut(id)?.increment_hunger() {
            debug!(animal = %id, species = %species, "starved");
            return self.set_dead(id);
        }

        self.give_birth(id, newborns)?;

        let Some(here) = self.animal(id)?.location() else {
            return Ok(());
        };

        let target = match species.params().prey {
            Some(prey) => self.find_food(id, prey)?,
            None => None,
        };
        let target = match target {
            Some(loc) => Some(loc),
            None => self.field.free_adjacent_location(here, &mut self.rng)?,
        };

        match target {
            Some(loc) => self.set_location(id, loc),
            None => {
                debug!(
                    animal = %id,
                    species = %species,
                    location = %here,
                    "died of overcrowding"
                );
                self.set_dead(id)
            }
        }
    }

    /// Any live neighbour of the same species and opposite sex
    pub fn has_mate(&self, id: AnimalId) -> Result<bool> {
        let animal = self.animal(id)?;
        let Some(here) = animal.location() else {
            return Ok(false);
        };

        for loc in self.field.adjacent_locations(here)? {
            if let Some(other) = self.field.get_object_at(loc)? {
                if self.population.get(other).is_some_and(|o| animal.is_mate_for(o)) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Number of births this tick, possibly zero.
    ///
    /// No draw is made for an animal below breeding age.
    fn breed(&mut self, id: AnimalId) -> Result<u32> {
        let animal = self.animal(id)?;
        let params = animal.params();
        if !animal.can_breed() {
            return Ok(0);
        }
        if self.rng.next_f64() > params.breeding_probability {
            return Ok(0);
        }
        Ok(self.rng.next_below(params.max_litter_size) + 1)
    }

    fn give_birth(&mut self, id: AnimalId, newborns: &mut Vec<AnimalId>) -> Result<()> {
        let (species, here) = {
            let animal = self.animal(id)?;
            match animal.location() {
                Some(here) => (animal.species, here),
                None => return Ok(()),
            }
        };

        if species.params().requires_mate && !self.has_mate(id)? {
            return Ok(());
        }

        let births = self.breed(id)?;
        if births == 0 {
            return Ok(());
        }

        let mut free = self.field.free_adjacent_locations(here)?;
        let litter = births.min(free.len() as u32);
        for _ in 0..litter {
            let loc = free.remove(0);
            let young = self.create_animal(species, false, loc)?;
            newborns.push(young);
        }

        debug!(
            parent = %id,
            species = %species,
            births,
            placed = litter,
            "litter born"
        );
        Ok(())
    }

    /// Eat the first live prey found next to the predator.
    /// Returns the cell the prey occupied.
    fn find_food(&mut self, id: AnimalId, prey: Species) -> Result<Option<Location>> {
        let Some(here) = self.animal(id)?.location() else {
            return Ok(None);
        };

        for loc in self.field.adjacent_locations(here)? {
            let Some(other) = self.field.get_object_at(loc)? else {
                continue;
            };
            let is_prey = self
                .population
                .get(other)
                .is_some_and(|o| o.is_alive() && o.species == prey);
            if is_prey {
                self.set_dead(other)?;
                self.animal_mut(id)?.food_level = prey.params().food_value;
                trace!(predator = %id, prey = %other, location = %loc, "hunt");
                return Ok(Some(loc));
            }
        }
        Ok(None)
    }

    /// Advance every animal of `roster` by one tick.
    ///
    /// Only animals alive at the start act; newborns wait for the next tick.
    /// Dead animals are dropped from the arena and the returned roster holds
    /// the survivors followed by the surviving newborns.
    #[instrument(level = "debug", skip_all, fields(roster = roster.len()))]
    pub fn step(&mut self, roster: &[AnimalId]) -> Result<Vec<AnimalId>> {
        let mut newborns = Vec::new();
        for &id in roster {
            self.act(id, &mut newborns)?;
        }

        let mut next = Vec::with_capacity(roster.len() + newborns.len());
        for id in roster.iter().copied().chain(newborns) {
            if self.animal(id)?.is_alive() {
                next.push(id);
            } else {
                self.population.remove(id);
            }
        }

        debug!(survivors = next.len(), "step complete");
        Ok(next)
    }

    /// Every occupied cell holds a live animal that agrees on its location,
    /// and no animal holds two cells.
    pub fn is_consistent(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.field.iter().all(|(loc, cell)| match cell {
            None => true,
            Some(id) => {
                seen.insert(id)
                    && self
                        .population
                        .get(id)
                        .is_some_and(|a| a.is_alive() && a.location() == Some(loc))
            }
        })
    }
}
