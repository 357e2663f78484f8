//! Animal records and the arena that owns them.

use eco_core::{AnimalId, Location, Sex, Species, SpeciesParams};
use serde::{Deserialize, Serialize};

/// One animal's life-cycle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub species: Species,
    pub sex: Sex,
    pub age: u32,
    /// Steps a predator can go without eating; unused by prey
    pub food_level: u32,
    location: Option<Location>,
    alive: bool,
}

impl Animal {
    pub fn new(species: Species, sex: Sex, age: u32, food_level: u32, location: Location) -> Self {
        Self {
            species,
            sex,
            age,
            food_level,
            location: Some(location),
            alive: true,
        }
    }

    pub fn params(&self) -> &'static SpeciesParams {
        self.species.params()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// `None` once the animal is dead
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Mark dead and forget the cell. Returns the cell that was held.
    pub(crate) fn set_dead(&mut self) -> Option<Location> {
        self.alive = false;
        self.location.take()
    }

    /// Grow one step older. Returns false if that was past the species limit.
    pub fn increment_age(&mut self) -> bool {
        self.age += 1;
        self.age <= self.params().max_age
    }

    /// Burn one step of food. Returns false once the animal has starved.
    pub fn increment_hunger(&mut self) -> bool {
        self.food_level = self.food_level.saturating_sub(1);
        self.food_level > 0
    }

    pub fn can_breed(&self) -> bool {
        self.age >= self.params().breeding_age
    }

    /// Same species, opposite sex, both alive
    pub fn is_mate_for(&self, other: &Animal) -> bool {
        self.alive
            && other.alive
            && self.species == other.species
            && other.sex == self.sex.opposite()
    }
}

/// Index arena for animals. Slots of purged animals are reused.
#[derive(Debug, Clone, Default)]
pub struct Population {
    slots: Vec<Option<Animal>>,
    free: Vec<usize>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, animal: Animal) -> AnimalId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(animal);
                AnimalId(index)
            }
            None => {
                self.slots.push(Some(animal));
                AnimalId(self.slots.len() - 1)
            }
        }
    }

    pub fn get(&self, id: AnimalId) -> Option<&Animal> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: AnimalId) -> Option<&mut Animal> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    pub fn remove(&mut self, id: AnimalId) -> Option<Animal> {
        let removed = self.slots.get_mut(id.index()).and_then(|slot| slot.take());
        if removed.is_some() {
            self.free.push(id.index());
        }
        removed
    }

    pub fn contains(&self, id: AnimalId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimalId, &Animal)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (AnimalId(i), a)))
    }
}
