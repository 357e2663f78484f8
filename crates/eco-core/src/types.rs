//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an animal record in the population arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub usize);

impl AnimalId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A cell coordinate in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.to_delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight compass neighbours of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// `(row, col)` offset; north is towards row 0.
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// All directions in row-major order.
    pub fn all() -> [Direction; 8] {
        [
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::West,
            Direction::East,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn from_bool(male: bool) -> Self {
        if male {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }
}

/// Life-cycle constants shared by every member of a species
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesParams {
    pub name: &'static str,
    /// Age at which breeding becomes possible
    pub breeding_age: u32,
    /// Oldest age an animal survives to
    pub max_age: u32,
    /// Chance of breeding in a tick once all other conditions hold
    pub breeding_probability: f64,
    /// Upper bound of a litter
    pub max_litter_size: u32,
    /// Whether an opposite-sex neighbour of the same species is needed to breed
    pub requires_mate: bool,
    /// Species this one hunts, if it is a predator
    pub prey: Option<Species>,
    /// Steps of food a predator gains by eating one of these
    pub food_value: u32,
}

pub const DEER: SpeciesParams = SpeciesParams {
    name: "Deer",
    breeding_age: 5,
    max_age: 40,
    breeding_probability: 0.12,
    max_litter_size: 4,
    requires_mate: true,
    prey: None,
    food_value: 9,
};

pub const FOX: SpeciesParams = SpeciesParams {
    name: "Fox",
    breeding_age: 15,
    max_age: 150,
    breeding_probability: 0.08,
    max_litter_size: 2,
    requires_mate: false,
    prey: Some(Species::Deer),
    food_value: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Deer,
    Fox,
}

impl Species {
    pub fn params(&self) -> &'static SpeciesParams {
        match self {
            Species::Deer => &DEER,
            Species::Fox => &FOX,
        }
    }

    pub fn is_predator(&self) -> bool {
        self.params().prey.is_some()
    }

    pub fn all() -> [Species; 2] {
        [Species::Deer, Species::Fox]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.params().name)
    }
}
