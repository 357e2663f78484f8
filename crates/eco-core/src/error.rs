//! Error types for the simulation.

use crate::types::{AnimalId, Location};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid location {location} for a {depth}x{width} field")]
    InvalidLocation {
        location: Location,
        depth: i32,
        width: i32,
    },

    #[error("Occupancy conflict at {location}: held by {occupant}, cannot place {incoming}")]
    OccupancyConflict {
        location: Location,
        occupant: AnimalId,
        incoming: AnimalId,
    },

    #[error("Unknown animal: {0}")]
    UnknownAnimal(AnimalId),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
