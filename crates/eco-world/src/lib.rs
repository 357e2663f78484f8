//! Predator/prey grid engine.
//!
//! Animals live on a bounded [`Field`], one per cell, and are stored in an
//! index arena. Each tick every live animal ages, may breed, hunts if it is a
//! predator, and moves to a free neighbouring cell or dies of overcrowding.

pub mod animal;
pub mod ecosystem;
pub mod field;
pub mod randomizer;
pub mod simulator;

pub use animal::{Animal, Population};
pub use ecosystem::Ecosystem;
pub use field::Field;
pub use randomizer::{RandomSource, Randomizer};
#[cfg(any(test, feature = "test-util"))]
pub use randomizer::ScriptedRandom;
pub use simulator::{SimulationReport, Simulator};
