//! Tick driver: owns the roster, populates the field and keeps a census.

use crate::ecosystem::Ecosystem;
use crate::field::Field;
use crate::randomizer::{RandomSource, Randomizer};
use eco_core::{AnimalId, Census, Location, Result, SimulationConfig, Species};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

pub struct Simulator {
    config: SimulationConfig,
    ecosystem: Ecosystem<Randomizer>,
    roster: Vec<AnimalId>,
    step: u64,
    census: Census,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let ecosystem = Ecosystem::new(
            Field::from_config(&config.field),
            Randomizer::new(config.seed),
        );

        let mut sim = Self {
            config,
            ecosystem,
            roster: Vec::new(),
            step: 0,
            census: Census::new(),
        };
        sim.populate()?;
        Ok(sim)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn ecosystem(&self) -> &Ecosystem<Randomizer> {
        &self.ecosystem
    }

    pub fn roster(&self) -> &[AnimalId] {
        &self.roster
    }

    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn census(&self) -> &Census {
        &self.census
    }

    pub fn is_viable(&self) -> bool {
        self.census.is_viable()
    }

    /// Run `config.num_steps` ticks, or fewer if a species dies out
    pub fn run_long_simulation(&mut self) -> Result<SimulationReport> {
        self.simulate(self.config.num_steps)?;
        Ok(self.report())
    }

    /// Run up to `num_steps` ticks, stopping early once the run is no longer
    /// viable. Returns the number of ticks actually run.
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn simulate(&mut self, num_steps: u64) -> Result<u64> {
        info!("Starting simulation for {} steps", num_steps);

        let mut ran = 0;
        while ran < num_steps && self.is_viable() {
            self.simulate_one_step()?;
            ran += 1;

            if self.step % self.config.log_interval == 0 {
                info!(
                    step = self.step,
                    population = self.roster.len(),
                    "{}",
                    self.census
                );
            }
        }

        if !self.is_viable() {
            info!(step = self.step, census = %self.census, "simulation no longer viable");
        }

        Ok(ran)
    }

    pub fn simulate_one_step(&mut self) -> Result<()> {
        self.step += 1;
        self.roster = self.ecosystem.step(&self.roster)?;
        self.update_census();
        debug!(step = self.step, census = %self.census, "tick");
        Ok(())
    }

    /// Start over from the configured seed
    pub fn reset(&mut self) -> Result<()> {
        self.step = 0;
        self.ecosystem.clear();
        self.ecosystem.rng_mut().reset();
        self.populate()
    }

    /// Fill the field row by row: each cell may get a fox, failing that a deer.
    fn populate(&mut self) -> Result<()> {
        self.roster.clear();

        let locations: Vec<Location> = self.ecosystem.field().locations().collect();
        for loc in locations {
            let roll = self.ecosystem.rng_mut().next_f64();
            let species = if roll <= self.config.fox_creation_probability {
                Some(Species::Fox)
            } else if roll <= self.config.deer_creation_probability {
                Some(Species::Deer)
            } else {
                None
            };

            if let Some(species) = species {
                let id = self.ecosystem.create_animal(species, true, loc)?;
                self.roster.push(id);
            }
        }

        self.update_census();
        info!(population = self.roster.len(), census = %self.census, "field populated");
        Ok(())
    }

    fn update_census(&mut self) {
        let population = self.ecosystem.population();
        self.census = self
            .ecosystem
            .field()
            .iter()
            .filter_map(|(_, cell)| cell)
            .filter_map(|id| population.get(id))
            .map(|animal| animal.species)
            .collect();
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            seed: self.config.seed,
            steps: self.step,
            viable: self.is_viable(),
            census: self.census.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub steps: u64,
    pub viable: bool,
    pub census: Census,
}
