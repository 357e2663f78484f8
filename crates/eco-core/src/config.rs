//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest field accepted by [`SimulationConfig::validate`]
pub const MAX_FIELD_CELLS: i64 = 16_777_216;

/// Field dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of rows
    pub depth: i32,
    /// Number of columns
    pub width: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            depth: 80,
            width: 120,
        }
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of ticks for a long run
    pub num_steps: u64,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Field configuration
    pub field: FieldConfig,
    /// Chance that a cell starts with a fox
    pub fox_creation_probability: f64,
    /// Chance that a cell starts with a deer (checked after the fox roll)
    pub deer_creation_probability: f64,
    /// Ticks between census log lines
    pub log_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_steps: 4000,
            seed: 1111,
            field: FieldConfig::default(),
            fox_creation_probability: 0.02,
            deer_creation_probability: 0.08,
            log_interval: 100,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.field.depth <= 0 || self.field.width <= 0 {
            return Err(Error::InvalidConfig(format!(
                "field dimensions must be positive, got {}x{}",
                self.field.depth, self.field.width
            )));
        }

        let cells = self.field.depth.checked_mul(self.field.width);
        if cells.map_or(true, |c| i64::from(c) > MAX_FIELD_CELLS) {
            return Err(Error::InvalidConfig(format!(
                "field of {}x{} exceeds the maximum of {} cells",
                self.field.depth, self.field.width, MAX_FIELD_CELLS
            )));
        }

        for (name, p) in [
            ("fox_creation_probability", self.fox_creation_probability),
            ("deer_creation_probability", self.deer_creation_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }

        if self.log_interval == 0 {
            return Err(Error::InvalidConfig("log_interval must be non-zero".to_string()));
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = SimulationConfig::default();
        assert_eq!(config.field.depth, 80);
        assert_eq!(config.field.width, 120);
        assert_eq!(config.num_steps, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimulationConfig::from_json_str(r#"{"seed": 7, "field": {"depth": 10, "width": 12}}"#)
                .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.field.width, 12);
        assert_eq!(config.fox_creation_probability, 0.02);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let result = SimulationConfig::from_json_str(r#"{"field": {"depth": 0, "width": 5}}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_field_rejected() {
        let config = SimulationConfig {
            field: FieldConfig {
                depth: 70_000,
                width: 70_000,
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = SimulationConfig {
            field: FieldConfig {
                depth: 4097,
                width: 4096,
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_largest_field_accepted() {
        let config = SimulationConfig {
            field: FieldConfig {
                depth: 4096,
                width: 4096,
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let config = SimulationConfig {
            deer_creation_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = SimulationConfig::from_json_str("{not json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
