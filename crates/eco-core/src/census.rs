//! Population counts for a field snapshot.

use crate::types::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Live animals per species
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    counts: BTreeMap<Species, u64>,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, species: Species) {
        *self.counts.entry(species).or_insert(0) += 1;
    }

    pub fn count(&self, species: Species) -> u64 {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// A run stays interesting while more than one species is alive.
    pub fn is_viable(&self) -> bool {
        self.counts.values().filter(|&&c| c > 0).count() > 1
    }
}

impl FromIterator<Species> for Census {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut census = Census::new();
        for species in iter {
            census.increment(species);
        }
        census
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Species::all()
            .iter()
            .map(|s| format!("{}: {}", s, self.count(*s)))
            .collect();
        f.write_str(&parts.join(" "))
    }
}
