//! Run parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::base::Phenotype;
use crate::errors::ConfigError;

/// The fixed parameters of one simulation run.
///
/// Can be serialized to fully reproduce a run (given the same `seed`).
/// Validation happens once, up front, via [`validate`](Self::validate);
/// after construction the engine trusts every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Species name, descriptive only
    pub name: String,
    /// Number of random founders
    pub initial_population: usize,
    /// Carrying capacity enforced after each generation
    pub max_capacity: usize,
    /// Base survival chance per predator attack, percent (1-100)
    pub base_survival_percent: u32,
    /// Additive survival bonus for the favored phenotype, percentage points (1-100)
    pub trait_bonus_percent: u32,
    /// Whether the dominant phenotype holds the survival advantage
    pub dominant_advantage: bool,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SpeciesConfig {
    /// Validate every constraint the engine will later assume.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: empty name, zero initial
    /// population or capacity, or a percentage outside 1-100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.initial_population == 0 {
            return Err(ConfigError::ZeroInitialPopulation);
        }
        if self.max_capacity == 0 {
            return Err(ConfigError::ZeroMaxCapacity);
        }
        if !(1..=100).contains(&self.base_survival_percent) {
            return Err(ConfigError::PercentOutOfRange {
                name: "base survival percent",
                value: self.base_survival_percent,
            });
        }
        if !(1..=100).contains(&self.trait_bonus_percent) {
            return Err(ConfigError::PercentOutOfRange {
                name: "trait bonus percent",
                value: self.trait_bonus_percent,
            });
        }
        Ok(())
    }

    /// The phenotype favored during predation under this configuration.
    pub fn favored_phenotype(&self) -> Phenotype {
        if self.dominant_advantage {
            Phenotype::Dominant
        } else {
            Phenotype::Recessive
        }
    }
}
