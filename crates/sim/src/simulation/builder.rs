//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

pub use crate::errors::BuilderError;
use crate::simulation::{Simulation, SpeciesConfig};

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use allevo_sim::simulation::SimulationBuilder;
///
/// let sim = SimulationBuilder::new()
///     .name("hares")
///     .initial_population(50)
///     .max_capacity(500)
///     .base_survival_percent(70)
///     .trait_bonus_percent(25)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    initial_population: Option<usize>,
    max_capacity: Option<usize>,

    // Defaulted parameters
    name: String,
    base_survival_percent: u32,    // Default: 50
    trait_bonus_percent: u32,      // Default: 20
    dominant_advantage: bool,      // Default: false (recessive favored)
    seed: Option<u64>,             // Default: None (random)
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            initial_population: None,
            max_capacity: None,
            name: "species".into(),
            base_survival_percent: 50,
            trait_bonus_percent: 20,
            dominant_advantage: false,
            seed: None,
        }
    }

    /// Set the species name (default: "species").
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the founding population size (required).
    pub fn initial_population(mut self, size: usize) -> Self {
        self.initial_population = Some(size);
        self
    }

    /// Set the carrying capacity (required).
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    /// Set the base survival percentage, 1-100 (default: 50).
    pub fn base_survival_percent(mut self, percent: u32) -> Self {
        self.base_survival_percent = percent;
        self
    }

    /// Set the trait bonus percentage, 1-100 (default: 20).
    pub fn trait_bonus_percent(mut self, percent: u32) -> Self {
        self.trait_bonus_percent = percent;
        self
    }

    /// Grant the survival advantage to the dominant phenotype instead of the
    /// recessive one (default: recessive favored, the reference scenario).
    pub fn dominant_advantage(mut self, advantage: bool) -> Self {
        self.dominant_advantage = advantage;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let initial_population = self
            .initial_population
            .ok_or(BuilderError::MissingRequired("initial_population"))?;
        let max_capacity = self
            .max_capacity
            .ok_or(BuilderError::MissingRequired("max_capacity"))?;

        let config = SpeciesConfig {
            name: self.name,
            initial_population,
            max_capacity,
            base_survival_percent: self.base_survival_percent,
            trait_bonus_percent: self.trait_bonus_percent,
            dominant_advantage: self.dominant_advantage,
            seed: self.seed,
        };

        Simulation::new(config).map_err(BuilderError::from)
    }
}
