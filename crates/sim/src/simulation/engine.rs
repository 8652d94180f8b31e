//! Simulation engine for the generational inheritance loop.
//!
//! The engine drives repeated generation steps (breed, predate, cull) until
//! the population goes extinct or the recessive phenotype fixes, emitting one
//! observation per tick for the caller to report however it wishes.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, PairingError};
use crate::simulation::{Population, SpeciesConfig};

/// Engine state. `Extinct` and `Fixed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    /// The population still mixes phenotypes (or has not been inspected yet)
    Running,
    /// The population reached zero members
    Extinct,
    /// Every member expresses the recessive phenotype and the population
    /// outgrew its founding size
    Fixed,
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Extinct,
    Fixed,
}

/// One generation-level observation.
///
/// Emitted once per tick *before* the population is mutated, plus once more
/// as the terminal record. `outcome` is `None` on progress ticks and set on
/// the terminal tick only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Generation counter at the time of observation
    pub generation: usize,
    /// Live members at the time of observation
    pub total_population: usize,
    /// Share of members expressing the recessive phenotype, 0-100
    pub recessive_percent: f64,
    /// Terminal tag, present on the final observation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

/// Main simulation engine.
///
/// Owns the population, the run parameters, and the random source. All
/// randomness flows through one seeded [`Xoshiro256PlusPlus`] handle, so a
/// seeded run is fully reproducible.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Run parameters, fixed at construction
    config: SpeciesConfig,
    /// State machine position
    state: SimulationState,
    /// Random number generator
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from a validated configuration.
    ///
    /// The founding population of `initial_population` random individuals is
    /// drawn immediately. With `seed` set, two simulations constructed from
    /// the same configuration emit identical observation streams.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration violates any constraint;
    /// no simulation state is created in that case.
    pub fn new(config: SpeciesConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Self::rng_from_seed(config.seed);

        let population = Population::random(
            config.name.as_str(),
            config.initial_population,
            config.max_capacity,
            config.dominant_advantage,
            &mut rng,
        );

        Ok(Self {
            population,
            config,
            state: SimulationState::Running,
            rng,
        })
    }

    /// Create a simulation around an existing population.
    ///
    /// The configuration is taken as-is, without re-validation: this
    /// constructor exists for callers that seed specific genotypes (or an
    /// empty population) instead of random founders, including exercising
    /// boundary parameters the validated path rejects.
    /// `config.initial_population` still serves as the fixation baseline.
    pub fn from_population(population: Population, config: SpeciesConfig) -> Self {
        let rng = Self::rng_from_seed(config.seed);
        Self {
            population,
            config,
            state: SimulationState::Running,
            rng,
        }
    }

    fn rng_from_seed(seed: Option<u64>) -> Xoshiro256PlusPlus {
        match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }

    /// The current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// The run configuration.
    pub fn config(&self) -> &SpeciesConfig {
        &self.config
    }

    /// Current state machine position.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Check whether the simulation reached `Extinct` or `Fixed`.
    pub fn is_terminal(&self) -> bool {
        self.state != SimulationState::Running
    }

    /// Snapshot the population as an observation.
    fn observe(&self, outcome: Option<Outcome>) -> Observation {
        Observation {
            generation: self.population.generation(),
            total_population: self.population.size(),
            recessive_percent: self.population.recessive_fraction() * 100.0,
            outcome,
        }
    }

    /// Advance the state machine by one tick.
    ///
    /// Inspects the population first: extinction and fixation are recognized
    /// *before* any mutation, so the terminal observation describes the
    /// population exactly as the previous generation left it. On a progress
    /// tick the three generation phases run (breed, predate, cull) and the
    /// generation counter increments.
    ///
    /// Calling `tick` on a terminal simulation re-emits the terminal
    /// observation and changes nothing.
    ///
    /// # Errors
    ///
    /// [`PairingError`] can only escape if the sex-partitioned pairing in
    /// [`Population::breed_new_generation`] regresses.
    pub fn tick(&mut self) -> Result<Observation, PairingError> {
        match self.state {
            SimulationState::Extinct => return Ok(self.observe(Some(Outcome::Extinct))),
            SimulationState::Fixed => return Ok(self.observe(Some(Outcome::Fixed))),
            SimulationState::Running => {}
        }

        if self.population.is_empty() {
            self.state = SimulationState::Extinct;
            return Ok(self.observe(Some(Outcome::Extinct)));
        }

        // The size guard avoids declaring fixation on a degenerate
        // all-recessive founding population.
        if self.population.recessive_fraction() == 1.0
            && self.population.size() > self.config.initial_population
        {
            self.state = SimulationState::Fixed;
            return Ok(self.observe(Some(Outcome::Fixed)));
        }

        let observation = self.observe(None);

        self.population.breed_new_generation(&mut self.rng)?;
        self.population.predator_attack(
            self.config.base_survival_percent,
            self.config.trait_bonus_percent,
            &mut self.rng,
        );
        self.population.cull_past_maximum(&mut self.rng);
        self.population.increment_generation();

        Ok(observation)
    }

    /// Run until a terminal state, feeding every observation to `observer`.
    ///
    /// A population that perpetually mixes phenotypes never terminates; use
    /// [`run_for`](Self::run_for) when an upper bound is required.
    pub fn run<F>(&mut self, mut observer: F) -> Result<Outcome, PairingError>
    where
        F: FnMut(&Observation),
    {
        loop {
            let observation = self.tick()?;
            observer(&observation);
            if let Some(outcome) = observation.outcome {
                return Ok(outcome);
            }
        }
    }

    /// Run for at most `max_generations` further generations.
    ///
    /// Returns the outcome if a terminal state was reached within the bound,
    /// `None` otherwise.
    pub fn run_for<F>(
        &mut self,
        max_generations: usize,
        mut observer: F,
    ) -> Result<Option<Outcome>, PairingError>
    where
        F: FnMut(&Observation),
    {
        for _ in 0..max_generations {
            let observation = self.tick()?;
            observer(&observation);
            if let Some(outcome) = observation.outcome {
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }
}
