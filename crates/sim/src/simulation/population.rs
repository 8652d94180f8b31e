//! Population management and the per-generation phases.
//!
//! A [`Population`] owns the live members of one species and applies the
//! three phases of a generation, always in this order: breeding, predation,
//! capacity enforcement.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::base::{Phenotype, Sex};
use crate::errors::PairingError;
use crate::evolution::{mate, SurvivalModel};
use crate::genome::Individual;

/// A closed population of individuals of one species.
///
/// Member order carries no meaning: every phase that depends on order
/// shuffles first, so no correctness property may rely on insertion order.
/// The member vector is rebuilt by filtering (predation) or truncated after
/// a shuffle (culling), never thinned by element-wise deletion.
#[derive(Debug, Clone)]
pub struct Population {
    /// Species name, descriptive only
    name: Arc<str>,
    /// The live members
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
    /// Carrying capacity enforced after each generation's breeding and selection
    max_capacity: usize,
    /// Whether the dominant phenotype holds the survival advantage
    dominant_advantage: bool,
}

impl Population {
    /// Create a population from existing members.
    pub fn new(
        name: impl Into<Arc<str>>,
        max_capacity: usize,
        dominant_advantage: bool,
        individuals: Vec<Individual>,
    ) -> Self {
        Self {
            name: name.into(),
            individuals,
            generation: 0,
            max_capacity,
            dominant_advantage,
        }
    }

    /// Create a founding population of `size` random individuals.
    pub fn random<R: Rng + ?Sized>(
        name: impl Into<Arc<str>>,
        size: usize,
        max_capacity: usize,
        dominant_advantage: bool,
        rng: &mut R,
    ) -> Self {
        let individuals = (0..size).map(|_| Individual::random(rng)).collect();
        Self::new(name, max_capacity, dominant_advantage, individuals)
    }

    /// Species name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Number of live members.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The carrying capacity.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Whether the dominant phenotype holds the survival advantage.
    pub fn dominant_advantage(&self) -> bool {
        self.dominant_advantage
    }

    /// The phenotype favored during predation.
    pub fn favored_phenotype(&self) -> Phenotype {
        if self.dominant_advantage {
            Phenotype::Dominant
        } else {
            Phenotype::Recessive
        }
    }

    /// All live members as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get a specific member by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Count members expressing the recessive phenotype.
    pub fn recessive_count(&self) -> usize {
        self.individuals
            .iter()
            .filter(|ind| ind.phenotype().is_recessive())
            .count()
    }

    /// Fraction of members expressing the recessive phenotype, in [0, 1].
    ///
    /// An empty population yields 0.0.
    pub fn recessive_fraction(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.recessive_count() as f64 / self.individuals.len() as f64
    }

    /// Phase 1: breed one offspring per opposite-sex pair.
    ///
    /// The member vector is shuffled, then partitioned by sex; the first
    /// `k = min(males, females)` members of each group are paired off.
    /// Surplus members of the larger group neither reproduce nor die; they
    /// stay in the live set, excluded from pairing for this generation only.
    /// Pairing order is shuffled independently of the partition so mate
    /// assignment is not correlated across generations.
    ///
    /// Returns the number of offspring appended, which is always `k`.
    pub fn breed_new_generation<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<usize, PairingError> {
        // Shuffle first: which surplus members go unpaired must vary run to run.
        self.individuals.shuffle(rng);

        let mut males = Vec::new();
        let mut females = Vec::new();
        for (index, individual) in self.individuals.iter().enumerate() {
            match individual.sex() {
                Sex::Male => males.push(index),
                Sex::Female => females.push(index),
            }
        }

        let pairs = males.len().min(females.len());
        males.truncate(pairs);
        females.truncate(pairs);
        // Independent shuffle of one side decouples mate assignment from the
        // partition order above.
        females.shuffle(rng);

        let mut offspring = Vec::with_capacity(pairs);
        for (&male_idx, &female_idx) in males.iter().zip(females.iter()) {
            let child = mate(
                &self.individuals[male_idx],
                &self.individuals[female_idx],
                rng,
            )?;
            offspring.push(child);
        }

        self.individuals.extend(offspring);
        Ok(pairs)
    }

    /// Phase 2: subject every member to an independent survival trial.
    ///
    /// The favored phenotype (per `dominant_advantage`) survives with
    /// probability `(base + bonus) / 100`, the disfavored one with
    /// `base / 100`. Survivors are collected into a fresh vector and
    /// shuffled so downstream pairing never observes mating-order artifacts.
    /// Inputs are not re-validated here; see [`SurvivalModel`].
    pub fn predator_attack<R: Rng + ?Sized>(
        &mut self,
        base_survival_percent: u32,
        trait_bonus_percent: u32,
        rng: &mut R,
    ) {
        let model = SurvivalModel::new(
            base_survival_percent,
            trait_bonus_percent,
            self.favored_phenotype(),
        );

        let survivors: Vec<Individual> = self
            .individuals
            .iter()
            .copied()
            .filter(|ind| model.survives(ind.phenotype(), rng))
            .collect();

        self.individuals = survivors;
        self.individuals.shuffle(rng);
    }

    /// Phase 3: enforce the carrying capacity.
    ///
    /// If the population exceeds `max_capacity`, members to remove are chosen
    /// uniformly at random (shuffle, then truncate). Otherwise a no-op.
    pub fn cull_past_maximum<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.individuals.len() <= self.max_capacity {
            return;
        }
        self.individuals.shuffle(rng);
        self.individuals.truncate(self.max_capacity);
    }
}
