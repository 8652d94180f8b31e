//! Predation pressure: per-phenotype survival probabilities.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::Phenotype;

/// Survival model applied during a predator attack.
///
/// Every member of the population faces an independent Bernoulli trial each
/// generation. The phenotype favored by the environment survives with
/// probability `(base + bonus) / 100`, the disfavored phenotype with
/// `base / 100`.
///
/// The model performs no range validation of its own: configuration
/// validation happens up front in [`SpeciesConfig::validate`], and the
/// engine trusts its caller after that. Probabilities are clamped at 1.0 so
/// a maximal base plus bonus cannot overflow the trial.
///
/// [`SpeciesConfig::validate`]: crate::simulation::SpeciesConfig::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalModel {
    /// Base survival chance for every member, in percent
    base_percent: u32,
    /// Additive survival bonus for the favored phenotype, in percentage points
    bonus_percent: u32,
    /// Which phenotype the environment favors
    favored: Phenotype,
}

impl SurvivalModel {
    /// Create a survival model.
    pub const fn new(base_percent: u32, bonus_percent: u32, favored: Phenotype) -> Self {
        Self {
            base_percent,
            bonus_percent,
            favored,
        }
    }

    /// The phenotype granted the trait bonus.
    #[inline]
    pub const fn favored(&self) -> Phenotype {
        self.favored
    }

    /// Survival probability for a member expressing `phenotype`, in [0, 1].
    pub fn survival_probability(&self, phenotype: Phenotype) -> f64 {
        let percent = if phenotype == self.favored {
            self.base_percent + self.bonus_percent
        } else {
            self.base_percent
        };
        (f64::from(percent) / 100.0).min(1.0)
    }

    /// Run one independent survival trial for a member.
    #[inline]
    pub fn survives<R: Rng + ?Sized>(&self, phenotype: Phenotype, rng: &mut R) -> bool {
        rng.random_bool(self.survival_probability(phenotype))
    }
}
