use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Organism sex, fixed at creation.
///
/// Sex only matters for pairing: one parent of each sex is required to
/// produce offspring. It has no effect on trait expression or survival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Draw a sex uniformly at random (fair coin).
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// The opposite sex.
    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_sex_opposite() {
        assert_eq!(Sex::Male.opposite(), Sex::Female);
        assert_eq!(Sex::Female.opposite(), Sex::Male);
        assert_eq!(Sex::Male.opposite().opposite(), Sex::Male);
    }

    #[test]
    fn test_sex_random_produces_both_variants() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);

        let draws: Vec<Sex> = (0..200).map(|_| Sex::random(&mut rng)).collect();
        assert!(draws.contains(&Sex::Male));
        assert!(draws.contains(&Sex::Female));
    }

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Male.to_string(), "male");
        assert_eq!(Sex::Female.to_string(), "female");
    }
}
