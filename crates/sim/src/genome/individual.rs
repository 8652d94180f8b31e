use rand::Rng;

use crate::base::{Allele, Phenotype, Sex};

/// A single organism: a sex and two alleles at the modeled locus.
///
/// `Individual` is deliberately immutable after creation: sex and alleles
/// are fixed for the organism's lifetime, and death is modeled by removal
/// from the population's live-member list, never by mutating the individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Individual {
    /// Organism sex, fixed at creation
    sex: Sex,
    /// Allele inherited from the male parent (or drawn at initialization)
    allele1: Allele,
    /// Allele inherited from the female parent (or drawn at initialization)
    allele2: Allele,
}

impl Individual {
    /// Create an individual with explicit sex and alleles.
    pub const fn new(sex: Sex, allele1: Allele, allele2: Allele) -> Self {
        Self {
            sex,
            allele1,
            allele2,
        }
    }

    /// Create a founder individual with sex and both alleles drawn
    /// independently and uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            sex: Sex::random(rng),
            allele1: Allele::random(rng),
            allele2: Allele::random(rng),
        }
    }

    /// The organism's sex.
    #[inline]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// The first allele.
    #[inline]
    pub const fn allele1(&self) -> Allele {
        self.allele1
    }

    /// The second allele.
    #[inline]
    pub const fn allele2(&self) -> Allele {
        self.allele2
    }

    /// The expressed trait: dominant iff either allele is dominant.
    #[inline]
    pub const fn phenotype(&self) -> Phenotype {
        Phenotype::express(self.allele1, self.allele2)
    }

    /// Contribute one gamete allele for reproduction.
    ///
    /// Models meiotic segregation: each call independently returns `allele1`
    /// or `allele2` with equal probability. Read-only; the individual is
    /// never mutated.
    #[inline]
    pub fn contribute_allele<R: Rng + ?Sized>(&self, rng: &mut R) -> Allele {
        if rng.random_bool(0.5) {
            self.allele1
        } else {
            self.allele2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn test_individual_new() {
        let ind = Individual::new(Sex::Female, Allele::Dominant, Allele::Recessive);

        assert_eq!(ind.sex(), Sex::Female);
        assert_eq!(ind.allele1(), Allele::Dominant);
        assert_eq!(ind.allele2(), Allele::Recessive);
    }

    #[test]
    fn test_individual_phenotype() {
        let heterozygous = Individual::new(Sex::Male, Allele::Dominant, Allele::Recessive);
        assert_eq!(heterozygous.phenotype(), Phenotype::Dominant);

        let homozygous_recessive =
            Individual::new(Sex::Male, Allele::Recessive, Allele::Recessive);
        assert_eq!(homozygous_recessive.phenotype(), Phenotype::Recessive);
    }

    #[test]
    fn test_phenotype_idempotent() {
        let ind = Individual::new(Sex::Female, Allele::Recessive, Allele::Dominant);

        // Repeated calls on an immutable individual always agree.
        let first = ind.phenotype();
        for _ in 0..10 {
            assert_eq!(ind.phenotype(), first);
        }
    }

    #[test]
    fn test_contribute_allele_comes_from_carried_pair() {
        let mut rng = rng(42);
        let ind = Individual::new(Sex::Male, Allele::Dominant, Allele::Recessive);

        for _ in 0..100 {
            let gamete = ind.contribute_allele(&mut rng);
            assert!(gamete == ind.allele1() || gamete == ind.allele2());
        }
    }

    #[test]
    fn test_contribute_allele_segregates_both() {
        let mut rng = rng(42);
        let ind = Individual::new(Sex::Male, Allele::Dominant, Allele::Recessive);

        let gametes: Vec<Allele> = (0..200).map(|_| ind.contribute_allele(&mut rng)).collect();
        assert!(gametes.contains(&Allele::Dominant));
        assert!(gametes.contains(&Allele::Recessive));
    }

    #[test]
    fn test_contribute_allele_homozygous() {
        let mut rng = rng(3);
        let ind = Individual::new(Sex::Female, Allele::Recessive, Allele::Recessive);

        for _ in 0..50 {
            assert_eq!(ind.contribute_allele(&mut rng), Allele::Recessive);
        }
    }

    #[test]
    fn test_individual_random_covers_space() {
        let mut rng = rng(9);

        let founders: Vec<Individual> = (0..300).map(|_| Individual::random(&mut rng)).collect();

        assert!(founders.iter().any(|i| i.sex() == Sex::Male));
        assert!(founders.iter().any(|i| i.sex() == Sex::Female));
        assert!(founders.iter().any(|i| i.phenotype() == Phenotype::Dominant));
        assert!(founders
            .iter()
            .any(|i| i.phenotype() == Phenotype::Recessive));
    }
}
