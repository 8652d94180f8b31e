use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One variant form of the single modeled gene.
///
/// `Allele` is a compact, copyable value. An individual carries two of them,
/// one inherited from each parent. Dominance is a property of expression, not
/// of the allele itself; see [`Phenotype`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allele {
    Dominant,
    Recessive,
}

impl Allele {
    /// Draw an allele uniformly at random (fair coin).
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Dominant
        } else {
            Self::Recessive
        }
    }

    /// Return true if this is the dominant variant.
    #[inline(always)]
    pub const fn is_dominant(self) -> bool {
        matches!(self, Self::Dominant)
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dominant => write!(f, "A"),
            Self::Recessive => write!(f, "a"),
        }
    }
}

/// The expressed trait of an individual.
///
/// Classic Mendelian dominance: the dominant phenotype is expressed whenever
/// at least one of the two alleles is dominant; the recessive phenotype only
/// when both alleles are recessive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phenotype {
    Dominant,
    Recessive,
}

impl Phenotype {
    /// Express a pair of alleles as a phenotype.
    #[inline]
    pub const fn express(allele1: Allele, allele2: Allele) -> Self {
        if allele1.is_dominant() || allele2.is_dominant() {
            Self::Dominant
        } else {
            Self::Recessive
        }
    }

    /// Return true if this is the recessive phenotype.
    #[inline(always)]
    pub const fn is_recessive(self) -> bool {
        matches!(self, Self::Recessive)
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dominant => write!(f, "dominant"),
            Self::Recessive => write!(f, "recessive"),
        }
    }
}
