//! Sexual reproduction of a single offspring from an opposite-sex pair.

use rand::Rng;

use crate::base::Sex;
use crate::errors::PairingError;
use crate::genome::Individual;

/// Breed one offspring from a male/female pair.
///
/// Each parent contributes one gamete via [`Individual::contribute_allele`]:
/// the offspring's first allele comes from the male parent, the second from
/// the female parent. Offspring sex is drawn uniformly at random.
///
/// The parents may be passed in either order. A same-sex pair is a reported
/// [`PairingError`]: the partition-and-zip pairing in the population guarantees
/// it cannot happen, so hitting it means the pairing step regressed.
pub fn mate<R: Rng + ?Sized>(
    parent_a: &Individual,
    parent_b: &Individual,
    rng: &mut R,
) -> Result<Individual, PairingError> {
    let (male, female) = match (parent_a.sex(), parent_b.sex()) {
        (Sex::Male, Sex::Female) => (parent_a, parent_b),
        (Sex::Female, Sex::Male) => (parent_b, parent_a),
        (sex, _) => return Err(PairingError { sex }),
    };

    let allele1 = male.contribute_allele(rng);
    let allele2 = female.contribute_allele(rng);
    let sex = Sex::random(rng);

    Ok(Individual::new(sex, allele1, allele2))
}
