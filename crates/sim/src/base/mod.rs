//! Base types for the single-locus trait model.
//!
//! This module provides the elementary value types used everywhere in the
//! crate: alleles, expressed phenotypes, and organism sex.

mod allele;
mod sex;

pub use allele::{Allele, Phenotype};
pub use sex::Sex;
