//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use allevo_sim::prelude::*;
//!
//! let sim = SimulationBuilder::new()
//!     .initial_population(10)
//!     .max_capacity(100)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! assert_eq!(sim.population().size(), 10);
//! ```

pub use crate::base::{Allele, Phenotype, Sex};
pub use crate::errors::{self, BuilderError, ConfigError, PairingError};
pub use crate::evolution::{mate, SurvivalModel};
pub use crate::genome::Individual;
pub use crate::simulation::{
    Observation, Outcome, Population, Simulation, SimulationBuilder, SimulationState,
    SpeciesConfig,
};
