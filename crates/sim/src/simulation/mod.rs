//! Simulation engine and population management.
//!
//! This module provides the core generational loop and population management:
//!
//! - `Simulation`: the engine that inspects the population, emits
//!   observations, and runs the three generation phases.
//! - `Population`: in-memory container for the live members of one species.
//! - `SpeciesConfig`: validated run parameters.
//! - `SimulationBuilder`: fluent builder with defaults and validation.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod population;

pub use builder::SimulationBuilder;
pub use engine::{Observation, Outcome, Simulation, SimulationState};
pub use parameters::SpeciesConfig;
pub use population::Population;
