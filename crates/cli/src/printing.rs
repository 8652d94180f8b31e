//! Console reporting for simulation runs.
//!
//! The core emits plain observation records; everything about how they look
//! on a terminal lives here.

use allevo_sim::simulation::{Observation, Outcome, SpeciesConfig};

/// Print the run parameters before the first generation.
pub fn print_run_header(config: &SpeciesConfig) {
    println!("RECESSIVE GENE EVOLUTION SIMULATION");
    println!("===================================");
    println!("Species:            {}", config.name);
    println!("Initial population: {}", config.initial_population);
    println!("Maximum population: {}", config.max_capacity);
    println!("Survival chance:    {}%", config.base_survival_percent);
    println!(
        "Trait bonus:        {}% (favoring the {} phenotype)",
        config.trait_bonus_percent,
        config.favored_phenotype()
    );
    if let Some(seed) = config.seed {
        println!("Seed:               {seed}");
    }
    println!();
}

/// Print one observation as a generation report.
pub fn print_observation(species: &str, obs: &Observation) {
    match obs.outcome {
        None => {
            println!("GENERATION {}", obs.generation);
            println!("There are {} {} total.", obs.total_population, species);
            println!(
                "{:.1} percent of {} have the recessive trait.",
                obs.recessive_percent, species
            );
        }
        Some(Outcome::Extinct) => {
            println!("GENERATION {}", obs.generation);
            println!("The {species} have gone extinct.");
        }
        Some(Outcome::Fixed) => {
            println!("GENERATION {}", obs.generation);
            println!(
                "The entire population of {} {} has evolved to have the recessive phenotype.",
                obs.total_population, species
            );
        }
    }
}

/// Print one observation as a JSON line.
pub fn print_json_line(obs: &Observation) {
    // Observation serialization is infallible (plain numbers and a tag).
    println!(
        "{}",
        serde_json::to_string(obs).expect("observation serializes")
    );
}
