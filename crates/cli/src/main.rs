mod printing;

use anyhow::{Context, Result};
use clap::Parser;

use allevo_sim::simulation::{Observation, SimulationBuilder};

/// Allevo: a recessive-trait evolution simulator
///
/// Simulates generations of a species under predator pressure until it goes
/// extinct or evolves to express the tested recessive trait everywhere,
/// showing that recessive traits are not necessarily rarer than dominant
/// ones.
#[derive(Parser, Debug)]
#[command(name = "allevo")]
#[command(author, version, about = "Simulates recessive-trait inheritance under predation", long_about = None)]
struct Cli {
    /// Name of the species being tested
    #[arg(short = 'N', long, default_value = "species")]
    name: String,

    /// Population the species starts with
    #[arg(short = 'n', long, default_value = "50")]
    initial_population: usize,

    /// Highest population the environment can sustain
    #[arg(short = 'm', long, default_value = "500")]
    max_capacity: usize,

    /// Chance that any given member survives until the next generation (1-100)
    #[arg(short = 's', long, default_value = "70")]
    survival: u32,

    /// How much likelier a holder of the favored trait is to survive (1-100)
    #[arg(short = 'b', long, default_value = "25")]
    trait_bonus: u32,

    /// Favor the dominant phenotype instead of the recessive one
    #[arg(long)]
    dominant_advantage: bool,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations even without a terminal outcome
    #[arg(short = 'g', long)]
    max_generations: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = SimulationBuilder::new()
        .name(cli.name.clone())
        .initial_population(cli.initial_population)
        .max_capacity(cli.max_capacity)
        .base_survival_percent(cli.survival)
        .trait_bonus_percent(cli.trait_bonus)
        .dominant_advantage(cli.dominant_advantage);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    let mut sim = builder.build().context("Invalid simulation parameters")?;

    let json = cli.format == "json";
    if !json {
        printing::print_run_header(sim.config());
    }

    let species = cli.name;
    let observer = |obs: &Observation| {
        if json {
            printing::print_json_line(obs);
        } else {
            printing::print_observation(&species, obs);
        }
    };

    let outcome = match cli.max_generations {
        Some(limit) => sim
            .run_for(limit, observer)
            .context("Simulation step failed")?,
        None => Some(sim.run(observer).context("Simulation step failed")?),
    };

    if !json && outcome.is_none() {
        println!(
            "Reached the generation limit after {} generations without a terminal outcome.",
            sim.generation()
        );
    }

    Ok(())
}
