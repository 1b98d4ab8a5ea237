//! Runs a page replacement simulation over a job file and prints the report.
//!
//! Usage: `pagesim <jobs.csv> [physical_capacity] [swap_capacity]`

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use pagesim::{MemoryConfig, PageManager, SimulationReport};

fn parse_capacity(arg: Option<String>, default: usize, name: &str) -> anyhow::Result<usize> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid {} capacity {:?}", name, value)),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: pagesim <jobs.csv> [physical_capacity] [swap_capacity]");
    };

    let defaults = MemoryConfig::default();
    let config = MemoryConfig::new(
        parse_capacity(args.next(), defaults.physical_capacity, "physical")?,
        parse_capacity(args.next(), defaults.swap_capacity, "swap")?,
    );

    let mut manager = PageManager::with_config(config);
    manager
        .load_from_file(&path)
        .with_context(|| format!("failed to load jobs from {}", path))?;
    manager.process()?;

    print!("{}", SimulationReport::from_manager(&manager));
    Ok(())
}
