use crate::parser::{parse_bodies, ParseError};
use crate::system::{SimulationError, System};
use log::info;
use thiserror::Error;

/// Number of steps used for the energy report when none is given
pub const DEFAULT_STEPS: u64 = 1000;

/// Any failure on the way from source text to a report
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// How a run is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Steps to run before measuring energy
    pub steps: u64,
    /// Give up the cycle search after this many steps
    pub cycle_limit: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            cycle_limit: None,
        }
    }
}

/// Final result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub body_count: usize,
    pub energy: i64,
    pub cycle: u64,
}

/// Build a system from source text
pub fn build_system(source: &str) -> Result<System, RuntimeError> {
    let positions = parse_bodies(source)?;
    Ok(System::new(positions))
}

/// Reset, run `steps` steps and return the total energy
pub fn energy_after(system: &mut System, steps: u64) -> i64 {
    system.reset();
    system.run_steps(steps);
    let energy = system.total_energy();
    info!("energy after {} steps: {}", steps, energy);
    energy
}

/// Reset and search for the full cycle length
pub fn full_cycle(system: &mut System, limit: Option<u64>) -> Result<u64, SimulationError> {
    system.reset();
    let cycle = system.find_full_cycle_length_within(limit)?;
    info!("full cycle: {} steps", cycle);
    Ok(cycle)
}

/// Main entry point: parse the source, then compute energy and cycle length
pub fn run_source(source: &str, config: &SimulationConfig) -> Result<Report, RuntimeError> {
    let mut system = build_system(source)?;
    info!("loaded {} bodies", system.len());

    let energy = energy_after(&mut system, config.steps);
    let cycle = full_cycle(&mut system, config.cycle_limit)?;

    Ok(Report {
        body_count: system.len(),
        energy,
        cycle,
    })
}
