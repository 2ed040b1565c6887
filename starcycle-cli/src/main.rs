use clap::{Args, Parser, Subcommand};
use starcycle_core::{
    build_system, energy_after, format_parse_error, format_runtime_error, full_cycle,
    RuntimeError, SimulationConfig, SimulationError, DEFAULT_STEPS,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "starcycle")]
#[command(about = "Integer star simulation: energy after N steps and full-cycle length", long_about = None)]
struct Cli {
    /// Log per-axis cycle progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CycleArgs {
    /// Abort the cycle search after this many steps
    #[arg(long, value_name = "STEPS")]
    cycle_limit: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute both the energy after N steps and the full-cycle length
    Run {
        /// Path to the input file, one `<x=.., y=.., z=..>` per line
        file: PathBuf,
        /// Steps to simulate before measuring energy
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: u64,
        #[command(flatten)]
        cycle: CycleArgs,
        /// Print every body after the energy run
        #[arg(long)]
        show_state: bool,
    },
    /// Total energy after N steps
    Energy {
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: u64,
    },
    /// Steps until the whole system first returns to its initial state
    Cycle {
        file: PathBuf,
        #[command(flatten)]
        cycle: CycleArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            file,
            steps,
            cycle,
            show_state,
        } => {
            let config = SimulationConfig {
                steps,
                cycle_limit: cycle.cycle_limit,
            };
            run_file(&file, &config, show_state)
        }
        Commands::Energy { file, steps } => energy_file(&file, steps),
        Commands::Cycle { file, cycle } => cycle_file(&file, cycle.cycle_limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log filter used when `RUST_LOG` is not set
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn init_logging(verbose: bool) {
    let default_level = default_log_level(verbose);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Read and parse an input file, keeping parse errors tied to their line
fn load(file: &Path) -> Result<starcycle_core::System, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(file)?;
    match build_system(&source) {
        Ok(system) => Ok(system),
        Err(RuntimeError::Parse(e)) => Err(format_parse_error(&e, &source).into()),
        Err(e) => Err(format_runtime_error(&e).into()),
    }
}

/// Search for the full cycle, reporting failures as runtime errors
fn cycle_of(
    system: &mut starcycle_core::System,
    limit: Option<u64>,
) -> Result<u64, Box<dyn std::error::Error>> {
    full_cycle(system, limit).map_err(|e: SimulationError| format_runtime_error(&e).into())
}

fn run_file(
    file: &Path,
    config: &SimulationConfig,
    show_state: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut system = load(file)?;
    log::info!("loaded {} bodies from {}", system.len(), file.display());

    let energy = energy_after(&mut system, config.steps);
    if show_state {
        println!("After {} steps:\n{}", system.steps(), system);
    }
    println!("Part 1: {}", energy);

    let cycle = cycle_of(&mut system, config.cycle_limit)?;
    println!("Part 2: {}", cycle);

    Ok(())
}

fn energy_file(file: &Path, steps: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut system = load(file)?;
    println!("{}", energy_after(&mut system, steps));
    Ok(())
}

fn cycle_file(file: &Path, limit: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut system = load(file)?;
    println!("{}", cycle_of(&mut system, limit)?);
    Ok(())
}
