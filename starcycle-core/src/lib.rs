pub mod body;
pub mod cycle;
pub mod diagnostics;
pub mod integrator;
pub mod parser;
pub mod runtime;
pub mod system;

pub use body::{pairwise_gravity, Axis, Body, Vec3};
pub use cycle::{gcd, lcm, lcm_all, AxisCycles, CycleOverflow};
pub use diagnostics::{format_parse_error, format_runtime_error, Span};
pub use parser::{parse_bodies, ParseError};
pub use runtime::{
    build_system, energy_after, full_cycle, run_source, Report, RuntimeError, SimulationConfig,
    DEFAULT_STEPS,
};
pub use system::{SimulationError, System};
