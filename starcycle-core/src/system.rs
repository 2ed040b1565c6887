use crate::body::{Axis, Body, Vec3};
use crate::cycle::{AxisCycles, CycleOverflow};
use crate::integrator;
use log::{debug, trace};
use std::fmt;
use thiserror::Error;

/// Errors raised while searching for the full cycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("cannot search for a cycle in a system with no bodies")]
    EmptySystem,
    #[error("no full cycle within {limit} steps (axes still open: {})", join_axes(.missing))]
    CycleNotFound { limit: u64, missing: Vec<Axis> },
    #[error(transparent)]
    Overflow(#[from] CycleOverflow),
}

fn join_axes(axes: &[Axis]) -> String {
    axes.iter()
        .map(|axis| axis.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The set of stars plus a snapshot of where they started
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
    initial: Vec<Body>,
    steps: u64,
}

impl System {
    /// Build a system of bodies at rest at the given positions
    pub fn new<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        Self::from_bodies(positions.into_iter().map(Body::at).collect())
    }

    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        let initial = bodies.clone();
        Self {
            bodies,
            initial,
            steps: 0,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn initial(&self) -> &[Body] {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Steps taken since construction or the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn step(&mut self) {
        integrator::step(&mut self.bodies);
        self.steps += 1;
        trace!("step {}: energy {}", self.steps, self.total_energy());
    }

    pub fn run_steps(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Restore the live bodies from the initial snapshot
    pub fn reset(&mut self) {
        self.bodies.clone_from(&self.initial);
        self.steps = 0;
    }

    pub fn total_energy(&self) -> i64 {
        self.bodies.iter().map(Body::total_energy).sum()
    }

    /// Sum of all velocities, conserved by every step
    pub fn momentum(&self) -> Vec3 {
        self.bodies.iter().map(|body| body.velocity).sum()
    }

    /// True when every body matches its initial position and velocity on `axis`
    pub fn is_initial_on_axis(&self, axis: Axis) -> bool {
        self.bodies
            .iter()
            .zip(&self.initial)
            .all(|(body, start)| body.matches_on_axis(start, axis))
    }

    /// Step until the full state first repeats the initial snapshot and
    /// return that step count. Runs from the current live state, so call
    /// `reset` first to measure from the start.
    pub fn find_full_cycle_length(&mut self) -> Result<u64, SimulationError> {
        self.find_full_cycle_length_within(None)
    }

    /// Like `find_full_cycle_length`, but gives up after `limit` steps.
    pub fn find_full_cycle_length_within(
        &mut self,
        limit: Option<u64>,
    ) -> Result<u64, SimulationError> {
        if self.is_empty() {
            return Err(SimulationError::EmptySystem);
        }

        let mut cycles = AxisCycles::new();
        let mut count: u64 = 0;
        loop {
            if let Some(limit) = limit {
                if count >= limit {
                    return Err(SimulationError::CycleNotFound {
                        limit,
                        missing: cycles.missing(),
                    });
                }
            }

            self.step();
            count += 1;

            for axis in Axis::ALL {
                if !cycles.is_found(axis) && self.is_initial_on_axis(axis) {
                    cycles.record(axis, count);
                    debug!("axis {} repeats after {} steps", axis, count);
                }
            }

            if let Some(full) = cycles.full_cycle() {
                let full = full?;
                debug!("full cycle of {} steps", full);
                return Ok(full);
            }
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, body) in self.bodies.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", body)?;
        }
        Ok(())
    }
}
