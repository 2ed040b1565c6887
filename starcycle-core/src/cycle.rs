//! Per-axis cycle bookkeeping and the integer arithmetic that combines
//! axis cycles into a full-state cycle.
//!
//! The unit gravity rule never mixes axes, so the x, y and z components of
//! every body form three independent periodic systems. The whole state
//! repeats at the least common multiple of their periods.

use crate::body::Axis;
use thiserror::Error;

/// The axis cycles are known but their least common multiple exceeds `u64`
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("full cycle of axis cycles {0:?} overflows 64 bits")]
pub struct CycleOverflow(pub [u64; 3]);

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two positive integers, or `None` if it does
/// not fit in a `u64`
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Least common multiple of every value (1 for an empty input), or `None`
/// on overflow
pub fn lcm_all<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().try_fold(1, lcm)
}

/// Cycle lengths recorded for each axis so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisCycles {
    lengths: [Option<u64>; 3],
}

impl AxisCycles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `step` as the cycle length of `axis`. Only the first record
    /// for an axis is kept; later calls return `false`.
    pub fn record(&mut self, axis: Axis, step: u64) -> bool {
        let slot = &mut self.lengths[axis.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(step);
        true
    }

    pub fn get(&self, axis: Axis) -> Option<u64> {
        self.lengths[axis.index()]
    }

    pub fn is_found(&self, axis: Axis) -> bool {
        self.get(axis).is_some()
    }

    pub fn is_complete(&self) -> bool {
        Axis::ALL.iter().all(|&axis| self.is_found(axis))
    }

    /// Axes whose cycle has not been seen yet
    pub fn missing(&self) -> Vec<Axis> {
        Axis::ALL
            .iter()
            .copied()
            .filter(|&axis| !self.is_found(axis))
            .collect()
    }

    /// Full-state cycle length. `None` until every axis is known; once
    /// complete, `Some(Err(..))` means the length overflows a `u64`.
    pub fn full_cycle(&self) -> Option<Result<u64, CycleOverflow>> {
        if !self.is_complete() {
            return None;
        }
        let lengths = self.lengths.map(|length| length.unwrap_or(0));
        Some(lcm_all(lengths).ok_or(CycleOverflow(lengths)))
    }
}
