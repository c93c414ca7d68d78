//! Configuration for table sampling and display precision.

use std::ops::RangeInclusive;

use crate::format::DEFAULT_DECIMALS;
use crate::Degree;

/// Inclusive integer range of `x` values to sample, stepping by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRange {
    pub start: i32,
    pub end: i32,
}

impl SampleRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The sampled `x` values in ascending order; empty when `start > end`.
    pub fn points(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

/// Sampling windows for each supported degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingOptions {
    /// Window used for linear equations (`-5..=5` by default).
    pub linear: SampleRange,
    /// Window used for quadratic equations (`-10..=10` by default).
    pub quadratic: SampleRange,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            linear: SampleRange::new(-5, 5),
            quadratic: SampleRange::new(-10, 10),
        }
    }
}

impl SamplingOptions {
    /// Window for the given degree.
    pub fn range(&self, degree: Degree) -> SampleRange {
        match degree {
            Degree::Linear => self.linear,
            Degree::Quadratic => self.quadratic,
        }
    }
}

/// Aggregated configuration used by [`solve_equation_with_options`](crate::solve_equation_with_options).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveOptions {
    /// Sampling windows for the value table.
    pub sampling: SamplingOptions,
    /// Decimal places for table values and displayed roots.
    pub decimals: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            sampling: SamplingOptions::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl SolveOptions {
    /// Override the sampling windows while preserving other defaults.
    pub fn with_sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    /// Override the linear sampling window.
    pub fn with_linear_range(mut self, start: i32, end: i32) -> Self {
        self.sampling.linear = SampleRange::new(start, end);
        self
    }

    /// Override the quadratic sampling window.
    pub fn with_quadratic_range(mut self, start: i32, end: i32) -> Self {
        self.sampling.quadratic = SampleRange::new(start, end);
        self
    }

    /// Set the number of decimal places used for display values.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}
