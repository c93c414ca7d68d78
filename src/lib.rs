//! Interpretation of single-variable linear and quadratic equations typed as free text.
//!
//! The pipeline mirrors how a student works such an equation by hand:
//!
//! - strip whitespace and split on `=` (`normalize` module),
//! - check the text against the accepted linear or quadratic shape (`grammar` module),
//! - read the numeric coefficients (`coefficients` module),
//! - solve in closed form, branching on the discriminant for quadratics (`solver` module),
//! - sample the left-hand function for plotting (`table` module), and
//! - narrate the derivation step by step (`procedure` module).
//!
//! The degree is always chosen by the caller; it is never inferred from the text. Every
//! function is pure, so results can be produced from any thread without coordination.
//!
//! # Quick start
//!
//! ```
//! use eqsolve::{solve_equation, Degree, Solution};
//!
//! let report = solve_equation("x² + 2x - 3 = 0", Degree::Quadratic).expect("solvable");
//! assert_eq!(report.solution, Solution::TwoReal { x1: 1.0, x2: -3.0 });
//! assert_eq!(report.solution_text(), "x₁ = 1.00, x₂ = -3.00");
//! assert_eq!(report.table.len(), 21);
//! assert_eq!(report.procedure[0], "Initial equation: x² + 2x - 3 = 0");
//! ```
//!
//! Each stage is also available on its own, e.g. [`validate`] for a quick input check or
//! [`extract_coefficients`] followed by [`solve`].

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod coefficients;
pub mod error;
pub mod format;
pub mod grammar;
pub mod normalize;
pub mod options;
pub mod procedure;
pub mod solver;
pub mod table;

pub use coefficients::{
    extract_coefficients, Coefficients, LinearCoefficients, QuadraticCoefficients,
};
pub use error::{EquationError, Result};
pub use grammar::{check, validate};
pub use normalize::{normalize, NormalizedEquation};
pub use options::{SampleRange, SamplingOptions, SolveOptions};
pub use procedure::generate_procedure;
pub use solver::{solve, Solution};
pub use table::{sample_table, TableEntry};

/// Polynomial degree of the equation, selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    /// `a·x + b = c`
    Linear,
    /// `a·x² + b·x + c = d`
    Quadratic,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
        })
    }
}

/// Everything a presentation layer needs to show for one solved equation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquationReport {
    pub degree: Degree,
    /// The input with whitespace removed.
    pub normalized: NormalizedEquation,
    pub coefficients: Coefficients,
    pub solution: Solution,
    /// Samples of the left-hand function, in ascending `x`.
    pub table: Vec<TableEntry>,
    /// Derivation steps in narrative order.
    pub procedure: Vec<String>,
    /// Decimal places used for display values.
    pub decimals: usize,
}

impl EquationReport {
    /// Display text of the solution at the configured precision.
    pub fn solution_text(&self) -> String {
        format!("{:.*}", self.decimals, self.solution)
    }
}

/// Runs the full pipeline with default options.
pub fn solve_equation(raw: &str, degree: Degree) -> Result<EquationReport> {
    solve_equation_with_options(raw, degree, &SolveOptions::default())
}

/// Validates, extracts and then solves, samples and narrates `raw`.
///
/// Validation is a hard gate: nothing after it runs on rejected input.
pub fn solve_equation_with_options(
    raw: &str,
    degree: Degree,
    options: &SolveOptions,
) -> Result<EquationReport> {
    let normalized = check(raw, degree)?;
    let coefficients = coefficients::extract_from(&normalized, degree)?;
    log::debug!("solving {degree} equation `{normalized}`");

    let solution = solve(&coefficients)?;
    let table = table::sample_table_with_options(&coefficients, options);
    let procedure = procedure::generate_procedure_with_decimals(&coefficients, options.decimals);

    Ok(EquationReport {
        degree,
        normalized,
        coefficients,
        solution,
        table,
        procedure,
        decimals: options.decimals,
    })
}
