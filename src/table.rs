//! Value tables of the equation's left-hand function, for plotting.

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;
use crate::format::fixed;
use crate::options::SolveOptions;

/// One `(x, y)` sample, with `y` already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub x: i32,
    pub y: String,
}

/// Samples the left-hand function over the default windows with two decimals.
pub fn sample_table(coefficients: &Coefficients) -> Vec<TableEntry> {
    sample_table_with_options(coefficients, &SolveOptions::default())
}

/// Samples the left-hand function as typed, over the configured window for its degree.
///
/// For quadratics the constant is restored to its pre-rebalancing value, so the curve is
/// the one the user wrote rather than the standard form.
pub fn sample_table_with_options(
    coefficients: &Coefficients,
    options: &SolveOptions,
) -> Vec<TableEntry> {
    let range = options.sampling.range(coefficients.degree());
    log::trace!(
        "sampling {} table over {}..={}",
        coefficients.degree(),
        range.start,
        range.end
    );

    range
        .points()
        .map(|x| {
            let at = f64::from(x);
            let y = match coefficients {
                Coefficients::Linear(linear) => linear.evaluate_left(at),
                Coefficients::Quadratic(quadratic) => quadratic.evaluate_left(at),
            };
            TableEntry {
                x,
                y: fixed(y, options.decimals),
            }
        })
        .collect()
}
