//! Closed-form solutions for linear and quadratic equations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coefficients::{Coefficients, LinearCoefficients, QuadraticCoefficients};
use crate::error::{EquationError, Result};
use crate::format::{fixed, DEFAULT_DECIMALS};
use crate::Degree;

/// Outcome of solving an equation.
///
/// Values are kept at full precision; rounding happens only when displayed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    /// The equation has no unique real solution.
    NoSolution,
    /// A single real root (a linear equation, or a quadratic with `Δ = 0`).
    OneReal { x: f64 },
    /// Two distinct real roots, `x1` taken with `+√Δ`.
    TwoReal { x1: f64, x2: f64 },
    /// Complex conjugate roots `real ± imaginary·i`, with `imaginary > 0`.
    ComplexPair { real: f64, imaginary: f64 },
}

impl Solution {
    /// Real roots in reporting order; empty for complex or missing solutions.
    pub fn real_roots(&self) -> Vec<f64> {
        match *self {
            Self::NoSolution | Self::ComplexPair { .. } => Vec::new(),
            Self::OneReal { x } => vec![x],
            Self::TwoReal { x1, x2 } => vec![x1, x2],
        }
    }
}

/// Renders the display text, e.g. `x₁ = 1.00, x₂ = -3.00`.
///
/// Values use two decimals unless a precision is given (`{:.4}`).
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DEFAULT_DECIMALS);
        match *self {
            Self::NoSolution => write!(f, "no solution found"),
            Self::OneReal { x } => write!(f, "x = {}", fixed(x, decimals)),
            Self::TwoReal { x1, x2 } => write!(
                f,
                "x₁ = {}, x₂ = {}",
                fixed(x1, decimals),
                fixed(x2, decimals)
            ),
            Self::ComplexPair { real, imaginary } => {
                let real = fixed(real, decimals);
                let imaginary = fixed(imaginary, decimals);
                write!(f, "x₁ = {real} + {imaginary}i, x₂ = {real} - {imaginary}i")
            }
        }
    }
}

/// Solves `a·x + b = c` as `x = (c − b) / a`.
///
/// A zero `a` yields [`Solution::NoSolution`] whether the equation is contradictory or an
/// identity.
pub fn solve_linear(coefficients: &LinearCoefficients) -> Solution {
    let LinearCoefficients { a, b, c } = *coefficients;
    if a == 0.0 {
        return Solution::NoSolution;
    }
    Solution::OneReal { x: (c - b) / a }
}

/// `b² − 4ac` with cancellation noise snapped to zero.
///
/// A discriminant within a few ulps of `max(b², |4ac|)` is reported as `0`, so a perfect
/// square written with decimals (`x² - 0.2x + 0.01`) still has a single root. Exact zeros
/// and integer coefficients are unaffected.
pub fn effective_discriminant(coefficients: &QuadraticCoefficients) -> f64 {
    let QuadraticCoefficients { a, b, c, .. } = *coefficients;
    let discriminant = coefficients.discriminant();
    let scale = (b * b).max((4.0 * a * c).abs());
    if discriminant.abs() <= 4.0 * f64::EPSILON * scale {
        0.0
    } else {
        discriminant
    }
}

/// Solves the standard form `a·x² + b·x + c = 0`, branching on the sign of
/// [`effective_discriminant`].
pub fn solve_quadratic(coefficients: &QuadraticCoefficients) -> Result<Solution> {
    let QuadraticCoefficients { a, b, .. } = *coefficients;
    if a == 0.0 {
        return Err(EquationError::degenerate(Degree::Quadratic));
    }

    let discriminant = effective_discriminant(coefficients);
    let two_a = 2.0 * a;
    let solution = if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Solution::TwoReal {
            x1: (-b + root) / two_a,
            x2: (-b - root) / two_a,
        }
    } else if discriminant == 0.0 {
        Solution::OneReal { x: -b / two_a }
    } else {
        Solution::ComplexPair {
            real: -b / two_a,
            imaginary: (-discriminant).sqrt() / two_a.abs(),
        }
    };
    log::debug!("quadratic with discriminant {discriminant} solved as {solution:?}");
    Ok(solution)
}

/// Solves an equation of either degree.
///
/// Unlike [`solve_linear`], a missing solution is reported as
/// [`EquationError::NoSolution`] so callers only handle solvable outcomes on `Ok`.
pub fn solve(coefficients: &Coefficients) -> Result<Solution> {
    let solution = match coefficients {
        Coefficients::Linear(linear) => solve_linear(linear),
        Coefficients::Quadratic(quadratic) => solve_quadratic(quadratic)?,
    };
    match solution {
        Solution::NoSolution => Err(EquationError::NoSolution),
        solution => Ok(solution),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn quadratic(a: f64, b: f64, c: f64) -> QuadraticCoefficients {
        QuadraticCoefficients::from_sides(a, b, c, 0.0)
    }

    #[test]
    fn linear_closed_form() {
        let solution = solve_linear(&LinearCoefficients {
            a: 2.0,
            b: 4.0,
            c: 10.0,
        });
        assert_eq!(solution, Solution::OneReal { x: 3.0 });

        // Far outside any small sampling window.
        let solution = solve_linear(&LinearCoefficients {
            a: 1.0,
            b: 0.0,
            c: 12_345.678,
        });
        assert_eq!(solution, Solution::OneReal { x: 12_345.678 });
    }

    #[test]
    fn linear_zero_coefficient_has_no_solution() {
        let identity = LinearCoefficients {
            a: 0.0,
            b: 2.0,
            c: 2.0,
        };
        let contradiction = LinearCoefficients { c: 3.0, ..identity };
        assert_eq!(solve_linear(&identity), Solution::NoSolution);
        assert_eq!(solve_linear(&contradiction), Solution::NoSolution);
        assert_eq!(
            solve(&identity.into()),
            Err(EquationError::NoSolution)
        );
    }

    #[test]
    fn quadratic_branches_on_discriminant() {
        assert_eq!(
            solve_quadratic(&quadratic(1.0, 2.0, -3.0)),
            Ok(Solution::TwoReal { x1: 1.0, x2: -3.0 })
        );
        assert_eq!(
            solve_quadratic(&quadratic(1.0, -4.0, 4.0)),
            Ok(Solution::OneReal { x: 2.0 })
        );
        match solve_quadratic(&quadratic(1.0, 1.0, 1.0)).unwrap() {
            Solution::ComplexPair { real, imaginary } => {
                assert_relative_eq!(real, -0.5);
                assert_relative_eq!(imaginary, 3.0_f64.sqrt() / 2.0);
            }
            other => panic!("expected complex roots, got {other:?}"),
        }
    }

    #[test]
    fn decimal_perfect_square_has_one_root() {
        // (x - 0.1)²
        let coefficients = quadratic(1.0, -0.2, 0.01);
        assert_ne!(coefficients.discriminant(), 0.0);
        assert_eq!(effective_discriminant(&coefficients), 0.0);
        match solve_quadratic(&coefficients).unwrap() {
            Solution::OneReal { x } => assert_relative_eq!(x, 0.1),
            other => panic!("expected a single root, got {other:?}"),
        }
    }

    #[test]
    fn close_but_distinct_roots_stay_distinct() {
        // (x - 1)(x - 1.001)
        let coefficients = quadratic(1.0, -2.001, 1.001);
        assert!(effective_discriminant(&coefficients) > 0.0);
        match solve_quadratic(&coefficients).unwrap() {
            Solution::TwoReal { x1, x2 } => {
                assert_relative_eq!(x1, 1.001, epsilon = 1e-9);
                assert_relative_eq!(x2, 1.0, epsilon = 1e-9);
            }
            other => panic!("expected two roots, got {other:?}"),
        }
    }

    #[test]
    fn imaginary_part_is_positive_for_negative_leading_coefficient() {
        match solve_quadratic(&quadratic(-1.0, 0.0, -4.0)).unwrap() {
            Solution::ComplexPair { real, imaginary } => {
                assert_eq!(real, 0.0);
                assert_relative_eq!(imaginary, 2.0);
            }
            other => panic!("expected complex roots, got {other:?}"),
        }
    }

    #[test]
    fn quadratic_zero_leading_coefficient_is_degenerate() {
        assert_eq!(
            solve(&quadratic(0.0, 2.0, 1.0).into()),
            Err(EquationError::degenerate(Degree::Quadratic))
        );
    }

    #[test]
    fn display_rounds_to_requested_precision() {
        assert_eq!(Solution::OneReal { x: 3.0 }.to_string(), "x = 3.00");
        assert_eq!(
            Solution::TwoReal { x1: 1.0, x2: -3.0 }.to_string(),
            "x₁ = 1.00, x₂ = -3.00"
        );
        let complex = Solution::ComplexPair {
            real: -0.5,
            imaginary: 3.0_f64.sqrt() / 2.0,
        };
        assert_eq!(
            complex.to_string(),
            "x₁ = -0.50 + 0.87i, x₂ = -0.50 - 0.87i"
        );
        assert_eq!(format!("{:.3}", Solution::OneReal { x: 1.0 / 3.0 }), "x = 0.333");
    }
}
