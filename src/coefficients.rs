//! Numeric coefficients read from validated equations.

use serde::{Deserialize, Serialize};

use crate::error::{EquationError, Result};
use crate::grammar::{self, parse_numeral};
use crate::normalize::NormalizedEquation;
use crate::Degree;

/// Coefficients of `a·x + b = c`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LinearCoefficients {
    /// Left-hand expression `a·x + b`.
    pub fn evaluate_left(&self, x: f64) -> f64 {
        self.a * x + self.b
    }
}

/// Coefficients of a quadratic already rebalanced to `a·x² + b·x + c = 0`.
///
/// `original_right` keeps the right-hand side as typed and `constant_left` the constant
/// written on the left, so `c = constant_left - original_right`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadraticCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub original_right: f64,
    pub constant_left: f64,
}

impl QuadraticCoefficients {
    /// Rebalances `a·x² + b·x + constant_left = right` into standard form.
    pub fn from_sides(a: f64, b: f64, constant_left: f64, right: f64) -> Self {
        Self {
            a,
            b,
            c: constant_left - right,
            original_right: right,
            constant_left,
        }
    }

    /// `b² − 4ac` of the standard form.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Constant term as it appeared on the left before rebalancing.
    pub fn constant_as_typed(&self) -> f64 {
        self.constant_left
    }

    /// Left-hand expression as typed, `a·x² + b·x + constant_as_typed`.
    pub fn evaluate_left(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.constant_as_typed()
    }
}

/// Coefficients for either supported degree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "degree", rename_all = "snake_case")]
pub enum Coefficients {
    Linear(LinearCoefficients),
    Quadratic(QuadraticCoefficients),
}

impl Coefficients {
    pub fn degree(&self) -> Degree {
        match self {
            Self::Linear(_) => Degree::Linear,
            Self::Quadratic(_) => Degree::Quadratic,
        }
    }
}

impl From<LinearCoefficients> for Coefficients {
    fn from(value: LinearCoefficients) -> Self {
        Self::Linear(value)
    }
}

impl From<QuadraticCoefficients> for Coefficients {
    fn from(value: QuadraticCoefficients) -> Self {
        Self::Quadratic(value)
    }
}

fn constant_term(fragment: Option<&str>) -> Result<f64> {
    fragment.map_or(Ok(0.0), parse_numeral)
}

/// Reads the coefficients of `raw` for the requested degree.
///
/// The text goes through [`grammar::check`] first, so unvalidated input surfaces as a
/// `Format` or `Grammar` error. An `Extraction` error means the shape was accepted but one
/// of its numerals was unreadable (for example `.x = 1`).
pub fn extract_coefficients(raw: &str, degree: Degree) -> Result<Coefficients> {
    let equation = grammar::check(raw, degree)?;
    extract_from(&equation, degree)
}

/// Reads the coefficients of an equation that already passed [`grammar::check`].
pub(crate) fn extract_from(equation: &NormalizedEquation, degree: Degree) -> Result<Coefficients> {
    let right = parse_numeral(equation.right())?;

    let coefficients = match degree {
        Degree::Linear => {
            let shape = grammar::parse_linear_side(equation.left())
                .ok_or_else(|| EquationError::grammar(degree))?;
            Coefficients::Linear(LinearCoefficients {
                a: shape.coefficient.value()?,
                b: constant_term(shape.constant)?,
                c: right,
            })
        }
        Degree::Quadratic => {
            let shape = grammar::parse_quadratic_side(equation.left())
                .ok_or_else(|| EquationError::grammar(degree))?;
            let b = shape.linear.map_or(Ok(0.0), |prefix| prefix.value())?;
            Coefficients::Quadratic(QuadraticCoefficients::from_sides(
                shape.squared.value()?,
                b,
                constant_term(shape.constant)?,
                right,
            ))
        }
    };

    log::debug!("extracted {coefficients:?} from `{equation}`");
    Ok(coefficients)
}
