//! Step-by-step derivations for display.
//!
//! Each generator returns the steps in narrative order. The linear derivation ends with
//! the unrounded value of `x`; quadratic roots are shown at display precision.

use crate::coefficients::{Coefficients, LinearCoefficients, QuadraticCoefficients};
use crate::format::{fixed, parenthesized, plain, polynomial_as_typed, DEFAULT_DECIMALS};
use crate::solver::{effective_discriminant, solve_quadratic, Solution};

/// Derivation steps for either degree, using two display decimals.
pub fn generate_procedure(coefficients: &Coefficients) -> Vec<String> {
    generate_procedure_with_decimals(coefficients, DEFAULT_DECIMALS)
}

/// Derivation steps for either degree; `decimals` applies to the quadratic roots.
pub fn generate_procedure_with_decimals(
    coefficients: &Coefficients,
    decimals: usize,
) -> Vec<String> {
    match coefficients {
        Coefficients::Linear(linear) => linear_procedure(linear),
        Coefficients::Quadratic(quadratic) => quadratic_procedure(quadratic, decimals),
    }
}

/// "Subtract 4 from both sides" or "Add 4 to both sides", depending on the sign moved.
fn move_to_right(value: f64) -> String {
    if value < 0.0 {
        format!("Add {} to both sides", plain(-value))
    } else {
        format!("Subtract {} from both sides", plain(value))
    }
}

/// Restate, move the constant, divide by `a`.
pub fn linear_procedure(coefficients: &LinearCoefficients) -> Vec<String> {
    let LinearCoefficients { a, b, c } = *coefficients;
    let isolated = c - b;
    let mut steps = vec![
        format!(
            "Initial equation: {} = {}",
            polynomial_as_typed(&[a, b]),
            plain(c)
        ),
        format!(
            "{}: {} = {}",
            move_to_right(b),
            polynomial_as_typed(&[a, 0.0]),
            plain(isolated)
        ),
    ];

    if a == 0.0 {
        steps.push("The coefficient of x is 0: there is no unique solution".to_string());
    } else {
        steps.push(format!(
            "Divide both sides by {}: x = {}",
            plain(a),
            plain(isolated / a)
        ));
    }
    steps
}

/// Restate, rebalance, list coefficients, apply the quadratic formula.
pub fn quadratic_procedure(coefficients: &QuadraticCoefficients, decimals: usize) -> Vec<String> {
    let QuadraticCoefficients {
        a,
        b,
        c,
        original_right,
        ..
    } = *coefficients;
    let discriminant = effective_discriminant(coefficients);
    let mut steps = Vec::new();

    steps.push(format!(
        "Initial equation: {} = {}",
        polynomial_as_typed(&[a, b, coefficients.constant_as_typed()]),
        plain(original_right)
    ));
    if original_right != 0.0 {
        steps.push(format!(
            "{}: {} = 0",
            move_to_right(original_right),
            polynomial_as_typed(&[a, b, c])
        ));
    }
    steps.push(format!(
        "Coefficients: a = {}, b = {}, c = {}",
        plain(a),
        plain(b),
        plain(c)
    ));
    steps.push("Quadratic formula: x = (-b ± √(b² - 4ac)) / 2a".to_string());
    steps.push(format!(
        "Discriminant: Δ = b² - 4ac = {}² - 4({})({}) = {}",
        parenthesized(b),
        plain(a),
        plain(c),
        plain(discriminant)
    ));

    let minus_b = plain(-b);
    let two_a = plain(2.0 * a);
    match solve_quadratic(coefficients) {
        Ok(Solution::TwoReal { x1, x2 }) => {
            steps.push("Δ > 0: two real solutions".to_string());
            steps.push(format!(
                "x₁ = ({minus_b} + √{}) / {two_a} = {}",
                plain(discriminant),
                fixed(x1, decimals)
            ));
            steps.push(format!(
                "x₂ = ({minus_b} - √{}) / {two_a} = {}",
                plain(discriminant),
                fixed(x2, decimals)
            ));
        }
        Ok(Solution::OneReal { x }) => {
            steps.push("Δ = 0: one real solution".to_string());
            steps.push(format!(
                "x = {minus_b} / (2 × {}) = {}",
                parenthesized(a),
                fixed(x, decimals)
            ));
        }
        Ok(Solution::ComplexPair { real, imaginary }) => {
            let real = fixed(real, decimals);
            let imaginary = fixed(imaginary, decimals);
            steps.push("Δ < 0: no real solutions".to_string());
            steps.push("Complex solutions:".to_string());
            steps.push(format!("x₁ = {real} + {imaginary}i"));
            steps.push(format!("x₂ = {real} - {imaginary}i"));
        }
        // solve_quadratic only fails, and never reports NoSolution, when a = 0.
        Ok(Solution::NoSolution) | Err(_) => {
            steps.push("a = 0: the equation is not quadratic".to_string());
        }
    }
    steps
}
