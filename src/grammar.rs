//! Surface grammar of accepted equations.
//!
//! Two shapes are accepted, selected by the caller through [`Degree`]:
//!
//! - linear: `[+-]?D x ([+-]N)? = [+-]?N`
//! - quadratic: `[+-]?D x² ([+-]D x)? ([+-]N)? = [+-]?N`
//!
//! where `D` is `\d*\.?\d*` (possibly empty, so `x`, `-x` and `+x` are fine) and `N`
//! is `\d*\.?\d+`. The variable matches `x` or `X`; the squared token is `x²` or
//! `x^2`. Terms appear in that fixed order and the variable never appears on the
//! right-hand side.

use crate::error::{EquationError, Result};
use crate::normalize::NormalizedEquation;
use crate::Degree;

/// Coefficient fragment written in front of a variable token.
///
/// A bare sign or an empty prefix stands for a unit coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoefficientPrefix<'a> {
    /// Nothing precedes the variable (`x`).
    Implicit,
    /// A lone `+` (`+x`).
    Plus,
    /// A lone `-` (`-x`).
    Minus,
    /// Any other fragment, including a sign (`-2.5`, `3`, `.`).
    Numeral(&'a str),
}

impl<'a> CoefficientPrefix<'a> {
    /// Classifies the raw text preceding a variable token.
    pub fn classify(fragment: &'a str) -> Self {
        match fragment {
            "" => Self::Implicit,
            "+" => Self::Plus,
            "-" => Self::Minus,
            other => Self::Numeral(other),
        }
    }

    /// Numeric value of the coefficient.
    pub fn value(&self) -> Result<f64> {
        match self {
            Self::Implicit | Self::Plus => Ok(1.0),
            Self::Minus => Ok(-1.0),
            Self::Numeral(text) => parse_numeral(text),
        }
    }
}

/// Parses a decimal numeral fragment, rejecting anything non-finite.
pub(crate) fn parse_numeral(text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EquationError::extraction(text)),
    }
}

/// Left-hand side of an accepted linear equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearShape<'a> {
    pub coefficient: CoefficientPrefix<'a>,
    /// Signed constant term following the variable, if any.
    pub constant: Option<&'a str>,
}

/// Left-hand side of an accepted quadratic equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadraticShape<'a> {
    pub squared: CoefficientPrefix<'a>,
    /// Signed coefficient of the linear term, if the term is present.
    pub linear: Option<CoefficientPrefix<'a>>,
    pub constant: Option<&'a str>,
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos == self.text.len()
    }

    fn slice_from(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }

    fn eat(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.rest().chars().next() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn eat_str(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn eat_sign(&mut self) -> bool {
        self.eat(|c| c == '+' || c == '-')
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while self.eat(|c| c.is_ascii_digit()) {
            count += 1;
        }
        count
    }

    fn eat_variable(&mut self) -> bool {
        self.eat(|c| c == 'x' || c == 'X')
    }

    /// `x²` or `x^2`.
    fn eat_squared(&mut self) -> bool {
        let start = self.pos;
        if self.eat_variable() && (self.eat_str("²") || self.eat_str("^2")) {
            return true;
        }
        self.pos = start;
        false
    }

    /// `\d*\.?\d*`, always succeeds.
    fn coefficient_body(&mut self) {
        self.eat_digits();
        if self.eat(|c| c == '.') {
            self.eat_digits();
        }
    }

    /// `\d*\.?\d+`; the cursor is restored on failure.
    fn numeral_body(&mut self) -> bool {
        let start = self.pos;
        let integer_digits = self.eat_digits();
        let ok = if self.eat(|c| c == '.') {
            self.eat_digits() > 0
        } else {
            integer_digits > 0
        };
        if !ok {
            self.pos = start;
        }
        ok
    }

    /// `[+-]N`, sign mandatory.
    fn signed_constant(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if self.eat_sign() && self.numeral_body() {
            return Some(self.slice_from(start));
        }
        self.pos = start;
        None
    }

    /// `[+-]D x` not followed by a square, sign mandatory.
    fn signed_linear_term(&mut self) -> Option<CoefficientPrefix<'a>> {
        let start = self.pos;
        if self.eat_sign() {
            self.coefficient_body();
            let fragment = self.slice_from(start);
            if self.eat_variable() {
                return Some(CoefficientPrefix::classify(fragment));
            }
        }
        self.pos = start;
        None
    }

    /// `[+-]?D` in front of a variable token.
    fn leading_coefficient(&mut self) -> CoefficientPrefix<'a> {
        let start = self.pos;
        self.eat_sign();
        self.coefficient_body();
        CoefficientPrefix::classify(self.slice_from(start))
    }
}

/// Returns `true` when `text` is a complete signed decimal numeral such as `10`, `-2.5` or `+.5`.
pub fn is_numeral(text: &str) -> bool {
    let mut cursor = Cursor::new(text);
    cursor.eat_sign();
    cursor.numeral_body() && cursor.at_end()
}

/// Parses the left-hand side of a linear equation (`2x+4`, `-x-3`, `x`).
pub fn parse_linear_side(left: &str) -> Option<LinearShape<'_>> {
    let mut cursor = Cursor::new(left);
    let coefficient = cursor.leading_coefficient();
    if !cursor.eat_variable() {
        return None;
    }
    let constant = cursor.signed_constant();
    cursor.at_end().then_some(LinearShape {
        coefficient,
        constant,
    })
}

/// Parses the left-hand side of a quadratic equation (`x²+2x-3`, `-2X^2+5`, `0.5x²-x`).
pub fn parse_quadratic_side(left: &str) -> Option<QuadraticShape<'_>> {
    let mut cursor = Cursor::new(left);
    let squared = cursor.leading_coefficient();
    if !cursor.eat_squared() {
        return None;
    }
    let linear = cursor.signed_linear_term();
    let constant = cursor.signed_constant();
    cursor.at_end().then_some(QuadraticShape {
        squared,
        linear,
        constant,
    })
}

/// Normalizes `raw` and checks it against the grammar for `degree`.
///
/// This is the hard gate in front of every later stage: a `Format` error is returned
/// when the text lacks exactly one `=`, and a `Grammar` error when either side has the
/// wrong shape.
pub fn check(raw: &str, degree: Degree) -> Result<NormalizedEquation> {
    let equation = NormalizedEquation::parse(raw)?;
    let left_ok = match degree {
        Degree::Linear => parse_linear_side(equation.left()).is_some(),
        Degree::Quadratic => parse_quadratic_side(equation.left()).is_some(),
    };
    if !left_ok || !is_numeral(equation.right()) {
        log::debug!("rejected {degree} equation `{equation}`");
        return Err(EquationError::grammar(degree));
    }
    Ok(equation)
}

/// Returns `true` when `raw` is an acceptable equation of the given degree.
pub fn validate(raw: &str, degree: Degree) -> bool {
    check(raw, degree).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_state_machine_covers_unit_coefficients() {
        assert_eq!(CoefficientPrefix::classify(""), CoefficientPrefix::Implicit);
        assert_eq!(CoefficientPrefix::classify("+"), CoefficientPrefix::Plus);
        assert_eq!(CoefficientPrefix::classify("-"), CoefficientPrefix::Minus);
        assert_eq!(
            CoefficientPrefix::classify("-2.5"),
            CoefficientPrefix::Numeral("-2.5")
        );

        assert_eq!(CoefficientPrefix::Implicit.value(), Ok(1.0));
        assert_eq!(CoefficientPrefix::Plus.value(), Ok(1.0));
        assert_eq!(CoefficientPrefix::Minus.value(), Ok(-1.0));
        assert_eq!(CoefficientPrefix::Numeral("+4").value(), Ok(4.0));
        assert_eq!(CoefficientPrefix::Numeral("2.").value(), Ok(2.0));
        assert_eq!(
            CoefficientPrefix::Numeral("-.").value(),
            Err(EquationError::extraction("-."))
        );
    }

    #[test]
    fn numerals() {
        for ok in ["10", "-2.5", "+3", ".5", "0", "007"] {
            assert!(is_numeral(ok), "{ok} should be a numeral");
        }
        for bad in ["", "-", "5.", ".", "1.2.3", "x", "2x", "+-1", "1e3"] {
            assert!(!is_numeral(bad), "{bad} should not be a numeral");
        }
    }

    #[test]
    fn linear_sides() {
        let shape = parse_linear_side("2x+4").unwrap();
        assert_eq!(shape.coefficient, CoefficientPrefix::Numeral("2"));
        assert_eq!(shape.constant, Some("+4"));

        let shape = parse_linear_side("-x-3").unwrap();
        assert_eq!(shape.coefficient, CoefficientPrefix::Minus);
        assert_eq!(shape.constant, Some("-3"));

        let shape = parse_linear_side("X").unwrap();
        assert_eq!(shape.coefficient, CoefficientPrefix::Implicit);
        assert_eq!(shape.constant, None);

        for bad in ["", "4", "2x+", "2x+4x", "4+2x", "2x4", "x²", "2*x", "x+3.", "x+(3)"] {
            assert!(parse_linear_side(bad).is_none(), "{bad} should be rejected");
        }
    }

    #[test]
    fn quadratic_sides() {
        let shape = parse_quadratic_side("x²+2x-3").unwrap();
        assert_eq!(shape.squared, CoefficientPrefix::Implicit);
        assert_eq!(shape.linear, Some(CoefficientPrefix::Numeral("+2")));
        assert_eq!(shape.constant, Some("-3"));

        let shape = parse_quadratic_side("-2X^2+5").unwrap();
        assert_eq!(shape.squared, CoefficientPrefix::Numeral("-2"));
        assert_eq!(shape.linear, None);
        assert_eq!(shape.constant, Some("+5"));

        let shape = parse_quadratic_side("0.5x²-x").unwrap();
        assert_eq!(shape.linear, Some(CoefficientPrefix::Minus));
        assert_eq!(shape.constant, None);

        for bad in ["3+x²", "2x+x²", "x²+3+2x", "x", "x^3", "x²x", "x²+2x-3x", "x²2x"] {
            assert!(parse_quadratic_side(bad).is_none(), "{bad} should be rejected");
        }
    }

    #[test]
    fn gate_distinguishes_format_from_grammar() {
        assert!(check("2x + 4 = 10", Degree::Linear).is_ok());
        assert_eq!(
            check("2x + 4", Degree::Linear),
            Err(EquationError::format(0))
        );
        assert_eq!(
            check("3 = 2x + 4", Degree::Linear),
            Err(EquationError::grammar(Degree::Linear))
        );
        assert_eq!(
            check("x² = 4", Degree::Linear),
            Err(EquationError::grammar(Degree::Linear))
        );
        assert_eq!(
            check("2x = y", Degree::Linear),
            Err(EquationError::grammar(Degree::Linear))
        );
    }

    #[test]
    fn degree_is_taken_from_the_caller() {
        assert!(validate("x² + 2x - 3 = 0", Degree::Quadratic));
        assert!(!validate("x² + 2x - 3 = 0", Degree::Linear));
        assert!(!validate("2x + 4 = 10", Degree::Quadratic));
        assert!(validate("2x² = -8.5", Degree::Quadratic));
    }
}
