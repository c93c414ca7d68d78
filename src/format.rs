//! Number and polynomial rendering shared by the display-facing modules.

/// Decimal places used for display values unless configured otherwise.
pub const DEFAULT_DECIMALS: usize = 2;

/// Shortest round-trip rendering (`3`, `0.5`, `0.3333333333333333`), with `-0` shown as `0`.
pub fn plain(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Fixed-point rendering with `decimals` places, with `-0` shown as `0`.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value + 0.0)
}

/// Negative values wrapped in parentheses, for substitution into formulas.
pub fn parenthesized(value: f64) -> String {
    if value < 0.0 {
        format!("({})", plain(value))
    } else {
        plain(value)
    }
}

fn variable(power: usize) -> &'static str {
    match power {
        0 => "",
        1 => "x",
        _ => "x²",
    }
}

/// Renders a polynomial in `x` from its coefficients, highest power first.
///
/// `coefficients[0]` multiplies the highest power (at most `x²`) and the last entry is the
/// constant. Zero terms are omitted, unit coefficients on variable terms are written as a
/// bare `x` / `-x`, and every term after the first is joined with a spaced sign:
/// `[1, -4, 4]` renders as `x² - 4x + 4`. An all-zero polynomial renders as `0`.
pub fn polynomial(coefficients: &[f64]) -> String {
    render(coefficients, false)
}

/// Like [`polynomial`], but the leading term is written even when its coefficient is zero,
/// so `[0, 2, 0]` renders as `0x² + 2x`, matching what was typed.
pub fn polynomial_as_typed(coefficients: &[f64]) -> String {
    render(coefficients, true)
}

fn render(coefficients: &[f64], keep_leading: bool) -> String {
    let degree = coefficients.len().saturating_sub(1);
    let mut out = String::new();

    for (index, &coefficient) in coefficients.iter().enumerate() {
        if coefficient == 0.0 && !(keep_leading && index == 0) {
            continue;
        }
        let power = degree - index;
        let magnitude = coefficient.abs();
        let body = if power > 0 && magnitude == 1.0 {
            variable(power).to_string()
        } else {
            format!("{}{}", plain(magnitude), variable(power))
        };

        let negative = coefficient < 0.0;
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        out.push_str(&body);
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}
