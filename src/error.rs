use thiserror::Error;

use crate::Degree;

/// Unified error type for `eqsolve` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    /// Raised when the normalized equation does not contain exactly one `=`.
    #[error("equation must contain exactly one `=` separator, found {separators}")]
    Format {
        /// Number of `=` characters actually present.
        separators: usize,
    },

    /// Raised when the equation does not match the accepted shape for its degree.
    #[error("equation does not match the accepted {degree} form")]
    Grammar { degree: Degree },

    /// Raised when a numeral fragment of an accepted equation cannot be turned into a number.
    #[error("could not read a number from `{fragment}`")]
    Extraction { fragment: String },

    /// Raised when a linear equation has no unique solution (`a = 0`).
    #[error("no solution found for the equation")]
    NoSolution,

    /// Raised when the leading coefficient vanishes.
    #[error("leading coefficient of the {degree} equation is zero")]
    DegenerateCoefficient { degree: Degree },
}

impl EquationError {
    /// Helper to format a [`Format`](EquationError::Format) error.
    pub fn format(separators: usize) -> Self {
        Self::Format { separators }
    }

    pub fn grammar(degree: Degree) -> Self {
        Self::Grammar { degree }
    }

    /// Helper for numeral fragments that fail to parse.
    pub fn extraction(fragment: impl Into<String>) -> Self {
        Self::Extraction {
            fragment: fragment.into(),
        }
    }

    pub fn degenerate(degree: Degree) -> Self {
        Self::DegenerateCoefficient { degree }
    }

    /// Whether the error was raised by the validation gate rather than a later stage.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::Grammar { .. })
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, EquationError>;
