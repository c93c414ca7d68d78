//! Whitespace normalization and the single `=` split.

use serde::{Deserialize, Serialize};

use crate::error::{EquationError, Result};

/// Removes every whitespace character from the raw input, leaving all other characters intact.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// An equation with whitespace removed, split around its single `=`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEquation {
    left: String,
    right: String,
}

impl NormalizedEquation {
    /// Normalizes `raw` and splits it into its two sides.
    ///
    /// Fails with [`EquationError::Format`] unless exactly one `=` is present.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize(raw);
        let separators = normalized.matches('=').count();
        if separators != 1 {
            return Err(EquationError::format(separators));
        }
        let (left, right) = normalized
            .split_once('=')
            .ok_or_else(|| EquationError::format(0))?;
        Ok(Self {
            left: left.to_string(),
            right: right.to_string(),
        })
    }

    /// Text to the left of `=`.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Text to the right of `=`.
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl std::fmt::Display for NormalizedEquation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.left, self.right)
    }
}
