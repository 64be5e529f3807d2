// src/error.rs

use std::fmt;

/// Rejected input for callers that cannot guarantee pre-validated parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum FractionError {
    /// Part count outside `1..=MAX_PARTS`.
    InvalidPartCount(usize),
    /// More parts shaded than the figure is divided into.
    ShadedExceedsParts { shaded: usize, parts: usize },
    /// A regular polygon needs at least three sides.
    TooFewSides(usize),
    /// A star needs at least two points.
    TooFewStarPoints(usize),
    /// Radii, widths and heights must be finite and positive.
    NonPositiveSize(f64),
    InvalidTolerance(f64),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::InvalidPartCount(n) => write!(f, "invalid part count {n}"),
            FractionError::ShadedExceedsParts { shaded, parts } => {
                write!(f, "cannot shade {shaded} of {parts} parts")
            }
            FractionError::TooFewSides(n) => write!(f, "a regular polygon needs at least 3 sides, got {n}"),
            FractionError::TooFewStarPoints(n) => write!(f, "a star needs at least 2 points, got {n}"),
            FractionError::NonPositiveSize(v) => write!(f, "size must be positive, got {v}"),
            FractionError::InvalidTolerance(v) => write!(f, "tolerance must be a finite non-negative number, got {v}"),
        }
    }
}

impl std::error::Error for FractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = FractionError::ShadedExceedsParts { shaded: 5, parts: 4 };
        assert_eq!(err.to_string(), "cannot shade 5 of 4 parts");
        assert_eq!(FractionError::TooFewSides(2).to_string(), "a regular polygon needs at least 3 sides, got 2");
    }
}
