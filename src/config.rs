// src/config.rs

use crate::error::FractionError;
use crate::geometry::Point2;

/// Default membership and parallel-line tolerance used by the clipper.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Base size used by the shape catalog when none is given.
pub const DEFAULT_BASE_SIZE: f64 = 100.0;

/// Numeric tolerance for half-plane clipping.
///
/// Points within `epsilon` of a cut line count as inside both half-planes, and
/// segments whose direction component across the line is below `epsilon` are
/// treated as parallel. The default suits shapes a few hundred units across;
/// scale it with the coordinates for much larger or smaller figures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub epsilon: f64,
}

impl Tolerance {
    pub fn new(epsilon: f64) -> Result<Self, FractionError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(FractionError::InvalidTolerance(epsilon));
        }
        Ok(Self { epsilon })
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }
}

/// Where the catalog places its shape and how large it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub center: Point2,
    pub base_size: f64,
}

impl SceneLayout {
    pub fn new(center: Point2, base_size: f64) -> Result<Self, FractionError> {
        if !(base_size.is_finite() && base_size > 0.0) {
            return Err(FractionError::NonPositiveSize(base_size));
        }
        Ok(Self { center, base_size })
    }

    /// Centers the catalog shape on a canvas of the given pixel size.
    pub fn centered_on(width: f64, height: f64) -> Self {
        Self {
            center: Point2::new(width / 2.0, height / 2.0),
            base_size: DEFAULT_BASE_SIZE,
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self { center: Point2::ZERO, base_size: DEFAULT_BASE_SIZE }
    }
}
