// src/figure.rs

use log::debug;

use crate::config::{SceneLayout, Tolerance};
use crate::error::FractionError;
use crate::generator::ShapeKind;
use crate::geometry::Polygon;
use crate::partition::partition;

/// Largest denominator offered by the catalog.
pub const MAX_PARTS: usize = 12;

/// A checked "shade `shaded` of `parts` parts of this shape" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionRequest {
    shape: ShapeKind,
    parts: usize,
    shaded: usize,
}

impl FractionRequest {
    pub fn new(shape: ShapeKind, parts: usize, shaded: usize) -> Result<Self, FractionError> {
        if parts == 0 || parts > MAX_PARTS {
            return Err(FractionError::InvalidPartCount(parts));
        }
        if shaded > parts {
            return Err(FractionError::ShadedExceedsParts { shaded, parts });
        }
        Ok(Self { shape, parts, shaded })
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn shaded(&self) -> usize {
        self.shaded
    }
}

/// A generated shape, its parts in sweep order and how many are shaded.
#[derive(Clone, Debug, PartialEq)]
pub struct FractionFigure {
    pub outline: Polygon,
    pub parts: Vec<Polygon>,
    shaded: usize,
}

impl FractionFigure {
    pub fn build(request: &FractionRequest, layout: &SceneLayout, tolerance: Tolerance) -> Self {
        let outline = request.shape.build(layout);
        let parts = partition(&outline, request.parts, request.shape.strategy(), tolerance);
        debug!(
            "{}: shading {} of {} parts ({} produced)",
            request.shape,
            request.shaded,
            request.parts,
            parts.len()
        );
        Self { outline, parts, shaded: request.shaded }
    }

    /// The first `shaded` parts; fewer if degenerate parts were dropped.
    pub fn shaded_parts(&self) -> &[Polygon] {
        &self.parts[..self.shaded.min(self.parts.len())]
    }

    pub fn unshaded_parts(&self) -> &[Polygon] {
        &self.parts[self.shaded.min(self.parts.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_validates_counts() {
        assert_eq!(FractionRequest::new(ShapeKind::Square, 0, 0), Err(FractionError::InvalidPartCount(0)));
        assert_eq!(FractionRequest::new(ShapeKind::Square, 13, 0), Err(FractionError::InvalidPartCount(13)));
        assert_eq!(
            FractionRequest::new(ShapeKind::Square, 4, 5),
            Err(FractionError::ShadedExceedsParts { shaded: 5, parts: 4 })
        );
        let request = FractionRequest::new(ShapeKind::Square, 4, 4).unwrap();
        assert_eq!((request.parts(), request.shaded()), (4, 4));
    }

    #[test]
    fn figure_splits_shaded_and_unshaded() {
        let request = FractionRequest::new(ShapeKind::Rectangle, 5, 2).unwrap();
        let figure = FractionFigure::build(&request, &SceneLayout::default(), Tolerance::default());
        assert_eq!(figure.parts.len(), 5);
        assert_eq!(figure.shaded_parts().len(), 2);
        assert_eq!(figure.unshaded_parts().len(), 3);
        // Shading consumes the leftmost strips.
        let (_, max) = figure.shaded_parts()[1].bounds().unwrap();
        assert!((max.x - (-100.0 + 2.0 * 40.0)).abs() < 1e-9);
    }

    #[test]
    fn nothing_shaded_leaves_every_part_unshaded() {
        let request = FractionRequest::new(ShapeKind::Octagon, 8, 0).unwrap();
        let figure = FractionFigure::build(&request, &SceneLayout::default(), Tolerance::default());
        assert!(figure.shaded_parts().is_empty());
        assert_eq!(figure.unshaded_parts().len(), 8);
    }
}
