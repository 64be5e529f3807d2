// src/geometry.rs

use glam::DVec2;

/// A point in the drawing plane. Screen-space callers use a Y-down axis.
pub type Point2 = DVec2;

/// Fewer vertices than this is not a region.
pub const MIN_REGION_VERTICES: usize = 3;

/// A closed loop of vertices; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>, // Kept private so every polygon goes through the constructors
}

impl Polygon {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn from_points(points: &[Point2]) -> Self {
        Self { vertices: points.to_vec() }
    }

    pub fn from_vec(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// A clip result with two or fewer vertices encloses nothing.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < MIN_REGION_VERTICES
    }

    /// Cyclic edges as `(prev, current)` pairs, starting with `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let prev = self.vertices.iter().copied().cycle().skip(self.vertices.len().saturating_sub(1));
        prev.zip(self.vertices.iter().copied())
    }

    /// Shoelace area; positive for counter-clockwise winding in math coordinates.
    pub fn signed_area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.perp_dot(b)).sum::<f64>() / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid.
    ///
    /// The polygon must enclose a non-zero area; the catalog generators never
    /// produce anything else, so this is not checked.
    pub fn centroid(&self) -> Point2 {
        let mut area = 0.0;
        let mut moment = DVec2::ZERO;
        for (a, b) in self.edges() {
            let cross = a.perp_dot(b);
            area += cross;
            moment += (a + b) * cross;
        }
        area /= 2.0;
        moment / (6.0 * area)
    }

    /// Axis-aligned bounds as `(min, max)` corners, or `None` when empty.
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(min, max), &p| (min.min(p), max.max(p))))
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::from_vec(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_points(&[
            Point2::new(-100.0, -100.0),
            Point2::new(100.0, -100.0),
            Point2::new(100.0, 100.0),
            Point2::new(-100.0, 100.0),
        ])
    }

    #[test]
    fn centroid_of_centered_square_is_origin() {
        assert_eq!(square().centroid(), Point2::ZERO);
    }

    #[test]
    fn centroid_of_offset_triangle() {
        let tri = Polygon::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(0.0, 3.0),
        ]);
        let c = tri.centroid();
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_follows_winding() {
        let ccw = square();
        let mut reversed = ccw.vertices().to_vec();
        reversed.reverse();
        let cw = Polygon::from_vec(reversed);
        assert_eq!(ccw.signed_area(), 40_000.0);
        assert_eq!(cw.signed_area(), -40_000.0);
        assert_eq!(cw.area(), 40_000.0);
    }

    #[test]
    fn degenerate_polygon_has_no_area() {
        let line = Polygon::from_points(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert!(line.is_degenerate());
        assert_eq!(line.area(), 0.0);
    }

    #[test]
    fn edges_close_the_loop() {
        let edges: Vec<_> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (Point2::new(-100.0, 100.0), Point2::new(-100.0, -100.0)));
        assert_eq!(edges[3], (Point2::new(100.0, 100.0), Point2::new(-100.0, 100.0)));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        assert_eq!(square().bounds(), Some((Point2::new(-100.0, -100.0), Point2::new(100.0, 100.0))));
        assert_eq!(Polygon::new().bounds(), None);
    }
}
