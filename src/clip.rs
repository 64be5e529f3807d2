// src/clip.rs

use glam::DVec2;

use crate::config::Tolerance;
use crate::geometry::{Point2, Polygon};

/// Sutherland-Hodgman pass of `subject` against a single boundary.
///
/// `inside` decides which side of the boundary is kept and `intersect` returns
/// where the segment `prev -> current` crosses it, if it does within the
/// segment. The result may have fewer than three vertices, which callers treat
/// as "no region".
pub fn clip_polygon<P, I>(subject: &[Point2], inside: P, intersect: I) -> Polygon
where
    P: Fn(Point2) -> bool,
    I: Fn(Point2, Point2) -> Option<Point2>,
{
    if subject.is_empty() {
        return Polygon::new();
    }
    if subject.iter().all(|&p| inside(p)) {
        return Polygon::from_points(subject);
    }

    let mut output = Vec::with_capacity(subject.len() + 1); // A line adds at most one net vertex
    let mut prev_vertex = subject[subject.len() - 1];
    let mut prev_is_inside = inside(prev_vertex);

    for &current_vertex in subject {
        let current_is_inside = inside(current_vertex);

        match (prev_is_inside, current_is_inside) {
            (true, true) => output.push(current_vertex),
            (true, false) => output.extend(intersect(prev_vertex, current_vertex)),
            (false, true) => {
                output.extend(intersect(prev_vertex, current_vertex));
                output.push(current_vertex);
            }
            (false, false) => {}
        }
        prev_vertex = current_vertex;
        prev_is_inside = current_is_inside;
    }
    Polygon::from_vec(output)
}

/// Which side of a directed boundary survives a clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A line plus the side of it to keep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HalfPlane {
    /// Line through `pivot` in direction `angle` (radians).
    Angular { pivot: Point2, angle: f64, keep: Side },
    /// Line `x = x`; `Left` keeps smaller x.
    Vertical { x: f64, keep: Side },
}

impl HalfPlane {
    pub fn angular_left(pivot: Point2, angle: f64) -> Self {
        HalfPlane::Angular { pivot, angle, keep: Side::Left }
    }

    pub fn angular_right(pivot: Point2, angle: f64) -> Self {
        HalfPlane::Angular { pivot, angle, keep: Side::Right }
    }

    pub fn vertical_left(x: f64) -> Self {
        HalfPlane::Vertical { x, keep: Side::Left }
    }

    pub fn vertical_right(x: f64) -> Self {
        HalfPlane::Vertical { x, keep: Side::Right }
    }

    /// Points within `tolerance.epsilon` of the line are inside either side.
    #[inline]
    pub fn contains(&self, point: Point2, tolerance: Tolerance) -> bool {
        let eps = tolerance.epsilon;
        match *self {
            HalfPlane::Angular { pivot, angle, keep } => {
                let side = DVec2::from_angle(angle).perp_dot(point - pivot);
                match keep {
                    Side::Left => side >= -eps,
                    Side::Right => side <= eps,
                }
            }
            HalfPlane::Vertical { x, keep } => match keep {
                Side::Left => point.x <= x + eps,
                Side::Right => point.x >= x - eps,
            },
        }
    }

    /// Crossing of segment `p1 -> p2` with the boundary line.
    ///
    /// `None` when the segment runs parallel to the line or the crossing lies
    /// outside the segment.
    pub fn intersect(&self, p1: Point2, p2: Point2, tolerance: Tolerance) -> Option<Point2> {
        let segment = p2 - p1;
        let (numerator, denominator) = match *self {
            HalfPlane::Angular { pivot, angle, .. } => {
                let direction = DVec2::from_angle(angle);
                (direction.perp_dot(pivot - p1), direction.perp_dot(segment))
            }
            HalfPlane::Vertical { x, .. } => (x - p1.x, segment.x),
        };

        if denominator.abs() < tolerance.epsilon {
            return None;
        }
        let s = numerator / denominator;
        if !(0.0..=1.0).contains(&s) {
            return None;
        }
        Some(p1 + segment * s)
    }
}

/// Clips `polygon` to the kept side of `half_plane`.
pub fn clip_half_plane(polygon: &Polygon, half_plane: &HalfPlane, tolerance: Tolerance) -> Polygon {
    clip_polygon(
        polygon.vertices(),
        |p| half_plane.contains(p, tolerance),
        |a, b| half_plane.intersect(a, b, tolerance),
    )
}
