// src/generator.rs

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use log::trace;

use crate::config::SceneLayout;
use crate::error::FractionError;
use crate::geometry::{Point2, Polygon};
use crate::partition::PartitionStrategy;

/// Number of sides used to approximate a circle.
pub const CIRCLE_RESOLUTION: usize = 100;

/// Horizontal shift of the parallelogram's bottom edge in the catalog.
pub const PARALLELOGRAM_SLANT: f64 = 40.0;

/// Angle of the first vertex of apex-up shapes (screen "up" on a Y-down canvas).
const TOP_ANGLE: f64 = -FRAC_PI_2;

pub struct PolygonGenerator;

impl PolygonGenerator {
    /// `count` vertices at equal angular spacing; `radius_at` picks each vertex's radius.
    fn ring(center: Point2, count: usize, start_angle: f64, radius_at: impl Fn(usize) -> f64) -> Polygon {
        let step = TAU / count as f64;
        (0..count)
            .map(|i| center + DVec2::from_angle(start_angle + step * i as f64) * radius_at(i))
            .collect::<Vec<_>>()
            .into()
    }

    /// Regular polygon with its first vertex straight up. `sides` must be at least 3.
    pub fn regular_polygon(center: Point2, sides: usize, radius: f64) -> Polygon {
        Self::ring(center, sides, TOP_ANGLE, |_| radius)
    }

    pub fn try_regular_polygon(center: Point2, sides: usize, radius: f64) -> Result<Polygon, FractionError> {
        if sides < 3 {
            return Err(FractionError::TooFewSides(sides));
        }
        check_size(radius)?;
        Ok(Self::regular_polygon(center, sides, radius))
    }

    /// Circle as a fixed-resolution polygon, starting on the positive x axis.
    pub fn circle(center: Point2, radius: f64) -> Polygon {
        Self::ring(center, CIRCLE_RESOLUTION, 0.0, |_| radius)
    }

    /// Star of `points` tips: `2 * points` vertices alternating outer and inner
    /// radius, the first tip straight up.
    pub fn star(center: Point2, points: usize, outer_radius: f64, inner_radius: f64) -> Polygon {
        Self::ring(center, 2 * points, TOP_ANGLE, |i| {
            if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            }
        })
    }

    pub fn try_star(
        center: Point2,
        points: usize,
        outer_radius: f64,
        inner_radius: f64,
    ) -> Result<Polygon, FractionError> {
        if points < 2 {
            return Err(FractionError::TooFewStarPoints(points));
        }
        check_size(outer_radius)?;
        check_size(inner_radius)?;
        Ok(Self::star(center, points, outer_radius, inner_radius))
    }

    pub fn square(center: Point2, half_side: f64) -> Polygon {
        Self::rectangle(center, half_side * 2.0, half_side * 2.0)
    }

    pub fn rectangle(center: Point2, width: f64, height: f64) -> Polygon {
        Self::trapezoid(center, width, width, height)
    }

    /// Diamond with vertices on the axes: top, right, bottom, left.
    pub fn rhombus(center: Point2, half_diagonal: f64) -> Polygon {
        Polygon::from_points(&[
            center + DVec2::new(0.0, -half_diagonal),
            center + DVec2::new(half_diagonal, 0.0),
            center + DVec2::new(0.0, half_diagonal),
            center + DVec2::new(-half_diagonal, 0.0),
        ])
    }

    /// Horizontal top and bottom edges; the bottom edge is shifted right by `slant`.
    pub fn parallelogram(center: Point2, width: f64, height: f64, slant: f64) -> Polygon {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Polygon::from_points(&[
            center + DVec2::new(-hw, -hh),
            center + DVec2::new(hw, -hh),
            center + DVec2::new(hw + slant, hh),
            center + DVec2::new(-hw + slant, hh),
        ])
    }

    /// Isosceles trapezoid with independent top and bottom widths.
    pub fn trapezoid(center: Point2, top_width: f64, bottom_width: f64, height: f64) -> Polygon {
        let (ht, hb, hh) = (top_width / 2.0, bottom_width / 2.0, height / 2.0);
        Polygon::from_points(&[
            center + DVec2::new(-ht, -hh),
            center + DVec2::new(ht, -hh),
            center + DVec2::new(hb, hh),
            center + DVec2::new(-hb, hh),
        ])
    }
}

fn check_size(value: f64) -> Result<(), FractionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FractionError::NonPositiveSize(value))
    }
}

/// The fixed catalog of shapes offered to learners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Nonagon,
    Decagon,
    Star4,
    Star5,
    Star6,
    Square,
    Rectangle,
    Rhombus,
    Parallelogram,
    Trapezoid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 16] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Heptagon,
        ShapeKind::Octagon,
        ShapeKind::Nonagon,
        ShapeKind::Decagon,
        ShapeKind::Star4,
        ShapeKind::Star5,
        ShapeKind::Star6,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Rhombus,
        ShapeKind::Parallelogram,
        ShapeKind::Trapezoid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Heptagon => "Heptagon",
            ShapeKind::Octagon => "Octagon",
            ShapeKind::Nonagon => "Nonagon",
            ShapeKind::Decagon => "Decagon",
            ShapeKind::Star4 => "4-Point Star",
            ShapeKind::Star5 => "5-Point Star",
            ShapeKind::Star6 => "6-Point Star",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Trapezoid => "Trapezoid",
        }
    }

    /// Radially symmetric shapes are cut into sectors, quadrilaterals into strips.
    pub fn strategy(self) -> PartitionStrategy {
        if self.is_quadrilateral() {
            PartitionStrategy::Linear
        } else {
            PartitionStrategy::Angular
        }
    }

    pub fn is_quadrilateral(self) -> bool {
        matches!(
            self,
            ShapeKind::Square
                | ShapeKind::Rectangle
                | ShapeKind::Rhombus
                | ShapeKind::Parallelogram
                | ShapeKind::Trapezoid
        )
    }

    /// Outline of this shape placed and sized by `layout`.
    pub fn build(self, layout: &SceneLayout) -> Polygon {
        let c = layout.center;
        let s = layout.base_size;
        let polygon = match self {
            ShapeKind::Circle => PolygonGenerator::circle(c, s),
            ShapeKind::Triangle => PolygonGenerator::regular_polygon(c, 3, s),
            ShapeKind::Pentagon => PolygonGenerator::regular_polygon(c, 5, s),
            ShapeKind::Hexagon => PolygonGenerator::regular_polygon(c, 6, s),
            ShapeKind::Heptagon => PolygonGenerator::regular_polygon(c, 7, s),
            ShapeKind::Octagon => PolygonGenerator::regular_polygon(c, 8, s),
            ShapeKind::Nonagon => PolygonGenerator::regular_polygon(c, 9, s),
            ShapeKind::Decagon => PolygonGenerator::regular_polygon(c, 10, s),
            ShapeKind::Star4 => PolygonGenerator::star(c, 4, s, s / 2.0),
            ShapeKind::Star5 => PolygonGenerator::star(c, 5, s, s / 2.0),
            ShapeKind::Star6 => PolygonGenerator::star(c, 6, s, s / 2.0),
            ShapeKind::Square => PolygonGenerator::square(c, s),
            ShapeKind::Rectangle => PolygonGenerator::rectangle(c, s * 2.0, s),
            ShapeKind::Rhombus => PolygonGenerator::rhombus(c, s),
            ShapeKind::Parallelogram => PolygonGenerator::parallelogram(c, s * 2.0, s, PARALLELOGRAM_SLANT),
            ShapeKind::Trapezoid => PolygonGenerator::trapezoid(c, s * 1.2, s * 2.0, s),
        };
        trace!("generated {} with {} vertices", self.label(), polygon.count());
        polygon
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
