// src/tessellate.rs

use glam::DVec2;
use log::warn;

use crate::figure::FractionFigure;
use crate::geometry::Polygon;
use crate::vertex::{Rgba, Vertex};

/// Colors and stroke width used to draw a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub stroke_width: f64,
    pub stroke_color: Rgba,
    pub shade_color: Rgba,
    pub background: Rgba,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            stroke_color: [0.0, 0.0, 0.0, 1.0],
            shade_color: [1.0, 0.0, 0.0, 1.0],
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Indexed triangle list in screen space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn base_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Fills a simple polygon, convex or not. Degenerate polygons add nothing.
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: Rgba) {
        if polygon.is_degenerate() {
            return;
        }
        let coords: Vec<f64> = polygon.vertices().iter().flat_map(|p| [p.x, p.y]).collect();
        let triangles = match earcutr::earcut(&coords, &[], 2) {
            Ok(triangles) => triangles,
            Err(err) => {
                warn!("could not triangulate a {}-vertex polygon: {err:?}", polygon.count());
                return;
            }
        };

        let base = self.base_index();
        self.vertices.extend(polygon.vertices().iter().map(|&p| Vertex::at(p, color)));
        self.indices.extend(triangles.into_iter().map(|i| base + i as u32));
    }

    /// Strokes the closed outline of `polygon` with one quad per edge.
    ///
    /// Each quad is extended by half the width past both ends so that corners
    /// are covered.
    pub fn stroke_polygon(&mut self, polygon: &Polygon, width: f64, color: Rgba) {
        if polygon.count() < 2 {
            return;
        }
        let half = width / 2.0;
        for (a, b) in polygon.edges() {
            let along = (b - a).normalize_or_zero();
            if along == DVec2::ZERO {
                continue;
            }
            let (a, b) = (a - along * half, b + along * half);
            let across = along.perp() * half;

            let base = self.base_index();
            self.vertices.extend(
                [a + across, b + across, b - across, a - across]
                    .into_iter()
                    .map(|p| Vertex::at(p, color)),
            );
            self.indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    /// Shaded parts first, then every boundary on top.
    pub fn for_figure(figure: &FractionFigure, style: &RenderStyle) -> Self {
        let mut mesh = Self::new();
        mesh.append_figure(figure, style);
        mesh
    }

    pub fn append_figure(&mut self, figure: &FractionFigure, style: &RenderStyle) {
        for part in figure.shaded_parts() {
            self.fill_polygon(part, style.shade_color);
        }
        self.stroke_polygon(&figure.outline, style.stroke_width, style.stroke_color);
        for part in &figure.parts {
            self.stroke_polygon(part, style.stroke_width, style.stroke_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SceneLayout, Tolerance};
    use crate::figure::FractionRequest;
    use crate::generator::{PolygonGenerator, ShapeKind};
    use crate::geometry::Point2;

    const RED: Rgba = [1.0, 0.0, 0.0, 1.0];

    fn triangle_area(mesh: &Mesh) -> f64 {
        mesh.indices
            .chunks(3)
            .map(|t| {
                let p = |i: u32| {
                    let [x, y] = mesh.vertices[i as usize].position;
                    DVec2::new(x as f64, y as f64)
                };
                let (a, b, c) = (p(t[0]), p(t[1]), p(t[2]));
                (b - a).perp_dot(c - a).abs() / 2.0
            })
            .sum()
    }

    #[test]
    fn square_fill_is_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.fill_polygon(&PolygonGenerator::square(Point2::ZERO, 10.0), RED);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert!((triangle_area(&mesh) - 400.0).abs() < 1e-3);
    }

    #[test]
    fn non_convex_star_fill_covers_its_area() {
        let star = PolygonGenerator::star(Point2::ZERO, 5, 100.0, 50.0);
        let mut mesh = Mesh::new();
        mesh.fill_polygon(&star, RED);
        assert_eq!(mesh.indices.len(), 3 * (star.count() - 2));
        assert!((triangle_area(&mesh) - star.area()).abs() / star.area() < 1e-4);
    }

    #[test]
    fn degenerate_fill_adds_nothing() {
        let mut mesh = Mesh::new();
        mesh.fill_polygon(&Polygon::from_points(&[Point2::ZERO, Point2::X]), RED);
        assert!(mesh.is_empty());
    }

    #[test]
    fn stroke_emits_one_quad_per_edge() {
        let mut mesh = Mesh::new();
        let square = PolygonGenerator::square(Point2::ZERO, 10.0);
        mesh.stroke_polygon(&square, 2.0, RED);
        assert_eq!(mesh.vertices.len(), 16);
        assert_eq!(mesh.indices.len(), 24);
        // Each quad spans the edge plus one half-width cap at each end.
        assert!((triangle_area(&mesh) - 4.0 * 22.0 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn indices_are_offset_per_polygon() {
        let mut mesh = Mesh::new();
        let square = PolygonGenerator::square(Point2::ZERO, 10.0);
        mesh.fill_polygon(&square, RED);
        mesh.fill_polygon(&square, RED);
        assert!(mesh.indices[6..].iter().all(|&i| i >= 4));
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn figure_mesh_shades_only_requested_parts() {
        let style = RenderStyle { shade_color: [0.0, 0.0, 1.0, 1.0], ..RenderStyle::default() };
        let request = FractionRequest::new(ShapeKind::Square, 4, 3).unwrap();
        let figure = FractionFigure::build(&request, &SceneLayout::default(), Tolerance::default());
        let mesh = Mesh::for_figure(&figure, &style);

        let shaded = mesh.vertices.iter().filter(|v| v.color == style.shade_color).count();
        let stroked = mesh.vertices.iter().filter(|v| v.color == style.stroke_color).count();
        assert_eq!(shaded, 3 * 4);
        // Outline plus four strip outlines, four edges each.
        assert_eq!(stroked, 5 * 4 * 4);
    }
}
