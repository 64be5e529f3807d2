// src/partition.rs

use std::f64::consts::{FRAC_PI_2, TAU};

use log::{debug, trace};

use crate::clip::{clip_half_plane, HalfPlane};
use crate::config::Tolerance;
use crate::geometry::Polygon;

/// How a shape is cut into parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartitionStrategy {
    /// Equal-angle sectors around the centroid, for radially symmetric shapes.
    Angular,
    /// Equal-width vertical strips, for convex quadrilaterals.
    Linear,
}

/// Sweep starts straight up on a Y-down canvas.
const START_ANGLE: f64 = -FRAC_PI_2;

pub fn partition(polygon: &Polygon, parts: usize, strategy: PartitionStrategy, tolerance: Tolerance) -> Vec<Polygon> {
    match strategy {
        PartitionStrategy::Angular => partition_angular(polygon, parts, tolerance),
        PartitionStrategy::Linear => partition_linear(polygon, parts, tolerance),
    }
}

/// Cuts `polygon` into `parts` sectors of equal angle around its centroid.
///
/// Every sector is clipped from the original polygon, between the ray at
/// `START_ANGLE + i * step` (kept on its left) and the next ray (kept on its
/// right). Sectors that collapse to two or fewer vertices are dropped, so the
/// result may hold fewer than `parts` polygons. `parts <= 1` yields the input.
pub fn partition_angular(polygon: &Polygon, parts: usize, tolerance: Tolerance) -> Vec<Polygon> {
    if parts <= 1 {
        return vec![polygon.clone()];
    }

    let center = polygon.centroid();
    let step = TAU / parts as f64;
    let mut sectors = Vec::with_capacity(parts);

    for i in 0..parts {
        let start = START_ANGLE + step * i as f64;
        let end = start + step;
        let sector = clip_half_plane(polygon, &HalfPlane::angular_left(center, start), tolerance);
        let sector = clip_half_plane(&sector, &HalfPlane::angular_right(center, end), tolerance);

        if sector.is_degenerate() {
            trace!("dropping degenerate sector {i} of {parts}");
            continue;
        }
        sectors.push(sector);
    }

    debug!("angular partition: {} of {} sectors around {:?}", sectors.len(), parts, center);
    sectors
}

/// Cuts `polygon` into `parts` vertical strips of equal width, left to right.
///
/// Each cut re-clips only the part not yet consumed. Only meaningful for
/// convex quadrilaterals. `parts <= 1` yields the input.
pub fn partition_linear(polygon: &Polygon, parts: usize, tolerance: Tolerance) -> Vec<Polygon> {
    if parts <= 1 {
        return vec![polygon.clone()];
    }
    let Some((min, max)) = polygon.bounds() else {
        return Vec::new();
    };

    let step = (max.x - min.x) / parts as f64;
    let mut strips = Vec::with_capacity(parts);
    let mut remaining = polygon.clone();

    for i in 1..parts {
        let x_line = min.x + step * i as f64;
        let left = clip_half_plane(&remaining, &HalfPlane::vertical_left(x_line), tolerance);
        let right = clip_half_plane(&remaining, &HalfPlane::vertical_right(x_line), tolerance);

        if left.is_degenerate() {
            trace!("skipping degenerate strip left of x = {x_line}");
        } else {
            strips.push(left);
        }
        remaining = right;
    }
    if !remaining.is_degenerate() {
        strips.push(remaining);
    }

    debug!("linear partition: {} of {} strips over x in [{}, {}]", strips.len(), parts, min.x, max.x);
    strips
}
