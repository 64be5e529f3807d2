// src/vertex.rs

use bytemuck::{Pod, Zeroable};

use crate::geometry::Point2;

/// RGBA in linear 0..1 components.
pub type Rgba = [f32; 4];

/// Screen-space vertex consumed by the 2D pipeline: pixel position plus color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    pub fn new(position: [f32; 2], color: Rgba) -> Self {
        Self { position, color }
    }

    /// Narrows a geometry point to GPU precision.
    pub fn at(point: Point2, color: Rgba) -> Self {
        Self::new(point.as_vec2().to_array(), color)
    }
}
