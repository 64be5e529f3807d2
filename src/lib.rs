// src/lib.rs

pub mod clip;
pub mod config;
pub mod error;
pub mod figure;
pub mod generator;
pub mod geometry;
pub mod partition;
pub mod tessellate;
pub mod vertex;

pub use clip::{clip_half_plane, clip_polygon, HalfPlane, Side};
pub use config::{SceneLayout, Tolerance};
pub use error::FractionError;
pub use figure::{FractionFigure, FractionRequest, MAX_PARTS};
pub use generator::{PolygonGenerator, ShapeKind};
pub use geometry::{Point2, Polygon};
pub use partition::{partition, partition_angular, partition_linear, PartitionStrategy};
pub use tessellate::{Mesh, RenderStyle};
pub use vertex::Vertex;
