// src/rendering_lib/vertex.rs

use fraction_shapes::Vertex;

const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

/// GPU buffer layout of a figure `Vertex`: position at location 0, color at 1.
pub fn vertex_buffer_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_vertex_fields() {
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x4);
    }
}
