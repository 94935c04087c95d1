//! Interleaved vertex layout for rope strip upload.

use bytemuck::{Pod, Zeroable};

/// Vertex consumed by the rope draw pipeline.
#[repr(C)]
#[derive(Clone, Copy, Debug, Zeroable, Pod)]
pub struct RopeVertex {
    /// Scene-space position [x, y]
    pub position: [f32; 2],
    /// Texture coordinates [u, v]
    pub uv: [f32; 2],
}

impl RopeVertex {
    pub fn new(position: [f32; 2], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    /// Get the vertex buffer layout for wgpu
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RopeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // UV
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<RopeVertex>(), 16);
    }

    #[test]
    fn layout_stride_matches_struct_size() {
        let layout = RopeVertex::buffer_layout();
        assert_eq!(layout.array_stride as usize, std::mem::size_of::<RopeVertex>());
        assert_eq!(layout.attributes.len(), 2);
    }
}
