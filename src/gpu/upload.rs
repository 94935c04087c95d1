// src/gpu/upload.rs
// GPU-side lifecycle for rope strip meshes
// Owns the wgpu buffers and sampler for one rope, mirroring the CPU-side reuse discipline
// RELEVANT FILES:src/gpu/vertex.rs,src/geometry/mod.rs,src/rope.rs

use wgpu::util::DeviceExt;

use super::vertex::RopeVertex;
use crate::error::{RopeMeshError, RopeMeshResult};
use crate::geometry::StripBuffers;
use crate::rope::RopeMeshComponent;

/// GPU resources for one rope mesh.
///
/// Vertex and index buffers are recreated only when their byte size changes;
/// a steady-state rope re-uploads through `queue.write_buffer` into the
/// existing allocations.
pub struct RopeMeshGpu {
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,
    tiled: bool,
    vertex_scratch: Vec<RopeVertex>,
    index_count: u32,
}

impl Default for RopeMeshGpu {
    fn default() -> Self {
        Self::new()
    }
}

impl RopeMeshGpu {
    pub fn new() -> Self {
        Self {
            vertex_buffer: None,
            index_buffer: None,
            sampler: None,
            tiled: false,
            vertex_scratch: Vec::new(),
            index_count: 0,
        }
    }

    /// Drain a component's geometry dirty flag and push any changes to the
    /// GPU, keeping the sampler's addressing mode in step with the UV mode.
    /// Visual properties (tint/alpha/texture binding) stay with the host.
    pub fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rope: &mut RopeMeshComponent,
    ) -> RopeMeshResult<()> {
        if rope.take_mesh_dirty() {
            self.upload(device, queue, rope.buffers())?;
            self.ensure_wrap_mode(device, rope.style().is_tiled());
        }
        Ok(())
    }

    /// Interleave the flat strip buffers into vertices and upload them.
    ///
    /// An empty strip releases the GPU buffers and draws nothing.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        buffers: &StripBuffers,
    ) -> RopeMeshResult<()> {
        if buffers.positions.len() % 4 != 0 || buffers.uv.len() != buffers.positions.len() {
            return Err(RopeMeshError::upload(
                "strip buffers have mismatched position/uv lengths",
            ));
        }
        let point_count = buffers.point_count();
        let vertex_count = (point_count * 2) as u32;
        if let Some(&max) = buffers.indices.iter().max() {
            if max >= vertex_count {
                return Err(RopeMeshError::upload(format!(
                    "index {max} out of range for {vertex_count} vertices"
                )));
            }
        }

        self.vertex_scratch.clear();
        self.vertex_scratch.reserve(point_count * 2);
        for i in 0..point_count {
            let base = i * 4;
            self.vertex_scratch.push(RopeVertex::new(
                [buffers.positions[base], buffers.positions[base + 1]],
                [buffers.uv[base], buffers.uv[base + 1]],
            ));
            self.vertex_scratch.push(RopeVertex::new(
                [buffers.positions[base + 2], buffers.positions[base + 3]],
                [buffers.uv[base + 2], buffers.uv[base + 3]],
            ));
        }

        if self.vertex_scratch.is_empty() || buffers.indices.is_empty() {
            self.vertex_buffer = None;
            self.index_buffer = None;
            self.index_count = 0;
            return Ok(());
        }

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&self.vertex_scratch);
        match &self.vertex_buffer {
            Some(buffer) if buffer.size() == vertex_bytes.len() as u64 => {
                queue.write_buffer(buffer, 0, vertex_bytes);
            }
            _ => {
                log::debug!("allocating rope vertex buffer: {} bytes", vertex_bytes.len());
                self.vertex_buffer =
                    Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("rope-vertex-buffer"),
                        contents: vertex_bytes,
                        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    }));
            }
        }

        let index_bytes: &[u8] = bytemuck::cast_slice(&buffers.indices);
        match &self.index_buffer {
            Some(buffer) if buffer.size() == index_bytes.len() as u64 => {
                queue.write_buffer(buffer, 0, index_bytes);
            }
            _ => {
                log::debug!("allocating rope index buffer: {} bytes", index_bytes.len());
                self.index_buffer =
                    Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("rope-index-buffer"),
                        contents: index_bytes,
                        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                    }));
            }
        }

        self.index_count = buffers.indices.len() as u32;
        Ok(())
    }

    /// Apply the texture addressing mode required by the current UV mode.
    ///
    /// Tile-mode UVs run past 1.0 and need repeat addressing; the sampler is
    /// recreated only when the mode actually changes, so the mutation happens
    /// once per mode switch. Some GL-backed hosts ignore repeat addressing
    /// for non-power-of-two textures; that limitation lives in the host
    /// engine, not here.
    pub fn ensure_wrap_mode(&mut self, device: &wgpu::Device, tiled: bool) {
        if self.sampler.is_some() && self.tiled == tiled {
            return;
        }
        let mode = if tiled {
            wgpu::AddressMode::Repeat
        } else {
            wgpu::AddressMode::ClampToEdge
        };
        self.sampler = Some(device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("rope-sampler"),
            address_mode_u: mode,
            address_mode_v: mode,
            address_mode_w: mode,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        }));
        self.tiled = tiled;
    }

    pub fn vertex_buffer(&self) -> Option<&wgpu::Buffer> {
        self.vertex_buffer.as_ref()
    }

    pub fn index_buffer(&self) -> Option<&wgpu::Buffer> {
        self.index_buffer.as_ref()
    }

    pub fn sampler(&self) -> Option<&wgpu::Sampler> {
        self.sampler.as_ref()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}
