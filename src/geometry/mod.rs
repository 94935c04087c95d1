// src/geometry/mod.rs
// Geometry module hub for rope strip generation
// Centralizes the shared strip-buffer container used by the sampler/extruder/builder family
// RELEVANT FILES:src/geometry/sampler.rs,src/geometry/extrude.rs,src/geometry/strip.rs,src/rope.rs

//! Core rope geometry: curve sampling, ribbon extrusion, strip packing.

mod extrude;
mod sampler;
mod strip;
mod validate;

pub use extrude::{extrude_ribbon, EdgePair};
pub use sampler::{sample_polyline, IncludeFilter, RopeConfig};
pub use strip::{build_strip, RibbonStyle};
pub use validate::{
    validate_strip, StripStats, StripValidationIssue, StripValidationReport,
};

/// Flat strip-mesh buffers shared between the geometry core and the GPU
/// adapter.
///
/// Every centerline point contributes two vertices (left edge, then right
/// edge), so `positions` and `uv` hold four values per point and `indices`
/// six per segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripBuffers {
    /// Four values per point: left.x, left.y, right.x, right.y.
    pub positions: Vec<f32>,
    /// Four values per point: u paired with v=0, then u paired with v=1.
    pub uv: Vec<f32>,
    /// Six indices per segment, two triangles forming a quad.
    pub indices: Vec<u32>,
}

impl StripBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of centerline points currently packed.
    pub fn point_count(&self) -> usize {
        self.positions.len() / 4
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }
}
