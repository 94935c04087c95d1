//! wgpu adapter for the rope geometry core.
//!
//! Everything that touches GPU object lifecycle lives here; the geometry
//! modules never import wgpu.

mod upload;
mod vertex;

pub use upload::RopeMeshGpu;
pub use vertex::RopeVertex;
