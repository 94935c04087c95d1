//! Dynamic rope/ribbon strip-mesh generation.
//!
//! Turns two anchor points plus a handful of physical parameters (slack
//! length, sampling density, width, texture mode) into a renderable,
//! texture-mapped strip mesh that sags like a rope and stays cheap to
//! recompute when the anchors move every frame.
//!
//! The geometry core ([`geometry`], [`rope`]) is engine-agnostic and never
//! touches GPU objects; everything wgpu-specific (buffer upload, sampler
//! addressing) lives behind the [`gpu`] adapter.

pub mod error;
pub mod geometry;
pub mod gpu;
pub mod rope;

pub use error::{RopeMeshError, RopeMeshResult};
pub use geometry::{
    build_strip, extrude_ribbon, sample_polyline, EdgePair, RibbonStyle, RopeConfig, StripBuffers,
};
pub use gpu::{RopeMeshGpu, RopeVertex};
pub use rope::{RopeMeshComponent, RopeVisuals, TextureHandle, UpdateOutcome};
