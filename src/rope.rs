// src/rope.rs
// Rope mesh orchestration with change detection
// Exists to decide between full geometry rebuilds and cheap visual-only updates
// RELEVANT FILES:src/geometry/sampler.rs,src/geometry/strip.rs,src/gpu/upload.rs

//! Per-rope orchestration: owns the buffers, detects which inputs changed,
//! and routes each property-update cycle down the full or the cheap path.

use glam::Vec2;
use log::{debug, trace};

use crate::geometry::{
    build_strip, extrude_ribbon, sample_polyline, EdgePair, RibbonStyle, RopeConfig, StripBuffers,
};

/// Opaque handle to a host-owned texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

/// Visual properties applied without touching geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeVisuals {
    pub tint: [f32; 3],
    pub alpha: f32,
    pub texture: TextureHandle,
}

impl Default for RopeVisuals {
    fn default() -> Self {
        Self {
            tint: [1.0, 1.0, 1.0],
            alpha: 1.0,
            texture: TextureHandle::default(),
        }
    }
}

/// What one update call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing differed; no work done.
    Unchanged,
    /// Only tint/alpha/texture differed; geometry untouched.
    VisualsOnly,
    /// A shape input differed; geometry fully recomputed.
    Rebuilt,
}

/// Owns one rope's strip buffers and applies per-frame property updates.
///
/// The recompute is synchronous and total: every update call returns with
/// the buffers in a fully consistent state. Scratch vectors and the strip
/// buffers are reused across rebuilds, so a rope whose point count is stable
/// never reallocates.
pub struct RopeMeshComponent {
    config: RopeConfig,
    style: RibbonStyle,
    visuals: RopeVisuals,
    polyline: Vec<Vec2>,
    edges: Vec<EdgePair>,
    buffers: StripBuffers,
    mesh_dirty: bool,
    visuals_dirty: bool,
}

impl RopeMeshComponent {
    /// Build a component and compute its initial geometry. Both dirty flags
    /// start raised so the adapter performs the first upload.
    pub fn new(config: RopeConfig, style: RibbonStyle, visuals: RopeVisuals) -> Self {
        let mut component = Self {
            config,
            style,
            visuals,
            polyline: Vec::new(),
            edges: Vec::new(),
            buffers: StripBuffers::new(),
            mesh_dirty: false,
            visuals_dirty: true,
        };
        component.recompute();
        component
    }

    /// Apply one property-update cycle.
    ///
    /// Any change to `start`, `end`, `length`, `points_per_length`, the
    /// include filter, `width`, or `texture_scale` triggers a full
    /// recompute. Changes restricted to tint/alpha/texture take the cheap
    /// path. Identical inputs are a no-op.
    pub fn update(
        &mut self,
        config: &RopeConfig,
        style: &RibbonStyle,
        visuals: &RopeVisuals,
    ) -> UpdateOutcome {
        let shape_changed = self.config != *config || self.style != *style;
        let visuals_changed = self.visuals != *visuals;

        if visuals_changed {
            self.visuals = *visuals;
            self.visuals_dirty = true;
        }

        if shape_changed {
            self.config = config.clone();
            self.style = *style;
            self.recompute();
            UpdateOutcome::Rebuilt
        } else if visuals_changed {
            trace!("rope visual-only update");
            UpdateOutcome::VisualsOnly
        } else {
            UpdateOutcome::Unchanged
        }
    }

    fn recompute(&mut self) {
        sample_polyline(&self.config, &mut self.polyline);
        extrude_ribbon(&self.polyline, self.style.half_width(), &mut self.edges);
        build_strip(&mut self.buffers, &self.polyline, &self.edges, &self.style);
        self.mesh_dirty = true;
        debug!(
            "rope rebuilt: {} points, {} triangles",
            self.buffers.point_count(),
            self.buffers.triangle_count()
        );
    }

    pub fn buffers(&self) -> &StripBuffers {
        &self.buffers
    }

    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    pub fn style(&self) -> &RibbonStyle {
        &self.style
    }

    pub fn visuals(&self) -> &RopeVisuals {
        &self.visuals
    }

    /// Drain the re-upload flag; true when geometry changed since the last
    /// drain.
    pub fn take_mesh_dirty(&mut self) -> bool {
        std::mem::take(&mut self.mesh_dirty)
    }

    /// Drain the visual-properties flag.
    pub fn take_visuals_dirty(&mut self) -> bool {
        std::mem::take(&mut self.visuals_dirty)
    }
}
