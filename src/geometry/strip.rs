// src/geometry/strip.rs
// Strip packing for extruded rope ribbons
// Exists to fill the flat position/UV/index buffers with in-place reuse
// RELEVANT FILES:src/geometry/mod.rs,src/geometry/extrude.rs,src/rope.rs

use glam::Vec2;

use super::{EdgePair, StripBuffers};

/// Ribbon width and texture-mapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RibbonStyle {
    /// Ribbon width in scene units.
    pub width: f32,
    /// Zero selects stretch mapping (texture spans the rope once); positive
    /// values select tile mapping with a per-tile width of
    /// `width * texture_scale`.
    pub texture_scale: f32,
}

impl RibbonStyle {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            texture_scale: 0.0,
        }
    }

    /// Whether tile-mode UV mapping is selected.
    pub fn is_tiled(&self) -> bool {
        self.texture_scale > 0.0
    }

    /// Half-width used for edge extrusion.
    pub fn half_width(&self) -> f32 {
        if self.is_tiled() {
            self.width * self.texture_scale / 2.0
        } else {
            self.width / 2.0
        }
    }
}

/// Pack extruded edge pairs into flat position/UV/index buffers.
///
/// When the point count matches the previous build, every element is
/// overwritten in place and nothing reallocates; the vectors are resized
/// only when the point count changes. A steady-state rope therefore
/// recomputes without touching the allocator.
pub fn build_strip(
    buffers: &mut StripBuffers,
    polyline: &[Vec2],
    edges: &[EdgePair],
    style: &RibbonStyle,
) {
    debug_assert_eq!(polyline.len(), edges.len());
    let point_count = edges.len();
    let segment_count = point_count.saturating_sub(1);

    if buffers.positions.len() != point_count * 4 {
        buffers.positions.resize(point_count * 4, 0.0);
        buffers.uv.resize(point_count * 4, 0.0);
    }
    if buffers.indices.len() != segment_count * 6 {
        buffers.indices.resize(segment_count * 6, 0);
    }

    for (i, pair) in edges.iter().enumerate() {
        let base = i * 4;
        buffers.positions[base] = pair.left.x;
        buffers.positions[base + 1] = pair.left.y;
        buffers.positions[base + 2] = pair.right.x;
        buffers.positions[base + 3] = pair.right.y;
    }

    if style.is_tiled() {
        // u advances by traveled centerline distance in units of one tile.
        let tile_width = style.width * style.texture_scale;
        let mut u = 0.0f32;
        for i in 0..point_count {
            if i > 0 && tile_width > f32::EPSILON {
                u += polyline[i].distance(polyline[i - 1]) / tile_width;
            }
            write_uv(buffers, i, u);
        }
    } else {
        let denom = segment_count.max(1) as f32;
        for i in 0..point_count {
            write_uv(buffers, i, i as f32 / denom);
        }
    }

    for seg in 0..segment_count {
        let base = seg * 6;
        let v = (seg * 2) as u32;
        buffers.indices[base] = v;
        buffers.indices[base + 1] = v + 1;
        buffers.indices[base + 2] = v + 2;
        buffers.indices[base + 3] = v + 2;
        buffers.indices[base + 4] = v + 1;
        buffers.indices[base + 5] = v + 3;
    }
}

fn write_uv(buffers: &mut StripBuffers, i: usize, u: f32) {
    let base = i * 4;
    buffers.uv[base] = u;
    buffers.uv[base + 1] = 0.0;
    buffers.uv[base + 2] = u;
    buffers.uv[base + 3] = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::extrude_ribbon;

    fn edges_for(polyline: &[Vec2]) -> Vec<EdgePair> {
        let mut edges = Vec::new();
        extrude_ribbon(polyline, 0.5, &mut edges);
        edges
    }

    #[test]
    fn quad_indices_follow_segment_pattern() {
        let polyline = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let edges = edges_for(&polyline);
        let mut buffers = StripBuffers::new();
        build_strip(&mut buffers, &polyline, &edges, &RibbonStyle::new(1.0));
        assert_eq!(buffers.indices, vec![0, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5]);
    }

    #[test]
    fn stretch_uv_spans_zero_to_one() {
        let polyline = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let edges = edges_for(&polyline);
        let mut buffers = StripBuffers::new();
        build_strip(&mut buffers, &polyline, &edges, &RibbonStyle::new(1.0));
        let us: Vec<f32> = (0..3).map(|i| buffers.uv[i * 4]).collect();
        assert_eq!(us, vec![0.0, 0.5, 1.0]);
        assert_eq!(buffers.uv[1], 0.0);
        assert_eq!(buffers.uv[3], 1.0);
    }

    #[test]
    fn tile_uv_accumulates_traveled_distance() {
        let polyline = [Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(7.0, 0.0)];
        let edges = edges_for(&polyline);
        let mut buffers = StripBuffers::new();
        let style = RibbonStyle {
            width: 2.0,
            texture_scale: 1.0,
        };
        build_strip(&mut buffers, &polyline, &edges, &style);
        let us: Vec<f32> = (0..3).map(|i| buffers.uv[i * 4]).collect();
        assert_eq!(us, vec![0.0, 1.5, 3.5]);
    }

    #[test]
    fn matching_point_count_reuses_allocations() {
        let polyline = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let edges = edges_for(&polyline);
        let mut buffers = StripBuffers::new();
        build_strip(&mut buffers, &polyline, &edges, &RibbonStyle::new(1.0));
        let positions_ptr = buffers.positions.as_ptr();
        let indices_ptr = buffers.indices.as_ptr();

        let moved = [Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0), Vec2::new(7.0, 5.0)];
        let moved_edges = edges_for(&moved);
        build_strip(&mut buffers, &moved, &moved_edges, &RibbonStyle::new(1.0));
        assert_eq!(buffers.positions.as_ptr(), positions_ptr);
        assert_eq!(buffers.indices.as_ptr(), indices_ptr);
        assert_eq!(buffers.positions[0], 5.0);
    }

    #[test]
    fn empty_edges_produce_empty_buffers() {
        let mut buffers = StripBuffers::new();
        build_strip(&mut buffers, &[], &[], &RibbonStyle::new(1.0));
        assert!(buffers.positions.is_empty());
        assert!(buffers.uv.is_empty());
        assert!(buffers.indices.is_empty());
    }

    #[test]
    fn single_point_emits_no_indices() {
        let polyline = [Vec2::new(1.0, 2.0)];
        let edges = edges_for(&polyline);
        let mut buffers = StripBuffers::new();
        build_strip(&mut buffers, &polyline, &edges, &RibbonStyle::new(1.0));
        assert_eq!(buffers.positions.len(), 4);
        assert_eq!(buffers.uv.len(), 4);
        assert!(buffers.indices.is_empty());
        assert_eq!(buffers.uv[0], 0.0);
    }

    #[test]
    fn zero_width_tile_mode_degenerates_to_constant_u() {
        let polyline = [Vec2::ZERO, Vec2::new(3.0, 0.0)];
        let edges = edges_for(&polyline);
        let mut buffers = StripBuffers::new();
        let style = RibbonStyle {
            width: 0.0,
            texture_scale: 2.0,
        };
        build_strip(&mut buffers, &polyline, &edges, &style);
        assert!(buffers.uv.iter().all(|v| v.is_finite()));
        assert_eq!(buffers.uv[4], 0.0);
    }
}
