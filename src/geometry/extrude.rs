// src/geometry/extrude.rs
// Ribbon edge extrusion along a sampled rope polyline
// Exists to turn centerline points into paired left/right edge vertices
// RELEVANT FILES:src/geometry/mod.rs,src/geometry/sampler.rs,src/geometry/strip.rs

use glam::Vec2;

/// Paired ribbon edge vertices for one centerline point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePair {
    pub left: Vec2,
    pub right: Vec2,
}

/// Extrude a polyline into left/right ribbon edges at a constant half-width,
/// one pair per input point. `out` is cleared first and its capacity kept.
///
/// The local tangent is a central difference, degrading to a one-sided
/// difference at the endpoints. A vanishing tangent yields a zero
/// perpendicular, collapsing both edge vertices onto the centerline instead
/// of going non-finite.
pub fn extrude_ribbon(polyline: &[Vec2], half_width: f32, out: &mut Vec<EdgePair>) {
    out.clear();
    out.reserve(polyline.len());

    for (i, &point) in polyline.iter().enumerate() {
        let prev = if i == 0 { polyline[0] } else { polyline[i - 1] };
        let next = if i + 1 == polyline.len() {
            polyline[polyline.len() - 1]
        } else {
            polyline[i + 1]
        };
        let tangent = next - prev;
        let perp = Vec2::new(-tangent.y, tangent.x).normalize_or_zero();
        out.push(EdgePair {
            left: point + perp * half_width,
            right: point - perp * half_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_polyline_extrudes_vertically() {
        let polyline = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let mut out = Vec::new();
        extrude_ribbon(&polyline, 0.5, &mut out);
        assert_eq!(out.len(), 3);
        for (pair, center) in out.iter().zip(&polyline) {
            assert_eq!(pair.left, *center + Vec2::new(0.0, 0.5));
            assert_eq!(pair.right, *center - Vec2::new(0.0, 0.5));
        }
    }

    #[test]
    fn single_point_collapses_onto_centerline() {
        let polyline = [Vec2::new(3.0, 4.0)];
        let mut out = Vec::new();
        extrude_ribbon(&polyline, 2.0, &mut out);
        assert_eq!(out[0].left, polyline[0]);
        assert_eq!(out[0].right, polyline[0]);
    }

    #[test]
    fn repeated_points_stay_finite() {
        let p = Vec2::new(1.0, 1.0);
        let polyline = [p, p, p];
        let mut out = Vec::new();
        extrude_ribbon(&polyline, 1.0, &mut out);
        for pair in &out {
            assert!(pair.left.x.is_finite() && pair.left.y.is_finite());
            assert_eq!(pair.left, p);
        }
    }

    #[test]
    fn empty_polyline_yields_no_pairs() {
        let mut out = vec![EdgePair {
            left: Vec2::ZERO,
            right: Vec2::ZERO,
        }];
        extrude_ribbon(&[], 1.0, &mut out);
        assert!(out.is_empty());
    }
}
