// src/geometry/sampler.rs
// Rope curve sampling producing sagging polylines
// Exists to turn anchor points plus slack length into an ordered point sequence
// RELEVANT FILES:src/geometry/mod.rs,src/geometry/extrude.rs,src/rope.rs

use std::sync::Arc;

use glam::Vec2;

/// Per-sample filter predicate, called as
/// `include(point, start, end, is_second_half)`. Returning `false` drops the
/// sample, e.g. to clip the rope where it passes behind an occluder.
pub type IncludeFilter = Arc<dyn Fn(Vec2, Vec2, Vec2, bool) -> bool + Send + Sync>;

/// Anchor points and physical parameters describing one rope.
#[derive(Clone, Default)]
pub struct RopeConfig {
    pub start: Vec2,
    pub end: Vec2,
    /// Physical (slack) length of the rope, not the anchor distance.
    pub length: f32,
    /// Sampling density in samples per scene unit of rope length.
    pub points_per_length: f32,
    /// Optional per-sample filter. Absent accepts every sample.
    pub include: Option<IncludeFilter>,
}

impl PartialEq for RopeConfig {
    fn eq(&self, other: &Self) -> bool {
        // Filters compare by installed instance: swapping in a new closure is
        // a shape change even if it computes the same thing.
        let filter_eq = match (&self.include, &other.include) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.start == other.start
            && self.end == other.end
            && self.length == other.length
            && self.points_per_length == other.points_per_length
            && filter_eq
    }
}

impl std::fmt::Debug for RopeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RopeConfig")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("length", &self.length)
            .field("points_per_length", &self.points_per_length)
            .field("include", &self.include.as_ref().map(|_| "<filter>"))
            .finish()
    }
}

/// Sample the sagging rope curve into `out`, clearing it first (capacity is
/// retained across calls).
///
/// The rope is modeled as a quadratic Bezier whose control point hangs off
/// the chord midpoint by the slack-derived sag. The sample count is
/// `floor(points_per_length * length)` with a floor of two, and the curve
/// parameter runs over `i / n`, so the final sample stops just short of
/// `end`.
pub fn sample_polyline(config: &RopeConfig, out: &mut Vec<Vec2>) {
    out.clear();

    let control = control_point(config);

    let n = ((config.points_per_length * config.length) as usize).max(2);
    out.reserve(n);
    for i in 0..n {
        let t = i as f32 / n as f32;
        let point = quadratic_bezier(config.start, control, config.end, t);
        let keep = match &config.include {
            Some(filter) => filter(point, config.start, config.end, t >= 0.5),
            None => true,
        };
        if keep {
            out.push(point);
        }
    }
}

/// Chord midpoint pushed down by the sag amount.
fn control_point(config: &RopeConfig) -> Vec2 {
    let chord = config.end - config.start;
    let radicand = config.length * config.length - chord.length_squared();
    if radicand < 0.0 {
        log::warn!(
            "rope length {} shorter than anchor distance {}, clamping sag to zero",
            config.length,
            chord.length()
        );
    }
    let sag = radicand.max(0.0).sqrt() / 2.0;
    config.start.lerp(config.end, 0.5) + Vec2::new(0.0, sag)
}

fn quadratic_bezier(a: Vec2, c: Vec2, b: Vec2, t: f32) -> Vec2 {
    let s = 1.0 - t;
    a * (s * s) + c * (2.0 * s * t) + b * (t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(start: Vec2, end: Vec2, length: f32, points_per_length: f32) -> RopeConfig {
        RopeConfig {
            start,
            end,
            length,
            points_per_length,
            include: None,
        }
    }

    #[test]
    fn sample_count_is_density_times_length() {
        let mut out = Vec::new();
        sample_polyline(
            &config(Vec2::ZERO, Vec2::new(100.0, 0.0), 120.0, 0.1),
            &mut out,
        );
        assert_eq!(out.len(), 12);
        assert_eq!(out[0], Vec2::ZERO);
    }

    #[test]
    fn midpoint_sample_carries_half_the_sag() {
        // sag = sqrt(120^2 - 100^2) / 2, and the Bezier at t=0.5 sits at
        // half the control-point offset for a flat chord.
        let mut out = Vec::new();
        sample_polyline(
            &config(Vec2::ZERO, Vec2::new(100.0, 0.0), 120.0, 0.1),
            &mut out,
        );
        let sag = (4400.0f32).sqrt() / 2.0;
        assert!((out[6].y - sag / 2.0).abs() < 1e-3);
    }

    #[test]
    fn taut_rope_clamps_sag_to_zero() {
        let mut out = Vec::new();
        sample_polyline(
            &config(Vec2::ZERO, Vec2::new(10.0, 0.0), 5.0, 1.0),
            &mut out,
        );
        assert!(out.iter().all(|p| p.y == 0.0 && p.x.is_finite()));
    }

    #[test]
    fn sparse_density_falls_back_to_two_points() {
        let mut out = Vec::new();
        sample_polyline(
            &config(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.5, 0.1),
            &mut out,
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn coincident_anchors_produce_a_finite_arc() {
        let anchor = Vec2::new(5.0, 5.0);
        let mut out = Vec::new();
        sample_polyline(&config(anchor, anchor, 4.0, 2.0), &mut out);
        assert_eq!(out[0], anchor);
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        // The arc dips below the anchors, so not every point is the anchor.
        assert!(out.iter().any(|p| *p != anchor));
    }

    #[test]
    fn filter_sees_second_half_flag() {
        let mut cfg = config(Vec2::ZERO, Vec2::new(100.0, 0.0), 120.0, 0.1);
        cfg.include = Some(Arc::new(|_, _, _, second_half| !second_half));
        let mut out = Vec::new();
        sample_polyline(&cfg, &mut out);
        // t = i/12 >= 0.5 for i >= 6, leaving the first six samples.
        assert_eq!(out.len(), 6);
    }
}
