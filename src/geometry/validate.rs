// src/geometry/validate.rs
// Strip-buffer validation utilities
// Exists to provide diagnostics covering stats, non-finite data, and index bounds
// RELEVANT FILES:src/geometry/mod.rs,src/geometry/strip.rs,src/gpu/upload.rs

use super::StripBuffers;

/// Basic statistics collected for a strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripStats {
    pub point_count: usize,
    pub triangle_count: usize,
    pub bbox_min: [f32; 2],
    pub bbox_max: [f32; 2],
}

impl Default for StripStats {
    fn default() -> Self {
        Self {
            point_count: 0,
            triangle_count: 0,
            bbox_min: [0.0; 2],
            bbox_max: [0.0; 2],
        }
    }
}

/// Issue categories detected by validation.
#[derive(Debug, Clone, PartialEq)]
pub enum StripValidationIssue {
    NonFinitePosition { element: usize },
    NonFiniteUv { element: usize },
    IndexOutOfBounds { index: u32 },
    LengthMismatch { positions: usize, uv: usize, indices: usize },
    DecreasingU { point: usize },
}

/// Complete validation report.
#[derive(Debug, Clone, PartialEq)]
pub struct StripValidationReport {
    pub stats: StripStats,
    pub issues: Vec<StripValidationIssue>,
}

impl StripValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Collapse the report into a result, for callers that treat any issue
    /// as fatal (debug assertions, upload preflight).
    pub fn into_result(self) -> crate::error::RopeMeshResult<()> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(crate::error::RopeMeshError::validation(format!(
                "{} issue(s), first: {:?}",
                self.issues.len(),
                self.issues[0]
            )))
        }
    }
}

/// Run validation across buffer lengths, finiteness, indices, and UV order.
pub fn validate_strip(buffers: &StripBuffers) -> StripValidationReport {
    let stats = compute_stats(buffers);
    let mut issues = Vec::new();

    let point_count = buffers.point_count();
    let expected_indices = 6 * point_count.saturating_sub(1);
    if buffers.positions.len() % 4 != 0
        || buffers.uv.len() != buffers.positions.len()
        || buffers.indices.len() != expected_indices
    {
        issues.push(StripValidationIssue::LengthMismatch {
            positions: buffers.positions.len(),
            uv: buffers.uv.len(),
            indices: buffers.indices.len(),
        });
    }

    for (element, value) in buffers.positions.iter().enumerate() {
        if !value.is_finite() {
            issues.push(StripValidationIssue::NonFinitePosition { element });
        }
    }
    for (element, value) in buffers.uv.iter().enumerate() {
        if !value.is_finite() {
            issues.push(StripValidationIssue::NonFiniteUv { element });
        }
    }

    let vertex_count = (point_count * 2) as u32;
    for &idx in &buffers.indices {
        if idx >= vertex_count {
            issues.push(StripValidationIssue::IndexOutOfBounds { index: idx });
        }
    }

    for point in 1..point_count {
        if buffers.uv[point * 4] < buffers.uv[(point - 1) * 4] {
            issues.push(StripValidationIssue::DecreasingU { point });
        }
    }

    StripValidationReport { stats, issues }
}

fn compute_stats(buffers: &StripBuffers) -> StripStats {
    if buffers.positions.is_empty() {
        return StripStats::default();
    }

    let mut min = [f32::INFINITY; 2];
    let mut max = [f32::NEG_INFINITY; 2];

    for pair in buffers.positions.chunks_exact(2) {
        for i in 0..2 {
            if pair[i] < min[i] {
                min[i] = pair[i];
            }
            if pair[i] > max[i] {
                max[i] = pair[i];
            }
        }
    }

    StripStats {
        point_count: buffers.point_count(),
        triangle_count: buffers.triangle_count(),
        bbox_min: min,
        bbox_max: max,
    }
}
