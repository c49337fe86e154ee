//! One rigid-alignment hypothesis: rotation and translation inferred from a
//! single assumed point correspondence, plus the greedy assignment that
//! scores it.
use super::MatchOptions;
use crate::angle::wrapped_angle_diff;
use crate::minutiae::Minutia;
use nalgebra::{Rotation2, Vector2};

/// Rigid transform aligning one candidate correspondence pair: rotate by the
/// anchors' angle difference about the anchor in B, then translate onto the
/// anchor in A.
pub(super) struct AlignmentHypothesis {
    rotation: Rotation2<f64>,
    d_theta: f64,
    anchor_a: (i32, i32),
    anchor_b: (i32, i32),
}

impl AlignmentHypothesis {
    pub(super) fn new(anchor_a: &Minutia, anchor_b: &Minutia) -> Self {
        let d_theta = anchor_a.angle - anchor_b.angle;
        Self {
            rotation: Rotation2::new(d_theta),
            d_theta,
            anchor_a: (anchor_a.x, anchor_a.y),
            anchor_b: (anchor_b.x, anchor_b.y),
        }
    }

    /// Map a point of set B into set A's frame. Positions are truncated to
    /// integers; the angle is the raw sum, compared later under wrapping.
    pub(super) fn transform(&self, m: &Minutia) -> Minutia {
        let offset = Vector2::new(
            (m.x - self.anchor_b.0) as f64,
            (m.y - self.anchor_b.1) as f64,
        );
        let rotated = self.rotation * offset;
        Minutia {
            x: rotated.x as i32 + self.anchor_a.0,
            y: rotated.y as i32 + self.anchor_a.1,
            kind: m.kind,
            angle: m.angle + self.d_theta,
        }
    }
}

/// Evaluate the hypothesis anchored at `(set_a[ai], set_b[bi])`: transform
/// all of B, then greedily assign each point of A (in order) to its nearest
/// unused transformed point within the distance/angle/kind gates.
///
/// Returns `matched² / (|A|·|B|)`, which is ≤ 1 since matched ≤ min(|A|,|B|).
pub(super) fn hypothesis_score(
    set_a: &[Minutia],
    set_b: &[Minutia],
    ai: usize,
    bi: usize,
    opts: &MatchOptions,
) -> f64 {
    let hypothesis = AlignmentHypothesis::new(&set_a[ai], &set_b[bi]);
    let transformed: Vec<Minutia> = set_b.iter().map(|m| hypothesis.transform(m)).collect();

    let mut used = vec![false; transformed.len()];
    let mut matched = 0usize;

    for pa in set_a {
        // Nearest qualifying candidate; ties keep the earlier index because
        // only a strictly smaller distance replaces the best-so-far.
        let mut best: Option<(usize, f64)> = None;
        for (idx, tb) in transformed.iter().enumerate() {
            if used[idx] || tb.kind != pa.kind {
                continue;
            }
            let dist_sq = pa.distance_sq(tb) as f64;
            if dist_sq > opts.max_distance_sq {
                continue;
            }
            if wrapped_angle_diff(tb.angle, pa.angle) > opts.max_angle_diff {
                continue;
            }
            if best.map_or(true, |(_, d)| dist_sq < d) {
                best = Some((idx, dist_sq));
            }
        }
        if let Some((idx, _)) = best {
            used[idx] = true;
            matched += 1;
        }
    }

    (matched * matched) as f64 / (set_a.len() * set_b.len()) as f64
}
