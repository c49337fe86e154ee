//! Exhaustive rigid-alignment matching of two minutiae sets.
//!
//! Every ordered pair (mA, mB) of minutiae defines one alignment hypothesis:
//! rotate set B by the anchors' angle difference, translate it onto mA, and
//! greedily count one-to-one correspondences within distance, angle and kind
//! gates. The final score is the maximum hypothesis score, bounded in [0, 1].
//!
//! Hypotheses are independent pure computations over the two read-only sets,
//! so the search runs as a parallel max-reduction on a Rayon pool when the
//! `parallel` feature is enabled. The greedy assignment itself is
//! deterministic (ties go to the earlier candidate in B's order), so the
//! final max does not depend on evaluation order.
//!
//! Note that the greedy assignment is not a globally optimal bipartite
//! match, and `match_score(a, b)` is not guaranteed equal to
//! `match_score(b, a)`.

mod hypothesis;

use crate::minutiae::Minutia;
use hypothesis::hypothesis_score;
use log::debug;
use serde::Deserialize;
use std::f64::consts::PI;

/// Controls whether the hypothesis search runs sequentially or with Rayon.
#[derive(Clone, Copy, Debug)]
pub struct ParallelMatchOptions {
    enabled: bool,
    min_hypotheses_for_parallel: usize,
}

impl ParallelMatchOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_hypotheses_for_parallel: usize) -> Self {
        Self {
            enabled,
            min_hypotheses_for_parallel: min_hypotheses_for_parallel.max(1),
        }
    }

    /// Disable parallel evaluation regardless of hypothesis count.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_hypotheses_for_parallel: usize::MAX,
        }
    }

    /// Returns true when the search over `hypothesis_count` candidates
    /// should use the parallel path.
    pub fn should_parallelize(&self, hypothesis_count: usize) -> bool {
        self.enabled && hypothesis_count >= self.min_hypotheses_for_parallel
    }
}

impl Default for ParallelMatchOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_hypotheses_for_parallel: 256,
        }
    }
}

/// Thresholds gating a single minutiae correspondence under a hypothesis.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Maximum squared pixel distance between a point of A and a
    /// transformed point of B.
    pub max_distance_sq: f64,
    /// Maximum wrapped angular difference in radians.
    pub max_angle_diff: f64,
    /// Parallel evaluation gate (not part of serialized configs).
    #[serde(skip)]
    pub parallel: ParallelMatchOptions,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_distance_sq: 15.0 * 15.0,
            max_angle_diff: PI / 18.0,
            parallel: ParallelMatchOptions::default(),
        }
    }
}

/// Similarity score in [0, 1] between two filtered minutiae sets, using
/// default thresholds. Either set empty yields 0.0.
pub fn match_score(set_a: &[Minutia], set_b: &[Minutia]) -> f64 {
    match_score_with(set_a, set_b, &MatchOptions::default())
}

/// Similarity score in [0, 1] with explicit thresholds.
pub fn match_score_with(set_a: &[Minutia], set_b: &[Minutia], opts: &MatchOptions) -> f64 {
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let hypothesis_count = set_a.len() * set_b.len();
    let best = if opts.parallel.should_parallelize(hypothesis_count) {
        best_score_parallel(set_a, set_b, opts)
    } else {
        best_score_sequential(set_a, set_b, opts)
    };
    debug!(
        "match_score: |A|={} |B|={} hypotheses={} best={:.4}",
        set_a.len(),
        set_b.len(),
        hypothesis_count,
        best
    );
    best
}

/// Score one probe set against many candidate sets. The comparisons are an
/// independent map over immutable inputs and run on the Rayon pool when the
/// `parallel` feature is enabled; per-hypothesis parallelism is switched off
/// to avoid nesting.
pub fn score_one_to_many(
    probe: &[Minutia],
    candidates: &[Vec<Minutia>],
    opts: &MatchOptions,
) -> Vec<f64> {
    let per_comparison = MatchOptions {
        parallel: ParallelMatchOptions::disabled(),
        ..*opts
    };
    score_many_impl(probe, candidates, &per_comparison)
}

#[cfg(feature = "parallel")]
fn score_many_impl(probe: &[Minutia], candidates: &[Vec<Minutia>], opts: &MatchOptions) -> Vec<f64> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|candidate| match_score_with(probe, candidate, opts))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_many_impl(probe: &[Minutia], candidates: &[Vec<Minutia>], opts: &MatchOptions) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| match_score_with(probe, candidate, opts))
        .collect()
}

fn best_score_sequential(set_a: &[Minutia], set_b: &[Minutia], opts: &MatchOptions) -> f64 {
    let mut best = 0.0f64;
    for ai in 0..set_a.len() {
        for bi in 0..set_b.len() {
            let score = hypothesis_score(set_a, set_b, ai, bi, opts);
            if score > best {
                best = score;
            }
        }
    }
    best
}

#[cfg(feature = "parallel")]
fn best_score_parallel(set_a: &[Minutia], set_b: &[Minutia], opts: &MatchOptions) -> f64 {
    use rayon::prelude::*;

    (0..set_a.len() * set_b.len())
        .into_par_iter()
        .map(|k| hypothesis_score(set_a, set_b, k / set_b.len(), k % set_b.len(), opts))
        .reduce(|| 0.0, f64::max)
}

#[cfg(not(feature = "parallel"))]
fn best_score_parallel(set_a: &[Minutia], set_b: &[Minutia], opts: &MatchOptions) -> f64 {
    best_score_sequential(set_a, set_b, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minutiae::MinutiaKind;
    use std::f64::consts::FRAC_PI_2;

    fn ending(x: i32, y: i32, angle: f64) -> Minutia {
        Minutia::new(x, y, MinutiaKind::Ending, angle)
    }

    #[test]
    fn empty_sets_score_zero() {
        let set = vec![ending(10, 10, 0.0)];
        assert_eq!(match_score(&set, &[]), 0.0);
        assert_eq!(match_score(&[], &set), 0.0);
        assert_eq!(match_score(&[], &[]), 0.0);
    }

    #[test]
    fn self_match_is_perfect() {
        let set = vec![Minutia::new(10, 10, MinutiaKind::Bifurcation, 0.0)];
        assert_eq!(match_score(&set, &set), 1.0);

        let single = vec![ending(0, 0, 0.0)];
        assert_eq!(match_score(&single, &single), 1.0);
    }

    #[test]
    fn known_partial_match_scores_one_half() {
        let set_a = vec![
            ending(0, 0, 0.0),
            Minutia::new(50, 50, MinutiaKind::Bifurcation, 1.0),
        ];
        let set_b = vec![ending(0, 0, 0.0)];
        let score = match_score(&set_a, &set_b);
        assert!((score - 0.5).abs() < 1e-12, "expected 0.5, got {score}");
    }

    #[test]
    fn kind_mismatch_never_matches() {
        let set_a = vec![ending(0, 0, 0.0)];
        let set_b = vec![Minutia::new(0, 0, MinutiaKind::Bifurcation, 0.0)];
        assert_eq!(match_score(&set_a, &set_b), 0.0);
    }

    #[test]
    fn rotated_copy_scores_perfectly() {
        // Set B is set A rotated by 90° about the origin, angles shifted
        // accordingly; the correct anchor pair recovers the alignment.
        let set_a = vec![ending(10, 10, 0.0), ending(20, 10, 0.0)];
        let set_b = vec![ending(-10, 10, FRAC_PI_2), ending(-10, 20, FRAC_PI_2)];
        let score = match_score(&set_a, &set_b);
        assert!((score - 1.0).abs() < 1e-12, "expected 1.0, got {score}");
    }

    #[test]
    fn transformed_point_is_matched_at_most_once() {
        // Two A-points compete for one B-point: mutual exclusion caps
        // matched pairs at 1, keeping the score at 1/2 (and inside [0, 1]).
        let set_a = vec![ending(0, 0, 0.0), ending(1, 0, 0.0)];
        let set_b = vec![ending(0, 0, 0.0)];
        let score = match_score(&set_a, &set_b);
        assert!((score - 0.5).abs() < 1e-12, "expected 0.5, got {score}");
    }

    #[test]
    fn scores_stay_bounded_both_directions() {
        let set_a = vec![
            ending(30, 30, 0.2),
            ending(60, 35, -1.0),
            Minutia::new(45, 70, MinutiaKind::Bifurcation, 2.5),
        ];
        let set_b = vec![
            ending(31, 29, 0.25),
            Minutia::new(44, 71, MinutiaKind::Bifurcation, 2.4),
        ];
        for score in [match_score(&set_a, &set_b), match_score(&set_b, &set_a)] {
            assert!((0.0..=1.0).contains(&score), "score out of bounds: {score}");
        }
    }

    #[test]
    fn sequential_and_parallel_paths_agree() {
        let set_a: Vec<Minutia> = (0..6).map(|i| ending(10 + 13 * i, 20 + 7 * i, 0.1 * i as f64)).collect();
        let set_b: Vec<Minutia> = (0..5).map(|i| ending(11 + 13 * i, 19 + 7 * i, 0.1 * i as f64)).collect();

        let forced_parallel = MatchOptions {
            parallel: ParallelMatchOptions::new(true, 1),
            ..MatchOptions::default()
        };
        let forced_sequential = MatchOptions {
            parallel: ParallelMatchOptions::disabled(),
            ..MatchOptions::default()
        };
        let a = match_score_with(&set_a, &set_b, &forced_parallel);
        let b = match_score_with(&set_a, &set_b, &forced_sequential);
        assert_eq!(a, b);
    }

    #[test]
    fn one_to_many_maps_each_candidate() {
        let probe = vec![ending(20, 20, 0.0)];
        let candidates = vec![probe.clone(), Vec::new(), vec![ending(200, 200, 3.0)]];
        let scores = score_one_to_many(&probe, &candidates, &MatchOptions::default());
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 1.0);
        assert_eq!(scores[1], 0.0);
        assert!((0.0..=1.0).contains(&scores[2]));
    }
}
