//! Spurious-minutiae suppression: border margin and mutual proximity.
//!
//! Two sequential rules over the extracted set:
//! 1. drop minutiae within a fixed margin of any image edge (thinning and
//!    binarization artifacts cluster there), then
//! 2. for every remaining pair closer than a minimum separation, drop both
//!    members. Ambiguous clusters are discarded entirely rather than
//!    reduced to one representative.
//!
//! Surviving minutiae keep their original relative order.
use super::Minutia;
use serde::Deserialize;

/// Options for spurious-minutiae filtering.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Margin from every image edge inside which minutiae are discarded.
    pub border_margin: i32,
    /// Squared minimum separation between two minutiae; closer pairs are
    /// mutually suppressed.
    pub min_separation_sq: i64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            border_margin: 15,
            min_separation_sq: 11 * 11,
        }
    }
}

/// Apply border and proximity suppression, preserving order of survivors.
pub fn filter_minutiae(
    minutiae: &[Minutia],
    width: usize,
    height: usize,
    opts: &FilterOptions,
) -> Vec<Minutia> {
    let margin = opts.border_margin;
    let w = width as i32;
    let h = height as i32;
    let mut removed = vec![false; minutiae.len()];

    // Rule 1: border margin.
    for (flag, m) in removed.iter_mut().zip(minutiae.iter()) {
        if m.x < margin || m.x > w - margin || m.y < margin || m.y > h - margin {
            *flag = true;
        }
    }

    // Rule 2: mutual proximity over pairs that survived rule 1.
    for i in 0..minutiae.len() {
        if removed[i] {
            continue;
        }
        for j in i + 1..minutiae.len() {
            if removed[j] {
                continue;
            }
            if minutiae[i].distance_sq(&minutiae[j]) < opts.min_separation_sq {
                removed[i] = true;
                removed[j] = true;
            }
        }
    }

    minutiae
        .iter()
        .zip(removed.iter())
        .filter(|(_, &r)| !r)
        .map(|(m, _)| *m)
        .collect()
}
