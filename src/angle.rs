//! Angle utilities shared by minutiae extraction and matching.
//!
//! All angles follow the grid convention `atan2(dy, dx)` with y growing
//! downward, so a ridge pointing "down" the image has a positive angle.

use std::f64::consts::{PI, TAU};

/// Normalizes an angle into the range (-π, π].
#[inline]
pub fn normalize_signed_pi(angle: f64) -> f64 {
    let mut norm = angle.rem_euclid(TAU);
    if norm > PI {
        norm -= TAU;
    }
    norm
}

/// Computes the absolute angular difference between two angles, wrapped
/// into [0, π]. Inputs do not need to be normalized.
#[inline]
pub fn wrapped_angle_diff(a: f64, b: f64) -> f64 {
    let mut diff = (a - b).abs().rem_euclid(TAU);
    if diff > PI {
        diff = TAU - diff;
    }
    diff
}
