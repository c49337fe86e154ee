#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod image;
pub mod matching;
pub mod minutiae;

// Lower-level pipeline stages – still public, but considered unstable internals.
pub mod angle;
pub mod binarize;
pub mod skeleton;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, ExtractionResult, MinutiaeDetector};

// Minutiae data model.
pub use crate::minutiae::{Minutia, MinutiaKind};

// Matching entry points.
pub use crate::matching::{match_score, match_score_with, score_one_to_many, MatchOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use minutiae_matcher::prelude::*;
///
/// # fn main() {
/// let (w, h) = (256usize, 256usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = MinutiaeDetector::new(DetectorParams::default());
/// let result = detector.process(img);
/// println!("minutiae={} latency_ms={:.3}", result.minutiae.len(), result.timing.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::matching::match_score;
    pub use crate::{DetectorParams, Minutia, MinutiaKind, MinutiaeDetector};
}
