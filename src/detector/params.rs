//! Parameter types configuring the extraction pipeline stages.
//!
//! Defaults reproduce the canonical algorithm: 16×16 binarization blocks,
//! an 8-pixel skeleton fragment floor, a 15-pixel border margin and an
//! 11-pixel minimum minutiae separation. Matching thresholds live in
//! [`crate::matching::MatchOptions`].

use crate::binarize::BinarizeOptions;
use crate::minutiae::FilterOptions;
use crate::skeleton::CleanOptions;
use serde::Deserialize;

/// Detector-wide parameters controlling the multi-stage pipeline.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Block-adaptive binarization options.
    pub binarize: BinarizeOptions,
    /// Skeleton fragment cleanup options.
    pub clean: CleanOptions,
    /// Border / proximity minutiae suppression options.
    pub filter: FilterOptions,
}
