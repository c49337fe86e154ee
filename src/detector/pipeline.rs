//! Pipeline driver running binarize → thin → clean → extract → filter.
//!
//! Typical usage:
//! ```no_run
//! use minutiae_matcher::{DetectorParams, MinutiaeDetector};
//! use minutiae_matcher::image::ImageU8;
//!
//! # fn example(gray: ImageU8) {
//! let detector = MinutiaeDetector::new(DetectorParams::default());
//! let result = detector.process(gray);
//! println!("found {} minutiae", result.minutiae.len());
//! # }
//! ```

use super::params::DetectorParams;
use super::report::{ExtractionResult, StageTimings};
use crate::binarize::binarize_in_place;
use crate::image::{GrayU8, ImageU8};
use crate::minutiae::{extract_minutiae, filter_minutiae};
use crate::skeleton::{clean_skeleton, thin};
use log::debug;
use std::time::Instant;

/// Runs the five-stage minutiae extraction pipeline over grayscale views.
pub struct MinutiaeDetector {
    params: DetectorParams,
}

impl MinutiaeDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    /// Run the full pipeline and return the filtered minutiae with timings.
    pub fn process(&self, gray: ImageU8) -> ExtractionResult {
        self.process_with_skeleton(gray).0
    }

    /// Like [`process`](Self::process), but also returns the cleaned
    /// skeleton grid (values {0,1}) for visualization or export.
    pub fn process_with_skeleton(&self, gray: ImageU8) -> (ExtractionResult, GrayU8) {
        let total_start = Instant::now();
        let mut timing = StageTimings::default();
        let width = gray.w;
        let height = gray.h;

        let stage_start = Instant::now();
        let mut working = GrayU8::from_view(&gray);
        binarize_in_place(&mut working, &self.params.binarize);
        timing.binarize_ms = elapsed_ms(stage_start);

        let stage_start = Instant::now();
        let mut skeleton = thin(&working);
        timing.thin_ms = elapsed_ms(stage_start);

        let stage_start = Instant::now();
        clean_skeleton(&mut skeleton, &self.params.clean);
        timing.clean_ms = elapsed_ms(stage_start);

        let stage_start = Instant::now();
        let raw = extract_minutiae(&skeleton);
        timing.extract_ms = elapsed_ms(stage_start);
        debug!(
            "MinutiaeDetector::process extracted {} raw minutiae from {}x{}",
            raw.len(),
            width,
            height
        );

        let stage_start = Instant::now();
        let minutiae = filter_minutiae(&raw, width, height, &self.params.filter);
        timing.filter_ms = elapsed_ms(stage_start);
        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "MinutiaeDetector::process kept {}/{} minutiae after filtering",
            minutiae.len(),
            raw.len()
        );

        (
            ExtractionResult {
                width,
                height,
                minutiae,
                timing,
            },
            skeleton,
        )
    }

    /// Update the pipeline parameters.
    pub fn set_params(&mut self, params: DetectorParams) {
        self.params = params;
    }

    /// Current pipeline parameters.
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
