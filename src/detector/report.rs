//! Serializable extraction results and per-stage timings.
use crate::minutiae::Minutia;
use serde::Serialize;

/// Wall-clock latency of each pipeline stage, in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    pub binarize_ms: f64,
    pub thin_ms: f64,
    pub clean_ms: f64,
    pub extract_ms: f64,
    pub filter_ms: f64,
    pub total_ms: f64,
}

/// Output of one extraction run: the filtered minutiae in raster detection
/// order plus the source dimensions and stage timings.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub width: usize,
    pub height: usize,
    pub minutiae: Vec<Minutia>,
    pub timing: StageTimings,
}
