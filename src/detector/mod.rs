//! Minutiae detector orchestrating the five-stage extraction pipeline.
//!
//! Overview
//! - Copies the borrowed grayscale view into an owned working buffer.
//! - Binarizes with block-adaptive thresholding (ridge = 1, background = 0).
//! - Thins the binary grid to one-pixel-wide ridge skeletons.
//! - Cleans short skeleton fragments left by thinning noise.
//! - Extracts ridge endings and bifurcations via crossing numbers, then
//!   filters border-adjacent and mutually-close minutiae.
//!
//! Each stage is a pure function over its own grid or set; the detector
//! only sequences them and records per-stage latencies. Matching the
//! resulting minutiae sets is a separate concern (see [`crate::matching`]).
//!
//! Modules
//! - [`params`] – configuration types used by the detector and demo tools.
//! - `pipeline` – the [`MinutiaeDetector`] implementation.
//! - `report` – serializable extraction results and stage timings.

pub mod params;
mod pipeline;
mod report;

pub use params::DetectorParams;
pub use pipeline::MinutiaeDetector;
pub use report::{ExtractionResult, StageTimings};
