use minutiae_matcher::image::io::{load_grayscale_image, save_skeleton_png, write_json_file};
use minutiae_matcher::{DetectorParams, ExtractionResult, MinutiaeDetector};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExtractToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: ExtractOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ExtractOutputConfig {
    #[serde(rename = "skeleton_image")]
    pub skeleton_image: PathBuf,
    #[serde(rename = "minutiae_json")]
    pub minutiae_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ExtractToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = MinutiaeDetector::new(config.detector);
    let (result, skeleton) = detector.process_with_skeleton(gray.as_view());

    let summary = ExtractionSummary {
        input: config.input.display().to_string(),
        minutiae_count: result.minutiae.len(),
        result,
    };

    save_skeleton_png(&skeleton, &config.output.skeleton_image)?;
    write_json_file(&config.output.minutiae_json, &summary)?;

    println!(
        "Saved skeleton to {}",
        config.output.skeleton_image.display()
    );
    println!(
        "Saved {} minutiae to {} (total {:.3} ms)",
        summary.minutiae_count,
        config.output.minutiae_json.display(),
        summary.result.timing.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: extract_minutiae <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionSummary {
    input: String,
    minutiae_count: usize,
    #[serde(flatten)]
    result: ExtractionResult,
}
