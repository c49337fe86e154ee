use minutiae_matcher::image::io::load_grayscale_image;
use minutiae_matcher::matching::{score_one_to_many, MatchOptions};
use minutiae_matcher::{DetectorParams, MinutiaeDetector};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Acceptance threshold for the verification decision; score policy is the
/// tool's, not the library's.
const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.02;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let probe_path = PathBuf::from(args.next().ok_or_else(usage)?);
    let database_dir = PathBuf::from(args.next().ok_or_else(usage)?);
    let threshold = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|e| format!("Invalid threshold '{raw}': {e}"))?,
        None => DEFAULT_ACCEPTANCE_THRESHOLD,
    };

    let detector = MinutiaeDetector::new(DetectorParams::default());

    println!("Processing probe: {}", probe_path.display());
    let probe_gray = load_grayscale_image(&probe_path)?;
    let probe = detector.process(probe_gray.as_view());
    println!("Probe has {} minutiae", probe.minutiae.len());

    let candidate_paths = database_image_paths(&database_dir, &probe_path)?;
    if candidate_paths.is_empty() {
        return Err(format!(
            "No candidate images found in {}",
            database_dir.display()
        ));
    }

    println!(
        "Matching against {} candidates from {}",
        candidate_paths.len(),
        database_dir.display()
    );
    let mut candidates = Vec::with_capacity(candidate_paths.len());
    for path in &candidate_paths {
        let gray = load_grayscale_image(path)?;
        candidates.push(detector.process(gray.as_view()).minutiae);
    }

    let scores = score_one_to_many(&probe.minutiae, &candidates, &MatchOptions::default());
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    for &(idx, score) in ranked.iter().take(5) {
        println!("  {:.4}  {}", score, candidate_paths[idx].display());
    }

    let (best_idx, best_score) = ranked[0];
    println!("\nBest match: {}", candidate_paths[best_idx].display());
    println!("Score: {best_score:.4}");
    if best_score >= threshold {
        println!("Result: Match Accepted");
    } else {
        println!("Result: Match Rejected (score below threshold of {threshold})");
    }

    Ok(())
}

/// All .png/.bmp files in `dir`, excluding the probe itself, sorted for
/// reproducible ordering.
fn database_image_paths(dir: &Path, probe: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read entry in {}: {e}", dir.display()))?;
        let path = entry.path();
        let is_image = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("png") | Some("bmp")
        );
        if is_image && path != probe {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn usage() -> String {
    "Usage: identify <probe_image> <database_dir> [threshold]".to_string()
}
