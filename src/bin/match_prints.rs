use minutiae_matcher::image::io::load_grayscale_image;
use minutiae_matcher::{match_score, DetectorParams, MinutiaeDetector};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let path_a = args.next().ok_or_else(usage)?;
    let path_b = args.next().ok_or_else(usage)?;

    let detector = MinutiaeDetector::new(DetectorParams::default());

    let gray_a = load_grayscale_image(Path::new(&path_a))?;
    let result_a = detector.process(gray_a.as_view());
    println!(
        "{path_a}: {} minutiae ({:.3} ms)",
        result_a.minutiae.len(),
        result_a.timing.total_ms
    );

    let gray_b = load_grayscale_image(Path::new(&path_b))?;
    let result_b = detector.process(gray_b.as_view());
    println!(
        "{path_b}: {} minutiae ({:.3} ms)",
        result_b.minutiae.len(),
        result_b.timing.total_ms
    );

    let score = match_score(&result_a.minutiae, &result_b.minutiae);
    println!("similarity: {score:.4}");

    Ok(())
}

fn usage() -> String {
    "Usage: match_prints <image_a> <image_b>".to_string()
}
