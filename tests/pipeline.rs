mod common;

use common::synthetic_print::ridge_stripes_u8;
use minutiae_matcher::image::ImageU8;
use minutiae_matcher::matching::match_score;
use minutiae_matcher::skeleton::thin;
use minutiae_matcher::{DetectorParams, MinutiaeDetector};

const WIDTH: usize = 128;
const HEIGHT: usize = 128;

fn interrupted_ridges() -> Vec<u8> {
    // 5-pixel ridges every 16 pixels, broken by a bright band so that
    // endings appear well inside the border margin.
    ridge_stripes_u8(WIDTH, HEIGHT, 16, 5, Some((55, 75)))
}

fn view(buffer: &[u8]) -> ImageU8<'_> {
    ImageU8 {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH,
        data: buffer,
    }
}

#[test]
fn interrupted_ridges_yield_interior_minutiae() {
    let buffer = interrupted_ridges();
    let detector = MinutiaeDetector::new(DetectorParams::default());
    let result = detector.process(view(&buffer));

    assert!(
        !result.minutiae.is_empty(),
        "ridge interruptions should produce surviving minutiae"
    );
    let margin = detector.params().filter.border_margin;
    for m in &result.minutiae {
        assert!(
            m.x >= margin && m.x <= WIDTH as i32 - margin,
            "minutia too close to a vertical edge: {m:?}"
        );
        assert!(
            m.y >= margin && m.y <= HEIGHT as i32 - margin,
            "minutia too close to a horizontal edge: {m:?}"
        );
    }
}

#[test]
fn pipeline_skeleton_is_a_thinning_fixed_point() {
    let buffer = interrupted_ridges();
    let detector = MinutiaeDetector::new(DetectorParams::default());
    let (_, skeleton) = detector.process_with_skeleton(view(&buffer));

    assert!(skeleton.data.iter().all(|&v| v <= 1), "skeleton not binary");
    assert_eq!(
        thin(&skeleton),
        skeleton,
        "re-thinning a skeleton must be a no-op"
    );
}

#[test]
fn extraction_is_deterministic() {
    let buffer = interrupted_ridges();
    let detector = MinutiaeDetector::new(DetectorParams::default());
    let a = detector.process(view(&buffer));
    let b = detector.process(view(&buffer));
    assert_eq!(a.minutiae, b.minutiae);
}

#[test]
fn identical_prints_match_perfectly() {
    let buffer = interrupted_ridges();
    let detector = MinutiaeDetector::new(DetectorParams::default());
    let result = detector.process(view(&buffer));
    assert!(!result.minutiae.is_empty());

    let score = match_score(&result.minutiae, &result.minutiae);
    assert!(
        (score - 1.0).abs() < 1e-12,
        "self-match should be perfect, got {score}"
    );
}

#[test]
fn different_patterns_score_within_bounds() {
    let detector = MinutiaeDetector::new(DetectorParams::default());

    let buffer_a = interrupted_ridges();
    let result_a = detector.process(view(&buffer_a));

    let buffer_b = ridge_stripes_u8(WIDTH, HEIGHT, 12, 4, Some((40, 60)));
    let result_b = detector.process(view(&buffer_b));

    let forward = match_score(&result_a.minutiae, &result_b.minutiae);
    let backward = match_score(&result_b.minutiae, &result_a.minutiae);
    for score in [forward, backward] {
        assert!(
            (0.0..=1.0).contains(&score),
            "score out of bounds: {score}"
        );
    }
}

#[test]
fn uniform_image_yields_no_minutiae() {
    let buffer = vec![128u8; WIDTH * HEIGHT];
    let detector = MinutiaeDetector::new(DetectorParams::default());
    let result = detector.process(view(&buffer));
    assert!(
        result.minutiae.is_empty(),
        "a featureless image must produce no minutiae"
    );
}
