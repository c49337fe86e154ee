//! Minutiae extraction from a thinned ridge skeleton.
//!
//! Every interior ridge pixel is classified by its crossing number over the
//! fixed clockwise 8-neighborhood: 1 → ridge ending, 3 → bifurcation, any
//! other value is ordinary continuation or noise and is ignored.
//!
//! Orientation is estimated by tracing the ridge away from the minutia for
//! up to [`TRACE_STEPS`] pixels and taking `atan2(dy, dx)` from the minutia
//! to the trace endpoint. A bifurcation's orientation points away from the
//! fork: the two branch angles closest to each other form the fork legs, and
//! the third branch (the stem), rotated by π, gives the minutia direction.
use super::{Minutia, MinutiaKind};
use crate::angle::{normalize_signed_pi, wrapped_angle_diff};
use crate::image::GrayU8;
use crate::skeleton::{crossing_number, neighbors8};
use std::f64::consts::PI;

/// Maximum number of ridge pixels to walk when estimating orientation.
pub const TRACE_STEPS: usize = 7;

/// Scan the skeleton for ridge endings and bifurcations, in raster order.
pub fn extract_minutiae(skeleton: &GrayU8) -> Vec<Minutia> {
    let mut minutiae = Vec::new();
    if skeleton.w < 3 || skeleton.h < 3 {
        return minutiae;
    }

    for y in 1..skeleton.h - 1 {
        for x in 1..skeleton.w - 1 {
            if skeleton.get(x, y) == 0 {
                continue;
            }
            let n = neighbors8(skeleton, x, y);
            let center = (x as i32, y as i32);
            match crossing_number(&n) {
                1 => {
                    if let Some(start) = ridge_neighbors(skeleton, center).into_iter().next() {
                        let angle = trace_ridge_angle(skeleton, center, start);
                        minutiae.push(Minutia::new(center.0, center.1, MinutiaKind::Ending, angle));
                    }
                }
                3 => {
                    let branches = ridge_neighbors(skeleton, center);
                    // A crossing number of 3 with a branch run wider than one
                    // pixel is ambiguous; skip unless exactly three starts.
                    if branches.len() == 3 {
                        let angles: Vec<f64> = branches
                            .into_iter()
                            .map(|start| trace_ridge_angle(skeleton, center, start))
                            .collect();
                        let angle = bifurcation_angle(&angles);
                        minutiae.push(Minutia::new(
                            center.0,
                            center.1,
                            MinutiaKind::Bifurcation,
                            angle,
                        ));
                    }
                }
                _ => {}
            }
        }
    }
    minutiae
}

/// Ridge neighbors of `center` in row-major (dy, dx) scan order.
fn ridge_neighbors(skeleton: &GrayU8, center: (i32, i32)) -> Vec<(i32, i32)> {
    let mut found = Vec::with_capacity(3);
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dy == 0 && dx == 0 {
                continue;
            }
            let pos = (center.0 + dx, center.1 + dy);
            if is_ridge(skeleton, pos) {
                found.push(pos);
            }
        }
    }
    found
}

/// Walk the ridge away from `origin`, starting at `start`, for up to
/// [`TRACE_STEPS`] pixels, and return the angle from `origin` to the final
/// walk position.
fn trace_ridge_angle(skeleton: &GrayU8, origin: (i32, i32), start: (i32, i32)) -> f64 {
    let mut prev = origin;
    let mut current = start;
    for _ in 0..TRACE_STEPS {
        match next_trace_step(skeleton, current, prev) {
            Some(next) => {
                prev = current;
                current = next;
            }
            None => break, // path ends
        }
    }
    ((current.1 - origin.1) as f64).atan2((current.0 - origin.0) as f64)
}

/// First ridge pixel around `current` (row-major scan) that is not the
/// immediately preceding walk position.
fn next_trace_step(
    skeleton: &GrayU8,
    current: (i32, i32),
    prev: (i32, i32),
) -> Option<(i32, i32)> {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dy == 0 && dx == 0 {
                continue;
            }
            let next = (current.0 + dx, current.1 + dy);
            if next != prev && is_ridge(skeleton, next) {
                return Some(next);
            }
        }
    }
    None
}

#[inline]
fn is_ridge(skeleton: &GrayU8, pos: (i32, i32)) -> bool {
    pos.0 >= 0
        && pos.1 >= 0
        && (pos.0 as usize) < skeleton.w
        && (pos.1 as usize) < skeleton.h
        && skeleton.get(pos.0 as usize, pos.1 as usize) > 0
}

/// Orientation of a bifurcation from its three branch angles: the pair with
/// the smallest wrapped difference is the fork, the remaining branch is the
/// stem, and the minutia points opposite the stem.
fn bifurcation_angle(angles: &[f64]) -> f64 {
    let d1 = wrapped_angle_diff(angles[0], angles[1]);
    let d2 = wrapped_angle_diff(angles[1], angles[2]);
    let d3 = wrapped_angle_diff(angles[2], angles[0]);

    let stem = if d1 <= d2 && d1 <= d3 {
        angles[2]
    } else if d2 <= d1 && d2 <= d3 {
        angles[0]
    } else {
        angles[1]
    };
    normalize_signed_pi(stem + PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skeleton(w: usize, h: usize, pixels: &[(usize, usize)]) -> GrayU8 {
        let mut grid = GrayU8::new(w, h);
        for &(x, y) in pixels {
            grid.set(x, y, 1);
        }
        grid
    }

    fn horizontal_line(w: usize, h: usize, y: usize, x0: usize, x1: usize) -> GrayU8 {
        let pixels: Vec<(usize, usize)> = (x0..=x1).map(|x| (x, y)).collect();
        skeleton(w, h, &pixels)
    }

    #[test]
    fn line_tips_are_endings_with_opposite_angles() {
        let grid = horizontal_line(14, 7, 3, 1, 11);
        let minutiae = extract_minutiae(&grid);

        let left = minutiae
            .iter()
            .find(|m| (m.x, m.y) == (1, 3))
            .expect("left tip should be an ending");
        assert_eq!(left.kind, MinutiaKind::Ending);
        assert!(left.angle.abs() < 1e-9, "left tip points right: {}", left.angle);

        let right = minutiae
            .iter()
            .find(|m| (m.x, m.y) == (11, 3))
            .expect("right tip should be an ending");
        assert_eq!(right.kind, MinutiaKind::Ending);
        assert!(
            (right.angle.abs() - PI).abs() < 1e-9,
            "right tip points left: {}",
            right.angle
        );
    }

    #[test]
    fn ridge_continuation_is_not_a_minutia() {
        let grid = horizontal_line(9, 5, 2, 1, 7);
        let minutiae = extract_minutiae(&grid);
        assert!(
            minutiae.iter().all(|m| (m.x, m.y) != (4, 2)),
            "interior line pixel must not be reported"
        );
    }

    #[test]
    fn t_junction_is_a_bifurcation() {
        // Arms left/right along y=3 plus a stem going down from (3,3).
        let mut pixels: Vec<(usize, usize)> = (1..=5).map(|x| (x, 3)).collect();
        pixels.extend((4..=6).map(|y| (3, y)));
        let grid = skeleton(8, 8, &pixels);

        let minutiae = extract_minutiae(&grid);
        let fork = minutiae
            .iter()
            .find(|m| (m.x, m.y) == (3, 3))
            .expect("junction should be detected");
        assert_eq!(fork.kind, MinutiaKind::Bifurcation);
        assert!(fork.angle > -PI && fork.angle <= PI);
    }

    #[test]
    fn no_minutiae_on_the_border_ring() {
        let mut grid = GrayU8::new(10, 10);
        grid.data.fill(1);
        let minutiae = extract_minutiae(&grid);
        for m in &minutiae {
            assert!(m.x > 0 && m.x < 9, "x on border: {m:?}");
            assert!(m.y > 0 && m.y < 9, "y on border: {m:?}");
        }
    }

    #[test]
    fn degenerate_grid_yields_nothing() {
        let grid = GrayU8::from_vec(2, 3, vec![1; 6]);
        assert!(extract_minutiae(&grid).is_empty());
    }

    #[test]
    fn trace_stops_at_path_end() {
        // 3-pixel ridge: the trace from the left tip ends after two steps.
        let grid = horizontal_line(20, 5, 2, 8, 10);
        let minutiae = extract_minutiae(&grid);
        let left = minutiae
            .iter()
            .find(|m| (m.x, m.y) == (8, 2))
            .expect("tip should be an ending");
        assert!(left.angle.abs() < 1e-9);
    }

    #[test]
    fn raster_scan_order_is_stable() {
        let grid = horizontal_line(14, 7, 3, 1, 11);
        let a = extract_minutiae(&grid);
        let b = extract_minutiae(&grid);
        assert_eq!(a, b);
        // Row-major detection order: the left tip precedes the right tip.
        assert!(a[0].x < a[1].x);
    }
}
