//! Fixed clockwise 8-neighborhood encoding shared by thinning and
//! minutiae extraction.
//!
//! Neighbors N1..N8 of a pixel are (top, top-right, right, bottom-right,
//! bottom, bottom-left, left, top-left). Border pixels are defined to have
//! an all-zero neighborhood.
use crate::image::GrayU8;

/// Clockwise (dx, dy) offsets starting from the top neighbor.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),  // N1 top
    (1, -1),  // N2 top-right
    (1, 0),   // N3 right
    (1, 1),   // N4 bottom-right
    (0, 1),   // N5 bottom
    (-1, 1),  // N6 bottom-left
    (-1, 0),  // N7 left
    (-1, -1), // N8 top-left
];

/// Gather the 8 neighbors of (x, y) in the fixed clockwise order,
/// normalized to {0, 1}. Pixels on the outermost ring report all zeros.
#[inline]
pub fn neighbors8(grid: &GrayU8, x: usize, y: usize) -> [u8; 8] {
    if x == 0 || y == 0 || x + 1 >= grid.w || y + 1 >= grid.h {
        return [0; 8];
    }
    let mut out = [0u8; 8];
    for (slot, &(dx, dy)) in out.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
        let nx = (x as i32 + dx) as usize;
        let ny = (y as i32 + dy) as usize;
        *slot = (grid.get(nx, ny) > 0) as u8;
    }
    out
}

/// Count of 0→1 transitions walking the neighborhood circularly.
#[inline]
pub fn zero_to_one_transitions(neighbors: &[u8; 8]) -> u32 {
    let mut transitions = 0;
    for i in 0..8 {
        if neighbors[i] == 0 && neighbors[(i + 1) % 8] == 1 {
            transitions += 1;
        }
    }
    transitions
}

/// Crossing number: half the sum of absolute differences between
/// consecutive neighbors in the cyclic order. Classifies local ridge
/// topology (1 = ending, 2 = continuation, 3 = bifurcation).
#[inline]
pub fn crossing_number(neighbors: &[u8; 8]) -> u32 {
    let mut sum = 0u32;
    for i in 0..8 {
        sum += neighbors[i].abs_diff(neighbors[(i + 1) % 8]) as u32;
    }
    sum / 2
}
