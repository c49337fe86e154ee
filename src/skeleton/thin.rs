//! Two-subiteration topological thinning of a binary ridge grid.
//!
//! Classic Zhang–Suen scheme: each outer iteration runs sub-pass A and
//! sub-pass B, each of which marks candidate pixels against a frozen
//! snapshot of the grid and then deletes them simultaneously. The loop
//! terminates when neither sub-pass removes a pixel, so the output is a
//! fixed point: thinning an already-thin skeleton returns it unchanged.
//!
//! Border pixels have an all-zero neighborhood by convention and are never
//! removed. Input is non-destructively clamped to {0, 1}, so a {0, 255}
//! binary grid is accepted as well.
use super::neighbors::{neighbors8, zero_to_one_transitions};
use crate::image::GrayU8;

#[derive(Clone, Copy)]
enum SubPass {
    A,
    B,
}

impl SubPass {
    /// Directional deletion conditions on the clockwise neighborhood
    /// (N1 top, N3 right, N5 bottom, N7 left).
    #[inline]
    fn allows_deletion(self, n: &[u8; 8]) -> bool {
        match self {
            SubPass::A => n[0] * n[2] * n[4] == 0 && n[2] * n[4] * n[6] == 0,
            SubPass::B => n[0] * n[2] * n[6] == 0 && n[0] * n[4] * n[6] == 0,
        }
    }
}

/// Thin a binary ridge grid down to one-pixel-wide skeletons.
/// Non-destructive: returns a fresh grid with values in {0, 1}.
pub fn thin(binary: &GrayU8) -> GrayU8 {
    let mut grid = binary.clone();
    for px in &mut grid.data {
        *px = (*px > 0) as u8;
    }

    let mut marks = Vec::new();
    loop {
        let removed_a = run_sub_pass(&mut grid, SubPass::A, &mut marks);
        let removed_b = run_sub_pass(&mut grid, SubPass::B, &mut marks);
        if removed_a == 0 && removed_b == 0 {
            break;
        }
    }
    grid
}

/// Mark every deletable interior ridge pixel against the current snapshot,
/// then delete all marks at once. Returns the number of deletions.
fn run_sub_pass(grid: &mut GrayU8, pass: SubPass, marks: &mut Vec<usize>) -> usize {
    marks.clear();
    if grid.w < 3 || grid.h < 3 {
        return 0;
    }

    for y in 1..grid.h - 1 {
        for x in 1..grid.w - 1 {
            if grid.get(x, y) != 1 {
                continue;
            }
            let n = neighbors8(grid, x, y);
            let neighbor_count: u8 = n.iter().sum();
            if !(2..=6).contains(&neighbor_count) {
                continue;
            }
            if zero_to_one_transitions(&n) != 1 {
                continue;
            }
            if pass.allows_deletion(&n) {
                marks.push(grid.idx(x, y));
            }
        }
    }

    for &idx in marks.iter() {
        grid.data[idx] = 0;
    }
    marks.len()
}
