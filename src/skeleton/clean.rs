//! Removal of short skeleton fragments left behind by thinning noise.
//!
//! Connected components of ridge pixels (8-connectivity) below a minimum
//! pixel count are erased in place. Spurs attached to a long ridge are part
//! of that ridge's component and therefore survive; only isolated debris is
//! dropped.
use super::neighbors::NEIGHBOR_OFFSETS;
use crate::image::GrayU8;
use serde::Deserialize;

/// Options for skeleton fragment cleanup.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Components with fewer ridge pixels than this are erased. A fragment
    /// shorter than the 7-step orientation trace cannot produce a stable
    /// minutia angle, so 8 is the conservative floor.
    pub min_fragment_px: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { min_fragment_px: 8 }
    }
}

/// Erase skeleton components smaller than `opts.min_fragment_px`, in place.
pub fn clean_skeleton(skeleton: &mut GrayU8, opts: &CleanOptions) {
    let w = skeleton.w;
    let h = skeleton.h;
    if w == 0 || h == 0 || opts.min_fragment_px <= 1 {
        return;
    }

    let mut visited = vec![0u8; w * h];
    let mut stack = Vec::with_capacity(64);
    let mut component = Vec::with_capacity(64);

    for seed in 0..w * h {
        if visited[seed] != 0 || skeleton.data[seed] == 0 {
            continue;
        }

        component.clear();
        visited[seed] = 1;
        stack.push(seed);
        while let Some(idx) = stack.pop() {
            component.push(idx);
            let x = idx % w;
            let y = idx / w;
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if visited[nidx] != 0 || skeleton.data[nidx] == 0 {
                    continue;
                }
                visited[nidx] = 1;
                stack.push(nidx);
            }
        }

        if component.len() < opts.min_fragment_px {
            for &idx in &component {
                skeleton.data[idx] = 0;
            }
        }
    }
}
