//! Block-adaptive binarization of a grayscale fingerprint image.
//!
//! Partitions the image into fixed-size square blocks (boundary blocks are
//! clipped to the remaining extent, never zero-padded), computes the mean
//! intensity per block, and marks a pixel as ridge (1) when its intensity
//! falls strictly below the block mean, background (0) otherwise.
//!
//! Blocks are read-then-write and mutually independent, so the pass is
//! evaluated per horizontal block band on a Rayon pool when the `parallel`
//! feature is enabled.
use crate::image::GrayU8;
use serde::Deserialize;

/// Options for the block-adaptive binarizer.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct BinarizeOptions {
    /// Side length of the square averaging blocks, in pixels.
    pub block_size: usize,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self { block_size: 16 }
    }
}

/// Binarize `img` in place to ridge(1)/background(0).
pub fn binarize_in_place(img: &mut GrayU8, opts: &BinarizeOptions) {
    let block = opts.block_size.max(1);
    let w = img.w;
    if w == 0 || img.h == 0 {
        return;
    }
    debug_assert_eq!(img.stride, w, "owned buffers are tightly packed");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        img.data
            .par_chunks_mut(block * w)
            .for_each(|band| binarize_band(band, w, block));
        return;
    }

    #[cfg(not(feature = "parallel"))]
    for band in img.data.chunks_mut(block * w) {
        binarize_band(band, w, block);
    }
}

/// Threshold one horizontal band of up to `block` rows, block by block.
fn binarize_band(band: &mut [u8], w: usize, block: usize) {
    let rows = band.len() / w;
    let mut x0 = 0;
    while x0 < w {
        let bw = block.min(w - x0);

        let mut sum = 0u64;
        for y in 0..rows {
            let row = &band[y * w + x0..y * w + x0 + bw];
            sum += row.iter().map(|&v| v as u64).sum::<u64>();
        }
        let mean = sum as f64 / (rows * bw) as f64;

        for y in 0..rows {
            let row = &mut band[y * w + x0..y * w + x0 + bw];
            for px in row.iter_mut() {
                *px = if (*px as f64) < mean { 1 } else { 0 };
            }
        }

        x0 += bw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_binary() {
        let mut img = GrayU8::from_vec(8, 8, (0..64).map(|v| v as u8 * 3).collect());
        binarize_in_place(&mut img, &BinarizeOptions { block_size: 4 });
        assert!(img.data.iter().all(|&v| v <= 1), "non-binary output");
    }

    #[test]
    fn dark_pixels_become_ridge() {
        // Left half dark, right half bright inside a single 16×16 block.
        let mut img = GrayU8::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                img.set(x, y, if x < 8 { 10 } else { 200 });
            }
        }
        binarize_in_place(&mut img, &BinarizeOptions::default());
        assert_eq!(img.get(2, 5), 1, "dark pixel should be ridge");
        assert_eq!(img.get(12, 5), 0, "bright pixel should be background");
    }

    #[test]
    fn constant_block_is_all_background() {
        let mut img = GrayU8::from_vec(16, 16, vec![77; 256]);
        binarize_in_place(&mut img, &BinarizeOptions::default());
        assert!(img.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn boundary_blocks_use_clipped_extent() {
        // 20×4 image: the rightmost 4-wide block must threshold against its
        // own mean, not the neighbor's.
        let mut img = GrayU8::new(20, 4);
        for y in 0..4 {
            for x in 0..20 {
                let v = if x < 16 {
                    128
                } else if x < 18 {
                    10
                } else {
                    250
                };
                img.set(x, y, v);
            }
        }
        binarize_in_place(&mut img, &BinarizeOptions { block_size: 16 });
        assert_eq!(img.get(16, 1), 1);
        assert_eq!(img.get(19, 1), 0);
        // Constant 16-wide block is uniformly background.
        assert!(
            (0..16).all(|x| img.get(x, 1) == 0),
            "constant block should binarize to background"
        );
    }
}
