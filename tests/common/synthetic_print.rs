/// Generates a grayscale pattern of dark vertical ridges on a bright
/// background, optionally interrupted by a horizontal bright band so that
/// ridge endings appear in the image interior.
pub fn ridge_stripes_u8(
    width: usize,
    height: usize,
    period: usize,
    ridge_width: usize,
    gap_rows: Option<(usize, usize)>,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(
        ridge_width > 0 && ridge_width < period,
        "ridge width must be positive and below the period"
    );

    let mut img = vec![220u8; width * height];
    for y in 0..height {
        if let Some((top, bottom)) = gap_rows {
            if y >= top && y < bottom {
                continue;
            }
        }
        for x in 0..width {
            if x % period < ridge_width {
                img[y * width + x] = 30;
            }
        }
    }
    img
}
