use rayon::prelude::*;

use crate::models::Image;

/// Sharpen kernel: center-heavy Laplacian, corners zero
const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Median filter over a `window x window` neighborhood, per channel.
///
/// Interior pixels are replaced by their neighborhood median; the border
/// ring of `window / 2` pixels is copied through untouched (no padding).
/// Even window sizes are widened to the next odd value. Rows are filtered
/// in parallel.
pub fn denoise_median(img: &Image, window: usize) -> Image {
    let window = window.max(1) | 1;
    let radius = window / 2;
    let w = img.width();
    let h = img.height();
    let ch = img.channels();

    let mut out = img.clone();
    if radius == 0 || w <= 2 * radius || h <= 2 * radius {
        return out;
    }

    let src = img.as_raw();
    let stride = w * ch;
    out.as_raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .filter(|(y, _)| *y >= radius && *y < h - radius)
        .for_each(|(y, row)| {
            let mut neighborhood = Vec::with_capacity(window * window);
            for x in radius..w - radius {
                for c in 0..ch {
                    neighborhood.clear();
                    for ny in y - radius..=y + radius {
                        for nx in x - radius..=x + radius {
                            neighborhood.push(src[(ny * w + nx) * ch + c]);
                        }
                    }
                    neighborhood.sort_unstable();
                    row[x * ch + c] = neighborhood[neighborhood.len() / 2];
                }
            }
        });
    out
}

/// Convolve with the fixed 3x3 sharpen kernel, per channel, clamped to
/// 0..=255.
///
/// Edge policy is extend/no-op: the one-pixel border passes through
/// unmodified instead of being zero-padded.
pub fn sharpen(img: &Image) -> Image {
    let w = img.width();
    let h = img.height();
    let ch = img.channels();

    let mut out = img.clone();
    if w < 3 || h < 3 {
        return out;
    }

    let src = img.as_raw();
    let dst = out.as_raw_mut();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            for c in 0..ch {
                let mut acc = 0i32;
                for (ky, kernel_row) in SHARPEN_KERNEL.iter().enumerate() {
                    for (kx, &k) in kernel_row.iter().enumerate() {
                        if k == 0 {
                            continue;
                        }
                        let sy = y + ky - 1;
                        let sx = x + kx - 1;
                        acc += k * src[(sy * w + sx) * ch + c] as i32;
                    }
                }
                dst[(y * w + x) * ch + c] = acc.clamp(0, 255) as u8;
            }
        }
    }
    out
}
