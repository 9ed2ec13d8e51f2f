//! Binarization policies
//!
//! Reference implementations of the two binarizers the pipeline can
//! request from a decode backend: a local adaptive threshold (integral
//! image mean) and a global histogram threshold (Otsu). Both map an
//! [`Image`] to a [`BitMatrix`] where `true` = black.

use crate::models::{BitMatrix, Image};

/// Adaptive local-threshold binarization.
///
/// Each pixel is compared against the mean luminance of the surrounding
/// `(2 * block_radius + 1)^2` block (clamped at the image edges) minus the
/// constant `c`. Pixels darker than the local threshold become black.
/// Robust against uneven illumination; a typical radius is 15 with `c` 10.
pub fn adaptive_binarize(img: &Image, block_radius: usize, c: i32) -> BitMatrix {
    let w = img.width();
    let h = img.height();
    let mut binary = BitMatrix::new(w, h);
    if img.is_empty() {
        return binary;
    }

    let integral = integral_image(img);
    let stride = w + 1;

    for y in 0..h {
        for x in 0..w {
            let x1 = x.saturating_sub(block_radius);
            let y1 = y.saturating_sub(block_radius);
            let x2 = (x + block_radius + 1).min(w);
            let y2 = (y + block_radius + 1).min(h);
            let area = ((x2 - x1) * (y2 - y1)) as i64;

            let sum = integral[y2 * stride + x2] as i64 - integral[y1 * stride + x2] as i64
                - integral[y2 * stride + x1] as i64
                + integral[y1 * stride + x1] as i64;
            let threshold = (sum / area) as i32 - c;
            binary.set(x, y, (img.luma(x, y) as i32) < threshold);
        }
    }
    binary
}

/// Summed-area table with a zero-padded border; dimensions (w+1) x (h+1)
fn integral_image(img: &Image) -> Vec<u64> {
    let w = img.width();
    let h = img.height();
    let stride = w + 1;
    let mut table = vec![0u64; stride * (h + 1)];

    for y in 0..h {
        let mut row_sum = 0u64;
        for x in 0..w {
            row_sum += img.luma(x, y) as u64;
            table[(y + 1) * stride + (x + 1)] = row_sum + table[y * stride + (x + 1)];
        }
    }
    table
}

/// Global-histogram binarization using Otsu's threshold.
///
/// Picks the single threshold that maximizes between-class variance over
/// the luminance histogram, then applies it to the whole image.
pub fn otsu_binarize(img: &Image) -> BitMatrix {
    let threshold = otsu_threshold(img);
    threshold_binarize(img, threshold)
}

/// Compute Otsu's optimal global threshold for an image
fn otsu_threshold(img: &Image) -> u8 {
    let w = img.width();
    let h = img.height();

    let mut histogram = [0u64; 256];
    for y in 0..h {
        for x in 0..w {
            histogram[img.luma(x, y) as usize] += 1;
        }
    }

    let total = (w * h) as f64;
    if total == 0.0 {
        return 128;
    }

    let mut sum_total = 0.0;
    for (value, &count) in histogram.iter().enumerate() {
        sum_total += value as f64 * count as f64;
    }

    let mut sum_background = 0.0;
    let mut weight_background = 0u64;
    let mut max_variance = 0.0;
    let mut best_threshold = 128u8;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total as u64 - weight_background;
        if weight_foreground == 0 {
            break;
        }

        sum_background += t as f64 * count as f64;
        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_total - sum_background) / weight_foreground as f64;

        let variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);
        if variance > max_variance {
            max_variance = variance;
            best_threshold = t as u8;
        }
    }

    best_threshold
}

/// Fixed global threshold: pixels with luminance below `threshold` become
/// black
pub fn threshold_binarize(img: &Image, threshold: u8) -> BitMatrix {
    let w = img.width();
    let h = img.height();
    let mut binary = BitMatrix::new(w, h);

    for y in 0..h {
        for x in 0..w {
            binary.set(x, y, img.luma(x, y) < threshold);
        }
    }
    binary
}
