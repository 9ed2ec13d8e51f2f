//! Damage assessment
//!
//! Scores how damaged a matrix-code photograph looks without attempting a
//! decode: a coarse finder-pattern presence heuristic, a sampled contrast
//! probe, and a local-noise estimate are folded into one composite
//! severity. Runs independently of the recovery ladder; UI layers call it
//! after recovery fails to explain why.

use rayon::prelude::*;
use tracing::debug;

use crate::error::RecoveryError;
use crate::models::{DamageLevel, DamageReport, Image};

/// Length of each 1-D scan window
const FINDER_WINDOW: usize = 15;
/// Window start spacing along the scanned dimension
const FINDER_SCAN_STEP: usize = 10;
/// Line spacing across the scanned dimension
const FINDER_LINE_STEP: usize = 5;
/// Black/white cut for the transition count
const FINDER_THRESHOLD: u8 = 128;
/// Candidate windows required before patterns count as present
const FINDER_MIN_CANDIDATES: usize = 3;
/// Coordinates drawn by the contrast probe
const CONTRAST_SAMPLES: usize = 1000;
/// Luminance ranges below this flag low contrast
const LOW_CONTRAST_LIMIT: f32 = 50.0;
/// Noise levels above this flag high noise
const HIGH_NOISE_LIMIT: f64 = 0.3;

/// Source of pixel coordinates for the contrast probe.
///
/// The default sampler is deterministic; inject your own to change the
/// distribution or to scan exhaustively in tests.
pub trait PixelSampler {
    /// Next coordinate to probe, within `0..width` x `0..height`
    fn next_coord(&mut self, width: usize, height: usize) -> (usize, usize);
}

/// Default sampler: xorshift64* stream with a fixed seed, so repeated
/// assessments of the same image agree exactly.
pub struct XorShiftSampler {
    state: u64,
}

impl XorShiftSampler {
    /// Create a sampler from an explicit seed (zero is remapped, the
    /// xorshift state must be non-zero)
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl Default for XorShiftSampler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PixelSampler for XorShiftSampler {
    fn next_coord(&mut self, width: usize, height: usize) -> (usize, usize) {
        let x = (self.next() % width as u64) as usize;
        let y = (self.next() % height as u64) as usize;
        (x, y)
    }
}

/// Assess an image with the default deterministic sampler.
///
/// Returns [`RecoveryError::EmptyImage`] for zero-size input; never fails
/// otherwise.
pub fn assess(image: &Image) -> Result<DamageReport, RecoveryError> {
    assess_with_sampler(image, &mut XorShiftSampler::default())
}

/// Assess an image, drawing contrast-probe coordinates from `sampler`
pub fn assess_with_sampler(
    image: &Image,
    sampler: &mut dyn PixelSampler,
) -> Result<DamageReport, RecoveryError> {
    if image.is_empty() {
        return Err(RecoveryError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let candidates = count_finder_candidates(image);
    let finder_patterns_detected = candidates >= FINDER_MIN_CANDIDATES;

    let contrast = sampled_contrast(image, sampler);
    let low_contrast = contrast < LOW_CONTRAST_LIMIT;

    let noise = noise_level(image);
    let high_noise = noise > HIGH_NOISE_LIMIT;

    let mut score = 0.0f32;
    if !finder_patterns_detected {
        score += 0.4;
    }
    if low_contrast {
        score += 0.3;
    }
    if high_noise {
        score += 0.3;
    }
    let score = score.clamp(0.0, 1.0);

    debug!(
        candidates,
        contrast,
        noise,
        score,
        "damage assessment complete"
    );

    Ok(DamageReport {
        finder_patterns_detected,
        contrast,
        noise_level: noise as f32,
        damage_score: score,
        damage_level: DamageLevel::from_score(score),
    })
}

/// Count 1-D windows whose black/white transition count looks like a
/// finder-pattern cross-section.
///
/// Windows of [`FINDER_WINDOW`] pixels are thresholded at
/// [`FINDER_THRESHOLD`]; a window with 4 to 8 transitions approximates
/// the 1:1:3:1:1 finder ratio without geometric matching. Both scan
/// directions contribute.
fn count_finder_candidates(image: &Image) -> usize {
    let w = image.width();
    let h = image.height();
    let mut candidates = 0;

    // Horizontal windows: rows every FINDER_LINE_STEP, starts every
    // FINDER_SCAN_STEP along x
    for y in (0..h).step_by(FINDER_LINE_STEP) {
        let mut x0 = 0;
        while x0 + FINDER_WINDOW <= w {
            let transitions = window_transitions(image, x0, y, 1, 0);
            if (4..=8).contains(&transitions) {
                candidates += 1;
            }
            x0 += FINDER_SCAN_STEP;
        }
    }

    // Vertical windows: columns every FINDER_LINE_STEP, starts every
    // FINDER_SCAN_STEP along y
    for x in (0..w).step_by(FINDER_LINE_STEP) {
        let mut y0 = 0;
        while y0 + FINDER_WINDOW <= h {
            let transitions = window_transitions(image, x, y0, 0, 1);
            if (4..=8).contains(&transitions) {
                candidates += 1;
            }
            y0 += FINDER_SCAN_STEP;
        }
    }

    candidates
}

fn window_transitions(image: &Image, x0: usize, y0: usize, dx: usize, dy: usize) -> usize {
    let mut transitions = 0;
    let mut previous = image.luma(x0, y0) < FINDER_THRESHOLD;
    for step in 1..FINDER_WINDOW {
        let current = image.luma(x0 + step * dx, y0 + step * dy) < FINDER_THRESHOLD;
        if current != previous {
            transitions += 1;
            previous = current;
        }
    }
    transitions
}

/// Luminance range over [`CONTRAST_SAMPLES`] probed coordinates
fn sampled_contrast(image: &Image, sampler: &mut dyn PixelSampler) -> f32 {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for _ in 0..CONTRAST_SAMPLES {
        let (x, y) = sampler.next_coord(image.width(), image.height());
        let luma = image.luma(x, y);
        min = min.min(luma);
        max = max.max(luma);
    }
    (max - min) as f32
}

/// Mean absolute deviation of interior pixels from their 4-neighborhood
/// mean, normalized to [0, 1]. Images with no interior score 0.
fn noise_level(image: &Image) -> f64 {
    let w = image.width();
    let h = image.height();
    if w < 3 || h < 3 {
        return 0.0;
    }

    let total: f64 = (1..h - 1)
        .into_par_iter()
        .map(|y| {
            let mut row_sum = 0.0f64;
            for x in 1..w - 1 {
                let center = image.luma(x, y) as f64;
                let neighbors = image.luma(x, y - 1) as f64
                    + image.luma(x, y + 1) as f64
                    + image.luma(x - 1, y) as f64
                    + image.luma(x + 1, y) as f64;
                row_sum += (center - neighbors / 4.0).abs();
            }
            row_sum
        })
        .sum();

    let interior = ((w - 2) * (h - 2)) as f64;
    total / interior / 255.0
}
