//! Recovery pipeline controller
//!
//! A linear scan over a fixed, ordered table of recovery strategies.
//! Each strategy transforms the input (or leaves it alone), hands the
//! result to the decode backend, and the first success wins. Cheaper and
//! more likely strategies sit earlier in the table, and the succeeding
//! tier caps the reported confidence. The table is plain data plus one
//! runner; ordering is explicit and testable.

use std::time::Instant;

use tracing::debug;

use crate::backend::{BinarizerKind, DecodeBackend, DecodeOutcome};
use crate::error::RecoveryError;
use crate::models::{Image, RecoveryResult};
use crate::transforms::{denoise_median, enhance_contrast, rotate, scale, sharpen, shear_x};

/// Rotation sweep candidates, in attempt order: cardinal flips first,
/// diagonals after
const ROTATION_ANGLES: [f32; 7] = [90.0, 180.0, 270.0, 45.0, 135.0, 225.0, 315.0];
/// Scale sweep candidates, in attempt order
const SCALE_FACTORS: [f32; 7] = [0.5, 1.5, 2.0, 0.75, 1.25, 0.25, 3.0];
/// Shear sweep candidates, in attempt order
const SKEW_ANGLES: [f32; 6] = [-15.0, -10.0, -5.0, 5.0, 10.0, 15.0];
/// Contrast factor used by the enhancement tiers
const CONTRAST_BOOST: f32 = 2.0;
/// Median window used by the denoise tiers
const MEDIAN_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyKind {
    Direct,
    Enhance,
    AlternateBinarizer,
    RotationSweep,
    ScaleSweep,
    SkewSweep,
    DenoiseSharpen,
}

/// One tier of the fallback ladder: a named recovery step with the
/// confidence ceiling reported when it succeeds
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    label: &'static str,
    confidence: f32,
    kind: StrategyKind,
}

impl Strategy {
    /// Label reported as [`RecoveryResult::method`] on success
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Confidence ceiling reported on success
    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// The ladder. Order is a correctness invariant: index 0 runs first.
const STRATEGY_TABLE: [Strategy; 7] = [
    Strategy {
        label: "direct",
        confidence: 1.0,
        kind: StrategyKind::Direct,
    },
    Strategy {
        label: "enhanced",
        confidence: 0.9,
        kind: StrategyKind::Enhance,
    },
    Strategy {
        label: "binarizer",
        confidence: 0.8,
        kind: StrategyKind::AlternateBinarizer,
    },
    Strategy {
        label: "rotation",
        confidence: 0.7,
        kind: StrategyKind::RotationSweep,
    },
    Strategy {
        label: "scale",
        confidence: 0.6,
        kind: StrategyKind::ScaleSweep,
    },
    Strategy {
        label: "skew",
        confidence: 0.5,
        kind: StrategyKind::SkewSweep,
    },
    Strategy {
        label: "denoise",
        confidence: 0.4,
        kind: StrategyKind::DenoiseSharpen,
    },
];

/// Ordered fallback ladder around an injected decode backend.
///
/// Holds no mutable state across calls: the strategy table is immutable
/// and the backend is required to be re-entrant, so a pipeline can be
/// shared between threads freely.
pub struct RecoveryPipeline<B> {
    backend: B,
}

impl<B: DecodeBackend> RecoveryPipeline<B> {
    /// Create a pipeline around a decode backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The ordered strategy table this pipeline runs
    pub fn strategies(&self) -> &'static [Strategy] {
        &STRATEGY_TABLE
    }

    /// Run the ladder until a strategy decodes the image or the table is
    /// exhausted.
    ///
    /// A zero-size image is the caller's error and returns
    /// [`RecoveryError::EmptyImage`]. Everything that goes wrong inside a
    /// strategy (a decode miss of any flavor, a degenerate transform
    /// output) is absorbed and the ladder moves on; a valid image never
    /// produces an error, only a result with `content: None` once all
    /// tiers are spent.
    ///
    /// `attempts_used` counts strategy tiers, not sweep candidates: a
    /// rotation tier that tries seven angles still counts as one attempt.
    pub fn recover(&self, image: &Image) -> Result<RecoveryResult, RecoveryError> {
        if image.is_empty() {
            return Err(RecoveryError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }

        let start = Instant::now();
        let mut attempts = 0u32;
        for strategy in &STRATEGY_TABLE {
            attempts += 1;
            debug!(strategy = strategy.label, "running strategy");
            if let Some(content) = self.run_strategy(strategy.kind, image) {
                let elapsed = start.elapsed().as_millis() as u64;
                debug!(
                    strategy = strategy.label,
                    attempts, "recovery succeeded"
                );
                return Ok(RecoveryResult::success(
                    content,
                    strategy.confidence,
                    strategy.label,
                    attempts,
                    elapsed,
                ));
            }
        }

        debug!(attempts, "all strategies exhausted");
        Ok(RecoveryResult::exhausted(
            attempts,
            start.elapsed().as_millis() as u64,
        ))
    }

    fn run_strategy(&self, kind: StrategyKind, image: &Image) -> Option<String> {
        match kind {
            StrategyKind::Direct => self.try_decode(image, BinarizerKind::Adaptive),
            StrategyKind::Enhance => {
                // Rebinding drops the intermediate image early; at most
                // two buffers are alive at any point
                let mut work = enhance_contrast(image, CONTRAST_BOOST);
                work = denoise_median(&work, MEDIAN_WINDOW);
                self.try_decode(&work, BinarizerKind::Adaptive)
            }
            StrategyKind::AlternateBinarizer => {
                // The enhanced image is re-derived here: tiers share no
                // state with each other
                let work = enhance_contrast(image, CONTRAST_BOOST);
                self.try_decode(&work, BinarizerKind::Adaptive)
                    .or_else(|| self.try_decode(&work, BinarizerKind::GlobalHistogram))
            }
            StrategyKind::RotationSweep => ROTATION_ANGLES
                .iter()
                .find_map(|&angle| self.try_decode_candidate(rotate(image, angle))),
            StrategyKind::ScaleSweep => SCALE_FACTORS
                .iter()
                .find_map(|&factor| self.try_decode_candidate(scale(image, factor))),
            StrategyKind::SkewSweep => SKEW_ANGLES
                .iter()
                .find_map(|&angle| self.try_decode_candidate(shear_x(image, angle))),
            StrategyKind::DenoiseSharpen => {
                let mut work = denoise_median(image, MEDIAN_WINDOW);
                work = sharpen(&work);
                self.try_decode(&work, BinarizerKind::Adaptive)
            }
        }
    }

    /// Decode one sweep candidate; a degenerate zero-size transform
    /// output fails the candidate instead of reaching the backend
    fn try_decode_candidate(&self, candidate: Image) -> Option<String> {
        if candidate.is_empty() {
            debug!("skipping zero-size transform output");
            return None;
        }
        self.try_decode(&candidate, BinarizerKind::Adaptive)
    }

    fn try_decode(&self, image: &Image, binarizer: BinarizerKind) -> Option<String> {
        match self.backend.decode(image, binarizer) {
            DecodeOutcome::Success(content) => Some(content),
            outcome => {
                debug!(?outcome, ?binarizer, "decode attempt failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverDecodes;

    impl DecodeBackend for NeverDecodes {
        fn decode(&self, _image: &Image, _binarizer: BinarizerKind) -> DecodeOutcome {
            DecodeOutcome::NotFound
        }
    }

    #[test]
    fn test_table_order_and_ceilings() {
        let pipeline = RecoveryPipeline::new(NeverDecodes);
        let labels: Vec<_> = pipeline.strategies().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            [
                "direct",
                "enhanced",
                "binarizer",
                "rotation",
                "scale",
                "skew",
                "denoise"
            ]
        );

        let ceilings: Vec<_> = pipeline
            .strategies()
            .iter()
            .map(|s| s.confidence())
            .collect();
        assert_eq!(ceilings, [1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4]);
        // Confidence never increases down the ladder
        assert!(ceilings.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_empty_image_is_an_error() {
        let pipeline = RecoveryPipeline::new(NeverDecodes);
        let img = Image::zeroed(10, 0, 1);
        assert_eq!(
            pipeline.recover(&img).unwrap_err(),
            RecoveryError::EmptyImage {
                width: 10,
                height: 0
            }
        );
    }

    #[test]
    fn test_exhaustion_counts_every_tier() {
        let pipeline = RecoveryPipeline::new(NeverDecodes);
        let img = Image::from_luma8(32, 32, vec![128u8; 1024]).unwrap();
        let result = pipeline.recover(&img).unwrap();

        assert_eq!(result.content, None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.method, "none");
        assert_eq!(result.attempts_used, 7);
        assert!(!result.is_recovered());
    }
}
