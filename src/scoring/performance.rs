//! Performance scoring from raw timing and layout metrics.
//!
//! Each Core Web Vitals style metric buckets independently to 100/75/50
//! using the standard good/needs-improvement thresholds, then a fixed
//! weighted blend produces the category score. Page-load times and image
//! stats are carried through as descriptive sub-metrics only; they feed
//! issue generation, not the number.

use crate::model::{PerformanceSample, PerformanceScore, PerformanceSubScores};
use crate::scoring::Grade;

/// Metric weights for the blended score (sum to 1.0).
const LCP_WEIGHT: f64 = 0.25;
const FID_WEIGHT: f64 = 0.15;
const CLS_WEIGHT: f64 = 0.15;
const TTI_WEIGHT: f64 = 0.25;
const SPEED_INDEX_WEIGHT: f64 = 0.20;

/// Bucket a metric to 100 (good), 75 (needs improvement) or 50 (poor).
fn bucket(value: f64, good: f64, needs_improvement: f64) -> u8 {
    if value <= good {
        100
    } else if value <= needs_improvement {
        75
    } else {
        50
    }
}

/// Scores raw performance samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceScorer;

impl PerformanceScorer {
    /// Create a new performance scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score a raw sample. Pure; always yields an integer score in [0, 100]
    /// with the grade derived from it.
    pub fn score(&self, sample: PerformanceSample) -> PerformanceScore {
        let sub_scores = PerformanceSubScores {
            lcp: bucket(sample.lcp_seconds, 2.5, 4.0),
            fid: bucket(sample.fid_ms, 100.0, 300.0),
            cls: bucket(sample.cls, 0.1, 0.25),
            tti: bucket(sample.tti_seconds, 3.8, 7.3),
            speed_index: bucket(sample.speed_index_seconds, 3.4, 5.8),
        };

        let weighted = f64::from(sub_scores.lcp) * LCP_WEIGHT
            + f64::from(sub_scores.fid) * FID_WEIGHT
            + f64::from(sub_scores.cls) * CLS_WEIGHT
            + f64::from(sub_scores.tti) * TTI_WEIGHT
            + f64::from(sub_scores.speed_index) * SPEED_INDEX_WEIGHT;
        let score = weighted.round().clamp(0.0, 100.0) as u8;

        PerformanceScore {
            score,
            grade: Grade::from_score(f64::from(score)),
            sub_scores,
            sample,
        }
    }

    /// Fail-soft result used when the performance probe fails: the
    /// documented pessimistic default sample, which scores exactly 50.
    pub fn degraded(&self) -> PerformanceScore {
        self.score(PerformanceSample::degraded())
    }
}
