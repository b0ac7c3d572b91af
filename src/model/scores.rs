//! Scored category results.

use serde::{Deserialize, Serialize};

use super::signals::{
    CheckoutSnapshot, LinkAudit, MobileSnapshot, PerformanceSample, ProductAudit, TrustSignals,
};
use crate::scoring::Grade;

/// Per-metric performance sub-scores (each 100, 75 or 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSubScores {
    pub lcp: u8,
    pub fid: u8,
    pub cls: u8,
    pub tti: u8,
    pub speed_index: u8,
}

/// Scored performance result for one audit run. Immutable once built; the
/// grade is always derived from the score, never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct PerformanceScore {
    /// Weighted performance score 0-100
    pub score: u8,
    /// Letter grade derived from `score`
    pub grade: Grade,
    /// Per-metric bucketed sub-scores
    pub sub_scores: PerformanceSubScores,
    /// The raw sample the score was derived from
    pub sample: PerformanceSample,
}

/// Per-category conversion sub-scores (0-100 each).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionSubScores {
    pub trust: f64,
    pub mobile: f64,
    pub links: f64,
    pub products: f64,
    pub checkout: f64,
}

/// Scored conversion result for one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ConversionScore {
    /// Weighted conversion score 0-100
    pub score: u8,
    /// Letter grade derived from `score`
    pub grade: Grade,
    /// Per-category sub-scores
    pub sub_scores: ConversionSubScores,
    /// Trust signals observed
    pub trust: TrustSignals,
    /// Mobile usability snapshot
    pub mobile: MobileSnapshot,
    /// Broken-link scan
    pub links: LinkAudit,
    /// Product completeness scan
    pub products: ProductAudit,
    /// Checkout flow snapshot
    pub checkout: CheckoutSnapshot,
}
