//! Conversion scoring from trust, mobile, link, catalog and checkout signals.

use crate::model::{
    CheckoutSnapshot, ConversionScore, ConversionSubScores, LinkAudit, MobileSnapshot,
    ProductAudit, TrustSignals,
};
use crate::scoring::Grade;

/// Category weights for the blended score (sum to 1.0).
const TRUST_WEIGHT: f64 = 0.25;
const MOBILE_WEIGHT: f64 = 0.25;
const LINKS_WEIGHT: f64 = 0.15;
const PRODUCTS_WEIGHT: f64 = 0.20;
const CHECKOUT_WEIGHT: f64 = 0.15;

/// Penalty per broken link against a perfect link score.
const BROKEN_LINK_PENALTY: f64 = 10.0;

/// Scores conversion readiness from the five conversion sub-checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionScorer;

impl ConversionScorer {
    /// Create a new conversion scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score the gathered conversion signals. Pure; always yields an integer
    /// score in [0, 100] with the grade derived from it.
    pub fn score(
        &self,
        trust: TrustSignals,
        mobile: MobileSnapshot,
        links: LinkAudit,
        products: ProductAudit,
        checkout: CheckoutSnapshot,
    ) -> ConversionScore {
        let sub_scores = ConversionSubScores {
            trust: trust.percentage(),
            mobile: f64::from(mobile.usability_score.min(100)),
            links: link_score(links.broken_count()),
            products: products.completeness_pct.clamp(0.0, 100.0),
            checkout: f64::from(checkout.quality_score()),
        };

        let weighted = sub_scores.trust * TRUST_WEIGHT
            + sub_scores.mobile * MOBILE_WEIGHT
            + sub_scores.links * LINKS_WEIGHT
            + sub_scores.products * PRODUCTS_WEIGHT
            + sub_scores.checkout * CHECKOUT_WEIGHT;
        let score = weighted.round().clamp(0.0, 100.0) as u8;

        ConversionScore {
            score,
            grade: Grade::from_score(f64::from(score)),
            sub_scores,
            trust,
            mobile,
            links,
            products,
            checkout,
        }
    }

    /// Fail-soft result used when every conversion sub-check fails: all
    /// degraded defaults, which blend to a score of 50.
    pub fn degraded(&self) -> ConversionScore {
        self.score(
            TrustSignals::degraded(),
            MobileSnapshot::degraded(),
            LinkAudit::degraded(),
            ProductAudit::degraded(),
            CheckoutSnapshot::degraded(),
        )
    }
}

/// Link sub-score: perfect when nothing is broken, minus a flat penalty per
/// broken link, floored at zero.
fn link_score(broken: u32) -> f64 {
    if broken == 0 {
        100.0
    } else {
        (100.0 - f64::from(broken) * BROKEN_LINK_PENALTY).max(0.0)
    }
}
