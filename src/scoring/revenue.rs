//! Heuristic revenue-impact model.
//!
//! Pure arithmetic over already-scored inputs: derives a modeled current and
//! potential conversion rate from the category scores, then converts the gap
//! into monthly dollars using the configured traffic and order-value
//! assumptions. Every number here is an estimate against documented
//! assumptions, not a measurement.

use crate::config::AuditConfig;
use crate::model::{ConversionBenchmarks, RevenueBreakdown, RevenueImpact};

/// Breakdown bucket weights.
const PERFORMANCE_BUCKET_WEIGHT: f64 = 0.3;
const CONVERSION_BUCKET_WEIGHT: f64 = 0.25;
const MOBILE_BUCKET_WEIGHT: f64 = 0.25;
const TRUST_BUCKET_WEIGHT: f64 = 0.2;

/// Share of traffic assumed to browse on mobile, applied to the mobile bucket.
const MOBILE_TRAFFIC_SHARE: f64 = 0.7;

/// Modeled conversion-rate floor and ceiling (percent).
const CURRENT_CONVERSION_FLOOR: f64 = 0.5;

/// Scored inputs to the revenue model.
#[derive(Debug, Clone, Copy)]
pub struct RevenueInputs {
    /// Performance category score 0-100
    pub performance_score: u8,
    /// Conversion category score 0-100
    pub conversion_score: u8,
    /// Mobile usability sub-score 0-100
    pub mobile_score: u8,
    /// Trust signals present, 0-6
    pub trust_count: u8,
}

/// Derives revenue-impact estimates from category scores.
#[derive(Debug, Clone)]
pub struct RevenueCalculator {
    monthly_traffic: u64,
    average_order_value: f64,
    baseline_conversion: f64,
    top_performer_conversion: f64,
    recovery_fraction: f64,
}

impl RevenueCalculator {
    /// Build a calculator from engine configuration.
    #[must_use]
    pub fn from_config(config: &AuditConfig) -> Self {
        Self {
            monthly_traffic: config.monthly_traffic,
            average_order_value: config.average_order_value,
            baseline_conversion: config.baseline_conversion,
            top_performer_conversion: config.top_performer_conversion,
            recovery_fraction: config.recovery_fraction,
        }
    }

    /// Compute the revenue impact estimate.
    pub fn calculate(&self, inputs: RevenueInputs) -> RevenueImpact {
        let current = self.current_conversion(inputs);
        let potential = self.potential_conversion(inputs);

        // Rate gap as a fraction of traffic, priced at the assumed AOV. A
        // high-scoring store can model potential below current; the loss is
        // floored at zero rather than reported as negative.
        let traffic = self.monthly_traffic as f64;
        let lost_orders = (potential - current).max(0.0) / 100.0 * traffic;
        let estimated_monthly_loss = (lost_orders * self.average_order_value).round().max(0.0) as u64;
        let estimated_recovery =
            (estimated_monthly_loss as f64 * self.recovery_fraction).round() as u64;

        let breakdown = RevenueBreakdown {
            performance_issues: self.bucket(
                current,
                gap(inputs.performance_score),
                PERFORMANCE_BUCKET_WEIGHT,
                1.0,
            ),
            conversion_issues: self.bucket(
                current,
                gap(inputs.conversion_score),
                CONVERSION_BUCKET_WEIGHT,
                1.0,
            ),
            mobile_issues: self.bucket(
                current,
                gap(inputs.mobile_score),
                MOBILE_BUCKET_WEIGHT,
                MOBILE_TRAFFIC_SHARE,
            ),
            trust_issues: self.bucket(
                current,
                1.0 - f64::from(inputs.trust_count) / 6.0,
                TRUST_BUCKET_WEIGHT,
                1.0,
            ),
        };

        RevenueImpact {
            estimated_monthly_loss,
            estimated_recovery,
            breakdown,
            benchmarks: ConversionBenchmarks {
                industry_average: self.baseline_conversion,
                your_conversion: round2(current),
                top_performers: self.top_performer_conversion,
            },
        }
    }

    /// Modeled current conversion rate: industry baseline scaled by score
    /// multipliers, clamped to [0.5, top performer].
    fn current_conversion(&self, inputs: RevenueInputs) -> f64 {
        let mut rate = self.baseline_conversion;

        if inputs.performance_score >= 80 {
            rate *= 1.2;
        } else if inputs.performance_score <= 50 {
            rate *= 0.7;
        }

        if inputs.conversion_score >= 80 {
            rate *= 1.15;
        } else if inputs.conversion_score <= 50 {
            rate *= 0.6;
        }

        if inputs.mobile_score < 60 {
            rate *= 0.85;
        }

        if inputs.trust_count <= 2 {
            rate *= 0.8;
        }

        rate.clamp(CURRENT_CONVERSION_FLOOR, self.top_performer_conversion)
    }

    /// Modeled post-fix conversion rate: baseline plus a share of each
    /// category gap, capped at the top-performer benchmark.
    fn potential_conversion(&self, inputs: RevenueInputs) -> f64 {
        let rate = self.baseline_conversion
            + self.baseline_conversion * gap(inputs.performance_score) * 0.5
            + self.baseline_conversion * gap(inputs.conversion_score) * 0.6;
        rate.min(self.top_performer_conversion)
    }

    /// One breakdown bucket: additional orders from closing `gap` in this
    /// category, weighted and priced at the assumed AOV.
    fn bucket(&self, current: f64, gap: f64, weight: f64, traffic_share: f64) -> u64 {
        let traffic = self.monthly_traffic as f64 * traffic_share;
        let additional_orders = traffic * (current / 100.0) * gap * weight;
        (additional_orders * self.average_order_value).round().max(0.0) as u64
    }
}

/// Score gap as a fraction: (100 - score) / 100.
fn gap(score: u8) -> f64 {
    f64::from(100u8.saturating_sub(score)) / 100.0
}

/// Round to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> RevenueCalculator {
        RevenueCalculator::from_config(&AuditConfig::default())
    }

    fn inputs(perf: u8, conv: u8, mobile: u8, trust: u8) -> RevenueInputs {
        RevenueInputs {
            performance_score: perf,
            conversion_score: conv,
            mobile_score: mobile,
            trust_count: trust,
        }
    }

    #[test]
    fn test_recovery_invariant() {
        for case in [
            inputs(40, 40, 30, 0),
            inputs(60, 70, 80, 4),
            inputs(100, 100, 100, 6),
        ] {
            let impact = calculator().calculate(case);
            assert_eq!(
                impact.estimated_recovery,
                (impact.estimated_monthly_loss as f64 * 0.7).round() as u64
            );
        }
    }

    #[test]
    fn test_current_conversion_bounds() {
        // Worst case: all multipliers applied downward
        let low = calculator().current_conversion(inputs(30, 30, 30, 0));
        assert!(low >= 0.5);
        // 2.5 * 0.7 * 0.6 * 0.85 * 0.8 = 0.714
        assert!((low - 0.714).abs() < 1e-9);

        // Best case: upward multipliers, still capped at the benchmark
        let high = calculator().current_conversion(inputs(100, 100, 100, 6));
        assert!(high <= 5.0);
        // 2.5 * 1.2 * 1.15 = 3.45
        assert!((high - 3.45).abs() < 1e-9);
    }

    #[test]
    fn test_potential_capped_at_top_performer() {
        let potential = calculator().potential_conversion(inputs(0, 0, 0, 0));
        // 2.5 + 2.5*1.0*0.5 + 2.5*1.0*0.6 = 5.25, capped at 5.0
        assert_eq!(potential, 5.0);
    }

    #[test]
    fn test_poor_store_loss_math() {
        // perf=40, conv=40: current = 2.5*0.7*0.6*0.85*0.8 = 0.714
        // potential = 2.5 + 2.5*0.6*0.5 + 2.5*0.6*0.6 = 4.15
        // loss = (4.15-0.714)/100 * 10_000 * 75 = 25_770
        let impact = calculator().calculate(inputs(40, 40, 30, 0));
        assert_eq!(impact.estimated_monthly_loss, 25_770);
        assert_eq!(impact.estimated_recovery, 18_039);
    }

    #[test]
    fn test_healthy_store_has_no_modeled_loss() {
        let impact = calculator().calculate(inputs(100, 99, 95, 6));
        assert_eq!(impact.estimated_monthly_loss, 0);
        assert_eq!(impact.estimated_recovery, 0);
    }

    #[test]
    fn test_mobile_bucket_uses_partial_traffic() {
        // Same gap and nearly equal weights: the mobile bucket must come out
        // at 70% of the conversion bucket.
        let impact = calculator().calculate(inputs(80, 20, 20, 6));
        let conv = impact.breakdown.conversion_issues as f64;
        let mobile = impact.breakdown.mobile_issues as f64;
        assert!((mobile / conv - 0.7).abs() < 0.01);
    }

    #[test]
    fn test_trust_bucket_gap_uses_signal_share() {
        // All six signals present: trust gap is zero, bucket is empty.
        let impact = calculator().calculate(inputs(40, 40, 40, 6));
        assert_eq!(impact.breakdown.trust_issues, 0);
    }

    #[test]
    fn test_benchmarks_echo_assumptions() {
        let impact = calculator().calculate(inputs(50, 50, 50, 3));
        assert_eq!(impact.benchmarks.industry_average, 2.5);
        assert_eq!(impact.benchmarks.top_performers, 5.0);
        assert!(impact.benchmarks.your_conversion >= 0.5);
        assert!(impact.benchmarks.your_conversion <= 5.0);
    }

    #[test]
    fn test_traffic_default_is_ten_thousand() {
        let config = AuditConfig::default();
        assert_eq!(config.monthly_traffic, 10_000);
        let custom = RevenueCalculator {
            monthly_traffic: 20_000,
            ..calculator()
        };
        let base = calculator().calculate(inputs(40, 40, 30, 0));
        let doubled = custom.calculate(inputs(40, 40, 30, 0));
        assert_eq!(doubled.estimated_monthly_loss, base.estimated_monthly_loss * 2);
    }
}
