//! Revenue impact estimates.

use serde::{Deserialize, Serialize};

/// Estimated monthly revenue loss split into issue-category buckets.
///
/// Buckets are independently derived traffic-weighted slices; they are not
/// required to sum exactly to the total estimated loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// USD/month attributed to performance issues
    pub performance_issues: u64,
    /// USD/month attributed to conversion friction
    pub conversion_issues: u64,
    /// USD/month attributed to mobile experience
    pub mobile_issues: u64,
    /// USD/month attributed to missing trust signals
    pub trust_issues: u64,
}

/// Conversion-rate benchmarks shown alongside the estimate (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionBenchmarks {
    /// Industry-average conversion rate
    pub industry_average: f64,
    /// Modeled current conversion rate for this store
    pub your_conversion: f64,
    /// Top-performer benchmark conversion rate
    pub top_performers: f64,
}

/// Monetary impact estimate for one audit run.
///
/// Invariant: `estimated_recovery == round(recovery_fraction *
/// estimated_monthly_loss)` with the conservative default fraction of 0.7.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct RevenueImpact {
    /// Estimated revenue lost per month, USD
    pub estimated_monthly_loss: u64,
    /// Conservative estimate of recoverable revenue per month, USD
    pub estimated_recovery: u64,
    /// Category-attributed slices of the loss
    pub breakdown: RevenueBreakdown,
    /// Benchmarking context for the estimate
    pub benchmarks: ConversionBenchmarks,
}
