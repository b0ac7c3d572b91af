//! Scoring engine: grades, category scorers and the revenue model.

mod conversion;
mod grade;
mod performance;
mod revenue;

pub use conversion::ConversionScorer;
pub use grade::Grade;
pub use performance::PerformanceScorer;
pub use revenue::{RevenueCalculator, RevenueInputs};

/// Scoring engine version recorded in every result.
pub const ENGINE_VERSION: &str = "1.0";
