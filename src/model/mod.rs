//! Domain model for storefront audits.
//!
//! Raw signals come in from a [`crate::probe::StorefrontProbe`], flow through
//! the scorers, and end up in an immutable [`AuditResult`]. Every type here
//! serializes to stable JSON so callers can persist or render results without
//! touching the engine again.

mod issue;
mod recommendation;
mod result;
mod revenue;
mod scores;
mod signals;

pub use issue::{Issue, IssueCategory, IssueType, Severity};
pub use recommendation::{Effort, Recommendation, ResourceLink};
pub use result::{AuditMetadata, AuditRequest, AuditResult, AuditType};
pub use revenue::{ConversionBenchmarks, RevenueBreakdown, RevenueImpact};
pub use scores::{ConversionScore, ConversionSubScores, PerformanceScore, PerformanceSubScores};
pub use signals::{
    CheckoutSnapshot, ImageAudit, LinkAudit, MobileSnapshot, PerformanceSample, ProductAudit,
    StorePlatform, TapTargetQuality, TrustSignals,
};
