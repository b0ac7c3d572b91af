//! Actionable recommendations derived from issues.

use serde::{Deserialize, Serialize};

use super::issue::Severity;

/// Relative effort to apply a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Easy,
    Medium,
    Hard,
}

/// External reference attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

/// A prioritized, step-by-step fix suggestion for one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Recommendation {
    /// Stable id, `rec-{issue slug}`
    pub id: String,
    /// Short imperative title
    pub title: String,
    /// What to do and why
    pub description: String,
    /// Computed priority 1-10, higher first
    pub priority: u8,
    /// Severity of the underlying issue
    pub impact: Severity,
    /// Effort of the underlying issue
    pub effort: Effort,
    /// Revenue the fix is estimated to recover, USD/month
    pub estimated_revenue_lift: u64,
    /// Ordered how-to steps
    pub steps: Vec<String>,
    /// External references, when useful
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub resources: Vec<ResourceLink>,
    /// Fixable in under five minutes; surfaced separately as an instant win
    pub instant_win: bool,
}
