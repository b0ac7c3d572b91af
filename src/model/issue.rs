//! Discrete audit findings.

use serde::{Deserialize, Serialize};

/// The known kinds of issue the generator can emit.
///
/// `Unknown` captures unrecognized kind strings from persisted or external
/// data; the recommendation registry deliberately has no entry for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueType {
    PoorLcp,
    HighCls,
    SlowMobileLoad,
    OversizedImages,
    MissingSsl,
    MissingSecurityBadges,
    MissingReviews,
    MissingReturnPolicy,
    MissingContactInfo,
    MobileUnfriendly,
    PoorTapTargets,
    BrokenLinks,
    IncompleteProducts,
    SlowCheckout,
    #[serde(untagged)]
    Unknown(String),
}

impl IssueType {
    /// Stable slug used for issue and recommendation ids. Deterministic so
    /// repeated audits of identical inputs produce identical records.
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::PoorLcp => "poor_lcp",
            Self::HighCls => "high_cls",
            Self::SlowMobileLoad => "slow_mobile_load",
            Self::OversizedImages => "oversized_images",
            Self::MissingSsl => "missing_ssl",
            Self::MissingSecurityBadges => "missing_security_badges",
            Self::MissingReviews => "missing_reviews",
            Self::MissingReturnPolicy => "missing_return_policy",
            Self::MissingContactInfo => "missing_contact_info",
            Self::MobileUnfriendly => "mobile_unfriendly",
            Self::PoorTapTargets => "poor_tap_targets",
            Self::BrokenLinks => "broken_links",
            Self::IncompleteProducts => "incomplete_products",
            Self::SlowCheckout => "slow_checkout",
            Self::Unknown(s) => s,
        }
    }
}

/// Issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Issue category, used to attribute revenue-impact slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Performance,
    Conversion,
    Mobile,
    Trust,
    Seo,
    Products,
}

/// A single triggered audit finding. Never mutated after creation; absence
/// of an issue is the pass signal for its check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Issue {
    /// Stable id, `issue-{slug}`
    pub id: String,
    /// Which rule triggered
    #[serde(rename = "type")]
    pub kind: IssueType,
    /// How severe the finding is
    pub severity: Severity,
    /// Short human-readable title
    pub title: String,
    /// What was found
    pub description: String,
    /// Why it matters, in merchant terms
    pub impact: String,
    /// Attributed revenue impact, USD/month
    pub revenue_impact: u64,
    /// How hard the fix is
    pub effort: crate::model::Effort,
    /// Free-text fix-time estimate, e.g. "2-4 hours"
    pub estimated_fix_time: String,
    /// Category the finding belongs to
    pub category: IssueCategory,
    /// Specific URLs affected, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kind_serialization() {
        let json = serde_json::to_string(&IssueType::PoorLcp).unwrap();
        assert_eq!(json, "\"poor_lcp\"");

        let back: IssueType = serde_json::from_str("\"missing_ssl\"").unwrap();
        assert_eq!(back, IssueType::MissingSsl);
    }

    #[test]
    fn test_unrecognized_kind_round_trips_as_unknown() {
        let kind: IssueType = serde_json::from_str("\"legacy_check\"").unwrap();
        assert_eq!(kind, IssueType::Unknown("legacy_check".to_string()));
        assert_eq!(kind.slug(), "legacy_check");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
