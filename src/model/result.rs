//! Audit requests and the aggregate result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ConversionScore, Issue, PerformanceScore, Recommendation, RevenueImpact, StorePlatform,
};
use crate::scoring::Grade;

/// Depth of audit requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditType {
    /// Unauthenticated audit of a public storefront; results are cacheable
    Anonymous,
    /// Authenticated audit with store API access
    Full,
}

/// A request to audit one storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRequest {
    /// Storefront URL to audit
    pub store_url: String,
    /// Requesting user, when authenticated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Audit depth
    pub audit_type: AuditType,
    /// Store platform API token for full audits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl AuditRequest {
    /// Anonymous audit request for a URL.
    #[must_use]
    pub fn anonymous(store_url: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            user_id: None,
            audit_type: AuditType::Anonymous,
            access_token: None,
        }
    }
}

/// Execution metadata recorded with every result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditMetadata {
    /// Wall-clock duration of the run, milliseconds
    pub duration_ms: u64,
    /// When the audit ran
    pub timestamp: DateTime<Utc>,
    /// Engine version that produced the result
    pub engine_version: String,
    /// Names of the sub-checks that were attempted
    pub checks_performed: Vec<String>,
    /// Detected e-commerce platform
    pub store_platform: StorePlatform,
}

/// The aggregate audit result. Created exactly once per run and treated as
/// immutable; ownership passes to the caller, who persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct AuditResult {
    /// Unique id for this run
    pub id: Uuid,
    /// Normalized storefront URL that was audited
    pub store_url: String,
    /// Weighted blend of performance and conversion scores
    pub overall_score: u8,
    /// Letter grade derived from `overall_score`
    pub overall_grade: Grade,
    /// Performance category result
    pub performance: PerformanceScore,
    /// Conversion category result
    pub conversion: ConversionScore,
    /// Monetary impact estimate
    pub revenue_impact: RevenueImpact,
    /// Findings, sorted by descending revenue impact
    pub issues: Vec<Issue>,
    /// Fix suggestions, sorted by descending priority
    pub recommendations: Vec<Recommendation>,
    /// Subset of `recommendations` flagged as instant wins
    pub instant_wins: Vec<Recommendation>,
    /// Execution metadata
    pub metadata: AuditMetadata,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_request() {
        let req = AuditRequest::anonymous("https://example-store.com");
        assert_eq!(req.audit_type, AuditType::Anonymous);
        assert!(req.user_id.is_none());
        assert!(req.access_token.is_none());
    }

    #[test]
    fn test_request_serialization_skips_empty_fields() {
        let req = AuditRequest::anonymous("https://example-store.com");
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("user_id"));
        assert!(!json.contains("access_token"));
    }
}
