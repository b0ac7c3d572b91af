//! Issue generation: fixed threshold rules over scored outputs.
//!
//! Each rule tests one threshold and, when triggered, emits exactly one
//! [`Issue`] carrying a fixed fraction of the relevant revenue-breakdown
//! bucket. Metrics inside acceptable thresholds emit nothing; absence of an
//! issue is the pass signal for that check.

use crate::model::{
    ConversionScore, Effort, Issue, IssueCategory, IssueType, PerformanceScore, RevenueImpact,
    Severity, TapTargetQuality,
};

/// Generates the issue list for one audit run.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueGenerator;

impl IssueGenerator {
    /// Create a new issue generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run every rule and return the triggered issues, sorted by descending
    /// revenue impact.
    pub fn generate(
        &self,
        performance: &PerformanceScore,
        conversion: &ConversionScore,
        revenue: &RevenueImpact,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();
        let perf_bucket = revenue.breakdown.performance_issues;
        let conv_bucket = revenue.breakdown.conversion_issues;
        let mobile_bucket = revenue.breakdown.mobile_issues;
        let trust_bucket = revenue.breakdown.trust_issues;

        let sample = &performance.sample;

        if sample.lcp_seconds > 2.5 {
            let severity = if sample.lcp_seconds > 4.0 {
                Severity::Critical
            } else {
                Severity::High
            };
            issues.push(build_issue(
                IssueType::PoorLcp,
                severity,
                "Slow largest contentful paint",
                format!(
                    "The main page content takes {:.1}s to render; shoppers expect it within 2.5s.",
                    sample.lcp_seconds
                ),
                "Every extra second of load time measurably increases bounce rate before shoppers see a single product.",
                share(perf_bucket, 0.30),
                Effort::Medium,
                "2-4 hours",
                IssueCategory::Performance,
                None,
            ));
        }

        if sample.cls > 0.1 {
            let severity = if sample.cls > 0.25 {
                Severity::Critical
            } else {
                Severity::High
            };
            issues.push(build_issue(
                IssueType::HighCls,
                severity,
                "Page layout shifts while loading",
                format!(
                    "Cumulative layout shift is {:.2}; anything above 0.10 causes mis-taps and abandoned sessions.",
                    sample.cls
                ),
                "Buttons that move as the page loads make shoppers tap the wrong thing and lose trust in the store.",
                share(perf_bucket, 0.20),
                Effort::Medium,
                "1-3 hours",
                IssueCategory::Performance,
                None,
            ));
        }

        if sample.page_load_mobile_seconds > 3.5 {
            issues.push(build_issue(
                IssueType::SlowMobileLoad,
                Severity::Critical,
                "Slow page load on mobile",
                format!(
                    "The page takes {:.1}s to load on a mobile connection; most mobile shoppers leave after 3.5s.",
                    sample.page_load_mobile_seconds
                ),
                "Mobile traffic is the majority of storefront visits; a slow mobile page loses sales before it renders.",
                share(perf_bucket, 0.25),
                Effort::Hard,
                "1-2 days",
                IssueCategory::Performance,
                None,
            ));
        }

        if sample.images.oversized > 0 {
            let severity = if sample.images.oversized > 10 {
                Severity::High
            } else {
                Severity::Medium
            };
            issues.push(build_issue(
                IssueType::OversizedImages,
                severity,
                "Oversized product images",
                format!(
                    "{} of {} images are served larger than their display size (~{} KB wasted).",
                    sample.images.oversized, sample.images.total, sample.images.potential_savings_kb
                ),
                "Oversized images slow every page view and cost mobile shoppers real bandwidth.",
                share(perf_bucket, 0.15),
                Effort::Easy,
                "30 minutes",
                IssueCategory::Performance,
                None,
            ));
        }

        let trust = &conversion.trust;

        if !trust.has_ssl {
            issues.push(build_issue(
                IssueType::MissingSsl,
                Severity::Critical,
                "Store not served over HTTPS",
                "The storefront is not protected by a valid SSL certificate.".to_string(),
                "Browsers mark the store as Not Secure; shoppers will not enter payment details on an insecure page.",
                share(trust_bucket, 0.40),
                Effort::Easy,
                "1 hour",
                IssueCategory::Trust,
                None,
            ));
        }

        if !trust.has_security_badges {
            issues.push(build_issue(
                IssueType::MissingSecurityBadges,
                Severity::High,
                "No security badges near checkout",
                "No recognizable payment or security badges were found on the page.".to_string(),
                "Security badges are a cheap, proven reassurance at the moment shoppers decide whether to pay.",
                share(trust_bucket, 0.20),
                Effort::Easy,
                "15 minutes",
                IssueCategory::Trust,
                None,
            ));
        }

        if !trust.has_reviews {
            issues.push(build_issue(
                IssueType::MissingReviews,
                Severity::High,
                "No customer reviews displayed",
                "No review or rating content was found on the storefront.".to_string(),
                "Most shoppers read reviews before buying; stores without them convert significantly worse.",
                share(trust_bucket, 0.25),
                Effort::Medium,
                "2-3 hours",
                IssueCategory::Trust,
                None,
            ));
        }

        if !trust.has_return_policy {
            issues.push(build_issue(
                IssueType::MissingReturnPolicy,
                Severity::Medium,
                "Return policy not discoverable",
                "No return or refund policy link was found.".to_string(),
                "Shoppers hesitate to order when they cannot tell whether returns are possible.",
                share(trust_bucket, 0.10),
                Effort::Easy,
                "30 minutes",
                IssueCategory::Trust,
                None,
            ));
        }

        if !trust.has_contact_info {
            issues.push(build_issue(
                IssueType::MissingContactInfo,
                Severity::Low,
                "Contact information not discoverable",
                "No email, phone number or address was found on the storefront.".to_string(),
                "A reachable merchant reads as a legitimate one; anonymous stores lose cautious buyers.",
                share(trust_bucket, 0.05),
                Effort::Easy,
                "10 minutes",
                IssueCategory::Trust,
                None,
            ));
        }

        let mobile = &conversion.mobile;

        if mobile.usability_score < 70 {
            issues.push(build_issue(
                IssueType::MobileUnfriendly,
                Severity::Critical,
                "Poor mobile usability",
                format!(
                    "Mobile usability scores {}/100; the layout does not adapt well to small screens.",
                    mobile.usability_score
                ),
                "A storefront that is hard to use on a phone forfeits the majority of modern e-commerce traffic.",
                share(mobile_bucket, 0.50),
                Effort::Hard,
                "2-5 days",
                IssueCategory::Mobile,
                None,
            ));
        }

        if mobile.tap_targets == TapTargetQuality::Poor {
            issues.push(build_issue(
                IssueType::PoorTapTargets,
                Severity::Medium,
                "Tap targets too small",
                "Buttons and links are too small or too close together for touch input.".to_string(),
                "Mis-taps on product and checkout buttons quietly erode mobile conversion.",
                share(mobile_bucket, 0.15),
                Effort::Medium,
                "2-4 hours",
                IssueCategory::Mobile,
                None,
            ));
        }

        let links = &conversion.links;
        let broken = links.broken_count();

        if broken > 0 {
            let severity = if broken > 5 {
                Severity::High
            } else {
                Severity::Medium
            };
            issues.push(build_issue(
                IssueType::BrokenLinks,
                severity,
                "Broken links found",
                format!("{broken} links on the storefront return errors."),
                "Broken links strand shoppers mid-journey and signal neglect to both customers and search engines.",
                share(conv_bucket, 0.30),
                Effort::Easy,
                "1-2 hours",
                IssueCategory::Seo,
                Some(links.broken_urls.clone()),
            ));
        }

        let products = &conversion.products;

        if products.incomplete_products > 0 {
            issues.push(build_issue(
                IssueType::IncompleteProducts,
                Severity::High,
                "Incomplete product pages",
                format!(
                    "{} of {} sampled products are missing a description, image or price.",
                    products.incomplete_products, products.total_products
                ),
                "Shoppers will not buy what they cannot evaluate; incomplete listings convert near zero.",
                share(conv_bucket, 0.20),
                Effort::Medium,
                "3-6 hours",
                IssueCategory::Products,
                None,
            ));
        }

        if conversion.checkout.load_seconds > 5.0 {
            issues.push(build_issue(
                IssueType::SlowCheckout,
                Severity::High,
                "Slow checkout page",
                format!(
                    "The checkout page takes {:.1}s to load.",
                    conversion.checkout.load_seconds
                ),
                "Checkout is the worst possible place to make a committed buyer wait; slow checkouts are abandoned carts.",
                share(conv_bucket, 0.35),
                Effort::Hard,
                "1-3 days",
                IssueCategory::Conversion,
                None,
            ));
        }

        issues.sort_by(|a, b| b.revenue_impact.cmp(&a.revenue_impact));
        issues
    }
}

/// Attribute a fixed fraction of a breakdown bucket to one issue.
fn share(bucket: u64, fraction: f64) -> u64 {
    (bucket as f64 * fraction).round() as u64
}

#[allow(clippy::too_many_arguments)]
fn build_issue(
    kind: IssueType,
    severity: Severity,
    title: &str,
    description: String,
    impact: &str,
    revenue_impact: u64,
    effort: Effort,
    estimated_fix_time: &str,
    category: IssueCategory,
    affected_urls: Option<Vec<String>>,
) -> Issue {
    Issue {
        id: format!("issue-{}", kind.slug()),
        kind,
        severity,
        title: title.to_string(),
        description,
        impact: impact.to_string(),
        revenue_impact,
        effort,
        estimated_fix_time: estimated_fix_time.to_string(),
        category,
        affected_urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditConfig;
    use crate::model::{
        CheckoutSnapshot, ImageAudit, LinkAudit, MobileSnapshot, PerformanceSample, ProductAudit,
        TrustSignals,
    };
    use crate::scoring::{ConversionScorer, PerformanceScorer, RevenueCalculator, RevenueInputs};

    fn clean_sample() -> PerformanceSample {
        PerformanceSample {
            lcp_seconds: 1.0,
            fid_ms: 50.0,
            cls: 0.02,
            tti_seconds: 2.0,
            speed_index_seconds: 2.0,
            page_load_desktop_seconds: 1.5,
            page_load_mobile_seconds: 2.5,
            images: ImageAudit::default(),
        }
    }

    fn clean_conversion() -> crate::model::ConversionScore {
        ConversionScorer::new().score(
            TrustSignals::all(),
            MobileSnapshot {
                usability_score: 95,
                viewport_configured: true,
                tap_targets: TapTargetQuality::Good,
                text_readable: true,
            },
            LinkAudit {
                checked: 40,
                broken_urls: vec![],
            },
            ProductAudit {
                total_products: 30,
                incomplete_products: 0,
                completeness_pct: 100.0,
            },
            CheckoutSnapshot {
                load_seconds: 2.0,
                steps: 3,
                guest_checkout: true,
                payment_options: 4,
            },
        )
    }

    fn revenue_for(
        perf: &crate::model::PerformanceScore,
        conv: &crate::model::ConversionScore,
    ) -> RevenueImpact {
        RevenueCalculator::from_config(&AuditConfig::default()).calculate(RevenueInputs {
            performance_score: perf.score,
            conversion_score: conv.score,
            mobile_score: conv.mobile.usability_score,
            trust_count: conv.trust.count(),
        })
    }

    #[test]
    fn test_healthy_store_emits_no_issues() {
        let perf = PerformanceScorer::new().score(clean_sample());
        let conv = clean_conversion();
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_lcp_severity_escalates_past_four_seconds() {
        let mut sample = clean_sample();
        sample.lcp_seconds = 3.0;
        let perf = PerformanceScorer::new().score(sample);
        let conv = clean_conversion();
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);
        let lcp = issues.iter().find(|i| i.kind == IssueType::PoorLcp).unwrap();
        assert_eq!(lcp.severity, Severity::High);

        let mut sample = clean_sample();
        sample.lcp_seconds = 5.0;
        let perf = PerformanceScorer::new().score(sample);
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);
        let lcp = issues.iter().find(|i| i.kind == IssueType::PoorLcp).unwrap();
        assert_eq!(lcp.severity, Severity::Critical);
    }

    #[test]
    fn test_broken_link_severity_thresholds() {
        let perf = PerformanceScorer::new().score(clean_sample());
        let mut conv = clean_conversion();
        conv.links.broken_urls = (0..3).map(|i| format!("https://x.test/{i}")).collect();
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);
        let links = issues
            .iter()
            .find(|i| i.kind == IssueType::BrokenLinks)
            .unwrap();
        assert_eq!(links.severity, Severity::Medium);
        assert_eq!(links.affected_urls.as_ref().unwrap().len(), 3);

        conv.links.broken_urls = (0..6).map(|i| format!("https://x.test/{i}")).collect();
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);
        let links = issues
            .iter()
            .find(|i| i.kind == IssueType::BrokenLinks)
            .unwrap();
        assert_eq!(links.severity, Severity::High);
    }

    #[test]
    fn test_missing_trust_signals_each_emit_one_issue() {
        let perf = PerformanceScorer::new().score(clean_sample());
        let mut conv = clean_conversion();
        conv.trust = TrustSignals::default();
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);

        for kind in [
            IssueType::MissingSsl,
            IssueType::MissingSecurityBadges,
            IssueType::MissingReviews,
            IssueType::MissingReturnPolicy,
            IssueType::MissingContactInfo,
        ] {
            assert_eq!(
                issues.iter().filter(|i| i.kind == kind).count(),
                1,
                "expected exactly one {kind:?}"
            );
        }
    }

    #[test]
    fn test_issues_sorted_by_descending_revenue_impact() {
        let mut sample = clean_sample();
        sample.lcp_seconds = 5.0;
        sample.cls = 0.3;
        sample.page_load_mobile_seconds = 6.0;
        sample.images.oversized = 12;
        sample.images.total = 30;
        let perf = PerformanceScorer::new().score(sample);

        let mut conv = clean_conversion();
        conv.trust = TrustSignals::default();
        conv.mobile.usability_score = 40;
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);

        assert!(issues.len() >= 7);
        for pair in issues.windows(2) {
            assert!(pair[0].revenue_impact >= pair[1].revenue_impact);
        }
    }

    #[test]
    fn test_issue_ids_are_stable_slugs() {
        let mut sample = clean_sample();
        sample.lcp_seconds = 5.0;
        let perf = PerformanceScorer::new().score(sample);
        let conv = clean_conversion();
        let revenue = revenue_for(&perf, &conv);
        let issues = IssueGenerator::new().generate(&perf, &conv, &revenue);
        assert_eq!(issues[0].id, "issue-poor_lcp");
    }
}
