//! Recommendation generation: canned templates keyed by issue type.
//!
//! The registry is a lookup table of `(IssueType, builder)` pairs so adding
//! a template is a data change, not a new code branch. Issue kinds without a
//! registry entry intentionally produce no recommendation; callers see the
//! issue itself but no suggested fix. Do not add a generic fallback here
//! without product input.

use crate::model::{Effort, Issue, IssueType, Recommendation, ResourceLink, Severity};

/// Recommendations estimated fixable in under this are flagged instant wins.
const INSTANT_WIN_MINUTES: u32 = 5;

/// A canned fix template for one issue kind.
struct Template {
    title: &'static str,
    description: &'static str,
    steps: &'static [&'static str],
    resources: &'static [(&'static str, &'static str)],
    /// Estimated minutes to apply; drives the instant-win flag
    minutes_to_fix: u32,
}

impl Template {
    const fn is_instant_win(&self) -> bool {
        self.minutes_to_fix < INSTANT_WIN_MINUTES
    }
}

/// Look up the template for an issue kind.
///
/// Returns `None` for `IssueType::Unknown` and any kind without an entry;
/// the generator silently skips such issues (preserved legacy behavior,
/// flagged in DESIGN.md).
fn template_for(kind: &IssueType) -> Option<&'static Template> {
    REGISTRY
        .iter()
        .find_map(|(k, template)| (k == kind).then_some(template))
}

static REGISTRY: &[(IssueType, Template)] = &[
    (
        IssueType::PoorLcp,
        Template {
            title: "Speed up your largest content render",
            description: "Cut the time until shoppers see your main product imagery by optimizing the critical rendering path.",
            steps: &[
                "Compress and convert hero images to WebP or AVIF",
                "Preload the largest above-the-fold image",
                "Serve static assets from a CDN",
                "Defer non-critical JavaScript and third-party tags",
            ],
            resources: &[(
                "Optimize Largest Contentful Paint",
                "https://web.dev/articles/optimize-lcp",
            )],
            minutes_to_fix: 180,
        },
    ),
    (
        IssueType::HighCls,
        Template {
            title: "Stop the page from shifting while it loads",
            description: "Reserve space for images, ads and embeds so the layout stays still.",
            steps: &[
                "Set explicit width and height attributes on all images",
                "Reserve space for banners and embeds with CSS aspect-ratio",
                "Load web fonts with font-display: swap",
            ],
            resources: &[(
                "Optimize Cumulative Layout Shift",
                "https://web.dev/articles/optimize-cls",
            )],
            minutes_to_fix: 120,
        },
    ),
    (
        IssueType::SlowMobileLoad,
        Template {
            title: "Make the mobile page load in under 3.5 seconds",
            description: "Mobile shoppers are the majority of traffic; prioritize their first load.",
            steps: &[
                "Enable text compression (Brotli or gzip) on the server",
                "Lazy-load below-the-fold images",
                "Audit and remove unused apps or scripts injected into the theme",
                "Test on a throttled 4G profile after each change",
            ],
            resources: &[],
            minutes_to_fix: 960,
        },
    ),
    (
        IssueType::OversizedImages,
        Template {
            title: "Resize and compress oversized images",
            description: "Serve images at the size they are displayed and in a modern format.",
            steps: &[
                "Export images at their rendered dimensions",
                "Batch-compress the catalog with an image CDN or build step",
                "Use responsive srcset attributes for product grids",
            ],
            resources: &[],
            minutes_to_fix: 30,
        },
    ),
    (
        IssueType::MissingSsl,
        Template {
            title: "Serve the store over HTTPS",
            description: "Install a valid SSL certificate and redirect all HTTP traffic.",
            steps: &[
                "Provision a certificate (most platforms issue one for free)",
                "Force-redirect HTTP to HTTPS site-wide",
                "Update hardcoded http:// asset URLs to avoid mixed content",
            ],
            resources: &[],
            minutes_to_fix: 60,
        },
    ),
    (
        IssueType::MissingSecurityBadges,
        Template {
            title: "Add security badges near checkout",
            description: "Show recognized payment and security marks where shoppers decide to pay.",
            steps: &[
                "Add the badge block your payment provider supplies",
                "Place badges beside the checkout button, not the footer",
            ],
            resources: &[],
            minutes_to_fix: 4,
        },
    ),
    (
        IssueType::MissingReviews,
        Template {
            title: "Display customer reviews",
            description: "Install a reviews widget and seed it with past customer feedback.",
            steps: &[
                "Install a reviews app for your platform",
                "Email recent customers a review request",
                "Surface star ratings on product grid cards",
            ],
            resources: &[],
            minutes_to_fix: 150,
        },
    ),
    (
        IssueType::MissingReturnPolicy,
        Template {
            title: "Publish a clear return policy",
            description: "Write a plain-language return policy and link it from the footer and product pages.",
            steps: &[
                "Publish a return policy page with timeframes and conditions",
                "Link it from the site footer and checkout",
            ],
            resources: &[],
            minutes_to_fix: 30,
        },
    ),
    (
        IssueType::MissingContactInfo,
        Template {
            title: "Make your contact details visible",
            description: "Add an email address or contact form link to the site footer.",
            steps: &[
                "Add a support email or contact page link to the footer",
                "Include a physical address if you have one",
            ],
            resources: &[],
            minutes_to_fix: 4,
        },
    ),
    (
        IssueType::MobileUnfriendly,
        Template {
            title: "Rework the mobile layout",
            description: "Bring the storefront to a responsive, thumb-friendly layout.",
            steps: &[
                "Adopt or update to a responsive theme",
                "Verify the viewport meta tag is configured",
                "Walk the full purchase flow on a real phone",
                "Fix horizontal scrolling and clipped elements page by page",
            ],
            resources: &[(
                "Mobile-friendly test",
                "https://developers.google.com/search/mobile-sites",
            )],
            minutes_to_fix: 2400,
        },
    ),
    (
        IssueType::PoorTapTargets,
        Template {
            title: "Enlarge tap targets",
            description: "Make buttons and links comfortably tappable on touch screens.",
            steps: &[
                "Increase button hit areas to at least 44x44 px",
                "Add spacing between adjacent links in menus and grids",
            ],
            resources: &[],
            minutes_to_fix: 180,
        },
    ),
    (
        IssueType::BrokenLinks,
        Template {
            title: "Fix or redirect broken links",
            description: "Repair the broken links the audit found before shoppers or crawlers hit them.",
            steps: &[
                "Update or remove each broken link",
                "Add 301 redirects for moved pages",
                "Re-run the audit to confirm a clean scan",
            ],
            resources: &[],
            minutes_to_fix: 90,
        },
    ),
    (
        IssueType::IncompleteProducts,
        Template {
            title: "Complete your product listings",
            description: "Fill in the missing descriptions, images and prices the audit found.",
            steps: &[
                "List products missing a description, image or price",
                "Write benefit-led descriptions for each",
                "Add at least two photos per product",
            ],
            resources: &[],
            minutes_to_fix: 300,
        },
    ),
    (
        IssueType::SlowCheckout,
        Template {
            title: "Speed up the checkout page",
            description: "Strip the checkout to essentials so committed buyers are never kept waiting.",
            steps: &[
                "Remove third-party scripts from checkout pages",
                "Reduce checkout to the minimum number of steps",
                "Enable guest checkout if it is currently gated",
            ],
            resources: &[],
            minutes_to_fix: 960,
        },
    ),
];

/// Generates prioritized recommendations for a list of issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Create a new recommendation generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build one recommendation per recognized issue, sorted by descending
    /// priority. Unrecognized issue kinds are skipped.
    pub fn generate(&self, issues: &[Issue]) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = issues
            .iter()
            .filter_map(|issue| self.for_issue(issue))
            .collect();
        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
        recommendations
    }

    /// The subset of recommendations flagged as instant wins.
    pub fn instant_wins(&self, recommendations: &[Recommendation]) -> Vec<Recommendation> {
        recommendations
            .iter()
            .filter(|r| r.instant_win)
            .cloned()
            .collect()
    }

    fn for_issue(&self, issue: &Issue) -> Option<Recommendation> {
        let template = template_for(&issue.kind)?;
        Some(Recommendation {
            id: format!("rec-{}", issue.kind.slug()),
            title: template.title.to_string(),
            description: template.description.to_string(),
            priority: priority(issue),
            impact: issue.severity,
            effort: issue.effort,
            estimated_revenue_lift: issue.revenue_impact,
            steps: template.steps.iter().map(ToString::to_string).collect(),
            resources: template
                .resources
                .iter()
                .map(|(title, url)| ResourceLink {
                    title: (*title).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
            instant_win: template.is_instant_win(),
        })
    }
}

/// Priority 1-10 from severity, effort and revenue impact.
fn priority(issue: &Issue) -> u8 {
    let impact_score = match issue.severity {
        Severity::Critical => 10.0,
        Severity::High => 7.0,
        Severity::Medium => 4.0,
        Severity::Low => 2.0,
    };
    let effort_score = match issue.effort {
        Effort::Easy => 3.0,
        Effort::Medium => 2.0,
        Effort::Hard => 1.0,
    };
    let revenue_score = (issue.revenue_impact as f64 / 500.0).min(10.0);

    let raw = impact_score * 0.4 + effort_score * 0.3 + revenue_score * 0.3;
    (raw.round() as u8).clamp(1, 10)
}
