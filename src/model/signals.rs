//! Raw storefront signals supplied by a probe.
//!
//! These types form the contract with the data-fetch collaborator. Each one
//! carries a `degraded()` constructor: the documented pessimistic default the
//! engine substitutes when the corresponding sub-check fails, so an audit
//! always completes with best-effort numbers.

use serde::{Deserialize, Serialize};

/// Raw performance timings and layout metrics for a storefront page.
///
/// Core Web Vitals style measurements; how they are obtained (lab run,
/// field data, simulation) is the probe's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// Largest Contentful Paint in seconds
    pub lcp_seconds: f64,
    /// First Input Delay in milliseconds
    pub fid_ms: f64,
    /// Cumulative Layout Shift (unitless)
    pub cls: f64,
    /// Time To Interactive in seconds
    pub tti_seconds: f64,
    /// Speed Index in seconds
    pub speed_index_seconds: f64,
    /// Full page load time on desktop, seconds (descriptive only)
    pub page_load_desktop_seconds: f64,
    /// Full page load time on mobile, seconds (descriptive; feeds issue rules)
    pub page_load_mobile_seconds: f64,
    /// Image optimization stats (descriptive; feeds issue rules)
    pub images: ImageAudit,
}

impl PerformanceSample {
    /// Pessimistic default used when the performance probe fails: every
    /// metric sits just past its "needs improvement" boundary, so each
    /// sub-score buckets to 50 and the weighted score comes out at exactly 50.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            lcp_seconds: 4.5,
            fid_ms: 400.0,
            cls: 0.3,
            tti_seconds: 8.0,
            speed_index_seconds: 6.5,
            page_load_desktop_seconds: 5.0,
            page_load_mobile_seconds: 6.5,
            images: ImageAudit::default(),
        }
    }
}

/// Image inventory stats for the audited page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAudit {
    /// Total images found on the page
    pub total: u32,
    /// Images larger than their rendered size
    pub oversized: u32,
    /// Images served without modern compression
    pub unoptimized: u32,
    /// Estimated transfer savings from optimization, in KB
    pub potential_savings_kb: u64,
}

/// Presence of the six trust signals shoppers look for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustSignals {
    /// Page served over HTTPS with a valid certificate
    pub has_ssl: bool,
    /// Security badges (Norton, McAfee, etc.) visible near checkout
    pub has_security_badges: bool,
    /// Customer reviews or ratings displayed
    pub has_reviews: bool,
    /// Return/refund policy discoverable
    pub has_return_policy: bool,
    /// Contact information (email, phone, address) discoverable
    pub has_contact_info: bool,
    /// Third-party trust seals (BBB, Trustpilot, etc.)
    pub has_trust_seals: bool,
}

impl TrustSignals {
    /// Number of trust signals present, 0-6.
    #[must_use]
    pub fn count(&self) -> u8 {
        [
            self.has_ssl,
            self.has_security_badges,
            self.has_reviews,
            self.has_return_policy,
            self.has_contact_info,
            self.has_trust_seals,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }

    /// Share of signals present as a percentage of six.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        f64::from(self.count()) / 6.0 * 100.0
    }

    /// All six signals present.
    #[must_use]
    pub fn all() -> Self {
        Self {
            has_ssl: true,
            has_security_badges: true,
            has_reviews: true,
            has_return_policy: true,
            has_contact_info: true,
            has_trust_seals: true,
        }
    }

    /// Pessimistic default when the trust-signal check fails: only SSL and a
    /// return policy are assumed (3/6 would overstate an unmeasured store),
    /// yielding a mid-low trust sub-score.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            has_ssl: true,
            has_return_policy: true,
            ..Self::default()
        }
    }
}

/// Tap target sizing quality on mobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapTargetQuality {
    Good,
    Moderate,
    Poor,
}

/// Mobile usability snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileSnapshot {
    /// Overall mobile usability score 0-100, derived by the probe from
    /// viewport/responsiveness heuristics
    pub usability_score: u8,
    /// Whether a responsive viewport meta tag is configured
    pub viewport_configured: bool,
    /// Tap target sizing quality
    pub tap_targets: TapTargetQuality,
    /// Whether body text is readable without zooming
    pub text_readable: bool,
}

impl MobileSnapshot {
    /// Pessimistic default when the mobile check fails.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            usability_score: 50,
            viewport_configured: true,
            tap_targets: TapTargetQuality::Moderate,
            text_readable: true,
        }
    }
}

/// Broken-link scan results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAudit {
    /// Number of links checked
    pub checked: u32,
    /// URLs that returned an error status or failed to resolve
    pub broken_urls: Vec<String>,
}

impl LinkAudit {
    /// Number of broken links found.
    #[must_use]
    pub fn broken_count(&self) -> u32 {
        self.broken_urls.len() as u32
    }

    /// Pessimistic default when the link scan fails: an unmeasured store is
    /// assumed to have a couple of broken links rather than none.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            checked: 0,
            broken_urls: vec![
                "unverified: link scan unavailable".to_string(),
                "unverified: link scan unavailable".to_string(),
            ],
        }
    }
}

/// Product catalog completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAudit {
    /// Products sampled
    pub total_products: u32,
    /// Products missing a description, image, or price
    pub incomplete_products: u32,
    /// Share of sampled products that are complete, 0-100
    pub completeness_pct: f64,
}

impl ProductAudit {
    /// Pessimistic default when the product scan fails.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            total_products: 0,
            incomplete_products: 0,
            completeness_pct: 50.0,
        }
    }
}

/// Checkout flow snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    /// Checkout page load time in seconds
    pub load_seconds: f64,
    /// Number of steps from cart to order confirmation
    pub steps: u8,
    /// Guest checkout offered
    pub guest_checkout: bool,
    /// Number of payment options presented
    pub payment_options: u8,
}

impl CheckoutSnapshot {
    /// Checkout quality sub-score 0-100, derived from speed, step count,
    /// guest checkout availability and payment option breadth.
    #[must_use]
    pub fn quality_score(&self) -> u8 {
        let mut score: i32 = 100;

        score -= if self.load_seconds > 5.0 {
            30
        } else if self.load_seconds > 3.0 {
            15
        } else {
            0
        };

        score -= if self.steps > 5 {
            20
        } else if self.steps > 3 {
            10
        } else {
            0
        };

        if !self.guest_checkout {
            score -= 20;
        }

        score -= match self.payment_options {
            0 | 1 => 20,
            2 => 10,
            _ => 0,
        };

        score.max(0) as u8
    }

    /// Pessimistic default when the checkout check fails; scores exactly 50.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            load_seconds: 5.5,
            steps: 4,
            guest_checkout: true,
            payment_options: 2,
        }
    }
}

/// E-commerce platform detected for the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum StorePlatform {
    Shopify,
    WooCommerce,
    Magento,
    BigCommerce,
    /// Recognizably custom-built
    Custom,
    /// Could not be determined
    Unknown,
}

impl StorePlatform {
    /// Human-readable platform name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Shopify => "Shopify",
            Self::WooCommerce => "WooCommerce",
            Self::Magento => "Magento",
            Self::BigCommerce => "BigCommerce",
            Self::Custom => "Custom",
            Self::Unknown => "Unknown",
        }
    }
}
