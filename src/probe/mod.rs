//! Storefront probes: the data-fetch collaborator contract.
//!
//! A probe answers each sub-check independently, within its own timeout.
//! The engine treats every probe failure as "use the degraded default", so
//! implementations are free to fail fast; they must never block an audit.

#[cfg(feature = "probe")]
mod http;

#[cfg(feature = "probe")]
pub use http::HttpProbe;

use crate::error::Result;
use crate::model::{
    CheckoutSnapshot, LinkAudit, MobileSnapshot, PerformanceSample, ProductAudit, StorePlatform,
    TrustSignals,
};
use url::Url;

/// Data-fetch collaborator for one storefront.
///
/// Each method is one independent sub-check; implementations must be safe to
/// call concurrently (the engine fans the calls out across threads).
pub trait StorefrontProbe: Send + Sync {
    /// Probe name for logs, e.g. "http" or "static".
    fn name(&self) -> &'static str;

    /// Measure page performance.
    fn performance(&self, url: &Url) -> Result<PerformanceSample>;

    /// Detect trust signals on the storefront.
    fn trust_signals(&self, url: &Url) -> Result<TrustSignals>;

    /// Assess mobile usability.
    fn mobile(&self, url: &Url) -> Result<MobileSnapshot>;

    /// Scan for broken links.
    fn links(&self, url: &Url) -> Result<LinkAudit>;

    /// Sample product page completeness.
    fn products(&self, url: &Url) -> Result<ProductAudit>;

    /// Inspect the checkout flow.
    fn checkout(&self, url: &Url) -> Result<CheckoutSnapshot>;

    /// Identify the e-commerce platform, when recognizable.
    fn platform(&self, _url: &Url) -> StorePlatform {
        StorePlatform::Unknown
    }
}

/// Probe returning fixed, caller-supplied signals.
///
/// The deterministic stand-in for tests and offline runs: every audit of the
/// same configuration yields identical raw data.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    pub performance: PerformanceSample,
    pub trust: TrustSignals,
    pub mobile: MobileSnapshot,
    pub links: LinkAudit,
    pub products: ProductAudit,
    pub checkout: CheckoutSnapshot,
    pub platform: StorePlatform,
}

impl Default for StaticProbe {
    /// A healthy mid-tier storefront.
    fn default() -> Self {
        Self {
            performance: PerformanceSample {
                lcp_seconds: 2.2,
                fid_ms: 80.0,
                cls: 0.08,
                tti_seconds: 3.5,
                speed_index_seconds: 3.0,
                page_load_desktop_seconds: 2.4,
                page_load_mobile_seconds: 3.2,
                images: crate::model::ImageAudit {
                    total: 24,
                    oversized: 0,
                    unoptimized: 2,
                    potential_savings_kb: 64,
                },
            },
            trust: TrustSignals {
                has_ssl: true,
                has_security_badges: false,
                has_reviews: true,
                has_return_policy: true,
                has_contact_info: true,
                has_trust_seals: false,
            },
            mobile: MobileSnapshot {
                usability_score: 82,
                viewport_configured: true,
                tap_targets: crate::model::TapTargetQuality::Good,
                text_readable: true,
            },
            links: LinkAudit {
                checked: 60,
                broken_urls: vec![],
            },
            products: ProductAudit {
                total_products: 25,
                incomplete_products: 1,
                completeness_pct: 96.0,
            },
            checkout: CheckoutSnapshot {
                load_seconds: 2.8,
                steps: 3,
                guest_checkout: true,
                payment_options: 3,
            },
            platform: StorePlatform::Unknown,
        }
    }
}

impl StorefrontProbe for StaticProbe {
    fn name(&self) -> &'static str {
        "static"
    }

    fn performance(&self, _url: &Url) -> Result<PerformanceSample> {
        Ok(self.performance.clone())
    }

    fn trust_signals(&self, _url: &Url) -> Result<TrustSignals> {
        Ok(self.trust)
    }

    fn mobile(&self, _url: &Url) -> Result<MobileSnapshot> {
        Ok(self.mobile.clone())
    }

    fn links(&self, _url: &Url) -> Result<LinkAudit> {
        Ok(self.links.clone())
    }

    fn products(&self, _url: &Url) -> Result<ProductAudit> {
        Ok(self.products.clone())
    }

    fn checkout(&self, _url: &Url) -> Result<CheckoutSnapshot> {
        Ok(self.checkout.clone())
    }

    fn platform(&self, _url: &Url) -> StorePlatform {
        self.platform.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_probe_is_deterministic() {
        let probe = StaticProbe::default();
        let url = Url::parse("https://example-store.com").unwrap();
        assert_eq!(
            probe.performance(&url).unwrap(),
            probe.performance(&url).unwrap()
        );
        assert_eq!(probe.trust_signals(&url).unwrap().count(), 4);
        assert_eq!(probe.platform(&url), StorePlatform::Unknown);
    }
}
