//! Audit orchestration.
//!
//! [`AuditEngine`] owns one run end to end: validate the request, fan the
//! probe sub-checks out across threads, score, price the gaps, generate
//! findings and assemble the immutable [`AuditResult`]. Probe failures never
//! abort a run; each failed sub-check degrades to a neutral default and the
//! audit completes on whatever data survived.

mod progress;

pub use progress::{AuditPhase, AuditProgress, NoOpObserver, ProgressObserver};

use std::sync::Mutex;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::cache::AuditCache;
use crate::config::{AuditConfig, Validatable};
use crate::error::{AuditError, Result};
use crate::issues::IssueGenerator;
use crate::model::{
    AuditMetadata, AuditRequest, AuditResult, AuditType, CheckoutSnapshot, ConversionScore,
    LinkAudit, MobileSnapshot, PerformanceSample, PerformanceScore, ProductAudit, StorePlatform,
    TrustSignals,
};
use crate::probe::StorefrontProbe;
use crate::recommend::RecommendationGenerator;
use crate::scoring::{
    ConversionScorer, Grade, PerformanceScorer, RevenueCalculator, RevenueInputs, ENGINE_VERSION,
};

/// Overall score blend weights.
const PERFORMANCE_OVERALL_WEIGHT: f64 = 0.4;
const CONVERSION_OVERALL_WEIGHT: f64 = 0.6;

/// Sub-check names recorded in result metadata, in execution order.
const CHECKS: [&str; 6] = [
    "performance",
    "trust_signals",
    "mobile_usability",
    "broken_links",
    "product_pages",
    "checkout",
];

/// Raw signals gathered from the probe, after fail-soft substitution.
struct GatheredSignals {
    performance: PerformanceSample,
    trust: TrustSignals,
    mobile: MobileSnapshot,
    links: LinkAudit,
    products: ProductAudit,
    checkout: CheckoutSnapshot,
    platform: StorePlatform,
}

/// Runs storefront audits.
pub struct AuditEngine {
    config: AuditConfig,
    probe: Box<dyn StorefrontProbe>,
    observer: Box<dyn ProgressObserver>,
    cache: Option<Mutex<AuditCache>>,
}

impl AuditEngine {
    /// Create an engine with the given configuration and data-fetch probe.
    /// Progress events are discarded and no result cache is kept until the
    /// respective builders are called.
    #[must_use]
    pub fn new(config: AuditConfig, probe: Box<dyn StorefrontProbe>) -> Self {
        Self {
            config,
            probe,
            observer: Box::new(NoOpObserver),
            cache: None,
        }
    }

    /// Attach a progress observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Enable the anonymous-result cache, sized from the configuration.
    #[must_use]
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Mutex::new(AuditCache::new(
            self.config.cache_ttl,
            self.config.cache_capacity,
        )));
        self
    }

    /// Run one audit.
    ///
    /// Fails only on an invalid request or configuration; probe errors are
    /// absorbed as degraded sub-scores. Anonymous results for the same
    /// normalized URL are served from the cache while fresh.
    pub fn run(&self, request: &AuditRequest) -> Result<AuditResult> {
        let started = Instant::now();
        self.emit(AuditPhase::Initializing, &started);

        let url = match self.prepare(request) {
            Ok(url) => url,
            Err(err) => {
                self.emit(AuditPhase::Failed, &started);
                return Err(err);
            }
        };

        if request.audit_type == AuditType::Anonymous {
            if let Some(hit) = self.cached(url.as_str()) {
                debug!(store_url = url.as_str(), "serving cached audit result");
                self.emit(AuditPhase::Completed, &started);
                return Ok(hit);
            }
        }

        info!(
            store_url = url.as_str(),
            probe = self.probe.name(),
            "starting audit"
        );

        self.emit(AuditPhase::FetchingData, &started);
        let signals = self.gather(&url);

        self.emit(AuditPhase::AnalyzingPerformance, &started);
        let performance = PerformanceScorer::new().score(signals.performance.clone());

        self.emit(AuditPhase::AnalyzingConversion, &started);
        let conversion = ConversionScorer::new().score(
            signals.trust,
            signals.mobile.clone(),
            signals.links.clone(),
            signals.products.clone(),
            signals.checkout.clone(),
        );

        self.emit(AuditPhase::CalculatingRevenue, &started);
        let revenue_impact = RevenueCalculator::from_config(&self.config).calculate(RevenueInputs {
            performance_score: performance.score,
            conversion_score: conversion.score,
            mobile_score: signals.mobile.usability_score,
            trust_count: signals.trust.count(),
        });

        self.emit(AuditPhase::GeneratingRecommendations, &started);
        let issues = IssueGenerator::new().generate(&performance, &conversion, &revenue_impact);
        let generator = RecommendationGenerator::new();
        let recommendations = generator.generate(&issues);
        let instant_wins = generator.instant_wins(&recommendations);

        let overall_score = overall(performance.score, conversion.score);
        let result = AuditResult {
            id: Uuid::new_v4(),
            store_url: url.to_string(),
            overall_score,
            overall_grade: Grade::from_score(f64::from(overall_score)),
            performance,
            conversion,
            revenue_impact,
            issues,
            recommendations,
            instant_wins,
            metadata: AuditMetadata {
                duration_ms: started.elapsed().as_millis() as u64,
                timestamp: Utc::now(),
                engine_version: ENGINE_VERSION.to_string(),
                checks_performed: CHECKS.iter().map(|s| (*s).to_string()).collect(),
                store_platform: signals.platform,
            },
            created_at: Utc::now(),
        };

        if request.audit_type == AuditType::Anonymous {
            self.store(url.as_str(), &result);
        }

        info!(
            store_url = url.as_str(),
            overall_score = result.overall_score,
            issues = result.issues.len(),
            duration_ms = result.metadata.duration_ms,
            "audit complete"
        );
        self.emit(AuditPhase::Completed, &started);
        Ok(result)
    }

    /// Validate configuration and normalize the requested URL.
    fn prepare(&self, request: &AuditRequest) -> Result<Url> {
        if let Some(error) = self.config.validate().into_iter().next() {
            return Err(AuditError::config(error.to_string()));
        }
        normalize_store_url(&request.store_url)
    }

    /// Fan the probe sub-checks out across threads. Each failure is logged
    /// and replaced with that check's degraded default.
    fn gather(&self, url: &Url) -> GatheredSignals {
        let probe = self.probe.as_ref();
        let (performance, ((trust, checkout), ((mobile, links), (products, platform)))) =
            rayon::join(
                || fallback("performance", probe.performance(url), PerformanceSample::degraded),
                || {
                    rayon::join(
                        || {
                            rayon::join(
                                || {
                                    fallback(
                                        "trust_signals",
                                        probe.trust_signals(url),
                                        TrustSignals::degraded,
                                    )
                                },
                                || fallback("checkout", probe.checkout(url), CheckoutSnapshot::degraded),
                            )
                        },
                        || {
                            rayon::join(
                                || {
                                    rayon::join(
                                        || {
                                            fallback(
                                                "mobile_usability",
                                                probe.mobile(url),
                                                MobileSnapshot::degraded,
                                            )
                                        },
                                        || fallback("broken_links", probe.links(url), LinkAudit::degraded),
                                    )
                                },
                                || {
                                    rayon::join(
                                        || {
                                            fallback(
                                                "product_pages",
                                                probe.products(url),
                                                ProductAudit::degraded,
                                            )
                                        },
                                        || probe.platform(url),
                                    )
                                },
                            )
                        },
                    )
                },
            );

        GatheredSignals {
            performance,
            trust,
            mobile,
            links,
            products,
            checkout,
            platform,
        }
    }

    fn cached(&self, key: &str) -> Option<AuditResult> {
        let cache = self.cache.as_ref()?;
        let mut guard = cache.lock().ok()?;
        guard.get(key)
    }

    fn store(&self, key: &str, result: &AuditResult) {
        if let Some(cache) = &self.cache {
            if let Ok(mut guard) = cache.lock() {
                guard.insert(key, result.clone());
            }
        }
    }

    fn emit(&self, phase: AuditPhase, started: &Instant) {
        self.observer.on_progress(&AuditProgress {
            phase,
            progress: phase.progress(),
            message: phase.message().to_string(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        });
    }
}

/// Blend the category scores into the overall score.
fn overall(performance: u8, conversion: u8) -> u8 {
    let blended = f64::from(performance) * PERFORMANCE_OVERALL_WEIGHT
        + f64::from(conversion) * CONVERSION_OVERALL_WEIGHT;
    blended.round().clamp(0.0, 100.0) as u8
}

/// Normalize and validate a storefront URL. Accepts bare hostnames by
/// assuming https; rejects empty input, non-http schemes and URLs without a
/// host.
pub fn normalize_store_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuditError::validation("store URL must not be empty"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AuditError::validation(format!(
            "unsupported URL scheme '{}': expected http or https",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(AuditError::validation("store URL must have a host"));
    }
    Ok(url)
}

/// Substitute a degraded default for a failed sub-check.
fn fallback<T>(check: &str, outcome: Result<T>, degraded: impl FnOnce() -> T) -> T {
    match outcome {
        Ok(value) => value,
        Err(err) => {
            warn!(check, error = %err, "sub-check failed, using degraded default");
            degraded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_bare_hostname() {
        let url = normalize_store_url("example-store.com").unwrap();
        assert_eq!(url.as_str(), "https://example-store.com/");
    }

    #[test]
    fn test_normalize_preserves_explicit_scheme() {
        let url = normalize_store_url("http://example-store.com/shop").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.path(), "/shop");
    }

    #[test]
    fn test_normalize_rejects_empty_and_bad_schemes() {
        assert!(normalize_store_url("").is_err());
        assert!(normalize_store_url("   ").is_err());
        assert!(normalize_store_url("ftp://example-store.com").is_err());
    }

    #[test]
    fn test_overall_blend() {
        assert_eq!(overall(100, 100), 100);
        assert_eq!(overall(0, 0), 0);
        // 50*0.4 + 100*0.6 = 80
        assert_eq!(overall(50, 100), 80);
        // 80*0.4 + 60*0.6 = 68
        assert_eq!(overall(80, 60), 68);
    }
}
