//! End-to-end engine scenarios against deterministic probes.

use std::sync::Mutex;

use shop_audit::{
    AuditConfig, AuditEngine, AuditError, AuditPhase, AuditProgress, AuditRequest,
    CheckoutSnapshot, Grade, IssueType, LinkAudit, MobileSnapshot, PerformanceSample,
    ProbeErrorKind, ProductAudit, ProgressObserver, Result, Severity, StaticProbe,
    StorefrontProbe, TrustSignals,
};
use url::Url;

fn engine_with(probe: StaticProbe) -> AuditEngine {
    AuditEngine::new(AuditConfig::default(), Box::new(probe))
}

/// A storefront doing almost everything wrong.
fn struggling_store() -> StaticProbe {
    StaticProbe {
        performance: PerformanceSample {
            lcp_seconds: 6.0,
            fid_ms: 500.0,
            cls: 0.4,
            tti_seconds: 10.0,
            speed_index_seconds: 8.0,
            page_load_desktop_seconds: 7.0,
            page_load_mobile_seconds: 8.0,
            images: shop_audit::model::ImageAudit {
                total: 30,
                oversized: 15,
                unoptimized: 20,
                potential_savings_kb: 900,
            },
        },
        trust: TrustSignals::default(),
        mobile: MobileSnapshot {
            usability_score: 20,
            viewport_configured: false,
            tap_targets: shop_audit::model::TapTargetQuality::Poor,
            text_readable: false,
        },
        links: LinkAudit {
            checked: 40,
            broken_urls: (0..8).map(|i| format!("https://bad.test/{i}")).collect(),
        },
        products: ProductAudit {
            total_products: 10,
            incomplete_products: 8,
            completeness_pct: 20.0,
        },
        checkout: CheckoutSnapshot {
            load_seconds: 9.0,
            steps: 7,
            guest_checkout: false,
            payment_options: 1,
        },
        platform: shop_audit::StorePlatform::Custom,
    }
}

/// A storefront doing everything right.
fn thriving_store() -> StaticProbe {
    StaticProbe {
        performance: PerformanceSample {
            lcp_seconds: 2.0,
            fid_ms: 80.0,
            cls: 0.05,
            tti_seconds: 3.0,
            speed_index_seconds: 3.0,
            page_load_desktop_seconds: 1.8,
            page_load_mobile_seconds: 2.8,
            images: shop_audit::model::ImageAudit {
                total: 20,
                oversized: 0,
                unoptimized: 0,
                potential_savings_kb: 0,
            },
        },
        trust: TrustSignals::all(),
        mobile: MobileSnapshot {
            usability_score: 95,
            viewport_configured: true,
            tap_targets: shop_audit::model::TapTargetQuality::Good,
            text_readable: true,
        },
        links: LinkAudit {
            checked: 60,
            broken_urls: vec![],
        },
        products: ProductAudit {
            total_products: 50,
            incomplete_products: 0,
            completeness_pct: 100.0,
        },
        checkout: CheckoutSnapshot {
            load_seconds: 2.0,
            steps: 3,
            guest_checkout: true,
            payment_options: 4,
        },
        platform: shop_audit::StorePlatform::Shopify,
    }
}

/// Probe where every sub-check errors.
struct FailingProbe;

impl StorefrontProbe for FailingProbe {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn performance(&self, _url: &Url) -> Result<PerformanceSample> {
        Err(AuditError::probe(
            "performance",
            ProbeErrorKind::Timeout { seconds: 10 },
        ))
    }

    fn trust_signals(&self, _url: &Url) -> Result<TrustSignals> {
        Err(AuditError::probe(
            "trust",
            ProbeErrorKind::Network("connection refused".into()),
        ))
    }

    fn mobile(&self, _url: &Url) -> Result<MobileSnapshot> {
        Err(AuditError::probe(
            "mobile",
            ProbeErrorKind::HttpStatus { status: 503 },
        ))
    }

    fn links(&self, _url: &Url) -> Result<LinkAudit> {
        Err(AuditError::probe(
            "links",
            ProbeErrorKind::Unavailable("no crawler".into()),
        ))
    }

    fn products(&self, _url: &Url) -> Result<ProductAudit> {
        Err(AuditError::probe(
            "products",
            ProbeErrorKind::InvalidResponse("empty body".into()),
        ))
    }

    fn checkout(&self, _url: &Url) -> Result<CheckoutSnapshot> {
        Err(AuditError::probe(
            "checkout",
            ProbeErrorKind::Timeout { seconds: 10 },
        ))
    }
}

/// Records every progress event for later inspection.
#[derive(Default)]
struct CollectingObserver {
    events: Mutex<Vec<AuditProgress>>,
}

impl ProgressObserver for CollectingObserver {
    fn on_progress(&self, progress: &AuditProgress) {
        if let Ok(mut events) = self.events.lock() {
            events.push(progress.clone());
        }
    }
}

#[test]
fn test_struggling_store_fails_the_audit() {
    let result = engine_with(struggling_store())
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();

    assert!(result.overall_score < 50, "score {}", result.overall_score);
    assert!(matches!(result.overall_grade, Grade::D | Grade::F));

    for kind in [
        IssueType::PoorLcp,
        IssueType::HighCls,
        IssueType::MissingSsl,
        IssueType::MobileUnfriendly,
    ] {
        let issue = result
            .issues
            .iter()
            .find(|i| i.kind == kind)
            .unwrap_or_else(|| panic!("missing issue {kind:?}"));
        assert_eq!(issue.severity, Severity::Critical, "{kind:?}");
    }

    assert!(result.revenue_impact.estimated_monthly_loss > 0);
    assert!(!result.recommendations.is_empty());
    assert_eq!(
        result.metadata.store_platform,
        shop_audit::StorePlatform::Custom
    );
}

#[test]
fn test_thriving_store_passes_clean() {
    let result = engine_with(thriving_store())
        .run(&AuditRequest::anonymous("https://thriving.test"))
        .unwrap();

    assert!(result.overall_score >= 85, "score {}", result.overall_score);
    assert!(result.issues.is_empty(), "issues: {:?}", result.issues);
    assert!(result.recommendations.is_empty());
    assert!(result.instant_wins.is_empty());
    assert_eq!(result.revenue_impact.estimated_monthly_loss, 0);
}

#[test]
fn test_same_input_yields_same_findings() {
    let engine = engine_with(struggling_store());
    let first = engine
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();
    let second = engine
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();

    // Only run identity and timing may differ between runs.
    assert_ne!(first.id, second.id);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.overall_grade, second.overall_grade);
    assert_eq!(first.performance, second.performance);
    assert_eq!(first.conversion, second.conversion);
    assert_eq!(first.revenue_impact, second.revenue_impact);
    assert_eq!(first.issues, second.issues);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.instant_wins, second.instant_wins);
}

#[test]
fn test_all_probe_failures_degrade_to_neutral() {
    let engine = AuditEngine::new(AuditConfig::default(), Box::new(FailingProbe));
    let result = engine
        .run(&AuditRequest::anonymous("https://unreachable.test"))
        .unwrap();

    assert_eq!(result.performance.score, 50);
    assert_eq!(result.conversion.score, 50);
    assert_eq!(result.overall_score, 50);
    assert_eq!(result.overall_grade, Grade::C);
    assert_eq!(result.metadata.checks_performed.len(), 6);
}

#[test]
fn test_invalid_urls_are_rejected() {
    let engine = engine_with(StaticProbe::default());

    for bad in ["", "   ", "ftp://store.test", "http://"] {
        let err = engine.run(&AuditRequest::anonymous(bad)).unwrap_err();
        assert!(
            matches!(err, AuditError::Validation(_)),
            "expected validation error for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn test_progress_phases_in_order() {
    let observer = Box::leak(Box::new(CollectingObserver::default()));
    let engine = engine_with(thriving_store()).with_observer(Box::new(RelayObserver(observer)));
    engine
        .run(&AuditRequest::anonymous("https://thriving.test"))
        .unwrap();

    let events = observer.events.lock().unwrap();
    let phases: Vec<AuditPhase> = events.iter().map(|e| e.phase).collect();
    assert_eq!(
        phases,
        vec![
            AuditPhase::Initializing,
            AuditPhase::FetchingData,
            AuditPhase::AnalyzingPerformance,
            AuditPhase::AnalyzingConversion,
            AuditPhase::CalculatingRevenue,
            AuditPhase::GeneratingRecommendations,
            AuditPhase::Completed,
        ]
    );
    for pair in events.windows(2) {
        assert!(pair[0].progress <= pair[1].progress);
        assert!(pair[0].elapsed_ms <= pair[1].elapsed_ms);
    }
}

#[test]
fn test_failed_phase_emitted_for_invalid_url() {
    let observer = Box::leak(Box::new(CollectingObserver::default()));
    let engine = engine_with(StaticProbe::default()).with_observer(Box::new(RelayObserver(observer)));
    assert!(engine.run(&AuditRequest::anonymous("not a url")).is_err());

    let events = observer.events.lock().unwrap();
    let phases: Vec<AuditPhase> = events.iter().map(|e| e.phase).collect();
    assert_eq!(phases, vec![AuditPhase::Initializing, AuditPhase::Failed]);
}

/// Forwards events to a leaked collector so the engine can own its observer.
struct RelayObserver(&'static CollectingObserver);

impl ProgressObserver for RelayObserver {
    fn on_progress(&self, progress: &AuditProgress) {
        self.0.on_progress(progress);
    }
}

#[test]
fn test_anonymous_results_are_cached() {
    let engine = engine_with(struggling_store()).with_cache();
    let first = engine
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();
    let second = engine
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();

    // Cache hit returns the stored result, id included.
    assert_eq!(first.id, second.id);

    let other = engine
        .run(&AuditRequest::anonymous("https://other.test"))
        .unwrap();
    assert_ne!(first.id, other.id);
}

#[test]
fn test_instant_wins_are_a_subset_of_recommendations() {
    let result = engine_with(struggling_store())
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();

    assert!(!result.instant_wins.is_empty());
    for win in &result.instant_wins {
        assert!(win.instant_win);
        assert!(result.recommendations.iter().any(|r| r.id == win.id));
    }
}

#[test]
fn test_result_serializes_with_stable_field_names() {
    let result = engine_with(struggling_store())
        .run(&AuditRequest::anonymous("https://struggling.test"))
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["overall_score"].is_u64());
    assert_eq!(json["metadata"]["engine_version"], "1.0");
    assert!(json["issues"][0]["type"].is_string());
    assert!(json["revenue_impact"]["estimated_monthly_loss"].is_u64());

    let grade = json["overall_grade"].as_str().unwrap();
    assert!(["A+", "A", "B", "C", "D", "F"].contains(&grade));
}

#[test]
fn test_bare_hostname_is_normalized() {
    let result = engine_with(thriving_store())
        .run(&AuditRequest::anonymous("thriving.test"))
        .unwrap();
    assert_eq!(result.store_url, "https://thriving.test/");
}
