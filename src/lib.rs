//! **Storefront audit engine for e-commerce sites.**
//!
//! `shop-audit` inspects an e-commerce storefront, scores what it finds and
//! prices the gaps. One run produces an [`AuditResult`] containing:
//!
//! - **Performance score**: Core Web Vitals (LCP, FID, CLS, TTI, Speed Index)
//!   bucketed against standard thresholds and blended into a 0-100 score.
//! - **Conversion score**: trust signals, mobile usability, link health,
//!   product page completeness and checkout quality, weighted together.
//! - **Revenue impact**: a heuristic estimate of monthly revenue lost to the
//!   detected problems, with a per-category breakdown and conversion-rate
//!   benchmarks.
//! - **Issues and recommendations**: threshold-rule findings sorted by
//!   revenue impact, each mapped to a prioritized fix playbook; quick fixes
//!   are surfaced separately as instant wins.
//!
//! ## Core Concepts & Modules
//!
//! - **[`engine`]**: [`AuditEngine`] orchestrates a run end to end and emits
//!   phase progress through a [`ProgressObserver`]. Probe failures never
//!   abort a run; failed sub-checks degrade to neutral defaults.
//! - **[`probe`]**: the [`StorefrontProbe`] trait is the data-fetch seam.
//!   [`HttpProbe`] fetches and inspects live storefronts (behind the `probe`
//!   feature); [`StaticProbe`] replays fixed signals for tests and offline
//!   runs.
//! - **[`scoring`]**: pure scorers for performance, conversion and revenue,
//!   plus the [`Grade`] scale.
//! - **[`model`]**: the result data model, serializable as JSON.
//!
//! ## Getting Started
//!
//! ```no_run
//! use shop_audit::{AuditConfig, AuditEngine, AuditRequest, HttpProbe};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AuditConfig::default();
//!     let probe = HttpProbe::new(config.probe_timeout)?;
//!     let engine = AuditEngine::new(config, Box::new(probe)).with_cache();
//!
//!     let result = engine.run(&AuditRequest::anonymous("https://example-store.com"))?;
//!     println!("{} ({})", result.overall_score, result.overall_grade);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: score and money math casts are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Signal structs legitimately use several bools for detected flags
    clippy::struct_excessive_bools,
    // self is kept for API consistency across the scorer types
    clippy::unused_self
)]

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod issues;
pub mod model;
pub mod probe;
pub mod recommend;
pub mod scoring;

// Re-export the primary public API at the crate root
pub use cache::{AuditCache, Clock, SystemClock};
pub use config::{AuditConfig, ConfigError, Validatable};
pub use engine::{
    normalize_store_url, AuditEngine, AuditPhase, AuditProgress, NoOpObserver, ProgressObserver,
};
pub use error::{AuditError, ProbeErrorKind, Result};
pub use issues::IssueGenerator;
pub use model::{
    AuditMetadata, AuditRequest, AuditResult, AuditType, CheckoutSnapshot, ConversionScore,
    Issue, IssueCategory, IssueType, LinkAudit, MobileSnapshot, PerformanceSample,
    PerformanceScore, ProductAudit, Recommendation, RevenueImpact, Severity, StorePlatform,
    TrustSignals,
};
#[cfg(feature = "probe")]
pub use probe::HttpProbe;
pub use probe::{StaticProbe, StorefrontProbe};
pub use recommend::RecommendationGenerator;
pub use scoring::{
    ConversionScorer, Grade, PerformanceScorer, RevenueCalculator, RevenueInputs, ENGINE_VERSION,
};
