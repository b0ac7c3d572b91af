//! shop-audit: Storefront performance and conversion audit tool
//!
//! Audits an e-commerce storefront and reports scores, estimated revenue
//! impact and prioritized fixes.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use shop_audit::{
    AuditConfig, AuditEngine, AuditProgress, AuditRequest, AuditResult, ProgressObserver,
    Severity, StaticProbe, StorefrontProbe,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full audit result as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "shop-audit")]
#[command(version)]
#[command(about = "Storefront performance and conversion audit tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Audit completed, no issues found
    1  Audit completed, issues detected
    2  Audit failed")]
struct Cli {
    /// Storefront URL to audit (scheme optional, https assumed)
    url: String,

    /// Assumed monthly visitor count for revenue estimates
    #[arg(long, env = "SHOP_AUDIT_TRAFFIC")]
    traffic: Option<u64>,

    /// Assumed average order value in dollars
    #[arg(long, env = "SHOP_AUDIT_AOV")]
    aov: Option<f64>,

    /// Per-request probe timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Skip network probing and audit a fixed reference storefront
    #[arg(long)]
    offline: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    output: OutputFormat,

    /// Show phase progress on stderr
    #[arg(long)]
    progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Observer printing phase transitions to stderr.
struct StderrProgress;

impl ProgressObserver for StderrProgress {
    fn on_progress(&self, progress: &AuditProgress) {
        eprintln!("[{:>3}%] {}", progress.progress, progress.message);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = AuditConfig {
        probe_timeout: Duration::from_secs(cli.timeout_secs),
        ..AuditConfig::default()
    };
    if let Some(traffic) = cli.traffic {
        config.monthly_traffic = traffic;
    }
    if let Some(aov) = cli.aov {
        config.average_order_value = aov;
    }

    let probe = build_probe(&config, cli.offline)?;
    let mut engine = AuditEngine::new(config, probe);
    if cli.progress {
        engine = engine.with_observer(Box::new(StderrProgress));
    }

    let result = match engine.run(&AuditRequest::anonymous(&cli.url)) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("audit failed: {err}");
            std::process::exit(2);
        }
    };

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Summary => print_summary(&result),
    }

    if !result.issues.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn build_probe(config: &AuditConfig, offline: bool) -> Result<Box<dyn StorefrontProbe>> {
    if offline {
        return Ok(Box::new(StaticProbe::default()));
    }
    #[cfg(feature = "probe")]
    {
        Ok(Box::new(shop_audit::HttpProbe::new(config.probe_timeout)?))
    }
    #[cfg(not(feature = "probe"))]
    {
        let _ = config;
        anyhow::bail!("built without the `probe` feature; rerun with --offline")
    }
}

fn print_summary(result: &AuditResult) {
    println!(
        "{} - {} ({})",
        result.store_url,
        result.overall_score,
        result.overall_grade
    );
    println!(
        "  performance {:>3} ({})   conversion {:>3} ({})",
        result.performance.score,
        result.performance.grade,
        result.conversion.score,
        result.conversion.grade
    );
    println!(
        "  estimated monthly loss ${}, recoverable ${}",
        result.revenue_impact.estimated_monthly_loss, result.revenue_impact.estimated_recovery
    );

    if result.issues.is_empty() {
        println!("  no issues found");
    } else {
        println!("\nIssues ({}):", result.issues.len());
        for issue in &result.issues {
            println!(
                "  [{}] {} (est. ${}/mo)",
                severity_label(issue.severity),
                issue.title,
                issue.revenue_impact
            );
        }
    }

    if !result.instant_wins.is_empty() {
        println!("\nInstant wins:");
        for win in &result.instant_wins {
            println!("  - {} (est. +${}/mo)", win.title, win.estimated_revenue_lift);
        }
    }

    if !result.recommendations.is_empty() {
        println!("\nTop recommendations:");
        for rec in result.recommendations.iter().take(5) {
            println!("  P{} {}", rec.priority, rec.title);
        }
    }
}

const fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "CRIT",
        Severity::High => "HIGH",
        Severity::Medium => "MED ",
        Severity::Low => "LOW ",
    }
}
