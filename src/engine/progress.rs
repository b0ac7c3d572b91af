//! Audit phases and the progress side channel.

use serde::{Deserialize, Serialize};

/// Fixed linear phases of an audit run. `Failed` is terminal and reachable
/// from any phase on an unhandled error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditPhase {
    Initializing,
    FetchingData,
    AnalyzingPerformance,
    AnalyzingConversion,
    CalculatingRevenue,
    GeneratingRecommendations,
    Completed,
    Failed,
}

impl AuditPhase {
    /// Nominal completion percentage when this phase begins.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        match self {
            Self::Initializing => 0,
            Self::FetchingData => 10,
            Self::AnalyzingPerformance => 35,
            Self::AnalyzingConversion => 55,
            Self::CalculatingRevenue => 70,
            Self::GeneratingRecommendations => 85,
            Self::Completed | Self::Failed => 100,
        }
    }

    /// Default human-readable status message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Initializing => "Preparing audit",
            Self::FetchingData => "Fetching storefront data",
            Self::AnalyzingPerformance => "Analyzing performance",
            Self::AnalyzingConversion => "Analyzing conversion readiness",
            Self::CalculatingRevenue => "Estimating revenue impact",
            Self::GeneratingRecommendations => "Generating recommendations",
            Self::Completed => "Audit complete",
            Self::Failed => "Audit failed",
        }
    }
}

/// One progress event. A notification side channel, not a control mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditProgress {
    /// Phase being entered
    pub phase: AuditPhase,
    /// Completion percentage 0-100
    pub progress: u8,
    /// Human-readable status
    pub message: String,
    /// Milliseconds since the run started
    pub elapsed_ms: u64,
}

/// Observer for audit progress events. Fire-and-forget: the engine never
/// consumes a return value and never blocks on the observer.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, progress: &AuditProgress);
}

/// Observer that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _progress: &AuditProgress) {}
}
