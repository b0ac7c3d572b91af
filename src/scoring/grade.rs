//! Letter grades for 0-100 scores.

use serde::{Deserialize, Serialize};

/// Letter grade derived from a 0-100 score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Grade {
    /// Exceptional: 95-100
    #[serde(rename = "A+")]
    APlus,
    /// Excellent: 85-94
    A,
    /// Good: 70-84
    B,
    /// Fair: 50-69
    C,
    /// Poor: 30-49
    D,
    /// Failing: <30
    F,
}

impl Grade {
    /// Create a grade from a score. Total over all inputs: values outside
    /// [0, 100] are clamped before bucketing.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 100.0);
        if score >= 95.0 {
            Self::APlus
        } else if score >= 85.0 {
            Self::A
        } else if score >= 70.0 {
            Self::B
        } else if score >= 50.0 {
            Self::C
        } else if score >= 30.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Get the grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Get the grade description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::APlus => "Exceptional",
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}
