//! Configuration for the audit engine.
//!
//! All revenue-model assumptions live here rather than as scattered
//! constants: anonymous audits have no real traffic data, so the monthly
//! traffic figure is an explicit, caller-overridable placeholder that
//! materially changes every revenue-impact number.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default assumed monthly sessions for anonymous audits.
pub const DEFAULT_MONTHLY_TRAFFIC: u64 = 10_000;

/// Default assumed average order value in USD.
pub const DEFAULT_AVERAGE_ORDER_VALUE: f64 = 75.0;

/// Industry-average baseline conversion rate (percent).
pub const DEFAULT_BASELINE_CONVERSION: f64 = 2.5;

/// Top-performer benchmark conversion rate (percent).
pub const DEFAULT_TOP_PERFORMER_CONVERSION: f64 = 5.0;

/// Conservative fraction of estimated loss assumed recoverable.
pub const DEFAULT_RECOVERY_FRACTION: f64 = 0.7;

/// Tunable assumptions and limits for an [`crate::engine::AuditEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Assumed monthly sessions when no analytics data is available.
    pub monthly_traffic: u64,
    /// Assumed average order value in USD.
    pub average_order_value: f64,
    /// Industry-average conversion rate used as the modeling baseline (percent).
    pub baseline_conversion: f64,
    /// Benchmark conversion rate of top-performing stores (percent); caps the
    /// modeled potential rate.
    pub top_performer_conversion: f64,
    /// Fraction of the estimated monthly loss treated as recoverable.
    pub recovery_fraction: f64,
    /// Per-call timeout for storefront probe requests.
    #[serde(with = "duration_secs")]
    pub probe_timeout: Duration,
    /// Time-to-live for cached anonymous audit results.
    #[serde(with = "duration_secs")]
    pub cache_ttl: Duration,
    /// Maximum number of cached audit results before oldest-entry eviction.
    pub cache_capacity: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            monthly_traffic: DEFAULT_MONTHLY_TRAFFIC,
            average_order_value: DEFAULT_AVERAGE_ORDER_VALUE,
            baseline_conversion: DEFAULT_BASELINE_CONVERSION,
            top_performer_conversion: DEFAULT_TOP_PERFORMER_CONVERSION,
            recovery_fraction: DEFAULT_RECOVERY_FRACTION,
            probe_timeout: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(3600),
            cache_capacity: 128,
        }
    }
}

/// Serialize `Duration` fields as whole seconds.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AuditConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.monthly_traffic == 0 {
            errors.push(ConfigError {
                field: "monthly_traffic".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if self.average_order_value <= 0.0 {
            errors.push(ConfigError {
                field: "average_order_value".to_string(),
                message: format!("must be positive, got {}", self.average_order_value),
            });
        }

        if self.baseline_conversion <= 0.0 {
            errors.push(ConfigError {
                field: "baseline_conversion".to_string(),
                message: format!("must be positive, got {}", self.baseline_conversion),
            });
        }

        if self.top_performer_conversion < self.baseline_conversion {
            errors.push(ConfigError {
                field: "top_performer_conversion".to_string(),
                message: format!(
                    "must be at least the baseline ({}), got {}",
                    self.baseline_conversion, self.top_performer_conversion
                ),
            });
        }

        if !(0.0..=1.0).contains(&self.recovery_fraction) || self.recovery_fraction == 0.0 {
            errors.push(ConfigError {
                field: "recovery_fraction".to_string(),
                message: format!(
                    "must be within (0.0, 1.0], got {}",
                    self.recovery_fraction
                ),
            });
        }

        if self.probe_timeout.is_zero() {
            errors.push(ConfigError {
                field: "probe_timeout".to_string(),
                message: "must be non-zero".to_string(),
            });
        }

        if self.cache_capacity == 0 {
            errors.push(ConfigError {
                field: "cache_capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AuditConfig::default();
        assert!(config.is_valid(), "errors: {:?}", config.validate());
        assert_eq!(config.monthly_traffic, 10_000);
        assert_eq!(config.average_order_value, 75.0);
        assert_eq!(config.recovery_fraction, 0.7);
    }

    #[test]
    fn test_zero_traffic_rejected() {
        let config = AuditConfig {
            monthly_traffic: 0,
            ..AuditConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "monthly_traffic");
    }

    #[test]
    fn test_top_performer_below_baseline_rejected() {
        let config = AuditConfig {
            top_performer_conversion: 1.0,
            ..AuditConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_recovery_fraction_bounds() {
        for bad in [0.0, -0.5, 1.5] {
            let config = AuditConfig {
                recovery_fraction: bad,
                ..AuditConfig::default()
            };
            assert!(!config.is_valid(), "recovery_fraction {bad} should fail");
        }
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = AuditConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AuditConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.probe_timeout, config.probe_timeout);
        assert_eq!(back.monthly_traffic, config.monthly_traffic);
    }
}
