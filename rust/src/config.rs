//! Configuration types for graph analysis.

use thiserror::Error;

/// Errors raised by [`AnalysisConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Bottleneck threshold must be at least 1, got {0}")]
    InvalidBottleneckThreshold(usize),
}

/// Per-call configuration for the analysis components.
///
/// Passed into every call and never stored; the defaults reproduce the
/// standard behavior exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=detail, 3=trace.
    pub verbosity: u8,
    /// Minimum number of direct dependents for an item to count as a bottleneck.
    pub bottleneck_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            bottleneck_threshold: 2,
        }
    }
}

impl AnalysisConfig {
    /// Config with the given verbosity and default thresholds.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bottleneck_threshold == 0 {
            return Err(ConfigError::InvalidBottleneckThreshold(
                self.bottleneck_threshold,
            ));
        }
        Ok(())
    }
}
